/*
 * Copyright (c) 2026.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use alloc::vec::Vec;

use pal8_core::bytestream::ByteWriter;

use crate::constants::{
    HEADER_SIZE, INFO_HEADER_SIZE, PALETTE_ENTRIES, PIXEL_OFFSET, RESOLUTION_PPM
};
use crate::Pal8Bitmap;

/// Encoder for the pal8 BMP subset
///
/// Serialization is infallible: a [`Pal8Bitmap`] is valid by
/// construction and its palette and pixel regions are already in disk
/// layout. The 54 header bytes are always written canonically from the
/// bitmap's dimensions, so the output is byte for byte reproducible.
///
/// The round-trip law holds: decoding an encoded bitmap reproduces its
/// width, height, palette and pixel contents exactly.
pub struct Pal8Encoder<'a> {
    bitmap: &'a Pal8Bitmap
}

impl<'a> Pal8Encoder<'a> {
    pub const fn new(bitmap: &'a Pal8Bitmap) -> Pal8Encoder<'a> {
        Pal8Encoder { bitmap }
    }

    /// Number of bytes `encode` will produce
    pub fn out_size(&self) -> usize {
        PIXEL_OFFSET + self.bitmap.width() * self.bitmap.height()
    }

    /// Encode the bitmap into a freshly allocated buffer
    pub fn encode(&self) -> Vec<u8> {
        let total_size = self.out_size();
        let mut out = alloc::vec![0_u8; total_size];

        let mut stream = ByteWriter::new(&mut out);

        // file header
        stream.write_const_bytes(b"BM");
        stream.write_u32_le(total_size as u32);
        stream.write_u32_le(0); // reserved
        stream.write_u32_le(PIXEL_OFFSET as u32);

        // info header
        stream.write_u32_le(INFO_HEADER_SIZE as u32);
        stream.write_u32_le(self.bitmap.width() as u32);
        stream.write_u32_le(self.bitmap.height() as u32);
        stream.write_u16_le(1); // color planes
        stream.write_u16_le(8); // bits per pixel
        stream.write_u32_le(0); // compression
        stream.write_u32_le(0); // compressed size
        stream.write_u32_le(RESOLUTION_PPM);
        stream.write_u32_le(RESOLUTION_PPM);
        stream.write_u32_le(PALETTE_ENTRIES as u32);
        stream.write_u32_le(PALETTE_ENTRIES as u32);

        debug_assert_eq!(stream.position(), HEADER_SIZE);

        // palette and pixel regions are kept in disk layout, bottom-up
        // row order included, copy them through
        stream.write_const_bytes(&self.bitmap.data()[HEADER_SIZE..]);

        debug_assert_eq!(stream.bytes_left(), 0);

        out
    }
}

#[cfg(test)]
mod tests {
    use super::Pal8Encoder;
    use crate::Pal8Bitmap;

    #[test]
    fn header_fields_are_canonical() {
        let bitmap = Pal8Bitmap::new(3, 5).unwrap();
        let bytes = Pal8Encoder::new(&bitmap).encode();

        assert_eq!(bytes.len(), 1078 + 15);
        assert_eq!(&bytes[0..2], b"BM");
        assert_eq!(u32::from_le_bytes(bytes[2..6].try_into().unwrap()), 1093);
        assert_eq!(u32::from_le_bytes(bytes[10..14].try_into().unwrap()), 1078);
        assert_eq!(u32::from_le_bytes(bytes[14..18].try_into().unwrap()), 40);
        assert_eq!(u32::from_le_bytes(bytes[18..22].try_into().unwrap()), 3);
        assert_eq!(u32::from_le_bytes(bytes[22..26].try_into().unwrap()), 5);
        assert_eq!(u16::from_le_bytes(bytes[26..28].try_into().unwrap()), 1);
        assert_eq!(u16::from_le_bytes(bytes[28..30].try_into().unwrap()), 8);
        assert_eq!(u32::from_le_bytes(bytes[30..34].try_into().unwrap()), 0);
        assert_eq!(u32::from_le_bytes(bytes[38..42].try_into().unwrap()), 2834);
        assert_eq!(u32::from_le_bytes(bytes[46..50].try_into().unwrap()), 256);
    }

    #[test]
    fn encoding_is_reproducible() {
        let mut bitmap = Pal8Bitmap::new(4, 4).unwrap();
        bitmap.set_pixel(1, 2, 0);

        assert_eq!(bitmap.encode(), bitmap.encode());
    }
}
