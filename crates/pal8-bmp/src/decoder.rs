/*
 * Copyright (c) 2026.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use pal8_core::bytestream::ByteReader;
use pal8_core::log::{info, warn};
use pal8_core::options::DecoderOptions;

use crate::constants::{HEADER_SIZE, MAGIC, PIXEL_OFFSET};
use crate::{Pal8Bitmap, Pal8Errors};

/// Probe some bytes to see if they could be a pal8 image
///
/// Checks the magic and the fixed info header size, nothing more.
pub fn probe_pal8(bytes: &[u8]) -> bool {
    if let Some(magic_bytes) = bytes.get(0..2) {
        if magic_bytes == b"BM" {
            // skip file_size   -> 4
            // skip reserved    -> 4
            // skip data offset -> 4
            // read info header size
            if let Some(sz) = bytes.get(14) {
                return *sz == 40;
            }
        }
    }
    false
}

/// Decoder for the pal8 BMP subset
///
/// Validation is all or nothing: the input either matches the narrow
/// format exactly or decoding fails with a [`Pal8Errors`] naming the
/// first violation. Header bytes are never trusted beyond the fields
/// needed for validation and allocation, the canonical header is
/// regenerated on the decoded bitmap.
///
/// # Example
/// ```
/// use pal8_bmp::{Pal8Bitmap, Pal8Decoder};
///
/// let bytes = Pal8Bitmap::new(4, 4).unwrap().encode();
/// let bitmap = Pal8Decoder::new(&bytes).decode().unwrap();
/// assert_eq!((bitmap.width(), bitmap.height()), (4, 4));
/// ```
pub struct Pal8Decoder<'a> {
    bytes:           ByteReader<'a>,
    options:         DecoderOptions,
    width:           usize,
    height:          usize,
    decoded_headers: bool
}

impl<'a> Pal8Decoder<'a> {
    pub fn new(data: &'a [u8]) -> Pal8Decoder<'a> {
        Pal8Decoder::new_with_options(data, DecoderOptions::default())
    }

    pub fn new_with_options(data: &'a [u8], options: DecoderOptions) -> Pal8Decoder<'a> {
        Pal8Decoder {
            bytes: ByteReader::new(data),
            options,
            width: 0,
            height: 0,
            decoded_headers: false
        }
    }

    /// Decode and validate the header and palette region without
    /// touching pixels
    pub fn decode_headers(&mut self) -> Result<(), Pal8Errors> {
        if self.decoded_headers {
            return Ok(());
        }
        if !self.bytes.has(PIXEL_OFFSET) {
            return Err(Pal8Errors::Truncated(PIXEL_OFFSET, self.bytes.len()));
        }

        let magic = self.bytes.get_u16_be_err()?;

        if magic != MAGIC {
            return Err(Pal8Errors::BadSignature(magic));
        }
        // total file size + reserved bytes carry no information we
        // would trust, the real length check is against the buffer
        self.bytes.skip(8);

        let data_offset = self.bytes.get_u32_le_err()?;

        if data_offset != PIXEL_OFFSET as u32 {
            return Err(Pal8Errors::BadDataOffset(data_offset));
        }
        // info header size, fixed at 40 and regenerated on encode
        self.bytes.skip(4);

        let width = self.bytes.get_u32_le_err()? as i32;
        let height = self.bytes.get_u32_le_err()? as i32;

        if width <= 0 || height <= 0 {
            return Err(Pal8Errors::InvalidDimensions(
                i64::from(width),
                i64::from(height)
            ));
        }
        let (width, height) = (width as usize, height as usize);

        if width > self.options.get_max_width() {
            return Err(Pal8Errors::TooLargeDimensions(
                "width",
                self.options.get_max_width(),
                width
            ));
        }
        if height > self.options.get_max_height() {
            return Err(Pal8Errors::TooLargeDimensions(
                "height",
                self.options.get_max_height(),
                height
            ));
        }

        info!("Width: {}", width);
        info!("Height: {}", height);

        // color planes
        self.bytes.skip(2);

        let depth = self.bytes.get_u16_le_err()?;

        if depth != 8 {
            return Err(Pal8Errors::UnsupportedDepth(depth));
        }

        let compression = self.bytes.get_u32_le_err()?;

        if compression != 0 {
            return Err(Pal8Errors::UnsupportedCompression(compression));
        }

        self.width = width;
        self.height = height;
        self.decoded_headers = true;

        Ok(())
    }

    /// Image dimensions as `(width, height)`, present after the
    /// headers have been decoded
    pub fn dimensions(&self) -> Option<(usize, usize)> {
        if !self.decoded_headers {
            return None;
        }
        Some((self.width, self.height))
    }

    /// Decode the input into a fresh [`Pal8Bitmap`]
    ///
    /// The palette and pixel regions are copied verbatim, the header
    /// is rebuilt canonically from the validated dimensions.
    pub fn decode(&mut self) -> Result<Pal8Bitmap, Pal8Errors> {
        self.decode_headers()?;

        let mut bitmap = Pal8Bitmap::new(self.width, self.height)?;

        self.bytes.set_position(HEADER_SIZE);

        let source = self.bytes.remaining_bytes();
        let region = &mut bitmap.data_mut()[HEADER_SIZE..];

        if source.len() >= region.len() {
            region.copy_from_slice(&source[..region.len()]);
        } else if self.options.get_confirm_pixel_region() {
            return Err(Pal8Errors::Truncated(
                PIXEL_OFFSET + self.width * self.height,
                self.bytes.len()
            ));
        } else {
            warn!(
                "Pixel region is {} bytes short, zero filling",
                region.len() - source.len()
            );
            region[..source.len()].copy_from_slice(source);
        }

        Ok(bitmap)
    }
}
