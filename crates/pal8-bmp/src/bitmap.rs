/*
 * Copyright (c) 2026.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use alloc::vec::Vec;

use pal8_core::color::Color;

use crate::constants::{HEADER_SIZE, HEADER_TEMPLATE, PALETTE_ENTRIES, PIXEL_OFFSET};
use crate::encoder::Pal8Encoder;
use crate::Pal8Errors;

/// An 8 bit palette indexed bitmap
///
/// The bitmap owns a single byte buffer laid out exactly as the on-disk
/// format: 54 header bytes, a 256 entry (B,G,R,A) palette and the pixel
/// region. Palette and pixel accessors write straight into that buffer,
/// there are no side allocations.
///
/// Pixel rows are stored bottom row first, mirroring the disk format.
/// Every accessor takes logical top-down coordinates and performs the
/// inversion internally.
#[derive(Debug)]
pub struct Pal8Bitmap {
    data:          Vec<u8>,
    width:         usize,
    height:        usize,
    /// Number of palette entries that may be referenced by pixels.
    /// The disk region always holds 256 entries regardless.
    palette_limit: usize
}

impl Pal8Bitmap {
    /// Create a bitmap with a zero filled pixel region and an all zero
    /// palette
    ///
    /// Returns [`Pal8Errors::InvalidDimensions`] if either dimension
    /// is zero or too large for the header fields
    pub fn new(width: usize, height: usize) -> Result<Pal8Bitmap, Pal8Errors> {
        Pal8Bitmap::with_palette(width, height, &[])
    }

    /// Create a bitmap and fill the leading palette entries from
    /// `colors`
    pub fn with_palette(
        width: usize, height: usize, colors: &[Color]
    ) -> Result<Pal8Bitmap, Pal8Errors> {
        let mut bitmap = Pal8Bitmap::allocate(width, height, PALETTE_ENTRIES)?;
        bitmap.set_palette(colors);

        Ok(bitmap)
    }

    /// Create a bitmap whose pixels may only reference the first
    /// `limit` palette entries
    ///
    /// `limit` is clamped to the 256 entries the disk format carries.
    pub fn with_palette_limit(
        width: usize, height: usize, limit: usize
    ) -> Result<Pal8Bitmap, Pal8Errors> {
        Pal8Bitmap::allocate(width, height, limit.clamp(1, PALETTE_ENTRIES))
    }

    fn allocate(
        width: usize, height: usize, palette_limit: usize
    ) -> Result<Pal8Bitmap, Pal8Errors> {
        if width == 0 || height == 0 || width > u32::MAX as usize || height > u32::MAX as usize {
            return Err(Pal8Errors::InvalidDimensions(width as i64, height as i64));
        }
        let total_size = width
            .checked_mul(height)
            .and_then(|count| count.checked_add(PIXEL_OFFSET))
            .ok_or(Pal8Errors::InvalidDimensions(width as i64, height as i64))?;

        if total_size > u32::MAX as usize {
            // the total-file-size header field could not represent it
            return Err(Pal8Errors::InvalidDimensions(width as i64, height as i64));
        }

        let mut data = alloc::vec![0_u8; total_size];

        data[..HEADER_SIZE].copy_from_slice(&HEADER_TEMPLATE);
        data[2..6].copy_from_slice(&(total_size as u32).to_le_bytes());
        data[18..22].copy_from_slice(&(width as u32).to_le_bytes());
        data[22..26].copy_from_slice(&(height as u32).to_le_bytes());

        Ok(Pal8Bitmap {
            data,
            width,
            height,
            palette_limit
        })
    }

    pub const fn width(&self) -> usize {
        self.width
    }

    pub const fn height(&self) -> usize {
        self.height
    }

    /// Number of palette entries pixels may reference
    pub const fn palette_limit(&self) -> usize {
        self.palette_limit
    }

    /// The full backing buffer, headers and palette included
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub(crate) fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// True if `(x, y)` lies inside the image
    pub fn within_image(&self, x: i32, y: i32) -> bool {
        x >= 0 && (x as usize) < self.width && y >= 0 && (y as usize) < self.height
    }

    /// True if `index` is a valid palette reference for this bitmap
    pub fn within_palette(&self, index: usize) -> bool {
        index < self.palette_limit
    }

    /// Overwrite a palette entry, returns false without touching the
    /// buffer when the index is out of range
    pub fn set_color(&mut self, index: usize, color: Color) -> bool {
        if !self.within_palette(index) {
            return false;
        }
        let offset = HEADER_SIZE + index * 4;

        // disk order is (B,G,R,A)
        self.data[offset..offset + 4].copy_from_slice(&[color.b, color.g, color.r, color.a]);

        true
    }

    /// Read back a palette entry, out of range indices yield
    /// transparent black
    pub fn get_color(&self, index: usize) -> Color {
        if !self.within_palette(index) {
            return Color::TRANSPARENT;
        }
        let offset = HEADER_SIZE + index * 4;
        let [b, g, r, a] = [
            self.data[offset],
            self.data[offset + 1],
            self.data[offset + 2],
            self.data[offset + 3]
        ];

        Color::new(r, g, b, a)
    }

    /// Apply `set_color` for each entry at its positional index
    ///
    /// Returns false if any individual write was rejected, i.e. when
    /// more colors were supplied than the palette can hold.
    pub fn set_palette(&mut self, colors: &[Color]) -> bool {
        let mut ok = true;

        for (index, color) in colors.iter().enumerate() {
            if !self.set_color(index, *color) {
                ok = false;
                break;
            }
        }
        ok
    }

    /// Materialize every referenceable palette entry
    pub fn get_palette(&self) -> Vec<Color> {
        (0..self.palette_limit)
            .map(|index| self.get_color(index))
            .collect()
    }

    // row inversion lives here and in `pixel_offset` only
    fn pixel_offset(&self, x: usize, y: usize) -> usize {
        PIXEL_OFFSET + self.width * (self.height - 1 - y) + x
    }

    /// Write one pixel, returns false without touching the buffer when
    /// the position or the palette index is out of range
    pub fn set_pixel(&mut self, x: i32, y: i32, index: u8) -> bool {
        if !self.within_image(x, y) || !self.within_palette(usize::from(index)) {
            return false;
        }
        let offset = self.pixel_offset(x as usize, y as usize);
        self.data[offset] = index;

        true
    }

    /// Read one pixel, `None` for out of range positions
    pub fn get_pixel(&self, x: i32, y: i32) -> Option<u8> {
        if !self.within_image(x, y) {
            return None;
        }
        Some(self.data[self.pixel_offset(x as usize, y as usize)])
    }

    /// Palette color of the pixel at `(x, y)`, transparent black for
    /// out of range positions or indices
    pub fn pixel_color(&self, x: i32, y: i32) -> Color {
        match self.get_pixel(x, y) {
            Some(index) => self.get_color(usize::from(index)),
            None => Color::TRANSPARENT
        }
    }

    /// Fill the entire pixel region with `index`
    ///
    /// The index is written as-is, it is not checked against the
    /// palette limit. Reading such pixels back as colors yields
    /// transparent black.
    pub fn clear(&mut self, index: u8) {
        self.data[PIXEL_OFFSET..].fill(index);
    }

    /// Materialize the image as RGBA bytes in natural top-down order
    ///
    /// A pixel whose index equals `transparent` leaves its texel at
    /// zero. The alpha byte of every other texel is forced to 255
    /// regardless of the palette's stored alpha so the result is
    /// always visible on a display.
    pub fn to_rgba(&self, transparent: Option<u8>) -> Vec<u8> {
        let mut out = alloc::vec![0_u8; self.width * self.height * 4];

        for y in 0..self.height {
            for x in 0..self.width {
                let index = self.data[self.pixel_offset(x, y)];

                if Some(index) == transparent {
                    continue;
                }
                let color = self.get_color(usize::from(index));
                let texel = (y * self.width + x) * 4;

                out[texel..texel + 4].copy_from_slice(&[color.r, color.g, color.b, 255]);
            }
        }
        out
    }

    /// Serialize to the on-disk format, see [`Pal8Encoder`]
    pub fn encode(&self) -> Vec<u8> {
        Pal8Encoder::new(self).encode()
    }
}

#[cfg(test)]
mod tests {
    use pal8_core::color::Color;

    use super::Pal8Bitmap;
    use crate::constants::PIXEL_OFFSET;

    #[test]
    fn rejects_zero_dimensions() {
        assert!(Pal8Bitmap::new(0, 10).is_err());
        assert!(Pal8Bitmap::new(10, 0).is_err());
    }

    #[test]
    fn out_of_image_accesses_are_inert() {
        let mut bitmap = Pal8Bitmap::new(4, 3).unwrap();
        let before = bitmap.data().to_vec();

        for (x, y) in [(-1, 0), (0, -1), (4, 0), (0, 3), (100, 100)] {
            assert_eq!(bitmap.get_pixel(x, y), None);
            assert!(!bitmap.set_pixel(x, y, 1));
        }
        assert_eq!(bitmap.data(), &before[..]);
    }

    #[test]
    fn out_of_palette_accesses_are_inert() {
        let mut bitmap = Pal8Bitmap::with_palette_limit(2, 2, 16).unwrap();
        let before = bitmap.data().to_vec();

        assert_eq!(bitmap.get_color(16), Color::TRANSPARENT);
        assert!(!bitmap.set_color(16, Color::opaque(1, 2, 3)));
        assert!(!bitmap.set_pixel(0, 0, 16));
        assert_eq!(bitmap.data(), &before[..]);
    }

    #[test]
    fn rows_are_stored_bottom_up() {
        let mut bitmap = Pal8Bitmap::new(3, 2).unwrap();

        // logical top-left lands in the *last* stored row
        assert!(bitmap.set_pixel(0, 0, 7));
        let pixels = &bitmap.data()[PIXEL_OFFSET..];
        assert_eq!(pixels[3], 7);

        // logical bottom-left lands in the first stored row
        assert!(bitmap.set_pixel(0, 1, 9));
        let pixels = &bitmap.data()[PIXEL_OFFSET..];
        assert_eq!(pixels[0], 9);
    }

    #[test]
    fn palette_roundtrips_through_disk_order() {
        let mut bitmap = Pal8Bitmap::new(1, 1).unwrap();
        let color = Color::new(1, 2, 3, 4);

        assert!(bitmap.set_color(5, color));
        assert_eq!(bitmap.get_color(5), color);
        // stored as B,G,R,A on disk
        let entry_offset = 54 + 5 * 4;
        assert_eq!(&bitmap.data()[entry_offset..entry_offset + 4], &[3, 2, 1, 4]);
    }

    #[test]
    fn oversized_palette_reports_failure() {
        let mut bitmap = Pal8Bitmap::with_palette_limit(1, 1, 2).unwrap();
        let colors = [Color::opaque(1, 1, 1); 3];

        assert!(!bitmap.set_palette(&colors));
        // the in-range entries were still written
        assert_eq!(bitmap.get_color(1), Color::opaque(1, 1, 1));
    }

    #[test]
    fn clear_is_idempotent() {
        let mut bitmap = Pal8Bitmap::new(5, 4).unwrap();

        bitmap.clear(3);
        let once = bitmap.data().to_vec();
        bitmap.clear(3);
        assert_eq!(bitmap.data(), &once[..]);
    }

    #[test]
    fn to_rgba_is_top_down_with_forced_alpha() {
        let mut bitmap =
            Pal8Bitmap::with_palette(2, 2, &[Color::new(10, 20, 30, 0), Color::new(40, 50, 60, 7)])
                .unwrap();

        bitmap.set_pixel(0, 0, 1);
        // remaining pixels stay at index 0

        let rgba = bitmap.to_rgba(None);
        // top-left first, alpha forced to opaque despite the palette
        assert_eq!(&rgba[0..4], &[40, 50, 60, 255]);
        assert_eq!(&rgba[4..8], &[10, 20, 30, 255]);
    }

    #[test]
    fn to_rgba_honors_transparent_index() {
        let mut bitmap =
            Pal8Bitmap::with_palette(1, 1, &[Color::opaque(200, 100, 50)]).unwrap();
        bitmap.set_pixel(0, 0, 0);

        let rgba = bitmap.to_rgba(Some(0));
        assert_eq!(&rgba[0..4], &[0, 0, 0, 0]);
    }
}
