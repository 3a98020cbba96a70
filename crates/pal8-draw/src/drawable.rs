/*
 * Copyright (c) 2026.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use pal8_bmp::Pal8Bitmap;

/// The capability set a [`Surface`](crate::Surface) needs from a pixel
/// store
///
/// Implementations are expected to be permissive: out of range reads
/// return `None`, out of range or out of palette writes return `false`
/// and leave the store untouched. The surface leans on that contract
/// instead of clipping geometry itself.
pub trait Drawable {
    fn width(&self) -> usize;

    fn height(&self) -> usize;

    /// Palette index at `(x, y)`, `None` when outside the image
    fn get_pixel(&self, x: i32, y: i32) -> Option<u8>;

    /// Write a palette index at `(x, y)`, returns whether anything was
    /// written
    fn set_pixel(&mut self, x: i32, y: i32, index: u8) -> bool;

    /// Bulk fill every pixel with `index`, bypassing palette checks
    fn clear_image(&mut self, index: u8);
}

impl Drawable for Pal8Bitmap {
    fn width(&self) -> usize {
        Pal8Bitmap::width(self)
    }

    fn height(&self) -> usize {
        Pal8Bitmap::height(self)
    }

    fn get_pixel(&self, x: i32, y: i32) -> Option<u8> {
        Pal8Bitmap::get_pixel(self, x, y)
    }

    fn set_pixel(&mut self, x: i32, y: i32, index: u8) -> bool {
        Pal8Bitmap::set_pixel(self, x, y, index)
    }

    fn clear_image(&mut self, index: u8) {
        Pal8Bitmap::clear(self, index);
    }
}
