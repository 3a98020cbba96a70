/*
 * Copyright (c) 2026.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use alloc::vec::Vec;

use crate::Drawable;

/// A header-less, top-down pixel grid
///
/// Useful as a sprite sheet or scratch target when the on-disk layout
/// of [`Pal8Bitmap`](pal8_bmp::Pal8Bitmap) is not needed. Rows are
/// stored in natural top-down order.
#[derive(Clone)]
pub struct Canvas {
    data:          Vec<u8>,
    width:         usize,
    height:        usize,
    palette_limit: usize
}

impl Canvas {
    /// A zero filled canvas addressing the full 256 entry palette
    pub fn new(width: usize, height: usize) -> Canvas {
        Canvas {
            data: alloc::vec![0; width * height],
            width,
            height,
            palette_limit: 256
        }
    }

    /// A canvas whose pixels may only hold indices below `limit`
    pub fn with_palette_limit(width: usize, height: usize, limit: usize) -> Canvas {
        Canvas {
            palette_limit: limit.clamp(1, 256),
            ..Canvas::new(width, height)
        }
    }

    /// Wrap existing row-major top-down pixel data, `None` when the
    /// length does not match the dimensions
    pub fn from_pixels(width: usize, height: usize, data: Vec<u8>) -> Option<Canvas> {
        if data.len() != width * height {
            return None;
        }
        Some(Canvas {
            data,
            width,
            height,
            palette_limit: 256
        })
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }
}

impl Drawable for Canvas {
    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }

    fn get_pixel(&self, x: i32, y: i32) -> Option<u8> {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return None;
        }
        Some(self.data[y as usize * self.width + x as usize])
    }

    fn set_pixel(&mut self, x: i32, y: i32, index: u8) -> bool {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return false;
        }
        if usize::from(index) >= self.palette_limit {
            return false;
        }
        self.data[y as usize * self.width + x as usize] = index;

        true
    }

    fn clear_image(&mut self, index: u8) {
        self.data.fill(index);
    }
}
