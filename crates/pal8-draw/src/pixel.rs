/*
 * Copyright (c) 2026.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

/// A candidate pixel travelling through the shader chain
///
/// `color: None` is the universal "no pixel" value: it is what reads
/// outside the image produce and what a shader returns to cancel a
/// write. The commit at the end of the chain simply skips `None`.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Pixel {
    pub x:     i32,
    pub y:     i32,
    pub color: Option<u8>
}

impl Pixel {
    pub const fn new(x: i32, y: i32, color: Option<u8>) -> Pixel {
        Pixel { x, y, color }
    }

    /// A pixel carrying no color, drawing it is a no-op
    pub const fn empty(x: i32, y: i32) -> Pixel {
        Pixel { x, y, color: None }
    }

    /// This pixel with its color replaced
    pub const fn with_color(self, color: Option<u8>) -> Pixel {
        Pixel { color, ..self }
    }
}
