/*
 * Copyright (c) 2026.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! A four channel RGBA color value
//!
//! Palette entries are stored on disk in (B,G,R,A) order, this struct
//! always carries the logical (R,G,B,A) order, the codec swizzles at
//! the disk boundary.

/// A single RGBA color, one byte per channel
#[derive(Copy, Clone, Default, Debug, Eq, PartialEq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8
}

impl Color {
    /// Fully transparent black, also what out of range palette reads
    /// produce
    pub const TRANSPARENT: Color = Color::new(0, 0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Color {
        Color { r, g, b, a }
    }

    /// A color with the alpha channel set to fully opaque
    pub const fn opaque(r: u8, g: u8, b: u8) -> Color {
        Color { r, g, b, a: 255 }
    }
}
