/*
 * Copyright (c) 2026.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! A codec for a restricted, uncompressed, 8 bit palette indexed BMP
//! subset
//!
//! The format is deliberately narrow: a 54 byte header, a 256 entry
//! (B,G,R,A) palette and an uncompressed 8bpp pixel region stored
//! bottom row first. Anything else is rejected at decode time.
//!
//! The crate exposes
//! - [`Pal8Bitmap`], the in-memory buffer with palette and pixel
//!   accessors
//! - [`Pal8Decoder`] which validates and decodes raw bytes
//! - [`Pal8Encoder`] which re-serializes a bitmap byte for byte
//!   reproducibly
//!
//! # Example
//! ```
//! use pal8_bmp::{Pal8Bitmap, Pal8Decoder};
//! use pal8_core::color::Color;
//!
//! let mut bitmap = Pal8Bitmap::new(2, 2).unwrap();
//! bitmap.set_color(0, Color::opaque(255, 0, 0));
//! bitmap.set_pixel(0, 0, 0);
//!
//! let bytes = bitmap.encode();
//! let decoded = Pal8Decoder::new(&bytes).decode().unwrap();
//! assert_eq!(decoded.get_pixel(0, 0), Some(0));
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![macro_use]
extern crate alloc;

pub use crate::bitmap::Pal8Bitmap;
pub use crate::decoder::{probe_pal8, Pal8Decoder};
pub use crate::encoder::Pal8Encoder;
pub use crate::errors::Pal8Errors;

mod bitmap;
pub mod constants;
mod decoder;
mod encoder;
mod errors;
