/*
 * Copyright (c) 2026.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Primitive 2D rasterization over palette indexed pixel buffers
//!
//! A [`Surface`] borrows anything implementing the [`Drawable`]
//! capability trait, [`Pal8Bitmap`](pal8_bmp::Pal8Bitmap) and the
//! header-less [`Canvas`] both do, and exposes pixels, lines,
//! rectangles, sprite blits with flip and integer scaling, and bitmap
//! font text.
//!
//! Every write funnels through a chain of [`PixelShader`]s before it
//! is committed, which is how transparency masking and palette effects
//! compose with all primitives. Drawing is best effort: out of range
//! geometry clips silently, nothing here returns an error.
//!
//! # Example
//! ```
//! use pal8_draw::{Canvas, MaskShader, Surface};
//!
//! let mut canvas = Canvas::new(8, 8);
//! let mut surface = Surface::new(&mut canvas);
//!
//! surface.line(0, 0, 7, 7, 2, &[]);
//! // color 2 is masked out, this pixel write is cancelled
//! surface.pixel(3, 0, 2, &[&MaskShader::new(2)]);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
extern crate alloc;

pub use crate::canvas::Canvas;
pub use crate::drawable::Drawable;
pub use crate::pixel::Pixel;
pub use crate::shader::{apply_chain, IndexShader, MaskShader, PixelShader};
pub use crate::surface::Surface;
pub use crate::text::FontSheet;

mod canvas;
mod drawable;
mod pixel;
mod shader;
mod surface;
mod text;
