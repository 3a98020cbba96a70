/*
 * Copyright (c) 2026.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use core::fmt::{Debug, Display, Formatter};

/// Possible errors that may occur during decoding or construction
///
/// All of them are terminal for the input at hand, there is no partial
/// recovery.
pub enum Pal8Errors {
    /// The input buffer doesn't have enough bytes to hold the header,
    /// palette and pixel region
    ///
    /// # Arguments
    /// - 1st argument is the number of bytes we expected
    /// - 2nd argument is the number of bytes actually present
    Truncated(usize, usize),
    /// The image does not start with the `BM` magic bytes, the
    /// argument carries what was found instead
    BadSignature(u16),
    /// The pixel-data-offset field does not point at byte 1078
    BadDataOffset(u32),
    /// Width or height is zero, negative, or does not fit the header
    /// fields
    InvalidDimensions(i64, i64),
    /// Bits per pixel is something other than 8
    UnsupportedDepth(u16),
    /// The compression field is something other than 0
    UnsupportedCompression(u32),
    /// A dimension exceeds the limit configured in `DecoderOptions`
    ///
    /// # Arguments
    /// - name of the offending dimension
    /// - the configured limit
    /// - the value found
    TooLargeDimensions(&'static str, usize, usize),
    /// Generic message that does not need heap allocation
    GenericStatic(&'static str)
}

impl Debug for Pal8Errors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            Pal8Errors::Truncated(expected, found) => {
                writeln!(
                    f,
                    "Truncated input, expected {expected} bytes but found {found}"
                )
            }
            Pal8Errors::BadSignature(magic) => {
                writeln!(
                    f,
                    "Bad signature, expected `BM` (0x424D) as image start but found {magic:#06X}"
                )
            }
            Pal8Errors::BadDataOffset(offset) => {
                writeln!(f, "Bad pixel data offset {offset}, expected 1078")
            }
            Pal8Errors::InvalidDimensions(width, height) => {
                writeln!(f, "Invalid dimensions {width}x{height}, both must be > 0")
            }
            Pal8Errors::UnsupportedDepth(depth) => {
                writeln!(f, "Unsupported depth {depth} bits per pixel, expected 8")
            }
            Pal8Errors::UnsupportedCompression(compression) => {
                writeln!(
                    f,
                    "Unsupported compression scheme {compression}, expected 0 (uncompressed)"
                )
            }
            Pal8Errors::TooLargeDimensions(dimension, expected, found) => {
                writeln!(
                    f,
                    "Too large dimensions for {dimension}, {found} exceeds {expected}"
                )
            }
            Pal8Errors::GenericStatic(message) => {
                writeln!(f, "{message}")
            }
        }
    }
}

impl Display for Pal8Errors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "{self:?}")
    }
}

impl From<&'static str> for Pal8Errors {
    fn from(message: &'static str) -> Self {
        Self::GenericStatic(message)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Pal8Errors {}
