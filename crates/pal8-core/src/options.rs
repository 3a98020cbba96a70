/*
 * Copyright (c) 2026.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Decoder configuration
//!
//! Header validation is never optional, the flags here only control
//! behaviour that has a sane permissive fallback.

use bitflags::bitflags;

fn decoder_strict_mode() -> DecoderFlags {
    let mut flags = DecoderFlags::empty();

    flags.set(DecoderFlags::CONFIRM_PIXEL_REGION, true);

    flags
}

bitflags! {
    /// Decoder options that are flags
    ///
    /// NOTE: When you extend this, add true or false to
    /// all options above that return a `DecoderFlags`
    #[derive(Copy, Clone, Debug, Eq, PartialEq)]
    pub struct DecoderFlags: u32 {
        /// Whether the decoder should error out when the pixel region
        /// is shorter than `width * height` bytes. When unset the
        /// missing tail is zero filled instead.
        const CONFIRM_PIXEL_REGION = 0b0000_0001;
    }
}

/// Decoder options
///
/// Limits and strictness knobs respected by the decoder
#[derive(Debug, Copy, Clone)]
pub struct DecoderOptions {
    /// Maximum width for which the decoder will
    /// not try to decode images larger than
    /// the specified width.
    ///
    /// - Default value: 16384
    max_width:  usize,
    /// Maximum height for which the decoder will not
    /// try to decode images larger than the
    /// specified height
    ///
    /// - Default value: 16384
    max_height: usize,

    flags: DecoderFlags
}

impl DecoderOptions {
    /// Create options with every strictness flag enabled
    ///
    /// This is the same as `default`, malformed input is rejected
    /// rather than patched up.
    pub fn new_strict() -> DecoderOptions {
        DecoderOptions::default()
    }

    /// Create options which recover what they can from a damaged
    /// pixel region instead of erroring out
    pub fn new_permissive() -> DecoderOptions {
        DecoderOptions::default().set_decoder_flags(DecoderFlags::empty())
    }

    /// Get maximum width configured for the decoder
    pub const fn get_max_width(&self) -> usize {
        self.max_width
    }

    /// Get maximum height configured for the decoder
    pub const fn get_max_height(&self) -> usize {
        self.max_height
    }

    /// Whether a short pixel region is an error
    pub const fn get_confirm_pixel_region(&self) -> bool {
        self.flags.contains(DecoderFlags::CONFIRM_PIXEL_REGION)
    }

    /// Set maximum width for which the decoder should not try
    /// decoding images greater than that width
    pub fn set_max_width(mut self, width: usize) -> Self {
        self.max_width = width;
        self
    }

    /// Set maximum height for which the decoder should not try
    /// decoding images greater than that height
    pub fn set_max_height(mut self, height: usize) -> Self {
        self.max_height = height;
        self
    }

    /// Set whether a short pixel region is an error
    pub fn set_confirm_pixel_region(mut self, yes: bool) -> Self {
        self.flags.set(DecoderFlags::CONFIRM_PIXEL_REGION, yes);
        self
    }

    fn set_decoder_flags(mut self, flags: DecoderFlags) -> Self {
        self.flags = flags;
        self
    }
}

impl Default for DecoderOptions {
    fn default() -> Self {
        Self {
            max_width:  1 << 14,
            max_height: 1 << 14,
            flags:      decoder_strict_mode()
        }
    }
}
