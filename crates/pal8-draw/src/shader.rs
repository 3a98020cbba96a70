/*
 * Copyright (c) 2026.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use crate::Pixel;

/// A pure transform applied to a pixel before it is committed
///
/// `previous` is what the write was about to replace, `next` the value
/// it is about to become. A shader may hold configuration state (a
/// mask index for example) but must not depend on mutable external
/// state: calling `apply` twice with the same inputs must produce the
/// same output.
///
/// Closures of the shape `Fn(Pixel, Pixel) -> Pixel` implement this
/// trait directly.
pub trait PixelShader {
    fn apply(&self, previous: Pixel, next: Pixel) -> Pixel;
}

impl<F> PixelShader for F
where
    F: Fn(Pixel, Pixel) -> Pixel
{
    fn apply(&self, previous: Pixel, next: Pixel) -> Pixel {
        self(previous, next)
    }
}

/// The canonical transparency shader
///
/// Cancels any write whose candidate color equals the mask index,
/// everything else passes through untouched.
pub struct MaskShader {
    mask: u8
}

impl MaskShader {
    pub const fn new(mask: u8) -> MaskShader {
        MaskShader { mask }
    }
}

impl PixelShader for MaskShader {
    fn apply(&self, _previous: Pixel, next: Pixel) -> Pixel {
        if next.color == Some(self.mask) {
            next.with_color(None)
        } else {
            next
        }
    }
}

/// Adapter for shaders that only care about color indices
///
/// Wraps a `Fn(Option<u8>, Option<u8>) -> Option<u8>` over
/// `(previous, next)` indices and leaves the position untouched.
pub struct IndexShader<F> {
    inner: F
}

impl<F> IndexShader<F>
where
    F: Fn(Option<u8>, Option<u8>) -> Option<u8>
{
    pub const fn new(inner: F) -> IndexShader<F> {
        IndexShader { inner }
    }
}

impl<F> PixelShader for IndexShader<F>
where
    F: Fn(Option<u8>, Option<u8>) -> Option<u8>
{
    fn apply(&self, previous: Pixel, next: Pixel) -> Pixel {
        next.with_color((self.inner)(previous.color, next.color))
    }
}

/// Run a shader chain over a candidate pixel
///
/// Shaders run in list order. Each shader's output becomes the next
/// shader's `next` input, while the `previous` handed to a shader is
/// the value `next` held *before* the preceding shader ran. This
/// rolling pair lets later shaders react to what earlier shaders
/// decided.
pub fn apply_chain(shaders: &[&dyn PixelShader], previous: Pixel, candidate: Pixel) -> Pixel {
    let mut previous = previous;
    let mut result = candidate;

    for shader in shaders {
        let before = result;

        result = shader.apply(previous, before);
        previous = before;
    }
    result
}

#[cfg(test)]
mod tests {
    use super::{apply_chain, IndexShader, MaskShader, PixelShader};
    use crate::Pixel;

    #[test]
    fn mask_cancels_matching_candidates() {
        let shader = MaskShader::new(7);

        let hit = shader.apply(Pixel::empty(0, 0), Pixel::new(0, 0, Some(7)));
        assert_eq!(hit.color, None);

        let miss = shader.apply(Pixel::empty(0, 0), Pixel::new(0, 0, Some(8)));
        assert_eq!(miss.color, Some(8));
    }

    #[test]
    fn apply_is_repeatable() {
        let shader = MaskShader::new(3);
        let previous = Pixel::new(1, 2, Some(5));
        let next = Pixel::new(1, 2, Some(3));

        assert_eq!(shader.apply(previous, next), shader.apply(previous, next));
    }

    #[test]
    fn chain_rolls_the_previous_value() {
        // first shader bumps the candidate, second echoes what it was
        // handed as "previous". Under the rolling contract that is the
        // candidate as it stood *before* the bump, not the buffer
        // value the chain started from.
        let bump = IndexShader::new(|_previous, next: Option<u8>| next.map(|c| c + 1));
        let echo_previous = |previous: Pixel, next: Pixel| next.with_color(previous.color);

        let out = apply_chain(
            &[&bump, &echo_previous],
            Pixel::new(0, 0, Some(42)), // buffer value
            Pixel::new(0, 0, Some(10))  // candidate
        );

        assert_eq!(out.color, Some(10));
    }

    #[test]
    fn empty_chain_is_identity() {
        let candidate = Pixel::new(3, 4, Some(9));

        assert_eq!(apply_chain(&[], Pixel::empty(3, 4), candidate), candidate);
    }
}
