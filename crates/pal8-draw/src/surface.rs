/*
 * Copyright (c) 2026.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use pal8_core::log::warn;

use crate::shader::apply_chain;
use crate::{Drawable, Pixel, PixelShader};

/// A compositing layer over any [`Drawable`]
///
/// The surface borrows its target for the duration of a call chain, it
/// never owns pixel storage itself. Every primitive is expressed in
/// terms of single shader-filtered pixel commits, so masking and
/// bounds clipping behave identically across pixels, lines,
/// rectangles, blits and text.
///
/// All operations are best effort: geometry reaching outside the
/// target silently clips, a cancelled shader chain silently skips the
/// commit. Nothing in this type returns an error.
pub struct Surface<'a, T: Drawable + ?Sized> {
    target: &'a mut T
}

impl<'a, T: Drawable + ?Sized> Surface<'a, T> {
    pub fn new(target: &'a mut T) -> Surface<'a, T> {
        Surface { target }
    }

    pub fn width(&self) -> i32 {
        self.target.width() as i32
    }

    pub fn height(&self) -> i32 {
        self.target.height() as i32
    }

    /// Draw a single pixel through the shader chain
    pub fn pixel(&mut self, x: i32, y: i32, color: u8, shaders: &[&dyn PixelShader]) {
        self.pixel_value(x, y, Some(color), shaders);
    }

    /// The single commit point every primitive funnels through
    pub(crate) fn pixel_value(
        &mut self, x: i32, y: i32, color: Option<u8>, shaders: &[&dyn PixelShader]
    ) {
        let previous = Pixel::new(x, y, self.target.get_pixel(x, y));
        let candidate = Pixel::new(x, y, color);

        let result = apply_chain(shaders, previous, candidate);

        if let Some(index) = result.color {
            // a shader may have displaced the pixel, commit where it
            // ended up. set_pixel handles out of range positions and
            // palette indices by doing nothing.
            self.target.set_pixel(result.x, result.y, index);
        }
    }

    /// Fill the whole surface one shader-filtered pixel at a time
    ///
    /// For an unfiltered bulk fill see [`fill`](Self::fill).
    pub fn clear(&mut self, color: u8, shaders: &[&dyn PixelShader]) {
        for y in 0..self.height() {
            for x in 0..self.width() {
                self.pixel(x, y, color, shaders);
            }
        }
    }

    /// Bulk fill fast path, bypasses shaders and palette checks
    pub fn fill(&mut self, color: u8) {
        self.target.clear_image(color);
    }

    /// Horizontal run of `size` pixels starting at `(x, y)`
    ///
    /// A negative `size` draws the same run shifted backwards so that
    /// it still ends just before the original origin.
    pub fn hline(&mut self, x: i32, y: i32, size: i32, color: u8, shaders: &[&dyn PixelShader]) {
        let (x, size) = if size < 0 { (x + size, -size) } else { (x, size) };

        for step in 0..size {
            self.pixel(x + step, y, color, shaders);
        }
    }

    /// Vertical run of `size` pixels starting at `(x, y)`, with the
    /// same negative size convention as [`hline`](Self::hline)
    pub fn vline(&mut self, x: i32, y: i32, size: i32, color: u8, shaders: &[&dyn PixelShader]) {
        let (y, size) = if size < 0 { (y + size, -size) } else { (y, size) };

        for step in 0..size {
            self.pixel(x, y + step, color, shaders);
        }
    }

    /// Straight line between two points
    ///
    /// Bresenham stepped along the dominant axis: the error
    /// accumulator gains the short delta every pixel and steps the
    /// minor axis each time it overflows the long delta.
    pub fn line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, color: u8, shaders: &[&dyn PixelShader]) {
        let (mut x, mut y) = (x1, y1);
        let (dx, dy) = (x2 - x1, y2 - y1);

        // the diagonal step takes both signs, the straight step only
        // moves along the dominant axis
        let (dx1, dy1) = (dx.signum(), dy.signum());
        let (mut dx2, mut dy2) = (dx.signum(), 0);

        let mut longest = dx.abs();
        let mut shortest = dy.abs();

        if longest <= shortest {
            core::mem::swap(&mut longest, &mut shortest);
            dx2 = 0;
            dy2 = dy.signum();
        }

        let mut numerator = longest >> 1;

        for _ in 0..=longest {
            self.pixel(x, y, color, shaders);

            numerator += shortest;

            if numerator >= longest {
                numerator -= longest;
                x += dx1;
                y += dy1;
            } else {
                x += dx2;
                y += dy2;
            }
        }
    }

    /// Rectangle outline
    pub fn rectb(&mut self, x: i32, y: i32, w: i32, h: i32, color: u8, shaders: &[&dyn PixelShader]) {
        self.hline(x, y, w, color, shaders);
        self.hline(x, y + h - 1, w, color, shaders);
        // side edges start one row down so the top corners are not
        // plotted twice
        self.vline(x, y + 1, h - 1, color, shaders);
        self.vline(x + w - 1, y + 1, h - 1, color, shaders);
    }

    /// Filled rectangle
    pub fn rectf(&mut self, x: i32, y: i32, w: i32, h: i32, color: u8, shaders: &[&dyn PixelShader]) {
        for row in 0..h {
            self.hline(x, y + row, w, color, shaders);
        }
    }

    /// Rectangle outline in `border` with the interior filled in
    /// `fill`, the fill inset so it never overlaps the border
    pub fn rect(
        &mut self, x: i32, y: i32, w: i32, h: i32, border: u8, fill: u8,
        shaders: &[&dyn PixelShader]
    ) {
        self.rectb(x, y, w, h, border, shaders);
        self.rectf(x + 1, y + 1, w - 2, h - 2, fill, shaders);
    }

    /// Blit the full extent of `source` to `(x, y)`
    pub fn blit<S: Drawable + ?Sized>(
        &mut self, source: &S, x: i32, y: i32, scale_x: f32, scale_y: f32, rotation: i32,
        shaders: &[&dyn PixelShader]
    ) {
        self.blitsub(
            source,
            x,
            y,
            0,
            0,
            source.width() as i32,
            source.height() as i32,
            scale_x,
            scale_y,
            rotation,
            shaders
        );
    }

    /// Copy a `w x h` region of `source` starting at `(cut_x, cut_y)`
    /// to this surface at `(x, y)`
    ///
    /// The sign of `scale_x` / `scale_y` mirrors or flips the
    /// destination placement within the `w x h` box, the magnitude
    /// (rounded up) becomes an integer pixel replication factor, which
    /// gives nearest-neighbor upscaling. A zero scale draws nothing.
    ///
    /// Every copied pixel runs through the shader chain, so masked
    /// transparency composes with blitting.
    // TODO: implement quarter-turn rotation, for now any value is
    // accepted and drawn unrotated
    #[allow(clippy::too_many_arguments)]
    pub fn blitsub<S: Drawable + ?Sized>(
        &mut self, source: &S, x: i32, y: i32, cut_x: i32, cut_y: i32, w: i32, h: i32,
        scale_x: f32, scale_y: f32, rotation: i32, shaders: &[&dyn PixelShader]
    ) {
        if scale_x == 0.0 || scale_y == 0.0 {
            return;
        }
        if rotation != 0 {
            warn!("rotation {} is not supported, drawing unrotated", rotation);
        }

        let mirrored = scale_x < 0.0;
        let flipped = scale_y < 0.0;

        // round the magnitude away from zero to get whole replication
        // blocks
        let pw = if mirrored { scale_x.floor() } else { scale_x.ceil() }.abs() as i32;
        let ph = if flipped { scale_y.floor() } else { scale_y.ceil() }.abs() as i32;

        for yi in 0..h {
            for xi in 0..w {
                let color = source.get_pixel(cut_x + xi, cut_y + yi);

                let ox = if mirrored { w - 1 - xi } else { xi };
                let oy = if flipped { h - 1 - yi } else { yi };

                for pyi in 0..ph {
                    for pxi in 0..pw {
                        self.pixel_value(
                            x + ox + (pw - 1) * ox + pxi,
                            y + oy + (ph - 1) * oy + pyi,
                            color,
                            shaders
                        );
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Surface;
    use crate::{Canvas, Drawable, MaskShader};

    fn row(canvas: &Canvas, y: i32) -> Vec<u8> {
        (0..canvas.width() as i32)
            .map(|x| canvas.get_pixel(x, y).unwrap())
            .collect()
    }

    #[test]
    fn hline_negative_size_shifts_origin_back() {
        let mut canvas = Canvas::new(8, 1);
        let mut surface = Surface::new(&mut canvas);

        surface.hline(5, 0, -3, 1, &[]);

        assert_eq!(row(&canvas, 0), [0, 0, 1, 1, 1, 0, 0, 0]);
    }

    #[test]
    fn vline_negative_size_shifts_origin_back() {
        let mut canvas = Canvas::new(1, 8);
        let mut surface = Surface::new(&mut canvas);

        surface.vline(0, 5, -3, 1, &[]);

        let column: Vec<u8> = (0..8).map(|y| canvas.get_pixel(0, y).unwrap()).collect();
        assert_eq!(column, [0, 0, 1, 1, 1, 0, 0, 0]);
    }

    #[test]
    fn diagonal_line_touches_both_endpoints() {
        let mut canvas = Canvas::new(4, 4);
        let mut surface = Surface::new(&mut canvas);

        surface.line(0, 0, 3, 3, 5, &[]);

        for i in 0..4 {
            assert_eq!(canvas.get_pixel(i, i), Some(5));
        }
    }

    #[test]
    fn steep_line_plots_one_pixel_per_row() {
        let mut canvas = Canvas::new(3, 6);
        let mut surface = Surface::new(&mut canvas);

        surface.line(0, 0, 2, 5, 1, &[]);

        for y in 0..6 {
            let lit = (0..3).filter(|&x| canvas.get_pixel(x, y) == Some(1)).count();
            assert_eq!(lit, 1, "row {y}");
        }
        assert_eq!(canvas.get_pixel(0, 0), Some(1));
        assert_eq!(canvas.get_pixel(2, 5), Some(1));
    }

    #[test]
    fn line_clips_offscreen_segments() {
        let mut canvas = Canvas::new(4, 4);
        let mut surface = Surface::new(&mut canvas);

        // runs well past the right edge, must not panic or wrap
        surface.line(2, 2, 9, 2, 1, &[]);

        assert_eq!(row(&canvas, 2), [0, 0, 1, 1]);
    }

    #[test]
    fn rectb_outlines_without_filling() {
        let mut canvas = Canvas::new(5, 4);
        let mut surface = Surface::new(&mut canvas);

        surface.rectb(0, 0, 5, 4, 2, &[]);

        assert_eq!(row(&canvas, 0), [2, 2, 2, 2, 2]);
        assert_eq!(row(&canvas, 1), [2, 0, 0, 0, 2]);
        assert_eq!(row(&canvas, 2), [2, 0, 0, 0, 2]);
        assert_eq!(row(&canvas, 3), [2, 2, 2, 2, 2]);
    }

    #[test]
    fn rect_fill_stays_inside_border() {
        let mut canvas = Canvas::new(5, 5);
        let mut surface = Surface::new(&mut canvas);

        surface.rect(0, 0, 5, 5, 1, 2, &[]);

        assert_eq!(row(&canvas, 0), [1, 1, 1, 1, 1]);
        assert_eq!(row(&canvas, 1), [1, 2, 2, 2, 1]);
        assert_eq!(row(&canvas, 2), [1, 2, 2, 2, 1]);
        assert_eq!(row(&canvas, 4), [1, 1, 1, 1, 1]);
    }

    #[test]
    fn masked_draw_leaves_previous_value() {
        let mut canvas = Canvas::new(2, 1);
        canvas.set_pixel(0, 0, 9);

        let mut surface = Surface::new(&mut canvas);
        surface.pixel(0, 0, 4, &[&MaskShader::new(4)]);

        assert_eq!(canvas.get_pixel(0, 0), Some(9));
    }

    #[test]
    fn shader_aware_clear_skips_masked_color() {
        let mut canvas = Canvas::new(2, 2);
        canvas.set_pixel(1, 1, 8);

        let mut surface = Surface::new(&mut canvas);
        surface.clear(5, &[&MaskShader::new(5)]);

        // every write was cancelled
        assert_eq!(canvas.data(), &[0, 0, 0, 8]);
    }

    #[test]
    fn fill_bypasses_shaders() {
        let mut canvas = Canvas::new(2, 2);
        let mut surface = Surface::new(&mut canvas);

        surface.fill(5);

        assert_eq!(canvas.data(), &[5, 5, 5, 5]);
    }
}
