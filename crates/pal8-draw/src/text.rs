/*
 * Copyright (c) 2026.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use crate::{Drawable, PixelShader, Surface};

/// A fixed-grid bitmap font backed by any [`Drawable`]
///
/// Glyphs live in a grid of `columns` cells per row starting at
/// `(cut_x, cut_y)` in the sheet. `charset` lists the glyphs in sheet
/// order, a character's position in that string is its cell index.
pub struct FontSheet<'a, S: Drawable + ?Sized> {
    source:       &'a S,
    cut_x:        i32,
    cut_y:        i32,
    glyph_width:  i32,
    glyph_height: i32,
    charset:      &'a str,
    columns:      i32
}

impl<'a, S: Drawable + ?Sized> FontSheet<'a, S> {
    pub fn new(
        source: &'a S, cut_x: i32, cut_y: i32, glyph_width: i32, glyph_height: i32,
        charset: &'a str, columns: i32
    ) -> FontSheet<'a, S> {
        FontSheet {
            source,
            cut_x,
            cut_y,
            glyph_width,
            glyph_height,
            charset,
            columns
        }
    }

    /// Grid cell of `ch` as `(column, row)`, `None` for characters the
    /// sheet does not carry
    ///
    /// The row wraps at the column count, sheets taller than they are
    /// wide alias back onto the leading rows.
    fn locate(&self, ch: char) -> Option<(i32, i32)> {
        let index = self.charset.chars().position(|c| c == ch)? as i32;

        let row = (index / self.columns) % self.columns;
        let col = index % self.columns;

        Some((col, row))
    }
}

impl<'a, T: Drawable + ?Sized> Surface<'a, T> {
    /// Draw `text` with a fixed-grid bitmap font
    ///
    /// `\n` starts a new line and resets the column. Characters absent
    /// from the font's charset advance the cursor without drawing,
    /// which is how spaces are usually handled. Each glyph is a
    /// [`blitsub`](Self::blitsub) of its cell, so scaling, mirroring
    /// and shader chains all apply.
    #[allow(clippy::too_many_arguments)]
    pub fn text<S: Drawable + ?Sized>(
        &mut self, font: &FontSheet<'_, S>, x: i32, y: i32, text: &str, letter_spacing: i32,
        line_height: i32, scale_x: f32, scale_y: f32, rotation: i32,
        shaders: &[&dyn PixelShader]
    ) {
        let mut column = 0;
        let mut line = 0;

        for ch in text.chars() {
            if ch == '\n' {
                line += 1;
                column = 0;
                continue;
            }

            if let Some((col, row)) = font.locate(ch) {
                self.blitsub(
                    font.source,
                    x + column * (font.glyph_width + letter_spacing),
                    y + line * (font.glyph_height + line_height),
                    font.cut_x + col * font.glyph_width,
                    font.cut_y + row * font.glyph_height,
                    font.glyph_width,
                    font.glyph_height,
                    scale_x,
                    scale_y,
                    rotation,
                    shaders
                );
            }

            column += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::FontSheet;
    use crate::{Canvas, Drawable, Surface};

    // a 4x2 sheet with two 2x2 glyphs: "A" solid 1s, "B" solid 2s
    fn sheet() -> Canvas {
        Canvas::from_pixels(4, 2, alloc::vec![1, 1, 2, 2, 1, 1, 2, 2]).unwrap()
    }

    #[test]
    fn glyphs_are_located_by_charset_position() {
        let sheet = sheet();
        let font = FontSheet::new(&sheet, 0, 0, 2, 2, "AB", 2);

        let mut canvas = Canvas::new(8, 2);
        let mut surface = Surface::new(&mut canvas);

        surface.text(&font, 0, 0, "BA", 0, 0, 1.0, 1.0, 0, &[]);

        // "B" first: 2s, then "A": 1s
        assert_eq!(canvas.get_pixel(0, 0), Some(2));
        assert_eq!(canvas.get_pixel(1, 1), Some(2));
        assert_eq!(canvas.get_pixel(2, 0), Some(1));
        assert_eq!(canvas.get_pixel(3, 1), Some(1));
    }

    #[test]
    fn unknown_characters_advance_without_drawing() {
        let sheet = sheet();
        let font = FontSheet::new(&sheet, 0, 0, 2, 2, "AB", 2);

        let mut canvas = Canvas::new(8, 2);
        let mut surface = Surface::new(&mut canvas);

        // the space and "C" are not in the charset
        surface.text(&font, 0, 0, "A C", 0, 0, 1.0, 1.0, 0, &[]);

        // "A" drew at column 0
        assert_eq!(canvas.get_pixel(0, 0), Some(1));
        // column 1 skipped, stays empty
        assert_eq!(canvas.get_pixel(2, 0), Some(0));
        // "C" skipped too, column 2 stays empty
        assert_eq!(canvas.get_pixel(4, 0), Some(0));
    }

    #[test]
    fn newline_resets_the_column() {
        let sheet = sheet();
        let font = FontSheet::new(&sheet, 0, 0, 2, 2, "AB", 2);

        let mut canvas = Canvas::new(4, 5);
        let mut surface = Surface::new(&mut canvas);

        surface.text(&font, 0, 0, "A\nB", 0, 1, 1.0, 1.0, 0, &[]);

        assert_eq!(canvas.get_pixel(0, 0), Some(1));
        // second line starts at x = 0, y = glyph height + line height
        assert_eq!(canvas.get_pixel(0, 3), Some(2));
    }

    #[test]
    fn letter_spacing_widens_the_advance() {
        let sheet = sheet();
        let font = FontSheet::new(&sheet, 0, 0, 2, 2, "AB", 2);

        let mut canvas = Canvas::new(8, 2);
        let mut surface = Surface::new(&mut canvas);

        surface.text(&font, 0, 0, "AB", 1, 0, 1.0, 1.0, 0, &[]);

        assert_eq!(canvas.get_pixel(0, 0), Some(1));
        // gap column untouched
        assert_eq!(canvas.get_pixel(2, 0), Some(0));
        assert_eq!(canvas.get_pixel(3, 0), Some(2));
    }
}
