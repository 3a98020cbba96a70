/*
 * Copyright (c) 2026.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use pal8_bmp::{probe_pal8, Pal8Bitmap, Pal8Decoder};
use pal8_core::color::Color;

#[test]
fn two_by_two_scenario() {
    let palette = [Color::new(255, 0, 0, 255), Color::new(0, 255, 0, 255)];
    let mut bitmap = Pal8Bitmap::with_palette(2, 2, &palette).unwrap();

    assert!(bitmap.set_pixel(0, 0, 0));
    assert!(bitmap.set_pixel(1, 1, 1));

    let bytes = bitmap.encode();
    assert!(probe_pal8(&bytes));

    let decoded = Pal8Decoder::new(&bytes).decode().unwrap();

    assert_eq!(decoded.get_pixel(0, 0), Some(0));
    assert_eq!(decoded.get_pixel(1, 1), Some(1));
    assert_eq!(decoded.get_color(0), Color::new(255, 0, 0, 255));
}

#[test]
fn roundtrip_preserves_everything() {
    let palette: Vec<Color> = (0..=255)
        .map(|i: u8| Color::new(i, i.wrapping_mul(3), i.wrapping_add(7), 255 - i))
        .collect();

    let mut bitmap = Pal8Bitmap::with_palette(13, 7, &palette).unwrap();

    for y in 0..7 {
        for x in 0..13 {
            assert!(bitmap.set_pixel(x, y, ((x * 31 + y * 17) % 256) as u8));
        }
    }

    let bytes = bitmap.encode();
    let decoded = Pal8Decoder::new(&bytes).decode().unwrap();

    assert_eq!(decoded.width(), bitmap.width());
    assert_eq!(decoded.height(), bitmap.height());
    assert_eq!(decoded.get_palette(), bitmap.get_palette());

    for y in 0..7 {
        for x in 0..13 {
            assert_eq!(decoded.get_pixel(x, y), bitmap.get_pixel(x, y));
        }
    }

    // and the re-encoding is byte identical
    assert_eq!(decoded.encode(), bytes);
}
