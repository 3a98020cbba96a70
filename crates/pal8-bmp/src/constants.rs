/*
 * Copyright (c) 2026.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Fixed layout constants for the pal8 BMP subset
//!
//! | Offset | Size  | Field              | Required value        |
//! |--------|-------|--------------------|-----------------------|
//! | 0      | 2     | magic              | `BM`                  |
//! | 2      | 4     | total file size    | 1078 + pixel count    |
//! | 10     | 4     | pixel data offset  | 1078                  |
//! | 14     | 4     | info header size   | 40                    |
//! | 18     | 4     | width              | > 0                   |
//! | 22     | 4     | height             | > 0                   |
//! | 26     | 2     | color planes       | 1                     |
//! | 28     | 2     | bits per pixel     | 8                     |
//! | 30     | 4     | compression        | 0                     |
//! | 34     | 4     | compressed size    | 0                     |
//! | 38     | 4     | horizontal ppm     | 2834                  |
//! | 42     | 4     | vertical ppm       | 2834                  |
//! | 46     | 4     | colors used        | 256                   |
//! | 50     | 4     | important colors   | 256                   |
//! | 54     | 256*4 | palette (B,G,R,A)  | —                     |
//! | 1078   | w*h   | pixels, bottom up  | —                     |
//!
//! Multi-byte fields are little endian, the magic is conventionally
//! read as a big endian u16.

/// The two byte `BM` signature read as a big endian u16
pub const MAGIC: u16 = 0x424D;

/// Size of the BMP file header
pub const FILE_HEADER_SIZE: usize = 14;

/// Size of the bitmap info header
pub const INFO_HEADER_SIZE: usize = 40;

/// Combined size of both headers, the palette starts here
pub const HEADER_SIZE: usize = FILE_HEADER_SIZE + INFO_HEADER_SIZE;

/// Number of palette entries the format always carries on disk
pub const PALETTE_ENTRIES: usize = 256;

/// Size in bytes of the on-disk palette region
pub const PALETTE_SIZE: usize = PALETTE_ENTRIES * 4;

/// Offset of the first pixel byte, and the required value of the
/// pixel-data-offset header field
pub const PIXEL_OFFSET: usize = HEADER_SIZE + PALETTE_SIZE;

/// Pixels per metre resolution written into both resolution fields
pub const RESOLUTION_PPM: u32 = 2834;

/// Canonical bytes for offsets 0..54. Total size, width and height are
/// patched in at construction, everything else is fixed.
pub(crate) const HEADER_TEMPLATE: [u8; HEADER_SIZE] = [
    0x42, 0x4D, // magic
    0x00, 0x00, 0x00, 0x00, // total file size, patched
    0x00, 0x00, 0x00, 0x00, // reserved
    0x36, 0x04, 0x00, 0x00, // pixel data offset, 1078
    0x28, 0x00, 0x00, 0x00, // info header size, 40
    0x00, 0x00, 0x00, 0x00, // width, patched
    0x00, 0x00, 0x00, 0x00, // height, patched
    0x01, 0x00, // color planes
    0x08, 0x00, // bits per pixel
    0x00, 0x00, 0x00, 0x00, // compression, none
    0x00, 0x00, 0x00, 0x00, // compressed size
    0x12, 0x0B, 0x00, 0x00, // horizontal resolution, 2834 ppm
    0x12, 0x0B, 0x00, 0x00, // vertical resolution, 2834 ppm
    0x00, 0x01, 0x00, 0x00, // colors used, 256
    0x00, 0x01, 0x00, 0x00  // important colors, 256
];
