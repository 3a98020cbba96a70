/*
 * Copyright (c) 2026.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! A simple implementation of a bytestream reader and writer
//!
//! This module contains two main structs that help in byte reading and
//! byte writing, with endian aware helpers for the multi-byte fields
//! found in bitmap headers.
//!
//! Useful for image readers and writers, it's put here to minimize
//! code reuse.
pub use reader::ByteReader;
pub use writer::ByteWriter;

mod reader;
mod writer;
