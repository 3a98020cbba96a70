/*
 * Copyright (c) 2026.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Core routines shared by the pal8 crates
//!
//! This crate provides the plumbing shared by the pal8 codec and
//! drawing crates
//!
//! It currently contains
//!
//! - A bytestream reader and writer with endian aware reads and writes
//! - An RGBA color value type used for palette entries
//! - Decoder options
//! - A logging facade that forwards to the `log` crate when the `log`
//!   feature is enabled and compiles to nothing otherwise
//!
//! This library is `#[no_std]` with the `alloc` crate needed for `Vec`
//!
//! # Features
//! - `std`: Enables `std::error::Error` impls downstream, on by default
//! - `log`: Routes log statements to the `log` crate
#![cfg_attr(not(feature = "std"), no_std)]
#![macro_use]
extern crate alloc;

pub mod bytestream;
pub mod color;
pub mod log;
pub mod options;
