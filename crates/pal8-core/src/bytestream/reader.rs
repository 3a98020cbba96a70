/*
 * Copyright (c) 2026.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

static ERROR_MSG: &str = "No more bytes";

/// An encapsulation of a bytestream with endian aware reads
///
/// The reader borrows the underlying buffer and tracks a cursor into
/// it. Reads past the end either return a zero value or an error
/// depending on which variant of the getter was called.
pub struct ByteReader<'a> {
    stream:   &'a [u8],
    position: usize
}

enum Mode {
    // Big endian
    BE,
    // Little Endian
    LE
}

impl<'a> ByteReader<'a> {
    /// Create a new reader over `buf`
    pub const fn new(buf: &'a [u8]) -> ByteReader<'a> {
        ByteReader {
            stream:   buf,
            position: 0
        }
    }

    /// Skip `n` bytes ahead of the stream.
    pub fn skip(&mut self, bytes: usize) {
        self.position = self.position.wrapping_add(bytes);
    }

    /// Move the cursor to an absolute position
    pub fn set_position(&mut self, position: usize) {
        self.position = position;
    }

    /// Number of bytes between the cursor and the end of the stream
    pub const fn remaining(&self) -> usize {
        // Must be saturating to prevent underflow
        self.stream.len().saturating_sub(self.position)
    }

    /// Total length of the underlying buffer
    pub const fn len(&self) -> usize {
        self.stream.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.stream.is_empty()
    }

    pub const fn position(&self) -> usize {
        self.position
    }

    /// Return true if the stream can supply `bytes` more bytes
    pub const fn has(&self, bytes: usize) -> bool {
        self.position.saturating_add(bytes) <= self.stream.len()
    }

    /// Everything from the cursor to the end of the stream
    pub fn remaining_bytes(&self) -> &'a [u8] {
        &self.stream[self.position.min(self.stream.len())..]
    }

    /// Read `N` bytes from the stream or error out if the stream
    /// cannot satisfy the read
    pub fn get_fixed_bytes_or_err<const N: usize>(&mut self) -> Result<[u8; N], &'static str> {
        match self.stream.get(self.position..self.position + N) {
            Some(bytes) => {
                self.position += N;

                let mut out = [0; N];
                out.copy_from_slice(bytes);

                Ok(out)
            }
            None => Err(ERROR_MSG)
        }
    }

    /// Read a single byte, returning zero on end of stream
    pub fn get_u8(&mut self) -> u8 {
        match self.stream.get(self.position) {
            Some(byte) => {
                self.position += 1;
                *byte
            }
            None => 0
        }
    }

    /// Read a single byte, erroring out on end of stream
    pub fn get_u8_err(&mut self) -> Result<u8, &'static str> {
        match self.stream.get(self.position) {
            Some(byte) => {
                self.position += 1;
                Ok(*byte)
            }
            None => Err(ERROR_MSG)
        }
    }
}

macro_rules! get_single_type {
    ($name:tt,$name2:tt,$name3:tt,$name4:tt,$name5:tt,$name6:tt,$int_type:tt) => {
        impl<'a> ByteReader<'a> {
            #[inline(always)]
            fn $name(&mut self, mode: Mode) -> $int_type {
                const SIZE_OF_VAL: usize = core::mem::size_of::<$int_type>();

                let mut space = [0; SIZE_OF_VAL];

                match self.stream.get(self.position..self.position + SIZE_OF_VAL) {
                    Some(position) => {
                        space.copy_from_slice(position);
                        self.position += SIZE_OF_VAL;

                        match mode {
                            Mode::LE => $int_type::from_le_bytes(space),
                            Mode::BE => $int_type::from_be_bytes(space)
                        }
                    }
                    None => 0
                }
            }

            #[inline(always)]
            fn $name2(&mut self, mode: Mode) -> Result<$int_type, &'static str> {
                const SIZE_OF_VAL: usize = core::mem::size_of::<$int_type>();

                let mut space = [0; SIZE_OF_VAL];

                match self.stream.get(self.position..self.position + SIZE_OF_VAL) {
                    Some(position) => {
                        space.copy_from_slice(position);
                        self.position += SIZE_OF_VAL;

                        match mode {
                            Mode::LE => Ok($int_type::from_le_bytes(space)),
                            Mode::BE => Ok($int_type::from_be_bytes(space))
                        }
                    }
                    None => Err(ERROR_MSG)
                }
            }

            #[doc=concat!("Read ",stringify!($int_type)," as a big endian integer, erroring out on end of stream")]
            pub fn $name3(&mut self) -> Result<$int_type, &'static str> {
                self.$name2(Mode::BE)
            }

            #[doc=concat!("Read ",stringify!($int_type)," as a little endian integer, erroring out on end of stream")]
            pub fn $name4(&mut self) -> Result<$int_type, &'static str> {
                self.$name2(Mode::LE)
            }

            #[doc=concat!("Read ",stringify!($int_type)," as a big endian integer, returning zero on end of stream")]
            pub fn $name5(&mut self) -> $int_type {
                self.$name(Mode::BE)
            }

            #[doc=concat!("Read ",stringify!($int_type)," as a little endian integer, returning zero on end of stream")]
            pub fn $name6(&mut self) -> $int_type {
                self.$name(Mode::LE)
            }
        }
    };
}

get_single_type!(
    get_u16_inner_or_default,
    get_u16_inner_or_die,
    get_u16_be_err,
    get_u16_le_err,
    get_u16_be,
    get_u16_le,
    u16
);
get_single_type!(
    get_u32_inner_or_default,
    get_u32_inner_or_die,
    get_u32_be_err,
    get_u32_le_err,
    get_u32_be,
    get_u32_le,
    u32
);
