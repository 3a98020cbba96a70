/*
 * Copyright (c) 2026.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use core::mem::size_of;

static ERROR_MSG: &str = "No more space";

/// Encapsulates a simple byte writer with support for endian aware
/// writes
///
/// The writer borrows a pre-sized buffer, writes advance a cursor and
/// either silently stop or error out when the buffer is full, again
/// depending on the variant called.
pub struct ByteWriter<'a> {
    buffer:   &'a mut [u8],
    position: usize
}

enum Mode {
    // Big endian
    BE,
    // Little Endian
    LE
}

impl<'a> ByteWriter<'a> {
    /// Create a new writer for the stream
    pub fn new(data: &'a mut [u8]) -> ByteWriter<'a> {
        ByteWriter {
            buffer:   data,
            position: 0
        }
    }

    /// Return number of unwritten bytes in this stream
    pub const fn bytes_left(&self) -> usize {
        self.buffer.len().saturating_sub(self.position)
    }

    /// Return the number of bytes the writer has written
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Check if the byte writer can support the following write
    pub const fn has(&self, bytes: usize) -> bool {
        self.position.saturating_add(bytes) <= self.buffer.len()
    }

    /// Write a single byte into the bytestream or error out if there
    /// is not enough space
    pub fn write_u8_err(&mut self, byte: u8) -> Result<(), &'static str> {
        match self.buffer.get_mut(self.position) {
            Some(m_byte) => {
                self.position += 1;
                *m_byte = byte;

                Ok(())
            }
            None => Err(ERROR_MSG)
        }
    }

    /// Write a single byte into the stream or don't write anything if
    /// the buffer is full
    ///
    /// Should be combined with [`has`](Self::has)
    pub fn write_u8(&mut self, byte: u8) {
        if let Some(m_byte) = self.buffer.get_mut(self.position) {
            self.position += 1;
            *m_byte = byte;
        }
    }

    /// Write all bytes of `data` or error out if the stream cannot
    /// accommodate them
    pub fn write_all(&mut self, data: &[u8]) -> Result<(), &'static str> {
        match self
            .buffer
            .get_mut(self.position..self.position + data.len())
        {
            Some(m_bytes) => {
                m_bytes.copy_from_slice(data);
                self.position += data.len();

                Ok(())
            }
            None => Err(ERROR_MSG)
        }
    }

    /// Write as many bytes of `data` as the stream can hold, silently
    /// dropping the rest
    pub fn write_const_bytes(&mut self, data: &[u8]) {
        let fitting = data.len().min(self.bytes_left());

        self.buffer[self.position..self.position + fitting].copy_from_slice(&data[..fitting]);
        self.position += fitting;
    }
}

macro_rules! write_single_type {
    ($name:tt,$name2:tt,$name3:tt,$name4:tt,$name5:tt,$name6:tt,$int_type:tt) => {
        impl<'a> ByteWriter<'a> {
            #[inline(always)]
            fn $name(&mut self, byte: $int_type, mode: Mode) -> Result<(), &'static str> {
                const SIZE: usize = size_of::<$int_type>();

                match self.buffer.get_mut(self.position..self.position + SIZE) {
                    Some(m_byte) => {
                        self.position += SIZE;

                        let bytes = match mode {
                            Mode::BE => byte.to_be_bytes(),
                            Mode::LE => byte.to_le_bytes()
                        };

                        m_byte.copy_from_slice(&bytes);

                        Ok(())
                    }
                    None => Err(ERROR_MSG)
                }
            }

            #[inline(always)]
            fn $name2(&mut self, byte: $int_type, mode: Mode) {
                const SIZE: usize = size_of::<$int_type>();

                if let Some(m_byte) = self.buffer.get_mut(self.position..self.position + SIZE) {
                    self.position += SIZE;

                    let bytes = match mode {
                        Mode::BE => byte.to_be_bytes(),
                        Mode::LE => byte.to_le_bytes()
                    };

                    m_byte.copy_from_slice(&bytes);
                }
            }

            #[doc=concat!("Write ",stringify!($int_type)," as a big endian integer, erroring out when the buffer is full")]
            #[inline]
            pub fn $name3(&mut self, byte: $int_type) -> Result<(), &'static str> {
                self.$name(byte, Mode::BE)
            }

            #[doc=concat!("Write ",stringify!($int_type)," as a little endian integer, erroring out when the buffer is full")]
            #[inline]
            pub fn $name4(&mut self, byte: $int_type) -> Result<(), &'static str> {
                self.$name(byte, Mode::LE)
            }

            #[doc=concat!("Write ",stringify!($int_type)," as a big endian integer, or nothing when the buffer is full")]
            #[inline]
            pub fn $name5(&mut self, byte: $int_type) {
                self.$name2(byte, Mode::BE)
            }

            #[doc=concat!("Write ",stringify!($int_type)," as a little endian integer, or nothing when the buffer is full")]
            #[inline]
            pub fn $name6(&mut self, byte: $int_type) {
                self.$name2(byte, Mode::LE)
            }
        }
    };
}

write_single_type!(
    write_u16_inner_or_die,
    write_u16_inner_or_none,
    write_u16_be_err,
    write_u16_le_err,
    write_u16_be,
    write_u16_le,
    u16
);

write_single_type!(
    write_u32_inner_or_die,
    write_u32_inner_or_none,
    write_u32_be_err,
    write_u32_le_err,
    write_u32_be,
    write_u32_le,
    u32
);

#[cfg(test)]
mod tests {
    use super::ByteWriter;

    #[test]
    fn endian_aware_writes() {
        let mut storage = [0; 6];
        {
            let mut writer = ByteWriter::new(&mut storage);

            writer.write_u16_be(0x424D);
            writer.write_u32_le(1078);
            assert_eq!(writer.bytes_left(), 0);
        }
        assert_eq!(storage, [0x42, 0x4D, 0x36, 0x04, 0x00, 0x00]);
    }

    #[test]
    fn full_buffer_is_an_error() {
        let mut storage = [0; 1];
        let mut writer = ByteWriter::new(&mut storage);

        assert!(writer.write_u8_err(1).is_ok());
        assert!(writer.write_u8_err(2).is_err());
        assert!(writer.write_u32_le_err(3).is_err());
    }

    #[test]
    fn const_bytes_truncate() {
        let mut storage = [0; 3];
        let mut writer = ByteWriter::new(&mut storage);

        writer.write_const_bytes(&[1, 2, 3, 4, 5]);
        assert_eq!(writer.position(), 3);
        assert_eq!(storage, [1, 2, 3]);
    }
}
