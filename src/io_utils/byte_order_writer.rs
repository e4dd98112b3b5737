/*
This code is part of the GrayTools grayscale image compression library.
Authors: Dr. John Lindsay
Created: 14/03/2024
Last Modified: 21/05/2024
License: MIT
*/
use super::byte_order_reader::Endianness;
use byteorder::{BigEndian, LittleEndian, WriteBytesExt};
use std::io::prelude::*;
use std::io::Error;

/// The writing counterpart of `ByteOrderReader`; tracks the number of
/// bytes written so callers can report output sizes.
pub struct ByteOrderWriter<W: Write> {
    is_le: bool,
    writer: W,
    num_bytes_written: usize,
}

impl<W: Write> ByteOrderWriter<W> {
    pub fn new(writer: W, byte_order: Endianness) -> ByteOrderWriter<W> {
        let is_le = byte_order == Endianness::LittleEndian;
        ByteOrderWriter::<W> {
            writer,
            is_le,
            num_bytes_written: 0,
        }
    }

    pub fn get_num_bytes_written(&self) -> usize {
        self.num_bytes_written
    }

    pub fn write_u8(&mut self, value: u8) -> Result<(), Error> {
        self.num_bytes_written += 1;
        self.writer.write_u8(value)
    }

    pub fn write_u16(&mut self, value: u16) -> Result<(), Error> {
        self.num_bytes_written += 2;
        if self.is_le {
            self.writer.write_u16::<LittleEndian>(value)
        } else {
            self.writer.write_u16::<BigEndian>(value)
        }
    }

    pub fn write_u32(&mut self, value: u32) -> Result<(), Error> {
        self.num_bytes_written += 4;
        if self.is_le {
            self.writer.write_u32::<LittleEndian>(value)
        } else {
            self.writer.write_u32::<BigEndian>(value)
        }
    }

    pub fn write_bytes(&mut self, bytes: &[u8]) -> Result<(), Error> {
        self.num_bytes_written += bytes.len();
        self.writer.write_all(bytes)
    }

    pub fn flush(&mut self) -> Result<(), Error> {
        self.writer.flush()
    }
}
