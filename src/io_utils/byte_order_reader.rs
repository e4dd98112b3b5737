/*
This code is part of the GrayTools grayscale image compression library.
Authors: Dr. John Lindsay
Created: 14/03/2024
Last Modified: 21/05/2024
License: MIT
*/
use byteorder::{BigEndian, LittleEndian, ReadBytesExt};
use std::io::prelude::*;
use std::io::{Result, SeekFrom};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Endianness {
    LittleEndian,
    BigEndian,
}

/// A positioned reader that decodes multi-byte values in a configurable
/// byte order. Read errors are propagated to the caller rather than
/// unwrapped in place.
pub struct ByteOrderReader<R: Read + Seek> {
    is_le: bool,
    reader: R,
    pos: usize,
    len: usize,
}

impl<R: Read + Seek> ByteOrderReader<R> {
    pub fn new(mut reader: R, byte_order: Endianness) -> Result<ByteOrderReader<R>> {
        let is_le = byte_order == Endianness::LittleEndian;
        let len = reader.seek(SeekFrom::End(0))? as usize;
        reader.seek(SeekFrom::Start(0))?;
        Ok(ByteOrderReader {
            reader,
            is_le,
            pos: 0usize,
            len,
        })
    }

    pub fn seek(&mut self, position: usize) -> Result<()> {
        self.pos = position;
        self.reader.seek(SeekFrom::Start(self.pos as u64))?;
        Ok(())
    }

    pub fn pos(&self) -> usize {
        self.pos
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn read_u8(&mut self) -> Result<u8> {
        self.pos += 1;
        self.reader.read_u8()
    }

    pub fn read_u16(&mut self) -> Result<u16> {
        self.pos += 2;
        if self.is_le {
            return self.reader.read_u16::<LittleEndian>();
        }
        self.reader.read_u16::<BigEndian>()
    }

    pub fn read_u32(&mut self) -> Result<u32> {
        self.pos += 4;
        if self.is_le {
            return self.reader.read_u32::<LittleEndian>();
        }
        self.reader.read_u32::<BigEndian>()
    }

    pub fn read_exact(&mut self, buf: &mut [u8]) -> Result<()> {
        self.pos += buf.len();
        self.reader.read_exact(buf)
    }
}
