//! Memory image for the `xorEncrypt` test kernel.
//!
//! The image is loaded at address 0 of a core's data memory. Layout:
//!
//! ```text
//! 0x00  u64 0            reserved
//! 0x08  u64 0            reserved
//! 0x10  u64 0x60         data address
//! 0x18  u64 5            data length
//! 0x20  u64 0x70         key address
//! 0x28  u64 3            key length
//! 0x30  6 x u64 0        padding
//! 0x60  01 02 03 04 05 00 00 00
//! 0x68  u64 0            padding
//! 0x70  42 43 44
//! ```
//!
//! All words are little-endian. The bytes are fixed and emitted verbatim.

use crate::{xor_cipher::xor_encrypt, BufferReader, BufferWriter, Error};
use serde::Serialize;

pub const LENGTH: usize = 115;

pub const ARGUMENT_BLOCK_OFFSET: usize = 0x10;

const HEADER: [u64; 6] = [0, 0, 0x60, 0x05, 0x70, 0x03];
const PADDING_WORDS: usize = 6;
const DATA: [u8; 8] = [0x01, 0x02, 0x03, 0x04, 0x05, 0, 0, 0];
const KEY: [u8; 3] = [0x42, 0x43, 0x44];

pub fn build() -> Vec<u8> {
    let mut writer = BufferWriter::new();
    for word in HEADER {
        writer.write_u64(word);
    }
    writer.write_zeros(PADDING_WORDS * 8);
    for byte in DATA {
        writer.write_u8(byte);
    }
    writer.write_u64(0);
    writer.write_buffer(&KEY);
    debug_assert_eq!(writer.len(), LENGTH);
    writer.buffer()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ArgumentBlock {
    pub data_address: u64,
    pub data_length: u64,
    pub key_address: u64,
    pub key_length: u64,
}

impl ArgumentBlock {
    pub fn from_image(image: &[u8]) -> Result<Self, Error> {
        let mut reader = BufferReader::new(image);
        reader.seek(ARGUMENT_BLOCK_OFFSET)?;
        Ok(Self {
            data_address: reader.read_u64_le()?,
            data_length: reader.read_u64_le()?,
            key_address: reader.read_u64_le()?,
            key_length: reader.read_u64_le()?,
        })
    }

    pub fn data_range(&self) -> Result<(usize, usize), Error> {
        range("data", self.data_address, self.data_length)
    }

    pub fn key_range(&self) -> Result<(usize, usize), Error> {
        range("key", self.key_address, self.key_length)
    }

    pub fn validate(&self, image_length: usize) -> Result<(), Error> {
        let header_end = ARGUMENT_BLOCK_OFFSET + 4 * 8;
        let mut regions = Vec::new();
        for (name, (start, end)) in [("data", self.data_range()?), ("key", self.key_range()?)] {
            if start == end {
                return Err(Error::new(format!("Empty {} region at {:#x}", name, start)));
            }
            if end > image_length {
                return Err(Error::new(format!(
                    "{} region {:#x}..{:#x} exceeds image length {:#x}",
                    name, start, end, image_length
                )));
            }
            if start < header_end {
                return Err(Error::new(format!(
                    "{} region {:#x}..{:#x} starts inside the header (below {:#x})",
                    name, start, end, header_end
                )));
            }
            regions.push((start, end));
        }
        let (data, key) = (regions[0], regions[1]);
        if data.0 < key.1 && key.0 < data.1 {
            return Err(Error::new(format!(
                "data region {:#x}..{:#x} overlaps key region {:#x}..{:#x}",
                data.0, data.1, key.0, key.1
            )));
        }
        Ok(())
    }
}

fn range(name: &str, address: u64, length: u64) -> Result<(usize, usize), Error> {
    let start = usize::try_from(address).map_err(|_| Error::new(format!("Invalid {} address {:#x}", name, address)))?;
    let length = usize::try_from(length).map_err(|_| Error::new(format!("Invalid {} length {}", name, length)))?;
    let end = start
        .checked_add(length)
        .ok_or_else(|| Error::new(format!("{} region at {:#x} overflows", name, start)))?;
    Ok((start, end))
}

pub fn check(image: &[u8]) -> Result<ArgumentBlock, Error> {
    if image.len() != LENGTH {
        return Err(Error::new(format!("Fixture is {} bytes, expected {}", image.len(), LENGTH)));
    }
    let arguments = ArgumentBlock::from_image(image)?;
    arguments.validate(image.len())?;
    Ok(arguments)
}

pub fn expected_after_kernel(image: &[u8]) -> Result<Vec<u8>, Error> {
    let arguments = ArgumentBlock::from_image(image)?;
    arguments.validate(image.len())?;
    let (key_start, key_end) = arguments.key_range()?;
    let (data_start, data_end) = arguments.data_range()?;
    let key = image[key_start..key_end].to_vec();
    let mut output = image.to_vec();
    xor_encrypt(&mut output[data_start..data_end], &key);
    Ok(output)
}
