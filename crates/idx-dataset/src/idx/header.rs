use std::io::{ErrorKind, Read};

use crate::config::DecoderConfig;
use crate::error::{DecodeError, Result};

/// Magic number of an IDX file holding a set of 2-D unsigned-byte images:
/// two zero bytes, type code 0x08 (unsigned byte), 3 dimensions.
pub const IDX_IMAGE_MAGIC: u32 = 2051;

/// Size in bytes of the image-file header (four big-endian u32 fields).
pub const IDX_HEADER_LEN: usize = 16;

/// Compose a big-endian u32 from four bytes in file order.
///
/// The value is built byte by byte, so the result does not depend on the
/// host's byte order.
pub fn be_u32(bytes: [u8; 4]) -> u32 {
    (u32::from(bytes[0]) << 24)
        | (u32::from(bytes[1]) << 16)
        | (u32::from(bytes[2]) << 8)
        | u32::from(bytes[3])
}

/// Read one big-endian header field, naming it if the input runs out.
fn read_field(reader: &mut impl Read, field: &'static str) -> Result<u32> {
    let mut buf4 = [0u8; 4];
    reader.read_exact(&mut buf4).map_err(|e| match e.kind() {
        ErrorKind::UnexpectedEof => DecodeError::TruncatedHeader { field },
        _ => DecodeError::Io(e),
    })?;
    Ok(be_u32(buf4))
}

fn check_dimension(field: &'static str, found: u32, expected: usize) -> Result<()> {
    if found as usize != expected {
        return Err(DecodeError::UnexpectedDimension {
            field,
            found,
            expected: u32::try_from(expected).unwrap_or(u32::MAX),
        });
    }
    Ok(())
}

/// Parsed IDX image-file header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdxHeader {
    pub magic_number: u32,
    /// Number of samples that follow the header.
    pub sample_count: u32,
    pub row_count: u32,
    pub column_count: u32,
}

impl IdxHeader {
    /// Parse and validate an IDX image header from the start of a reader.
    ///
    /// Fields are read in file order and each is validated as soon as it is
    /// read: the magic number must be [`IDX_IMAGE_MAGIC`], and both the row
    /// and column counts must equal `config.side_length`. A zero side length
    /// is rejected before anything is read.
    pub fn parse(reader: &mut impl Read, config: &DecoderConfig) -> Result<IdxHeader> {
        if config.side_length == 0 {
            return Err(DecodeError::InvalidSideLength {
                side_length: config.side_length,
            });
        }

        let magic_number = read_field(reader, "magic number")?;
        if magic_number != IDX_IMAGE_MAGIC {
            return Err(DecodeError::UnexpectedMagicNumber {
                found: magic_number,
                expected: IDX_IMAGE_MAGIC,
            });
        }

        let sample_count = read_field(reader, "sample count")?;

        let row_count = read_field(reader, "rows")?;
        check_dimension("rows", row_count, config.side_length)?;

        let column_count = read_field(reader, "columns")?;
        check_dimension("columns", column_count, config.side_length)?;

        Ok(IdxHeader {
            magic_number,
            sample_count,
            row_count,
            column_count,
        })
    }

    /// Number of payload bytes (and pixels) in one sample.
    pub fn sample_len(&self) -> usize {
        self.row_count as usize * self.column_count as usize
    }

    /// Number of payload bytes the header promises after itself.
    pub fn payload_len(&self) -> u64 {
        u64::from(self.sample_count) * u64::from(self.row_count) * u64::from(self.column_count)
    }

    /// Minimum length of a file carrying this header and its full payload.
    pub fn file_len(&self) -> u64 {
        IDX_HEADER_LEN as u64 + self.payload_len()
    }
}
