//! Length-prefixed string reading and writing
//!

use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};
use std::io::{Read, Write};

use crate::encoding::TextEncoding;
use crate::error::{Error, Result};

/// Longest length the compact form can declare.
pub const COMPACT_MAX: usize = 16383;

/// The two length-prefix layouts used by the table-file formats.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum LengthPrefix {
    /// One byte; lengths of 128 and above spill into a second byte as
    /// `(b0 - 128) + b1 * 128`
    Compact,

    /// Plain little-endian signed 16-bit length
    Fixed16,
}

impl LengthPrefix {
    fn read_len<R: Read>(&self, reader: &mut R) -> Result<usize> {
        match self {
            LengthPrefix::Compact => {
                let first = reader.read_u8()?;
                if first > 127 {
                    let second = reader.read_u8()?;
                    Ok((first as usize - 128) + (second as usize) * 128)
                } else {
                    Ok(first as usize)
                }
            }
            LengthPrefix::Fixed16 => {
                let len = reader.read_i16::<LittleEndian>()?;
                usize::try_from(len).map_err(|_| Error::InvalidLength(len as i64))
            }
        }
    }

    fn write_len<W: Write>(&self, writer: &mut W, len: usize) -> Result<()> {
        match self {
            LengthPrefix::Compact => {
                if len > COMPACT_MAX {
                    return Err(Error::StringTooLong {
                        len,
                        max: COMPACT_MAX,
                    });
                }
                if len < 128 {
                    writer.write_u8(len as u8)?;
                } else {
                    writer.write_u8((len % 128) as u8 + 128)?;
                    writer.write_u8((len / 128) as u8)?;
                }
                Ok(())
            }
            LengthPrefix::Fixed16 => {
                let len = i16::try_from(len).map_err(|_| Error::StringTooLong {
                    len,
                    max: i16::MAX as usize,
                })?;
                writer.write_i16::<LittleEndian>(len)?;
                Ok(())
            }
        }
    }
}

/// Read one length-prefixed string.
///
/// Fails with [`Error::TruncatedInput`] when fewer payload bytes are
/// available than the prefix declared.
pub fn read_prefixed_string<R: Read>(
    reader: &mut R,
    prefix: LengthPrefix,
    encoding: TextEncoding,
) -> Result<String> {
    let len = prefix.read_len(reader)?;

    let mut payload = vec![0u8; len];
    reader.read_exact(&mut payload)?;

    encoding.decode_exact(&payload)
}

/// Write one length-prefixed string.
pub fn write_prefixed_string<W: Write>(
    writer: &mut W,
    prefix: LengthPrefix,
    text: &str,
    encoding: TextEncoding,
) -> Result<()> {
    let payload = encoding.encode(text)?;
    prefix.write_len(writer, payload.len())?;
    writer.write_all(&payload)?;
    Ok(())
}
