//! Text encodings used by the table-file formats
//!

use std::fmt;
use std::str::FromStr;

use widestring::U16String;

use crate::error::{Error, Result};

/// A text encoding understood by the table-file codecs.
///
/// Cell sizes in the binary formats count *code units*, so the unit width
/// matters as much as the codec itself: a UTF-16 cell of size `n` spans
/// `n * 2` bytes in the blob, while the legacy encodings span `n` bytes.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub enum TextEncoding {
    /// Little-endian UTF-16, two bytes per unit
    #[default]
    Utf16Le,

    /// Legacy Korean text; unit width is one byte
    EucKr,

    /// ISO-8859-1; every byte sequence decodes
    Latin1,
}

impl TextEncoding {
    /// Width in bytes of one code unit.
    pub const fn unit_width(&self) -> usize {
        match self {
            TextEncoding::Utf16Le => 2,
            TextEncoding::EucKr | TextEncoding::Latin1 => 1,
        }
    }

    /// Decode a byte slice, stripping any trailing NUL padding.
    pub fn decode(&self, bytes: &[u8]) -> Result<String> {
        Ok(self
            .decode_exact(bytes)?
            .trim_end_matches('\0')
            .to_string())
    }

    /// Decode a byte slice exactly as stored, padding included.
    ///
    /// Length-prefixed strings carry no terminator, so their payload is
    /// already exact.
    pub fn decode_exact(&self, bytes: &[u8]) -> Result<String> {
        let text = match self {
            TextEncoding::Utf16Le => {
                if bytes.len() % 2 != 0 {
                    return Err(Error::Decode(*self));
                }
                let units: Vec<u16> = bytes
                    .chunks_exact(2)
                    .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
                    .collect();
                U16String::from_vec(units)
                    .to_string()
                    .map_err(|_| Error::Decode(*self))?
            }
            TextEncoding::EucKr => {
                let (text, had_errors) = encoding_rs::EUC_KR.decode_without_bom_handling(bytes);
                if had_errors {
                    return Err(Error::Decode(*self));
                }
                text.into_owned()
            }
            TextEncoding::Latin1 => bytes.iter().map(|&b| b as char).collect(),
        };

        Ok(text)
    }

    /// Encode text as raw payload bytes, without a terminator.
    ///
    /// EUC-KR fails on characters the encoding cannot express; Latin-1
    /// substitutes `?` the way the legacy tooling it feeds expects.
    pub fn encode(&self, text: &str) -> Result<Vec<u8>> {
        match self {
            TextEncoding::Utf16Le => Ok(text
                .encode_utf16()
                .flat_map(|unit| unit.to_le_bytes())
                .collect()),
            TextEncoding::EucKr => {
                let (bytes, _, had_errors) = encoding_rs::EUC_KR.encode(text);
                if had_errors {
                    return Err(Error::Encode(*self));
                }
                Ok(bytes.into_owned())
            }
            TextEncoding::Latin1 => Ok(text
                .chars()
                .map(|c| if (c as u32) < 0x100 { c as u8 } else { b'?' })
                .collect()),
        }
    }

    /// Encode text followed by a NUL terminator sized to the unit width.
    pub fn encode_terminated(&self, text: &str) -> Result<Vec<u8>> {
        let mut bytes = self.encode(text)?;
        bytes.extend(std::iter::repeat(0u8).take(self.unit_width()));
        Ok(bytes)
    }
}

impl fmt::Display for TextEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TextEncoding::Utf16Le => "utf-16le",
            TextEncoding::EucKr => "euc-kr",
            TextEncoding::Latin1 => "latin-1",
        })
    }
}

impl FromStr for TextEncoding {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "utf-16le" => Ok(TextEncoding::Utf16Le),
            "euc-kr" => Ok(TextEncoding::EucKr),
            "latin-1" => Ok(TextEncoding::Latin1),
            _ => Err(Error::UnsupportedEncoding(s.to_string())),
        }
    }
}
