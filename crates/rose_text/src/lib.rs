//! String primitives shared by the ROSE Online table-file codecs.
//!
//! The LTB, STB and STL formats all store text as raw bytes in one of a
//! small set of encodings, under two representations:
//!
//! - **Null-terminated**: the payload is followed by a NUL sized to the
//!   encoding's code unit (two zero bytes for UTF-16LE, one byte for the
//!   legacy encodings). Used by the LTB string blob.
//! - **Length-prefixed**: an explicit length followed by that many payload
//!   bytes, with no terminator. Two prefix forms exist:
//!
//! | Form      | Layout                                                       |
//! |-----------|--------------------------------------------------------------|
//! | `Compact` | 1 byte; if the high bit is set, length = (b0 - 128) + b1 * 128 |
//! | `Fixed16` | little-endian signed 16-bit length                           |
//!
//! `Compact` supports lengths up to 16383 and is used by the STL format;
//! `Fixed16` is used by the STB format.
//!
//! ## Encodings
//!
//! | Name       | Unit width | Notes                                        |
//! |------------|------------|----------------------------------------------|
//! | `utf-16le` | 2 bytes    | wide strings, LTB default                    |
//! | `euc-kr`   | 1 byte     | legacy Korean text; sizes count bytes        |
//! | `latin-1`  | 1 byte     | STL payloads; decoding never fails           |

pub mod encoding;
pub mod error;
pub mod prefix;

pub use encoding::TextEncoding;
pub use prefix::{read_prefixed_string, write_prefixed_string, LengthPrefix};
