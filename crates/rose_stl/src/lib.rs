//! This library handles reading from and creating **STL** files used by *ROSE Online*.
//!
//! # STL Format Documentation
//!
//! The STL format is a custom binary format that stores one table of
//! localized strings for several languages at once: a list of entry IDs
//! followed by, per language, an offset table into that language's own
//! string section. STL files are typically identified with the `.stl`
//! extension.
//!
//! ## File Structure
//!
//! | Field                  | Description                                                  |
//! |------------------------|--------------------------------------------------------------|
//! | Type Tag               | Length-prefixed string, e.g. "NRST01", "ITST01", "QEST01"    |
//! | Entry Count            | 4 bytes: Number of entries                                   |
//! | Entries                | Per entry: length-prefixed string ID, 4-byte numeric ID      |
//! | Language Count         | 4 bytes: Number of language sections                         |
//! | Language Offsets       | 4 bytes each: Offset of that language's entry-offset table   |
//! | Entry Offset Tables    | Per language, `entry_count` 4-byte entry offsets             |
//! | String Sections        | Per language, each entry's fields at its recorded offset     |
//!
//! Language index is positional: index 0 is Korean, then English, Japanese,
//! Simplified Chinese and Traditional Chinese; indices beyond the known set
//! are synthesized as `Language_n`.
//!
//! ### Entry Fields
//!
//! The type tag decides which fields follow each entry's text:
//!
//! | Tag        | Fields per entry and language                  |
//! |------------|------------------------------------------------|
//! | `QEST01`   | text, comment, two quest-reference strings     |
//! | `ITST01`   | text, comment                                  |
//! | any other  | text                                           |
//!
//! All strings use the compact length prefix (one byte, spilling into a
//! second byte for lengths of 128 and above).
//!
//! ## Additional Information
//!
//! - **File Extension**: `.stl`
//! - **Endianness**: Little-endian for all multi-byte integers
//! - **Parse leniency**: a truncated file parses to a "no data" result
//!   rather than an error, so batch tooling can report it and move on
//!

pub mod error;
pub mod language;
pub mod read;
pub mod types;
pub mod write;

#[cfg(feature = "serde")]
mod serde;

pub use language::Language;
pub use types::{LanguageText, StlEntry, StlFile, StlVariant};
pub use write::StlWriteOptions;
