//! The language table shared by every STL file
//!

use derive_more::derive::Display;
use std::str::FromStr;

use crate::error::Error;

/// A language section of an STL file.
///
/// The on-disk format identifies languages purely by table position, so the
/// known set maps bidirectionally onto indices 0 to 4; positions beyond the
/// known set are carried as [`Language::Other`] with a synthesized name.
#[derive(Debug, Display, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Language {
    Korean,
    English,
    Japanese,
    #[display("Chinese_Simplified")]
    ChineseSimplified,
    #[display("Chinese_Traditional")]
    ChineseTraditional,
    #[display("Language_{_0}")]
    Other(u32),
}

/// The languages with fixed table positions, in on-disk order.
pub const KNOWN_LANGUAGES: [Language; 5] = [
    Language::Korean,
    Language::English,
    Language::Japanese,
    Language::ChineseSimplified,
    Language::ChineseTraditional,
];

impl Language {
    /// The language at the given table position.
    pub fn from_index(index: usize) -> Language {
        KNOWN_LANGUAGES
            .get(index)
            .copied()
            .unwrap_or(Language::Other(index as u32))
    }

    /// This language's table position.
    pub fn index(&self) -> usize {
        match self {
            Language::Korean => 0,
            Language::English => 1,
            Language::Japanese => 2,
            Language::ChineseSimplified => 3,
            Language::ChineseTraditional => 4,
            Language::Other(index) => *index as usize,
        }
    }
}

impl FromStr for Language {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Korean" => Ok(Language::Korean),
            "English" => Ok(Language::English),
            "Japanese" => Ok(Language::Japanese),
            "Chinese_Simplified" => Ok(Language::ChineseSimplified),
            "Chinese_Traditional" => Ok(Language::ChineseTraditional),
            other => other
                .strip_prefix("Language_")
                .and_then(|index| index.parse().ok())
                .map(Language::Other)
                .ok_or_else(|| Error::UnknownLanguage(s.to_string())),
        }
    }
}
