use std::fmt;
use std::str::FromStr;

use serde::{
    de::{self, Visitor},
    Deserialize, Serialize,
};

use crate::language::Language;

// Languages serialize as their display name so they can key JSON maps.

impl Serialize for Language {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

struct LanguageVisitor {}

impl LanguageVisitor {
    fn new() -> Self {
        LanguageVisitor {}
    }
}

impl<'de> Visitor<'de> for LanguageVisitor {
    type Value = Language;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a language name")
    }

    fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Language::from_str(value)
            .map_err(|_| E::invalid_value(de::Unexpected::Str(value), &self))
    }
}

impl<'de> Deserialize<'de> for Language {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_str(LanguageVisitor::new())
    }
}
