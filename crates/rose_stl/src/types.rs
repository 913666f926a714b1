//! In-memory representation of an STL table.

use std::collections::BTreeMap;

use crate::language::Language;

/// What an entry carries per language, decided by the file's type tag.
///
/// Variants declare their field order; the base text field always comes
/// first.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum StlVariant {
    /// Text only (any tag other than the two below)
    Text,

    /// Text plus a comment ("ITST01")
    Item,

    /// Text, comment and two quest-reference strings ("QEST01")
    Quest,
}

impl StlVariant {
    /// The variant a type tag selects. Unknown tags behave as plain text.
    pub fn from_tag(tag: &str) -> StlVariant {
        match tag {
            "QEST01" => StlVariant::Quest,
            "ITST01" => StlVariant::Item,
            _ => StlVariant::Text,
        }
    }

    /// Whether a comment field follows the text.
    pub const fn has_comment(&self) -> bool {
        matches!(self, StlVariant::Item | StlVariant::Quest)
    }

    /// Whether two quest-reference strings follow the comment.
    pub const fn has_quest_strings(&self) -> bool {
        matches!(self, StlVariant::Quest)
    }
}

/// One entry's fields for one language.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LanguageText {
    pub text: String,
    pub comment: Option<String>,
    pub quest1: Option<String>,
    pub quest2: Option<String>,
}

/// One logical row: a string ID, a numeric ID, and per-language fields.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StlEntry {
    pub string_id: String,
    pub id: u32,
    pub texts: BTreeMap<Language, LanguageText>,
}

impl StlEntry {
    pub fn new(string_id: impl Into<String>, id: u32) -> StlEntry {
        StlEntry {
            string_id: string_id.into(),
            id,
            texts: BTreeMap::new(),
        }
    }

    /// The entry's text for a language, if that language was parsed.
    pub fn text(&self, language: Language) -> Option<&str> {
        self.texts.get(&language).map(|fields| fields.text.as_str())
    }

    /// Set the entry's text, creating the language record when absent.
    pub fn set_text(&mut self, language: Language, text: impl Into<String>) {
        self.texts.entry(language).or_default().text = text.into();
    }

    pub fn comment(&self, language: Language) -> Option<&str> {
        self.texts
            .get(&language)
            .and_then(|fields| fields.comment.as_deref())
    }

    pub fn set_comment(&mut self, language: Language, comment: impl Into<String>) {
        self.texts.entry(language).or_default().comment = Some(comment.into());
    }

    pub fn quest_strings(&self, language: Language) -> (Option<&str>, Option<&str>) {
        let fields = self.texts.get(&language);
        (
            fields.and_then(|fields| fields.quest1.as_deref()),
            fields.and_then(|fields| fields.quest2.as_deref()),
        )
    }

    pub fn set_quest_strings(
        &mut self,
        language: Language,
        quest1: impl Into<String>,
        quest2: impl Into<String>,
    ) {
        let fields = self.texts.entry(language).or_default();
        fields.quest1 = Some(quest1.into());
        fields.quest2 = Some(quest2.into());
    }
}

/// An STL table: the type tag, the language table, and the entries.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StlFile {
    pub(crate) tag: String,
    pub(crate) languages: Vec<Language>,
    pub(crate) entries: Vec<StlEntry>,
}

impl StlFile {
    /// Create an empty table with the given tag and language sections.
    pub fn new(tag: impl Into<String>, languages: Vec<Language>) -> StlFile {
        StlFile {
            tag: tag.into(),
            languages,
            entries: Vec::new(),
        }
    }

    /// The file's type tag, preserved verbatim for rewriting.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// The field layout the tag selects.
    pub fn variant(&self) -> StlVariant {
        StlVariant::from_tag(&self.tag)
    }

    /// The language sections in table order.
    pub fn languages(&self) -> &[Language] {
        &self.languages
    }

    pub fn entries(&self) -> &[StlEntry] {
        &self.entries
    }

    pub fn entries_mut(&mut self) -> &mut Vec<StlEntry> {
        &mut self.entries
    }

    pub fn push(&mut self, entry: StlEntry) {
        self.entries.push(entry);
    }

    /// Number of entries contained in this table.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether this table contains no entries
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use super::{StlEntry, StlVariant};
    use crate::language::Language;

    #[test]
    fn variant_from_tag() {
        assert_eq!(StlVariant::from_tag("QEST01"), StlVariant::Quest);
        assert_eq!(StlVariant::from_tag("ITST01"), StlVariant::Item);
        assert_eq!(StlVariant::from_tag("NRST01"), StlVariant::Text);
        assert_eq!(StlVariant::from_tag("LOCA01"), StlVariant::Text);
    }

    #[test]
    fn variant_field_lists() {
        assert!(!StlVariant::Text.has_comment());
        assert!(StlVariant::Item.has_comment());
        assert!(!StlVariant::Item.has_quest_strings());
        assert!(StlVariant::Quest.has_comment());
        assert!(StlVariant::Quest.has_quest_strings());
    }

    #[test]
    fn set_text_creates_language_record() {
        let mut entry = StlEntry::new("IDS_GREETING", 1);
        assert_eq!(entry.text(Language::English), None);

        entry.set_text(Language::English, "Welcome, traveller");
        assert_eq!(entry.text(Language::English), Some("Welcome, traveller"));
        assert_eq!(entry.comment(Language::English), None);
        assert_eq!(entry.text(Language::Korean), None);
    }
}
