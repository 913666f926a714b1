//! Types for writing STL string tables
//!

use bon::Builder;
use byteorder::{LittleEndian, WriteBytesExt};
use std::io::{Seek, SeekFrom, Write};
use tracing::instrument;

use rose_text::{write_prefixed_string, LengthPrefix, TextEncoding};

use crate::error::Result;
use crate::language::Language;
use crate::types::{LanguageText, StlFile};

const ENCODING: TextEncoding = TextEncoding::Latin1;
const PREFIX: LengthPrefix = LengthPrefix::Compact;

/// Options for how the STL file should be written
#[derive(Debug, Clone, Default, Builder)]
pub struct StlWriteOptions {
    /// Languages whose real content is written. Every language section is
    /// emitted either way; the ones not listed here get empty strings so
    /// the section structure survives without leaking stale text.
    #[builder(default)]
    pub languages: Vec<Language>,
}

impl StlFile {
    /// Serialize the table.
    ///
    /// Every offset table is rewritten from scratch: the language-offset
    /// table and each language's per-entry table are emitted as zeroed
    /// placeholders, each entry's real position is recorded immediately
    /// before its bytes go out, and the tables are backpatched once the
    /// positions they describe exist.
    #[instrument(skip(self, writer), err)]
    pub fn write<W: Write + Seek>(&self, mut writer: W, options: &StlWriteOptions) -> Result<()> {
        write_prefixed_string(&mut writer, PREFIX, &self.tag, ENCODING)?;

        writer.write_u32::<LittleEndian>(self.entries.len() as u32)?;
        for entry in &self.entries {
            write_prefixed_string(&mut writer, PREFIX, &entry.string_id, ENCODING)?;
            writer.write_u32::<LittleEndian>(entry.id)?;
        }

        writer.write_u32::<LittleEndian>(self.languages.len() as u32)?;

        let language_table_position = writer.stream_position()?;
        for _ in &self.languages {
            writer.write_u32::<LittleEndian>(0)?;
        }

        let mut entry_table_positions = Vec::with_capacity(self.languages.len());
        for _ in &self.languages {
            entry_table_positions.push(writer.stream_position()?);
            for _ in &self.entries {
                writer.write_u32::<LittleEndian>(0)?;
            }
        }

        let variant = self.variant();
        let empty = LanguageText::default();

        for (language, table_position) in self.languages.iter().zip(&entry_table_positions) {
            let selected = options.languages.contains(language);

            let mut offsets = Vec::with_capacity(self.entries.len());
            for entry in &self.entries {
                offsets.push(writer.stream_position()? as u32);

                let fields = if selected {
                    entry.texts.get(language).unwrap_or(&empty)
                } else {
                    &empty
                };

                write_prefixed_string(&mut writer, PREFIX, &fields.text, ENCODING)?;
                if variant.has_comment() {
                    let comment = fields.comment.as_deref().unwrap_or("");
                    write_prefixed_string(&mut writer, PREFIX, comment, ENCODING)?;
                }
                if variant.has_quest_strings() {
                    let quest1 = fields.quest1.as_deref().unwrap_or("");
                    let quest2 = fields.quest2.as_deref().unwrap_or("");
                    write_prefixed_string(&mut writer, PREFIX, quest1, ENCODING)?;
                    write_prefixed_string(&mut writer, PREFIX, quest2, ENCODING)?;
                }
            }

            let section_end = writer.stream_position()?;
            writer.seek(SeekFrom::Start(*table_position))?;
            for offset in &offsets {
                writer.write_u32::<LittleEndian>(*offset)?;
            }
            writer.seek(SeekFrom::Start(section_end))?;
        }

        writer.seek(SeekFrom::Start(language_table_position))?;
        for table_position in &entry_table_positions {
            writer.write_u32::<LittleEndian>(*table_position as u32)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod test {
    use pretty_assertions::{assert_eq, assert_str_eq};
    use std::io::Cursor;
    use tracing_test::traced_test;

    use crate::error::Result;
    use crate::language::Language;
    use crate::read::test::single_language_table;
    use crate::types::{StlEntry, StlFile};
    use crate::write::StlWriteOptions;

    #[traced_test]
    #[test]
    fn write_single_language_table() -> Result<()> {
        let mut stl = StlFile::new("LOCA01", vec![Language::Korean]);
        let mut entry = StlEntry::new("IDS_1", 1);
        entry.set_text(Language::Korean, "Hi");
        stl.push(entry);

        let mut output = Cursor::new(Vec::new());
        stl.write(
            &mut output,
            &StlWriteOptions::builder()
                .languages(vec![Language::Korean])
                .build(),
        )?;

        assert_str_eq!(
            format!("{:02X?}", output.get_ref()),
            format!("{:02X?}", single_language_table())
        );

        Ok(())
    }

    #[traced_test]
    #[test]
    fn unselected_languages_are_emptied() -> Result<()> {
        let mut stl = StlFile::new("LOCA01", vec![Language::Korean, Language::English]);
        let mut entry = StlEntry::new("IDS_1", 1);
        entry.set_text(Language::Korean, "stale");
        entry.set_text(Language::English, "stale");
        stl.push(entry);

        let mut output = Cursor::new(Vec::new());
        stl.write(&mut output, &StlWriteOptions::default())?;

        let reread = StlFile::read(
            Cursor::new(output.into_inner()),
            &[Language::Korean, Language::English],
        )?
        .expect("written table should parse");

        // Both sections exist, both decode to empty text
        assert_eq!(reread.languages().len(), 2);
        assert_eq!(reread.entries()[0].text(Language::Korean), Some(""));
        assert_eq!(reread.entries()[0].text(Language::English), Some(""));

        Ok(())
    }

    #[traced_test]
    #[test]
    fn quest_variant_writes_all_fields() -> Result<()> {
        let mut stl = StlFile::new("QEST01", vec![Language::Korean]);
        let mut entry = StlEntry::new("IDS_QUEST", 9);
        entry.set_text(Language::Korean, "Slay the jelly bean");
        entry.set_comment(Language::Korean, "tutorial quest");
        entry.set_quest_strings(Language::Korean, "step one", "step two");
        stl.push(entry);

        let mut output = Cursor::new(Vec::new());
        stl.write(
            &mut output,
            &StlWriteOptions::builder()
                .languages(vec![Language::Korean])
                .build(),
        )?;

        let reread = StlFile::read(Cursor::new(output.into_inner()), &[Language::Korean])?
            .expect("written table should parse");

        let entry = &reread.entries()[0];
        assert_eq!(entry.text(Language::Korean), Some("Slay the jelly bean"));
        assert_eq!(entry.comment(Language::Korean), Some("tutorial quest"));
        assert_eq!(
            entry.quest_strings(Language::Korean),
            (Some("step one"), Some("step two"))
        );

        Ok(())
    }

    #[traced_test]
    #[test]
    fn item_variant_writes_comment_only() -> Result<()> {
        let mut stl = StlFile::new("ITST01", vec![Language::Korean]);
        let mut entry = StlEntry::new("IDS_ITEM", 3);
        entry.set_text(Language::Korean, "Sturdy boots");
        entry.set_comment(Language::Korean, "starter gear");
        stl.push(entry);

        let mut output = Cursor::new(Vec::new());
        stl.write(
            &mut output,
            &StlWriteOptions::builder()
                .languages(vec![Language::Korean])
                .build(),
        )?;

        let reread = StlFile::read(Cursor::new(output.into_inner()), &[Language::Korean])?
            .expect("written table should parse");

        let entry = &reread.entries()[0];
        assert_eq!(entry.comment(Language::Korean), Some("starter gear"));
        assert_eq!(entry.quest_strings(Language::Korean), (None, None));

        Ok(())
    }
}
