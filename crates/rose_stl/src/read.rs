//! Types for reading STL string tables
//!

use byteorder::{LittleEndian, ReadBytesExt};
use std::io::{Read, Seek, SeekFrom};
use tracing::{instrument, warn};

use rose_text::{read_prefixed_string, LengthPrefix, TextEncoding};

use crate::error::{Error, Result};
use crate::language::Language;
use crate::types::{LanguageText, StlEntry, StlFile, StlVariant};

const ENCODING: TextEncoding = TextEncoding::Latin1;
const PREFIX: LengthPrefix = LengthPrefix::Compact;

impl StlFile {
    /// Read an STL file, parsing string sections only for the requested
    /// languages. Every language's offset table still exists on disk with
    /// one slot per entry; unrequested sections are simply never visited.
    ///
    /// This codec is deliberately lenient: a file whose header, offset
    /// tables or payloads end early parses to `Ok(None)` — the "no data"
    /// result — so batch tooling can tell "nothing parsed" from a crash.
    /// Non-truncation I/O errors still propagate.
    #[instrument(skip(reader), err)]
    pub fn read<R: Read + Seek>(
        mut reader: R,
        languages_to_parse: &[Language],
    ) -> Result<Option<StlFile>> {
        match Self::read_inner(&mut reader, languages_to_parse) {
            Ok(file) => Ok(Some(file)),
            Err(Error::Truncated) => {
                warn!("input truncated, returning no data");
                Ok(None)
            }
            Err(other) => Err(other),
        }
    }

    fn read_inner<R: Read + Seek>(
        reader: &mut R,
        languages_to_parse: &[Language],
    ) -> Result<StlFile> {
        let tag = read_prefixed_string(reader, PREFIX, ENCODING)?;
        let variant = StlVariant::from_tag(&tag);

        let entry_count = reader.read_u32::<LittleEndian>()?;

        let mut entries = Vec::with_capacity(entry_count as usize);
        for _ in 0..entry_count {
            let string_id = read_prefixed_string(reader, PREFIX, ENCODING)?;
            let id = reader.read_u32::<LittleEndian>()?;
            entries.push(StlEntry::new(string_id, id));
        }

        let language_count = reader.read_u32::<LittleEndian>()?;
        let languages: Vec<Language> = (0..language_count as usize)
            .map(Language::from_index)
            .collect();

        let mut language_offsets = Vec::with_capacity(languages.len());
        for _ in &languages {
            language_offsets.push(reader.read_u32::<LittleEndian>()?);
        }

        let mut offset_tables = Vec::new();
        for (language, offset) in languages.iter().zip(&language_offsets) {
            if !languages_to_parse.contains(language) {
                continue;
            }

            reader.seek(SeekFrom::Start(*offset as u64))?;
            let mut offsets = Vec::with_capacity(entry_count as usize);
            for _ in 0..entry_count {
                offsets.push(reader.read_u32::<LittleEndian>()?);
            }
            offset_tables.push((*language, offsets));
        }

        for (language, offsets) in offset_tables {
            for (entry, offset) in entries.iter_mut().zip(&offsets) {
                reader.seek(SeekFrom::Start(*offset as u64))?;

                let mut fields = LanguageText {
                    text: read_prefixed_string(reader, PREFIX, ENCODING)?,
                    ..Default::default()
                };
                if variant.has_comment() {
                    fields.comment = Some(read_prefixed_string(reader, PREFIX, ENCODING)?);
                }
                if variant.has_quest_strings() {
                    fields.quest1 = Some(read_prefixed_string(reader, PREFIX, ENCODING)?);
                    fields.quest2 = Some(read_prefixed_string(reader, PREFIX, ENCODING)?);
                }

                entry.texts.insert(language, fields);
            }
        }

        Ok(StlFile {
            tag,
            languages,
            entries,
        })
    }
}
