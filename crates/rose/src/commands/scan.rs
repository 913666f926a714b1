use clap::Args;
use itertools::Itertools;
use miette::Result;
use owo_colors::OwoColorize;
use std::{
    fs::File,
    path::{Path, PathBuf},
};
use tracing::{info, warn};
use walkdir::WalkDir;

use rose_ltb::LtbFile;
use rose_stb::StbFile;
use rose_stl::StlFile;
use rose_text::TextEncoding;

#[derive(Args)]
pub struct ScanArgs {
    /// Directory to walk for .ltb, .stb and .stl files
    #[arg(short, long, value_name = "DIR")]
    directory: PathBuf,

    /// Encoding used for LTB cell strings
    #[arg(short, long, default_value = "utf-16le")]
    encoding: TextEncoding,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
enum Outcome {
    Parsed,
    NoData,
    Failed,
}

impl ScanArgs {
    pub fn handle(&self) -> Result<()> {
        let mut outcomes = Vec::new();

        for entry in WalkDir::new(&self.directory)
            .into_iter()
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().is_file())
        {
            let path = entry.path();
            let Some(extension) = path.extension().and_then(|e| e.to_str()) else {
                continue;
            };

            let outcome = match extension.to_ascii_lowercase().as_str() {
                "ltb" => self.try_ltb(path),
                "stb" => self.try_stb(path),
                "stl" => self.try_stl(path),
                _ => continue,
            };

            info!("{}: {:?}", path.display(), outcome);
            outcomes.push((extension.to_ascii_lowercase(), outcome));
        }

        outcomes.sort_by(|a, b| a.0.cmp(&b.0));
        for (extension, group) in &outcomes.iter().chunk_by(|(extension, _)| extension) {
            let counts = group.counts_by(|(_, outcome)| *outcome);
            println!(
                "{}: {} parsed, {} no data, {} failed",
                extension.bold(),
                counts.get(&Outcome::Parsed).copied().unwrap_or(0).green(),
                counts.get(&Outcome::NoData).copied().unwrap_or(0).yellow(),
                counts.get(&Outcome::Failed).copied().unwrap_or(0).red(),
            );
        }

        Ok(())
    }

    fn try_ltb(&self, path: &Path) -> Outcome {
        match File::open(path).map_err(rose_ltb::error::Error::from).and_then(|mut file| {
            LtbFile::read(&mut file, self.encoding)
        }) {
            Ok(_) => Outcome::Parsed,
            Err(error) => {
                warn!("{}: {error}", path.display());
                Outcome::Failed
            }
        }
    }

    fn try_stb(&self, path: &Path) -> Outcome {
        match File::open(path).map_err(rose_stb::error::Error::from).and_then(|mut file| {
            StbFile::read(&mut file)
        }) {
            Ok(_) => Outcome::Parsed,
            Err(error) => {
                warn!("{}: {error}", path.display());
                Outcome::Failed
            }
        }
    }

    fn try_stl(&self, path: &Path) -> Outcome {
        match File::open(path).map_err(rose_stl::error::Error::from).and_then(|mut file| {
            StlFile::read(&mut file, &[rose_stl::Language::English])
        }) {
            Ok(Some(_)) => Outcome::Parsed,
            // The lenient contract: truncated files report as "no data"
            Ok(None) => Outcome::NoData,
            Err(error) => {
                warn!("{}: {error}", path.display());
                Outcome::Failed
            }
        }
    }
}
