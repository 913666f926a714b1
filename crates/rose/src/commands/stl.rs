use clap::Args;
use miette::{Context, IntoDiagnostic, Result};
use owo_colors::OwoColorize;
use std::{fs::File, path::PathBuf};

use rose_stl::{Language, StlFile};

#[derive(clap::Subcommand)]
pub enum StlCommands {
    /// Show an STL file's tag, languages and entry count
    Info(InfoArgs),
}

impl StlCommands {
    pub fn handle(&self) -> Result<()> {
        match self {
            StlCommands::Info(info) => info.handle(),
        }
    }
}

#[derive(Args)]
pub struct InfoArgs {
    /// An input STL file
    #[arg(short, long, value_name = "FILE")]
    file: PathBuf,

    /// Languages to parse; repeat for more than one
    #[arg(short, long, default_value = "English")]
    language: Vec<Language>,
}

impl InfoArgs {
    pub fn handle(&self) -> Result<()> {
        let mut file = File::open(&self.file)
            .into_diagnostic()
            .context(format!("path: {}", &self.file.display()))?;

        match StlFile::read(&mut file, &self.language)? {
            Some(stl) => {
                println!("{}", self.file.display().bold());
                println!("  tag: {} ({:?})", stl.tag(), stl.variant());
                println!("  entries: {}", stl.len());
                println!("  languages:");
                for language in stl.languages() {
                    let marker = if self.language.contains(language) {
                        "parsed".green().to_string()
                    } else {
                        "skipped".dimmed().to_string()
                    };
                    println!("    {language} ({marker})");
                }
            }
            None => println!("{}", "no data: file is truncated or empty".red()),
        }

        Ok(())
    }
}
