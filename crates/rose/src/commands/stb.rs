use clap::Args;
use miette::{Context, IntoDiagnostic, Result};
use owo_colors::OwoColorize;
use std::{fs::File, path::PathBuf};

use rose_stb::StbFile;

#[derive(clap::Subcommand)]
pub enum StbCommands {
    /// Show an STB file's shape and columns
    Info(InfoArgs),
}

impl StbCommands {
    pub fn handle(&self) -> Result<()> {
        match self {
            StbCommands::Info(info) => info.handle(),
        }
    }
}

#[derive(Args)]
pub struct InfoArgs {
    /// An input STB file
    #[arg(short, long, value_name = "FILE")]
    file: PathBuf,
}

impl InfoArgs {
    pub fn handle(&self) -> Result<()> {
        let mut file = File::open(&self.file)
            .into_diagnostic()
            .context(format!("path: {}", &self.file.display()))?;
        let stb = StbFile::read(&mut file)?;

        println!("{}", self.file.display().bold());
        println!("  rows: {}", stb.row_count());
        println!("  row size: {}", stb.row_size());
        println!("  columns:");
        for (index, name) in stb.column_names().iter().enumerate() {
            println!("    {index:3} {name}");
        }

        Ok(())
    }
}
