use clap::Args;
use miette::{Context, IntoDiagnostic, Result};
use owo_colors::OwoColorize;
use std::{
    fs::File,
    path::{Path, PathBuf},
};

use rose_ltb::LtbFile;
use rose_text::TextEncoding;

#[derive(clap::Subcommand)]
pub enum LtbCommands {
    /// Show an LTB file's shape
    Info(InfoArgs),
    /// Print one cell of an LTB file
    Get(GetArgs),
}

impl LtbCommands {
    pub fn handle(&self) -> Result<()> {
        match self {
            LtbCommands::Info(info) => info.handle(),
            LtbCommands::Get(get) => get.handle(),
        }
    }
}

#[derive(Args)]
pub struct InfoArgs {
    /// An input LTB file
    #[arg(short, long, value_name = "FILE")]
    file: PathBuf,

    /// Encoding of the cell strings
    #[arg(short, long, default_value = "utf-16le")]
    encoding: TextEncoding,
}

impl InfoArgs {
    pub fn handle(&self) -> Result<()> {
        let ltb = open(&self.file, self.encoding)?;

        println!("{}", self.file.display().bold());
        println!("  encoding: {}", ltb.encoding());
        println!("  rows: {}", ltb.rows());
        println!("  columns: {}", ltb.columns());

        let populated = (0..ltb.rows())
            .flat_map(|row| (0..ltb.columns()).map(move |column| (row, column)))
            .filter(|&(row, column)| ltb.get(row, column).is_some())
            .count();
        println!(
            "  populated cells: {} of {}",
            populated.green(),
            ltb.rows() * ltb.columns()
        );

        Ok(())
    }
}

#[derive(Args)]
pub struct GetArgs {
    /// An input LTB file
    #[arg(short, long, value_name = "FILE")]
    file: PathBuf,

    /// Encoding of the cell strings
    #[arg(short, long, default_value = "utf-16le")]
    encoding: TextEncoding,

    #[arg(short, long)]
    row: usize,

    #[arg(short, long)]
    column: usize,
}

impl GetArgs {
    pub fn handle(&self) -> Result<()> {
        let ltb = open(&self.file, self.encoding)?;

        match ltb.get(self.row, self.column) {
            Some(text) => println!("{text}"),
            None => println!("{}", "(empty)".dimmed()),
        }

        Ok(())
    }
}

fn open(path: &Path, encoding: TextEncoding) -> Result<LtbFile> {
    let mut file = File::open(path)
        .into_diagnostic()
        .context(format!("path: {}", path.display()))?;

    Ok(LtbFile::read(&mut file, encoding)?)
}
