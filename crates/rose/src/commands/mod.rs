pub mod dialogue;
pub mod ltb;
pub mod scan;
pub mod stb;
pub mod stl;

#[derive(clap::Subcommand)]
pub enum Commands {
    /// Handle LTB language table files
    Ltb {
        #[command(subcommand)]
        command: ltb::LtbCommands,
    },
    /// Handle STB data table files
    Stb {
        #[command(subcommand)]
        command: stb::StbCommands,
    },
    /// Handle STL string table files
    Stl {
        #[command(subcommand)]
        command: stl::StlCommands,
    },
    /// Scan a directory of table files and report what parses
    Scan(scan::ScanArgs),
    /// Inspect dialogue generation requests
    Dialogue {
        #[command(subcommand)]
        command: dialogue::DialogueCommands,
    },
}

impl Commands {
    pub fn handle(&self) -> miette::Result<()> {
        match self {
            Commands::Ltb { command } => command.handle(),
            Commands::Stb { command } => command.handle(),
            Commands::Stl { command } => command.handle(),
            Commands::Scan(scan) => scan.handle(),
            Commands::Dialogue { command } => command.handle(),
        }
    }
}
