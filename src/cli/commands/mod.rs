pub mod info;
pub mod normalize;

use clap::Subcommand;
use std::path::PathBuf;

#[derive(Subcommand)]
pub enum Commands {
    /// Print a summary of an ACT file
    Info {
        /// ACT file to inspect
        file: PathBuf,

        /// Also list every frame's layer count and event
        #[arg(short, long)]
        verbose: bool,
    },

    /// Rewrite an ACT file at the newest format version (0x205)
    Normalize {
        /// Source ACT file (any supported version)
        source: PathBuf,

        /// Output path for the rewritten file
        destination: PathBuf,

        /// Suppress the summary line
        #[arg(short, long)]
        quiet: bool,
    },
}

impl Commands {
    /// Execute the selected command.
    ///
    /// # Errors
    /// Returns an error if the underlying command fails.
    pub fn execute(&self) -> anyhow::Result<()> {
        match self {
            Commands::Info { file, verbose } => info::execute(file, *verbose),
            Commands::Normalize {
                source,
                destination,
                quiet,
            } => normalize::execute(source, destination, *quiet),
        }
    }
}
