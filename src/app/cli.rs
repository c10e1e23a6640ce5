use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Generate and replicate pattern-named files in a directory"
)]
pub struct Cli {
    /// Settings file to read instead of ~/.config/fileops/config.toml
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Filename template with a single '*' for the index (e.g. '50.114.4.*')
    #[arg(long, global = true)]
    pub pattern: Option<String>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Write 256 copies of the source file, one per pattern index
    Generate {
        /// File whose bytes are copied
        #[arg(long)]
        source: Option<PathBuf>,

        /// Directory receiving the generated files
        #[arg(long)]
        dir: Option<PathBuf>,
    },

    /// Overwrite every matching file with the most recently modified one
    Replicate {
        /// Directory to scan
        #[arg(long)]
        dir: Option<PathBuf>,
    },

    /// List matching files and mark the most recently modified one
    Scan {
        /// Directory to scan
        #[arg(long)]
        dir: Option<PathBuf>,
    },
}

impl Command {
    pub fn dir(&self) -> Option<&PathBuf> {
        match self {
            Command::Generate { dir, .. } | Command::Replicate { dir } | Command::Scan { dir } => {
                dir.as_ref()
            }
        }
    }

    pub fn source(&self) -> Option<&PathBuf> {
        match self {
            Command::Generate { source, .. } => source.as_ref(),
            _ => None,
        }
    }
}
