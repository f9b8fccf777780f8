use std::path::PathBuf;

use clap::Parser;

use crate::Commands;

/// Main CLI application arguments
#[derive(Parser)]
#[clap(
    version = "1.0.0",
    about = "Glow - a mindful, in-memory note-taking session"
)]
pub struct Cli {
    /// Path to the configuration file
    #[clap(short = 'c', long, value_parser)]
    pub config: Option<PathBuf>,

    /// Start with an empty session instead of the sample notes
    #[clap(long)]
    pub empty: bool,

    /// Verbose output mode
    #[clap(short, long)]
    pub verbose: bool,
}

/// Command grammar for a single line typed into the session shell.
#[derive(Parser)]
#[clap(name = "glow", no_binary_name = true)]
pub struct ShellLine {
    /// The command to run
    #[clap(subcommand)]
    pub command: Commands,
}
