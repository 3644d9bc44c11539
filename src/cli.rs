//! Command line arguments of the insurance-store binary.

use std::path::PathBuf;

use clap::Parser;

use crate::config::OutputFormat;

/// Run the insurance company through a dispatch script and print snapshots.
#[derive(Debug, Parser)]
#[command(name = "insurance-store", version)]
pub struct Cli {
    /// JSON dispatch script to play instead of the demo run
    #[arg(long, value_name = "PATH")]
    pub script: Option<PathBuf>,

    /// Config file to use instead of the default location
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Snapshot output format (overrides config)
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}
