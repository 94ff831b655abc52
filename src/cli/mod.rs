//! CLI interface using clap.
//!
//! A bare invocation runs the export; flags and the optional `scan`
//! subcommand refine it.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::application::OutputFormat;

/// Cursor Chat Export - flatten Cursor IDE chat history into Q&A records.
#[derive(Parser, Debug)]
#[command(name = "cursor-chat-export")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging (use multiple times for more verbosity).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Read exactly this store file instead of scanning workspaces.
    #[arg(long, value_name = "FILE")]
    pub db: Option<PathBuf>,

    /// Output file path (defaults to the configured name).
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format: csv or markdown.
    #[arg(short, long, default_value = "csv")]
    pub format: String,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List workspace stores with their prompt/generation counts.
    Scan,
}

impl Cli {
    /// Parse the output format argument.
    pub fn output_format(&self) -> Result<OutputFormat, String> {
        self.format.parse()
    }
}
