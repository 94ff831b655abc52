//! Cursor Chat Export - flatten Cursor IDE chat history into Q&A records.
//!
//! This tool reads the `aiService.prompts` and `aiService.generations`
//! arrays from a workspace `state.vscdb`, pairs them by index, and writes
//! a CSV (or Markdown) export with a console summary.
//!
//! QUICK START:
//!   cursor-chat-export                  # Discover the store and export CSV
//!   cursor-chat-export --db <file>      # Export a specific store file
//!   cursor-chat-export -f markdown      # Export as Markdown instead
//!   cursor-chat-export scan             # List candidate workspace stores

mod application;
mod cli;
mod domain;
mod infrastructure;

use std::path::PathBuf;

use chrono::Local;
use clap::Parser;
use colored::Colorize;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use application::{
    extract_from_store, format_records_markdown, format_stats, format_workspace_table, render_csv,
    write_export, OutputFormat,
};
use cli::{Cli, Commands};
use domain::{AppConfig, ExportStats};
use infrastructure::{
    find_cursor_config_dir, load_config, scan_workspaces, workspace_storage_dir, StoreResolver,
};

fn main() {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("{} {}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}

/// Main application logic.
fn run(cli: Cli) -> domain::Result<()> {
    let format = cli
        .output_format()
        .map_err(|e| domain::AppError::Config { message: e })?;

    let config = load_config()?;

    match cli.command {
        Some(Commands::Scan) => cmd_scan(&config),
        None => cmd_export(&cli, &config, format),
    }
}

/// Export command: locate the store, reconcile, write, summarize.
fn cmd_export(cli: &Cli, config: &AppConfig, format: OutputFormat) -> domain::Result<()> {
    let resolver = match &cli.db {
        Some(path) => StoreResolver::Fixed(path.clone()),
        None => StoreResolver::Discover(storage_root(config)?),
    };

    let store_path = resolver.resolve()?;
    println!("{} Chat store: {}", "🔍".bold(), store_path.display());

    let records = extract_from_store(&store_path, &config.export.project_label, Local::now())?;
    let stats = ExportStats::from_records(&records);

    let content = match format {
        OutputFormat::Csv => render_csv(&records),
        OutputFormat::Markdown => format_records_markdown(&records),
    };

    let output_path = output_path(cli, config, format);
    write_export(&output_path, &content)?;

    println!(
        "{} Exported {} records to {}",
        "✓".green().bold(),
        stats.total_records,
        output_path.display()
    );
    println!();
    println!("{}", format_stats(&stats));

    Ok(())
}

/// Scan command: list candidate stores with their counts.
fn cmd_scan(config: &AppConfig) -> domain::Result<()> {
    let root = storage_root(config)?;
    let stores = scan_workspaces(&root)?;

    println!("{}", "📂 Cursor Workspace Stores".bold());
    println!();
    println!("{}", format_workspace_table(&stores));
    println!();
    println!("Total: {} store(s)", stores.len());

    Ok(())
}

/// Resolves the workspace storage root from the config override or
/// platform discovery.
fn storage_root(config: &AppConfig) -> domain::Result<PathBuf> {
    let cursor_dir = match &config.paths.cursor_dir {
        Some(dir) => dir.clone(),
        None => find_cursor_config_dir()?,
    };
    Ok(workspace_storage_dir(&cursor_dir))
}

/// Output file from the CLI flag, or the configured name adjusted to the
/// chosen format's extension.
fn output_path(cli: &Cli, config: &AppConfig, format: OutputFormat) -> PathBuf {
    cli.output.clone().unwrap_or_else(|| {
        PathBuf::from(&config.export.output_file).with_extension(format.extension())
    })
}

/// Setup tracing/logging based on verbosity level.
fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).without_time())
        .with(filter)
        .init();
}
