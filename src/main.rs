//! Web-Extractor main entry point
//!
//! This is the command-line interface for the Web-Extractor quote scraper.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;
use web_extractor::config::load_optional_config;
use web_extractor::extractor::{run_extraction, RunOutcome};
use web_extractor::output::{format_preview, read_csv, DEFAULT_PREVIEW_ROWS};

/// Web-Extractor: scrape, clean, export
///
/// Fetches every URL in the list, extracts quote cards, normalizes the
/// resulting table and writes it as CSV.
#[derive(Parser, Debug)]
#[command(name = "web-extractor")]
#[command(version = "1.0.0")]
#[command(about = "Web-Extractor-Pro: scrape, clean, export", long_about = None)]
struct Cli {
    /// Path to file containing URLs (one per line)
    #[arg(long, value_name = "FILE", required_unless_present = "preview")]
    urls: Option<PathBuf>,

    /// Path to output CSV file
    #[arg(long, value_name = "FILE", required_unless_present = "preview")]
    output: Option<PathBuf>,

    /// Path to TOML configuration file
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Print a CSV produced by a previous run and exit
    #[arg(long, value_name = "CSV", conflicts_with_all = ["urls", "output", "config"])]
    preview: Option<PathBuf>,

    /// Maximum rows shown by --preview
    #[arg(long, default_value_t = DEFAULT_PREVIEW_ROWS)]
    limit: usize,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    if let Some(csv_path) = &cli.preview {
        return handle_preview(csv_path, cli.limit);
    }

    // clap enforces both flags outside preview mode
    let (Some(urls), Some(output)) = (cli.urls, cli.output) else {
        anyhow::bail!("--urls and --output are required");
    };

    handle_extract(cli.config.as_deref(), &urls, &output).await
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("web_extractor=info,warn"),
            1 => EnvFilter::new("web_extractor=debug,info"),
            2 => EnvFilter::new("web_extractor=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Handles the --preview mode: prints a previously written CSV
fn handle_preview(csv_path: &Path, limit: usize) -> Result<()> {
    let table = read_csv(csv_path)
        .with_context(|| format!("reading CSV for preview: {}", csv_path.display()))?;

    println!("=== {} ===\n", csv_path.display());
    print!("{}", format_preview(&table, limit));

    Ok(())
}

/// Handles the main extraction run
async fn handle_extract(config_path: Option<&Path>, urls: &Path, output: &Path) -> Result<()> {
    if let Some(path) = config_path {
        tracing::info!("Loading configuration from: {}", path.display());
    }
    let config = load_optional_config(config_path).context("loading configuration")?;

    tracing::info!("Reading URLs from: {}", urls.display());

    let outcome = run_extraction(config, urls, output)
        .await
        .with_context(|| format!("extracting quotes into {}", output.display()))?;

    match outcome {
        RunOutcome::Written {
            path,
            rows,
            failed_urls,
        } => {
            tracing::info!(
                "Wrote {} rows to {} ({} URLs failed)",
                rows,
                path.display(),
                failed_urls
            );
        }
        RunOutcome::NoRecords { failed_urls } => {
            tracing::warn!("No output written ({} URLs failed)", failed_urls);
        }
        RunOutcome::SourceMissing | RunOutcome::NoUrls => {
            tracing::warn!("No output written");
        }
    }

    Ok(())
}
