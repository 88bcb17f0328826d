//! Extraction module: fetching, parsing and the per-URL loop
//!
//! This module contains the core of the tool:
//! - HTTP fetching with a fixed timeout and identifying user agent
//! - Quote-card parsing of fetched HTML
//! - The sequential fetch-parse-accumulate pipeline

mod fetcher;
mod parser;
mod pipeline;

pub use fetcher::{build_http_client, fetch_page};
pub use parser::parse_quotes_page;
pub use pipeline::{Extraction, FailedUrl, Pipeline, RunOutcome};

use crate::config::ExtractorConfig;
use crate::Result;
use std::path::Path;

/// Runs a complete extraction
///
/// This is the main entry point. It will:
/// 1. Read the URL list
/// 2. Fetch and parse every URL in order
/// 3. Normalize the accumulated table
/// 4. Write the CSV output
///
/// # Arguments
///
/// * `config` - The extractor configuration
/// * `urls_file` - Newline-delimited list of URLs
/// * `output_file` - Destination CSV path
///
/// # Returns
///
/// * `Ok(RunOutcome)` - The run finished, possibly through an early exit
/// * `Err(ExtractorError)` - Setup or writing the output failed
pub async fn run_extraction(
    config: ExtractorConfig,
    urls_file: &Path,
    output_file: &Path,
) -> Result<RunOutcome> {
    Pipeline::new(config)?.run(urls_file, output_file).await
}
