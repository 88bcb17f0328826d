//! Extraction pipeline - the fetch-parse-accumulate loop
//!
//! URLs are processed strictly one at a time. A failure on one URL (network,
//! timeout, status or parse) is logged and contributes zero records; the loop
//! then moves on. There is no retry and no backoff.

use crate::config::ExtractorConfig;
use crate::extractor::parser::parse_quotes_page;
use crate::extractor::{build_http_client, fetch_page};
use crate::output::write_csv;
use crate::source::{read_urls, UrlSource};
use crate::table::{normalize_table, QuoteRecord, Table};
use crate::{ExtractorError, Result};
use reqwest::Client;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// How a run ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// The URL list file does not exist; nothing was written
    SourceMissing,

    /// The URL list held no URLs; nothing was written
    NoUrls,

    /// Every URL failed or yielded zero records; nothing was written
    NoRecords {
        /// Number of URLs that failed
        failed_urls: usize,
    },

    /// The normalized table was written
    Written {
        /// Absolute path of the CSV file
        path: PathBuf,
        /// Data rows written
        rows: usize,
        /// Number of URLs that failed
        failed_urls: usize,
    },
}

/// A URL that contributed nothing because it failed
#[derive(Debug)]
pub struct FailedUrl {
    pub url: String,
    pub error: ExtractorError,
}

/// Records accumulated over a list of URLs
#[derive(Debug, Default)]
pub struct Extraction {
    /// Records from every successful URL, in URL then document order
    pub records: Vec<QuoteRecord>,

    /// URLs that failed, in the order they were attempted
    pub failures: Vec<FailedUrl>,
}

/// Sequential quote extraction pipeline
pub struct Pipeline {
    client: Client,
}

impl Pipeline {
    /// Creates a new pipeline
    ///
    /// # Arguments
    ///
    /// * `config` - The extractor configuration
    ///
    /// # Returns
    ///
    /// * `Ok(Pipeline)` - HTTP client built
    /// * `Err(ExtractorError)` - Failed to build the HTTP client
    pub fn new(config: ExtractorConfig) -> Result<Self> {
        let client = build_http_client(&config.http)?;

        tracing::debug!(
            "HTTP client ready (timeout {}s, user agent '{}')",
            config.http.timeout_secs,
            config.http.user_agent
        );

        Ok(Self { client })
    }

    /// Runs the whole pipeline from URL list to CSV file
    ///
    /// Two early exits end the run without writing anything: no URLs to
    /// process, and no records extracted. Neither is an error.
    pub async fn run(&self, urls_file: &Path, output_file: &Path) -> Result<RunOutcome> {
        let urls = match read_urls(urls_file)? {
            UrlSource::Missing => {
                tracing::error!("No URLs to process. Exiting.");
                return Ok(RunOutcome::SourceMissing);
            }
            UrlSource::Loaded(urls) => urls,
        };

        if urls.is_empty() {
            tracing::error!("No URLs to process. Exiting.");
            return Ok(RunOutcome::NoUrls);
        }

        let extraction = self.extract(&urls).await;
        let failed_urls = extraction.failures.len();

        if extraction.records.is_empty() {
            tracing::error!("No items extracted. Exiting.");
            return Ok(RunOutcome::NoRecords { failed_urls });
        }

        let table = normalize_table(Table::from_records(extraction.records));
        let rows = table.len();
        let path = write_csv(&table, output_file)?;

        Ok(RunOutcome::Written {
            path,
            rows,
            failed_urls,
        })
    }

    /// Fetches and parses every URL in order, accumulating records
    pub async fn extract(&self, urls: &[String]) -> Extraction {
        let mut extraction = Extraction::default();
        let start_time = Instant::now();

        for url in urls {
            tracing::info!("Fetching: {}", url);

            match self.process_url(url).await {
                Ok(records) => {
                    tracing::debug!("{} quotes from {}", records.len(), url);
                    extraction.records.extend(records);
                }
                Err(error) => {
                    tracing::error!("Failed to fetch or parse {}: {}", url, error);
                    extraction.failures.push(FailedUrl {
                        url: url.clone(),
                        error,
                    });
                }
            }
        }

        tracing::info!(
            "Extraction finished: {} records from {} URLs ({} failed) in {:?}",
            extraction.records.len(),
            urls.len(),
            extraction.failures.len(),
            start_time.elapsed()
        );

        extraction
    }

    /// Fetches a single URL and parses its quotes
    pub async fn process_url(&self, url: &str) -> Result<Vec<QuoteRecord>> {
        let body = fetch_page(&self.client, url).await?;

        parse_quotes_page(&body).map_err(|message| ExtractorError::HtmlParse {
            url: url.to_string(),
            message,
        })
    }
}
