//! Web-Extractor: fetch quote pages, scrape them into records, write a clean CSV
//!
//! The crate is a straight-line pipeline: read a URL list, fetch and parse each
//! page in turn, normalize the accumulated table and write it to disk.

pub mod config;
pub mod extractor;
pub mod output;
pub mod source;
pub mod table;

use thiserror::Error;

/// Main error type for Web-Extractor operations
#[derive(Debug, Error)]
pub enum ExtractorError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("HTTP error for {url}: {source}")]
    Http { url: String, source: reqwest::Error },

    #[error("Request timeout for {url}")]
    Timeout { url: String },

    #[error("HTTP status {status} for {url}")]
    Status { url: String, status: u16 },

    #[error("Invalid URL {url}: {source}")]
    InvalidUrl {
        url: String,
        source: ::url::ParseError,
    },

    #[error("HTML parse error for {url}: {message}")]
    HtmlParse { url: String, message: String },

    #[error("HTTP client error: {0}")]
    Client(#[from] reqwest::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ExtractorError {
    /// Returns true for failures scoped to a single URL.
    ///
    /// The pipeline logs these and moves on to the next URL.
    pub fn is_per_url(&self) -> bool {
        matches!(
            self,
            ExtractorError::Http { .. }
                | ExtractorError::Timeout { .. }
                | ExtractorError::Status { .. }
                | ExtractorError::InvalidUrl { .. }
                | ExtractorError::HtmlParse { .. }
        )
    }
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),
}

/// Result type alias for Web-Extractor operations
pub type Result<T> = std::result::Result<T, ExtractorError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::ExtractorConfig;
pub use extractor::{run_extraction, Pipeline, RunOutcome};
pub use source::{read_urls, UrlSource};
pub use table::{normalize_table, QuoteRecord, Table};
