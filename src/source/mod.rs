//! URL source reading
//!
//! Loads the newline-delimited list of target URLs. Lines are trimmed and
//! blank lines dropped; nothing else is validated here, so a malformed URL
//! surfaces later as a fetch failure.

use crate::Result;
use std::io::ErrorKind;
use std::path::Path;

/// Outcome of reading the URL list file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UrlSource {
    /// The file does not exist
    Missing,

    /// The file was read; may still hold zero URLs
    Loaded(Vec<String>),
}

impl UrlSource {
    /// Returns the URLs in file order, or an empty slice when the file is missing
    pub fn urls(&self) -> &[String] {
        match self {
            UrlSource::Missing => &[],
            UrlSource::Loaded(urls) => urls,
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, UrlSource::Missing)
    }

    pub fn into_urls(self) -> Vec<String> {
        match self {
            UrlSource::Missing => Vec::new(),
            UrlSource::Loaded(urls) => urls,
        }
    }
}

/// Reads target URLs from a text file, one per line
///
/// # Arguments
///
/// * `path` - Path to the UTF-8 URL list
///
/// # Returns
///
/// * `Ok(UrlSource::Missing)` - The file does not exist
/// * `Ok(UrlSource::Loaded(urls))` - Trimmed, non-empty lines in order
/// * `Err(ExtractorError::Io)` - The file exists but could not be read
pub fn read_urls(path: &Path) -> Result<UrlSource> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::error!("URLs file not found: {}", path.display());
            return Ok(UrlSource::Missing);
        }
        Err(e) => return Err(e.into()),
    };

    Ok(UrlSource::Loaded(parse_url_list(&content)))
}

/// Splits URL list text into trimmed, non-empty entries
pub fn parse_url_list(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
