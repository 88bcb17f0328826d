//! HTTP fetcher implementation
//!
//! One GET per URL. No retries, no redirect bookkeeping: any transport
//! error, timeout or non-2xx status is returned as a per-URL error.

use crate::config::HttpConfig;
use crate::{ExtractorError, Result};
use reqwest::Client;
use url::Url;

/// Builds an HTTP client with proper configuration
///
/// # Arguments
///
/// * `config` - The HTTP configuration (timeout and user agent)
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
///
/// # Example
///
/// ```no_run
/// use web_extractor::config::HttpConfig;
/// use web_extractor::extractor::build_http_client;
///
/// let client = build_http_client(&HttpConfig::default()).unwrap();
/// ```
pub fn build_http_client(config: &HttpConfig) -> std::result::Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(config.user_agent.as_str())
        .timeout(config.timeout())
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches a URL and returns the response body
///
/// # Error Mapping
///
/// | Condition | Error |
/// |-----------|-------|
/// | URL does not parse | `InvalidUrl` |
/// | Timeout | `Timeout` |
/// | Non-2xx status | `Status` |
/// | Any other transport error | `Http` |
///
/// # Arguments
///
/// * `client` - The HTTP client to use
/// * `url` - The URL to fetch
pub async fn fetch_page(client: &Client, url: &str) -> Result<String> {
    let target = Url::parse(url).map_err(|source| ExtractorError::InvalidUrl {
        url: url.to_string(),
        source,
    })?;

    let response = client
        .get(target)
        .send()
        .await
        .map_err(|e| classify_error(url, e))?;

    let status = response.status();
    if !status.is_success() {
        return Err(ExtractorError::Status {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    tracing::trace!("{} responded with {}", url, status);

    response.text().await.map_err(|e| classify_error(url, e))
}

fn classify_error(url: &str, error: reqwest::Error) -> ExtractorError {
    if error.is_timeout() {
        ExtractorError::Timeout {
            url: url.to_string(),
        }
    } else {
        ExtractorError::Http {
            url: url.to_string(),
            source: error,
        }
    }
}
