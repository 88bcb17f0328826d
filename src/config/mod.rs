//! Configuration module for Web-Extractor
//!
//! Settings come from an optional TOML file. Every key has a default, so a run
//! without `--config` uses the fixed timeout and user agent.
//!
//! # Example
//!
//! ```no_run
//! use web_extractor::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("extractor.toml")).unwrap();
//! println!("Request timeout: {}s", config.http.timeout_secs);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{
    ExtractorConfig, HttpConfig, DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT, MAX_TIMEOUT_SECS,
};

// Re-export parser functions
pub use parser::{load_config, load_optional_config, parse_config};
