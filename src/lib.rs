//! Asset-Atlas: a same-origin site crawler
//!
//! Starting from a seed URL, this crate walks a website breadth-first, records the
//! static assets (stylesheets, images, scripts) referenced by each page and follows
//! hyperlinks that stay on the seed's host, stopping at a configurable page cap.

pub mod config;
pub mod crawler;
pub mod output;
pub mod state;
pub mod url;

use thiserror::Error;

/// Main error type for Asset-Atlas operations
#[derive(Debug, Error)]
pub enum CrawlError {
    /// The seed could not be fetched; nothing was crawled
    #[error("Failed to fetch seed URL {url}: {source}")]
    SeedFetch { url: String, source: FetchError },

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("Output error: {0}")]
    Output(#[from] output::OutputError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
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

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// Transport-level failures of a single page fetch
///
/// HTTP error statuses are not represented here: a 404 or 500 still carries a
/// body and counts as a successful fetch.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Invalid URL {url}: {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("Request timeout for {url}")]
    Timeout { url: String },

    #[error("Connection failed for {url}: {source}")]
    Connect { url: String, source: reqwest::Error },

    #[error("Request failed for {url}: {source}")]
    Request { url: String, source: reqwest::Error },

    #[error("Failed to read body of {url}: {source}")]
    Body { url: String, source: reqwest::Error },

    /// Raised by non-HTTP fetchers (test doubles, alternate transports)
    #[error("Fetch failed for {url}: {message}")]
    Other { url: String, message: String },
}

impl FetchError {
    /// The URL whose fetch failed
    pub fn url(&self) -> &str {
        match self {
            Self::InvalidUrl { url, .. }
            | Self::Timeout { url }
            | Self::Connect { url, .. }
            | Self::Request { url, .. }
            | Self::Body { url, .. }
            | Self::Other { url, .. } => url,
        }
    }
}

/// Result type alias for Asset-Atlas operations
pub type Result<T> = std::result::Result<T, CrawlError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::Config;
pub use crawler::{crawl_site, Crawler, PageNode, DEFAULT_MAX_PAGES};
pub use output::{CrawlReport, PageRecord};
pub use state::PageState;
pub use self::url::{canonicalize, resolve, same_origin};
