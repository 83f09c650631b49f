//! HTTP fetcher implementation
//!
//! This module handles all HTTP requests for the crawler, including:
//! - Building HTTP clients with proper user agent strings and timeouts
//! - GET requests to fetch page content
//! - Error classification
//!
//! Every fetch is attempted exactly once. HTTP error statuses are returned
//! as successful fetches so their bodies are still parsed.

use crate::config::Config;
use crate::FetchError;
use reqwest::Client;
use std::future::Future;
use std::time::Duration;
use url::Url;

/// A fetched HTTP response
#[derive(Debug, Clone)]
pub struct FetchedPage {
    /// Final URL after redirects
    pub final_url: String,
    /// HTTP status code
    pub status_code: u16,
    /// Page body content, decoded as text
    pub body: String,
}

/// Capability to fetch a page body by URL
///
/// The crawl loop only talks to the network through this trait, so it can be
/// driven by an in-memory site in tests.
pub trait Fetch {
    /// Performs a single GET against `url`
    fn fetch(&self, url: &str) -> impl Future<Output = Result<FetchedPage, FetchError>> + Send;
}

/// Builds an HTTP client with proper configuration
///
/// # Arguments
///
/// * `config` - The crawler configuration (user agent and timeouts)
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
///
/// # Example
///
/// ```no_run
/// use asset_atlas::config::Config;
/// use asset_atlas::crawler::build_http_client;
///
/// let client = build_http_client(&Config::default()).unwrap();
/// ```
pub fn build_http_client(config: &Config) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(config.user_agent.header_value())
        .timeout(Duration::from_secs(config.crawler.request_timeout))
        .connect_timeout(Duration::from_secs(config.crawler.connect_timeout))
        .gzip(true)
        .brotli(true)
        .build()
}

/// `Fetch` implementation backed by a reqwest client
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Builds a fetcher from configuration
    pub fn from_config(config: &Config) -> Result<Self, reqwest::Error> {
        Ok(Self::new(build_http_client(config)?))
    }
}

impl Fetch for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<FetchedPage, FetchError> {
        fetch_url(&self.client, url).await
    }
}

/// Fetches a URL and returns its status and body
///
/// # Error Classification
///
/// | Condition | Error |
/// |-----------|-------|
/// | Unparseable URL / non-HTTP scheme | `InvalidUrl` |
/// | Timeout | `Timeout` |
/// | Connection refused / DNS failure | `Connect` |
/// | Other request failure | `Request` |
/// | Body could not be read | `Body` |
///
/// Any HTTP status code, including 4xx and 5xx, is a successful fetch.
pub async fn fetch_url(client: &Client, url: &str) -> Result<FetchedPage, FetchError> {
    let parsed = Url::parse(url).map_err(|e| FetchError::InvalidUrl {
        url: url.to_string(),
        reason: e.to_string(),
    })?;

    if parsed.scheme() != "http" && parsed.scheme() != "https" {
        return Err(FetchError::InvalidUrl {
            url: url.to_string(),
            reason: format!("unsupported scheme '{}'", parsed.scheme()),
        });
    }

    let response = client
        .get(parsed)
        .send()
        .await
        .map_err(|e| classify_error(url, e))?;

    let status_code = response.status().as_u16();
    let final_url = response.url().to_string();

    if !response.status().is_success() {
        tracing::debug!("{} answered HTTP {}, parsing body anyway", url, status_code);
    }

    let body = response.text().await.map_err(|e| {
        if e.is_timeout() {
            FetchError::Timeout {
                url: url.to_string(),
            }
        } else {
            FetchError::Body {
                url: url.to_string(),
                source: e,
            }
        }
    })?;

    Ok(FetchedPage {
        final_url,
        status_code,
        body,
    })
}

/// Maps a reqwest send failure onto the fetch error taxonomy
fn classify_error(url: &str, error: reqwest::Error) -> FetchError {
    let url = url.to_string();
    if error.is_timeout() {
        FetchError::Timeout { url }
    } else if error.is_connect() {
        FetchError::Connect { url, source: error }
    } else {
        FetchError::Request { url, source: error }
    }
}
