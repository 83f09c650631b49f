use serde::Deserialize;

/// Main configuration structure for Asset-Atlas
///
/// Every section is optional; missing sections and keys fall back to defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub crawler: CrawlerConfig,
    #[serde(rename = "user-agent")]
    pub user_agent: UserAgentConfig,
    pub output: OutputConfig,
}

/// Crawler behavior configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CrawlerConfig {
    /// Maximum number of distinct pages visited before the crawl stops
    #[serde(rename = "max-pages")]
    pub max_pages: usize,

    /// Total time allowed for a single request (seconds)
    #[serde(rename = "request-timeout")]
    pub request_timeout: u64,

    /// Time allowed to establish a connection (seconds)
    #[serde(rename = "connect-timeout")]
    pub connect_timeout: u64,
}

impl Default for CrawlerConfig {
    fn default() -> Self {
        Self {
            max_pages: crate::crawler::DEFAULT_MAX_PAGES,
            request_timeout: 30,
            connect_timeout: 10,
        }
    }
}

/// User agent identification configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UserAgentConfig {
    /// Name of the crawler
    #[serde(rename = "crawler-name")]
    pub crawler_name: String,

    /// Version of the crawler
    #[serde(rename = "crawler-version")]
    pub crawler_version: String,

    /// URL with information about the crawler
    #[serde(rename = "contact-url")]
    pub contact_url: Option<String>,
}

impl Default for UserAgentConfig {
    fn default() -> Self {
        Self {
            crawler_name: env!("CARGO_PKG_NAME").to_string(),
            crawler_version: env!("CARGO_PKG_VERSION").to_string(),
            contact_url: None,
        }
    }
}

impl UserAgentConfig {
    /// Formats the User-Agent header: `Name/Version` or `Name/Version (+ContactURL)`
    pub fn header_value(&self) -> String {
        match &self.contact_url {
            Some(contact) => format!(
                "{}/{} (+{})",
                self.crawler_name, self.crawler_version, contact
            ),
            None => format!("{}/{}", self.crawler_name, self.crawler_version),
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Report format
    pub format: OutputFormat,

    /// File to write the report to; stdout when absent
    pub path: Option<String>,
}

/// Report rendering formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Array of `{url, assets}` records
    #[default]
    Json,
    /// Human-readable summary
    Markdown,
}
