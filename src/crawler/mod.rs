//! Crawler module for web page fetching and processing
//!
//! This module contains the core crawling logic, including:
//! - HTTP fetching behind the `Fetch` capability
//! - HTML parsing and asset/link extraction
//! - Per-page state (`PageNode`)
//! - The breadth-first traversal loop (`Crawler`)

mod coordinator;
mod fetcher;
mod page;
mod parser;

#[cfg(test)]
mod testing;

pub use coordinator::{Crawler, DEFAULT_MAX_PAGES};
pub use fetcher::{build_http_client, fetch_url, Fetch, FetchedPage, HttpFetcher};
pub use page::PageNode;
pub use parser::{extract_assets, extract_links, parse_html, ParsedPage};

use crate::config::Config;
use crate::output::CrawlReport;
use crate::CrawlError;

/// Runs a complete crawl operation
///
/// This is the main entry point for starting a crawl. It will:
/// 1. Build the HTTP client from the configuration
/// 2. Crawl breadth-first from `seed` up to `config.crawler.max_pages` pages
/// 3. Summarize the visited pages
///
/// # Arguments
///
/// * `config` - The crawler configuration
/// * `seed` - The URL to start from
///
/// # Returns
///
/// * `Ok(CrawlReport)` - Crawl completed (individual pages may have failed)
/// * `Err(CrawlError)` - The seed could not be fetched, or the client could not be built
pub async fn crawl_site(config: &Config, seed: &str) -> Result<CrawlReport, CrawlError> {
    let fetcher = HttpFetcher::from_config(config)?;
    let mut crawler = Crawler::new(fetcher);
    crawler.crawl(seed, config.crawler.max_pages).await?;
    Ok(crawler.report(seed))
}
