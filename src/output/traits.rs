//! Output handler traits and types
//!
//! This module defines the report data structures and the trait interface
//! implemented by each report format.

use serde::Serialize;
use std::io::Write;
use thiserror::Error;

/// Errors that can occur during output operations
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("Failed to format output: {0}")]
    Format(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for output operations
pub type OutputResult<T> = Result<T, OutputError>;

/// The per-page output record
///
/// This is the only shape that leaves the crawler: the canonical page URL and
/// its static assets in lexicographic order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageRecord {
    /// Canonical page URL
    pub url: String,

    /// Sorted absolute asset URLs
    pub assets: Vec<String>,
}

/// Summary of a finished crawl
#[derive(Debug, Clone, Default)]
pub struct CrawlReport {
    /// The URL the crawl started from, as given
    pub seed: String,
    pub max_pages: usize,

    /// Records in discovery order
    pub pages: Vec<PageRecord>,

    // State breakdown
    pub processed: usize,
    pub unreachable: usize,
    pub failed: usize,

    /// URLs still queued when the page cap was reached
    pub leftover: usize,
}

impl CrawlReport {
    /// Number of distinct assets across all pages
    pub fn unique_assets(&self) -> usize {
        let mut assets: Vec<&str> = self
            .pages
            .iter()
            .flat_map(|page| page.assets.iter().map(String::as_str))
            .collect();
        assets.sort_unstable();
        assets.dedup();
        assets.len()
    }

    /// Returns true if the crawl stopped because of the page cap
    pub fn hit_page_cap(&self) -> bool {
        self.pages.len() >= self.max_pages && self.max_pages > 0
    }

    /// Returns the success rate as a percentage
    pub fn success_rate(&self) -> f64 {
        if self.pages.is_empty() {
            return 0.0;
        }
        (self.processed as f64 / self.pages.len() as f64) * 100.0
    }
}

/// Trait for report renderers
pub trait OutputHandler {
    /// Writes the rendered report to `writer`
    fn render(&self, report: &CrawlReport, writer: &mut dyn Write) -> OutputResult<()>;
}
