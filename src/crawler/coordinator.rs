//! Crawler coordinator - main crawl orchestration logic
//!
//! This module contains the breadth-first traversal loop, including:
//! - Managing the FIFO work queue
//! - Deduplicating pages by canonical URL before they are fetched
//! - Deciding whether a fetch failure is fatal (seed) or recoverable (later pages)
//! - Enforcing the page cap
//! - Accumulating records in discovery order

use crate::crawler::fetcher::Fetch;
use crate::crawler::page::PageNode;
use crate::output::{CrawlReport, PageRecord};
use crate::state::PageState;
use crate::url::resolve;
use crate::CrawlError;
use std::collections::{HashMap, VecDeque};
use std::time::Instant;

/// Page cap used when none is configured
pub const DEFAULT_MAX_PAGES: usize = 20;

/// Main crawler structure
///
/// Owns all traversal state; nothing is shared outside this value.
pub struct Crawler<F> {
    fetcher: F,
    /// Raw URLs awaiting processing
    queue: VecDeque<String>,
    /// Canonical URL -> node; the dedup authority
    visited: HashMap<String, PageNode>,
    /// Keys of `visited` in insertion order
    visit_order: Vec<String>,
    /// Output records in discovery order
    records: Vec<PageRecord>,
    max_pages: usize,
}

impl<F: Fetch> Crawler<F> {
    /// Creates a crawler with the default page cap
    pub fn new(fetcher: F) -> Self {
        Self {
            fetcher,
            queue: VecDeque::new(),
            visited: HashMap::new(),
            visit_order: Vec::new(),
            records: Vec::new(),
            max_pages: DEFAULT_MAX_PAGES,
        }
    }

    /// Crawls from `seed` until the queue empties or `max_pages` pages are visited
    ///
    /// # Error Policy
    ///
    /// | Failure | Action |
    /// |---------|--------|
    /// | Seed transport error | Return `CrawlError::SeedFetch`, no records |
    /// | Later transport error | Log, record the page with no assets, continue |
    /// | HTTP 4xx/5xx | Not a failure, body is parsed |
    ///
    /// A page is claimed in `visited` before it is fetched, so every canonical
    /// URL is attempted at most once. The cap is checked after each page is
    /// recorded; a cap of zero visits nothing. State from a previous call is
    /// discarded.
    pub async fn crawl(&mut self, seed: &str, max_pages: usize) -> Result<&[PageRecord], CrawlError> {
        self.queue.clear();
        self.visited.clear();
        self.visit_order.clear();
        self.records.clear();

        self.max_pages = max_pages;
        // Same spelling discovered links get (lowercase host, no default port)
        self.queue.push_back(resolve(seed, seed));

        let start_time = Instant::now();
        tracing::info!("Starting crawl of {} (max {} pages)", seed, self.max_pages);

        if self.max_pages == 0 {
            tracing::warn!("Page cap is 0, nothing to crawl");
            self.queue.clear();
            return Ok(&self.records);
        }

        while let Some(raw) = self.queue.pop_front() {
            let mut node = PageNode::new(&raw);

            if self.visited.contains_key(node.url()) {
                tracing::trace!("Already visited {}", node.url());
                continue;
            }

            // Claim the identity before any I/O
            let key = node.url().to_string();
            self.visited.insert(key.clone(), node.clone());
            self.visit_order.push(key.clone());

            tracing::debug!("Processing URL: {}", key);

            if let Err(e) = node.process(&self.fetcher).await {
                if self.visited.len() == 1 {
                    tracing::error!("Seed {} could not be fetched: {}", key, e);
                    return Err(CrawlError::SeedFetch { url: key, source: e });
                }
                tracing::warn!("Failed to fetch {}: {}", key, e);
            }

            self.queue.extend(node.linked_urls().iter().cloned());
            self.records.push(node.record());
            self.visited.insert(key, node);

            if self.visited.len() % 10 == 0 {
                tracing::info!(
                    "Progress: {} pages visited, {} URLs queued",
                    self.visited.len(),
                    self.queue.len()
                );
            }

            if self.visited.len() >= self.max_pages {
                tracing::info!("Reached page cap of {}", self.max_pages);
                break;
            }
        }

        if !self.queue.is_empty() {
            tracing::debug!("Discarding {} queued URLs", self.queue.len());
        }

        tracing::info!(
            "Crawl completed: {} pages visited in {:?}",
            self.visited.len(),
            start_time.elapsed()
        );

        Ok(&self.records)
    }
}

impl<F> Crawler<F> {
    /// Canonical URL -> page map of every page attempted
    pub fn visited(&self) -> &HashMap<String, PageNode> {
        &self.visited
    }

    /// Visited pages in the order they were claimed
    pub fn visited_pages(&self) -> impl Iterator<Item = &PageNode> + '_ {
        self.visit_order
            .iter()
            .filter_map(move |key| self.visited.get(key))
    }

    /// Records accumulated so far, in discovery order
    pub fn records(&self) -> &[PageRecord] {
        &self.records
    }

    /// URLs still queued (left over after the cap is reached)
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    pub fn max_pages(&self) -> usize {
        self.max_pages
    }

    /// Summarizes the crawl for rendering
    pub fn report(&self, seed: &str) -> CrawlReport {
        let count = |state: PageState| {
            self.visited
                .values()
                .filter(|page| page.state() == state)
                .count()
        };
        let processed = self
            .visited
            .values()
            .filter(|page| page.state().is_success())
            .count();

        CrawlReport {
            seed: seed.to_string(),
            max_pages: self.max_pages,
            pages: self.records.clone(),
            processed,
            unreachable: count(PageState::Unreachable),
            failed: count(PageState::Failed),
            leftover: self.queue.len(),
        }
    }
}
