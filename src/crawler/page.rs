//! A single crawled page
//!
//! A `PageNode` is created from a raw URL, canonicalized immediately, and
//! populated by exactly one fetch-and-parse pass.

use crate::crawler::fetcher::Fetch;
use crate::crawler::parser::parse_html;
use crate::output::PageRecord;
use crate::state::PageState;
use crate::url::canonicalize;
use crate::FetchError;
use std::collections::BTreeSet;

/// One visited (or attempted) page
#[derive(Debug, Clone)]
pub struct PageNode {
    url: String,
    static_assets: BTreeSet<String>,
    linked_urls: Vec<String>,
    state: PageState,
    status_code: Option<u16>,
    redirected_to: Option<String>,
}

impl PageNode {
    /// Creates a node for `raw`, storing its canonical form. No I/O happens here.
    pub fn new(raw: &str) -> Self {
        Self {
            url: canonicalize(raw),
            static_assets: BTreeSet::new(),
            linked_urls: Vec::new(),
            state: PageState::Pending,
            status_code: None,
            redirected_to: None,
        }
    }

    /// The canonical URL identifying this page
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Absolute asset URLs referenced by the page
    pub fn static_assets(&self) -> &BTreeSet<String> {
        &self.static_assets
    }

    /// Same-origin links in document order, duplicates included
    pub fn linked_urls(&self) -> &[String] {
        &self.linked_urls
    }

    pub fn state(&self) -> PageState {
        self.state
    }

    /// HTTP status of the fetch, if one completed
    pub fn status_code(&self) -> Option<u16> {
        self.status_code
    }

    /// Where the server redirected the request, if it ended elsewhere
    pub fn redirected_to(&self) -> Option<&str> {
        self.redirected_to.as_deref()
    }

    /// Fetches the page once and extracts its assets and links
    ///
    /// Transport failures are returned unmodified and leave the node with
    /// empty results in an error state. Any HTTP response, whatever its
    /// status, is parsed. Calling this on a node that is no longer pending
    /// does nothing.
    pub async fn process<F: Fetch>(&mut self, fetcher: &F) -> Result<(), FetchError> {
        if self.state.is_terminal() {
            tracing::debug!("{} already {}, not fetching again", self.url, self.state);
            return Ok(());
        }

        let fetched = match fetcher.fetch(&self.url).await {
            Ok(fetched) => fetched,
            Err(e) => {
                self.state = PageState::from_fetch_error(&e);
                return Err(e);
            }
        };

        if canonicalize(&fetched.final_url) != self.url {
            tracing::debug!("{} redirected to {}", self.url, fetched.final_url);
            self.redirected_to = Some(fetched.final_url.clone());
        }

        // Links stay keyed and resolved by the requested URL
        let parsed = parse_html(&fetched.body, &self.url);
        tracing::debug!(
            "{} -> HTTP {}, {} assets, {} links",
            self.url,
            fetched.status_code,
            parsed.assets.len(),
            parsed.links.len()
        );

        self.static_assets = parsed.assets;
        self.linked_urls = parsed.links;
        self.status_code = Some(fetched.status_code);
        self.state = PageState::Processed;

        Ok(())
    }

    /// Output record with assets in lexicographic order
    pub fn record(&self) -> PageRecord {
        PageRecord {
            url: self.url.clone(),
            assets: self.static_assets.iter().cloned().collect(),
        }
    }
}
