//! In-memory `Fetch` implementations for exercising the crawl loop without a network

use crate::crawler::fetcher::{Fetch, FetchedPage};
use crate::FetchError;
use std::collections::HashMap;
use std::sync::Mutex;

enum Response {
    Page {
        status: u16,
        body: String,
        final_url: Option<String>,
    },
    Unreachable,
}

/// A fixed site keyed by exact request URL; unknown URLs answer 404
#[derive(Default)]
pub struct StaticSite {
    pages: HashMap<String, Response>,
    requests: Mutex<Vec<String>>,
}

impl StaticSite {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(self, url: &str, body: &str) -> Self {
        self.page_with_status(url, 200, body)
    }

    pub fn page_with_status(mut self, url: &str, status: u16, body: &str) -> Self {
        self.pages.insert(
            url.to_string(),
            Response::Page {
                status,
                body: body.to_string(),
                final_url: None,
            },
        );
        self
    }

    /// Serves `body` for `url` as if the server redirected to `target`
    pub fn redirect(mut self, url: &str, target: &str, body: &str) -> Self {
        self.pages.insert(
            url.to_string(),
            Response::Page {
                status: 200,
                body: body.to_string(),
                final_url: Some(target.to_string()),
            },
        );
        self
    }

    pub fn unreachable(mut self, url: &str) -> Self {
        self.pages.insert(url.to_string(), Response::Unreachable);
        self
    }

    /// Every URL fetched so far, in request order
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

impl Fetch for StaticSite {
    async fn fetch(&self, url: &str) -> Result<FetchedPage, FetchError> {
        self.requests.lock().unwrap().push(url.to_string());

        match self.pages.get(url) {
            Some(Response::Page {
                status,
                body,
                final_url,
            }) => Ok(FetchedPage {
                final_url: final_url.clone().unwrap_or_else(|| url.to_string()),
                status_code: *status,
                body: body.clone(),
            }),
            Some(Response::Unreachable) => Err(FetchError::Other {
                url: url.to_string(),
                message: "connection refused".to_string(),
            }),
            None => Ok(FetchedPage {
                final_url: url.to_string(),
                status_code: 404,
                body: String::new(),
            }),
        }
    }
}

/// An endless site: `/page/N` links only to `/page/N+1`
#[derive(Default)]
pub struct ChainSite {
    requests: Mutex<Vec<String>>,
}

impl ChainSite {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

impl Fetch for ChainSite {
    async fn fetch(&self, url: &str) -> Result<FetchedPage, FetchError> {
        self.requests.lock().unwrap().push(url.to_string());

        let current: u64 = url
            .rsplit('/')
            .next()
            .and_then(|n| n.parse().ok())
            .unwrap_or(0);

        Ok(FetchedPage {
            final_url: url.to_string(),
            status_code: 200,
            body: format!(r#"<a href="/page/{}">next</a>"#, current + 1),
        })
    }
}
