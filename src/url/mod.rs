//! URL handling module for Asset-Atlas
//!
//! This module provides page identity (canonicalization), best-effort
//! relative URL resolution, and the same-origin rule used to decide which
//! links are followed.

mod domain;
mod normalize;

// Re-export main functions
pub use domain::{extract_domain, same_origin, UrlParts};
pub use normalize::{canonicalize, resolve};

/// Classification of an `<a href>` target relative to the page it appears on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LinkClassification {
    /// Same network location, different page - should be followed
    Internal,
    /// Resolves to the page itself (including fragment-only anchors)
    SelfLink,
    /// Different host, or no host at all - never followed
    External,
}

impl LinkClassification {
    /// Returns true if the link should be queued for crawling
    pub fn should_follow(&self) -> bool {
        matches!(self, Self::Internal)
    }
}

/// Classifies an absolute link target relative to the page it was found on
///
/// The self-link check runs first and compares the full parsed form
/// (scheme, host, port, path, query). The origin check compares only the
/// network location, so a switch from `http` to `https` on the same host is
/// still `Internal`.
///
/// # Examples
///
/// ```
/// use asset_atlas::url::{classify_link, LinkClassification};
///
/// let page = "http://example.com";
/// assert_eq!(classify_link(page, "http://example.com/"), LinkClassification::SelfLink);
/// assert_eq!(classify_link(page, "https://example.com/login"), LinkClassification::Internal);
/// assert_eq!(classify_link(page, "http://mail.example.com/"), LinkClassification::External);
/// ```
pub fn classify_link(page_url: &str, target: &str) -> LinkClassification {
    let page = UrlParts::parse(page_url);
    let link = UrlParts::parse(target);

    match (page, link) {
        (Some(page), Some(link)) => {
            if page == link {
                LinkClassification::SelfLink
            } else if page.netloc().is_some() && page.netloc() == link.netloc() {
                LinkClassification::Internal
            } else {
                LinkClassification::External
            }
        }
        _ => LinkClassification::External,
    }
}
