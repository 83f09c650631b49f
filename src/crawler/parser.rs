//! HTML parser for extracting static assets and links
//!
//! This module handles parsing HTML content to extract:
//! - Static assets (stylesheets, images, external scripts)
//! - Same-origin links to follow (from `<a>` tags)
//!
//! Parsing is total: html5ever accepts any input, and malformed markup simply
//! yields fewer matches. Missing or empty attributes are skipped, never errors.

use crate::url::{canonicalize, classify_link, resolve};
use scraper::{ElementRef, Html, Selector};
use std::collections::BTreeSet;

/// Extracted information from an HTML page
#[derive(Debug, Clone, Default)]
pub struct ParsedPage {
    /// Absolute asset URLs, deduplicated
    pub assets: BTreeSet<String>,

    /// Same-origin absolute link URLs in document order, duplicates kept
    pub links: Vec<String>,
}

/// Parses HTML content and runs both extraction passes over it
///
/// # Example
///
/// ```
/// use asset_atlas::crawler::parse_html;
///
/// let html = r#"<img src="logo.png"><a href="/about">About</a>"#;
/// let parsed = parse_html(html, "http://example.com/index.html");
/// assert!(parsed.assets.contains("http://example.com/logo.png"));
/// assert_eq!(parsed.links, vec!["http://example.com/about".to_string()]);
/// ```
pub fn parse_html(html: &str, page_url: &str) -> ParsedPage {
    let document = Html::parse_document(html);

    ParsedPage {
        assets: extract_assets(&document, page_url),
        links: extract_links(&document, page_url),
    }
}

/// Extracts stylesheet, image and script URLs from the document
///
/// # Asset Rules
///
/// **Include:**
/// - `<link rel="stylesheet" href="...">` (any `rel` list containing `stylesheet`)
/// - `<img src="...">`
/// - `<script src="...">`
///
/// **Exclude:**
/// - `<link>` with other relations (icons, alternates, canonical)
/// - Inline scripts
/// - Elements whose URL attribute is missing or empty
///
/// Asset URLs are resolved against the page URL but never canonicalized, and
/// cross-origin assets (CDNs) are kept.
pub fn extract_assets(document: &Html, page_url: &str) -> BTreeSet<String> {
    let mut assets = BTreeSet::new();

    // Stylesheets
    for element in select(document, "link[href]") {
        if is_stylesheet(&element) {
            if let Some(href) = non_empty_attr(&element, "href") {
                assets.insert(resolve(page_url, href));
            }
        }
    }

    // Images
    for element in select(document, "img[src]") {
        if let Some(src) = non_empty_attr(&element, "src") {
            assets.insert(resolve(page_url, src));
        }
    }

    // Scripts, inline ones have no src
    for element in select(document, "script[src]") {
        if let Some(src) = non_empty_attr(&element, "src") {
            assets.insert(resolve(page_url, src));
        }
    }

    assets
}

/// Extracts same-origin page links from `<a href>` elements
///
/// For every anchor in document order the raw href is canonicalized (fragment
/// and one trailing slash removed) and resolved against the page URL. Links
/// back to the page itself and links to other hosts are dropped; repeated
/// links are kept.
pub fn extract_links(document: &Html, page_url: &str) -> Vec<String> {
    let mut links = Vec::new();

    for element in select(document, "a[href]") {
        let Some(href) = element.value().attr("href") else {
            continue;
        };

        let absolute = resolve(page_url, &canonicalize(href));
        let classification = classify_link(page_url, &absolute);

        if classification.should_follow() {
            links.push(absolute);
        } else {
            tracing::trace!("Skipping {:?} link {} on {}", classification, absolute, page_url);
        }
    }

    links
}

/// Runs a CSS selector, yielding nothing if the selector is invalid
fn select<'a>(document: &'a Html, selector: &str) -> Vec<ElementRef<'a>> {
    match Selector::parse(selector) {
        Ok(selector) => document.select(&selector).collect(),
        Err(_) => Vec::new(),
    }
}

/// Returns an attribute value unless it is absent or blank
fn non_empty_attr<'a>(element: &ElementRef<'a>, name: &str) -> Option<&'a str> {
    element
        .value()
        .attr(name)
        .filter(|value| !value.trim().is_empty())
}

/// Returns true if the element's `rel` token list contains `stylesheet`
fn is_stylesheet(element: &ElementRef<'_>) -> bool {
    element
        .value()
        .attr("rel")
        .map(|rel| {
            rel.split_ascii_whitespace()
                .any(|token| token.eq_ignore_ascii_case("stylesheet"))
        })
        .unwrap_or(false)
}
