//! Integration tests for the crawler
//!
//! These tests use wiremock to create mock HTTP servers and test
//! the full crawl cycle end-to-end through the real HTTP fetcher.

use asset_atlas::config::{Config, OutputFormat};
use asset_atlas::crawler::{crawl_site, Crawler, HttpFetcher};
use asset_atlas::output::write_report;
use asset_atlas::{CrawlError, FetchError, PageState};
use std::time::Duration;
use wiremock::matchers::{method, path, path_regex};
use wiremock::{Mock, MockServer, Request, Respond, ResponseTemplate};

/// Creates a test configuration with the given page cap
fn create_test_config(max_pages: usize) -> Config {
    let mut config = Config::default();
    config.crawler.max_pages = max_pages;
    config.crawler.request_timeout = 1;
    config.crawler.connect_timeout = 1;
    config
}

fn html(body: &str) -> ResponseTemplate {
    ResponseTemplate::new(200)
        .set_body_string(body.to_string())
        .insert_header("content-type", "text/html")
}

/// Serves an endless chain: `/page/N` links to `/page/N+1`
struct ChainResponder;

impl Respond for ChainResponder {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let current: u64 = request
            .url
            .path()
            .rsplit('/')
            .next()
            .and_then(|n| n.parse().ok())
            .unwrap_or(0);

        html(&format!(
            r#"<html><body><img src="/img/{0}.png"><a href="/page/{1}">next</a></body></html>"#,
            current,
            current + 1
        ))
    }
}

/// Mounts the three-page example site
async fn mount_example_site(mock_server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/index.html"))
        .respond_with(html(
            r#"<html><head>
            <link rel="stylesheet" href="style.css">
            <script src="main.js"></script>
            </head><body>
            <img src="home.jpg">
            <a href="/about.html">About</a>
            <a href="/login.html">Login</a>
            </body></html>"#,
        ))
        .expect(1)
        .mount(mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/about.html"))
        .respond_with(html(
            r#"<html><head><link rel="stylesheet" href="about.css"></head>
            <body><img src="/team.png"><a href="/index.html#top">Home</a></body></html>"#,
        ))
        .expect(1)
        .mount(mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/login.html"))
        .respond_with(html("<html><body><form></form></body></html>"))
        .expect(1)
        .mount(mock_server)
        .await;
}

#[tokio::test]
async fn test_full_crawl_example_site() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();
    mount_example_site(&mock_server).await;

    let seed = format!("{}/index.html", base_url);
    let report = crawl_site(&create_test_config(20), &seed)
        .await
        .expect("Crawl failed");

    let urls: Vec<&str> = report.pages.iter().map(|p| p.url.as_str()).collect();
    assert_eq!(
        urls,
        vec![
            format!("{}/index.html", base_url),
            format!("{}/about.html", base_url),
            format!("{}/login.html", base_url),
        ]
    );

    assert_eq!(
        report.pages[0].assets,
        vec![
            format!("{}/home.jpg", base_url),
            format!("{}/main.js", base_url),
            format!("{}/style.css", base_url),
        ]
    );
    assert_eq!(
        report.pages[1].assets,
        vec![
            format!("{}/about.css", base_url),
            format!("{}/team.png", base_url),
        ]
    );
    assert!(report.pages[2].assets.is_empty());
    assert_eq!(report.processed, 3);
    assert_eq!(report.leftover, 0);

    // Wiremock verifies each page was requested exactly once when mock_server drops
}

#[tokio::test]
async fn test_seed_connection_refused_is_fatal() {
    // Bind a server, then drop it so its port refuses connections
    let base_url = {
        let mock_server = MockServer::start().await;
        mock_server.uri()
    };

    let result = crawl_site(&create_test_config(20), &format!("{}/", base_url)).await;

    match result {
        Err(CrawlError::SeedFetch { url, source }) => {
            assert_eq!(url, base_url);
            assert!(
                matches!(
                    source,
                    FetchError::Connect { .. } | FetchError::Request { .. } | FetchError::Timeout { .. }
                ),
                "unexpected error kind: {:?}",
                source
            );
        }
        other => panic!("expected SeedFetch, got {:?}", other.map(|r| r.pages)),
    }
}

#[tokio::test]
async fn test_malformed_seed_is_fatal() {
    let result = crawl_site(&create_test_config(20), "ftp://example.com/files").await;

    match result {
        Err(CrawlError::SeedFetch { source, .. }) => {
            assert!(matches!(source, FetchError::InvalidUrl { .. }));
        }
        other => panic!("expected SeedFetch, got {:?}", other.map(|r| r.pages)),
    }
}

#[tokio::test]
async fn test_later_timeout_is_swallowed() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(html(
            r#"<img src="/logo.png"><a href="/slow">Slow</a><a href="/fast">Fast</a>"#,
        ))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/slow"))
        .respond_with(html(r#"<img src="/never.png">"#).set_delay(Duration::from_secs(3)))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/fast"))
        .respond_with(html(r#"<img src="/fast.png">"#))
        .expect(1)
        .mount(&mock_server)
        .await;

    let fetcher = HttpFetcher::from_config(&create_test_config(20)).unwrap();
    let mut crawler = Crawler::new(fetcher);
    let records = crawler
        .crawl(&format!("{}/", mock_server.uri()), 20)
        .await
        .expect("Crawl should survive a slow page")
        .to_vec();

    assert_eq!(records.len(), 3);
    assert_eq!(records[1].url, format!("{}/slow", mock_server.uri()));
    assert!(records[1].assets.is_empty());
    assert_eq!(
        records[2].assets,
        vec![format!("{}/fast.png", mock_server.uri())]
    );

    let slow = &crawler.visited()[&records[1].url];
    assert_eq!(slow.state(), PageState::Unreachable);
}

#[tokio::test]
async fn test_error_status_pages_are_parsed() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(html(r#"<a href="/gone">Gone</a><a href="/broken">Broken</a>"#))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/gone"))
        .respond_with(ResponseTemplate::new(404).set_body_string(
            r#"<html><head><link rel="stylesheet" href="/404.css"></head></html>"#,
        ))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/broken"))
        .respond_with(
            ResponseTemplate::new(500).set_body_string(r#"<script src="/oops.js"></script>"#),
        )
        .mount(&mock_server)
        .await;

    let report = crawl_site(&create_test_config(20), &mock_server.uri())
        .await
        .expect("Crawl failed");

    assert_eq!(report.pages.len(), 3);
    assert_eq!(
        report.pages[1].assets,
        vec![format!("{}/404.css", mock_server.uri())]
    );
    assert_eq!(
        report.pages[2].assets,
        vec![format!("{}/oops.js", mock_server.uri())]
    );
    assert_eq!(report.processed, 3);
}

#[tokio::test]
async fn test_infinite_chain_stops_at_page_cap() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path_regex(r"^/page/\d+$"))
        .respond_with(ChainResponder)
        .expect(5)
        .mount(&mock_server)
        .await;

    let report = crawl_site(
        &create_test_config(5),
        &format!("{}/page/0", mock_server.uri()),
    )
    .await
    .expect("Crawl failed");

    assert_eq!(report.pages.len(), 5);
    assert_eq!(report.pages[4].url, format!("{}/page/4", mock_server.uri()));
    assert_eq!(
        report.pages[4].assets,
        vec![format!("{}/img/4.png", mock_server.uri())]
    );
    assert_eq!(report.leftover, 1);
    assert!(report.hit_page_cap());
}

#[tokio::test]
async fn test_other_hosts_are_not_followed() {
    let mock_server = MockServer::start().await;
    let port = url::Url::parse(&mock_server.uri())
        .unwrap()
        .port()
        .expect("mock server has a port");

    // Same server, but reached through a different host name
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(html(&format!(
            r#"<a href="http://localhost:{}/elsewhere">Elsewhere</a>
            <script src="http://localhost:{}/cdn.js"></script>"#,
            port, port
        )))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/elsewhere"))
        .respond_with(html("<p>should not be fetched</p>"))
        .expect(0)
        .mount(&mock_server)
        .await;

    let report = crawl_site(&create_test_config(20), &mock_server.uri())
        .await
        .expect("Crawl failed");

    assert_eq!(report.pages.len(), 1);
    // Cross-host assets are still reported
    assert_eq!(
        report.pages[0].assets,
        vec![format!("http://localhost:{}/cdn.js", port)]
    );
}

#[tokio::test]
async fn test_json_report_written_to_file() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();
    mount_example_site(&mock_server).await;

    let report = crawl_site(&create_test_config(20), &format!("{}/index.html", base_url))
        .await
        .expect("Crawl failed");

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("report.json");
    write_report(&report, OutputFormat::Json, Some(&path)).unwrap();

    let written = std::fs::read_to_string(&path).unwrap();
    assert!(written.starts_with("[\n  {\n    \"url\": "));

    let value: serde_json::Value = serde_json::from_str(&written).unwrap();
    let pages = value.as_array().unwrap();
    assert_eq!(pages.len(), 3);
    assert_eq!(pages[0]["url"], format!("{}/index.html", base_url));
    assert_eq!(pages[0]["assets"].as_array().unwrap().len(), 3);
    assert_eq!(pages[2]["assets"], serde_json::json!([]));
}
