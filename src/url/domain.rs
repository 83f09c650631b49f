use ::url::Url;

/// Extracts the domain from a URL
///
/// This function retrieves the host portion of a URL and converts it to lowercase.
/// If the URL has no host (e.g. `mailto:` or `data:` URLs), it returns None.
///
/// # Examples
///
/// ```
/// use url::Url;
/// use asset_atlas::url::extract_domain;
///
/// let url = Url::parse("https://EXAMPLE.COM/path").unwrap();
/// assert_eq!(extract_domain(&url), Some("example.com".to_string()));
///
/// let url = Url::parse("mailto:someone@example.com").unwrap();
/// assert_eq!(extract_domain(&url), None);
/// ```
pub fn extract_domain(url: &Url) -> Option<String> {
    url.host_str().map(|h| h.to_lowercase())
}

/// The components of a URL that decide page identity and origin
///
/// Fragments are deliberately absent: two URLs differing only by fragment
/// compare equal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlParts {
    pub scheme: String,
    pub host: Option<String>,
    pub port: Option<u16>,
    pub path: String,
    pub query: Option<String>,
}

impl UrlParts {
    /// Parses a URL string, returning None when it is not an absolute URL
    pub fn parse(raw: &str) -> Option<Self> {
        Url::parse(raw).ok().map(|url| Self::from_url(&url))
    }

    pub fn from_url(url: &Url) -> Self {
        Self {
            scheme: url.scheme().to_string(),
            host: extract_domain(url),
            port: url.port(),
            path: url.path().to_string(),
            query: url.query().map(str::to_string),
        }
    }

    /// The network location (host plus any explicit port)
    pub fn netloc(&self) -> Option<(&str, Option<u16>)> {
        self.host.as_deref().map(|host| (host, self.port))
    }
}

/// Returns true if both URLs live on the same network location
///
/// Only the host and explicit port are compared: `http://example.com/a` and
/// `https://example.com/b` are same-origin, while `example.com` and
/// `www.example.com` are not. URLs without a host never match.
///
/// # Examples
///
/// ```
/// use asset_atlas::url::same_origin;
///
/// assert!(same_origin("http://example.com/a", "https://example.com/login"));
/// assert!(!same_origin("http://example.com", "http://mail.example.com"));
/// ```
pub fn same_origin(a: &str, b: &str) -> bool {
    match (UrlParts::parse(a), UrlParts::parse(b)) {
        (Some(a), Some(b)) => a.netloc().is_some() && a.netloc() == b.netloc(),
        _ => false,
    }
}
