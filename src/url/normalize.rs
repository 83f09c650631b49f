use ::url::Url;

/// Canonicalizes a URL string according to Asset-Atlas' identity rules
///
/// # Canonicalization Steps
///
/// 1. Remove the fragment (everything from the first `#`)
/// 2. Remove exactly one trailing `/`, if present
///
/// This is a pure string transformation: the input is never parsed, so
/// malformed URLs pass through with only the two rules applied. Two URLs
/// name the same page iff their canonical forms are equal.
///
/// # Examples
///
/// ```
/// use asset_atlas::url::canonicalize;
///
/// assert_eq!(canonicalize("https://example.com/a/#top"), "https://example.com/a");
/// assert_eq!(canonicalize("https://example.com/"), "https://example.com");
/// ```
pub fn canonicalize(raw: &str) -> String {
    let without_fragment = match raw.find('#') {
        Some(idx) => &raw[..idx],
        None => raw,
    };

    without_fragment
        .strip_suffix('/')
        .unwrap_or(without_fragment)
        .to_string()
}

/// Resolves `href` against `base` to an absolute URL string
///
/// Resolution follows the standard base+relative rules. It is best-effort:
/// when the base cannot be parsed or the join fails, `href` is returned
/// verbatim. Hrefs carrying their own scheme (even a bogus one such as
/// `htp:`) resolve to themselves.
///
/// # Examples
///
/// ```
/// use asset_atlas::url::resolve;
///
/// assert_eq!(
///     resolve("http://example.com/folder/index.html", "../sheet.css"),
///     "http://example.com/sheet.css"
/// );
/// ```
pub fn resolve(base: &str, href: &str) -> String {
    match Url::parse(base) {
        Ok(base_url) => match base_url.join(href) {
            Ok(absolute) => absolute.to_string(),
            Err(e) => {
                tracing::trace!("Keeping unresolvable href {:?} on {}: {}", href, base, e);
                href.to_string()
            }
        },
        Err(_) => href.to_string(),
    }
}
