//! Absolute URL recognition for navigation input.

use url::Url;

/// Reasons a string is not treated as an absolute navigation URL.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum UrlNormalizationError {
    #[error("Input has no explicit http:// or https:// scheme")]
    MissingScheme,

    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("URL has no host")]
    MissingHost,
}

/// Parses input as an absolute HTTP(S) URL.
///
/// # Rules
///
/// 1. **Scheme**: the input must literally start with `http://` or `https://`
///    (case-insensitive); `srd.fund` or `//srd.fund` are not absolute URLs
/// 2. **Format**: the remainder must parse as a well-formed URL
/// 3. **Host**: a non-empty host is required
///
/// # Errors
///
/// Returns [`UrlNormalizationError::MissingScheme`] when no explicit scheme is present,
/// [`UrlNormalizationError::InvalidFormat`] for malformed URLs and
/// [`UrlNormalizationError::MissingHost`] when the URL has no host.
///
/// # Examples
///
/// ```ignore
/// let url = parse_absolute_url("https://SRD.fund/about").unwrap();
/// assert_eq!(url.host_str(), Some("srd.fund"));
///
/// assert!(parse_absolute_url("srd.fund").is_err());
/// ```
pub fn parse_absolute_url(input: &str) -> Result<Url, UrlNormalizationError> {
    let lowered = input.get(..8).unwrap_or(input).to_ascii_lowercase();
    if !lowered.starts_with("http://") && !lowered.starts_with("https://") {
        return Err(UrlNormalizationError::MissingScheme);
    }

    let url = Url::parse(input).map_err(|e| UrlNormalizationError::InvalidFormat(e.to_string()))?;

    match url.host_str() {
        Some(host) if !host.is_empty() => Ok(url),
        _ => Err(UrlNormalizationError::MissingHost),
    }
}

/// Lowercased hostname of a parsed URL, without port.
pub fn hostname(url: &Url) -> String {
    url.host_str().unwrap_or_default().to_ascii_lowercase()
}
