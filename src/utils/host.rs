//! Host header extraction and normalization.

use crate::AppError;
use axum::http::{HeaderMap, header};

/// Suffix of the hosted preview deployments.
const PREVIEW_HOST_SUFFIX: &str = ".vusercontent.net";

/// Extracts the raw `Host` header value, port included.
///
/// Falls back to `default_host` when the header is absent so that requests
/// without a host land on the landing view instead of failing.
///
/// # Errors
///
/// Returns [`AppError::Validation`] if the header value is not valid UTF-8.
///
/// # Examples
///
/// ```ignore
/// let mut headers = HeaderMap::new();
/// headers.insert(header::HOST, "srd.fund".parse().unwrap());
///
/// assert_eq!(host_from_headers(&headers, "localhost:3000").unwrap(), "srd.fund");
/// ```
pub fn host_from_headers(headers: &HeaderMap, default_host: &str) -> Result<String, AppError> {
    match headers.get(header::HOST) {
        Some(value) => value
            .to_str()
            .map(str::to_string)
            .map_err(|_| AppError::bad_request("Invalid Host header", serde_json::json!({}))),
        None => Ok(default_host.to_string()),
    }
}

/// Splits a host into hostname and optional port.
///
/// Handles bracketed IPv6 literals (`[::1]:8080`), IPv4 addresses and plain
/// hostnames.
pub fn split_port(host: &str) -> (&str, Option<&str>) {
    if host.starts_with('[') {
        return match host.find(']') {
            Some(end) => {
                let port = host[end + 1..].strip_prefix(':');
                (&host[..=end], port)
            }
            None => (host, None),
        };
    }

    match host.rsplit_once(':') {
        Some((name, port)) if !name.contains(':') => (name, Some(port)),
        _ => (host, None),
    }
}

/// Returns true for loopback and preview hosts used during development.
///
/// Matches `localhost`, any `*.localhost` name, `127.0.0.1`, `[::1]` and the
/// hosted preview deployments, with or without a port.
pub fn is_local_host(host: &str) -> bool {
    let (name, _) = split_port(host);
    let name = name.to_ascii_lowercase();

    name == "localhost"
        || name.ends_with(".localhost")
        || name == "127.0.0.1"
        || name == "[::1]"
        || name.ends_with(PREVIEW_HOST_SUFFIX)
}

/// Normalizes a host for registry lookup.
///
/// The host is trimmed and lowercased. The port is stripped only for local
/// development hosts; production hosts are compared as-is.
pub fn normalize_host(host: &str) -> String {
    let host = host.trim().to_ascii_lowercase();

    if is_local_host(&host) {
        split_port(&host).0.to_string()
    } else {
        host
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{HeaderMap, HeaderValue, header};

    #[test]
    fn test_host_from_headers_simple() {
        let mut headers = HeaderMap::new();
        headers.insert(header::HOST, HeaderValue::from_static("srd.fund"));

        let result = host_from_headers(&headers, "localhost:3000");
        assert_eq!(result.unwrap(), "srd.fund");
    }

    #[test]
    fn test_host_from_headers_keeps_port() {
        let mut headers = HeaderMap::new();
        headers.insert(header::HOST, HeaderValue::from_static("localhost:8080"));

        let result = host_from_headers(&headers, "localhost:3000");
        assert_eq!(result.unwrap(), "localhost:8080");
    }

    #[test]
    fn test_host_from_headers_missing_uses_default() {
        let headers = HeaderMap::new();

        let result = host_from_headers(&headers, "localhost:3000");
        assert_eq!(result.unwrap(), "localhost:3000");
    }

    #[test]
    fn test_host_from_headers_invalid_utf8() {
        let mut headers = HeaderMap::new();
        let invalid_bytes = vec![0xFF, 0xFE, 0xFD];
        if let Ok(header_value) = HeaderValue::from_bytes(&invalid_bytes) {
            headers.insert(header::HOST, header_value);

            let result = host_from_headers(&headers, "localhost:3000");
            assert!(result.is_err());
        }
    }

    #[test]
    fn test_split_port() {
        assert_eq!(split_port("localhost:3000"), ("localhost", Some("3000")));
        assert_eq!(split_port("srd.fund"), ("srd.fund", None));
        assert_eq!(split_port("[::1]:8080"), ("[::1]", Some("8080")));
        assert_eq!(split_port("[::1]"), ("[::1]", None));
        assert_eq!(split_port("127.0.0.1:9000"), ("127.0.0.1", Some("9000")));
    }

    #[test]
    fn test_is_local_host() {
        assert!(is_local_host("localhost"));
        assert!(is_local_host("localhost:3000"));
        assert!(is_local_host("LOCALHOST:4000"));
        assert!(is_local_host("app.localhost:3000"));
        assert!(is_local_host("127.0.0.1:8080"));
        assert!(is_local_host("[::1]:3000"));
        assert!(is_local_host("preview-abc.vusercontent.net"));

        assert!(!is_local_host("srd.fund"));
        assert!(!is_local_host("localhost.example.com"));
    }

    #[test]
    fn test_normalize_host_strips_port_only_for_local() {
        assert_eq!(normalize_host("localhost:3000"), "localhost");
        assert_eq!(normalize_host("  LocalHost:5173 "), "localhost");
        assert_eq!(normalize_host("[::1]:8080"), "[::1]");
        assert_eq!(normalize_host("SRD.Fund"), "srd.fund");
        assert_eq!(normalize_host("srd.fund:8443"), "srd.fund:8443");
    }
}
