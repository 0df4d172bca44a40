//! Client identification utilities
//!
//! Best-effort extraction of requester metadata for audit records.
//! Nothing here fails: absent or unreadable headers become `"unknown"`.

use axum::http::{HeaderMap, header};

/// Placeholder used whenever a value cannot be determined.
pub const UNKNOWN: &str = "unknown";

/// Requester metadata attached to audit entries
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestMeta {
    /// Client IP address as reported by the proxy chain
    pub ip_address: String,
    /// Raw User-Agent string
    pub user_agent: String,
}

impl RequestMeta {
    pub fn from_headers(headers: &HeaderMap) -> Self {
        Self {
            ip_address: extract_client_ip(headers),
            user_agent: extract_user_agent(headers),
        }
    }
}

/// Extract the client IP address from proxy headers
///
/// Order: first entry of `X-Forwarded-For`, then `X-Real-IP`, then
/// [`UNKNOWN`]. The value is not parsed as an IP; it is recorded as sent.
pub fn extract_client_ip(headers: &HeaderMap) -> String {
    let forwarded = header_str(headers, "x-forwarded-for")
        .and_then(|xff| xff.split(',').next())
        .map(str::trim)
        .filter(|ip| !ip.is_empty());

    forwarded
        .or_else(|| header_str(headers, "x-real-ip").map(str::trim))
        .filter(|ip| !ip.is_empty())
        .unwrap_or(UNKNOWN)
        .to_string()
}

/// Extract the User-Agent header, or [`UNKNOWN`]
pub fn extract_user_agent(headers: &HeaderMap) -> String {
    headers
        .get(header::USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .filter(|ua| !ua.is_empty())
        .unwrap_or(UNKNOWN)
        .to_string()
}

fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers.get(name).and_then(|v| v.to_str().ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_forwarded_for_takes_first_hop() {
        let mut headers = HeaderMap::new();
        headers.insert(
            "x-forwarded-for",
            HeaderValue::from_static("203.0.113.7, 10.0.0.1"),
        );
        headers.insert("x-real-ip", HeaderValue::from_static("10.0.0.9"));

        assert_eq!(extract_client_ip(&headers), "203.0.113.7");
    }

    #[test]
    fn test_real_ip_fallback() {
        let mut headers = HeaderMap::new();
        headers.insert("x-real-ip", HeaderValue::from_static("198.51.100.2"));

        assert_eq!(extract_client_ip(&headers), "198.51.100.2");
    }

    #[test]
    fn test_blank_forwarded_for_falls_through() {
        let mut headers = HeaderMap::new();
        headers.insert("x-forwarded-for", HeaderValue::from_static(" "));
        headers.insert("x-real-ip", HeaderValue::from_static("198.51.100.2"));

        assert_eq!(extract_client_ip(&headers), "198.51.100.2");
    }

    #[test]
    fn test_missing_headers_are_unknown() {
        let headers = HeaderMap::new();
        let meta = RequestMeta::from_headers(&headers);

        assert_eq!(meta.ip_address, UNKNOWN);
        assert_eq!(meta.user_agent, UNKNOWN);
    }

    #[test]
    fn test_user_agent() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::USER_AGENT,
            HeaderValue::from_static("Mozilla/5.0 Test Browser"),
        );

        assert_eq!(extract_user_agent(&headers), "Mozilla/5.0 Test Browser");
    }
}
