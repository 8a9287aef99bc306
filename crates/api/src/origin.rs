//! Network-origin extraction.
//!
//! The origin key is the client IP as seen through the proxy chain.
//! Header precedence matches the deployment: the CDN header wins, then
//! the first hop of `x-forwarded-for`, then `x-real-ip`. With no proxy
//! headers at all the key falls back to loopback, which collapses all
//! direct connections into one origin.

use axum::http::HeaderMap;

/// Fallback when no proxy header identifies the client.
pub const FALLBACK_ORIGIN: &str = "127.0.0.1";

/// Extract the origin key for a request.
#[must_use]
pub fn origin_key(headers: &HeaderMap) -> String {
    if let Some(ip) = header_str(headers, "cf-connecting-ip") {
        return ip.trim().to_string();
    }

    if let Some(forwarded) = header_str(headers, "x-forwarded-for") {
        // First entry is the originating client
        if let Some(first) = forwarded.split(',').next() {
            let first = first.trim();
            if !first.is_empty() {
                return first.to_string();
            }
        }
    }

    if let Some(ip) = header_str(headers, "x-real-ip") {
        return ip.trim().to_string();
    }

    FALLBACK_ORIGIN.to_string()
}

/// Extract the client user agent, empty string if absent.
#[must_use]
pub fn user_agent(headers: &HeaderMap) -> String {
    header_str(headers, "user-agent")
        .unwrap_or_default()
        .to_string()
}

fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers(pairs: &[(&'static str, &str)]) -> HeaderMap {
        let mut map = HeaderMap::new();
        for (name, value) in pairs {
            map.insert(*name, HeaderValue::from_str(value).unwrap());
        }
        map
    }

    #[test]
    fn test_cdn_header_wins() {
        let h = headers(&[
            ("cf-connecting-ip", "198.51.100.1"),
            ("x-forwarded-for", "203.0.113.5, 10.0.0.1"),
            ("x-real-ip", "192.0.2.9"),
        ]);
        assert_eq!(origin_key(&h), "198.51.100.1");
    }

    #[test]
    fn test_forwarded_for_takes_first_hop() {
        let h = headers(&[("x-forwarded-for", "203.0.113.5, 10.0.0.1, 10.0.0.2")]);
        assert_eq!(origin_key(&h), "203.0.113.5");
    }

    #[test]
    fn test_real_ip_fallback() {
        let h = headers(&[("x-real-ip", "192.0.2.9")]);
        assert_eq!(origin_key(&h), "192.0.2.9");
    }

    #[test]
    fn test_no_headers_is_loopback() {
        assert_eq!(origin_key(&HeaderMap::new()), FALLBACK_ORIGIN);
    }

    #[test]
    fn test_empty_forwarded_for_falls_through() {
        let h = headers(&[("x-forwarded-for", "  "), ("x-real-ip", "192.0.2.9")]);
        assert_eq!(origin_key(&h), "192.0.2.9");
    }

    #[test]
    fn test_user_agent() {
        let h = headers(&[("user-agent", "Mozilla/5.0")]);
        assert_eq!(user_agent(&h), "Mozilla/5.0");
        assert_eq!(user_agent(&HeaderMap::new()), "");
    }
}
