use axum::http::HeaderMap;

/// Bucket shared by every client whose IP the platform did not supply.
pub const UNKNOWN_IDENTITY: &str = "unknown";

/// Derives the submitter identity from the platform-supplied client-IP
/// header. Clients without the header all land in one shared bucket — a
/// known imprecision.
#[must_use]
pub fn resolve(headers: &HeaderMap, client_ip_header: &str) -> String {
    headers
        .get(client_ip_header)
        .and_then(|value| value.to_str().ok())
        .map_or_else(|| UNKNOWN_IDENTITY.to_string(), ToString::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn uses_the_configured_header() {
        let mut headers = HeaderMap::new();
        headers.insert("cf-connecting-ip", HeaderValue::from_static("203.0.113.9"));

        assert_eq!(resolve(&headers, "cf-connecting-ip"), "203.0.113.9");
    }

    #[test]
    fn missing_header_falls_back_to_shared_bucket() {
        assert_eq!(resolve(&HeaderMap::new(), "cf-connecting-ip"), UNKNOWN_IDENTITY);
    }

    #[test]
    fn unreadable_header_value_falls_back_to_shared_bucket() {
        let mut headers = HeaderMap::new();
        headers.insert("cf-connecting-ip", HeaderValue::from_bytes(b"\xff\xfe").unwrap());

        assert_eq!(resolve(&headers, "cf-connecting-ip"), UNKNOWN_IDENTITY);
    }
}
