//! Client address extraction from the `X-Forwarded-For` header.

use axum::http::HeaderMap;

const X_FORWARDED_FOR: &str = "x-forwarded-for";

/// Extracts the client address from the forwarded-for header.
///
/// Proxies append addresses, so the first comma-separated entry is the
/// original client. Returns `None` when the header is absent, not valid
/// UTF-8, or empty. The value is stored raw; no address parsing or
/// validation is attempted.
pub fn client_ip(headers: &HeaderMap) -> Option<String> {
    let value = headers.get(X_FORWARDED_FOR)?.to_str().ok()?;

    let first = value.split(',').next()?.trim();
    if first.is_empty() {
        return None;
    }

    Some(first.to_string())
}
