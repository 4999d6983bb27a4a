//! Submitted URL validation and normalization.
//!
//! Validation runs before normalization in the create-link flow, so an
//! input without a scheme (`example.com`) is rejected before `format_url`
//! would have prepended one. The prepending branch is kept for callers
//! that normalize independently of validation.

use url::Url;

/// Returns `true` if `input` parses as an absolute URL with an `http` or
/// `https` scheme.
///
/// Parse failures and any other scheme yield `false`; errors never reach
/// the caller.
pub fn is_valid_url(input: &str) -> bool {
    match Url::parse(input) {
        Ok(url) => matches!(url.scheme(), "http" | "https"),
        Err(_) => false,
    }
}

/// Ensures a URL carries a scheme, prepending `https://` when missing.
///
/// Inputs already starting with `http://` or `https://` are returned
/// unchanged, which makes the function idempotent.
pub fn format_url(input: &str) -> String {
    if input.starts_with("http://") || input.starts_with("https://") {
        input.to_string()
    } else {
        format!("https://{input}")
    }
}
