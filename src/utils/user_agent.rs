//! Device classification from the raw User-Agent header.
//!
//! A handful of ordered substring checks, not a full UA parser. The order
//! is significant: Android user agents also contain "Linux", so the
//! Android check must run first.

// Device labels the classifier can produce.
const IOS: &str = "iOS";
const ANDROID: &str = "Android";
const WINDOWS: &str = "Windows";
const MACOS: &str = "macOS";
const LINUX: &str = "Linux";
const UNKNOWN: &str = "Unknown";

/// Maps a raw User-Agent value to a device label.
///
/// Returns `None` when no header was sent. A header that matches no rule
/// classifies as `"Unknown"`. The same input always yields the same label.
pub fn classify(user_agent: Option<&str>) -> Option<&'static str> {
    let ua = user_agent?;

    let label = if ua.contains("iPhone") || ua.contains("iPad") {
        IOS
    } else if ua.contains("Android") {
        ANDROID
    } else if ua.contains("Windows") {
        WINDOWS
    } else if ua.contains("Mac OS") {
        MACOS
    } else if ua.contains("Linux") {
        LINUX
    } else {
        UNKNOWN
    };

    Some(label)
}
