//! Link entity representing a shortening mapping.

use chrono::{DateTime, Utc};

/// A short-link record mapping a public identifier to its original URL.
///
/// All fields are immutable after creation; there is no update operation.
#[derive(Debug, Clone)]
pub struct Link {
    pub id: i64,
    pub short_id: String,
    pub original_url: String,
    pub created_at: DateTime<Utc>,
}

impl Link {
    /// Creates a new Link instance.
    pub fn new(id: i64, short_id: String, original_url: String, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            short_id,
            original_url,
            created_at,
        }
    }
}

/// Input data for creating a new link.
///
/// The `original_url` must already be validated and normalized; the store
/// assigns `id` and `created_at`.
#[derive(Debug, Clone)]
pub struct NewLink {
    pub short_id: String,
    pub original_url: String,
}
