//! Visit entity representing one recorded access to a link.

use chrono::{DateTime, Utc};

/// A visit recorded when a short link is accessed.
///
/// Client metadata is optional; headers may be absent or unreadable.
/// `country` and `city` exist in the schema but are never populated —
/// no geolocation resolution is performed.
#[derive(Debug, Clone)]
pub struct Visit {
    pub id: i64,
    pub link_id: i64,
    pub visitor_ip: Option<String>,
    pub user_agent: Option<String>,
    pub referer: Option<String>,
    pub visited_at: DateTime<Utc>,
    pub country: Option<String>,
    pub city: Option<String>,
    pub device: Option<String>,
}

/// Input data for recording a new visit.
///
/// Built only from a successful link lookup, so `link_id` always references
/// an existing link. The timestamp is assigned by the store at insert;
/// geolocation columns are left null.
#[derive(Debug, Clone)]
pub struct NewVisit {
    pub link_id: i64,
    pub visitor_ip: Option<String>,
    pub user_agent: Option<String>,
    pub referer: Option<String>,
    pub device: Option<String>,
}
