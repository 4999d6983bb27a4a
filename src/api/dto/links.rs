//! DTOs for link creation, info, and deletion endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::Link;

/// Request to shorten a URL.
///
/// `url` defaults to empty when the field is absent so a missing value is
/// reported as a 400 validation error rather than a deserialization
/// failure.
#[derive(Debug, Deserialize)]
pub struct CreateLinkRequest {
    #[serde(default)]
    pub url: String,
}

/// JSON representation of a link record.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkBody {
    pub id: i64,
    pub short_id: String,
    pub original_url: String,
    pub created_at: DateTime<Utc>,
}

impl From<Link> for LinkBody {
    fn from(link: Link) -> Self {
        Self {
            id: link.id,
            short_id: link.short_id,
            original_url: link.original_url,
            created_at: link.created_at,
        }
    }
}

/// Response for a successfully created link.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateLinkResponse {
    pub success: bool,
    pub link: LinkBody,
    pub short_url: String,
}

/// Response carrying a single link record.
#[derive(Debug, Serialize)]
pub struct LinkInfoResponse {
    pub link: LinkBody,
}

/// Response for a successful deletion.
#[derive(Debug, Serialize)]
pub struct DeleteLinkResponse {
    pub success: bool,
}
