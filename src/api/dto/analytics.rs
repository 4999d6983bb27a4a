//! DTOs for the per-link analytics endpoint.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::links::LinkBody;
use crate::application::services::analytics_service::LinkAnalytics;
use crate::domain::entities::Visit;

/// One visit in the trimmed projection returned to the dashboard.
///
/// IP, user agent, and referrer are deliberately excluded; only the
/// fields the dashboard plots are exposed.
#[derive(Debug, Serialize)]
pub struct VisitEntry {
    pub timestamp: DateTime<Utc>,
    pub device: Option<String>,
    pub country: Option<String>,
    pub city: Option<String>,
}

impl From<Visit> for VisitEntry {
    fn from(visit: Visit) -> Self {
        Self {
            timestamp: visit.visited_at,
            device: visit.device,
            country: visit.country,
            city: visit.city,
        }
    }
}

/// Aggregate figures plus the trimmed visit list, newest first.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsBody {
    pub total_visits: u64,
    pub unique_visitors: u64,
    pub devices: BTreeMap<String, u64>,
    pub countries: BTreeMap<String, u64>,
    pub referers: BTreeMap<String, u64>,
    pub visits: Vec<VisitEntry>,
}

/// Full analytics response for one link.
#[derive(Debug, Serialize)]
pub struct AnalyticsResponse {
    pub link: LinkBody,
    pub analytics: AnalyticsBody,
}

impl From<LinkAnalytics> for AnalyticsResponse {
    fn from(analytics: LinkAnalytics) -> Self {
        Self {
            link: analytics.link.into(),
            analytics: AnalyticsBody {
                total_visits: analytics.summary.total_visits,
                unique_visitors: analytics.summary.unique_visitors,
                devices: analytics.summary.devices,
                countries: analytics.summary.countries,
                referers: analytics.summary.referers,
                visits: analytics.visits.into_iter().map(VisitEntry::from).collect(),
            },
        }
    }
}
