//! Visit recording and analytics aggregation service.

use std::collections::{BTreeMap, HashSet};
use std::sync::Arc;

use crate::domain::entities::{Link, NewVisit, Visit};
use crate::domain::repositories::{LinkRepository, VisitRepository};
use crate::error::AppError;
use crate::utils::user_agent;
use serde_json::json;

/// Placeholder bucket for visits with no device or country value.
const UNKNOWN_BUCKET: &str = "Unknown";

/// Placeholder bucket for visits with no referrer.
const DIRECT_BUCKET: &str = "Direct";

/// Summary figures computed over a link's full visit history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisitSummary {
    pub total_visits: u64,
    pub unique_visitors: u64,
    pub devices: BTreeMap<String, u64>,
    pub countries: BTreeMap<String, u64>,
    pub referers: BTreeMap<String, u64>,
}

/// Aggregated analytics for one link: the link record, summary figures,
/// and the visit rows they were computed from (newest first).
#[derive(Debug, Clone)]
pub struct LinkAnalytics {
    pub link: Link,
    pub summary: VisitSummary,
    pub visits: Vec<Visit>,
}

/// Computes summary figures over a visit set in a single pass per
/// dimension.
///
/// `unique_visitors` counts distinct non-null IPs; visits without an IP
/// are excluded from that figure but still counted in `total_visits`.
/// Missing dimension values fall into fixed placeholder buckets, so the
/// per-dimension counts always sum to `total_visits`.
pub fn summarize(visits: &[Visit]) -> VisitSummary {
    let total_visits = visits.len() as u64;

    let unique_visitors = visits
        .iter()
        .filter_map(|v| v.visitor_ip.as_deref())
        .collect::<HashSet<_>>()
        .len() as u64;

    let mut devices = BTreeMap::new();
    let mut countries = BTreeMap::new();
    let mut referers = BTreeMap::new();

    for visit in visits {
        bump(&mut devices, visit.device.as_deref(), UNKNOWN_BUCKET);
        bump(&mut countries, visit.country.as_deref(), UNKNOWN_BUCKET);
        bump(&mut referers, visit.referer.as_deref(), DIRECT_BUCKET);
    }

    VisitSummary {
        total_visits,
        unique_visitors,
        devices,
        countries,
        referers,
    }
}

fn bump(counts: &mut BTreeMap<String, u64>, value: Option<&str>, placeholder: &str) {
    let key = value.unwrap_or(placeholder);
    *counts.entry(key.to_string()).or_insert(0) += 1;
}

/// Service for recording visits and serving per-link analytics.
pub struct AnalyticsService {
    links: Arc<dyn LinkRepository>,
    visits: Arc<dyn VisitRepository>,
}

impl AnalyticsService {
    /// Creates a new analytics service.
    pub fn new(links: Arc<dyn LinkRepository>, visits: Arc<dyn VisitRepository>) -> Self {
        Self { links, visits }
    }

    /// Records a visit against a link.
    ///
    /// The device label is derived from the raw user agent; geolocation
    /// fields stay null. Recording is a best-effort, at-most-once side
    /// effect of the redirect flow: the caller logs a failure instead of
    /// propagating it, and the visitor is redirected either way.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn record_visit(
        &self,
        link: &Link,
        visitor_ip: Option<String>,
        user_agent: Option<String>,
        referer: Option<String>,
    ) -> Result<Visit, AppError> {
        let device = user_agent::classify(user_agent.as_deref()).map(str::to_string);

        let new_visit = NewVisit {
            link_id: link.id,
            visitor_ip,
            user_agent,
            referer,
            device,
        };

        self.visits.record(new_visit).await
    }

    /// Retrieves a link together with aggregates over its full visit
    /// history.
    ///
    /// The whole history is fetched (newest first) and aggregated in
    /// memory on every call; there is no pagination.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link matches the short
    /// identifier. Returns [`AppError::Internal`] on database errors.
    pub async fn link_analytics(&self, short_id: &str) -> Result<LinkAnalytics, AppError> {
        let link = self
            .links
            .find_by_short_id(short_id)
            .await?
            .ok_or_else(|| AppError::not_found("Link not found", json!({ "shortId": short_id })))?;

        let visits = self.visits.list_for_link(link.id).await?;
        let summary = summarize(&visits);

        Ok(LinkAnalytics {
            link,
            summary,
            visits,
        })
    }
}
