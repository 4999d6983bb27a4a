//! Handler for per-link analytics.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::analytics::AnalyticsResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Returns aggregate statistics for a short link.
///
/// # Endpoint
///
/// `GET /links/{shortId}/analytics`
///
/// # Response
///
/// Link metadata plus totals, unique visitor count, per-dimension
/// occurrence maps (devices, countries, referrers), and a trimmed visit
/// list in descending timestamp order. The entire visit history is
/// aggregated on every request; there is no pagination.
///
/// # Errors
///
/// Returns 404 Not Found if the short identifier is unknown — unlike the
/// redirect flow, this endpoint surfaces the error rather than falling
/// back. Returns 500 on store failure.
pub async fn analytics_handler(
    Path(short_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<AnalyticsResponse>, AppError> {
    let analytics = state.analytics_service.link_analytics(&short_id).await?;

    Ok(Json(analytics.into()))
}
