//! Handler for short link visits: record, then redirect.

use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode, header},
    response::{IntoResponse, Response},
};
use tracing::warn;

use crate::state::AppState;
use crate::utils::forwarded_for;

/// Path visitors land on when a short link cannot be resolved.
const HOME_PATH: &str = "/";

/// Resolves a short link, records the visit, and redirects.
///
/// # Endpoint
///
/// `GET /links/{shortId}`
///
/// # Request Flow
///
/// 1. Look up the link by short identifier
/// 2. Extract visitor ip (first `X-Forwarded-For` entry), user agent, referrer
/// 3. Record a visit row; a failure here is logged and otherwise ignored
/// 4. Respond 302 Found with the stored original URL
///
/// # Failure Behavior
///
/// This is the one fail-silent flow in the service: an unknown short
/// identifier or any store error redirects the visitor to the home page
/// instead of surfacing an error status. Visit recording is a
/// best-effort side effect and never blocks or alters the redirect.
pub async fn redirect_handler(
    Path(short_id): Path<String>,
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Response {
    let link = match state.link_service.get_link(&short_id).await {
        Ok(link) => link,
        Err(e) => {
            warn!(short_id = %short_id, error = %e, "redirect lookup failed, falling back to home");
            return found(HOME_PATH);
        }
    };

    let visitor_ip = forwarded_for::client_ip(&headers);
    let user_agent = header_value(&headers, header::USER_AGENT.as_str());
    let referer = header_value(&headers, header::REFERER.as_str());

    if let Err(e) = state
        .analytics_service
        .record_visit(&link, visitor_ip, user_agent, referer)
        .await
    {
        warn!(short_id = %short_id, error = %e, "failed to record visit");
    }

    found(&link.original_url)
}

/// Builds a 302 Found response to the given location.
fn found(location: &str) -> Response {
    (StatusCode::FOUND, [(header::LOCATION, location.to_string())]).into_response()
}

fn header_value(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}
