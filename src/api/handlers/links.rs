//! Handlers for link management endpoints (create, info, delete).

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::links::{
    CreateLinkRequest, CreateLinkResponse, DeleteLinkResponse, LinkInfoResponse,
};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short link for a submitted URL.
///
/// # Endpoint
///
/// `POST /links`
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com/some/long/path" }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "success": true,
///   "link": { "id": 1, "shortId": "aB3xK9_m", "originalUrl": "...", "createdAt": "..." },
///   "shortUrl": "https://sho.rt/links/aB3xK9_m"
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if the URL is missing, empty, or not an
/// absolute http(s) URL. Returns 500 on store failure.
pub async fn create_link_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateLinkRequest>,
) -> Result<Json<CreateLinkResponse>, AppError> {
    let link = state.link_service.create_link(&payload.url).await?;

    let short_url = state
        .link_service
        .short_url(&state.base_url, &link.short_id);

    Ok(Json(CreateLinkResponse {
        success: true,
        link: link.into(),
        short_url,
    }))
}

/// Returns the stored record for a short link.
///
/// # Endpoint
///
/// `GET /links/{shortId}/info`
///
/// # Errors
///
/// Returns 404 Not Found if the short identifier is unknown.
pub async fn link_info_handler(
    Path(short_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<LinkInfoResponse>, AppError> {
    let link = state.link_service.get_link(&short_id).await?;

    Ok(Json(LinkInfoResponse { link: link.into() }))
}

/// Deletes a short link and its recorded visits.
///
/// # Endpoint
///
/// `DELETE /links/{shortId}`
///
/// Visit rows are removed before the link row; see
/// [`crate::application::services::LinkService::delete_link`].
///
/// # Errors
///
/// Returns 404 Not Found if the short identifier is unknown.
/// Returns 500 if either delete fails.
pub async fn delete_link_handler(
    Path(short_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<DeleteLinkResponse>, AppError> {
    state.link_service.delete_link(&short_id).await?;

    Ok(Json(DeleteLinkResponse { success: true }))
}
