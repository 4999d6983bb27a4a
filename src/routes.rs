//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `POST   /links`                      - Create a short link
//! - `GET    /links/{shortId}`            - Redirect to the original URL
//! - `GET    /links/{shortId}/info`       - Link record
//! - `DELETE /links/{shortId}`            - Delete a link and its visits
//! - `GET    /links/{shortId}/analytics`  - Aggregate visit statistics
//! - `GET    /health`                     - Health check
//!
//! Request/response tracing is applied to every route; trailing-slash
//! normalization is layered on in [`crate::server`] at serve time.

use axum::Router;
use axum::routing::{get, post};

use crate::api::handlers::{
    analytics_handler, create_link_handler, delete_link_handler, health_handler,
    link_info_handler, redirect_handler,
};
use crate::api::middleware::tracing;
use crate::state::AppState;

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/links", post(create_link_handler))
        .route(
            "/links/{short_id}",
            get(redirect_handler).delete(delete_link_handler),
        )
        .route("/links/{short_id}/info", get(link_info_handler))
        .route("/links/{short_id}/analytics", get(analytics_handler))
        .route("/health", get(health_handler))
        .with_state(state)
        .layer(tracing::layer())
}
