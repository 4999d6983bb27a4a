//! Shared application state injected into all handlers.

use std::sync::Arc;

use crate::application::services::{AnalyticsService, LinkService};

/// Application state shared across request handlers.
///
/// Services own their repository capabilities; handlers never touch the
/// connection pool directly. `base_url` is the public origin used to
/// construct absolute short-link URLs.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService>,
    pub analytics_service: Arc<AnalyticsService>,
    pub base_url: String,
}

impl AppState {
    /// Creates application state from constructed services.
    pub fn new(
        link_service: Arc<LinkService>,
        analytics_service: Arc<AnalyticsService>,
        base_url: String,
    ) -> Self {
        Self {
            link_service,
            analytics_service,
            base_url,
        }
    }
}
