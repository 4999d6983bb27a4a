//! Link creation, lookup, and deletion service.

use std::sync::Arc;

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::{LinkRepository, VisitRepository};
use crate::error::AppError;
use crate::utils::short_id;
use crate::utils::url_validator::{format_url, is_valid_url};
use serde_json::json;

/// Service for the link lifecycle: create, look up, delete.
///
/// Validation runs before normalization, so an input without a scheme is
/// rejected rather than silently upgraded to `https://`.
pub struct LinkService {
    links: Arc<dyn LinkRepository>,
    visits: Arc<dyn VisitRepository>,
}

impl LinkService {
    /// Creates a new link service.
    pub fn new(links: Arc<dyn LinkRepository>, visits: Arc<dyn VisitRepository>) -> Self {
        Self { links, visits }
    }

    /// Creates a short link for a submitted URL.
    ///
    /// The short identifier is generated without a uniqueness check; the
    /// store's UNIQUE constraint is the only collision backstop.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the URL is empty or not an
    /// absolute http(s) URL. Returns [`AppError::Internal`] on store
    /// failure; no retry is attempted.
    pub async fn create_link(&self, url: &str) -> Result<Link, AppError> {
        if url.trim().is_empty() {
            return Err(AppError::bad_request("URL is required", json!({})));
        }

        if !is_valid_url(url) {
            return Err(AppError::bad_request(
                "Invalid URL provided",
                json!({ "url": url }),
            ));
        }

        let new_link = NewLink {
            short_id: short_id::generate_default(),
            original_url: format_url(url),
        };

        self.links.create(new_link).await
    }

    /// Retrieves a link by its public short identifier.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link matches.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn get_link(&self, short_id: &str) -> Result<Link, AppError> {
        self.links
            .find_by_short_id(short_id)
            .await?
            .ok_or_else(|| AppError::not_found("Link not found", json!({ "shortId": short_id })))
    }

    /// Deletes a link and all of its visit rows.
    ///
    /// Visits are removed before the link so an interruption between the
    /// two statements cannot leave analytics rows without their link. The
    /// two deletes are separate statements; no transaction spans them.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link matches.
    /// Returns [`AppError::Internal`] if either delete fails.
    pub async fn delete_link(&self, short_id: &str) -> Result<(), AppError> {
        let link = self.get_link(short_id).await?;

        self.visits.delete_for_link(link.id).await?;
        self.links.delete(link.id).await?;

        Ok(())
    }

    /// Constructs the absolute short-link URL for a short identifier.
    pub fn short_url(&self, base_url: &str, short_id: &str) -> String {
        format!("{}/links/{}", base_url.trim_end_matches('/'), short_id)
    }

    /// Verifies link store connectivity for the health endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the store is unreachable.
    pub async fn ping_store(&self) -> Result<(), AppError> {
        self.links.ping().await
    }
}
