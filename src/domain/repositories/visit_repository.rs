//! Repository trait for visit records.

use crate::domain::entities::{NewVisit, Visit};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for per-visit analytics rows.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgVisitRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait VisitRepository: Send + Sync {
    /// Appends a visit row and returns the stored record.
    ///
    /// The store assigns `id` and the timestamp; geolocation columns are
    /// left null.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn record(&self, new_visit: NewVisit) -> Result<Visit, AppError>;

    /// Fetches every visit for a link, newest first.
    ///
    /// The full history is returned; aggregation happens in memory at
    /// read time.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list_for_link(&self, link_id: i64) -> Result<Vec<Visit>, AppError>;

    /// Deletes all visit rows belonging to a link.
    ///
    /// Returns the number of rows removed. Called before the link row
    /// itself is deleted so an interruption between the two statements
    /// cannot orphan analytics rows.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete_for_link(&self, link_id: i64) -> Result<u64, AppError>;
}
