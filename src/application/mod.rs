//! Application layer services implementing business logic.
//!
//! Orchestrates domain operations by coordinating repository calls,
//! validation, and aggregation. Services consume repository traits and
//! provide a clean API for HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::link_service::LinkService`] - Link create/lookup/delete
//! - [`services::analytics_service::AnalyticsService`] - Visit recording and aggregation

pub mod services;
