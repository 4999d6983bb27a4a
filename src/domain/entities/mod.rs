//! Core domain entities representing the business data model.
//!
//! Plain data structures for the two concepts the service persists:
//!
//! - [`Link`] - A shortening mapping from public identifier to original URL
//! - [`Visit`] - One recorded access to a link
//!
//! Creation inputs use separate structs (`NewLink`, `NewVisit`) so the
//! store-assigned fields (`id`, timestamps) never appear half-initialized.

pub mod link;
pub mod visit;

pub use link::{Link, NewLink};
pub use visit::{NewVisit, Visit};
