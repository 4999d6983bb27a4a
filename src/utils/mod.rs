//! Utility functions for identifier generation, URL handling, and request
//! header parsing.
//!
//! - [`short_id`] - Short identifier generation
//! - [`url_validator`] - Submitted URL validation and normalization
//! - [`user_agent`] - Device classification from the User-Agent header
//! - [`forwarded_for`] - Client address extraction from proxy headers

pub mod forwarded_for;
pub mod short_id;
pub mod url_validator;
pub mod user_agent;
