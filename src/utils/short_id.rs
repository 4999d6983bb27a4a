//! Short identifier generation.
//!
//! Generates the public identifier a link is reached under. Uses `nanoid`
//! for URL-safe random strings from a cryptographically strong source.

use nanoid::nanoid;

/// Length of a generated short identifier.
pub const SHORT_ID_LENGTH: usize = 8;

/// Generates a random short identifier of the given length.
///
/// Characters are drawn from nanoid's URL-safe alphabet
/// (`A-Z`, `a-z`, `0-9`, `_`, `-`).
///
/// No uniqueness check against existing identifiers is performed here;
/// the `short_id` UNIQUE constraint in the store is the only backstop.
pub fn generate(length: usize) -> String {
    nanoid!(length)
}

/// Generates a short identifier of the default length.
pub fn generate_default() -> String {
    generate(SHORT_ID_LENGTH)
}
