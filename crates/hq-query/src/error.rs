//! Error types for field configuration.
//!
//! Compiling a query never fails; an unusable query is reported as `None`.
//! Errors only arise when the caller describes the fields to search.

use thiserror::Error;

/// Errors that can occur when building a [`FieldSet`](crate::FieldSet).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FieldError {
    /// No fields were supplied, so nothing could ever match.
    #[error("no search fields configured")]
    Empty,

    /// A field was given an empty name.
    #[error("search field name must not be empty")]
    EmptyName,

    /// A field boost was zero, negative, or not a finite number.
    #[error("invalid boost {boost} for field '{field}': boost must be a positive number")]
    InvalidBoost {
        /// Name of the offending field.
        field: String,
        /// The rejected boost.
        boost: f32,
    },
}
