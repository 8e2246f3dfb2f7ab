//! Error types for the hq-index crate.

use thiserror::Error;

/// Errors that can occur when executing compiled queries with tantivy.
#[derive(Debug, Error)]
pub enum IndexError {
    /// Invalid stemmer language.
    #[error("unsupported stemmer language: {0}")]
    InvalidLanguage(String),

    /// The query refers to a field the index schema does not define.
    #[error("unknown field: {0}")]
    UnknownField(String),

    /// The query refers to a field that is not a text field.
    #[error("field is not a text field: {0}")]
    NotTextField(String),

    /// A wildcard pattern could not be turned into a term automaton.
    #[error("invalid wildcard pattern '{pattern}': {message}")]
    Wildcard {
        /// The offending wildcard pattern.
        pattern: String,
        /// Error message.
        message: String,
    },

    /// The search engine failed.
    #[error("search failed: {0}")]
    Search(String),
}

impl IndexError {
    /// Creates a `Search` error from a tantivy error.
    pub(crate) fn search(source: &tantivy::TantivyError) -> Self {
        Self::Search(source.to_string())
    }
}
