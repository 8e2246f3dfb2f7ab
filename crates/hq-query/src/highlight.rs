//! Highlight term projection.

use crate::normalize::NormalizedToken;

/// Flattens the normalized stream into space-separated terms for highlighting.
///
/// Terms from term and phrase tokens appear in query order; operators are
/// skipped.
pub fn flatten(tokens: &[NormalizedToken]) -> String {
    tokens
        .iter()
        .flat_map(NormalizedToken::terms)
        .collect::<Vec<_>>()
        .join(" ")
}
