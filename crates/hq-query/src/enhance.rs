//! Ranking enhancement for unstructured queries.
//!
//! When the user typed nothing but plain words, documents containing those
//! words as a contiguous phrase should rank above documents that merely
//! contain all of them somewhere.

use tracing::trace;

use crate::{
    field::FieldSet,
    normalize::NormalizedToken,
    tree::{Clause, QueryTree},
};

/// Default multiplier applied to field boosts for the whole-query phrase.
pub const PHRASE_BOOST_FACTOR: f32 = 10.0;

/// Returns true if every token is a plain word (no phrase, no operator).
///
/// Wildcard words count as plain words.
pub fn is_plain_word_query(tokens: &[NormalizedToken]) -> bool {
    tokens.iter().all(|token| {
        matches!(
            token,
            NormalizedToken::Term(_) | NormalizedToken::Wildcard(_)
        )
    })
}

/// Adds an optional whole-query phrase clause per field to a plain word query.
///
/// If `tokens` is made only of plain words, the result is an
/// optional combination of the original tree and one phrase over all terms
/// per field, boosted by `factor` times the field boost. Otherwise the tree
/// is returned unchanged.
pub fn enhance(
    tree: QueryTree,
    tokens: &[NormalizedToken],
    fields: &FieldSet,
    factor: f32,
) -> QueryTree {
    if tokens.is_empty() || !is_plain_word_query(tokens) {
        return tree;
    }

    let terms: Vec<String> = tokens
        .iter()
        .flat_map(NormalizedToken::terms)
        .map(str::to_string)
        .collect();
    trace!(terms = terms.len(), "adding whole-query phrase clauses");

    let mut clauses = Vec::with_capacity(fields.len() + 1);
    clauses.push(Clause::optional(tree));
    clauses.extend(fields.iter().map(|spec| {
        Clause::optional(QueryTree::Phrase {
            field: spec.name.clone(),
            terms: terms.clone(),
            boost: factor * spec.boost,
        })
    }));

    QueryTree::boolean(clauses)
}
