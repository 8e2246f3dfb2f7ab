//! Query tree builder.
//!
//! `OR` has the lowest precedence: the normalized stream is cut into
//! AND-groups at every `OR` marker and each group is compiled on its own.
//! Within a group, `AND` and `NOT` modify the next atomic token only.

use tracing::debug;

use crate::{
    field::FieldSet,
    normalize::NormalizedToken,
    tree::{Clause, QueryTree},
};

/// Builds the boolean query tree for a normalized token stream.
///
/// Returns `None` when no AND-group produced a query, e.g. for an empty
/// stream or a stream made only of exclusions. A single surviving group is
/// returned as is; several are combined as optional alternatives.
pub fn build(tokens: &[NormalizedToken], fields: &FieldSet) -> Option<QueryTree> {
    let mut groups: Vec<QueryTree> = tokens
        .split(|token| *token == NormalizedToken::Or)
        .filter_map(|group| compile_group(group, fields))
        .collect();

    match groups.len() {
        0 => None,
        1 => groups.pop(),
        _ => Some(QueryTree::any(groups)),
    }
}

/// Compiles one AND-group (a run of tokens without `OR`).
///
/// Each atomic token becomes a required clause, or a prohibited one when
/// directly preceded by `NOT`. A group without any required clause cannot be
/// searched and yields `None`.
pub fn compile_group(tokens: &[NormalizedToken], fields: &FieldSet) -> Option<QueryTree> {
    let mut clauses = Vec::new();
    let mut pending = NormalizedToken::And;
    let mut has_required = false;

    for token in tokens {
        let query = match token {
            NormalizedToken::And | NormalizedToken::Not => {
                pending = token.clone();
                continue;
            }
            // Groups never contain OR; it is the split point.
            NormalizedToken::Or => continue,
            NormalizedToken::Term(text) => {
                all_fields(fields, |field, boost| QueryTree::Term {
                    field: field.to_string(),
                    text: text.clone(),
                    boost,
                })
            }
            NormalizedToken::Wildcard(pattern) => {
                all_fields(fields, |field, boost| QueryTree::Wildcard {
                    field: field.to_string(),
                    pattern: pattern.clone(),
                    boost,
                })
            }
            NormalizedToken::Phrase(terms) => {
                all_fields(fields, |field, boost| QueryTree::Phrase {
                    field: field.to_string(),
                    terms: terms.clone(),
                    boost,
                })
            }
        };

        if pending == NormalizedToken::Not {
            clauses.push(Clause::prohibited(query));
        } else {
            clauses.push(Clause::required(query));
            has_required = true;
        }
        pending = NormalizedToken::And;
    }

    if !has_required {
        if !clauses.is_empty() {
            debug!(
                prohibited = clauses.len(),
                "dropping group without required clauses"
            );
        }
        return None;
    }

    Some(QueryTree::boolean(clauses))
}

/// Builds one leaf per field and combines them so a match in any field counts.
fn all_fields(fields: &FieldSet, leaf: impl Fn(&str, f32) -> QueryTree) -> QueryTree {
    let mut per_field: Vec<QueryTree> = fields
        .iter()
        .map(|spec| leaf(&spec.name, spec.boost))
        .collect();

    if per_field.len() == 1
        && let Some(single) = per_field.pop()
    {
        return single;
    }
    QueryTree::any(per_field)
}
