//! Query compiler.
//!
//! Compiles an `hq_query::QueryTree` into tantivy queries. Every leaf is
//! wrapped in a `BoostQuery` carrying its field boost.

use hq_query::{QueryTree, Requirement};
use tantivy::{
    Term,
    query::{BooleanQuery, BoostQuery, Occur, PhraseQuery, Query, RegexQuery, TermQuery},
    schema::{IndexRecordOption, Schema},
};

use crate::{IndexError, schema::text_field};

/// Maps a clause requirement onto tantivy's occurrence.
fn occur(requirement: Requirement) -> Occur {
    match requirement {
        Requirement::Required => Occur::Must,
        Requirement::Prohibited => Occur::MustNot,
        Requirement::Optional => Occur::Should,
    }
}

/// Translates a wildcard pattern into an anchored term regex.
///
/// `*` matches any run of characters and `?` exactly one; everything else
/// is matched literally. Patterns are not analyzed, so case is kept: against
/// an index built with the lowercasing hq analyzer, `Edit*` matches nothing
/// while `edit*` matches `editor`.
pub fn wildcard_to_regex(pattern: &str) -> String {
    let mut out = String::with_capacity(pattern.len() * 2);
    let mut buf = [0u8; 4];
    for ch in pattern.chars() {
        match ch {
            '*' => out.push_str(".*"),
            '?' => out.push('.'),
            other => out.push_str(&regex::escape(other.encode_utf8(&mut buf))),
        }
    }
    out
}

/// Compiles query trees against a tantivy schema.
#[derive(Debug, Clone)]
pub struct TantivyCompiler {
    /// Schema used to resolve field names.
    schema: Schema,
}

impl TantivyCompiler {
    /// Creates a compiler for the given schema.
    pub fn new(schema: Schema) -> Self {
        Self { schema }
    }

    /// Compiles a query tree into a tantivy query.
    pub fn compile(&self, tree: &QueryTree) -> Result<Box<dyn Query>, IndexError> {
        match tree {
            QueryTree::Term { field, text, boost } => {
                let term = Term::from_field_text(text_field(&self.schema, field)?, text);
                let query = TermQuery::new(term, IndexRecordOption::WithFreqs);
                Ok(boosted(Box::new(query), *boost))
            }
            QueryTree::Wildcard {
                field,
                pattern,
                boost,
            } => {
                let field = text_field(&self.schema, field)?;
                let query = RegexQuery::from_pattern(&wildcard_to_regex(pattern), field)
                    .map_err(|e| IndexError::Wildcard {
                        pattern: pattern.clone(),
                        message: e.to_string(),
                    })?;
                Ok(boosted(Box::new(query), *boost))
            }
            QueryTree::Phrase {
                field,
                terms,
                boost,
            } => self.compile_phrase(field, terms, *boost),
            QueryTree::Boolean { clauses } => {
                let clauses = clauses
                    .iter()
                    .map(|clause| Ok((occur(clause.requirement), self.compile(&clause.query)?)))
                    .collect::<Result<Vec<_>, IndexError>>()?;
                Ok(Box::new(BooleanQuery::new(clauses)))
            }
        }
    }

    /// Compiles a phrase; tantivy phrases need two terms, so a single-term
    /// phrase becomes a term query.
    fn compile_phrase(
        &self,
        field: &str,
        terms: &[String],
        boost: f32,
    ) -> Result<Box<dyn Query>, IndexError> {
        let field = text_field(&self.schema, field)?;
        let mut terms: Vec<Term> = terms
            .iter()
            .map(|t| Term::from_field_text(field, t))
            .collect();

        let query: Box<dyn Query> = match terms.len() {
            0 => Box::new(BooleanQuery::new(Vec::new())),
            1 => Box::new(TermQuery::new(
                terms.remove(0),
                IndexRecordOption::WithFreqs,
            )),
            _ => Box::new(PhraseQuery::new(terms)),
        };
        Ok(boosted(query, boost))
    }
}

/// Wraps a query with a score multiplier.
fn boosted(query: Box<dyn Query>, boost: f32) -> Box<dyn Query> {
    Box::new(BoostQuery::new(query, boost))
}

#[cfg(test)]
mod tests {
    use hq_query::{Clause, FieldSet};

    use super::*;
    use crate::schema::build_schema;

    fn compiler() -> TantivyCompiler {
        let fields = FieldSet::for_search(["title"], false).unwrap();
        TantivyCompiler::new(build_schema(&fields))
    }

    fn term(field: &str, text: &str) -> QueryTree {
        QueryTree::Term {
            field: field.into(),
            text: text.into(),
            boost: 5.0,
        }
    }

    #[test]
    fn wildcard_translation() {
        assert_eq!(wildcard_to_regex("edit*"), "edit.*");
        assert_eq!(wildcard_to_regex("fo?"), "fo.");
        assert_eq!(wildcard_to_regex("a.b*"), "a\\.b.*");
        assert_eq!(wildcard_to_regex("c++?"), "c\\+\\+.");
    }

    #[test]
    fn compiles_leaves() {
        let compiler = compiler();
        assert!(compiler.compile(&term("title", "java")).is_ok());
        assert!(
            compiler
                .compile(&QueryTree::Wildcard {
                    field: "contents".into(),
                    pattern: "edit*".into(),
                    boost: 1.0,
                })
                .is_ok()
        );
        for terms in [vec![], vec!["java"], vec!["java", "editor"]] {
            let phrase = QueryTree::Phrase {
                field: "contents".into(),
                terms: terms.into_iter().map(String::from).collect(),
                boost: 10.0,
            };
            assert!(compiler.compile(&phrase).is_ok());
        }
    }

    #[test]
    fn compiles_nested_boolean() {
        let tree = QueryTree::boolean(vec![
            Clause::required(QueryTree::any([
                term("title", "java"),
                term("contents", "java"),
            ])),
            Clause::prohibited(term("contents", "swing")),
        ]);
        assert!(compiler().compile(&tree).is_ok());
    }

    #[test]
    fn unknown_field_error() {
        let err = compiler().compile(&term("h2", "java")).unwrap_err();
        assert!(matches!(err, IndexError::UnknownField(ref name) if name == "h2"));
        assert!(err.to_string().contains("unknown field"));
    }

    #[test]
    fn unknown_field_inside_boolean() {
        let tree = QueryTree::any([term("title", "java"), term("nope", "java")]);
        assert!(compiler().compile(&tree).is_err());
    }

    #[test]
    fn occur_mapping() {
        assert_eq!(occur(Requirement::Required), Occur::Must);
        assert_eq!(occur(Requirement::Prohibited), Occur::MustNot);
        assert_eq!(occur(Requirement::Optional), Occur::Should);
    }
}
