//! End-to-end query compilation.

use serde::Serialize;
use tracing::debug;

use crate::{
    builder::build,
    enhance::{PHRASE_BOOST_FACTOR, enhance},
    field::FieldSet,
    highlight::flatten,
    lexer::{LexicalToken, tokenize},
    normalize::{Analyzer, NormalizedToken, normalize},
    tree::QueryTree,
};

/// Tuning knobs for compilation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompileOptions {
    /// Add the whole-query phrase clause to plain word queries.
    pub improve_ranking: bool,
    /// Multiplier on field boosts for the whole-query phrase clause.
    pub phrase_boost_factor: f32,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            improve_ranking: true,
            phrase_boost_factor: PHRASE_BOOST_FACTOR,
        }
    }
}

/// The result of compiling one user query.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompiledQuery {
    /// The raw query as typed.
    pub raw: String,
    /// Output of the lexer.
    pub lexical: Vec<LexicalToken>,
    /// Output of the analyzer adapter.
    pub normalized: Vec<NormalizedToken>,
    /// The query to execute, or `None` if nothing searchable remained.
    pub tree: Option<QueryTree>,
    /// Space-separated normalized terms, for result highlighting.
    pub highlight_terms: String,
}

impl CompiledQuery {
    /// Returns true if there is a query to execute.
    pub fn is_searchable(&self) -> bool {
        self.tree.is_some()
    }
}

/// Compiles raw user queries into boolean query trees.
///
/// Holds no mutable state, so a compiler can be shared between threads
/// whenever its analyzer can.
#[derive(Debug, Clone)]
pub struct QueryCompiler<A> {
    /// Text analyzer applied to words and phrases.
    analyzer: A,
    /// Fields every atomic clause is replicated over.
    fields: FieldSet,
    /// Compilation options.
    options: CompileOptions,
}

impl<A: Analyzer> QueryCompiler<A> {
    /// Creates a compiler with default options.
    pub fn new(analyzer: A, fields: FieldSet) -> Self {
        Self {
            analyzer,
            fields,
            options: CompileOptions::default(),
        }
    }

    /// Replaces the compilation options.
    pub fn with_options(mut self, options: CompileOptions) -> Self {
        self.options = options;
        self
    }

    /// Returns the configured fields.
    pub fn fields(&self) -> &FieldSet {
        &self.fields
    }

    /// Returns the compilation options.
    pub fn options(&self) -> CompileOptions {
        self.options
    }

    /// Returns the analyzer.
    pub fn analyzer(&self) -> &A {
        &self.analyzer
    }

    /// Runs the whole pipeline on a raw query string.
    pub fn compile(&self, raw: &str) -> CompiledQuery {
        let lexical = tokenize(raw);
        let normalized = normalize(&lexical, &self.analyzer);

        let mut tree = build(&normalized, &self.fields);
        if self.options.improve_ranking {
            tree = tree.map(|tree| {
                enhance(
                    tree,
                    &normalized,
                    &self.fields,
                    self.options.phrase_boost_factor,
                )
            });
        }

        let highlight_terms = flatten(&normalized);
        debug!(
            lexical = lexical.len(),
            normalized = normalized.len(),
            searchable = tree.is_some(),
            "compiled query"
        );

        CompiledQuery {
            raw: raw.to_string(),
            lexical,
            normalized,
            tree,
            highlight_terms,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::thread;

    use super::*;
    use crate::field::FieldSpec;

    fn identity(word: &str) -> Vec<String> {
        vec![word.to_string()]
    }

    fn compiler() -> QueryCompiler<fn(&str) -> Vec<String>> {
        let fields = FieldSet::new(vec![FieldSpec::new("x", 1.0)]).unwrap();
        QueryCompiler::new(identity as fn(&str) -> Vec<String>, fields)
    }

    #[test]
    fn empty_query_is_not_searchable() {
        let compiled = compiler().compile("   ");
        assert!(!compiled.is_searchable());
        assert!(compiled.lexical.is_empty());
        assert!(compiled.normalized.is_empty());
        assert_eq!(compiled.highlight_terms, "");
    }

    #[test]
    fn plain_words_are_enhanced() {
        let tree = compiler().compile("quick fox").tree.unwrap();
        assert_eq!(tree.clauses().len(), 2);
    }

    #[test]
    fn enhancement_can_be_disabled() {
        let options = CompileOptions {
            improve_ranking: false,
            ..CompileOptions::default()
        };
        let tree = compiler().with_options(options).compile("quick fox").tree.unwrap();
        assert_eq!(tree.to_query_string(), "+x:quick +x:fox");
    }

    #[test]
    fn keeps_raw_query_and_highlights() {
        let compiled = compiler().compile("java NOT \"swing ui\"");
        assert_eq!(compiled.raw, "java NOT \"swing ui\"");
        assert_eq!(compiled.highlight_terms, "java swing ui");
    }

    #[test]
    fn compiles_concurrently() {
        let compiler = compiler();
        let expected = compiler.compile("a OR b NOT c");
        thread::scope(|scope| {
            let handles: Vec<_> = (0..4)
                .map(|_| scope.spawn(|| compiler.compile("a OR b NOT c")))
                .collect();
            for handle in handles {
                assert_eq!(handle.join().unwrap(), expected);
            }
        });
    }

    #[test]
    fn default_options() {
        let options = CompileOptions::default();
        assert!(options.improve_ranking);
        assert_eq!(options.phrase_boost_factor, 10.0);
    }
}
