//! Analyzer adapter.
//!
//! Maps lexical tokens through an external text analyzer (stemming,
//! case-folding, stop-word removal) to produce the normalized token stream
//! the tree builder consumes. Operator markers pass through untouched and the
//! left-to-right order of the input is preserved.

use std::slice;

use serde::Serialize;

use crate::lexer::LexicalToken;

/// Characters that turn a word into a wildcard pattern.
const WILDCARD_CHARS: [char; 2] = ['?', '*'];

/// The text analysis callback.
///
/// Maps one raw word to zero or more normalized terms. Implementations must
/// be deterministic for identical input so that compilation is reproducible,
/// and must be thread-safe if queries are compiled concurrently.
pub trait Analyzer {
    /// Normalizes a single word into its index terms.
    fn analyze(&self, word: &str) -> Vec<String>;
}

impl<F> Analyzer for F
where
    F: Fn(&str) -> Vec<String>,
{
    fn analyze(&self, word: &str) -> Vec<String> {
        self(word)
    }
}

/// A token after text analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "terms", rename_all = "snake_case")]
pub enum NormalizedToken {
    /// A single normalized term.
    Term(String),

    /// A word containing `?` or `*`, carried verbatim.
    Wildcard(String),

    /// The normalized terms of a quoted phrase, in order. Never empty.
    Phrase(Vec<String>),

    /// The AND keyword.
    And,

    /// The OR keyword.
    Or,

    /// The NOT keyword.
    Not,
}

impl NormalizedToken {
    /// Iterates over the terms carried by this token; operators carry none.
    pub fn terms(&self) -> impl Iterator<Item = &str> {
        let terms: &[String] = match self {
            Self::Term(term) | Self::Wildcard(term) => slice::from_ref(term),
            Self::Phrase(terms) => terms,
            Self::And | Self::Or | Self::Not => &[],
        };
        terms.iter().map(String::as_str)
    }
}

/// Returns true if the word contains a wildcard character.
pub fn is_wildcard(word: &str) -> bool {
    word.contains(WILDCARD_CHARS)
}

/// Runs every lexical token through the analyzer.
///
/// Words containing `?` or `*` bypass the analyzer and become a
/// [`NormalizedToken::Wildcard`]. Other words expand to one term per analyzed
/// string. Phrases are split on whitespace, each word analyzed, and the
/// concatenated terms kept as one phrase, which is dropped if empty.
pub fn normalize<A>(tokens: &[LexicalToken], analyzer: &A) -> Vec<NormalizedToken>
where
    A: Analyzer + ?Sized,
{
    let mut normalized = Vec::with_capacity(tokens.len());

    for token in tokens {
        match token {
            LexicalToken::Word(word) if is_wildcard(word) => {
                normalized.push(NormalizedToken::Wildcard(word.clone()));
            }
            LexicalToken::Word(word) => {
                normalized.extend(analyzer.analyze(word).into_iter().map(NormalizedToken::Term));
            }
            LexicalToken::Phrase(text) => {
                let terms: Vec<String> = text
                    .split_whitespace()
                    .flat_map(|word| analyzer.analyze(word))
                    .collect();
                if !terms.is_empty() {
                    normalized.push(NormalizedToken::Phrase(terms));
                }
            }
            LexicalToken::And => normalized.push(NormalizedToken::And),
            LexicalToken::Or => normalized.push(NormalizedToken::Or),
            LexicalToken::Not => normalized.push(NormalizedToken::Not),
        }
    }

    normalized
}
