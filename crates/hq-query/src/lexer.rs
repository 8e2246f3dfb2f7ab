//! Query lexer (tokenizer).
//!
//! Splits a raw query string into lexical tokens. Quotation marks toggle
//! between unquoted and quoted spans: unquoted spans are split on whitespace
//! and checked for the reserved words `AND`, `OR` and `NOT`, quoted spans are
//! kept verbatim as a single phrase.

use serde::Serialize;
use tracing::debug;

/// The quotation character that delimits phrases.
const QUOTE: char = '"';

/// A token in the user query language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "text", rename_all = "snake_case")]
pub enum LexicalToken {
    /// A bare word outside quotes.
    Word(String),

    /// The raw contents of a quoted segment (quotes stripped).
    Phrase(String),

    /// The AND keyword.
    And,

    /// The OR keyword.
    Or,

    /// The NOT keyword.
    Not,
}

impl LexicalToken {
    /// Classifies an unquoted word, recognizing the reserved operator words
    /// case-insensitively.
    fn from_word(word: &str) -> Self {
        if word.eq_ignore_ascii_case("AND") {
            Self::And
        } else if word.eq_ignore_ascii_case("OR") {
            Self::Or
        } else if word.eq_ignore_ascii_case("NOT") {
            Self::Not
        } else {
            Self::Word(word.to_string())
        }
    }

    /// Returns true for the AND, OR and NOT markers.
    pub fn is_operator(&self) -> bool {
        matches!(self, Self::And | Self::Or | Self::Not)
    }
}

/// Tokenizes a raw query string.
///
/// The input is trimmed, then split at every quotation mark. Segments
/// alternate between outside and inside quotes, starting outside. A quoted
/// segment becomes a [`LexicalToken::Phrase`] only once its closing quote is
/// seen: the contents of an unterminated trailing quote are discarded.
pub fn tokenize(raw: &str) -> Vec<LexicalToken> {
    let segments: Vec<&str> = raw.trim().split(QUOTE).collect();
    let last = segments.len() - 1;
    let mut tokens = Vec::new();

    for (index, segment) in segments.iter().enumerate() {
        let quoted = index % 2 == 1;
        if !quoted {
            tokens.extend(segment.split_whitespace().map(LexicalToken::from_word));
        } else if index < last {
            tokens.push(LexicalToken::Phrase((*segment).to_string()));
        } else {
            debug!(fragment = %segment, "dropping unterminated quoted fragment");
        }
    }

    tokens
}

/// Reports whether [`tokenize`] will discard a dangling quoted fragment.
///
/// This is the case whenever the query contains an odd number of quotation
/// marks.
pub fn has_unterminated_quote(raw: &str) -> bool {
    raw.chars().filter(|&c| c == QUOTE).count() % 2 == 1
}
