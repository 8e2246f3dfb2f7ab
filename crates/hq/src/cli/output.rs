//! Rendering and JSON serialization for CLI output.

use hq_query::{CompiledQuery, FieldSet, LexicalToken, NormalizedToken};
use serde::Serialize;

/// JSON output for `hq explain`.
#[derive(Serialize)]
pub struct JsonExplain<'a> {
    /// The compilation result.
    #[serde(flatten)]
    pub compiled: &'a CompiledQuery,
    /// Fields the query was compiled against.
    pub fields: &'a FieldSet,
    /// The tree in boolean query syntax, if there is one.
    pub query_string: Option<String>,
    /// Whether the raw query had an unmatched double quote.
    pub unterminated_quote: bool,
}

/// Formats a warning line for stderr.
pub fn warning(message: &str) -> String {
    format!("warning: {message}")
}

/// Returns the wildcard patterns that contain uppercase letters.
///
/// Patterns skip the analyzer, so they are matched against lowercased index
/// terms exactly as typed and such patterns never match.
pub fn uppercase_wildcards(tokens: &[NormalizedToken]) -> Vec<&str> {
    tokens
        .iter()
        .filter_map(|token| match token {
            NormalizedToken::Wildcard(pattern) if pattern.chars().any(char::is_uppercase) => {
                Some(pattern.as_str())
            }
            _ => None,
        })
        .collect()
}

/// Formats lexical tokens as a bracketed list.
pub fn format_lexical(tokens: &[LexicalToken]) -> String {
    bracketed(tokens.iter().map(|token| match token {
        LexicalToken::Word(word) => word.clone(),
        LexicalToken::Phrase(text) => format!("\"{text}\""),
        LexicalToken::And => "AND".into(),
        LexicalToken::Or => "OR".into(),
        LexicalToken::Not => "NOT".into(),
    }))
}

/// Formats normalized tokens as a bracketed list.
pub fn format_normalized(tokens: &[NormalizedToken]) -> String {
    bracketed(tokens.iter().map(|token| match token {
        NormalizedToken::Term(term) | NormalizedToken::Wildcard(term) => term.clone(),
        NormalizedToken::Phrase(terms) => format!("\"{}\"", terms.join(" ")),
        NormalizedToken::And => "AND".into(),
        NormalizedToken::Or => "OR".into(),
        NormalizedToken::Not => "NOT".into(),
    }))
}

/// Formats fields as `name^boost`, omitting a boost of 1.
pub fn format_fields(fields: &FieldSet) -> String {
    fields
        .iter()
        .map(|field| {
            if field.boost == 1.0 {
                field.name.clone()
            } else {
                format!("{}^{}", field.name, field.boost)
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Renders every compilation stage as human-readable text.
pub fn render_explain(compiled: &CompiledQuery, fields: &FieldSet) -> String {
    let mut lines = vec![
        format!("Query:        {}", compiled.raw),
        format!("Fields:       {}", format_fields(fields)),
        format!("Lexical:      {}", format_lexical(&compiled.lexical)),
        format!("Normalized:   {}", format_normalized(&compiled.normalized)),
    ];
    match &compiled.tree {
        Some(tree) => {
            lines.push(format!("Query string: {}", tree.to_query_string()));
            lines.push("Tree:".into());
            lines.extend(tree.to_string().lines().map(|line| format!("  {line}")));
        }
        None => lines.push("Query string: (no query)".into()),
    }
    lines.push(format!("Highlight:    {}", compiled.highlight_terms));

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

/// Bracketed, space-separated list; `(none)` when empty.
fn bracketed(items: impl Iterator<Item = String>) -> String {
    let parts: Vec<String> = items.map(|item| format!("[{item}]")).collect();
    if parts.is_empty() {
        "(none)".into()
    } else {
        parts.join(" ")
    }
}
