//! Query compiler for hq help search.
//!
//! Turns a free-form user query into a boolean query tree for a full-text
//! index:
//!
//! - **Words**: `editor` - must appear (after analysis)
//! - **Phrases**: `"java editor"` - exact adjacent sequence
//! - **AND / NOT**: `java NOT swing` - modify the next word or phrase
//! - **OR**: `java OR kotlin` - lowest precedence alternatives
//! - **Wildcards**: `edit*`, `fo?` - matched as patterns, never analyzed
//!
//! Each word or phrase is searched in every configured field, weighted by
//! the field boost. A query made only of plain words additionally rewards
//! documents containing the words as one phrase.
//!
//! # Example
//!
//! ```
//! use hq_query::{FieldSet, QueryCompiler};
//!
//! let fields = FieldSet::for_search(["title"], false).unwrap();
//! let lowercase = |word: &str| vec![word.to_lowercase()];
//! let compiler = QueryCompiler::new(lowercase, fields);
//!
//! let compiled = compiler.compile("Java NOT swing");
//! assert!(compiled.tree.is_some());
//! assert_eq!(compiled.highlight_terms, "java swing");
//! ```

#![warn(missing_docs)]

mod builder;
mod compiler;
mod enhance;
mod error;
mod field;
mod highlight;
mod lexer;
mod normalize;
mod tree;

pub use builder::{build, compile_group};
pub use compiler::{CompileOptions, CompiledQuery, QueryCompiler};
pub use enhance::{PHRASE_BOOST_FACTOR, enhance, is_plain_word_query};
pub use error::FieldError;
pub use field::{DEFAULT_FIELD, DEFAULT_FIELD_BOOST, FieldSet, FieldSpec, NAMED_FIELD_BOOST};
pub use highlight::flatten;
pub use lexer::{LexicalToken, has_unterminated_quote, tokenize};
pub use normalize::{Analyzer, NormalizedToken, is_wildcard, normalize};
pub use tree::{Clause, QueryTree, Requirement};
