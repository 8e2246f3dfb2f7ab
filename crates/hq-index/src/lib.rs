//! Tantivy execution adapter for hq.
//!
//! This crate connects the engine-independent query trees of `hq-query` to
//! tantivy. It provides:
//! - A stemming text analyzer, registered with the index and used to
//!   normalize query words
//! - Schema helpers for help documents keyed by `href`
//! - Compilation of query trees into tantivy queries
//! - Query execution returning scored hits plus highlight terms
//!
//! # Example
//!
//! ```
//! use hq_index::{StemmingAnalyzer, build_schema, execute};
//! use hq_query::{FieldSet, QueryCompiler};
//! use tantivy::Index;
//!
//! let fields = FieldSet::for_search(["title"], false).unwrap();
//! let analyzer = StemmingAnalyzer::from_name("english", true).unwrap();
//!
//! let index = Index::create_in_ram(build_schema(&fields));
//! analyzer.register(&index);
//!
//! let compiler = QueryCompiler::new(analyzer, fields);
//! let results = execute(&index, &compiler.compile("java editor"), 10).unwrap();
//! assert!(results.hits.is_empty());
//! ```

#![warn(missing_docs)]

mod analyzer;
mod compile;
mod error;
mod positions;
mod schema;
mod search;

pub use analyzer::{HQ_TOKENIZER, StemmingAnalyzer, build_analyzer, parse_language};
pub use compile::{TantivyCompiler, wildcard_to_regex};
pub use error::IndexError;
pub use positions::ContiguousPositions;
pub use schema::{HREF_FIELD, build_schema, text_field};
pub use search::{Hit, SearchResults, execute};
