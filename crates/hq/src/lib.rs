//! hq: help-search query compiler
//!
//! Turns free-form search strings into boolean query trees for a full-text help index. The
//! `hq` binary shows each stage of that compilation (lexical tokens, analyzed terms, the
//! query tree and the terms used for highlighting), driven by `.hq.toml` configuration.

#![warn(missing_docs)]

pub mod cli;
