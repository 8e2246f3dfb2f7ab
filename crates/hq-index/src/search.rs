//! Query execution.

use hq_query::CompiledQuery;
use serde::Serialize;
use tantivy::{
    Index, TantivyDocument,
    collector::TopDocs,
    schema::{Field, Value},
};
use tracing::{debug, instrument};

use crate::{IndexError, compile::TantivyCompiler, schema::HREF_FIELD};

/// A matching document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Hit {
    /// The document's `href` key.
    pub href: String,
    /// Relevance score assigned by the engine.
    pub score: f32,
}

/// The hits of one query together with the terms to highlight in them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResults {
    /// Hits in descending score order.
    pub hits: Vec<Hit>,
    /// Space-separated normalized terms of the query.
    pub highlight_terms: String,
}

impl SearchResults {
    /// Results without hits, keeping the query's highlight terms.
    fn empty(compiled: &CompiledQuery) -> Self {
        Self {
            hits: Vec::new(),
            highlight_terms: compiled.highlight_terms.clone(),
        }
    }
}

/// Executes a compiled query against an index.
///
/// A query without a tree, or a `limit` of zero, returns no hits without
/// touching the index. The index must have the hq analyzer registered and an
/// `href` field.
#[instrument(skip_all, fields(query = %compiled.raw, limit = limit))]
pub fn execute(
    index: &Index,
    compiled: &CompiledQuery,
    limit: usize,
) -> Result<SearchResults, IndexError> {
    let Some(tree) = &compiled.tree else {
        debug!("query has no searchable terms");
        return Ok(SearchResults::empty(compiled));
    };
    if limit == 0 {
        return Ok(SearchResults::empty(compiled));
    }

    let schema = index.schema();
    let href = schema
        .get_field(HREF_FIELD)
        .map_err(|_| IndexError::UnknownField(HREF_FIELD.to_string()))?;
    let query = TantivyCompiler::new(schema).compile(tree)?;

    let reader = index.reader().map_err(|e| IndexError::search(&e))?;
    let searcher = reader.searcher();
    let top_docs = searcher
        .search(&*query, &TopDocs::with_limit(limit))
        .map_err(|e| IndexError::search(&e))?;

    let hits = top_docs
        .into_iter()
        .map(|(score, address)| {
            let doc: TantivyDocument = searcher.doc(address).map_err(|e| IndexError::search(&e))?;
            Ok(Hit {
                href: stored_text(&doc, href),
                score,
            })
        })
        .collect::<Result<Vec<_>, IndexError>>()?;
    debug!(hits = hits.len(), "search completed");

    Ok(SearchResults {
        hits,
        highlight_terms: compiled.highlight_terms.clone(),
    })
}

/// Reads a stored text field, returning an empty string if missing.
fn stored_text(doc: &TantivyDocument, field: Field) -> String {
    doc.get_first(field)
        .and_then(|v| v.as_str())
        .unwrap_or("")
        .to_string()
}
