//! Index schema helpers.
//!
//! The execution adapter only needs two things from a schema: a stored
//! `href` key identifying each document, and one positional text field per
//! searched field, analyzed with [`HQ_TOKENIZER`].

use std::collections::HashSet;

use hq_query::FieldSet;
use tantivy::schema::{
    Field, FieldType, IndexRecordOption, STORED, STRING, Schema, TextFieldIndexing, TextOptions,
};

use crate::{IndexError, analyzer::HQ_TOKENIZER};

/// Stored key field identifying a help document.
pub const HREF_FIELD: &str = "href";

/// Text field options: analyzed with positions (for phrases), stored.
fn text_options() -> TextOptions {
    TextOptions::default()
        .set_indexing_options(
            TextFieldIndexing::default()
                .set_tokenizer(HQ_TOKENIZER)
                .set_index_option(IndexRecordOption::WithFreqsAndPositions),
        )
        .set_stored()
}

/// Builds a schema able to serve every field of the field set.
///
/// Repeated field names are added once.
pub fn build_schema(fields: &FieldSet) -> Schema {
    let mut builder = Schema::builder();
    builder.add_text_field(HREF_FIELD, STRING | STORED);

    let mut seen = HashSet::new();
    for spec in fields {
        if spec.name != HREF_FIELD && seen.insert(spec.name.as_str()) {
            builder.add_text_field(&spec.name, text_options());
        }
    }

    builder.build()
}

/// Resolves a field name to a searchable text field.
pub fn text_field(schema: &Schema, name: &str) -> Result<Field, IndexError> {
    let field = schema
        .get_field(name)
        .map_err(|_| IndexError::UnknownField(name.to_string()))?;
    match schema.get_field_entry(field).field_type() {
        FieldType::Str(_) => Ok(field),
        _ => Err(IndexError::NotTextField(name.to_string())),
    }
}
