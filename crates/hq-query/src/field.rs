//! Search field configuration.
//!
//! Every atomic query clause is replicated across an ordered set of target
//! fields, each weighted by its own boost.

use std::slice;

use serde::Serialize;

use crate::error::FieldError;

/// Name of the implicit full-text field searched unless field-only search is requested.
pub const DEFAULT_FIELD: &str = "contents";

/// Boost given to each explicitly named field.
pub const NAMED_FIELD_BOOST: f32 = 5.0;

/// Boost given to the implicit default field.
pub const DEFAULT_FIELD_BOOST: f32 = 1.0;

/// A document field to search, with its relevance multiplier.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldSpec {
    /// Field name as known to the search engine.
    pub name: String,
    /// Positive multiplier on a clause's contribution to relevance.
    pub boost: f32,
}

impl FieldSpec {
    /// Creates a field specification.
    pub fn new(name: impl Into<String>, boost: f32) -> Self {
        Self {
            name: name.into(),
            boost,
        }
    }
}

/// A validated, ordered, non-empty list of fields.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct FieldSet {
    /// The fields, in configuration order.
    fields: Vec<FieldSpec>,
}

impl FieldSet {
    /// Creates a field set, rejecting empty lists, empty names and boosts
    /// that are not finite positive numbers.
    pub fn new(fields: Vec<FieldSpec>) -> Result<Self, FieldError> {
        if fields.is_empty() {
            return Err(FieldError::Empty);
        }
        for field in &fields {
            if field.name.is_empty() {
                return Err(FieldError::EmptyName);
            }
            if !field.boost.is_finite() || field.boost <= 0.0 {
                return Err(FieldError::InvalidBoost {
                    field: field.name.clone(),
                    boost: field.boost,
                });
            }
        }
        Ok(Self { fields })
    }

    /// Builds the field set for a search over the given field names.
    ///
    /// Named fields get [`NAMED_FIELD_BOOST`]. Unless `field_search_only` is
    /// set, [`DEFAULT_FIELD`] is appended with [`DEFAULT_FIELD_BOOST`].
    pub fn for_search<I, S>(names: I, field_search_only: bool) -> Result<Self, FieldError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_boosts(
            names,
            NAMED_FIELD_BOOST,
            (!field_search_only).then_some((DEFAULT_FIELD, DEFAULT_FIELD_BOOST)),
        )
    }

    /// Like [`FieldSet::for_search`], with explicit boosts and default field.
    ///
    /// `default` is the implicit field and its boost, or `None` to search
    /// only the named fields.
    pub fn with_boosts<I, S>(
        names: I,
        named_boost: f32,
        default: Option<(&str, f32)>,
    ) -> Result<Self, FieldError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut fields: Vec<FieldSpec> = names
            .into_iter()
            .map(|name| FieldSpec::new(name, named_boost))
            .collect();
        if let Some((name, boost)) = default {
            fields.push(FieldSpec::new(name, boost));
        }
        Self::new(fields)
    }

    /// Returns the fields in order.
    pub fn as_slice(&self) -> &[FieldSpec] {
        &self.fields
    }

    /// Iterates over the fields in order.
    pub fn iter(&self) -> impl Iterator<Item = &FieldSpec> {
        self.fields.iter()
    }

    /// Number of fields; always at least one.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<'a> IntoIterator for &'a FieldSet {
    type Item = &'a FieldSpec;
    type IntoIter = slice::Iter<'a, FieldSpec>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}
