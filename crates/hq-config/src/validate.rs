//! Configuration validation.
//!
//! Reports settings that load fine but probably do not do what was meant.

use std::fmt;

use crate::{Config, SearchSettings};

/// A non-fatal warning about the configuration.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigWarning {
    /// A named field is listed more than once.
    DuplicateField {
        /// The repeated field name.
        field: String,
    },
    /// The default field is also listed as a named field.
    DefaultFieldNamed {
        /// The default field name.
        field: String,
    },
    /// `field_search_only` is set but no fields are named, so nothing is searched.
    NoSearchableFields,
    /// The phrase boost factor would demote adjacent words.
    WeakPhraseBoost {
        /// The configured factor.
        factor: f32,
    },
    /// `improve_ranking` is off, so the phrase boost factor has no effect.
    UnusedPhraseBoost,
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateField { field } => {
                write!(f, "field '{field}' is listed more than once")
            }
            Self::DefaultFieldNamed { field } => {
                write!(f, "default field '{field}' is also a named field")
            }
            Self::NoSearchableFields => {
                write!(f, "field_search_only is set but no fields are named")
            }
            Self::WeakPhraseBoost { factor } => {
                write!(f, "phrase_boost_factor {factor} is not greater than 1")
            }
            Self::UnusedPhraseBoost => {
                write!(f, "phrase_boost_factor is set but improve_ranking is off")
            }
        }
    }
}

/// Validates the configuration and returns any warnings.
pub fn validate_config(config: &Config) -> Vec<ConfigWarning> {
    let search = &config.search;
    let mut warnings = field_warnings(search);

    if search.improve_ranking {
        if search.phrase_boost_factor <= 1.0 {
            warnings.push(ConfigWarning::WeakPhraseBoost {
                factor: search.phrase_boost_factor,
            });
        }
    } else if search.phrase_boost_factor != SearchSettings::default().phrase_boost_factor {
        warnings.push(ConfigWarning::UnusedPhraseBoost);
    }

    warnings
}

/// Checks the named fields against each other and the default field.
fn field_warnings(search: &SearchSettings) -> Vec<ConfigWarning> {
    let mut warnings = Vec::new();

    if search.field_search_only && search.fields.is_empty() {
        warnings.push(ConfigWarning::NoSearchableFields);
    }

    for (i, field) in search.fields.iter().enumerate() {
        if search.fields[..i].contains(field) {
            warnings.push(ConfigWarning::DuplicateField {
                field: field.clone(),
            });
        }
    }

    if !search.field_search_only && search.fields.contains(&search.default_field) {
        warnings.push(ConfigWarning::DefaultFieldNamed {
            field: search.default_field.clone(),
        });
    }

    warnings
}
