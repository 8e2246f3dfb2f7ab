//! Configuration file parsing.
//!
//! Each `.hq.toml` parses into a [`RawConfig`] whose values are all optional,
//! so that partial files can be layered during merging.

use std::{fs, path::Path};

use serde::Deserialize;
use serde_with::{OneOrMany, serde_as};

use crate::ConfigError;

/// Raw configuration as parsed directly from a TOML file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawConfig {
    /// When true, stop discovery here and ignore parent and global configs.
    pub root: Option<bool>,
    /// Search settings section.
    pub search: Option<RawSearchSettings>,
}

/// Raw `[search]` section.
#[serde_as]
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawSearchSettings {
    /// Named fields to search; a single string or an array.
    #[serde_as(as = "Option<OneOrMany<_>>")]
    pub fields: Option<Vec<String>>,
    /// Search only the named fields, without the default field.
    pub field_search_only: Option<bool>,
    /// Implicit field searched alongside the named ones.
    pub default_field: Option<String>,
    /// Boost of each named field.
    pub field_boost: Option<f32>,
    /// Boost of the default field.
    pub default_field_boost: Option<f32>,
    /// Stemming language.
    pub stemmer: Option<String>,
    /// Remove English stop words from queries.
    pub stop_words: Option<bool>,
    /// Add the adjacent-words phrase boost to plain word queries.
    pub improve_ranking: Option<bool>,
    /// Multiplier applied to field boosts for the adjacency phrase.
    pub phrase_boost_factor: Option<f32>,
}

/// Parses a configuration file from disk.
pub fn parse_config_file(path: &Path) -> Result<RawConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;

    parse_config_str(&contents, path)
}

/// Parses configuration from a TOML string; `path` is used for error reporting.
pub fn parse_config_str(contents: &str, path: &Path) -> Result<RawConfig, ConfigError> {
    toml::from_str(contents).map_err(|source| ConfigError::ParseToml {
        path: path.to_path_buf(),
        source,
    })
}

/// Checks if a config file has `root = true` set.
///
/// Unreadable or malformed files count as non-root; the error surfaces later
/// when the file is loaded.
pub fn is_root_config(path: &Path) -> bool {
    parse_config_file(path).is_ok_and(|config| config.root == Some(true))
}
