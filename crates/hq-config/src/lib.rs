//! Configuration system for hq.
//!
//! hq reads TOML configuration files named `.hq.toml`. Files are collected by walking up the
//! directory tree from the current working directory, then `~/.hq.toml` is loaded as the
//! global config with lowest precedence. The merged settings choose the fields a query is
//! compiled against, the analyzer, and the ranking enhancement.

#![warn(missing_docs)]

mod discovery;
mod error;
mod merge;
mod parse;
mod templates;
mod validate;

use std::path::{Path, PathBuf};

pub use discovery::{
    CONFIG_FILENAME, discover_config_files, global_config_path, is_global_config,
    require_global_config_path,
};
pub use error::ConfigError;
use hq_query::{
    CompileOptions, DEFAULT_FIELD, DEFAULT_FIELD_BOOST, FieldSet, NAMED_FIELD_BOOST,
    PHRASE_BOOST_FACTOR,
};
pub use merge::{ParsedConfig, merge_configs};
pub use parse::{RawConfig, RawSearchSettings, parse_config_file, parse_config_str};
use serde::{Deserialize, Serialize};
pub use templates::config_template;
pub use validate::ConfigWarning;
use validate::validate_config;

/// Merged configuration for hq.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Search settings.
    pub search: SearchSettings,
    /// Directory containing the most specific config file, if any was found.
    pub config_root: Option<PathBuf>,
}

impl Config {
    /// Loads configuration by discovering and merging all relevant `.hq.toml` files.
    ///
    /// Returns `Ok(Config::default())` if no configuration files are found.
    pub fn load(cwd: &Path) -> Result<Self, ConfigError> {
        Self::load_from_files(&discover_config_files(cwd))
    }

    /// Loads configuration from an explicit list of files, highest precedence first.
    pub fn load_from_files(files: &[PathBuf]) -> Result<Self, ConfigError> {
        let parsed = files
            .iter()
            .map(|path| {
                Ok(ParsedConfig {
                    path: path.clone(),
                    config: parse_config_file(path)?,
                })
            })
            .collect::<Result<Vec<_>, ConfigError>>()?;

        Ok(merge_configs(&parsed))
    }

    /// Checks the settings for likely mistakes.
    pub fn validate(&self) -> Vec<ConfigWarning> {
        validate_config(self)
    }

    /// Renders the effective settings in `.hq.toml` format.
    pub fn settings_to_toml(&self) -> Result<String, ConfigError> {
        let serializable = SerializableSettings {
            search: &self.search,
        };
        Ok(toml::to_string_pretty(&serializable)?)
    }
}

/// The `[search]` section.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct SearchSettings {
    /// Named fields searched alongside the default field.
    pub fields: Vec<String>,
    /// Search only the named fields.
    pub field_search_only: bool,
    /// Implicit field searched unless `field_search_only` is set.
    pub default_field: String,
    /// Boost of each named field.
    pub field_boost: f32,
    /// Boost of the default field.
    pub default_field_boost: f32,
    /// Stemming language.
    pub stemmer: String,
    /// Remove English stop words.
    pub stop_words: bool,
    /// Add the adjacent-words phrase boost to plain word queries.
    pub improve_ranking: bool,
    /// Multiplier applied to field boosts for the adjacency phrase.
    pub phrase_boost_factor: f32,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            fields: Vec::new(),
            field_search_only: false,
            default_field: DEFAULT_FIELD.to_string(),
            field_boost: NAMED_FIELD_BOOST,
            default_field_boost: DEFAULT_FIELD_BOOST,
            stemmer: String::from("english"),
            stop_words: true,
            improve_ranking: true,
            phrase_boost_factor: PHRASE_BOOST_FACTOR,
        }
    }
}

impl SearchSettings {
    /// Builds the field set queries are compiled against.
    ///
    /// Fails if no field remains or a boost is not a positive number.
    pub fn field_set(&self) -> Result<FieldSet, ConfigError> {
        let default = (!self.field_search_only)
            .then_some((self.default_field.as_str(), self.default_field_boost));
        Ok(FieldSet::with_boosts(
            self.fields.iter().cloned(),
            self.field_boost,
            default,
        )?)
    }

    /// Returns the compiler options these settings select.
    pub fn compile_options(&self) -> CompileOptions {
        CompileOptions {
            improve_ranking: self.improve_ranking,
            phrase_boost_factor: self.phrase_boost_factor,
        }
    }
}

/// Borrowed view used to render settings as TOML.
#[derive(Serialize)]
struct SerializableSettings<'a> {
    /// Search settings.
    search: &'a SearchSettings,
}

#[cfg(test)]
mod tests {
    use hq_query::{FieldError, FieldSpec};

    use super::*;

    #[test]
    fn search_settings_defaults() {
        let search = SearchSettings::default();
        assert!(search.fields.is_empty());
        assert!(!search.field_search_only);
        assert_eq!(search.default_field, "contents");
        assert!((search.field_boost - 5.0).abs() < f32::EPSILON);
        assert!((search.default_field_boost - 1.0).abs() < f32::EPSILON);
        assert_eq!(search.stemmer, "english");
        assert!(search.stop_words);
        assert!(search.improve_ranking);
        assert!((search.phrase_boost_factor - 10.0).abs() < f32::EPSILON);
    }

    #[test]
    fn default_field_set_is_contents_only() {
        let fields = SearchSettings::default().field_set().unwrap();
        assert_eq!(fields.as_slice(), &[FieldSpec::new("contents", 1.0)]);
    }

    #[test]
    fn named_fields_precede_default_field() {
        let search = SearchSettings {
            fields: vec!["title".into(), "keywords".into()],
            ..SearchSettings::default()
        };
        let fields = search.field_set().unwrap();
        assert_eq!(
            fields.as_slice(),
            &[
                FieldSpec::new("title", 5.0),
                FieldSpec::new("keywords", 5.0),
                FieldSpec::new("contents", 1.0),
            ]
        );
    }

    #[test]
    fn field_search_only_drops_default_field() {
        let search = SearchSettings {
            fields: vec!["title".into()],
            field_search_only: true,
            field_boost: 2.0,
            ..SearchSettings::default()
        };
        let fields = search.field_set().unwrap();
        assert_eq!(fields.as_slice(), &[FieldSpec::new("title", 2.0)]);
    }

    #[test]
    fn empty_field_set_is_an_error() {
        let search = SearchSettings {
            field_search_only: true,
            ..SearchSettings::default()
        };
        let err = search.field_set().unwrap_err();
        assert!(matches!(err, ConfigError::Fields(FieldError::Empty)));
    }

    #[test]
    fn compile_options_follow_settings() {
        let search = SearchSettings {
            improve_ranking: false,
            phrase_boost_factor: 3.0,
            ..SearchSettings::default()
        };
        let options = search.compile_options();
        assert!(!options.improve_ranking);
        assert!((options.phrase_boost_factor - 3.0).abs() < f32::EPSILON);
        assert_eq!(
            SearchSettings::default().compile_options(),
            CompileOptions::default()
        );
    }

    #[test]
    fn settings_to_toml() {
        let toml = Config::default().settings_to_toml().unwrap();

        assert!(toml.contains("[search]"));
        assert!(toml.contains("stemmer = \"english\""));
        assert!(toml.contains("default_field = \"contents\""));
        assert!(toml.contains("phrase_boost_factor = 10.0"));

        let parsed = parse_config_str(&toml, Path::new("effective.toml")).unwrap();
        let search = parsed.search.unwrap();
        assert_eq!(search.fields, Some(Vec::new()));
        assert_eq!(search.improve_ranking, Some(true));
    }
}
