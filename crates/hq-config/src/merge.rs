//! Configuration merging.
//!
//! Layers parsed files into a single [`Config`]. Files are given closest
//! first; for every setting the first file that defines it wins.

use std::path::{Path, PathBuf};

use crate::{
    Config, SearchSettings,
    parse::{RawConfig, RawSearchSettings},
};

/// A parsed config file with its source path.
#[derive(Debug, Clone)]
pub struct ParsedConfig {
    /// Path to the config file.
    pub path: PathBuf,
    /// Parsed raw configuration.
    pub config: RawConfig,
}

/// Merges configuration files, highest precedence first, into a `Config`.
///
/// Settings no file defines keep their defaults. The directory of the first
/// file becomes the config root.
pub fn merge_configs(configs: &[ParsedConfig]) -> Config {
    let mut search = SearchSettings::default();

    // Lowest precedence first so closer files overwrite.
    for parsed in configs.iter().rev() {
        if let Some(raw) = &parsed.config.search {
            apply_raw_search(&mut search, raw);
        }
    }

    Config {
        search,
        config_root: configs
            .first()
            .and_then(|c| c.path.parent())
            .map(Path::to_path_buf),
    }
}

/// Overwrites every setting the raw section defines.
fn apply_raw_search(result: &mut SearchSettings, raw: &RawSearchSettings) {
    if let Some(v) = &raw.fields {
        result.fields.clone_from(v);
    }
    if let Some(v) = raw.field_search_only {
        result.field_search_only = v;
    }
    if let Some(v) = &raw.default_field {
        result.default_field.clone_from(v);
    }
    if let Some(v) = raw.field_boost {
        result.field_boost = v;
    }
    if let Some(v) = raw.default_field_boost {
        result.default_field_boost = v;
    }
    if let Some(v) = &raw.stemmer {
        result.stemmer.clone_from(v);
    }
    if let Some(v) = raw.stop_words {
        result.stop_words = v;
    }
    if let Some(v) = raw.improve_ranking {
        result.improve_ranking = v;
    }
    if let Some(v) = raw.phrase_boost_factor {
        result.phrase_boost_factor = v;
    }
}
