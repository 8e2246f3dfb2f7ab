//! Shared context for running CLI commands.

use std::{
    env,
    path::{Path, PathBuf},
    process::ExitCode,
};

use hq_config::{Config, SearchSettings};
use hq_index::StemmingAnalyzer;
use hq_query::QueryCompiler;

/// Command execution context built once per CLI invocation.
pub struct CommandContext {
    /// Current working directory.
    pub cwd: PathBuf,
    /// Loaded configuration (may be default if no config files found).
    pub config: Config,
}

impl CommandContext {
    /// Loads the current directory and configuration.
    pub fn load() -> Result<Self, ExitCode> {
        let cwd = current_dir_or_failure()?;
        let config = load_config_or_failure(&cwd)?;
        Ok(Self { cwd, config })
    }

    /// Loads only the current directory, skipping configuration parsing.
    ///
    /// Used by `init`, which must work even when an existing config file is invalid.
    pub fn load_cwd_only() -> Result<Self, ExitCode> {
        let cwd = current_dir_or_failure()?;
        Ok(Self {
            cwd,
            config: Config::default(),
        })
    }

    /// Builds a query compiler for the given settings.
    pub fn compiler(
        &self,
        settings: &SearchSettings,
    ) -> Result<QueryCompiler<StemmingAnalyzer>, ExitCode> {
        let fields = settings.field_set().map_err(|e| {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        })?;
        let analyzer =
            StemmingAnalyzer::from_name(&settings.stemmer, settings.stop_words).map_err(|e| {
                eprintln!("error: {e}");
                ExitCode::FAILURE
            })?;
        Ok(QueryCompiler::new(analyzer, fields).with_options(settings.compile_options()))
    }
}

/// Returns the current working directory or exits with a consistent error.
fn current_dir_or_failure() -> Result<PathBuf, ExitCode> {
    env::current_dir().map_err(|e| {
        eprintln!("error: could not determine current directory: {e}");
        ExitCode::FAILURE
    })
}

/// Loads configuration from the provided directory or exits with an error.
fn load_config_or_failure(cwd: &Path) -> Result<Config, ExitCode> {
    Config::load(cwd).map_err(|e| {
        eprintln!("error: failed to load configuration: {e}");
        ExitCode::FAILURE
    })
}
