//! Clap argument definitions for the `hq` CLI.

use clap::{Args, Parser, Subcommand};
use hq_config::SearchSettings;

/// Top-level CLI options.
#[derive(Parser)]
#[command(name = "hq")]
#[command(about = "Help query compiler - see how search strings become index queries")]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Flags that override the `[search]` settings of `.hq.toml`.
#[derive(Args, Debug, Clone, Default)]
pub struct SearchOverrideArgs {
    /// Search this field (can be specified multiple times; replaces configured fields)
    #[arg(short = 'f', long = "field")]
    pub fields: Vec<String>,

    /// Search only the named fields, not the default field
    #[arg(long)]
    pub field_search_only: bool,

    /// Stemming language [default: english]
    #[arg(long)]
    pub stemmer: Option<String>,

    /// Keep English stop words
    #[arg(long)]
    pub no_stop_words: bool,

    /// Do not add the adjacent-words phrase boost
    #[arg(long)]
    pub no_improve_ranking: bool,
}

impl SearchOverrideArgs {
    /// Applies the flags on top of configured settings.
    pub fn apply(&self, settings: &mut SearchSettings) {
        if !self.fields.is_empty() {
            settings.fields.clone_from(&self.fields);
        }
        if self.field_search_only {
            settings.field_search_only = true;
        }
        if let Some(stemmer) = &self.stemmer {
            settings.stemmer.clone_from(stemmer);
        }
        if self.no_stop_words {
            settings.stop_words = false;
        }
        if self.no_improve_ranking {
            settings.improve_ranking = false;
        }
    }
}

/// Arguments for `hq explain`.
#[derive(Args, Debug, Clone)]
pub struct ExplainCommand {
    /// Search query, as a user would type it
    pub query: String,

    #[command(flatten)]
    /// Search setting overrides.
    pub overrides: SearchOverrideArgs,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `hq init`.
#[derive(Args, Debug, Clone)]
pub struct InitCommand {
    /// Create global ~/.hq.toml instead
    #[arg(long)]
    pub global: bool,

    /// Overwrite existing configuration file
    #[arg(long)]
    pub force: bool,
}

/// Supported `hq` subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Show how a query is tokenized, analyzed and compiled
    #[command(after_help = "\
Examples:
  hq explain 'java editor'                 Plain words, with phrase boost
  hq explain 'java NOT swing' -f title     Exclude a word, also search title
  hq explain '\"content assist\" OR completion' --json")]
    Explain(ExplainCommand),

    /// Initialize hq configuration in current directory
    Init(InitCommand),

    /// Show effective configuration settings
    Config,
}

/// Parses CLI arguments, exiting with usage on error.
pub fn parse_cli() -> Cli {
    Cli::parse()
}
