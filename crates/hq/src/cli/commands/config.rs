//! Implementation of `hq config`.

use std::process::ExitCode;

use crate::cli::{context::CommandContext, output::warning};

/// Shows effective configuration settings, then any warnings about them.
pub fn run(ctx: &CommandContext) -> ExitCode {
    let config = &ctx.config;
    match config.settings_to_toml() {
        Ok(toml) => print!("{toml}"),
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    }
    for w in config.validate() {
        eprintln!("{}", warning(&w.to_string()));
    }
    ExitCode::SUCCESS
}
