//! Command-line interface for `hq`.

use std::process::ExitCode;

use hq::cli::{
    CommandContext,
    args::{Commands, parse_cli},
    commands,
};

fn main() -> ExitCode {
    let cli = parse_cli();

    let ctx = match cli.command {
        Commands::Init(_) => CommandContext::load_cwd_only(),
        _ => CommandContext::load(),
    };
    match ctx {
        Ok(ctx) => commands::run(cli.command, &ctx),
        Err(code) => code,
    }
}
