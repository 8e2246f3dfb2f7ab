//! Implementation of `hq explain`.

use std::process::ExitCode;

use hq_query::has_unterminated_quote;

use crate::cli::{
    args::ExplainCommand,
    context::CommandContext,
    output::{JsonExplain, render_explain, uppercase_wildcards, warning},
};

/// Compiles one query and prints every stage of the compilation.
pub fn run(ctx: &CommandContext, cmd: &ExplainCommand) -> ExitCode {
    let mut settings = ctx.config.search.clone();
    cmd.overrides.apply(&mut settings);

    let compiler = match ctx.compiler(&settings) {
        Ok(compiler) => compiler,
        Err(code) => return code,
    };

    let unterminated_quote = has_unterminated_quote(&cmd.query);
    if unterminated_quote {
        eprintln!(
            "{}",
            warning("unterminated quote; the text after it is ignored")
        );
    }

    let compiled = compiler.compile(&cmd.query);
    for pattern in uppercase_wildcards(&compiled.normalized) {
        eprintln!(
            "{}",
            warning(&format!(
                "wildcard '{pattern}' is matched case-sensitively against lowercased terms"
            ))
        );
    }

    if cmd.json {
        let json = JsonExplain {
            compiled: &compiled,
            fields: compiler.fields(),
            query_string: compiled.tree.as_ref().map(|tree| tree.to_query_string()),
            unterminated_quote,
        };
        match serde_json::to_string_pretty(&json) {
            Ok(json_str) => println!("{json_str}"),
            Err(e) => {
                eprintln!("error: failed to serialize JSON: {e}");
                return ExitCode::FAILURE;
            }
        }
        return ExitCode::SUCCESS;
    }

    print!("{}", render_explain(&compiled, compiler.fields()));
    ExitCode::SUCCESS
}
