use std::env;

use anyhow::{Context, Result};

use super::{
    args::{Action, Arguments},
    commands::{CommandResult, RunContext, init::init, scan::scan, write::write},
};

/// Dispatch to the handler for the selected action.
///
/// # Returns
/// - `Ok(CommandResult)` with the action summary and any non-fatal issues
/// - `Err` if the action fails (missing source, existing destination, malformed review file, ...)
pub fn run(args: &Arguments) -> Result<CommandResult> {
    let cwd = env::current_dir().context("Failed to determine the current directory")?;

    match args.action {
        Action::Init => init(&cwd),
        Action::Scan => {
            let ctx = RunContext::new(args, &cwd)?;
            scan(&ctx, required(&args.from, "--from")?)
        }
        Action::Write => {
            let ctx = RunContext::new(args, &cwd)?;
            let dest = args
                .dest
                .as_deref()
                .context("--dest is required for --action write")?;
            write(
                &ctx,
                required(&args.from, "--from")?,
                required(&args.to, "--to")?,
                dest,
            )
        }
    }
}

fn required<'a>(value: &'a Option<String>, flag: &str) -> Result<&'a str> {
    value
        .as_deref()
        .filter(|v| !v.trim().is_empty())
        .with_context(|| format!("{} is required for this action", flag))
}
