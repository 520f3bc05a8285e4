use anyhow::{Context, Result};

use super::{CommandResult, CommandSummary, RunContext, ScanSummary};
use crate::core::{
    ScriptPredicate,
    pipeline::{self, ScanOptions},
};

pub fn scan(ctx: &RunContext, from: &str) -> Result<CommandResult> {
    let predicate = ScriptPredicate::for_language(from, &ctx.config.scripts)?;

    let outcome = pipeline::scan(&ScanOptions {
        source_root: &ctx.source_root,
        ledger_path: &ctx.ledger_path,
        extensions: &ctx.config.extensions,
        ignores: &ctx.config.ignores,
        predicate: &predicate,
        verbose: ctx.verbose,
    })
    .with_context(|| format!("Failed to scan {}", ctx.source_root.display()))?;

    Ok(CommandResult::new(
        CommandSummary::Scan(ScanSummary {
            files_scanned: outcome.files_scanned,
            paths_skipped: outcome.paths_skipped,
            comments_found: outcome.comments_found,
            rows_appended: outcome.rows_appended,
            duplicates: outcome.duplicates,
            ledger_path: ctx.ledger_path.clone(),
        }),
        outcome.issues,
    ))
}
