use std::path::Path;

use anyhow::{Context, Result};

use super::{CommandResult, CommandSummary, RunContext, WriteSummary};
use crate::core::{
    Translator,
    pipeline::{self, WriteOptions},
};

pub fn write(ctx: &RunContext, from: &str, to: &str, dest: &Path) -> Result<CommandResult> {
    let translator = ctx.config.translator.as_ref().map(|t| t.build());

    let outcome = pipeline::write(
        &WriteOptions {
            source_root: &ctx.source_root,
            dest_root: dest,
            ledger_path: &ctx.ledger_path,
            from,
            to,
            retries: ctx.config.retries,
            verbose: ctx.verbose,
        },
        translator.as_ref().map(|t| t as &dyn Translator),
    )
    .with_context(|| {
        format!(
            "Failed to write translations from {} into {}",
            ctx.source_root.display(),
            dest.display()
        )
    })?;

    Ok(CommandResult::new(
        CommandSummary::Write(WriteSummary {
            entries: outcome.entries,
            files_copied: outcome.files_copied,
            translated: outcome.translated,
            files_modified: outcome.files_modified,
            dest: dest.to_path_buf(),
        }),
        outcome.issues,
    ))
}
