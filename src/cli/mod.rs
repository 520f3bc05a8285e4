use anyhow::Result;

pub use args::{Action, Arguments};
pub use exit_status::ExitStatus;

use commands::{CommandResult, CommandSummary, InitSummary};

mod args;
pub mod commands;
mod exit_status;
mod report;
mod run;

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let result = run::run(&args)?;
    report::print(&result, args.verbose);

    Ok(exit_status_from_result(&result))
}

fn exit_status_from_result(result: &CommandResult) -> ExitStatus {
    match result.summary {
        CommandSummary::Init(InitSummary { created: false }) => ExitStatus::Failure,
        _ => ExitStatus::Success,
    }
}
