use std::process::ExitCode;

/// Exit status for CLI actions.
///
/// - `Success` (0): Action completed (warnings may have been reported)
/// - `Failure` (1): Action refused without doing any work (e.g. config already exists)
/// - `Error` (2): Action failed (missing source, existing destination, malformed review file, ...)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Action completed.
    Success,
    /// Action refused without doing any work.
    Failure,
    /// Action failed due to an error.
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Failure => ExitCode::from(1),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
