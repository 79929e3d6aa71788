use super::commands::CommandResult;
use super::exit_status::ExitStatus;

/// Parse failures mean the migration is incomplete, which callers should be
/// able to see in the exit code.
pub fn exit_status_from_result(result: &CommandResult) -> ExitStatus {
    if result.parse_failures.is_empty() {
        ExitStatus::Success
    } else {
        ExitStatus::Failure
    }
}
