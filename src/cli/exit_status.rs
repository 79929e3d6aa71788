use std::process::ExitCode;

/// Exit status for CLI commands, following common conventions for
/// migration/linter tools.
///
/// - `Success` (0): Command completed; every scanned file was handled
/// - `Failure` (1): Command completed but some files could not be parsed
/// - `Error` (2): Command failed due to internal error (config error, I/O error, etc.)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Command completed; every scanned file was handled.
    Success,
    /// Command completed but some files could not be parsed.
    Failure,
    /// Command failed due to internal error (config error, I/O error, etc.).
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

#[cfg(test)]
mod tests {
    use super::*;

    // ExitCode does not implement PartialEq, so compare debug renderings.
    fn code_repr(status: ExitStatus) -> String {
        format!("{:?}", ExitCode::from(status))
    }

    #[test]
    fn exit_code_values() {
        assert_eq!(code_repr(ExitStatus::Success), format!("{:?}", ExitCode::from(0u8)));
        assert_eq!(code_repr(ExitStatus::Failure), format!("{:?}", ExitCode::from(1u8)));
        assert_eq!(code_repr(ExitStatus::Error), format!("{:?}", ExitCode::from(2u8)));
    }
}
