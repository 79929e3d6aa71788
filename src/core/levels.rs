//! Severity-level mapping from zerolog to slog.
//!
//! zerolog has seven level-establishing methods; slog has four level
//! constants plus whatever custom levels the target project defines. `Fatal`
//! and `Panic` both narrow to `LevelError`: slog has no process-terminating
//! severities, and the exit/panic side effect of the original call is
//! deliberately not reproduced by the rewrite.

/// A zerolog level-establishing method name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
    Fatal,
    Panic,
}

impl Level {
    /// Recognize a level-establishing method name. This is the gate the
    /// chain walk uses to find the chain's root.
    pub fn from_name(name: &str) -> Option<Level> {
        match name {
            "Trace" => Some(Level::Trace),
            "Debug" => Some(Level::Debug),
            "Info" => Some(Level::Info),
            "Warn" => Some(Level::Warn),
            "Error" => Some(Level::Error),
            "Fatal" => Some(Level::Fatal),
            "Panic" => Some(Level::Panic),
            _ => None,
        }
    }

    /// Total version of [`Level::from_name`]: unknown names map to `Info`.
    pub fn resolve(name: &str) -> Level {
        Level::from_name(name).unwrap_or(Level::Info)
    }

    /// The `slog` level constant name the rewritten call uses.
    pub fn slog_constant(self) -> &'static str {
        match self {
            Level::Trace => "LevelTrace",
            Level::Debug => "LevelDebug",
            Level::Info => "LevelInfo",
            Level::Warn => "LevelWarn",
            Level::Error | Level::Fatal | Level::Panic => "LevelError",
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_from_name_recognizes_all_seven() {
        assert_eq!(Level::from_name("Trace"), Some(Level::Trace));
        assert_eq!(Level::from_name("Debug"), Some(Level::Debug));
        assert_eq!(Level::from_name("Info"), Some(Level::Info));
        assert_eq!(Level::from_name("Warn"), Some(Level::Warn));
        assert_eq!(Level::from_name("Error"), Some(Level::Error));
        assert_eq!(Level::from_name("Fatal"), Some(Level::Fatal));
        assert_eq!(Level::from_name("Panic"), Some(Level::Panic));
    }

    #[test]
    fn test_from_name_rejects_field_methods() {
        assert_eq!(Level::from_name("Str"), None);
        assert_eq!(Level::from_name("Msg"), None);
        assert_eq!(Level::from_name("info"), None);
    }

    #[test]
    fn test_resolve_defaults_to_info() {
        assert_eq!(Level::resolve("Verbose"), Level::Info);
        assert_eq!(Level::resolve("Warn"), Level::Warn);
    }

    #[test]
    fn test_fatal_and_panic_narrow_to_error() {
        assert_eq!(Level::Fatal.slog_constant(), "LevelError");
        assert_eq!(Level::Panic.slog_constant(), "LevelError");
        assert_eq!(
            Level::Fatal.slog_constant(),
            Level::Panic.slog_constant()
        );
    }

    #[test]
    fn test_slog_constants() {
        assert_eq!(Level::Trace.slog_constant(), "LevelTrace");
        assert_eq!(Level::Debug.slog_constant(), "LevelDebug");
        assert_eq!(Level::Info.slog_constant(), "LevelInfo");
        assert_eq!(Level::Warn.slog_constant(), "LevelWarn");
        assert_eq!(Level::Error.slog_constant(), "LevelError");
    }
}
