//! Error types for deckhand
//!
//! Uses `thiserror` for library errors; the binary layer wraps these in
//! `anyhow` and maps them back to process exit codes.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for deckhand operations
pub type DispatchResult<T> = Result<T, DispatchError>;

/// Main error type for deckhand operations
#[derive(Error, Debug)]
pub enum DispatchError {
    /// Container daemon did not answer the probe, with or without elevation
    #[error("container daemon unreachable - tried `docker info` and `sudo -n docker info`")]
    DaemonUnreachable,

    /// A required CLI tool is not installed or not on PATH
    #[error("required tool not found: {tool}")]
    ToolMissing { tool: String },

    /// The environment file is absent from its expected path
    #[error("environment file not found: {path}")]
    ConfigMissing { path: PathBuf },

    /// Tool configuration file exists but cannot be parsed
    #[error("invalid configuration in {path}: {message}")]
    InvalidConfig { path: PathBuf, message: String },

    /// Operator input is not a member of the menu
    #[error("invalid selection {input:?} - expected a number between 1 and {max}")]
    InvalidSelection { input: String, max: usize },

    /// An orchestration command exited non-zero
    #[error("`{command}` failed with exit code {code}")]
    SubprocessFailed { command: String, code: i32 },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl DispatchError {
    /// Process exit status for this error.
    ///
    /// Validation failures exit 1; a failed orchestration command's own
    /// exit code is propagated verbatim.
    pub fn exit_code(&self) -> i32 {
        match self {
            DispatchError::SubprocessFailed { code, .. } => *code,
            _ => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_config_missing() {
        let err = DispatchError::ConfigMissing {
            path: PathBuf::from(".env"),
        };
        assert_eq!(err.to_string(), "environment file not found: .env");
    }

    #[test]
    fn test_error_display_invalid_selection() {
        let err = DispatchError::InvalidSelection {
            input: "9".to_string(),
            max: 6,
        };
        assert_eq!(
            err.to_string(),
            "invalid selection \"9\" - expected a number between 1 and 6"
        );
    }

    #[test]
    fn test_subprocess_exit_code_propagated_verbatim() {
        let err = DispatchError::SubprocessFailed {
            command: "docker compose up -d".to_string(),
            code: 17,
        };
        assert_eq!(err.exit_code(), 17);
    }

    #[test]
    fn test_validation_errors_exit_one() {
        assert_eq!(DispatchError::DaemonUnreachable.exit_code(), 1);
        assert_eq!(
            DispatchError::ToolMissing {
                tool: "docker".into()
            }
            .exit_code(),
            1
        );
    }
}
