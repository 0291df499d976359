//! CLI-specific error types and mappings.
//!
//! This module provides error types for the CLI adapter and mappings
//! from [`ConfError`] to exit codes and user-facing messages.

use std::io;

use conf_core::{ConfError, PathError};
use thiserror::Error;

/// CLI-specific error type.
///
/// Handlers propagate core errors through `anyhow`; [`exit_code_for`]
/// classifies them into these categories when the process exits.
#[derive(Debug, Error)]
pub enum CliError {
    /// Argument or selector error.
    #[error("Invalid arguments: {0}")]
    Arguments(String),

    /// IO error (file not found, permission denied, lock failure).
    #[error("IO error: {0}")]
    Io(String),

    /// Document could not be parsed or serialized.
    #[error("Data error: {0}")]
    Data(String),

    /// Store identity or configuration root problem.
    #[error("Configuration error: {0}")]
    Config(String),

    /// External editor failed.
    #[error("Editor error: {0}")]
    Editor(String),
}

impl CliError {
    /// Map error to appropriate exit code.
    ///
    /// Exit codes follow Unix conventions:
    /// - 0: Success
    /// - 1: General error
    /// - 2: Misuse of shell command (invalid arguments)
    /// - 64-78: Reserved for specific error categories (see sysexits.h)
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Editor(_) => 1,
            Self::Arguments(_) => 2, // EX_USAGE
            Self::Data(_) => 65,     // EX_DATAERR
            Self::Io(_) => 74,       // EX_IOERR
            Self::Config(_) => 78,   // EX_CONFIG
        }
    }
}

impl From<&ConfError> for CliError {
    fn from(err: &ConfError) -> Self {
        let msg = err.to_string();
        match err {
            ConfError::Identity(_) => Self::Config(msg),
            ConfError::Io { .. } | ConfError::Lock { .. } | ConfError::Output(_) => Self::Io(msg),
            ConfError::Serialize(_) | ConfError::Document { .. } | ConfError::Json(_) => {
                Self::Data(msg)
            }
            ConfError::Query(_) => Self::Arguments(msg),
            ConfError::Path(path_err) => path_err.into(),
        }
    }
}

impl From<&PathError> for CliError {
    fn from(err: &PathError) -> Self {
        match err {
            PathError::NotADirectory(_) | PathError::CreateFailed { .. } => {
                Self::Io(err.to_string())
            }
            _ => Self::Config(err.to_string()),
        }
    }
}

impl From<&io::Error> for CliError {
    fn from(err: &io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

/// Pick the exit code for an error returned by a handler.
///
/// Walks the `anyhow` chain and uses the first error with a known category,
/// so context added with `.context()` does not hide the cause. Anything
/// unrecognized exits with 1.
pub fn exit_code_for(err: &anyhow::Error) -> u8 {
    err.chain().find_map(exit_code_of).unwrap_or(1)
}

fn exit_code_of(cause: &(dyn std::error::Error + 'static)) -> Option<u8> {
    if let Some(e) = cause.downcast_ref::<CliError>() {
        return Some(e.exit_code());
    }
    let classified = if let Some(e) = cause.downcast_ref::<ConfError>() {
        CliError::from(e)
    } else if let Some(e) = cause.downcast_ref::<PathError>() {
        CliError::from(e)
    } else if let Some(e) = cause.downcast_ref::<io::Error>() {
        CliError::from(e)
    } else {
        return None;
    };
    Some(classified.exit_code())
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;
    use conf_core::QueryError;

    #[test]
    fn test_exit_codes() {
        assert_eq!(CliError::Editor("x".into()).exit_code(), 1);
        assert_eq!(CliError::Arguments("x".into()).exit_code(), 2);
        assert_eq!(CliError::Data("x".into()).exit_code(), 65);
        assert_eq!(CliError::Io("x".into()).exit_code(), 74);
        assert_eq!(CliError::Config("x".into()).exit_code(), 78);
    }

    #[test]
    fn test_from_conf_error() {
        let err = CliError::from(&ConfError::Identity("empty".into()));
        assert!(matches!(err, CliError::Config(_)));

        let err = CliError::from(&ConfError::Query(QueryError::Empty));
        assert!(matches!(err, CliError::Arguments(_)));

        let err = CliError::from(&ConfError::Path(PathError::NoConfigDir));
        assert!(matches!(err, CliError::Config(_)));

        let err = CliError::from(&ConfError::Path(PathError::NotADirectory("x".into())));
        assert_eq!(err.exit_code(), 74);
    }

    #[test]
    fn test_chain_walk_sees_through_context() {
        let err = anyhow::Error::from(ConfError::Query(QueryError::MissingLeadingDot))
            .context("while running query");
        assert_eq!(exit_code_for(&err), 2);

        let io = io::Error::new(io::ErrorKind::NotFound, "gone");
        let err = Err::<(), _>(io).context("reading input").unwrap_err();
        assert_eq!(exit_code_for(&err), 74);

        let err = anyhow::Error::from(PathError::EmptyPath);
        assert_eq!(exit_code_for(&err), 78);

        assert_eq!(exit_code_for(&anyhow::anyhow!("plain")), 1);
    }

    #[test]
    fn test_cli_error_in_chain() {
        let err = anyhow::Error::from(CliError::Editor("vi exited with 1".into()));
        assert_eq!(exit_code_for(&err), 1);
    }
}
