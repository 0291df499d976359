//! Error type returned by every store operation.
//!
//! Storage failures (`Io`, `Lock`, `Document`) are kept apart from selector
//! failures (`Query`) so callers can tell a bad query from bad storage.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::paths::PathError;
use crate::query::QueryError;

/// Errors produced by [`crate::ConfStore`] operations.
#[derive(Debug, Error)]
pub enum ConfError {
    /// The store identity cannot locate a configuration file.
    #[error("Invalid store identity: {0}")]
    Identity(String),

    /// Filesystem failure while creating, removing, reading or writing.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The exclusive write lock could not be acquired.
    #[error("Failed to lock {path}: {source}")]
    Lock {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A value passed to `overwrite` has no YAML representation.
    #[error("Failed to serialize configuration: {0}")]
    Serialize(#[source] serde_yaml::Error),

    /// Stored or supplied text is not a valid YAML/JSON document.
    #[error("Invalid document in {origin}: {source}")]
    Document {
        origin: String,
        #[source]
        source: serde_yaml::Error,
    },

    /// A query result could not be rendered as JSON.
    #[error("Failed to render JSON: {0}")]
    Json(#[source] serde_json::Error),

    /// Writing rendered output failed.
    #[error("Failed to write output: {0}")]
    Output(#[source] io::Error),

    /// Malformed selector or a selector that does not fit the document shape.
    #[error(transparent)]
    Query(#[from] QueryError),

    /// Path resolution or directory creation failed.
    #[error(transparent)]
    Path(#[from] PathError),
}

impl ConfError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// True if the configuration file (or its directory) does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Io { source, .. } if source.kind() == io::ErrorKind::NotFound)
    }

    /// True for selector errors, as opposed to storage errors.
    pub const fn is_query(&self) -> bool {
        matches!(self, Self::Query(_))
    }
}

/// Result alias for store operations.
pub type Result<T, E = ConfError> = std::result::Result<T, E>;
