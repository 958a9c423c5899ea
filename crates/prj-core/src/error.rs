use std::ffi::OsString;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors returned while resolving project directories.
#[derive(Debug, Error)]
pub enum PrjError {
    #[error("Cannot determine the current directory: {source}")]
    Environment {
        #[source]
        source: io::Error,
    },

    #[error("No '{marker}' directory found in any of: {}", join_paths(.searched))]
    NotFound {
        marker: &'static str,
        searched: Vec<PathBuf>,
    },

    #[error("Failed to read project id from '{}': {source}", .path.display())]
    ReadId {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{key} is not valid UTF-8: {value:?}")]
    InvalidOverride { key: &'static str, value: OsString },

    #[error(transparent)]
    Fs(#[from] prj_fs::MaterializeError),
}

/// Coarse classification of a [`PrjError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The process environment (current directory) could not be observed.
    Environment,
    /// Root discovery exhausted the search path.
    NotFound,
    /// A file could not be read or placed.
    Io,
}

impl PrjError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            PrjError::Environment { .. } => ErrorKind::Environment,
            PrjError::NotFound { .. } => ErrorKind::NotFound,
            PrjError::ReadId { .. } | PrjError::InvalidOverride { .. } | PrjError::Fs(_) => {
                ErrorKind::Io
            }
        }
    }
}

fn join_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
