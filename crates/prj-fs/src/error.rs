use std::fmt;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// One rejected candidate path and the I/O error that rejected it.
#[derive(Debug)]
pub struct Attempt {
    pub path: PathBuf,
    pub source: io::Error,
}

impl fmt::Display for Attempt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path.display(), self.source)
    }
}

/// Errors returned by [`crate::materialize`] and [`crate::search`].
#[derive(Debug, Error)]
pub enum MaterializeError {
    #[error("No base directories given for '{}'", .rel.display())]
    NoCandidates { rel: PathBuf },

    #[error("Path must be relative to a base directory: '{}'", .0.display())]
    AbsolutePath(PathBuf),

    #[error("Empty relative path")]
    EmptyPath,

    #[error("Could not create '{}' under any base directory ({})", .rel.display(), join_attempts(.attempts))]
    Exhausted { rel: PathBuf, attempts: Vec<Attempt> },

    #[error("'{}' not found (searched: {})", .rel.display(), join_paths(.searched))]
    NotFound { rel: PathBuf, searched: Vec<PathBuf> },
}

fn join_attempts(attempts: &[Attempt]) -> String {
    attempts
        .iter()
        .map(|a| a.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

fn join_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
