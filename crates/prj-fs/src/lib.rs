//! Place and find files under an ordered list of base directories.
//!
//! `materialize` is the write-side helper: it picks the first base directory
//! under which the parent directories of a relative path can be created.
//! `search` is the read-side helper: it returns the first base that already
//! holds the file. Neither touches the file itself.

mod error;

pub use error::{Attempt, MaterializeError};

use std::fs;
use std::path::{Path, PathBuf};

/// Create the parent directories of `rel` under the first usable base and
/// return the joined path.
///
/// Bases are tried in order. A base is usable when `create_dir_all` succeeds
/// for `base/rel`'s parent. When every base fails, the error lists each
/// attempted path with the reason it was rejected.
pub fn materialize<P, B>(rel: P, bases: &[B]) -> Result<PathBuf, MaterializeError>
where
    P: AsRef<Path>,
    B: AsRef<Path>,
{
    let rel = rel.as_ref();
    check_relative(rel)?;
    if bases.is_empty() {
        return Err(MaterializeError::NoCandidates {
            rel: rel.to_path_buf(),
        });
    }

    let mut attempts = Vec::with_capacity(bases.len());
    for base in bases {
        let candidate = base.as_ref().join(rel);
        let parent = candidate.parent().unwrap_or(base.as_ref());
        match fs::create_dir_all(parent) {
            Ok(()) => {
                tracing::debug!(path = %candidate.display(), "materialized");
                return Ok(candidate);
            }
            Err(e) => {
                tracing::debug!(path = %candidate.display(), error = %e, "base rejected");
                attempts.push(Attempt {
                    path: candidate,
                    source: e,
                });
            }
        }
    }

    Err(MaterializeError::Exhausted {
        rel: rel.to_path_buf(),
        attempts,
    })
}

/// Return the first `base/rel` that exists.
pub fn search<P, B>(rel: P, bases: &[B]) -> Result<PathBuf, MaterializeError>
where
    P: AsRef<Path>,
    B: AsRef<Path>,
{
    let rel = rel.as_ref();
    check_relative(rel)?;

    let mut searched = Vec::with_capacity(bases.len());
    for base in bases {
        let candidate = base.as_ref().join(rel);
        if candidate.exists() {
            return Ok(candidate);
        }
        searched.push(candidate);
    }

    Err(MaterializeError::NotFound {
        rel: rel.to_path_buf(),
        searched,
    })
}

// `Path::join` with an absolute path discards the base, so such input would
// silently escape every candidate directory.
fn check_relative(rel: &Path) -> Result<(), MaterializeError> {
    if rel.as_os_str().is_empty() {
        return Err(MaterializeError::EmptyPath);
    }
    if rel.is_absolute() || rel.has_root() {
        return Err(MaterializeError::AbsolutePath(rel.to_path_buf()));
    }
    Ok(())
}
