//! Project root discovery and directory derivation.
//!
//! Resolution order matters in one place: `config_home` is settled before the
//! id, because the id file lives inside it. Every other field depends only on
//! `root` and `id`.

use std::env;
use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::base_dirs::BaseDirs;
use crate::config::Overrides;
use crate::error::PrjError;
use crate::project::ResolvedProject;

/// Directory whose presence marks a project root.
pub const MARKER_DIR: &str = ".config";

/// File inside `config_home` holding the project id.
pub const ID_FILE: &str = "prj_id";

/// Resolve the project from the process environment and current directory.
pub fn resolve() -> Result<ResolvedProject, PrjError> {
    resolve_with(&Overrides::from_env()?, &BaseDirs::from_platform(), env::current_dir)
}

/// Resolve against explicit inputs.
///
/// `cwd` is only called when no root override is given.
pub fn resolve_with<F>(
    overrides: &Overrides,
    bases: &BaseDirs,
    cwd: F,
) -> Result<ResolvedProject, PrjError>
where
    F: FnOnce() -> io::Result<PathBuf>,
{
    let root = match &overrides.root {
        Some(root) => PathBuf::from(root),
        None => {
            let start = cwd().map_err(|source| PrjError::Environment { source })?;
            find_root(&start)?
        }
    };

    let config_home = override_or(&overrides.config_home, || root.join(MARKER_DIR));

    let id = match &overrides.id {
        Some(id) => id.clone(),
        None => read_id(&config_home)?,
    };

    let runtime_dir = override_or(&overrides.runtime_dir, || root.join(".run"));
    let cache_home = override_or(&overrides.cache_home, || {
        if id.is_empty() {
            root.join(".cache")
        } else {
            bases.cache_for(&id)
        }
    });
    let data_home = override_or(&overrides.data_home, || {
        if id.is_empty() {
            root.join(".local").join("share")
        } else {
            bases.data_for(&id)
        }
    });
    let state_home = override_or(&overrides.state_home, || {
        if id.is_empty() {
            root.join(".local").join("state")
        } else {
            bases.state_for(&id)
        }
    });
    let exec_path = override_or(&overrides.path, || root.join(".local").join("bin"));

    Ok(ResolvedProject {
        root,
        id,
        config_home,
        runtime_dir,
        cache_home,
        data_home,
        state_home,
        exec_path,
    })
}

/// `start` followed by each of its parents, up to the filesystem root.
pub fn search_paths(start: &Path) -> Vec<PathBuf> {
    start.ancestors().map(Path::to_path_buf).collect()
}

/// Nearest directory in `start`'s ancestry (including `start`) holding `.config/`.
pub fn find_root(start: &Path) -> Result<PathBuf, PrjError> {
    let searched = search_paths(start);
    match searched.iter().find(|dir| dir.join(MARKER_DIR).is_dir()) {
        Some(root) => {
            tracing::debug!(root = %root.display(), "found project root");
            Ok(root.clone())
        }
        None => Err(PrjError::NotFound {
            marker: MARKER_DIR,
            searched,
        }),
    }
}

// The file is read byte-for-byte: a trailing newline is part of the id.
fn read_id(config_home: &Path) -> Result<String, PrjError> {
    let path = config_home.join(ID_FILE);
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no id file, using empty id");
        return Ok(String::new());
    }
    let bytes = fs::read(&path).map_err(|source| PrjError::ReadId {
        path: path.clone(),
        source,
    })?;
    String::from_utf8(bytes).map_err(|e| PrjError::ReadId {
        path,
        source: io::Error::new(io::ErrorKind::InvalidData, e),
    })
}

fn override_or<F>(value: &Option<OsString>, default: F) -> PathBuf
where
    F: FnOnce() -> PathBuf,
{
    value.as_ref().map(PathBuf::from).unwrap_or_else(default)
}
