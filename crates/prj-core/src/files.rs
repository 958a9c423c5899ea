//! Per-home file helpers.
//!
//! Each helper resolves a fresh snapshot, then places (or finds) a relative
//! path under the matching home directory.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::error::PrjError;
use crate::locator::resolve;
use crate::project::ResolvedProject;

/// Which home directory a file belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Config,
    Data,
    State,
    Cache,
    Runtime,
}

impl FileKind {
    pub const ALL: [FileKind; 5] = [
        FileKind::Config,
        FileKind::Data,
        FileKind::State,
        FileKind::Cache,
        FileKind::Runtime,
    ];

    pub fn name(self) -> &'static str {
        match self {
            FileKind::Config => "config",
            FileKind::Data => "data",
            FileKind::State => "state",
            FileKind::Cache => "cache",
            FileKind::Runtime => "runtime",
        }
    }

    pub fn home(self, prj: &ResolvedProject) -> &Path {
        match self {
            FileKind::Config => &prj.config_home,
            FileKind::Data => &prj.data_home,
            FileKind::State => &prj.state_home,
            FileKind::Cache => &prj.cache_home,
            FileKind::Runtime => &prj.runtime_dir,
        }
    }
}

impl fmt::Display for FileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FileKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FileKind::ALL
            .iter()
            .copied()
            .find(|k| k.name() == s)
            .ok_or_else(|| format!("unknown file kind '{}' (expected config, data, state, cache or runtime)", s))
    }
}

impl ResolvedProject {
    /// Create the parent directories of `rel` under the `kind` home.
    pub fn materialize(&self, kind: FileKind, rel: impl AsRef<Path>) -> Result<PathBuf, PrjError> {
        Ok(prj_fs::materialize(rel, &[kind.home(self)])?)
    }

    /// Locate an existing `rel` under the `kind` home.
    pub fn find(&self, kind: FileKind, rel: impl AsRef<Path>) -> Result<PathBuf, PrjError> {
        Ok(prj_fs::search(rel, &[kind.home(self)])?)
    }
}

pub fn config_file(rel: impl AsRef<Path>) -> Result<PathBuf, PrjError> {
    resolve()?.materialize(FileKind::Config, rel)
}

pub fn data_file(rel: impl AsRef<Path>) -> Result<PathBuf, PrjError> {
    resolve()?.materialize(FileKind::Data, rel)
}

pub fn state_file(rel: impl AsRef<Path>) -> Result<PathBuf, PrjError> {
    resolve()?.materialize(FileKind::State, rel)
}

pub fn cache_file(rel: impl AsRef<Path>) -> Result<PathBuf, PrjError> {
    resolve()?.materialize(FileKind::Cache, rel)
}

pub fn runtime_file(rel: impl AsRef<Path>) -> Result<PathBuf, PrjError> {
    resolve()?.materialize(FileKind::Runtime, rel)
}

pub fn find_config_file(rel: impl AsRef<Path>) -> Result<PathBuf, PrjError> {
    resolve()?.find(FileKind::Config, rel)
}

pub fn find_data_file(rel: impl AsRef<Path>) -> Result<PathBuf, PrjError> {
    resolve()?.find(FileKind::Data, rel)
}

pub fn find_state_file(rel: impl AsRef<Path>) -> Result<PathBuf, PrjError> {
    resolve()?.find(FileKind::State, rel)
}

pub fn find_cache_file(rel: impl AsRef<Path>) -> Result<PathBuf, PrjError> {
    resolve()?.find(FileKind::Cache, rel)
}

pub fn find_runtime_file(rel: impl AsRef<Path>) -> Result<PathBuf, PrjError> {
    resolve()?.find(FileKind::Runtime, rel)
}
