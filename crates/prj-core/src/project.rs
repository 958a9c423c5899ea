//! The resolved project snapshot.

use std::ffi::OsString;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::Serialize;

use crate::config::env_keys::prj;

/// Project directories as observed by a single resolution call.
///
/// Nothing is cached: call [`crate::resolve`] again to observe changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedProject {
    pub root: PathBuf,
    /// Raw contents of `PRJ_ID` or `<config_home>/prj_id`; may be empty.
    pub id: String,
    pub config_home: PathBuf,
    pub runtime_dir: PathBuf,
    pub cache_home: PathBuf,
    pub data_home: PathBuf,
    pub state_home: PathBuf,
    /// Directory for project executables (`PRJ_PATH`).
    pub exec_path: PathBuf,
}

impl ResolvedProject {
    pub fn get(&self, var: Var) -> OsString {
        match var {
            Var::Id => OsString::from(&self.id),
            other => other
                .path_in(self)
                .map(|p| p.as_os_str().to_os_string())
                .unwrap_or_default(),
        }
    }

    /// `(PRJ_* name, value)` for every field, in export order.
    pub fn env_pairs(&self) -> Vec<(&'static str, OsString)> {
        Var::ALL
            .iter()
            .map(|v| (v.env_key(), self.get(*v)))
            .collect()
    }
}

/// One of the eight exported project variables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Var {
    Root,
    Id,
    ConfigHome,
    RuntimeDir,
    CacheHome,
    DataHome,
    StateHome,
    Path,
}

impl Var {
    pub const ALL: [Var; 8] = [
        Var::Root,
        Var::Id,
        Var::ConfigHome,
        Var::RuntimeDir,
        Var::CacheHome,
        Var::DataHome,
        Var::StateHome,
        Var::Path,
    ];

    pub fn env_key(self) -> &'static str {
        match self {
            Var::Root => prj::ROOT,
            Var::Id => prj::ID,
            Var::ConfigHome => prj::CONFIG_HOME,
            Var::RuntimeDir => prj::RUNTIME_DIR,
            Var::CacheHome => prj::CACHE_HOME,
            Var::DataHome => prj::DATA_HOME,
            Var::StateHome => prj::STATE_HOME,
            Var::Path => prj::PATH,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Var::Root => "root",
            Var::Id => "id",
            Var::ConfigHome => "config-home",
            Var::RuntimeDir => "runtime-dir",
            Var::CacheHome => "cache-home",
            Var::DataHome => "data-home",
            Var::StateHome => "state-home",
            Var::Path => "path",
        }
    }

    /// The directory this variable names, `None` for the id.
    pub fn path_in(self, prj: &ResolvedProject) -> Option<&Path> {
        Some(match self {
            Var::Root => &prj.root,
            Var::Id => return None,
            Var::ConfigHome => &prj.config_home,
            Var::RuntimeDir => &prj.runtime_dir,
            Var::CacheHome => &prj.cache_home,
            Var::DataHome => &prj.data_home,
            Var::StateHome => &prj.state_home,
            Var::Path => &prj.exec_path,
        })
    }
}

impl fmt::Display for Var {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Var {
    type Err = String;

    /// Accepts both the short name (`cache-home`) and the variable (`PRJ_CACHE_HOME`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Var::ALL
            .iter()
            .copied()
            .find(|v| v.name() == s || v.env_key() == s || v.name().replace('-', "_") == s)
            .ok_or_else(|| {
                let names: Vec<_> = Var::ALL.iter().map(|v| v.name()).collect();
                format!("unknown variable '{}' (expected one of: {})", s, names.join(", "))
            })
    }
}
