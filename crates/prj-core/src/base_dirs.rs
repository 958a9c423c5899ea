//! Platform base directories used for id-namespaced homes.
//!
//! On Linux these follow `XDG_CACHE_HOME`, `XDG_DATA_HOME` and
//! `XDG_STATE_HOME` through the `dirs` crate. Platforms without a state
//! directory use the local data directory instead.

use std::path::{Path, PathBuf};

/// Namespace inserted between a base directory and the project id.
pub const PRJ_NAMESPACE: &str = "prj";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseDirs {
    pub cache: PathBuf,
    pub data: PathBuf,
    pub state: PathBuf,
}

impl BaseDirs {
    pub fn from_platform() -> Self {
        let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        Self {
            cache: dirs::cache_dir().unwrap_or_else(|| home.join(".cache")),
            data: dirs::data_dir().unwrap_or_else(|| home.join(".local").join("share")),
            state: dirs::state_dir()
                .or_else(dirs::data_local_dir)
                .unwrap_or_else(|| home.join(".local").join("state")),
        }
    }

    pub fn cache_for(&self, id: &str) -> PathBuf {
        namespaced(&self.cache, id)
    }

    pub fn data_for(&self, id: &str) -> PathBuf {
        namespaced(&self.data, id)
    }

    pub fn state_for(&self, id: &str) -> PathBuf {
        namespaced(&self.state, id)
    }
}

fn namespaced(base: &Path, id: &str) -> PathBuf {
    base.join(PRJ_NAMESPACE).join(id)
}
