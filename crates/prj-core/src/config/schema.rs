//! Structured configuration loaded from the environment.

use std::ffi::OsString;

use super::env_keys::{observability as obv_keys, prj};
use super::loader::{env_bool, env_optional, env_os_verbatim};
use crate::error::PrjError;

/// Project overrides read from `PRJ_*` variables.
///
/// Each value is taken verbatim; an empty variable is the same as an unset one.
/// Paths keep their raw OS bytes; the id must be valid UTF-8.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    pub root: Option<OsString>,
    pub id: Option<String>,
    pub config_home: Option<OsString>,
    pub runtime_dir: Option<OsString>,
    pub cache_home: Option<OsString>,
    pub data_home: Option<OsString>,
    pub state_home: Option<OsString>,
    pub path: Option<OsString>,
}

impl Overrides {
    /// Snapshot the current process environment.
    pub fn from_env() -> Result<Self, PrjError> {
        Self::from_lookup(env_os_verbatim)
    }

    /// Build from an arbitrary key lookup. Empty values are dropped.
    pub fn from_lookup<F>(mut lookup: F) -> Result<Self, PrjError>
    where
        F: FnMut(&str) -> Option<OsString>,
    {
        let mut get = |key: &str| lookup(key).filter(|v| !v.is_empty());
        let id = match get(prj::ID) {
            Some(raw) => Some(
                raw.into_string()
                    .map_err(|value| PrjError::InvalidOverride { key: prj::ID, value })?,
            ),
            None => None,
        };
        Ok(Self {
            root: get(prj::ROOT),
            id,
            config_home: get(prj::CONFIG_HOME),
            runtime_dir: get(prj::RUNTIME_DIR),
            cache_home: get(prj::CACHE_HOME),
            data_home: get(prj::DATA_HOME),
            state_home: get(prj::STATE_HOME),
            path: get(prj::PATH),
        })
    }
}

/// Logging configuration: quiet, log_level, log_json.
#[derive(Debug, Clone)]
pub struct ObservabilityConfig {
    pub quiet: bool,
    pub log_level: String,
    pub log_json: bool,
}

impl ObservabilityConfig {
    pub fn from_env() -> &'static Self {
        use std::sync::OnceLock;
        static CACHE: OnceLock<ObservabilityConfig> = OnceLock::new();
        CACHE.get_or_init(|| Self {
            quiet: env_bool(obv_keys::PRJ_QUIET, false),
            log_level: env_optional(obv_keys::PRJ_LOG_LEVEL)
                .unwrap_or_else(|| "warn".to_string()),
            log_json: env_bool(obv_keys::PRJ_LOG_JSON, false),
        })
    }
}
