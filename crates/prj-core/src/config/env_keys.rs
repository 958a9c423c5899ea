//! Environment variable keys.
//!
//! The `PRJ_*` override names are both read by the locator and written back
//! by `export_all`; keep them in one place.

/// Project overrides, in export order.
pub mod prj {
    pub const ROOT: &str = "PRJ_ROOT";
    pub const ID: &str = "PRJ_ID";
    pub const CONFIG_HOME: &str = "PRJ_CONFIG_HOME";
    pub const RUNTIME_DIR: &str = "PRJ_RUNTIME_DIR";
    pub const CACHE_HOME: &str = "PRJ_CACHE_HOME";
    pub const DATA_HOME: &str = "PRJ_DATA_HOME";
    pub const STATE_HOME: &str = "PRJ_STATE_HOME";
    pub const PATH: &str = "PRJ_PATH";

    pub const ALL: &[&str] = &[
        ROOT,
        ID,
        CONFIG_HOME,
        RUNTIME_DIR,
        CACHE_HOME,
        DATA_HOME,
        STATE_HOME,
        PATH,
    ];
}

/// Logging
pub mod observability {
    pub const PRJ_QUIET: &str = "PRJ_QUIET";
    pub const PRJ_LOG_LEVEL: &str = "PRJ_LOG_LEVEL";
    pub const PRJ_LOG_JSON: &str = "PRJ_LOG_JSON";
}
