//! Configuration layer.
//!
//! All environment access goes through this module. Library code reads
//! structured values (`Overrides`, `ObservabilityConfig`) instead of calling
//! `std::env::var` directly.
//!
//! - `loader`: env_os_verbatim, env_optional, env_bool, set/remove helpers
//! - `schema`: Overrides, ObservabilityConfig
//! - `env_keys`: key constants

pub mod env_keys;
pub mod loader;
pub mod schema;

pub use loader::{env_bool, env_optional, env_os_verbatim, remove_env_var, set_env_var};
pub use schema::{ObservabilityConfig, Overrides};
