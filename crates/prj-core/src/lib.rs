//! Resolve a project's base directories.
//!
//! The project root is the nearest ancestor of the current directory that
//! contains a `.config` directory. Config, runtime, cache, data, state and
//! executable directories are derived from it unless a `PRJ_*` variable
//! overrides them. With a project id (from `PRJ_ID` or `.config/prj_id`),
//! cache/data/state move under the platform base directories at `prj/<id>`.

pub mod base_dirs;
pub mod config;
pub mod error;
pub mod export;
pub mod files;
pub mod locator;
pub mod observability;
pub mod project;

pub use base_dirs::BaseDirs;
pub use config::Overrides;
pub use error::{ErrorKind, PrjError};
pub use export::{export_all, render_shell_exports};
pub use files::FileKind;
pub use locator::{find_root, resolve, resolve_with, search_paths};
pub use project::{ResolvedProject, Var};
