//! Propagate a resolved project into the environment.

use crate::config::set_env_var;
use crate::error::PrjError;
use crate::locator::resolve;
use crate::project::ResolvedProject;

/// Resolve a fresh snapshot and write every field to its `PRJ_*` variable.
///
/// Previous values are overwritten; an empty id is written as an empty
/// string. Child processes spawned afterwards inherit the exported values.
/// Must not race with other threads reading the environment.
pub fn export_all() -> Result<ResolvedProject, PrjError> {
    let prj = resolve()?;
    for (key, value) in prj.env_pairs() {
        set_env_var(key, &value);
    }
    tracing::debug!(root = %prj.root.display(), "exported project environment");
    Ok(prj)
}

/// Render `export NAME='value'` lines suitable for `eval` in a POSIX shell.
pub fn render_shell_exports(prj: &ResolvedProject) -> String {
    let mut out = String::new();
    for (key, value) in prj.env_pairs() {
        out.push_str("export ");
        out.push_str(key);
        out.push('=');
        out.push_str(&shell_quote(&value.to_string_lossy()));
        out.push('\n');
    }
    out
}

fn shell_quote(s: &str) -> String {
    format!("'{}'", s.replace('\'', r"'\''"))
}
