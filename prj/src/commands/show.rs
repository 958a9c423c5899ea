use std::io::{self, Write};

use anyhow::{Context, Result};
use prj_core::{ResolvedProject, Var};

/// `prj show`
pub fn cmd_show(json: bool) -> Result<()> {
    let prj = resolve_project()?;
    let mut out = io::stdout().lock();
    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(&prj)?)?;
    } else {
        for (key, value) in prj.env_pairs() {
            writeln!(out, "{}={}", key, value.to_string_lossy())?;
        }
    }
    Ok(())
}

/// `prj get <VAR>`
///
/// The id is printed without an added newline so its raw bytes survive
/// `$(prj get id)`-style capture unchanged.
pub fn cmd_get(var: Var) -> Result<()> {
    let prj = resolve_project()?;
    let value = prj.get(var);
    let mut out = io::stdout().lock();
    if var == Var::Id {
        write!(out, "{}", value.to_string_lossy())?;
    } else {
        writeln!(out, "{}", value.to_string_lossy())?;
    }
    Ok(())
}

pub(crate) fn resolve_project() -> Result<ResolvedProject> {
    let prj = prj_core::resolve().context("Failed to resolve project directories")?;
    tracing::debug!(root = %prj.root.display(), id = %prj.id, "resolved project");
    Ok(prj)
}
