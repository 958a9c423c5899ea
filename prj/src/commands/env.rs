use std::io::{self, Write};

use anyhow::Result;

/// `prj env`: print `export` lines for `eval "$(prj env)"`.
pub fn cmd_env() -> Result<()> {
    let prj = super::show::resolve_project()?;
    io::stdout()
        .lock()
        .write_all(prj_core::render_shell_exports(&prj).as_bytes())?;
    Ok(())
}
