use anyhow::{Context, Result};
use prj_core::FileKind;

/// `prj file <KIND> <REL_PATH>`
pub fn cmd_file(kind: FileKind, rel_path: &str) -> Result<()> {
    let prj = super::show::resolve_project()?;
    let path = prj
        .materialize(kind, rel_path)
        .with_context(|| format!("Failed to place {} file '{}'", kind, rel_path))?;
    println!("{}", path.display());
    Ok(())
}

/// `prj find <KIND> <REL_PATH>`
pub fn cmd_find(kind: FileKind, rel_path: &str) -> Result<()> {
    let prj = super::show::resolve_project()?;
    let path = prj
        .find(kind, rel_path)
        .with_context(|| format!("No {} file '{}'", kind, rel_path))?;
    println!("{}", path.display());
    Ok(())
}
