use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

/// `$CATAT_HOME`, or `~/.catat`.
pub fn catat_home() -> Result<PathBuf> {
    if let Some(dir) = std::env::var_os("CATAT_HOME").filter(|d| !d.is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    let home = std::env::var("HOME").context("HOME is not set")?;
    Ok(PathBuf::from(home).join(".catat"))
}

pub fn ensure_catat_home() -> Result<PathBuf> {
    let dir = catat_home()?;
    fs::create_dir_all(&dir).with_context(|| format!("create {}", dir.display()))?;
    Ok(dir)
}
