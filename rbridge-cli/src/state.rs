use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

pub fn rbridge_home() -> Result<PathBuf> {
    let home = std::env::var("HOME").context("HOME is not set")?;
    Ok(PathBuf::from(home).join(".rbridge"))
}

pub fn default_config_path() -> Result<PathBuf> {
    Ok(rbridge_home()?.join("config.toml"))
}

/// Read a statement file as text. Invalid UTF-8 is replaced and a leading BOM dropped.
pub fn read_statement(path: &Path) -> Result<String> {
    let bytes = fs::read(path).with_context(|| format!("read {}", path.display()))?;
    let text = String::from_utf8_lossy(&bytes);
    Ok(text.strip_prefix('\u{feff}').unwrap_or(&text).to_string())
}
