use anyhow::{Context, Result, bail};
use chrono::NaiveDateTime;
use chrono::format::{Item, StrftimeItems};
use rbridge_ingest::StatementFormat;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::output::render_timestamp;
use crate::state::default_config_path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Account label overrides keyed by bank id (kotak, kvb, ...) or layout alias
    pub accounts: HashMap<String, String>,
    pub output: OutputSection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSection {
    /// strftime pattern appended to the output name when the file already exists
    pub timestamp_format: String,
}

impl Default for OutputSection {
    fn default() -> Self {
        Self {
            timestamp_format: "%Y%m%d%H%M%S".to_string(),
        }
    }
}

impl Config {
    pub fn account_for(&self, format: StatementFormat) -> &str {
        self.accounts
            .iter()
            .find(|(key, _)| key.parse::<StatementFormat>().is_ok_and(|f| f == format))
            .map(|(_, label)| label.as_str())
            .unwrap_or(format.default_account())
    }

    fn validate(&self) -> Result<()> {
        let fmt = &self.output.timestamp_format;
        if fmt.is_empty() || StrftimeItems::new(fmt).any(|i| matches!(i, Item::Error)) {
            bail!("invalid output.timestamp_format: {fmt:?}");
        }
        render_timestamp(fmt, NaiveDateTime::default())
            .context("invalid output.timestamp_format")?;

        let mut seen: HashMap<StatementFormat, &str> = HashMap::new();
        for (key, label) in &self.accounts {
            let format = key
                .parse::<StatementFormat>()
                .with_context(|| format!("[accounts] {key}"))?;
            if label.trim().is_empty() {
                bail!("empty account label for {key}");
            }
            if let Some(other) = seen.insert(format, key) {
                bail!("[accounts] {other} and {key} both configure {format}");
            }
        }
        Ok(())
    }
}

pub fn parse_config(s: &str) -> Result<Config> {
    let cfg: Config = toml::from_str(s).context("parse config.toml")?;
    cfg.validate()?;
    Ok(cfg)
}

/// Load `explicit` if given (it must exist), else `~/.rbridge/config.toml` when present.
pub fn load_config(explicit: Option<&Path>) -> Result<Config> {
    match explicit {
        Some(p) => read_config(p),
        None => load_default(default_config_path().ok().as_deref()),
    }
}

/// Defaults when there is no home directory or no config file in it.
fn load_default(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(p) if p.exists() => read_config(p),
        _ => Ok(Config::default()),
    }
}

fn read_config(p: &Path) -> Result<Config> {
    let s = fs::read_to_string(p).with_context(|| format!("read {}", p.display()))?;
    parse_config(&s).with_context(|| format!("load {}", p.display()))
}
