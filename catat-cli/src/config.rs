use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::state::ensure_catat_home;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub categories: CategoriesSection,
    pub locale: LocaleSection,
    pub access: AccessSection,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CategoriesSection {
    /// Category names expenses are checked against
    pub known: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocaleSection {
    /// IANA zone used to decide what "today" is
    pub timezone: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccessSection {
    /// Comma-separated sender ids. Empty allows everyone.
    pub whitelist: String,
}

impl Default for CategoriesSection {
    fn default() -> Self {
        Self {
            known: [
                "makan",
                "transport",
                "belanja",
                "tagihan",
                "hiburan",
                "kesehatan",
                "lainnya",
            ]
            .map(String::from)
            .to_vec(),
        }
    }
}

impl Default for LocaleSection {
    fn default() -> Self {
        Self {
            timezone: "Asia/Jakarta".to_string(),
        }
    }
}

impl AccessSection {
    pub fn entries(&self) -> Vec<&str> {
        self.whitelist
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect()
    }

    /// Group chats are never served; otherwise the whitelist decides.
    pub fn allows(&self, sender: &str) -> bool {
        if sender.contains("@g.us") {
            return false;
        }
        let entries = self.entries();
        entries.is_empty() || entries.contains(&sender.trim())
    }
}

pub fn default_config_path() -> Result<PathBuf> {
    Ok(ensure_catat_home()?.join("config.toml"))
}

fn resolve_path(path: Option<&Path>) -> Result<PathBuf> {
    match path {
        Some(p) => Ok(p.to_path_buf()),
        None => default_config_path(),
    }
}

pub fn load_config(path: Option<&Path>) -> Result<Config> {
    let p = resolve_path(path)?;
    if !p.exists() {
        tracing::debug!(path = %p.display(), "no config file, using defaults");
        return Ok(Config::default());
    }
    let s = fs::read_to_string(&p).with_context(|| format!("read {}", p.display()))?;
    let cfg: Config = toml::from_str(&s).with_context(|| format!("parse {}", p.display()))?;
    // Bad zones are rejected at load time
    cfg.locale
        .timezone
        .parse::<chrono_tz::Tz>()
        .map_err(|_| anyhow::anyhow!("invalid timezone in {}: {}", p.display(), cfg.locale.timezone))?;
    Ok(cfg)
}

pub fn save_config(cfg: &Config, path: Option<&Path>) -> Result<PathBuf> {
    let p = resolve_path(path)?;
    let s = toml::to_string_pretty(cfg).context("serialize config")?;
    fs::write(&p, s).with_context(|| format!("write {}", p.display()))?;
    Ok(p)
}

pub fn init_config(path: Option<&Path>) -> Result<()> {
    let p = resolve_path(path)?;
    if p.exists() {
        println!("Config already exists: {}", p.display());
        return Ok(());
    }
    let p = save_config(&Config::default(), Some(&p))?;
    println!("Wrote {}", p.display());
    Ok(())
}
