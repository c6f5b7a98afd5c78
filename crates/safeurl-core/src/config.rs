use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// How the CLI prints sanitized URLs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One sanitized URL per line.
    #[default]
    Plain,
    /// One JSON object per line with input, output and verdict.
    Json,
}

/// Global configuration loaded from `~/.config/safeurl/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SafeUrlConfig {
    /// Default output format; `--format` overrides it.
    #[serde(default)]
    pub output: OutputFormat,
    /// Report how many inputs were replaced by the placeholder after a batch.
    #[serde(default = "default_true")]
    pub log_rejections: bool,
    /// Ignore blank lines when reading URLs from stdin.
    #[serde(default = "default_true")]
    pub skip_blank_lines: bool,
}

fn default_true() -> bool {
    true
}

impl Default for SafeUrlConfig {
    fn default() -> Self {
        Self {
            output: OutputFormat::Plain,
            log_rejections: true,
            skip_blank_lines: true,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("safeurl")
        .context("resolve XDG base directories for safeurl")?;
    xdg_dirs
        .place_config_file("config.toml")
        .with_context(|| {
            format!(
                "place config.toml under {}",
                xdg_dirs.get_config_home().display()
            )
        })
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<SafeUrlConfig> {
    let path = config_path()?;
    load_or_init_at(&path)
}

/// Like [`load_or_init`] but at an explicit path.
pub fn load_or_init_at(path: &Path) -> Result<SafeUrlConfig> {
    if !path.exists() {
        return write_default(path);
    }
    load_from(path)
}

/// Like [`load_or_init`], but when the config file cannot be placed or
/// created the built-in defaults are used instead. An existing file that
/// fails to read or parse is still an error.
pub fn load_or_default() -> Result<SafeUrlConfig> {
    match config_path() {
        Ok(path) => load_or_default_at(&path),
        Err(err) => {
            tracing::warn!("config unavailable, using defaults: {:#}", err);
            Ok(SafeUrlConfig::default())
        }
    }
}

/// Like [`load_or_default`] but at an explicit path.
pub fn load_or_default_at(path: &Path) -> Result<SafeUrlConfig> {
    if path.is_file() {
        return load_from(path);
    }
    match write_default(path) {
        Ok(cfg) => Ok(cfg),
        Err(err) => {
            tracing::warn!("config unavailable, using defaults: {:#}", err);
            Ok(SafeUrlConfig::default())
        }
    }
}

fn write_default(path: &Path) -> Result<SafeUrlConfig> {
    let default_cfg = SafeUrlConfig::default();
    let toml = toml::to_string_pretty(&default_cfg)?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("create config dir {}", parent.display()))?;
    }
    fs::write(path, toml).with_context(|| format!("write {}", path.display()))?;
    tracing::info!("created default config at {}", path.display());
    Ok(default_cfg)
}

/// Load configuration from an existing file.
pub fn load_from(path: &Path) -> Result<SafeUrlConfig> {
    let data = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: SafeUrlConfig =
        toml::from_str(&data).with_context(|| format!("parse {}", path.display()))?;
    Ok(cfg)
}
