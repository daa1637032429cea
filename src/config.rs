//! User settings: built-in defaults + optional TOML config.
//!
//! - `Settings::default()` → coeff 1.0, plain output
//! - `Settings::from_toml_file(path)` → load user settings
//! - `Settings::load(path)` → explicit path, else ~/.diffusion/config.toml if present

use anyhow::{Context, Result};
use colored::Colorize;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::diffusion::DEFAULT_COEFF;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Plain,
    Json,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub coeff: f64,
    pub format: OutputFormat,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            coeff: DEFAULT_COEFF,
            format: OutputFormat::Plain,
        }
    }
}

impl Settings {
    pub fn from_toml_str(txt: &str) -> Result<Self> {
        let settings: Settings = toml::from_str(txt)?;
        Ok(settings)
    }

    pub fn from_toml_file(path: &Path) -> Result<Self> {
        let txt = fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        Self::from_toml_str(&txt).with_context(|| format!("parsing {}", path.display()))
    }

    /// Resolve settings for the CLI. A missing default file is silent; a bad
    /// explicit file warns and falls back to built-in defaults.
    pub fn load(cli_path: &Option<PathBuf>) -> Self {
        match cli_path {
            Some(p) if p.exists() => Self::from_toml_file(p).unwrap_or_else(|e| {
                eprintln!("{} failed to load {}: {e:#}", "warn:".yellow().bold(), p.display());
                Self::default()
            }),
            Some(p) => {
                eprintln!("{} config path not found: {}", "warn:".yellow().bold(), p.display());
                Self::default()
            }
            None => match default_config_path() {
                Some(p) if p.exists() => Self::from_toml_file(&p).unwrap_or_else(|e| {
                    eprintln!("{} failed to load {}: {e:#}", "warn:".yellow().bold(), p.display());
                    Self::default()
                }),
                _ => Self::default(),
            },
        }
    }

    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string(self)?)
    }
}

pub fn default_config_path() -> Option<PathBuf> {
    // ~/.diffusion/config.toml (%USERPROFILE%\.diffusion\config.toml on Windows)
    dirs_next::home_dir().map(|h| h.join(".diffusion").join("config.toml"))
}

pub fn resolve_config_path(cli_path: &Option<PathBuf>) -> Option<PathBuf> {
    if let Some(p) = cli_path {
        return Some(p.clone());
    }
    default_config_path()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_is_defaults() {
        assert_eq!(Settings::from_toml_str("").unwrap(), Settings::default());
    }

    #[test]
    fn reads_coeff_and_format() {
        let s = Settings::from_toml_str("coeff = 0.5\nformat = \"json\"\n").unwrap();
        assert_eq!(s.coeff, 0.5);
        assert_eq!(s.format, OutputFormat::Json);
    }

    #[test]
    fn rejects_unknown_keys_and_formats() {
        assert!(Settings::from_toml_str("colour = true").is_err());
        assert!(Settings::from_toml_str("format = \"xml\"").is_err());
    }

    #[test]
    fn missing_explicit_path_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = Some(dir.path().join("nope.toml"));
        assert_eq!(Settings::load(&path), Settings::default());
    }

    #[test]
    fn toml_roundtrip_via_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let s = Settings { coeff: 2.0, format: OutputFormat::Json };
        fs::write(&path, s.to_toml_string().unwrap()).unwrap();
        assert_eq!(Settings::load(&Some(path)), s);
    }

    #[test]
    fn explicit_path_wins() {
        let p = PathBuf::from("custom.toml");
        assert_eq!(resolve_config_path(&Some(p.clone())), Some(p));
    }
}
