// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{bail, Context, Result};
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

static APP: Lazy<(&str, &str, &str)> =
    Lazy::new(|| ("com.alphavelocity", "BudgetTracker", "budget-tracker"));

pub const DEFAULT_BASE_URL: &str = "http://localhost:5001";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

impl Config {
    /// `--base-url` wins over the file, which wins over the default. The
    /// flag is held to the rules of `set-base-url`.
    pub fn resolve_base_url(&self, flag: Option<&str>) -> Result<String> {
        match flag {
            Some(f) => validate_base_url(f).context("Bad --base-url"),
            None => Ok(self.base_url.clone()),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let proj = ProjectDirs::from(APP.0, APP.1, APP.2)
        .context("Could not determine platform-specific config dir")?;
    Ok(proj.config_dir().join("config.json"))
}

/// Reads the config file; a missing file means defaults.
pub fn load_from(path: &Path) -> Result<Config> {
    if !path.exists() {
        return Ok(Config::default());
    }
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Read config at {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("Parse config at {}", path.display()))
}

pub fn save_to(path: &Path, cfg: &Config) -> Result<()> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).context("Failed to create config dir")?;
    }
    fs::write(path, serde_json::to_string_pretty(cfg)?)
        .with_context(|| format!("Write config at {}", path.display()))
}

pub fn validate_base_url(s: &str) -> Result<String> {
    let url = reqwest::Url::parse(s).with_context(|| format!("Invalid base URL '{}'", s))?;
    if url.scheme() != "http" && url.scheme() != "https" {
        bail!("Base URL must be http or https, got '{}'", url.scheme());
    }
    Ok(s.trim_end_matches('/').to_string())
}
