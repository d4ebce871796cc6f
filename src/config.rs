//! Configuration management for pdfsplit
//!
//! Persists the user's default part size and output preferences.

use crate::chunking::DEFAULT_PAGES_PER_CHUNK;
use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// pdfsplit configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Pages per output part when `--pages-per-chunk` is not given
    #[serde(default = "default_pages_per_chunk")]
    pub pages_per_chunk: usize,
    /// Print the "Next steps" hint after a split
    #[serde(default = "default_true")]
    pub show_next_steps: bool,
    /// Version of config schema (for future migrations)
    #[serde(default = "default_version")]
    pub version: u32,
}

fn default_pages_per_chunk() -> usize {
    DEFAULT_PAGES_PER_CHUNK
}

fn default_true() -> bool {
    true
}

fn default_version() -> u32 {
    1
}

impl Default for Config {
    fn default() -> Self {
        Self {
            pages_per_chunk: DEFAULT_PAGES_PER_CHUNK,
            show_next_steps: true,
            version: 1,
        }
    }
}

impl Config {
    /// Get the config file path (~/.pdfsplit/config.toml)
    pub fn path() -> Result<PathBuf> {
        let home = dirs::home_dir().context("Could not determine home directory")?;
        Ok(home.join(".pdfsplit").join("config.toml"))
    }

    /// Load config from disk, or return None if it doesn't exist
    pub fn load() -> Result<Option<Self>> {
        Self::load_from(&Self::path()?)
    }

    /// Load config from an explicit path
    pub fn load_from(path: &Path) -> Result<Option<Self>> {
        if !path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        config.validate()?;
        Ok(Some(config))
    }

    /// Load config, falling back to defaults when no file exists
    pub fn load_or_default() -> Result<Self> {
        Ok(Self::load()?.unwrap_or_default())
    }

    /// Save config to disk
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .context("Failed to create config directory")?;
        }

        let content = toml::to_string_pretty(self)
            .context("Failed to serialize config")?;
        std::fs::write(path, content)
            .context("Failed to write config file")?;

        Ok(())
    }

    fn validate(&self) -> Result<()> {
        if self.pages_per_chunk == 0 {
            bail!("pages_per_chunk in config must be at least 1");
        }
        Ok(())
    }

    /// Pick the part size: CLI flag, then config
    pub fn resolve_pages_per_chunk(&self, cli_value: Option<usize>) -> usize {
        cli_value.unwrap_or(self.pages_per_chunk)
    }
}
