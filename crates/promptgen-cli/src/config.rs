//! Configuration management for promptgen CLI
//!
//! Stores defaults and the optional server URL in ~/.config/promptgen/config.toml.
//! Stats and the latest result live under the platform data directory.

use anyhow::{bail, Context, Result};
use promptgen::{AiModel, ComplexityLevel};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const APP_DIR: &str = "promptgen";
const CONFIG_FILE: &str = "config.toml";

/// Keys accepted by `promptgen config set`
pub const KEYS: &[&str] = &[
    "default_model",
    "default_level",
    "server_url",
    "share_base_url",
    "generation_delay_ms",
];

/// CLI Configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_model")]
    pub default_model: String,
    #[serde(default = "default_level")]
    pub default_level: u8,
    /// When set, `enhance` and `stats` go through the HTTP API
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server_url: Option<String>,
    #[serde(default = "default_share_base_url")]
    pub share_base_url: String,
    #[serde(default = "default_generation_delay_ms")]
    pub generation_delay_ms: u64,
}

fn default_model() -> String {
    AiModel::General.id().to_string()
}

fn default_level() -> u8 {
    ComplexityLevel::DEFAULT
}

fn default_share_base_url() -> String {
    "http://localhost:8000/api/results".to_string()
}

fn default_generation_delay_ms() -> u64 {
    2000
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_model: default_model(),
            default_level: default_level(),
            server_url: None,
            share_base_url: default_share_base_url(),
            generation_delay_ms: default_generation_delay_ms(),
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not determine config directory")?
            .join(APP_DIR);
        Ok(config_dir)
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE))
    }

    /// Directory for stats and session files
    pub fn data_dir() -> Result<PathBuf> {
        let data_dir = dirs::data_dir()
            .context("Could not determine data directory")?
            .join(APP_DIR);
        Ok(data_dir)
    }

    /// Load config from file, or create default
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {:?}", path))?;

        let config: Config =
            toml::from_str(&content).with_context(|| "Failed to parse config file")?;

        Ok(config)
    }

    /// Save config to file
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create config directory {:?}", dir))?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(path, content)
            .with_context(|| format!("Failed to write config to {:?}", path))?;

        Ok(())
    }

    /// Set one key from its string form
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "default_model" => {
                let model: AiModel = value
                    .parse()
                    .map_err(|e: String| anyhow::anyhow!(e))?;
                self.default_model = model.id().to_string();
            }
            "default_level" => {
                let level = value
                    .parse::<u8>()
                    .ok()
                    .and_then(ComplexityLevel::new)
                    .with_context(|| format!("Level must be 1-5, got '{}'", value))?;
                self.default_level = level.value();
            }
            "server_url" => {
                self.server_url = match value.trim() {
                    "" | "none" => None,
                    url => Some(url.trim_end_matches('/').to_string()),
                };
            }
            "share_base_url" => self.share_base_url = value.trim().to_string(),
            "generation_delay_ms" => {
                self.generation_delay_ms = value
                    .parse()
                    .with_context(|| format!("Not a number of milliseconds: '{}'", value))?;
            }
            _ => bail!("Unknown key '{}'. Known keys: {}", key, KEYS.join(", ")),
        }
        Ok(())
    }

    pub fn model(&self) -> AiModel {
        AiModel::from_id_lossy(&self.default_model)
    }

    pub fn level(&self) -> ComplexityLevel {
        ComplexityLevel::from_raw_lossy(self.default_level as i64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.model(), AiModel::General);
        assert_eq!(config.level().value(), 3);
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/config.toml");

        let mut config = Config::default();
        config.set("default_model", "claude").unwrap();
        config.set("default_level", "5").unwrap();
        config.set("server_url", "http://localhost:8000/").unwrap();
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.default_model, "claude");
        assert_eq!(loaded.default_level, 5);
        assert_eq!(loaded.server_url.as_deref(), Some("http://localhost:8000"));
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "default_level = 1\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.default_level, 1);
        assert_eq!(config.generation_delay_ms, 2000);
    }

    #[test]
    fn test_set_rejects_bad_values() {
        let mut config = Config::default();
        assert!(config.set("default_model", "gpt-9").is_err());
        assert!(config.set("default_level", "6").is_err());
        assert!(config.set("generation_delay_ms", "fast").is_err());
        assert!(config.set("colour", "blue").is_err());

        config.set("server_url", "none").unwrap();
        assert_eq!(config.server_url, None);
    }
}
