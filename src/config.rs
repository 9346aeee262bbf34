//! Configuration management for game-shelf
//!
//! Config file location:
//! - Linux: ~/.config/game-shelf/config.toml
//! - macOS: ~/Library/Application Support/game-shelf/config.toml
//! - Windows: %APPDATA%/game-shelf/config.toml
//!
//! You can override the config location by setting `GAME_SHELF_CONFIG_PATH`.
//! `GAME_SHELF_API_KEY` and `GAME_SHELF_API_URL` override the file values.

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// API endpoint configuration
    #[serde(default)]
    pub api: ApiConfig,

    /// Terminal UI preferences
    #[serde(default)]
    pub ui: UiConfig,
}

impl Config {
    /// Load configuration from file or create default
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let content = fs::read_to_string(&config_path)
                .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

            let config: Config = toml::from_str(&content).with_context(|| {
                format!("Failed to parse config from {}", config_path.display())
            })?;

            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml = toml::to_string_pretty(self).context("Failed to serialize config to TOML")?;

        fs::write(&config_path, toml)
            .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

        Ok(())
    }

    /// Get the configuration file path
    pub fn config_path() -> Result<PathBuf> {
        if let Ok(path) = std::env::var("GAME_SHELF_CONFIG_PATH") {
            let trimmed = path.trim();
            if !trimmed.is_empty() {
                return Ok(PathBuf::from(trimmed));
            }
        }

        let proj_dirs = ProjectDirs::from("io", "gameshelf", "game-shelf")
            .context("Could not determine project directories")?;

        Ok(proj_dirs.config_dir().join("config.toml"))
    }
}

/// API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// API base URL
    #[serde(default = "default_api_url")]
    pub base_url: String,

    /// API key for the catalog service
    #[serde(default)]
    pub api_key: String,

    /// API timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,

    /// Number of games requested per list fetch
    #[serde(default = "default_page_size")]
    pub page_size: u32,
}

impl ApiConfig {
    /// API key with the environment override applied.
    pub fn effective_key(&self) -> String {
        std::env::var("GAME_SHELF_API_KEY")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| self.api_key.clone())
    }

    /// Base URL with the environment override applied.
    pub fn effective_base_url(&self) -> String {
        std::env::var("GAME_SHELF_API_URL")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| self.base_url.clone())
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_api_url(),
            api_key: String::new(),
            timeout_seconds: default_timeout(),
            page_size: default_page_size(),
        }
    }
}

pub fn default_api_url() -> String {
    "https://api.rawg.io/api".to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_page_size() -> u32 {
    20
}

/// Terminal UI preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Start in the dark palette
    #[serde(default = "default_true")]
    pub dark_mode: bool,

    /// Quiet period after the last keystroke before a search fetch fires
    #[serde(default = "default_debounce_ms")]
    pub search_debounce_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            dark_mode: default_true(),
            search_debounce_ms: default_debounce_ms(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_debounce_ms() -> u64 {
    500
}
