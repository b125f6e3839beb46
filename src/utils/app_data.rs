use crate::index::suffix_array::IndexConfig;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const APP_NAME: &str = "sufidx";
const CONFIG_FILE: &str = "config.json";

/// When to color terminal output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

/// Application configuration stored in the user's config directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Build indexes that ignore ASCII case
    #[serde(default)]
    pub case_insensitive: bool,

    /// Texts longer than this many bytes are sorted in parallel
    #[serde(default = "default_parallel_sort_threshold")]
    pub parallel_sort_threshold: usize,

    /// Color mode for printed results
    #[serde(default)]
    pub color: ColorMode,
}

fn default_parallel_sort_threshold() -> usize {
    IndexConfig::default().parallel_sort_threshold
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            case_insensitive: false,
            parallel_sort_threshold: default_parallel_sort_threshold(),
            color: ColorMode::default(),
        }
    }
}

impl AppConfig {
    /// Load config from the config directory, or return default if not found
    pub fn load() -> Result<Self> {
        match get_config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load config from an explicit path, or return default if it does not exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: AppConfig = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        Ok(config)
    }

    /// Save config to an explicit path, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }
        let content = serde_json::to_string_pretty(self)
            .context("Failed to serialize config")?;
        fs::write(path, content)
            .context("Failed to write config file")?;
        Ok(())
    }

    /// Index configuration derived from this app config
    pub fn index_config(&self) -> IndexConfig {
        IndexConfig {
            case_insensitive: self.case_insensitive,
            parallel_sort_threshold: self.parallel_sort_threshold,
        }
    }
}

/// Get the path to the config file, if a config directory exists on this platform
pub fn get_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|base| base.join(APP_NAME).join(CONFIG_FILE))
}
