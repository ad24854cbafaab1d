use crate::theme::ThemePreference;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::{
    env,
    path::{Path, PathBuf},
};
use tracing::{info, warn};

pub const CONFIG_PATH_ENV: &str = "READABILITY_EXAMER_CONFIG";
pub const THEME_ENV: &str = "READABILITY_EXAMER_THEME";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub theme: ThemePreference,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub color: bool,
    pub directory: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Terminal,
    Json,
    Markdown,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Terminal,
            color: true,
            directory: None,
        }
    }
}

impl Config {
    /// Get the default config file path (~/.readability-examer.toml)
    pub fn default_config_path() -> crate::Result<PathBuf> {
        let home_dir = env::var("HOME")
            .or_else(|_| env::var("USERPROFILE"))
            .map_err(|_| anyhow::anyhow!("Could not determine home directory"))?;
        Ok(PathBuf::from(home_dir).join(".readability-examer.toml"))
    }

    /// Resolve which file to use: an explicit path, then the env var, then the default.
    pub fn resolve_path(explicit: Option<&Path>) -> crate::Result<PathBuf> {
        if let Some(path) = explicit {
            return Ok(path.to_path_buf());
        }
        match env::var(CONFIG_PATH_ENV) {
            Ok(path) if !path.trim().is_empty() => Ok(PathBuf::from(path)),
            _ => Self::default_config_path(),
        }
    }

    /// Load config from the resolved location, falling back to defaults if the file doesn't exist
    pub fn load(explicit: Option<&Path>) -> crate::Result<Self> {
        let config_path = Self::resolve_path(explicit)?;
        Self::load_from(&config_path)
    }

    pub fn load_from(config_path: &Path) -> crate::Result<Self> {
        let mut config = if config_path.exists() {
            info!("Loading configuration from: {}", config_path.display());
            Self::from_file(config_path)?
        } else {
            info!("No config file found at {}, using defaults", config_path.display());
            Self::default()
        };

        config.apply_env_overrides();
        Ok(config)
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(value) = env::var(THEME_ENV) {
            match ThemePreference::from_str(value.trim(), true) {
                Ok(theme) => self.theme = theme,
                Err(_) => warn!("Ignoring invalid {} value: {}", THEME_ENV, value),
            }
        }
    }

    /// Load config from a specific file path
    pub fn from_file(path: &Path) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save config to a file
    pub fn to_file(&self, path: &Path) -> crate::Result<()> {
        // Create parent directories if they don't exist
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Persist a theme preference, keeping the rest of the file intact.
    pub fn save_theme(path: &Path, theme: ThemePreference) -> crate::Result<Self> {
        let mut config = if path.exists() {
            Self::from_file(path)?
        } else {
            Self::default()
        };
        config.theme = theme;
        config.to_file(path)?;
        info!("Saved theme preference '{}' to {}", theme, path.display());
        Ok(config)
    }

    /// Create a config file with all available options documented
    pub fn create_documented_config() -> String {
        r#"# Readability Examer Configuration File
# This file configures how readability-examer displays its results

# Theme: "light", "dark", or "auto"
# auto picks light between 06:00 and 18:00 local time, dark otherwise.
# Can also be set with READABILITY_EXAMER_THEME.
theme = "auto"

[output]
# Default output format: "terminal", "json", or "markdown"
format = "terminal"

# Use colors in terminal output
color = true

# Directory to export JSON and Markdown reports to (optional)
# directory = "./readability-output"
"#
        .to_string()
    }
}
