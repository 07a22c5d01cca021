//! Configuration management for Chromeless
//!
//! This module handles loading and managing application configuration
//! from config files and environment variables.

use crate::utils::error::{ChromelessError, IntoShellError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Window configuration
    pub window: WindowConfig,

    /// General application settings
    pub general: GeneralConfig,
}

/// Window configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindowConfig {
    /// Window width in logical pixels
    pub width: u32,

    /// Window height in logical pixels
    pub height: u32,

    /// Window title, shown in the taskbar (the window itself is frameless)
    pub title: String,

    /// Keep the window above all others
    pub always_on_top: bool,

    /// Allow the window to be resized
    pub resizable: bool,
}

/// General application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,

    /// Content document to load instead of the built-in one
    pub content: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            general: GeneralConfig::default(),
        }
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 400,
            height: 400,
            title: "Chromeless".to_string(),
            always_on_top: false,
            resizable: true,
        }
    }
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            content: None,
        }
    }
}

impl Config {
    /// Load configuration from various sources
    ///
    /// Configuration is loaded in the following order (later sources override earlier):
    /// 1. Default values
    /// 2. System config file (/etc/chromeless/config.toml on Linux)
    /// 3. User config file (~/.config/chromeless/config.toml on Linux)
    /// 4. Environment variables (CHROMELESS_* prefix)
    pub fn load() -> Result<Self> {
        let mut config = Self::default();

        // Try to load system config
        if let Some(system_path) = Self::system_config_path() {
            if system_path.exists() {
                config.merge_from_file(&system_path)?;
            }
        }

        // Try to load user config
        if let Some(user_path) = Self::user_config_path() {
            if user_path.exists() {
                config.merge_from_file(&user_path)?;
            }
        }

        // Apply environment variable overrides
        config.apply_env_overrides()?;

        // Validate configuration
        config.validate()?;

        Ok(config)
    }

    /// Merge configuration from a TOML file
    fn merge_from_file(&mut self, path: &Path) -> Result<()> {
        let contents = std::fs::read_to_string(path).config_err("Failed to read config file")?;

        let file_config: Config =
            toml::from_str(&contents).config_err("Failed to parse config file")?;

        // TODO: Implement field-level merging instead of full replacement
        *self = file_config;

        Ok(())
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(&mut self) -> Result<()> {
        // Example: CHROMELESS_WINDOW_WIDTH=800
        if let Ok(width) = std::env::var("CHROMELESS_WINDOW_WIDTH") {
            self.window.width = width.parse()
                .map_err(|_| ChromelessError::Config("Invalid CHROMELESS_WINDOW_WIDTH".to_string()))?;
        }

        if let Ok(height) = std::env::var("CHROMELESS_WINDOW_HEIGHT") {
            self.window.height = height.parse()
                .map_err(|_| ChromelessError::Config("Invalid CHROMELESS_WINDOW_HEIGHT".to_string()))?;
        }

        if let Ok(log_level) = std::env::var("CHROMELESS_LOG_LEVEL") {
            self.general.log_level = log_level;
        }

        if let Ok(content) = std::env::var("CHROMELESS_CONTENT") {
            self.general.content = Some(PathBuf::from(content));
        }

        Ok(())
    }

    /// Validate configuration values
    fn validate(&self) -> Result<()> {
        // Validate window dimensions
        if self.window.width == 0 || self.window.height == 0 {
            return Err(ChromelessError::Config("Window dimensions must be non-zero".to_string()));
        }

        // Validate log level
        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&self.general.log_level.as_str()) {
            return Err(ChromelessError::Config(format!(
                "Invalid log level '{}', must be one of: {:?}",
                self.general.log_level,
                valid_log_levels
            )));
        }

        Ok(())
    }

    /// Get system config file path
    fn system_config_path() -> Option<PathBuf> {
        #[cfg(target_os = "linux")]
        return Some(PathBuf::from("/etc/chromeless/config.toml"));

        #[cfg(target_os = "windows")]
        return std::env::var("PROGRAMDATA").ok()
            .map(|p| PathBuf::from(p).join("Chromeless").join("config.toml"));

        #[cfg(target_os = "macos")]
        return Some(PathBuf::from("/Library/Application Support/Chromeless/config.toml"));

        #[allow(unreachable_code)]
        None
    }

    /// Get user config file path
    fn user_config_path() -> Option<PathBuf> {
        #[cfg(target_os = "linux")]
        return dirs::config_dir()
            .map(|p| p.join("chromeless").join("config.toml"));

        #[cfg(not(target_os = "linux"))]
        return dirs::config_dir()
            .map(|p| p.join("Chromeless").join("config.toml"));

        #[allow(unreachable_code)]
        None
    }
}
