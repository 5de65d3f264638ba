//! Configuration management for TaskMaster
//!
//! This module handles loading, parsing, and validation of configuration files.

use crate::constants::{
    APP_DIR_NAME, CONFIG_FILE_NAME, CONFIG_GENERATED, MAX_DELAY_MS, MAX_TOAST_SECONDS, MIN_CONTENT_WIDTH,
};
use crate::icons::IconTheme;
use anyhow::{Context, Result};
use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub ui: UiConfig,
    pub timing: TimingConfig,
    pub display: DisplayConfig,
    pub logging: LoggingConfig,
}

/// UI configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Enable mouse support
    pub mouse_enabled: bool,
    /// Icon theme: "emoji", "unicode" or "ascii"
    pub icon_theme: IconTheme,
    /// How long a notification stays in the status bar
    pub toast_seconds: u64,
    /// Maximum width of the centred content column
    pub max_width: u16,
}

/// Artificial latency applied before a create or edit is emitted
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    /// Delay between submitting the entry form and the creation event (0 = immediate)
    pub submit_delay_ms: u64,
    /// Delay between confirming an inline edit and the edit event (0 = immediate)
    pub save_delay_ms: u64,
}

/// Display configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Time of day in due-date labels
    pub time_format: String,
    /// Day part of due-date labels beyond tomorrow
    pub short_date_format: String,
    /// Due datetime under each task
    pub full_datetime_format: String,
    /// Step applied by Up/Down in the due-date field
    pub due_step_minutes: u32,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Enable logging to a file
    pub enabled: bool,
    /// Maximum level: "error", "warn", "info", "debug" or "trace"
    pub level: String,
    /// Log file location (defaults to the data directory)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            mouse_enabled: true,
            icon_theme: IconTheme::default(),
            toast_seconds: 4,
            max_width: 80,
        }
    }
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            submit_delay_ms: 500,
            save_delay_ms: 500,
        }
    }
}

impl TimingConfig {
    /// Zero delays, for headless runs and `--instant`
    pub fn instant() -> Self {
        Self {
            submit_delay_ms: 0,
            save_delay_ms: 0,
        }
    }

    pub fn submit_delay(&self) -> Duration {
        Duration::from_millis(self.submit_delay_ms)
    }

    pub fn save_delay(&self) -> Duration {
        Duration::from_millis(self.save_delay_ms)
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            time_format: "%-I:%M %p".to_string(),
            short_date_format: "%b %-d".to_string(),
            full_datetime_format: "%a, %b %-d, %-I:%M %p".to_string(),
            due_step_minutes: 15,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            level: "info".to_string(),
            file: None,
        }
    }
}

/// Whether chrono understands every specifier in `format`
fn is_valid_strftime(format: &str) -> bool {
    !StrftimeItems::new(format).any(|item| matches!(item, Item::Error))
}

impl Config {
    /// Load configuration from an explicit path, the usual locations, or defaults
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load_from_file(path);
        }

        match Self::find_config_file() {
            Some(path) => Self::load_from_file(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Find configuration file in order of precedence
    fn find_config_file() -> Option<PathBuf> {
        // 1. Current directory
        let current_dir_config = PathBuf::from(CONFIG_FILE_NAME);
        if current_dir_config.exists() {
            return Some(current_dir_config);
        }

        // 2. XDG config directory
        Self::get_default_config_path().ok().filter(|path| path.exists())
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.timing.submit_delay_ms > MAX_DELAY_MS {
            anyhow::bail!("submit_delay_ms cannot exceed {} ms", MAX_DELAY_MS);
        }
        if self.timing.save_delay_ms > MAX_DELAY_MS {
            anyhow::bail!("save_delay_ms cannot exceed {} ms", MAX_DELAY_MS);
        }

        if self.ui.toast_seconds > MAX_TOAST_SECONDS {
            anyhow::bail!("toast_seconds cannot exceed {}", MAX_TOAST_SECONDS);
        }
        if self.ui.max_width < MIN_CONTENT_WIDTH {
            anyhow::bail!(
                "max_width must be at least {} columns, got {}",
                MIN_CONTENT_WIDTH,
                self.ui.max_width
            );
        }

        for (name, format) in [
            ("time_format", &self.display.time_format),
            ("short_date_format", &self.display.short_date_format),
            ("full_datetime_format", &self.display.full_datetime_format),
        ] {
            if !is_valid_strftime(format) {
                anyhow::bail!("Invalid {} '{}'", name, format);
            }
        }

        if self.display.due_step_minutes == 0 || self.display.due_step_minutes > 1440 {
            anyhow::bail!("due_step_minutes must be between 1 and 1440");
        }

        if log::LevelFilter::from_str(&self.logging.level).is_err() {
            anyhow::bail!("Invalid logging level '{}'", self.logging.level);
        }

        Ok(())
    }

    /// Generate default configuration file
    pub fn generate_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
        let config = Self::default();
        let toml_content = toml::to_string_pretty(&config).context("Failed to serialize default config")?;

        let header = format!(
            "# TaskMaster Configuration File\n# Generated on {}\n\n",
            chrono::Local::now().format("%Y-%m-%d")
        );

        let full_content = header + &toml_content;

        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
        }

        std::fs::write(&path, full_content)
            .with_context(|| format!("Failed to write config file: {}", path.as_ref().display()))?;

        println!("{}: {}", CONFIG_GENERATED, path.as_ref().display());
        Ok(())
    }

    /// Get the XDG config directory path
    pub fn get_xdg_config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
            .map(|dir| dir.join(APP_DIR_NAME))
    }

    /// Get the default config file path
    pub fn get_default_config_path() -> Result<PathBuf> {
        Ok(Self::get_xdg_config_dir()?.join("config.toml"))
    }
}
