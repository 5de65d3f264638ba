use crate::config::LoggingConfig;
use crate::constants::{APP_DIR_NAME, LOG_FILE_NAME};
use anyhow::{Context, Result};
use log::LevelFilter;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// File logger built from the `[logging]` config section
///
/// The terminal belongs to the UI, so records only ever go to a file.
#[derive(Debug, Clone)]
pub struct Logger {
    level: LevelFilter,
    file: Option<PathBuf>,
}

impl Logger {
    pub fn from_config(config: &LoggingConfig) -> Result<Self> {
        if !config.enabled {
            return Ok(Self {
                level: LevelFilter::Off,
                file: None,
            });
        }

        let level = LevelFilter::from_str(&config.level)
            .map_err(|_| anyhow::anyhow!("Invalid logging level '{}'", config.level))?;
        let file = match &config.file {
            Some(path) => path.clone(),
            None => Self::get_log_file_path()?,
        };

        Ok(Self {
            level,
            file: Some(file),
        })
    }

    pub fn is_enabled(&self) -> bool {
        self.level != LevelFilter::Off
    }

    pub fn level(&self) -> LevelFilter {
        self.level
    }

    pub fn log_file(&self) -> Option<&Path> {
        self.file.as_deref()
    }

    /// Default log location under the user's data directory
    pub fn get_log_file_path() -> Result<PathBuf> {
        dirs::data_local_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))
            .map(|dir| dir.join(APP_DIR_NAME).join(LOG_FILE_NAME))
    }

    /// Install as the global `log` backend; a disabled logger installs nothing
    pub fn install(&self) -> Result<()> {
        let Some(path) = &self.file else {
            return Ok(());
        };

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
        }

        fern::Dispatch::new()
            .format(|out, message, record| {
                out.finish(format_args!(
                    "[{}] {:<5} {}: {}",
                    chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                    record.level(),
                    record.target(),
                    message
                ))
            })
            .level(self.level)
            .chain(
                fern::log_file(path)
                    .with_context(|| format!("Failed to open log file: {}", path.display()))?,
            )
            .apply()
            .map_err(|e| anyhow::anyhow!("Failed to install logger: {}", e))?;

        log::info!("Logging to {} at level {}", path.display(), self.level);
        Ok(())
    }
}
