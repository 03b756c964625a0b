//! Configuration management

use crate::domain::instant::DATETIME_FORMAT;
use crate::error::{Result, TagError};
use crate::infrastructure::ClockMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::str::FromStr;

/// Environment variable overriding the configured clock
pub const CLOCK_ENV: &str = "RHIZ_TAG_CLOCK";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Wall clock used for `now`
    pub clock: ClockMode,
    /// Append a random suffix to generated tags
    pub suffix: bool,
    /// strftime format for decoded intervals
    pub time_format: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            clock: ClockMode::default(),
            suffix: true,
            time_format: DATETIME_FORMAT.to_string(),
        }
    }
}

impl Config {
    /// Load config from a TOML file. A missing file yields the defaults.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no config file, using defaults");
                return Ok(Config::default());
            }
            Err(e) => return Err(TagError::Io(e)),
        };

        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Save config to a TOML file, creating its directory if needed
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        if let Some(dir) = path.parent() {
            if !dir.as_os_str().is_empty() && !dir.exists() {
                fs::create_dir_all(dir)?;
            }
        }

        let contents = toml::to_string_pretty(self)?;

        fs::write(path, contents)?;
        tracing::info!(path = %path.display(), "saved config");

        Ok(())
    }

    /// Get the clock mode, checking the environment first
    pub fn get_clock(&self) -> Result<ClockMode> {
        match std::env::var(CLOCK_ENV) {
            Ok(value) => ClockMode::from_str(&value)
                .map_err(|e| TagError::Config(format!("{} is invalid. {}", CLOCK_ENV, e))),
            Err(_) => Ok(self.clock),
        }
    }
}
