//! Config management use case

use crate::error::{Result, TagError};
use crate::infrastructure::{ClockMode, Config, ConfigStore};
use std::str::FromStr;

/// Keys accepted by get/set
pub const CONFIG_KEYS: [&str; 3] = ["clock", "suffix", "time_format"];

/// Service for managing configuration
pub struct ConfigService {
    store: ConfigStore,
}

impl ConfigService {
    /// Create a new config service
    pub fn new(store: ConfigStore) -> Self {
        ConfigService { store }
    }

    pub fn store(&self) -> &ConfigStore {
        &self.store
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.store.load()?;

        match key {
            "clock" => Ok(config.clock.as_str().to_string()),
            "suffix" => Ok(config.suffix.to_string()),
            "time_format" => Ok(config.time_format),
            _ => Err(Self::unknown_key(key)),
        }
    }

    /// Set a config value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.store.load()?;

        match key {
            "clock" => {
                config.clock = ClockMode::from_str(value).map_err(TagError::Config)?;
            }
            "suffix" => {
                config.suffix = value.parse().map_err(|_| {
                    TagError::Config(format!(
                        "Invalid value for suffix: '{}'. Use true or false",
                        value
                    ))
                })?;
            }
            "time_format" => {
                if value.trim().is_empty() {
                    return Err(TagError::Config(
                        "time_format cannot be empty".to_string(),
                    ));
                }
                config.time_format = value.to_string();
            }
            _ => return Err(Self::unknown_key(key)),
        }

        self.store.save(&config)?;
        Ok(())
    }

    /// List all config values
    pub fn list(&self) -> Result<Config> {
        self.store.load()
    }

    fn unknown_key(key: &str) -> TagError {
        TagError::Config(format!(
            "Unknown config key: '{}'. Valid keys are: {}",
            key,
            CONFIG_KEYS.join(", ")
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn service(temp: &TempDir) -> ConfigService {
        ConfigService::new(ConfigStore::discover_from(temp.path()))
    }

    #[test]
    fn test_get_defaults_without_file() {
        let temp = TempDir::new().unwrap();
        let service = service(&temp);

        assert_eq!(service.get("clock").unwrap(), "utc");
        assert_eq!(service.get("suffix").unwrap(), "true");
        assert_eq!(service.get("time_format").unwrap(), "%Y-%m-%d %H:%M:%S");
        assert!(!service.store().exists());
    }

    #[test]
    fn test_set_then_get() {
        let temp = TempDir::new().unwrap();
        let service = service(&temp);

        service.set("clock", "local").unwrap();
        service.set("suffix", "false").unwrap();
        service.set("time_format", "%H:%M").unwrap();

        assert!(service.store().exists());
        assert_eq!(service.get("clock").unwrap(), "local");
        assert_eq!(service.get("suffix").unwrap(), "false");
        assert_eq!(service.get("time_format").unwrap(), "%H:%M");

        let config = service.list().unwrap();
        assert_eq!(config.clock, ClockMode::Local);
        assert!(!config.suffix);
    }

    #[test]
    fn test_set_invalid_values() {
        let temp = TempDir::new().unwrap();
        let service = service(&temp);

        assert!(service.set("clock", "mars").is_err());
        assert!(service.set("suffix", "maybe").is_err());
        assert!(service.set("time_format", "  ").is_err());
        assert!(!service.store().exists());
    }

    #[test]
    fn test_unknown_key() {
        let temp = TempDir::new().unwrap();
        let service = service(&temp);

        match service.get("colour") {
            Err(TagError::Config(msg)) => {
                assert!(msg.contains("Unknown config key"));
                assert!(msg.contains("clock, suffix, time_format"));
            }
            other => panic!("Expected Config error, got {:?}", other),
        }
        assert!(service.set("colour", "blue").is_err());
    }
}
