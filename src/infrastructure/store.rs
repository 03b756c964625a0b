//! Config file discovery

use crate::error::Result;
use crate::infrastructure::Config;
use std::path::{Path, PathBuf};

/// Environment variable naming the config file explicitly
pub const CONFIG_ENV: &str = "RHIZ_TAG_CONFIG";

/// Directory holding the config file
pub const CONFIG_DIR: &str = ".rhiz-tag";

pub const CONFIG_FILE: &str = "config.toml";

/// Location of the config file. The file itself may not exist yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    /// Create a store for an explicit file path
    pub fn new(path: PathBuf) -> Self {
        ConfigStore { path }
    }

    /// Find the config file.
    /// First checks RHIZ_TAG_CONFIG, then walks up from the current directory.
    pub fn discover() -> Result<Self> {
        if let Ok(path) = std::env::var(CONFIG_ENV) {
            return Ok(ConfigStore::new(PathBuf::from(path)));
        }

        let current_dir = std::env::current_dir()?;
        Ok(Self::discover_from(&current_dir))
    }

    /// Walk up from `start` looking for `.rhiz-tag/config.toml`.
    /// Falls back to `start/.rhiz-tag/config.toml` when none is found.
    pub fn discover_from(start: &Path) -> Self {
        let mut current = start;

        loop {
            let candidate = Self::config_path_in(current);
            if candidate.is_file() {
                tracing::debug!(path = %candidate.display(), "found config");
                return ConfigStore::new(candidate);
            }

            match current.parent() {
                Some(parent) => current = parent,
                None => return ConfigStore::new(Self::config_path_in(start)),
            }
        }
    }

    fn config_path_in(dir: &Path) -> PathBuf {
        dir.join(CONFIG_DIR).join(CONFIG_FILE)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    pub fn load(&self) -> Result<Config> {
        Config::load_from_file(&self.path)
    }

    pub fn save(&self, config: &Config) -> Result<()> {
        config.save_to_file(&self.path)
    }
}
