use super::defaults::{default_config, get_config_file_path};
use super::{Config, Result};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

pub struct ConfigManager;

impl ConfigManager {
    pub fn get_config_path() -> PathBuf {
        get_config_file_path()
    }

    /// Loads the config file, falling back to defaults when it does not exist.
    /// Nothing is written to disk.
    pub fn load() -> Result<Config> {
        Self::load_with_path(None)
    }

    pub fn load_with_path(config_path: Option<&Path>) -> Result<Config> {
        let config_path = match config_path {
            Some(path) => path.to_path_buf(),
            None => get_config_file_path(),
        };

        if config_path.exists() {
            Self::load_from_file(&config_path)
        } else {
            tracing::debug!(path = %config_path.display(), "no config file, using defaults");
            Ok(default_config())
        }
    }

    pub fn load_from_file(path: &Path) -> Result<Config> {
        let content = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
        config.validate()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(config)?;
        let mut file = fs::File::create(path)?;
        file.write_all(json.as_bytes())?;
        file.sync_all()?;

        Ok(())
    }

    pub fn reset_to_path(path: &Path) -> Result<Config> {
        let config = default_config();
        Self::save_to_path(&config, path)?;
        Ok(config)
    }
}
