use super::{BranchesConfig, Config};
use std::path::PathBuf;

pub const APP_NAME: &str = "cleanup";
pub const CONFIG_PATH_ENV: &str = "CLEANUP_CONFIG_PATH";

pub fn default_config() -> Config {
    Config {
        branches: default_branches_config(),
    }
}

pub fn default_branches_config() -> BranchesConfig {
    BranchesConfig {
        primary_branch: default_primary_branch(),
        exclude: Vec::new(),
    }
}

pub fn default_primary_branch() -> String {
    "master".to_string()
}

pub fn get_default_config_dir() -> PathBuf {
    if let Some(proj_dirs) = directories::ProjectDirs::from("", "", APP_NAME) {
        proj_dirs.config_dir().to_path_buf()
    } else {
        directories::BaseDirs::new()
            .map(|dirs| dirs.home_dir().to_path_buf())
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join(APP_NAME)
    }
}

pub fn get_config_file_path() -> PathBuf {
    if let Ok(config_path) = std::env::var(CONFIG_PATH_ENV) {
        return PathBuf::from(config_path);
    }

    get_default_config_dir().join("config.json")
}
