use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod defaults;
pub mod manager;

pub use manager::ConfigManager;

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Config {
    #[serde(default = "defaults::default_branches_config")]
    pub branches: BranchesConfig,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct BranchesConfig {
    /// Never deleted, even when its upstream is gone.
    #[serde(default = "defaults::default_primary_branch")]
    pub primary_branch: String,
    /// Always excluded, on top of `--exclude`.
    #[serde(default)]
    pub exclude: Vec<String>,
}

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        validate_branches_config(&self.branches)
    }

    pub fn primary_branch(&self) -> &str {
        &self.branches.primary_branch
    }

    pub fn excluded_branches(&self) -> &[String] {
        &self.branches.exclude
    }
}

fn validate_branches_config(config: &BranchesConfig) -> Result<()> {
    let primary = config.primary_branch.trim();
    if primary.is_empty() {
        return Err(ConfigError::Validation(
            "Primary branch name cannot be empty".to_string(),
        ));
    }

    if primary.contains(char::is_whitespace) {
        return Err(ConfigError::Validation(format!(
            "Primary branch name '{}' cannot contain whitespace",
            primary
        )));
    }

    if let Some(name) = config
        .exclude
        .iter()
        .find(|name| name.trim().contains(char::is_whitespace))
    {
        return Err(ConfigError::Validation(format!(
            "Excluded branch name '{}' cannot contain whitespace",
            name
        )));
    }

    Ok(())
}
