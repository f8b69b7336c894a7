use crate::cli::parser::{ConfigArgs, ConfigCommands};
use crate::config::{Config, ConfigManager};
use crate::utils::{CleanupError, Result};

pub fn execute(config: Config, args: ConfigArgs) -> Result<()> {
    match args.command {
        Some(ConfigCommands::Show) | None => execute_show(&config),
        Some(ConfigCommands::Path) => execute_path(),
        Some(ConfigCommands::Reset) => execute_reset(),
    }
}

fn execute_show(config: &Config) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(config)?);
    Ok(())
}

fn execute_path() -> Result<()> {
    println!("{}", ConfigManager::get_config_path().display());
    Ok(())
}

fn execute_reset() -> Result<()> {
    let path = ConfigManager::get_config_path();
    ConfigManager::reset_to_path(&path).map_err(|e| {
        CleanupError::config_error(format!("Failed to reset configuration: {}", e))
    })?;
    println!("✅ Configuration reset to defaults at {}", path.display());
    Ok(())
}
