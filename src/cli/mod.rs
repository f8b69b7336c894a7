pub mod commands;
pub mod completion;
pub mod parser;


pub use parser::{Cli, Commands};

use crate::config::ConfigManager;
use crate::utils::{CleanupError, Result};

pub fn execute_command(cli: Cli) -> Result<()> {
    execute_command_with_config(cli, None)
}

pub fn execute_command_with_config(
    cli: Cli,
    test_config: Option<crate::config::Config>,
) -> Result<()> {
    match cli.command {
        Commands::Branches(args) => {
            args.validate()?;
            commands::branches::execute(load_config(test_config)?, args)
        }
        Commands::Config(args) => commands::config::execute(load_config(test_config)?, args),
        Commands::Completion(args) => commands::completion::execute(args),
    }
}

fn load_config(test_config: Option<crate::config::Config>) -> Result<crate::config::Config> {
    match test_config {
        Some(cfg) => Ok(cfg),
        None => ConfigManager::load()
            .map_err(|e| CleanupError::config_error(format!("Failed to load config: {}", e))),
    }
}
