pub mod cli;
pub mod config;
pub mod core;
pub mod logging;
pub mod utils;

#[cfg(test)]
pub mod test_utils;

pub use config::Config;
pub use crate::core::cleanup::{run, CleanupOptions, DeletionOutcome, RepositoryReport};
pub use crate::core::git::{GitOperations, GitService, RepositoryPath};
pub use utils::{CleanupError, Result};
