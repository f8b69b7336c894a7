use crate::utils::error::Result;

pub mod branch;
pub mod repository;

pub use branch::{extract_branch_name, BranchManager, GONE_MARKER};
pub use repository::{execute_git_command, is_repository, RepositoryPath};

/// The two git operations branch cleanup depends on.
///
/// `tracking_status` failures must surface as `CleanupError::StatusQuery` and
/// `delete_branch` failures as `CleanupError::Deletion`.
pub trait GitOperations {
    fn tracking_status(&self, repo: &RepositoryPath) -> Result<String>;
    fn delete_branch(&self, repo: &RepositoryPath, name: &str, force: bool) -> Result<()>;
}

/// Runs the real `git` binary.
#[derive(Debug, Default, Clone, Copy)]
pub struct GitService;

impl GitService {
    pub fn new() -> Self {
        Self
    }
}

impl GitOperations for GitService {
    fn tracking_status(&self, repo: &RepositoryPath) -> Result<String> {
        let manager = BranchManager::new(repo);
        manager.tracking_status()
    }

    fn delete_branch(&self, repo: &RepositoryPath, name: &str, force: bool) -> Result<()> {
        let manager = BranchManager::new(repo);
        manager.delete_branch(name, force)
    }
}
