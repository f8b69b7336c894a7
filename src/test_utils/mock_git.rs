use crate::core::git::{GitOperations, RepositoryPath};
use crate::utils::{CleanupError, Result};
use std::cell::RefCell;
use std::collections::HashMap;
use std::path::PathBuf;

/// Recording stand-in for `git`. Status text is served per repository path;
/// repositories without canned status fail the status query.
#[derive(Default)]
pub struct MockGitOperations {
    statuses: HashMap<PathBuf, String>,
    failing_branches: HashMap<String, String>,
    pub delete_calls: RefCell<Vec<(PathBuf, String, bool)>>,
    pub status_calls: RefCell<Vec<PathBuf>>,
}

impl MockGitOperations {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_status(mut self, repo: impl Into<PathBuf>, status: &str) -> Self {
        self.statuses.insert(repo.into(), status.to_string());
        self
    }

    pub fn with_failing_branch(mut self, branch: &str, detail: &str) -> Self {
        self.failing_branches
            .insert(branch.to_string(), detail.to_string());
        self
    }

    pub fn deleted_branches(&self) -> Vec<String> {
        self.delete_calls
            .borrow()
            .iter()
            .map(|(_, branch, _)| branch.clone())
            .collect()
    }

    pub fn delete_count(&self) -> usize {
        self.delete_calls.borrow().len()
    }
}

impl GitOperations for MockGitOperations {
    fn tracking_status(&self, repo: &RepositoryPath) -> Result<String> {
        let path = repo.as_path().to_path_buf();
        self.status_calls.borrow_mut().push(path.clone());

        self.statuses.get(&path).cloned().ok_or_else(|| {
            CleanupError::status_query(format!(
                "fatal: not a git repository: {}",
                path.display()
            ))
        })
    }

    fn delete_branch(&self, repo: &RepositoryPath, name: &str, force: bool) -> Result<()> {
        self.delete_calls.borrow_mut().push((
            repo.as_path().to_path_buf(),
            name.to_string(),
            force,
        ));

        match self.failing_branches.get(name) {
            Some(detail) => Err(CleanupError::deletion(name, detail.clone())),
            None => Ok(()),
        }
    }
}
