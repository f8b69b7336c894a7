use super::options::CleanupOptions;
use super::outcome::{DeletionOutcome, RepositoryReport};
use crate::core::git::{extract_branch_name, GitOperations, RepositoryPath};
use crate::utils::Result;

/// Finds and deletes gone branches in one repository at a time.
pub struct BranchCleaner<'a> {
    git: &'a dyn GitOperations,
    options: &'a CleanupOptions,
}

impl<'a> BranchCleaner<'a> {
    pub fn new(git: &'a dyn GitOperations, options: &'a CleanupOptions) -> Self {
        Self { git, options }
    }

    /// Branch names selected by the filter and not excluded, in status order.
    /// Fails only when the status query itself fails.
    pub fn find_gone_branches(&self, repo: &RepositoryPath) -> Result<Vec<String>> {
        let status = self.git.tracking_status(repo)?;
        Ok(self.select_branches(&status))
    }

    pub fn select_branches(&self, status: &str) -> Vec<String> {
        let mut branches: Vec<String> = Vec::new();

        for line in status.lines() {
            if !self.options.filter.matches(line) {
                continue;
            }

            let Some(name) = extract_branch_name(line) else {
                tracing::debug!(line, "skipping status line without branch name");
                continue;
            };

            if self.options.exclusions.is_excluded(name) {
                tracing::debug!(branch = name, "branch is excluded");
                continue;
            }

            if !branches.iter().any(|b| b == name) {
                branches.push(name.to_string());
            }
        }

        branches
    }

    /// Deletes each branch, recording one outcome per branch. A failed
    /// deletion never stops the remaining ones.
    pub fn remove_branches(&self, repo: &RepositoryPath, branches: Vec<String>) -> RepositoryReport {
        let mut report = RepositoryReport::new(repo.clone());

        for branch in branches {
            let outcome = if self.options.dry_run {
                DeletionOutcome::Preview
            } else {
                match self.git.delete_branch(repo, &branch, self.options.force) {
                    Ok(()) => {
                        tracing::info!(repository = %repo, branch = %branch, "deleted branch");
                        DeletionOutcome::Deleted
                    }
                    Err(e) => {
                        tracing::warn!(repository = %repo, branch = %branch, error = %e, "failed to delete branch");
                        DeletionOutcome::Failed(e.to_string())
                    }
                }
            };

            report.record(branch, outcome);
        }

        report
    }

    pub fn process_repository(&self, repo: &RepositoryPath) -> Result<RepositoryReport> {
        let branches = self.find_gone_branches(repo)?;
        tracing::debug!(repository = %repo, count = branches.len(), "selected branches");

        Ok(self.remove_branches(repo, branches))
    }
}
