use super::repository::{execute_git_command, git_output, stderr_summary, RepositoryPath};
use crate::utils::error::{CleanupError, Result};

/// Suffix `git branch -vv` prints inside the tracking brackets once the
/// upstream ref has been deleted, e.g. `[origin/feature/1: gone]`.
pub const GONE_MARKER: &str = ": gone]";

/// Width of the current-branch marker (`* ` or two spaces) in `git branch` output.
const MARKER_WIDTH: usize = 2;

/// Extracts the branch name from one line of `git branch -vv` output.
///
/// Lines look like `* master  34a234a [origin/master] subject`: the first two
/// characters are the current-branch marker and the name runs from there up
/// to the next space. Returns `None` when the line is too short, has no space
/// after the name, or the name would be empty.
pub fn extract_branch_name(line: &str) -> Option<&str> {
    let rest = line.get(MARKER_WIDTH..)?;
    let end = rest.find(' ')?;
    let name = &rest[..end];

    if name.is_empty() {
        None
    } else {
        Some(name)
    }
}

pub struct BranchManager<'a> {
    repo: &'a RepositoryPath,
}

impl<'a> BranchManager<'a> {
    pub fn new(repo: &'a RepositoryPath) -> Self {
        Self { repo }
    }

    /// Raw `git branch -vv` output including upstream tracking status.
    pub fn tracking_status(&self) -> Result<String> {
        execute_git_command(self.repo.as_path(), &["branch", "-vv"])
            .map_err(|e| match e {
                CleanupError::GitOperation { message } => CleanupError::status_query(message),
                other => other,
            })
    }

    pub fn delete_branch(&self, name: &str, force: bool) -> Result<()> {
        let flag = if force { "-D" } else { "-d" };

        let output = git_output(self.repo.as_path(), &["branch", flag, name])
            .map_err(|e| CleanupError::deletion(name, e.to_string()))?;

        if output.status.success() {
            Ok(())
        } else {
            Err(CleanupError::deletion(name, stderr_summary(&output.stderr)))
        }
    }
}
