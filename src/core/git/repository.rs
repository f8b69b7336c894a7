use crate::utils::error::{CleanupError, Result};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

const GIT_DIR: &str = ".git";

/// Filesystem root of one repository found during discovery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryPath {
    root: PathBuf,
}

impl RepositoryPath {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn as_path(&self) -> &Path {
        &self.root
    }
}

impl fmt::Display for RepositoryPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.root.display())
    }
}

impl AsRef<Path> for RepositoryPath {
    fn as_ref(&self) -> &Path {
        &self.root
    }
}

/// A directory is a repository when it directly contains a `.git` directory.
/// Linked worktrees (where `.git` is a file) are not treated as repositories.
pub fn is_repository(path: &Path) -> Result<bool> {
    let entries = fs::read_dir(path).map_err(|e| CleanupError::access(path, e))?;

    for entry in entries {
        let entry = entry.map_err(|e| CleanupError::access(path, e))?;
        if entry.file_name() != GIT_DIR {
            continue;
        }

        let file_type = entry
            .file_type()
            .map_err(|e| CleanupError::access(&entry.path(), e))?;
        if file_type.is_dir() {
            return Ok(true);
        }
    }

    Ok(false)
}

/// Runs git inside `repo`; a non-zero exit status is not an error here.
pub fn git_output(repo: &Path, args: &[&str]) -> Result<Output> {
    Command::new("git")
        .current_dir(repo)
        .args(args)
        .output()
        .map_err(|e| CleanupError::git_operation(format!("Failed to execute git: {}", e)))
}

/// Runs git inside `repo` and returns stdout untouched.
///
/// Leading whitespace is significant for `git branch` output, so unlike most
/// callers of git this never trims.
pub fn execute_git_command(repo: &Path, args: &[&str]) -> Result<String> {
    let output = git_output(repo, args)?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(CleanupError::git_operation(format!(
            "Git command failed ({}): {}",
            args.join(" "),
            stderr.trim()
        )));
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

/// First non-blank line of git's stderr, trimmed. Git follows the actual
/// error with hint lines that are not part of it.
pub fn stderr_summary(stderr: &[u8]) -> String {
    String::from_utf8_lossy(stderr)
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .unwrap_or_default()
        .to_string()
}
