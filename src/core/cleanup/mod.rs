//! Gone-branch cleanup across one or more repositories.
//!
//! Discovery failures and an empty discovery result abort the run. Everything
//! after that is isolated: a repository whose status query fails is reported
//! and skipped, and a branch that fails to delete is reported as failed.

use crate::core::discovery::locate_repositories;
use crate::core::git::GitOperations;
use crate::utils::{CleanupError, Result};
use std::io::Write;
use std::path::Path;

pub mod cleaner;
pub mod exclusion;
pub mod filter;
pub mod options;
pub mod outcome;
pub mod reporter;

pub use cleaner::BranchCleaner;
pub use exclusion::{is_excluded, ExclusionPolicy};
pub use filter::BranchFilter;
pub use options::CleanupOptions;
pub use outcome::{BranchOutcome, DeletionOutcome, RepositoryReport};
pub use reporter::CleanupReporter;

pub fn run<W: Write>(
    root: &Path,
    options: &CleanupOptions,
    git: &dyn GitOperations,
    out: W,
) -> Result<()> {
    let repositories = locate_repositories(root, options.has_multiple_repos)?;
    if repositories.is_empty() {
        return Err(CleanupError::no_repository(root));
    }

    let cleaner = BranchCleaner::new(git, options);
    let mut reporter = CleanupReporter::new(out);

    for repo in &repositories {
        match cleaner.process_repository(repo) {
            Ok(report) => reporter.show_results(&report)?,
            Err(e) => {
                tracing::warn!(repository = %repo, error = %e, "skipping repository");
                reporter.show_error(repo, &e)?;
            }
        }
    }

    Ok(())
}
