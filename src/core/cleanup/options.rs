use super::exclusion::ExclusionPolicy;
use super::filter::BranchFilter;

/// Everything one cleanup run needs, fixed before any repository is touched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanupOptions {
    pub has_multiple_repos: bool,
    pub dry_run: bool,
    /// Delete with `git branch -D`, dropping git's unmerged-work check.
    pub force: bool,
    pub exclusions: ExclusionPolicy,
    pub filter: BranchFilter,
}

impl CleanupOptions {
    pub fn new(primary_branch: &str) -> Self {
        Self {
            has_multiple_repos: false,
            dry_run: false,
            force: false,
            exclusions: ExclusionPolicy::new::<&str>(&[], primary_branch),
            filter: BranchFilter::Gone,
        }
    }
}
