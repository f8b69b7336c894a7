use crate::core::git::RepositoryPath;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeletionOutcome {
    Deleted,
    /// Dry run; nothing was executed.
    Preview,
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchOutcome {
    pub branch: String,
    pub outcome: DeletionOutcome,
}

/// Per-repository result, in the order branches appeared in `git branch -vv`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryReport {
    pub repository: RepositoryPath,
    pub outcomes: Vec<BranchOutcome>,
}

impl RepositoryReport {
    pub fn new(repository: RepositoryPath) -> Self {
        Self {
            repository,
            outcomes: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    pub fn contains(&self, branch: &str) -> bool {
        self.outcomes.iter().any(|o| o.branch == branch)
    }

    pub fn outcome_for(&self, branch: &str) -> Option<&DeletionOutcome> {
        self.outcomes
            .iter()
            .find(|o| o.branch == branch)
            .map(|o| &o.outcome)
    }

    pub(crate) fn record(&mut self, branch: impl Into<String>, outcome: DeletionOutcome) {
        self.outcomes.push(BranchOutcome {
            branch: branch.into(),
            outcome,
        });
    }
}
