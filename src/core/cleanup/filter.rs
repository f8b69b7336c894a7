use crate::core::git::GONE_MARKER;

/// Selects which `git branch -vv` lines are deletion candidates.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum BranchFilter {
    /// Lines whose upstream is gone.
    #[default]
    Gone,
    /// Lines containing the text, gone or not.
    Matching(String),
    /// Gone lines that also contain the text.
    GoneMatching(String),
}

impl BranchFilter {
    /// A free-text `matching` wins over `gone_matching`; empty strings count
    /// as unset.
    pub fn new(matching: Option<&str>, gone_matching: Option<&str>) -> Self {
        let matching = matching.filter(|text| !text.is_empty());
        let gone_matching = gone_matching.filter(|text| !text.is_empty());

        match (matching, gone_matching) {
            (Some(text), _) => Self::Matching(text.to_string()),
            (None, Some(text)) => Self::GoneMatching(text.to_string()),
            (None, None) => Self::Gone,
        }
    }

    pub fn matches(&self, line: &str) -> bool {
        match self {
            Self::Gone => line.contains(GONE_MARKER),
            Self::Matching(text) => line.contains(text.as_str()),
            Self::GoneMatching(text) => line.contains(GONE_MARKER) && line.contains(text.as_str()),
        }
    }
}
