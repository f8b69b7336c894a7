/// Branch names that must never be deleted in one run.
///
/// Entries are trimmed and compared case-sensitively. The primary branch is
/// always protected, whatever the user excluded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExclusionPolicy {
    names: Vec<String>,
}

impl ExclusionPolicy {
    pub fn new<S: AsRef<str>>(exclude: &[S], primary_branch: &str) -> Self {
        let mut names: Vec<String> = exclude
            .iter()
            .map(|name| name.as_ref().trim().to_string())
            .collect();
        names.push(primary_branch.trim().to_string());

        Self { names }
    }

    /// Splits a comma-separated list such as `--exclude "develop, release"`.
    pub fn from_list(raw: &str, primary_branch: &str) -> Self {
        let exclude: Vec<&str> = raw.split(',').collect();
        Self::new(&exclude, primary_branch)
    }

    pub fn with_additional<S: AsRef<str>>(mut self, extra: &[S]) -> Self {
        self.names
            .extend(extra.iter().map(|name| name.as_ref().trim().to_string()));
        self
    }

    pub fn is_excluded(&self, branch: &str) -> bool {
        is_excluded(branch, &self.names)
    }

}

pub fn is_excluded<S: AsRef<str>>(branch: &str, exclude: &[S]) -> bool {
    exclude.iter().any(|e| e.as_ref().trim() == branch)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_match() {
        assert!(is_excluded("feature/1", &["feature/1"]));
        assert!(!is_excluded("feature/1", &["feature/10"]));
        assert!(!is_excluded("Feature/1", &["feature/1"]));
    }

    #[test]
    fn test_whitespace_tolerance() {
        assert!(is_excluded("feature/2", &[" feature/2"]));
        assert!(is_excluded("feature/2", &["feature/2 "]));
    }

    #[test]
    fn test_primary_branch_always_excluded() {
        let policy = ExclusionPolicy::new::<&str>(&[], "master");
        assert!(policy.is_excluded("master"));
        assert!(!policy.is_excluded("main"));
    }

    #[test]
    fn test_empty_raw_list_never_matches() {
        let policy = ExclusionPolicy::from_list("", "master");
        assert_eq!(policy, ExclusionPolicy::new(&[""], "master"));
        assert!(!policy.is_excluded("feature/1"));
    }

    #[test]
    fn test_comma_separated_list() {
        let policy = ExclusionPolicy::from_list("develop, release ,hotfix", "main");
        assert!(policy.is_excluded("develop"));
        assert!(policy.is_excluded("release"));
        assert!(policy.is_excluded("hotfix"));
        assert!(policy.is_excluded("main"));
        assert!(!policy.is_excluded("feature/1"));
    }

    #[test]
    fn test_with_additional() {
        let policy = ExclusionPolicy::from_list("develop", "main").with_additional(&[" staging"]);
        assert!(policy.is_excluded("staging"));
        assert!(policy.is_excluded("develop"));
    }
}
