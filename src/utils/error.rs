use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CleanupError {
    #[error("Cannot access {path}: {source}")]
    Access {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("No Git repository found at {path}")]
    NoRepository { path: String },

    #[error("Branch status query failed: {message}")]
    StatusQuery { message: String },

    #[error("{message}")]
    Deletion { branch: String, message: String },

    #[error("Git operation failed: {message}")]
    GitOperation { message: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid arguments: {message}")]
    InvalidArgs { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CleanupError>;

impl CleanupError {
    pub fn access(path: &Path, source: std::io::Error) -> Self {
        Self::Access {
            path: path.display().to_string(),
            source,
        }
    }

    pub fn no_repository(path: &Path) -> Self {
        Self::NoRepository {
            path: path.display().to_string(),
        }
    }

    pub fn status_query(message: impl Into<String>) -> Self {
        Self::StatusQuery {
            message: message.into(),
        }
    }

    pub fn deletion(branch: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Deletion {
            branch: branch.into(),
            message: message.into(),
        }
    }

    pub fn git_operation(message: impl Into<String>) -> Self {
        Self::GitOperation {
            message: message.into(),
        }
    }

    pub fn config_error(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    pub fn invalid_args(message: impl Into<String>) -> Self {
        Self::InvalidArgs {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation_helpers() {
        let git_err = CleanupError::git_operation("failed to list branches");
        assert!(matches!(git_err, CleanupError::GitOperation { .. }));
        assert_eq!(
            git_err.to_string(),
            "Git operation failed: failed to list branches"
        );

        let status_err = CleanupError::status_query("not a git repository");
        assert!(matches!(status_err, CleanupError::StatusQuery { .. }));
        assert_eq!(
            status_err.to_string(),
            "Branch status query failed: not a git repository"
        );

        let no_repo = CleanupError::no_repository(Path::new("/tmp/nothing"));
        assert_eq!(no_repo.to_string(), "No Git repository found at /tmp/nothing");
    }

    #[test]
    fn test_deletion_error_displays_git_detail_only() {
        let err = CleanupError::deletion(
            "feature/1",
            "error: the branch 'feature/1' is not fully merged",
        );
        assert_eq!(
            err.to_string(),
            "error: the branch 'feature/1' is not fully merged"
        );
        match err {
            CleanupError::Deletion { branch, .. } => assert_eq!(branch, "feature/1"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_access_error_keeps_source() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = CleanupError::access(Path::new("/root/secret"), io_err);
        assert!(err.to_string().starts_with("Cannot access /root/secret"));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: CleanupError = io_err.into();
        assert!(matches!(err, CleanupError::Io(_)));
    }
}
