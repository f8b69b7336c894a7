use crate::core::git::{is_repository, RepositoryPath};
use crate::utils::error::{CleanupError, Result};
use std::fs;
use std::path::Path;

/// Finds the repositories to clean under `root`.
///
/// `root` itself comes first when it is a repository. With
/// `has_multiple_repos` the direct subdirectories that are repositories follow,
/// sorted by name. Nested repositories are not deduplicated, so a repository
/// root holding repository subdirectories yields all of them. An empty result
/// is returned as-is; deciding whether that is fatal is up to the caller.
pub fn locate_repositories(root: &Path, has_multiple_repos: bool) -> Result<Vec<RepositoryPath>> {
    let mut repositories = Vec::new();

    if is_repository(root)? {
        tracing::debug!(path = %root.display(), "root is a repository");
        repositories.push(RepositoryPath::new(root));
    }

    if !has_multiple_repos {
        return Ok(repositories);
    }

    let mut entries = fs::read_dir(root)
        .map_err(|e| CleanupError::access(root, e))?
        .collect::<std::io::Result<Vec<_>>>()
        .map_err(|e| CleanupError::access(root, e))?;
    entries.sort_by_key(|entry| entry.file_name());

    for entry in entries {
        let path = entry.path();
        let file_type = entry
            .file_type()
            .map_err(|e| CleanupError::access(&path, e))?;
        if !file_type.is_dir() {
            continue;
        }

        if is_repository(&path)? {
            tracing::debug!(path = %path.display(), "found sub-repository");
            repositories.push(RepositoryPath::new(path));
        }
    }

    Ok(repositories)
}
