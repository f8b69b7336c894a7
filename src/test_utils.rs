pub mod mock_git;

pub mod test_helpers {
    use crate::config::Config;
    use crate::core::git::RepositoryPath;
    use std::fs;
    use std::path::Path;
    use std::process::Command;
    use tempfile::TempDir;

    pub use super::mock_git::MockGitOperations;

    pub const SAMPLE_STATUS: &str = "\
* master    34a234a [origin/master] Merged some features
  feature/1 34a234a [origin/feature/1: gone] Implemented endpoints
  feature/2 3fc2e37 [origin/feature/2: behind 71] Added CLI command
";

    pub fn create_test_config() -> Config {
        crate::config::defaults::default_config()
    }

    pub fn git(repo_path: &Path, args: &[&str]) {
        let output = Command::new("git")
            .current_dir(repo_path)
            .args(args)
            .output()
            .expect("Failed to run git");

        assert!(
            output.status.success(),
            "git {} failed: {}",
            args.join(" "),
            String::from_utf8_lossy(&output.stderr)
        );
    }

    pub fn init_repo(repo_path: &Path) {
        git(repo_path, &["init", "--initial-branch=main"]);
        git(repo_path, &["config", "user.name", "Test User"]);
        git(repo_path, &["config", "user.email", "test@example.com"]);
        git(repo_path, &["config", "commit.gpgsign", "false"]);

        fs::write(repo_path.join("README.md"), "# Test Repository")
            .expect("Failed to write README");
        git(repo_path, &["add", "README.md"]);
        git(repo_path, &["commit", "-m", "Initial commit"]);
    }

    pub fn setup_test_repo() -> (TempDir, RepositoryPath) {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        init_repo(temp_dir.path());

        let repo = RepositoryPath::new(temp_dir.path());
        (temp_dir, repo)
    }

    /// A working repository whose `origin` is a bare repository on disk.
    /// Returns `(remote_dir, work_dir, repo)`.
    pub fn setup_repo_with_remote() -> (TempDir, TempDir, RepositoryPath) {
        let remote_dir = TempDir::new().expect("Failed to create remote dir");
        git(remote_dir.path(), &["init", "--bare", "--initial-branch=main"]);

        let (work_dir, repo) = setup_test_repo();
        let remote_path = remote_dir.path().to_string_lossy().to_string();
        git(repo.as_path(), &["remote", "add", "origin", &remote_path]);
        git(repo.as_path(), &["push", "-u", "origin", "main"]);

        (remote_dir, work_dir, repo)
    }

    /// Commits on a new branch without merging it back, leaving `main` checked out.
    pub fn create_unmerged_branch(repo: &RepositoryPath, name: &str) {
        let path = repo.as_path();
        git(path, &["checkout", "-b", name]);

        let file_name = format!("{}.txt", name.replace('/', "-"));
        fs::write(path.join(&file_name), name).expect("Failed to write branch file");
        git(path, &["add", &file_name]);
        git(path, &["commit", "-m", &format!("Work on {}", name)]);
        git(path, &["checkout", "main"]);
    }

    /// Pushes the branch with upstream tracking, then deletes it on the remote.
    pub fn make_gone(repo: &RepositoryPath, name: &str) {
        let path = repo.as_path();
        git(path, &["push", "-u", "origin", name]);
        git(path, &["push", "origin", "--delete", name]);
    }

    pub fn create_gone_branch(repo: &RepositoryPath, name: &str) {
        git(repo.as_path(), &["branch", name]);
        make_gone(repo, name);
    }

    pub fn create_gone_unmerged_branch(repo: &RepositoryPath, name: &str) {
        create_unmerged_branch(repo, name);
        make_gone(repo, name);
    }

    pub fn output_string(buf: Vec<u8>) -> String {
        String::from_utf8(buf).expect("report output should be UTF-8")
    }
}
