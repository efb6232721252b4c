use std::path::PathBuf;

use git2::{DescribeFormatOptions, DescribeOptions, Repository};

use crate::domain::AppError;
use crate::ports::GitRepository;

/// Git adapter backed by libgit2, rooted at the project directory.
#[derive(Debug, Clone)]
pub struct Git2Repository {
    root: PathBuf,
}

impl Git2Repository {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    fn repo(&self) -> Result<Repository, AppError> {
        Repository::discover(&self.root).map_err(|e| AppError::GitError {
            command: "git2::Repository::discover".to_string(),
            details: e.to_string(),
        })
    }
}

impl GitRepository for Git2Repository {
    fn latest_tag(&self) -> Result<Option<String>, AppError> {
        let repo = self.repo()?;

        let mut options = DescribeOptions::new();
        options.describe_tags();

        let describe = match repo.describe(&options) {
            Ok(describe) => describe,
            // No tag reachable from HEAD, or no commits at all.
            Err(e)
                if e.code() == git2::ErrorCode::NotFound
                    || e.code() == git2::ErrorCode::UnbornBranch =>
            {
                return Ok(None);
            }
            Err(e) => {
                return Err(AppError::GitError {
                    command: "git2::Repository::describe".to_string(),
                    details: e.to_string(),
                });
            }
        };

        let mut format = DescribeFormatOptions::new();
        format.abbreviated_size(0);

        let tag = describe.format(Some(&format)).map_err(|e| AppError::GitError {
            command: "git2::Describe::format".to_string(),
            details: e.to_string(),
        })?;

        Ok(Some(tag))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::process::Command;
    use tempfile::TempDir;

    fn setup_repo() -> (TempDir, Git2Repository) {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path().to_path_buf();

        let output = Command::new("git")
            .arg("init")
            .current_dir(&root)
            .output()
            .expect("Failed to init git repo");
        assert!(output.status.success());

        Command::new("git")
            .args(["config", "user.name", "Test User"])
            .current_dir(&root)
            .output()
            .unwrap();
        Command::new("git")
            .args(["config", "user.email", "test@example.com"])
            .current_dir(&root)
            .output()
            .unwrap();

        fs::write(root.join("README.md"), "# Test").unwrap();
        Command::new("git").args(["add", "."]).current_dir(&root).output().unwrap();
        Command::new("git")
            .args(["commit", "-m", "Initial commit"])
            .current_dir(&root)
            .output()
            .unwrap();

        (temp_dir, Git2Repository::new(root))
    }

    fn tag(root: &std::path::Path, name: &str) {
        let output = Command::new("git").args(["tag", name]).current_dir(root).output().unwrap();
        assert!(output.status.success());
    }

    #[test]
    fn finds_the_tag_on_head() {
        let (dir, git) = setup_repo();
        tag(dir.path(), "v0.3.1");

        assert_eq!(git.latest_tag().unwrap(), Some("v0.3.1".to_string()));
    }

    #[test]
    fn finds_the_nearest_reachable_tag() {
        let (dir, git) = setup_repo();
        tag(dir.path(), "v0.3.0");

        fs::write(dir.path().join("CHANGELOG.md"), "- fix").unwrap();
        Command::new("git").args(["add", "."]).current_dir(dir.path()).output().unwrap();
        Command::new("git")
            .args(["commit", "-m", "Untagged follow-up"])
            .current_dir(dir.path())
            .output()
            .unwrap();

        assert_eq!(git.latest_tag().unwrap(), Some("v0.3.0".to_string()));
    }

    #[test]
    fn repo_without_tags_yields_none() {
        let (_dir, git) = setup_repo();
        assert_eq!(git.latest_tag().unwrap(), None);
    }

    #[test]
    fn missing_repository_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let git = Git2Repository::new(temp_dir.path().to_path_buf());

        let err = git.latest_tag().unwrap_err();
        assert!(matches!(err, AppError::GitError { .. }));
    }
}
