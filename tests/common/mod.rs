//! Common test utilities for ghopen integration tests

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use git2::{Repository, Signature};
use normpath::PathExt;
use tempfile::TempDir;

/// A git repository in a temporary directory
pub struct TestRepo {
    /// Temporary directory, removed on drop
    pub temp: TempDir,
    /// Normalized path to the working root
    pub path: PathBuf,
    pub repo: Repository,
}

impl TestRepo {
    /// Create an empty repository with no remote and no commits
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let repo = Repository::init(temp.path()).expect("Failed to init repository");
        let path = temp
            .path()
            .normalize()
            .expect("Failed to normalize temp path")
            .into_path_buf();
        Self { temp, path, repo }
    }

    /// Repository with `origin` set to `url` and one commit containing `lib/x.go`
    pub fn with_origin(url: &str) -> Self {
        let test_repo = Self::new();
        test_repo.add_remote("origin", url);
        test_repo.commit_file("lib/x.go", "package x\n");
        test_repo
    }

    pub fn add_remote(&self, name: &str, url: &str) {
        self.repo.remote(name, url).expect("Failed to add remote");
    }

    /// Write `path` and commit it on top of HEAD, returning the commit id
    pub fn commit_file(&self, path: &str, content: &str) -> String {
        self.write_file(path, content);

        let mut index = self.repo.index().expect("Failed to open index");
        index
            .add_path(Path::new(path))
            .expect("Failed to add file to index");
        index.write().expect("Failed to write index");
        let tree_id = index.write_tree().expect("Failed to write tree");
        let tree = self.repo.find_tree(tree_id).expect("Failed to find tree");
        let sig = Signature::now("Test", "test@example.com").expect("Failed to create signature");

        let parent = self.repo.head().ok().and_then(|h| h.peel_to_commit().ok());
        let parents: Vec<&git2::Commit<'_>> = parent.iter().collect();
        self.repo
            .commit(Some("HEAD"), &sig, &sig, &format!("add {path}"), &tree, &parents)
            .expect("Failed to commit")
            .to_string()
    }

    /// Write a file in the working copy without committing it
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    pub fn head(&self) -> String {
        self.repo
            .head()
            .and_then(|h| h.peel_to_commit())
            .map(|c| c.id().to_string())
            .expect("Repository has no HEAD commit")
    }
}

/// Command for the ghopen binary, isolated from the caller's environment
#[allow(deprecated)]
pub fn ghopen_cmd() -> Command {
    let mut cmd = Command::cargo_bin("ghopen").expect("ghopen binary should be built");
    cmd.env_remove("GHOPEN_REMOTE").env_remove("RUST_LOG");
    cmd
}

/// ghopen command running inside `dir`
pub fn ghopen_cmd_in(dir: &Path) -> Command {
    let mut cmd = ghopen_cmd();
    cmd.current_dir(dir);
    cmd
}
