//! Repository discovery
//!
//! Finds the git repository enclosing a path and exposes the three pieces of
//! metadata a URL is built from: the working root, config values (the remote
//! URL) and the commit HEAD points to.
//!
//! A [`RepositoryHandle`] is opened for a single query and dropped right
//! after; [`with_repository`] scopes that lifetime so the underlying libgit2
//! handle is released on every exit path.

use std::path::{Path, PathBuf};

use git2::{ErrorCode, Repository};
use normpath::PathExt;

use crate::error::{GhopenError, Result};
use crate::path_utils::resolve_relative_path;

/// Read-only view of a discovered repository
pub trait RepositoryView {
    /// Top-level directory of the checked-out content
    fn working_root(&self) -> &Path;

    /// Read a config value such as `remote.origin.url`, `None` when unset
    fn config_value(&self, key: &str) -> Result<Option<String>>;

    /// Id of the commit HEAD resolves to, `None` when there are no commits
    fn most_recent_commit_id(&self) -> Result<Option<String>>;
}

/// A discovered, non-bare git repository
pub struct RepositoryHandle {
    repo: Repository,
    working_root: PathBuf,
}

impl std::fmt::Debug for RepositoryHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RepositoryHandle")
            .field("working_root", &self.working_root)
            .finish_non_exhaustive()
    }
}

impl RepositoryHandle {
    /// Locate the repository enclosing `path`.
    ///
    /// `path` need not exist. Returns `Ok(None)` when no repository is found
    /// before the file-system root.
    ///
    /// # Errors
    ///
    /// Returns [`GhopenError::RepositoryAccess`] when repository metadata is
    /// present but cannot be read, and [`GhopenError::BareRepository`] when
    /// the repository has no working directory.
    pub fn locate(path: &Path) -> Result<Option<Self>> {
        let Some(start) = nearest_existing_ancestor(discovery_start(path)) else {
            tracing::debug!(path = %path.display(), "no existing ancestor");
            return Ok(None);
        };

        let repo = match Repository::discover(start) {
            Ok(repo) => repo,
            Err(e) if e.code() == ErrorCode::NotFound => {
                tracing::debug!(path = %start.display(), "no repository found");
                return Ok(None);
            }
            Err(e) => {
                return Err(GhopenError::RepositoryAccess {
                    path: start.display().to_string(),
                    reason: e.message().to_string(),
                });
            }
        };

        let Some(workdir) = repo.workdir() else {
            return Err(GhopenError::BareRepository {
                path: repo.path().display().to_string(),
            });
        };

        // Resolve symlinks so callers' normalized paths share the prefix
        // (macOS /var -> /private/var)
        let working_root = workdir
            .normalize()
            .map(|np| np.into_path_buf())
            .unwrap_or_else(|_| workdir.to_path_buf());

        tracing::debug!(root = %working_root.display(), "discovered repository");

        Ok(Some(Self { repo, working_root }))
    }

    fn access_error(&self, err: &git2::Error) -> GhopenError {
        GhopenError::RepositoryAccess {
            path: self.working_root.display().to_string(),
            reason: err.message().to_string(),
        }
    }
}

impl RepositoryView for RepositoryHandle {
    fn working_root(&self) -> &Path {
        &self.working_root
    }

    fn config_value(&self, key: &str) -> Result<Option<String>> {
        let config = self.repo.config().map_err(|e| self.access_error(&e))?;
        match config.get_string(key) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.code() == ErrorCode::NotFound => Ok(None),
            Err(e) => Err(self.access_error(&e)),
        }
    }

    fn most_recent_commit_id(&self) -> Result<Option<String>> {
        let head = match self.repo.head() {
            Ok(head) => head,
            Err(e) if matches!(e.code(), ErrorCode::UnbornBranch | ErrorCode::NotFound) => {
                return Ok(None);
            }
            Err(e) => return Err(self.access_error(&e)),
        };

        let commit = head.peel_to_commit().map_err(|e| self.access_error(&e))?;
        Ok(Some(commit.id().to_string()))
    }
}

/// Directory discovery starts from: `path` itself when it is a directory
/// (possibly through a link), else its parent. A symlinked file is never
/// followed, so a link pointing outside the repository is still found inside it.
fn discovery_start(path: &Path) -> &Path {
    match path.parent() {
        Some(parent) if !path.is_dir() => parent,
        _ => path,
    }
}

/// Closest ancestor of `path` (itself included) that exists on disk
pub fn nearest_existing_ancestor(path: &Path) -> Option<&Path> {
    path.ancestors().find(|ancestor| ancestor.exists())
}

/// Run `f` against the repository enclosing `path`, releasing it afterwards.
///
/// # Errors
///
/// Returns [`GhopenError::NotARepository`] when no repository encloses
/// `path`, plus any error from [`RepositoryHandle::locate`] or `f`.
pub fn with_repository<T>(path: &Path, f: impl FnOnce(&RepositoryHandle) -> Result<T>) -> Result<T> {
    let handle = RepositoryHandle::locate(path)?.ok_or_else(|| GhopenError::NotARepository {
        path: path.display().to_string(),
    })?;
    f(&handle)
}

/// Whether `path` lies inside a usable (non-bare, readable) repository
pub fn is_inside_repository(path: &Path) -> bool {
    matches!(RepositoryHandle::locate(path), Ok(Some(_)))
}

/// Whether a URL can be built for `target` from the repository enclosing
/// `repository_root`: the repository must be usable and contain `target`.
pub fn can_link(repository_root: &Path, target: &Path) -> bool {
    match RepositoryHandle::locate(repository_root) {
        Ok(Some(handle)) => resolve_relative_path(handle.working_root(), target).is_ok(),
        _ => false,
    }
}
