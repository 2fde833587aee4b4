//! GitHub URL building
//!
//! Joins the pieces resolved from a repository into a blob or blame URL:
//!
//! ```text
//! <base>/<blob|blame>/<commit>/<path>[#<anchor>]
//! ```

use std::fmt;
use std::path::Path;

use serde::Serialize;

use crate::error::{GhopenError, Result};
use crate::path_utils::{normalize_target, resolve_relative_path};
use crate::remote::{self, CanonicalRemoteUrl};
use crate::repository::{RepositoryView, with_repository};
use crate::selection::{EditorSelection, format_anchor};

/// Remote read when none is configured
pub const DEFAULT_REMOTE: &str = "origin";

/// Which view of the file the URL opens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UrlKind {
    /// File content at a commit
    Blob,
    /// Per-line authorship at a commit
    Blame,
}

impl UrlKind {
    pub fn as_str(self) -> &'static str {
        match self {
            UrlKind::Blob => "blob",
            UrlKind::Blame => "blame",
        }
    }
}

impl fmt::Display for UrlKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A fully resolved file URL together with the parts it was built from
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedFileUrl {
    pub url: String,
    pub kind: UrlKind,
    pub remote: String,
    pub commit: String,
    pub path: String,
    pub anchor: String,
}

impl ResolvedFileUrl {
    fn compose(
        base: &CanonicalRemoteUrl,
        kind: UrlKind,
        commit: &str,
        path: &str,
        anchor: String,
    ) -> Self {
        let base = base.as_str().trim_end_matches('/');
        let commit = commit.trim_matches('/');
        let path = path.trim_matches('/');
        let url = format!("{base}/{kind}/{commit}/{path}{anchor}");

        Self {
            url,
            kind,
            remote: base.to_string(),
            commit: commit.to_string(),
            path: path.to_string(),
            anchor,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.url
    }
}

impl fmt::Display for ResolvedFileUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url)
    }
}

/// Builds file URLs against a repository view
pub struct UrlBuilder<'a, R: RepositoryView + ?Sized> {
    repository: &'a R,
    remote: &'a str,
}

impl<'a, R: RepositoryView + ?Sized> UrlBuilder<'a, R> {
    pub fn new(repository: &'a R) -> Self {
        Self {
            repository,
            remote: DEFAULT_REMOTE,
        }
    }

    /// Read the base URL from `remote` instead of `origin`
    #[must_use]
    pub fn remote(mut self, remote: &'a str) -> Self {
        self.remote = remote;
        self
    }

    /// Normalized web URL of the configured remote
    ///
    /// # Errors
    ///
    /// Returns [`GhopenError::MissingRemote`] when the remote has no URL.
    pub fn base_url(&self) -> Result<CanonicalRemoteUrl> {
        let key = format!("remote.{}.url", self.remote);
        let raw = self
            .repository
            .config_value(&key)?
            .ok_or_else(|| GhopenError::MissingRemote {
                remote: self.remote.to_string(),
            })?;

        let base = remote::normalize(&raw, self.remote)?;
        if base.is_canonical() {
            tracing::debug!(raw = %raw, base = %base, "normalized remote");
        } else {
            tracing::warn!(raw = %raw, base = %base, "remote is not in https://<host>/<owner>/<repo> form");
        }
        Ok(base)
    }

    /// Build a URL of `kind` for `target`.
    ///
    /// # Errors
    ///
    /// Fails with [`GhopenError::MissingRemote`], [`GhopenError::EmptyRepository`]
    /// or [`GhopenError::PathOutsideRepository`]; no partial URL is produced.
    pub fn build(
        &self,
        kind: UrlKind,
        target: &Path,
        selection: Option<&EditorSelection>,
    ) -> Result<ResolvedFileUrl> {
        let base = self.base_url()?;

        let root = self.repository.working_root();
        let commit =
            self.repository
                .most_recent_commit_id()?
                .ok_or_else(|| GhopenError::EmptyRepository {
                    path: root.display().to_string(),
                })?;
        tracing::debug!(commit = %commit, "resolved head commit");

        let path = resolve_relative_path(root, target)?;
        tracing::debug!(path = %path, "resolved repository path");

        let resolved =
            ResolvedFileUrl::compose(&base, kind, &commit, &path, format_anchor(selection));
        tracing::debug!(url = %resolved, "built {kind} url");
        Ok(resolved)
    }

    /// Build the blob URL for `target`.
    ///
    /// # Errors
    ///
    /// See [`UrlBuilder::build`].
    pub fn file_url(
        &self,
        target: &Path,
        selection: Option<&EditorSelection>,
    ) -> Result<ResolvedFileUrl> {
        self.build(UrlKind::Blob, target, selection)
    }

    /// Build the blame URL for `target`.
    ///
    /// # Errors
    ///
    /// See [`UrlBuilder::build`].
    pub fn blame_url(
        &self,
        target: &Path,
        selection: Option<&EditorSelection>,
    ) -> Result<ResolvedFileUrl> {
        self.build(UrlKind::Blame, target, selection)
    }
}

/// Discover the repository at `repository_root` and build a `kind` URL for
/// `file_path` using `remote`. The repository is released before returning.
///
/// `file_path`'s parent directory is normalized the same way the working root
/// is, so paths reached through a symlinked directory still resolve. A
/// relative `file_path` is taken relative to `repository_root`.
///
/// # Errors
///
/// Returns [`GhopenError::NotARepository`] when nothing encloses
/// `repository_root`, plus any error from [`UrlBuilder::build`].
pub fn build_url(
    kind: UrlKind,
    repository_root: &Path,
    file_path: &Path,
    selection: Option<&EditorSelection>,
    remote: &str,
) -> Result<ResolvedFileUrl> {
    let target = normalize_target(file_path, repository_root);
    with_repository(repository_root, |handle| {
        UrlBuilder::new(handle)
            .remote(remote)
            .build(kind, &target, selection)
    })
}

/// Blob URL for `file_path` inside the repository at `repository_root`.
///
/// # Errors
///
/// See [`build_url`].
pub fn build_file_url(
    repository_root: &Path,
    file_path: &Path,
    selection: Option<&EditorSelection>,
) -> Result<String> {
    build_url(
        UrlKind::Blob,
        repository_root,
        file_path,
        selection,
        DEFAULT_REMOTE,
    )
    .map(|resolved| resolved.url)
}

/// Blame URL for `file_path` inside the repository at `repository_root`.
///
/// # Errors
///
/// See [`build_url`].
pub fn build_blame_url(
    repository_root: &Path,
    file_path: &Path,
    selection: Option<&EditorSelection>,
) -> Result<String> {
    build_url(
        UrlKind::Blame,
        repository_root,
        file_path,
        selection,
        DEFAULT_REMOTE,
    )
    .map(|resolved| resolved.url)
}
