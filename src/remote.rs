//! Remote URL normalization
//!
//! Turns the raw URL configured for a remote into the HTTPS base URL of the
//! repository on its hosting service:
//! - `git@github.com:owner/repo.git` -> `https://github.com/owner/repo`
//! - `ssh://git@github.com:22/owner/repo` -> `https://github.com/owner/repo`
//! - `https://user@github.com/owner/repo.git` -> `https://github.com/owner/repo`

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{GhopenError, Result};

/// `git@<host>:<owner>/<repo>`, deeper paths land in the owner group.
#[allow(clippy::expect_used)]
static SSH_SHORTHAND: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^git@(.+):(.+)/(.+)$").expect("valid regex")
});

/// `ssh://[user@]host[:port]/path`, also `git+ssh://` and `git://`.
#[allow(clippy::expect_used)]
static SSH_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:ssh|git\+ssh|git)://(?:[^@/]+@)?([^/:]+)(?::\d*)?/+(.+)$")
        .expect("valid regex")
});

/// Userinfo segment of an HTTP(S) URL.
#[allow(clippy::expect_used)]
static USERINFO: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(https?://)[^@/]+@").expect("valid regex")
});

#[allow(clippy::expect_used)]
static CANONICAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^https://[^/@:]+/[^/]+/[^/]+$").expect("valid regex")
});

/// HTTPS base URL of a hosted repository.
///
/// Normally `https://<host>/<owner>/<repo>`. Remotes in a form the normalizer
/// does not recognize are kept best-effort; see [`CanonicalRemoteUrl::is_canonical`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalRemoteUrl(String);

impl CanonicalRemoteUrl {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the URL has exactly the `https://<host>/<owner>/<repo>` shape
    pub fn is_canonical(&self) -> bool {
        CANONICAL.is_match(&self.0)
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for CanonicalRemoteUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for CanonicalRemoteUrl {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Normalize the raw URL of `remote` into its web base URL.
///
/// Surrounding whitespace is ignored. Steps then run in order: strip a `.git`
/// suffix, rewrite SSH forms to HTTPS, drop userinfo, trim trailing slashes.
/// A trailing slash therefore keeps a `.git` suffix. Suffix stripping runs before the SSH
/// rewrite so `git@host:owner/repo.git` normalizes cleanly, and userinfo
/// stripping runs after it so HTTPS URLs produced by the rewrite are covered.
///
/// # Errors
///
/// Returns [`GhopenError::MissingRemote`] when `raw` is empty.
pub fn normalize(raw: &str, remote: &str) -> Result<CanonicalRemoteUrl> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(GhopenError::MissingRemote {
            remote: remote.to_string(),
        });
    }

    let url = strip_git_suffix(trimmed);
    let url = rewrite_ssh(url);
    let url = USERINFO.replace(&url, "$1");
    let url = url.trim_end_matches('/');

    Ok(CanonicalRemoteUrl(url.to_string()))
}

/// Strip exactly one trailing `.git`, compared case-insensitively.
fn strip_git_suffix(url: &str) -> &str {
    let Some(split) = url.len().checked_sub(4) else {
        return url;
    };
    match url.get(split..) {
        Some(suffix) if suffix.eq_ignore_ascii_case(".git") => &url[..split],
        _ => url,
    }
}

fn rewrite_ssh(url: &str) -> String {
    if let Some(caps) = SSH_SHORTHAND.captures(url) {
        return format!("https://{}/{}/{}", &caps[1], &caps[2], &caps[3]);
    }
    if let Some(caps) = SSH_URL.captures(url) {
        return format!("https://{}/{}", &caps[1], &caps[2]);
    }
    url.to_string()
}
