//! ghopen - resolve a local file position to its GitHub URL
//!
//! Given a file inside a git working copy, and optionally a selected line
//! range, builds the "blob" or "blame" URL of that file on the hosting
//! service, pinned to the commit HEAD currently resolves to.
//!
//! ```no_run
//! use std::path::Path;
//! use ghopen::selection::EditorSelection;
//!
//! let url = ghopen::build_file_url(
//!     Path::new("/home/me/widgets"),
//!     Path::new("/home/me/widgets/lib/x.go"),
//!     Some(&EditorSelection::range(10, 20)),
//! )?;
//! // https://github.com/acme/widgets/blob/<commit>/lib/x.go#L10-L20
//! println!("{url}");
//! # Ok::<(), ghopen::error::GhopenError>(())
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod path_utils;
pub mod remote;
pub mod repository;
pub mod selection;
pub mod url;

pub use error::{GhopenError, Result};
pub use repository::{RepositoryHandle, RepositoryView, can_link, is_inside_repository};
pub use selection::EditorSelection;
pub use url::{ResolvedFileUrl, UrlBuilder, UrlKind, build_blame_url, build_file_url};
