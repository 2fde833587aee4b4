//! Error types and handling for ghopen
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for ghopen operations
#[derive(Error, Diagnostic, Debug)]
pub enum GhopenError {
    // Repository errors
    #[error("Not in a git repository: {path}")]
    #[diagnostic(
        code(ghopen::repository::not_found),
        help("Run ghopen on a file inside a git working copy")
    )]
    NotARepository { path: String },

    #[error("Repository could not be opened at '{path}': {reason}")]
    #[diagnostic(code(ghopen::repository::access_failed))]
    RepositoryAccess { path: String, reason: String },

    #[error("Repository at '{path}' is bare and has no working directory")]
    #[diagnostic(code(ghopen::repository::bare))]
    BareRepository { path: String },

    #[error("Repository has no configured hosted remote '{remote}'")]
    #[diagnostic(
        code(ghopen::remote::missing),
        help("Add one with 'git remote add {remote} <url>' or pick another with --remote")
    )]
    MissingRemote { remote: String },

    #[error("Repository at '{path}' has no commits")]
    #[diagnostic(
        code(ghopen::repository::empty),
        help("Commit at least once so the URL can be pinned to a revision")
    )]
    EmptyRepository { path: String },

    // Path errors
    #[error("Path '{path}' is not inside repository root '{root}'")]
    #[diagnostic(code(ghopen::path::outside_repository))]
    PathOutsideRepository { path: String, root: String },

    // Argument errors
    #[error("Invalid line selection: {message}")]
    #[diagnostic(
        code(ghopen::selection::invalid),
        help("Use --lines N or --lines N-M with 1-based line numbers")
    )]
    InvalidSelection { message: String },

    #[error("Unknown shell: {shell}")]
    #[diagnostic(
        code(ghopen::cli::unknown_shell),
        help("Supported shells: bash, elvish, fish, powershell, zsh")
    )]
    UnknownShell { shell: String },

    // Output errors
    #[error("IO error: {message}")]
    #[diagnostic(code(ghopen::io))]
    Io { message: String },

    #[error("Failed to serialize output: {message}")]
    #[diagnostic(code(ghopen::output::json))]
    Json { message: String },
}

impl From<std::io::Error> for GhopenError {
    fn from(err: std::io::Error) -> Self {
        GhopenError::Io {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for GhopenError {
    fn from(err: serde_json::Error) -> Self {
        GhopenError::Json {
            message: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, GhopenError>;
