//! Runtime options shared by the URL commands

use std::path::{Path, PathBuf};

use crate::cli::Cli;
use crate::url::DEFAULT_REMOTE;

/// Output format for resolved URLs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Bare URL on a single line
    #[default]
    Plain,
    /// JSON object with the URL and its parts
    Json,
}

/// Options resolved from global CLI flags and their environment fallbacks
#[derive(Debug, Clone)]
pub struct Config {
    /// Remote whose URL becomes the base URL
    pub remote: String,
    /// Directory repository discovery starts from, when not the target itself
    pub repository: Option<PathBuf>,
    pub output: OutputFormat,
    pub cwd: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            remote: DEFAULT_REMOTE.to_string(),
            repository: None,
            output: OutputFormat::Plain,
            cwd: PathBuf::from("."),
        }
    }
}

impl Config {
    pub fn from_cli(cli: &Cli, cwd: PathBuf) -> Self {
        let remote = cli
            .remote
            .as_deref()
            .map(str::trim)
            .filter(|remote| !remote.is_empty())
            .unwrap_or(DEFAULT_REMOTE)
            .to_string();

        Self {
            remote,
            repository: cli.repo.clone(),
            output: if cli.json {
                OutputFormat::Json
            } else {
                OutputFormat::Plain
            },
            cwd,
        }
    }

    /// Where discovery starts for `target`: `--repo` if given, else `target`
    pub fn discovery_root(&self, target: &Path) -> PathBuf {
        match &self.repository {
            Some(repository) => crate::path_utils::normalize_target(repository, &self.cwd),
            None => target.to_path_buf(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["ghopen", "blob", "src/lib.rs"]);
        let config = Config::from_cli(&cli, PathBuf::from("/work"));
        assert_eq!(config.remote, "origin");
        assert_eq!(config.output, OutputFormat::Plain);
        assert!(config.repository.is_none());
    }

    #[test]
    fn test_flags() {
        let cli = Cli::parse_from([
            "ghopen",
            "--remote",
            "upstream",
            "--json",
            "-C",
            "/repo",
            "blame",
            "a.rs",
        ]);
        let config = Config::from_cli(&cli, PathBuf::from("/work"));
        assert_eq!(config.remote, "upstream");
        assert_eq!(config.output, OutputFormat::Json);
        assert_eq!(config.repository, Some(PathBuf::from("/repo")));
    }

    #[test]
    fn test_blank_remote_falls_back_to_origin() {
        let cli = Cli::parse_from(["ghopen", "--remote", " ", "blob", "a.rs"]);
        let config = Config::from_cli(&cli, PathBuf::from("/work"));
        assert_eq!(config.remote, "origin");
    }

    #[test]
    fn test_discovery_root_defaults_to_target() {
        let config = Config::default();
        let target = Path::new("/repo/src/a.rs");
        assert_eq!(config.discovery_root(target), target.to_path_buf());
    }
}
