//! CLI definitions using clap derive API

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::error::{GhopenError, Result};
use crate::selection::EditorSelection;

/// ghopen - link a local file to its GitHub page
#[derive(Parser, Debug)]
#[command(
    name = "ghopen",
    author,
    version,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Resolve a local file and line range to its GitHub blob or blame URL",
    long_about = "ghopen finds the git repository enclosing a file, reads its remote URL, \
                  and prints the web URL of that file pinned to the current HEAD commit, \
                  optionally anchored to a line or line range.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n    \
                  ghopen blob src/main.rs\n    \
                  ghopen blob src/main.rs --start 10 --end 20\n    \
                  ghopen blame src/main.rs --lines 42\n    \
                  ghopen check src/main.rs"
)]
pub struct Cli {
    /// Remote whose URL is used as the base URL
    #[arg(long, global = true, env = "GHOPEN_REMOTE", value_name = "NAME")]
    pub remote: Option<String>,

    /// Start repository discovery from this directory instead of the file
    #[arg(long, short = 'C', global = true, value_name = "PATH")]
    pub repo: Option<PathBuf>,

    /// Print a JSON object instead of the bare URL
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the URL of a file at the current commit
    Blob(UrlArgs),

    /// Print the blame URL of a file at the current commit
    Blame(UrlArgs),

    /// Check whether a path is inside a git repository
    Check(CheckArgs),

    /// Show version information
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments shared by the blob and blame commands
#[derive(Parser, Debug, Clone)]
#[command(after_help = "EXAMPLES:\n  \
                  Link a whole file:\n    ghopen blob src/lib.rs\n\n\
                  Link a line range:\n    ghopen blob src/lib.rs --start 10 --end 20\n\n\
                  Same range, shorthand:\n    ghopen blob src/lib.rs --lines 10-20\n\n\
                  Use another remote:\n    ghopen blob src/lib.rs --remote upstream")]
pub struct UrlArgs {
    /// File to link (absolute or relative to the current directory)
    pub path: PathBuf,

    /// First selected line (1-based)
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub start: Option<u32>,

    /// Last selected line (1-based)
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub end: Option<u32>,

    /// Line or range as N or N-M
    #[arg(long, short = 'l', value_name = "N[-M]", conflicts_with_all = ["start", "end"])]
    pub lines: Option<String>,
}

impl UrlArgs {
    /// Selection described by `--lines` or `--start`/`--end`, if any
    pub fn selection(&self) -> Result<Option<EditorSelection>> {
        if let Some(lines) = &self.lines {
            return lines.parse().map(Some);
        }
        let selection = EditorSelection::new(self.start, self.end);
        Ok((!selection.is_empty()).then_some(selection))
    }
}

/// Arguments for the check command
#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Path to check
    pub path: PathBuf,
}

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    ghopen completions bash > ~/.bash_completion.d/ghopen\n\n\
                  Generate zsh completions:\n    ghopen completions zsh > ~/.zfunc/_ghopen\n\n\
                  Generate fish completions:\n    ghopen completions fish > ~/.config/fish/completions/ghopen.fish")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    pub shell: String,
}

impl CompletionsArgs {
    pub fn shell(&self) -> Result<clap_complete::Shell> {
        match self.shell.to_lowercase().as_str() {
            "bash" => Ok(clap_complete::Shell::Bash),
            "elvish" => Ok(clap_complete::Shell::Elvish),
            "fish" => Ok(clap_complete::Shell::Fish),
            "powershell" | "pwsh" => Ok(clap_complete::Shell::PowerShell),
            "zsh" => Ok(clap_complete::Shell::Zsh),
            _ => Err(GhopenError::UnknownShell {
                shell: self.shell.clone(),
            }),
        }
    }
}
