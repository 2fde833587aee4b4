//! ghopen - link a local file to its GitHub page

use clap::Parser;
use miette::Diagnostic;

use ghopen::cli::{Cli, Commands};
use ghopen::commands;
use ghopen::config::Config;
use ghopen::logging::init_logging;
use ghopen::url::UrlKind;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let cwd = match std::env::current_dir() {
        Ok(cwd) => cwd,
        Err(e) => {
            eprintln!("Error: cannot determine current directory: {e}");
            std::process::exit(1);
        }
    };
    let config = Config::from_cli(&cli, cwd);

    let result = match &cli.command {
        Commands::Blob(args) => commands::url::run(&config, UrlKind::Blob, args),
        Commands::Blame(args) => commands::url::run(&config, UrlKind::Blame, args),
        Commands::Check(args) => {
            if !commands::check::run(&config, args) {
                std::process::exit(1);
            }
            Ok(())
        }
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        if let Some(help) = e.help() {
            eprintln!("Help: {help}");
        }
        std::process::exit(1);
    }
}
