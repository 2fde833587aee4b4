//! Blob and blame command implementation

use crate::cli::UrlArgs;
use crate::config::{Config, OutputFormat};
use crate::error::Result;
use crate::path_utils::normalize_target;
use crate::url::{ResolvedFileUrl, UrlKind, build_url};

/// Run the blob or blame command and print the resolved URL
pub fn run(config: &Config, kind: UrlKind, args: &UrlArgs) -> Result<()> {
    let resolved = resolve(config, kind, args)?;
    println!("{}", render(&resolved, config.output)?);
    Ok(())
}

/// Resolve the URL for `args` without printing it
pub fn resolve(config: &Config, kind: UrlKind, args: &UrlArgs) -> Result<ResolvedFileUrl> {
    let selection = args.selection()?;
    let target = normalize_target(&args.path, &config.cwd);
    let root = config.discovery_root(&target);

    tracing::debug!(
        target = %target.display(),
        root = %root.display(),
        remote = %config.remote,
        "resolving {kind} url"
    );

    build_url(kind, &root, &target, selection.as_ref(), &config.remote)
}

/// Format a resolved URL for stdout
pub fn render(resolved: &ResolvedFileUrl, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Plain => Ok(resolved.url.clone()),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(resolved)?),
    }
}
