//! Check command implementation

use crate::cli::CheckArgs;
use crate::config::Config;
use crate::path_utils::normalize_target;
use crate::repository::can_link;

/// Report whether a URL can be built for the path; the result is the exit status
pub fn run(config: &Config, args: &CheckArgs) -> bool {
    let target = normalize_target(&args.path, &config.cwd);
    let linkable = can_link(&config.discovery_root(&target), &target);
    println!("{linkable}");
    linkable
}
