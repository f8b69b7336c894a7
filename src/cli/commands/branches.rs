use crate::cli::parser::BranchesArgs;
use crate::config::Config;
use crate::core::cleanup;
use crate::core::git::GitService;
use crate::utils::Result;
use std::io;

pub fn execute(config: Config, args: BranchesArgs) -> Result<()> {
    let options = args.to_options(&config);
    tracing::debug!(?options, path = %args.path.display(), "starting branch cleanup");

    let git = GitService::new();
    let stdout = io::stdout();
    cleanup::run(&args.path, &options, &git, stdout.lock())
}
