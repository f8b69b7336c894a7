use crate::config::Config;
use crate::core::cleanup::{BranchFilter, CleanupOptions, ExclusionPolicy};
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "cleanup")]
#[command(about = "💫 Remove gone Git branches with ease.")]
#[command(version)]
pub struct Cli {
    /// Print debug diagnostics to stderr
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Delete local branches that are gone on the remote
    Branches(BranchesArgs),
    /// Generate shell completion script
    Completion(CompletionArgs),
    /// Show or reset the configuration file
    Config(ConfigArgs),
}

#[derive(Args, Debug)]
#[command(after_help = "EXAMPLES:
    # Delete gone branches in one repository
    cleanup branches ~/src/app

    # Preview gone branches in every repository under ~/src
    cleanup branches ~/src --has-multiple-repos --dry-run

    # Keep some branches no matter what
    cleanup branches . --exclude \"develop, release\"

    # Select branches by arbitrary status text instead of goneness
    cleanup branches . --matching \"behind\" --dry-run")]
pub struct BranchesArgs {
    /// Repository, or directory of repositories with --has-multiple-repos
    pub path: PathBuf,

    /// Also clean repositories in direct subdirectories
    #[arg(long, short = 'm', help = "Delete branches in sub-repositories")]
    pub has_multiple_repos: bool,

    /// Delete with `git branch -D`
    #[arg(
        long,
        short = 'f',
        help = "Force the deletion, ignoring unmerged-work warnings"
    )]
    pub force: bool,

    /// Only report what would be deleted
    #[arg(long, short = 'd', help = "Preview the branches without deleting them")]
    pub dry_run: bool,

    /// Comma-separated branch names to keep
    #[arg(
        long,
        short = 'e',
        default_value = "",
        help = "Exclude one or more branches from deletion (comma-separated)"
    )]
    pub exclude: String,

    /// Select lines containing this text instead of gone branches
    #[arg(long, value_name = "TEXT")]
    pub matching: Option<String>,

    /// Select gone branches whose status line also contains this text
    #[arg(long, value_name = "TEXT")]
    pub gone_matching: Option<String>,
}

#[derive(Args, Debug)]
pub struct CompletionArgs {
    /// Shell to generate completion for
    #[arg(value_enum)]
    pub shell: Shell,
}

#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: Option<ConfigCommands>,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigCommands {
    /// Show current configuration
    Show,
    /// Print the configuration file path
    Path,
    /// Reset configuration to defaults
    Reset,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
}

impl BranchesArgs {
    pub fn validate(&self) -> crate::utils::Result<()> {
        if self.path.as_os_str().is_empty() {
            return Err(crate::utils::CleanupError::invalid_args(
                "Path cannot be empty",
            ));
        }
        Ok(())
    }

    /// Merges flags with the config file into the options for one run.
    pub fn to_options(&self, config: &Config) -> CleanupOptions {
        let exclusions = ExclusionPolicy::from_list(&self.exclude, config.primary_branch())
            .with_additional(config.excluded_branches());

        CleanupOptions {
            has_multiple_repos: self.has_multiple_repos,
            dry_run: self.dry_run,
            force: self.force,
            exclusions,
            filter: BranchFilter::new(self.matching.as_deref(), self.gone_matching.as_deref()),
        }
    }
}
