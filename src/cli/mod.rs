//! CLI interface for git-prep.

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::git::{integration_branch, GitRepository, RemoteState};
use crate::utils::{Settings, INTEGRATION_BRANCH_VAR, REMOTE_VAR};

pub mod branch;
pub mod formatting;
pub mod lint;
pub mod ready;
pub mod sync;

pub use branch::{BranchCommand, CheckBranchCommand, NewBranchCommand};
pub use lint::LintCommand;
pub use ready::ReadyCommand;
pub use sync::SyncCommand;

/// git-prep: an opinionated Git workflow helper.
#[derive(Parser)]
#[command(name = "git-prep")]
#[command(about = "An opinionated Git workflow helper", long_about = None)]
#[command(version)]
pub struct Cli {
    /// The main command to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Main command categories.
#[derive(Subcommand)]
pub enum Commands {
    /// Branch operations.
    Branch(BranchCommand),
    /// Commit message operations.
    Commit(CommitCommand),
    /// Fetches and rebases the current branch onto the integration branch.
    Sync(SyncCommand),
    /// Checks whether the current branch is ready for a pull request.
    Ready(ReadyCommand),
}

/// Commit operations.
#[derive(Parser)]
pub struct CommitCommand {
    /// Commit subcommand to execute.
    #[command(subcommand)]
    pub command: CommitSubcommands,
}

/// Commit subcommands.
#[derive(Subcommand)]
pub enum CommitSubcommands {
    /// Lints commit messages against the Conventional Commits rules.
    Lint(LintCommand),
}

impl Cli {
    /// Executes the CLI command and returns the process exit code.
    pub fn execute(self) -> Result<i32> {
        match self.command {
            Commands::Branch(branch_cmd) => branch_cmd.execute(),
            Commands::Commit(commit_cmd) => commit_cmd.execute(),
            Commands::Sync(sync_cmd) => sync_cmd.execute(),
            Commands::Ready(ready_cmd) => ready_cmd.execute(),
        }
    }
}

impl CommitCommand {
    /// Executes the commit command.
    pub fn execute(self) -> Result<i32> {
        match self.command {
            CommitSubcommands::Lint(lint_cmd) => lint_cmd.execute(),
        }
    }
}

/// Resolves the remote name: explicit flag, then configuration, then
/// `origin`.
pub(crate) fn resolve_remote(flag: Option<&str>) -> String {
    if let Some(remote) = flag {
        return remote.to_string();
    }

    let settings = Settings::load().unwrap_or_default();
    settings
        .get_env_var(REMOTE_VAR)
        .unwrap_or_else(|| "origin".to_string())
}

/// Resolves the integration branch for a repository.
///
/// A configured override wins; otherwise the decision is made from the
/// gathered remote facts.
pub(crate) fn resolve_integration_branch(repo: &GitRepository, remote: &str) -> String {
    let settings = Settings::load().unwrap_or_default();
    if let Some(branch) = settings.get_env_var(INTEGRATION_BRANCH_VAR) {
        tracing::debug!("integration branch overridden by configuration: {branch}");
        return branch;
    }

    let state = RemoteState::gather(repo.repository(), remote);
    let branch = integration_branch(&state);
    tracing::debug!("detected integration branch: {branch}");
    branch
}

/// Resolves a revision for the integration branch that exists in the
/// repository, preferring the remote-tracking ref.
pub(crate) fn integration_base_rev(
    repo: &GitRepository,
    remote: &str,
    branch: &str,
) -> Option<String> {
    let remote_rev = format!("{remote}/{branch}");
    if repo.branch_exists(&remote_rev) {
        return Some(remote_rev);
    }
    if repo.branch_exists(branch) {
        return Some(branch.to_string());
    }
    None
}
