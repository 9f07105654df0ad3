//! Sync command: fetch the remote and rebase onto the integration branch.

use anyhow::{Context, Result};
use clap::Parser;

use super::formatting;
use crate::git::{exec, GitRepository};

/// Sync command options.
#[derive(Parser)]
pub struct SyncCommand {
    /// Remote to fetch from (defaults to configuration, then origin).
    #[arg(long, value_name = "REMOTE")]
    pub remote: Option<String>,
}

impl SyncCommand {
    /// Fetches the remote and rebases the current branch.
    pub fn execute(self) -> Result<i32> {
        crate::git::check_git_repo()?;
        crate::git::check_working_directory_clean()?;

        let repo = GitRepository::open()?;
        let current = repo.current_branch()?;
        let remote = super::resolve_remote(self.remote.as_deref());

        println!("🔄 Fetching {remote}...");
        exec::fetch(&remote).with_context(|| format!("Failed to fetch remote '{remote}'"))?;

        let integration = super::resolve_integration_branch(&repo, &remote);
        let upstream = format!("{remote}/{integration}");

        if !repo.branch_exists(&upstream) {
            anyhow::bail!(
                "Integration branch '{upstream}' not found after fetch; \
                 is '{remote}' the right remote?"
            );
        }

        let (ahead, behind) = repo.ahead_behind("HEAD", &upstream)?;

        if behind == 0 {
            println!(
                "{} '{current}' is already up to date with {upstream} ({ahead} commits ahead)",
                formatting::check_icon(true)
            );
            return Ok(0);
        }

        println!("🔄 Rebasing '{current}' onto {upstream} ({behind} commits behind)...");
        exec::rebase_onto(&upstream).with_context(|| {
            format!(
                "Rebase onto {upstream} failed. Resolve conflicts and run \
                 'git rebase --continue', or abort with 'git rebase --abort'"
            )
        })?;

        println!(
            "{} '{current}' rebased onto {upstream}",
            formatting::check_icon(true)
        );

        Ok(0)
    }
}
