//! Git facade: repository queries through libgit2 and mutating operations
//! through the `git` binary.

use anyhow::{Context, Result};
use git2::Repository;

pub mod commit;
pub mod exec;
pub mod remote;
pub mod repository;

pub use commit::CommitInfo;
pub use exec::{git_run, GitCommandError};
pub use remote::{integration_branch, RemoteState};
pub use repository::GitRepository;

/// Number of hex characters to show in abbreviated commit hashes.
pub const SHORT_HASH_LEN: usize = 8;

/// Checks that the current directory is inside a git repository.
pub fn check_git_repo() -> Result<()> {
    Repository::open(".").context("Not in a git repository")?;
    Ok(())
}

/// Checks that the working directory has no uncommitted changes.
pub fn check_working_directory_clean() -> Result<()> {
    let repo = Repository::open(".").context("Failed to open git repository")?;

    let statuses = repo
        .statuses(None)
        .context("Failed to get repository status")?;

    if !statuses.is_empty() {
        anyhow::bail!(
            "Working directory is not clean. Commit or stash your changes before continuing."
        );
    }

    Ok(())
}
