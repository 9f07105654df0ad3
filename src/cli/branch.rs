//! Branch commands: create a validated branch, or just check a name.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use super::formatting;
use crate::git::GitRepository;
use crate::validate::validate_branch_name;

/// Branch operations.
#[derive(Parser)]
pub struct BranchCommand {
    /// Branch subcommand to execute.
    #[command(subcommand)]
    pub command: BranchSubcommands,
}

/// Branch subcommands.
#[derive(Subcommand)]
pub enum BranchSubcommands {
    /// Creates a new branch with a validated name.
    New(NewBranchCommand),
    /// Validates a branch name without touching the repository.
    Check(CheckBranchCommand),
}

impl BranchCommand {
    /// Executes the branch command.
    pub fn execute(self) -> Result<i32> {
        match self.command {
            BranchSubcommands::New(new_cmd) => new_cmd.execute(),
            BranchSubcommands::Check(check_cmd) => check_cmd.execute(),
        }
    }
}

/// Options for creating a new branch.
#[derive(Parser)]
pub struct NewBranchCommand {
    /// Name of the branch to create.
    #[arg(value_name = "NAME")]
    pub name: String,

    /// Base revision to branch from (defaults to the integration branch).
    #[arg(long, value_name = "BASE")]
    pub from: Option<String>,

    /// Remote used for integration-branch detection.
    #[arg(long, value_name = "REMOTE")]
    pub remote: Option<String>,

    /// Creates the branch without checking it out.
    #[arg(long)]
    pub no_switch: bool,
}

impl NewBranchCommand {
    /// Validates the name, resolves the base and creates the branch.
    pub fn execute(self) -> Result<i32> {
        let verdict = validate_branch_name(&self.name);
        if !verdict.valid {
            let reason = verdict.error.as_deref().unwrap_or("invalid branch name");
            eprintln!("{} {} {}", formatting::check_icon(false), formatting::error_label(), reason);
            return Ok(1);
        }

        let repo = GitRepository::open()
            .context("Failed to open git repository. Make sure you're in a git repository.")?;

        if repo.branch_exists(&self.name) {
            anyhow::bail!("Branch '{}' already exists", self.name);
        }

        // Switching would clobber uncommitted work; creating in place is safe.
        if !self.no_switch {
            crate::git::check_working_directory_clean()?;
        }

        let base = self.resolve_base(&repo)?;

        repo.create_branch(&self.name, &base, !self.no_switch)?;

        if self.no_switch {
            println!(
                "{} Created branch '{}' from '{base}'",
                formatting::check_icon(true),
                self.name
            );
        } else {
            println!(
                "{} Created and switched to branch '{}' (from '{base}')",
                formatting::check_icon(true),
                self.name
            );
        }

        Ok(0)
    }

    /// Resolves the base revision: `--from` if given, else the integration
    /// branch (remote-tracking ref preferred).
    fn resolve_base(&self, repo: &GitRepository) -> Result<String> {
        if let Some(base) = &self.from {
            if !repo.branch_exists(base) {
                anyhow::bail!("Base revision '{base}' does not exist");
            }
            return Ok(base.clone());
        }

        let remote = super::resolve_remote(self.remote.as_deref());
        let integration = super::resolve_integration_branch(repo, &remote);

        super::integration_base_rev(repo, &remote, &integration)
            .or_else(|| {
                // No integration branch anywhere; fall back to HEAD so a
                // fresh repository still works.
                repo.branch_exists("HEAD").then(|| "HEAD".to_string())
            })
            .with_context(|| {
                format!("Integration branch '{integration}' not found and repository has no HEAD")
            })
    }
}

/// Options for checking a branch name.
#[derive(Parser)]
pub struct CheckBranchCommand {
    /// Branch name to validate.
    #[arg(value_name = "NAME")]
    pub name: String,
}

impl CheckBranchCommand {
    /// Prints the validation verdict for the name.
    pub fn execute(self) -> Result<i32> {
        let verdict = validate_branch_name(&self.name);

        if verdict.valid {
            println!(
                "{} '{}' is a valid branch name",
                formatting::check_icon(true),
                self.name
            );
            Ok(0)
        } else {
            let reason = verdict.error.as_deref().unwrap_or("invalid branch name");
            println!("{} {reason}", formatting::check_icon(false));
            Ok(1)
        }
    }
}
