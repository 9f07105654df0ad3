//! Ready command: PR-readiness checklist for the current branch.

use anyhow::{Context, Result};
use clap::Parser;

use super::formatting;
use crate::git::GitRepository;
use crate::validate::{validate_branch_name, validate_commit_message};

/// Ready command options.
#[derive(Parser)]
pub struct ReadyCommand {
    /// Treats warnings as failures (exit code 2).
    #[arg(long)]
    pub strict: bool,

    /// Remote used for integration-branch detection.
    #[arg(long, value_name = "REMOTE")]
    pub remote: Option<String>,
}

/// Outcome of one checklist item.
struct Check {
    label: String,
    passed: bool,
    warnings: usize,
}

impl ReadyCommand {
    /// Runs the readiness checklist and returns the process exit code.
    pub fn execute(self) -> Result<i32> {
        let repo = GitRepository::open()
            .context("Failed to open git repository. Make sure you're in a git repository.")?;

        let current = repo.current_branch()?;
        let remote = super::resolve_remote(self.remote.as_deref());
        let integration = super::resolve_integration_branch(&repo, &remote);

        println!("🔍 Checking whether '{current}' is ready for a pull request...");
        println!();

        let mut checks = Vec::new();

        // 1. Branch name follows the naming scheme.
        let name_verdict = validate_branch_name(&current);
        checks.push(Check {
            label: match &name_verdict.error {
                None => format!("Branch name '{current}' is valid"),
                Some(e) => e.clone(),
            },
            passed: name_verdict.valid,
            warnings: 0,
        });

        // 2. Working directory is clean.
        let wd = repo.working_directory_status()?;
        checks.push(Check {
            label: if wd.clean {
                "Working directory is clean".to_string()
            } else {
                format!(
                    "Working directory has {} uncommitted change(s)",
                    wd.changes.len()
                )
            },
            passed: wd.clean,
            warnings: 0,
        });

        // 3 & 4. Commits ahead of the integration branch, all lint-clean.
        match super::integration_base_rev(&repo, &remote, &integration) {
            None => {
                checks.push(Check {
                    label: format!("Integration branch '{integration}' not found"),
                    passed: false,
                    warnings: 0,
                });
            }
            Some(base) => {
                let commits = repo.commits_ahead_of(&base, "HEAD")?;
                checks.push(Check {
                    label: format!("{} commit(s) ahead of {base}", commits.len()),
                    passed: !commits.is_empty(),
                    warnings: 0,
                });

                let mut failing = 0;
                let mut warnings = 0;
                for commit in &commits {
                    let verdict = validate_commit_message(&commit.message);
                    if !verdict.valid {
                        failing += 1;
                    }
                    warnings += verdict.warnings.len();
                }
                checks.push(Check {
                    label: if failing == 0 {
                        format!("All {} commit message(s) pass lint", commits.len())
                    } else {
                        format!("{failing} commit message(s) fail lint")
                    },
                    passed: failing == 0,
                    warnings,
                });

                // 5. Not behind the integration branch (advisory only).
                let (_, behind) = repo.ahead_behind("HEAD", &base)?;
                checks.push(Check {
                    label: if behind == 0 {
                        format!("Up to date with {base}")
                    } else {
                        format!("{behind} commit(s) behind {base}; consider running sync")
                    },
                    passed: true,
                    warnings: usize::from(behind > 0),
                });
            }
        }

        let mut failures = 0;
        let mut warnings = 0;
        for check in &checks {
            let icon = if check.passed && check.warnings > 0 {
                "\u{26a0}\u{fe0f} "
            } else {
                formatting::check_icon(check.passed)
            };
            println!("  {icon} {}", check.label);
            if !check.passed {
                failures += 1;
            }
            warnings += check.warnings;
        }

        println!();

        if failures > 0 {
            println!(
                "{} '{current}' is not ready: {failures} check(s) failed",
                formatting::check_icon(false)
            );
            return Ok(1);
        }

        if warnings > 0 {
            println!(
                "{} '{current}' is ready, with {warnings} warning(s)",
                formatting::check_icon(true)
            );
            return Ok(if self.strict { 2 } else { 0 });
        }

        println!("{} '{current}' is ready", formatting::check_icon(true));
        Ok(0)
    }
}
