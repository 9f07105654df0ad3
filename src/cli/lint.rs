//! Lint command: validates commit messages against the Conventional
//! Commits rules.

use anyhow::{Context, Result};
use clap::Parser;

use super::formatting;
use crate::data::{CommitLintResult, LintReport, OutputFormat};
use crate::git::GitRepository;
use crate::validate::validate_commit_message;

/// Lint command options.
#[derive(Parser)]
pub struct LintCommand {
    /// Literal commit message to lint. When omitted, commits are read from
    /// the repository instead.
    #[arg(value_name = "MESSAGE")]
    pub message: Option<String>,

    /// Reads the message to lint from a file (e.g. .git/COMMIT_EDITMSG).
    #[arg(long, value_name = "PATH", conflicts_with = "message")]
    pub file: Option<std::path::PathBuf>,

    /// Commit range to lint (e.g. main..HEAD). Defaults to commits ahead
    /// of the integration branch.
    #[arg(long, value_name = "COMMIT_RANGE", conflicts_with_all = ["message", "file"])]
    pub range: Option<String>,

    /// Remote used for integration-branch detection.
    #[arg(long, value_name = "REMOTE")]
    pub remote: Option<String>,

    /// Output format: text (default), json, yaml.
    #[arg(long, default_value = "text")]
    pub format: String,

    /// Exits with an error code when warnings are found, not just errors.
    #[arg(long)]
    pub strict: bool,

    /// Only shows failing messages, suppresses progress output.
    #[arg(long)]
    pub quiet: bool,

    /// Includes passing commits in the text output.
    #[arg(long)]
    pub show_passing: bool,
}

impl LintCommand {
    /// Executes the lint command and returns the process exit code.
    pub fn execute(self) -> Result<i32> {
        let output_format: OutputFormat = self.format.parse().unwrap_or(OutputFormat::Text);

        let results = self.collect_results(output_format)?;

        if results.is_empty() {
            eprintln!("error: no commits found to lint");
            return Ok(3);
        }

        let report = LintReport::new(results);
        self.output_report(&report, output_format)?;

        Ok(report.exit_code(self.strict))
    }

    /// Gathers lint results from the message, file or repository source.
    fn collect_results(&self, output_format: OutputFormat) -> Result<Vec<CommitLintResult>> {
        if let Some(message) = &self.message {
            return Ok(vec![lint_message(None, message)]);
        }

        if let Some(path) = &self.file {
            let message = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read message file: {}", path.display()))?;
            return Ok(vec![lint_message(None, &message)]);
        }

        let repo = GitRepository::open()
            .context("Failed to open git repository. Make sure you're in a git repository.")?;

        let commits = if let Some(range) = &self.range {
            repo.commits_in_range(range)?
        } else {
            let remote = super::resolve_remote(self.remote.as_deref());
            let integration = super::resolve_integration_branch(&repo, &remote);
            let base = super::integration_base_rev(&repo, &remote, &integration)
                .with_context(|| {
                    format!(
                        "Integration branch '{integration}' not found; \
                         pass --range to lint an explicit range"
                    )
                })?;

            if !self.quiet && output_format == OutputFormat::Text {
                println!("🔍 Linting commits ahead of {base}...");
            }

            repo.commits_ahead_of(&base, "HEAD")?
        };

        Ok(commits
            .iter()
            .map(|c| lint_message(Some(c.hash.clone()), &c.message))
            .collect())
    }

    /// Outputs the report in the selected format.
    fn output_report(&self, report: &LintReport, format: OutputFormat) -> Result<()> {
        match format {
            OutputFormat::Text => {
                self.output_text_report(report);
                Ok(())
            }
            OutputFormat::Json => {
                println!("{}", crate::data::to_json(report)?);
                Ok(())
            }
            OutputFormat::Yaml => {
                println!("{}", crate::data::to_yaml(report)?);
                Ok(())
            }
        }
    }

    /// Prints the human-readable report.
    fn output_text_report(&self, report: &LintReport) {
        println!();

        for entry in &report.commits {
            let clean = entry.result.valid && entry.result.warnings.is_empty();
            if clean && !self.show_passing {
                continue;
            }
            if self.quiet && entry.result.valid {
                continue;
            }

            let icon = formatting::result_icon(&entry.result);
            println!(
                "{}",
                formatting::format_lint_line(icon, entry.hash.as_deref(), &entry.subject)
            );

            for error in &entry.result.errors {
                println!("   {} {error}", formatting::error_label());
            }
            for warning in &entry.result.warnings {
                println!("   {} {warning}", formatting::warning_label());
            }

            println!();
        }

        println!("{}", formatting::format_summary(&report.summary));
    }
}

/// Lints one message into a report entry.
fn lint_message(hash: Option<String>, message: &str) -> CommitLintResult {
    CommitLintResult {
        hash,
        subject: message.lines().next().unwrap_or("").to_string(),
        result: validate_commit_message(message),
    }
}
