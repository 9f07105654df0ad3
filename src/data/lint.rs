//! Lint report types for commit message validation.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::validate::CommitValidationResult;

/// Complete lint report over a set of commit messages.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LintReport {
    /// Individual message results.
    pub commits: Vec<CommitLintResult>,
    /// Summary statistics.
    pub summary: LintSummary,
}

/// Result of linting a single commit message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommitLintResult {
    /// Commit hash, absent when linting a loose message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hash: Option<String>,
    /// First line of the message, for display.
    pub subject: String,
    /// The validation outcome.
    #[serde(flatten)]
    pub result: CommitValidationResult,
}

/// Summary statistics for a lint report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LintSummary {
    /// Total number of messages checked.
    pub total: usize,
    /// Number of messages with no errors.
    pub passing: usize,
    /// Number of messages with errors.
    pub failing: usize,
    /// Total number of errors found.
    pub error_count: usize,
    /// Total number of warnings found.
    pub warning_count: usize,
}

impl LintSummary {
    /// Creates a summary from a list of lint results.
    pub fn from_results(results: &[CommitLintResult]) -> Self {
        let total = results.len();
        let passing = results.iter().filter(|r| r.result.valid).count();
        let failing = total - passing;
        let error_count = results.iter().map(|r| r.result.errors.len()).sum();
        let warning_count = results.iter().map(|r| r.result.warnings.len()).sum();

        Self {
            total,
            passing,
            failing,
            error_count,
            warning_count,
        }
    }
}

impl LintReport {
    /// Creates a new lint report from per-message results.
    pub fn new(commits: Vec<CommitLintResult>) -> Self {
        let summary = LintSummary::from_results(&commits);
        Self { commits, summary }
    }

    /// Checks if the report has any errors.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.summary.error_count > 0
    }

    /// Checks if the report has any warnings.
    #[must_use]
    pub fn has_warnings(&self) -> bool {
        self.summary.warning_count > 0
    }

    /// Determines the process exit code for this report.
    ///
    /// Errors always fail with 1; warnings fail with 2 only under
    /// `--strict`.
    pub fn exit_code(&self, strict: bool) -> i32 {
        if self.has_errors() {
            1
        } else if strict && self.has_warnings() {
            2
        } else {
            0
        }
    }
}

/// Output format for lint results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text format.
    #[default]
    Text,
    /// JSON format.
    Json,
    /// YAML format.
    Yaml,
}

impl std::str::FromStr for OutputFormat {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "yaml" => Ok(OutputFormat::Yaml),
            _ => Err(()),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Yaml => write!(f, "yaml"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate::validate_commit_message;

    fn result_for(message: &str) -> CommitLintResult {
        CommitLintResult {
            hash: None,
            subject: message.lines().next().unwrap_or("").to_string(),
            result: validate_commit_message(message),
        }
    }

    #[test]
    fn summary_counts() {
        let results = vec![
            result_for("feat: add login"),
            result_for("bad message"),
            result_for("foo: add thing"),
        ];
        let summary = LintSummary::from_results(&results);
        assert_eq!(summary.total, 3);
        assert_eq!(summary.passing, 2);
        assert_eq!(summary.failing, 1);
        assert_eq!(summary.error_count, 1);
        assert_eq!(summary.warning_count, 1);
    }

    #[test]
    fn exit_code_errors_win() {
        let report = LintReport::new(vec![result_for("bad message")]);
        assert_eq!(report.exit_code(false), 1);
        assert_eq!(report.exit_code(true), 1);
    }

    #[test]
    fn exit_code_warnings_only_in_strict() {
        let report = LintReport::new(vec![result_for("foo: add thing")]);
        assert_eq!(report.exit_code(false), 0);
        assert_eq!(report.exit_code(true), 2);
    }

    #[test]
    fn exit_code_clean() {
        let report = LintReport::new(vec![result_for("feat: add login")]);
        assert_eq!(report.exit_code(false), 0);
        assert_eq!(report.exit_code(true), 0);
    }

    #[test]
    fn output_format_parsing() {
        assert_eq!("text".parse::<OutputFormat>(), Ok(OutputFormat::Text));
        assert_eq!("JSON".parse::<OutputFormat>(), Ok(OutputFormat::Json));
        assert_eq!("Yaml".parse::<OutputFormat>(), Ok(OutputFormat::Yaml));
        assert!("xml".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn report_serializes_to_json() {
        let report = LintReport::new(vec![result_for("feat: add login")]);
        let json = crate::data::to_json(&report).unwrap();
        assert!(json.contains("\"valid\": true"));
        assert!(json.contains("\"total\": 1"));
    }
}
