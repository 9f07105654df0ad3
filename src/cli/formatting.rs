//! Shared display formatting for CLI commands.
//!
//! Pure functions only, so every piece of console output is unit-testable.

use crate::validate::CommitValidationResult;

/// Truncates a commit hash to [`SHORT_HASH_LEN`](crate::git::SHORT_HASH_LEN) characters.
pub(crate) fn truncate_hash(hash: &str) -> &str {
    let len = crate::git::SHORT_HASH_LEN;
    if hash.len() > len {
        &hash[..len]
    } else {
        hash
    }
}

/// Returns an ANSI-colored severity label with fixed-width padding.
pub(crate) fn error_label() -> &'static str {
    "\x1b[31mERROR\x1b[0m  "
}

/// Returns the warning counterpart of [`error_label`].
pub(crate) fn warning_label() -> &'static str {
    "\x1b[33mWARNING\x1b[0m"
}

/// Returns an emoji icon representing a validation outcome.
///
/// - Clean results get a checkmark.
/// - Results with errors get a cross.
/// - Results with only warnings get a warning sign.
pub(crate) fn result_icon(result: &CommitValidationResult) -> &'static str {
    if !result.errors.is_empty() {
        "\u{274c}"
    } else if !result.warnings.is_empty() {
        "\u{26a0}\u{fe0f} "
    } else {
        "\u{2705}"
    }
}

/// Returns a pass/fail icon for a readiness checklist item.
pub(crate) fn check_icon(passed: bool) -> &'static str {
    if passed {
        "\u{2705}"
    } else {
        "\u{274c}"
    }
}

/// Formats one line of a lint report: icon, optional short hash, subject.
pub(crate) fn format_lint_line(
    icon: &str,
    hash: Option<&str>,
    subject: &str,
) -> String {
    match hash {
        Some(hash) => format!("{icon} {} - \"{subject}\"", truncate_hash(hash)),
        None => format!("{icon} \"{subject}\""),
    }
}

/// Formats the summary section of a lint report.
pub(crate) fn format_summary(summary: &crate::data::LintSummary) -> String {
    format!(
        "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━\n\
         Summary: {} messages checked\n\
         \x20 {} errors, {} warnings\n\
         \x20 {} passed, {} with errors",
        summary.total,
        summary.error_count,
        summary.warning_count,
        summary.passing,
        summary.failing,
    )
}
