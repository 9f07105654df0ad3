//! Commit message validation against the Conventional Commits format.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Commit types accepted without a warning.
pub const VALID_TYPES: &[&str] = &[
    "feat", "fix", "docs", "style", "refactor", "test", "chore", "perf", "ci", "build", "revert",
];

/// Verbs the imperative-mood heuristic accepts as subject openers.
const IMPERATIVE_VERBS: &[&str] = &[
    "add",
    "update",
    "fix",
    "remove",
    "create",
    "delete",
    "implement",
    "refactor",
    "improve",
    "change",
];

/// Hard rejection threshold for the header line.
///
/// Note the asymmetry with the warning text below, which advertises the
/// 50-character guideline. This is deliberate: 50 is the soft target, 72
/// is where the check actually fires.
const HEADER_REJECT_LEN: usize = 72;

/// Soft length target for the subject.
const SUBJECT_SOFT_LEN: usize = 50;

/// Soft length target for the body.
const BODY_SOFT_LEN: usize = 1000;

/// Header pattern: `type(scope)!: subject` with the leading type token,
/// scope and `!` all optional; the `": "` separator and subject text are
/// mandatory.
///
/// An absent type is captured as empty and drawn into the unknown-type
/// warning rather than a format error. A whitespace-only subject still
/// matches and gets the more specific empty-subject error.
static HEADER_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<type>[A-Za-z]+)?(?:\((?P<scope>[^)]*)\))?(?P<breaking>!)?: (?P<subject>.+)$")
        .unwrap()
});

/// Result of validating a single commit message.
///
/// Errors block an operation; warnings are advisories and never affect
/// [`valid`](Self::valid).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitValidationResult {
    /// Whether the message passes all hard checks.
    pub valid: bool,
    /// Hard failures, in the order the checks ran.
    pub errors: Vec<String>,
    /// Soft advisories, in the order the checks ran.
    pub warnings: Vec<String>,
}

impl CommitValidationResult {
    fn from_parts(errors: Vec<String>, warnings: Vec<String>) -> Self {
        Self {
            valid: errors.is_empty(),
            errors,
            warnings,
        }
    }
}

/// Validates a raw commit message against the Conventional Commits rules.
///
/// The checks, in order:
///
/// 1. A trimmed-empty message is rejected outright.
/// 2. The header (first line) longer than 72 characters draws a warning.
/// 3. The header must match `<type>(<scope>): <subject>`, where only the
///    `": "` separator and subject are required; a mismatch is the only
///    error reported for the header (type/subject checks are skipped).
/// 4. An unknown or missing type draws a warning naming the offender.
/// 5. An empty subject is an error; a subject over 50 characters a warning.
/// 6. A subject not opening with an imperative verb draws a warning.
/// 7. A body over 1000 characters draws a warning.
pub fn validate_commit_message(message: &str) -> CommitValidationResult {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    if message.trim().is_empty() {
        errors.push("Commit message cannot be empty".to_string());
        return CommitValidationResult::from_parts(errors, warnings);
    }

    let mut lines = message.lines();
    let header = lines.next().unwrap_or("");
    let body = lines.collect::<Vec<_>>().join("\n");

    if header.chars().count() > HEADER_REJECT_LEN {
        warnings.push(format!(
            "Header is {} characters; keep the first line under {} characters",
            header.chars().count(),
            SUBJECT_SOFT_LEN
        ));
    }

    match HEADER_PATTERN.captures(header) {
        None => {
            errors.push(
                "Commit message must follow the format: <type>(<scope>): <subject>".to_string(),
            );
        }
        Some(caps) => {
            let commit_type = caps.name("type").map(|m| m.as_str()).unwrap_or("");
            let subject = caps.name("subject").map(|m| m.as_str()).unwrap_or("");

            // Case-sensitive: "FEAT" is not a standard type
            if !VALID_TYPES.contains(&commit_type) {
                warnings.push(format!(
                    "Type '{}' is not a standard type. Valid types: {}",
                    commit_type,
                    VALID_TYPES.join(", ")
                ));
            }

            if subject.trim().is_empty() {
                errors.push("Subject cannot be empty".to_string());
            } else {
                if subject.chars().count() > SUBJECT_SOFT_LEN {
                    warnings.push(format!(
                        "Subject is {} characters; consider a more concise summary ({} or fewer)",
                        subject.chars().count(),
                        SUBJECT_SOFT_LEN
                    ));
                }

                if !starts_with_imperative_verb(subject) {
                    warnings.push(
                        "Use the imperative mood in the subject (e.g. 'add' not 'added')"
                            .to_string(),
                    );
                }
            }
        }
    }

    if body.chars().count() > BODY_SOFT_LEN {
        warnings.push(format!(
            "Body is {} characters; consider splitting this into smaller commits",
            body.chars().count()
        ));
    }

    CommitValidationResult::from_parts(errors, warnings)
}

/// Returns whether the subject opens with one of the allow-listed verbs.
///
/// The first word must be the verb itself: "added" is not "add".
fn starts_with_imperative_verb(subject: &str) -> bool {
    let first_word = subject
        .split_whitespace()
        .next()
        .unwrap_or("")
        .to_lowercase();
    IMPERATIVE_VERBS.contains(&first_word.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    // --- empty input ---

    #[test]
    fn empty_message_single_error() {
        let result = validate_commit_message("");
        assert!(!result.valid);
        assert_eq!(result.errors, vec!["Commit message cannot be empty"]);
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn whitespace_only_message_is_empty() {
        let result = validate_commit_message("  \n\t  ");
        assert!(!result.valid);
        assert_eq!(result.errors, vec!["Commit message cannot be empty"]);
    }

    // --- format matching ---

    #[test]
    fn well_formed_message_passes_clean() {
        let result = validate_commit_message("feat(auth): add login functionality");
        assert!(result.valid);
        assert!(result.errors.is_empty());
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn missing_separator_is_format_error() {
        let result = validate_commit_message("add login functionality");
        assert!(!result.valid);
        assert_eq!(result.errors.len(), 1);
        assert!(result.errors[0].contains("<type>(<scope>): <subject>"));
    }

    #[test]
    fn format_error_skips_type_and_subject_checks() {
        // "added stuff" has no separator: only the format error, no
        // type/imperative warnings.
        let result = validate_commit_message("added stuff");
        assert_eq!(result.errors.len(), 1);
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn breaking_change_marker_accepted() {
        let result = validate_commit_message("feat(api)!: remove deprecated endpoint");
        assert!(result.valid);
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn scope_is_optional() {
        let result = validate_commit_message("fix: fix null pointer in parser");
        assert!(result.valid);
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn type_token_is_optional() {
        // Separator and subject alone satisfy the format; the missing
        // type is a step-5 warning, not a format error.
        let result = validate_commit_message(": add x");
        assert!(result.valid, "errors: {:?}", result.errors);
        assert!(result.errors.is_empty());
        assert!(result
            .warnings
            .iter()
            .any(|w| w.contains("not a standard type")));
    }

    // --- type allow-list ---

    #[test]
    fn unknown_type_warns_but_stays_valid() {
        let result = validate_commit_message("foo: add x");
        assert!(result.valid);
        assert!(result.errors.is_empty());
        assert!(result.warnings.iter().any(|w| w.contains("'foo'")));
        assert!(result.warnings.iter().any(|w| w.contains("feat, fix")));
    }

    #[test]
    fn type_check_is_case_sensitive() {
        // Only the imperative heuristic folds case; the allow-list is a
        // fixed lowercase set.
        let result = validate_commit_message("FEAT: add x");
        assert!(result.valid);
        assert!(result.warnings.iter().any(|w| w.contains("'FEAT'")));
    }

    #[test]
    fn all_standard_types_accepted() {
        for ty in VALID_TYPES {
            let result = validate_commit_message(&format!("{ty}: add thing"));
            assert!(result.valid, "type {ty} should be valid");
            assert!(result.warnings.is_empty(), "type {ty} should not warn");
        }
    }

    // --- subject checks ---

    #[test]
    fn whitespace_only_subject_is_error() {
        let result = validate_commit_message("feat:   ");
        assert!(!result.valid);
        assert!(result.errors.iter().any(|e| e.contains("Subject")));
    }

    #[test]
    fn long_subject_warns() {
        let subject = "add ".to_string() + &"x".repeat(60);
        let result = validate_commit_message(&format!("feat: {subject}"));
        assert!(result.valid);
        assert!(result
            .warnings
            .iter()
            .any(|w| w.contains("concise summary")));
    }

    #[test]
    fn non_imperative_subject_warns() {
        let result = validate_commit_message("feat: added login");
        assert!(result.valid);
        assert!(result.warnings.iter().any(|w| w.contains("imperative")));
    }

    #[test]
    fn imperative_check_is_case_insensitive() {
        let result = validate_commit_message("feat: Add login form");
        assert!(result.valid);
        assert!(result.warnings.is_empty());
    }

    // --- header / body length ---

    #[test]
    fn long_header_warning_mentions_fifty() {
        // The check fires above 72 characters but the advertised guideline
        // is 50. Both numbers are intentional.
        let header = format!("feat: add {}", "x".repeat(70));
        let result = validate_commit_message(&header);
        assert!(result
            .warnings
            .iter()
            .any(|w| w.contains("under 50 characters")));
    }

    #[test]
    fn header_between_fifty_and_seventy_two_has_no_length_warning() {
        // 60 characters total: over the advertised 50 but under the actual
        // threshold, so only the subject-length warning may fire.
        let header = format!("feat: add {}", "x".repeat(50));
        assert_eq!(header.chars().count(), 60);
        let result = validate_commit_message(&header);
        assert!(!result.warnings.iter().any(|w| w.contains("Header")));
    }

    #[test]
    fn long_body_warns() {
        let message = format!("feat: add parser\n\n{}", "b".repeat(1100));
        let result = validate_commit_message(&message);
        assert!(result.valid);
        assert!(result.warnings.iter().any(|w| w.contains("Body")));
    }

    #[test]
    fn body_under_limit_does_not_warn() {
        let message = format!("feat: add parser\n\n{}", "b".repeat(500));
        let result = validate_commit_message(&message);
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn format_error_still_reports_length_warnings() {
        // Malformed header over 72 chars: format error plus the header
        // length warning, since length checks are independent of the match.
        let header = "x".repeat(80);
        let result = validate_commit_message(&header);
        assert_eq!(result.errors.len(), 1);
        assert!(result.warnings.iter().any(|w| w.contains("Header")));
    }

    // --- purity ---

    #[test]
    fn validation_is_idempotent() {
        let inputs = [
            "",
            "feat: add x",
            "random text",
            "feat(scope)!: remove api\n\nbody",
        ];
        for input in inputs {
            assert_eq!(
                validate_commit_message(input),
                validate_commit_message(input)
            );
        }
    }

    proptest::proptest! {
        /// Any input produces a well-formed result without panicking, and
        /// validity is exactly the absence of errors.
        #[test]
        fn total_over_arbitrary_input(message in ".{0,400}") {
            let result = validate_commit_message(&message);
            proptest::prop_assert_eq!(result.valid, result.errors.is_empty());
            let again = validate_commit_message(&message);
            proptest::prop_assert_eq!(result, again);
        }
    }
}
