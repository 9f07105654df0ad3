//! Branch name validation.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Branch name pattern: a recognized prefix followed by a lowercase slug.
static BRANCH_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(feature|bugfix|hotfix|release)/[a-z0-9-]+$").unwrap());

/// Branch names accepted verbatim, outside the prefix/slug scheme.
const LITERAL_BRANCHES: &[&str] = &["main", "develop"];

/// Result of validating a branch name. Boolean check, no warnings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BranchValidationResult {
    /// Whether the name is acceptable.
    pub valid: bool,
    /// Explanation when the name is rejected.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl BranchValidationResult {
    fn ok() -> Self {
        Self {
            valid: true,
            error: None,
        }
    }

    fn rejected(error: String) -> Self {
        Self {
            valid: false,
            error: Some(error),
        }
    }
}

/// Validates a branch name against the accepted naming scheme.
///
/// Accepted names are `feature/<slug>`, `bugfix/<slug>`, `hotfix/<slug>`
/// and `release/<slug>`, where the slug is one or more lowercase
/// alphanumerics and hyphens, plus the literal names `main` and `develop`.
pub fn validate_branch_name(name: &str) -> BranchValidationResult {
    if LITERAL_BRANCHES.contains(&name) || BRANCH_PATTERN.is_match(name) {
        return BranchValidationResult::ok();
    }

    BranchValidationResult::rejected(format!(
        "Branch name '{name}' is not valid. Use feature/<name>, bugfix/<name>, \
         hotfix/<name> or release/<name> with lowercase letters, digits and hyphens",
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feature_branch_valid() {
        let result = validate_branch_name("feature/add-logging");
        assert!(result.valid);
        assert!(result.error.is_none());
    }

    #[test]
    fn all_prefixes_valid() {
        for name in [
            "feature/x",
            "bugfix/fix-crash",
            "hotfix/cve-2024-1234",
            "release/1-2-0",
        ] {
            assert!(validate_branch_name(name).valid, "{name} should be valid");
        }
    }

    #[test]
    fn literal_branches_always_valid() {
        assert!(validate_branch_name("main").valid);
        assert!(validate_branch_name("develop").valid);
    }

    #[test]
    fn uppercase_violates_slug() {
        let result = validate_branch_name("Feature/AddLogging");
        assert!(!result.valid);
        assert!(result.error.is_some());
    }

    #[test]
    fn unknown_prefix_rejected() {
        let result = validate_branch_name("task/do-thing");
        assert!(!result.valid);
        let error = result.error.unwrap();
        assert!(error.contains("feature/<name>"));
        assert!(error.contains("release/<name>"));
    }

    #[test]
    fn empty_slug_rejected() {
        assert!(!validate_branch_name("feature/").valid);
    }

    #[test]
    fn empty_name_rejected() {
        assert!(!validate_branch_name("").valid);
    }

    #[test]
    fn underscores_rejected() {
        assert!(!validate_branch_name("feature/add_logging").valid);
    }

    #[test]
    fn nested_slug_rejected() {
        // Slugs have no path separators.
        assert!(!validate_branch_name("feature/auth/login").valid);
    }

    #[test]
    fn validation_is_idempotent() {
        for name in ["feature/x", "Feature/X", "main", ""] {
            assert_eq!(validate_branch_name(name), validate_branch_name(name));
        }
    }
}
