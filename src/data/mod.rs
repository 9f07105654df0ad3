//! Serializable report types for command output.

use anyhow::{Context, Result};
use serde::Serialize;

pub mod lint;

pub use lint::{CommitLintResult, LintReport, LintSummary, OutputFormat};

/// Serializes a data structure to a YAML string.
pub fn to_yaml<T: Serialize>(data: &T) -> Result<String> {
    serde_yaml::to_string(data).context("Failed to serialize to YAML")
}

/// Serializes a data structure to pretty-printed JSON.
pub fn to_json<T: Serialize>(data: &T) -> Result<String> {
    serde_json::to_string_pretty(data).context("Failed to serialize to JSON")
}
