//! Utility functions and helpers.

pub mod settings;

pub use settings::Settings;

/// Environment variable that overrides integration-branch detection.
pub const INTEGRATION_BRANCH_VAR: &str = "GIT_PREP_INTEGRATION_BRANCH";

/// Environment variable that overrides the default remote name.
pub const REMOTE_VAR: &str = "GIT_PREP_REMOTE";
