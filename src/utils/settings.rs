//! Settings and configuration utilities.
//!
//! Settings are read from `$HOME/.git-prep/settings.json` and act as a
//! fallback for environment variables: a real environment variable always
//! wins over a value from the file.

use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

/// Settings loaded from `$HOME/.git-prep/settings.json`.
#[derive(Debug, Default, Deserialize)]
pub struct Settings {
    /// Environment variable fallbacks.
    #[serde(default)]
    pub env: HashMap<String, String>,
}

impl Settings {
    /// Loads settings from the default location.
    ///
    /// A missing file yields the default (empty) settings; a malformed
    /// file is an error.
    pub fn load() -> Result<Self> {
        let settings_path = Self::settings_path()?;
        Self::load_from_path(&settings_path)
    }

    /// Loads settings from a specific path.
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Ok(Settings::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings file: {}", path.display()))?;

        serde_json::from_str::<Settings>(&content)
            .with_context(|| format!("Failed to parse settings file: {}", path.display()))
    }

    /// Returns the default settings path.
    pub fn settings_path() -> Result<PathBuf> {
        let home_dir = dirs::home_dir().context("Failed to determine home directory")?;

        Ok(home_dir.join(".git-prep").join("settings.json"))
    }

    /// Returns an environment variable with fallback to settings.
    pub fn get_env_var(&self, key: &str) -> Option<String> {
        match env::var(key) {
            Ok(value) => Some(value),
            Err(_) => self.env.get(key).cloned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn load_from_path_reads_env_map() {
        let temp_dir = TempDir::new().unwrap();
        let settings_path = temp_dir.path().join("settings.json");

        fs::write(
            &settings_path,
            r#"{ "env": { "GIT_PREP_REMOTE": "upstream" } }"#,
        )
        .unwrap();

        let settings = Settings::load_from_path(&settings_path).unwrap();
        assert_eq!(
            settings.env.get("GIT_PREP_REMOTE"),
            Some(&"upstream".to_string())
        );
    }

    #[test]
    fn missing_file_yields_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let settings = Settings::load_from_path(temp_dir.path().join("nope.json")).unwrap();
        assert!(settings.env.is_empty());
    }

    #[test]
    fn malformed_file_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let settings_path = temp_dir.path().join("settings.json");
        fs::write(&settings_path, "not json").unwrap();
        assert!(Settings::load_from_path(&settings_path).is_err());
    }

    #[test]
    fn settings_fallback_used_when_env_unset() {
        let mut env_map = HashMap::new();
        env_map.insert(
            "GIT_PREP_TEST_UNSET_VAR".to_string(),
            "fallback".to_string(),
        );
        let settings = Settings { env: env_map };
        assert_eq!(
            settings.get_env_var("GIT_PREP_TEST_UNSET_VAR"),
            Some("fallback".to_string())
        );
    }

    #[test]
    fn unknown_key_is_none() {
        let settings = Settings::default();
        assert_eq!(settings.get_env_var("GIT_PREP_TEST_MISSING_VAR"), None);
    }
}
