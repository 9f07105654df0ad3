//! Integration-branch detection.
//!
//! The decision itself is a pure function over facts gathered from the
//! repository, so it can be tested without a remote.

use git2::Repository;
use serde::{Deserialize, Serialize};

/// Facts about a remote that drive integration-branch selection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteState {
    /// Whether `<remote>/develop` exists.
    pub has_develop: bool,
    /// Branch name the remote's symbolic HEAD points at, if any.
    pub default_branch: Option<String>,
    /// Whether `<remote>/main` exists.
    pub has_main: bool,
    /// Whether `<remote>/master` exists.
    pub has_master: bool,
}

impl RemoteState {
    /// Gathers remote facts from the repository for the named remote.
    pub fn gather(repo: &Repository, remote_name: &str) -> Self {
        let has_branch = |branch: &str| {
            repo.find_reference(&format!("refs/remotes/{remote_name}/{branch}"))
                .is_ok()
        };

        let default_branch = repo
            .find_reference(&format!("refs/remotes/{remote_name}/HEAD"))
            .ok()
            .and_then(|head| {
                head.symbolic_target().and_then(|target| {
                    target
                        .strip_prefix(&format!("refs/remotes/{remote_name}/"))
                        .map(str::to_string)
                })
            });

        Self {
            has_develop: has_branch("develop"),
            default_branch,
            has_main: has_branch("main"),
            has_master: has_branch("master"),
        }
    }
}

/// Picks the integration branch for a remote.
///
/// Preference order: `develop` when present on the remote, then the
/// remote's symbolic default branch, then a probe for `main`, `master` and
/// `develop`, and finally `main` as the fallback.
pub fn integration_branch(state: &RemoteState) -> String {
    if state.has_develop {
        return "develop".to_string();
    }

    if let Some(default) = &state.default_branch {
        tracing::debug!("Using remote symbolic default branch: {default}");
        return default.clone();
    }

    for (candidate, present) in [
        ("main", state.has_main),
        ("master", state.has_master),
        ("develop", state.has_develop),
    ] {
        if present {
            return candidate.to_string();
        }
    }

    "main".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn develop_preferred_when_present() {
        let state = RemoteState {
            has_develop: true,
            default_branch: Some("trunk".to_string()),
            has_main: true,
            has_master: true,
        };
        assert_eq!(integration_branch(&state), "develop");
    }

    #[test]
    fn symbolic_default_beats_probing() {
        let state = RemoteState {
            has_develop: false,
            default_branch: Some("trunk".to_string()),
            has_main: true,
            has_master: true,
        };
        assert_eq!(integration_branch(&state), "trunk");
    }

    #[test]
    fn probes_main_before_master() {
        let state = RemoteState {
            has_main: true,
            has_master: true,
            ..Default::default()
        };
        assert_eq!(integration_branch(&state), "main");
    }

    #[test]
    fn probes_master_when_no_main() {
        let state = RemoteState {
            has_master: true,
            ..Default::default()
        };
        assert_eq!(integration_branch(&state), "master");
    }

    #[test]
    fn falls_back_to_main_when_nothing_known() {
        assert_eq!(integration_branch(&RemoteState::default()), "main");
    }
}
