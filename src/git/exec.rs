//! Subprocess execution for the mutating Git operations the tool delegates
//! to the `git` binary (fetch, rebase).

use std::process::Command;

use thiserror::Error;

/// Error from running a `git` subprocess.
#[derive(Debug, Error)]
pub enum GitCommandError {
    /// The binary could not be spawned at all.
    #[error("failed to run `git {command}`: {source}")]
    Spawn {
        /// The argument string that was attempted.
        command: String,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The command ran but exited non-zero.
    #[error("`git {command}` exited with {status}: {stderr}")]
    Failed {
        /// The argument string that was attempted.
        command: String,
        /// The exit status description.
        status: String,
        /// Trimmed stderr output from git.
        stderr: String,
    },
}

/// Runs `git` with the given arguments and returns trimmed stdout.
///
/// Stderr is captured and carried in the error when the command fails;
/// callers decide whether to surface it or recover.
pub fn git_run(args: &[&str]) -> Result<String, GitCommandError> {
    let command = args.join(" ");
    tracing::debug!("running: git {command}");

    let output = Command::new("git")
        .args(args)
        .output()
        .map_err(|source| GitCommandError::Spawn {
            command: command.clone(),
            source,
        })?;

    if !output.status.success() {
        return Err(GitCommandError::Failed {
            command,
            status: output
                .status
                .code()
                .map_or_else(|| "signal".to_string(), |c| format!("code {c}")),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }

    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
}

/// Fetches a remote with pruning.
pub fn fetch(remote: &str) -> Result<String, GitCommandError> {
    git_run(&["fetch", "--prune", remote])
}

/// Rebases the current branch onto the given upstream revision.
pub fn rebase_onto(upstream: &str) -> Result<String, GitCommandError> {
    git_run(&["rebase", upstream])
}
