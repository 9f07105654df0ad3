//! Git repository queries through libgit2.

use anyhow::{Context, Result};
use git2::{Repository, Status};

use crate::git::CommitInfo;

/// Git repository wrapper.
pub struct GitRepository {
    repo: Repository,
}

/// Working directory status.
#[derive(Debug)]
pub struct WorkingDirectoryStatus {
    /// Whether the working directory has no changes.
    pub clean: bool,
    /// List of files with uncommitted changes.
    pub changes: Vec<FileStatus>,
}

/// File status information.
#[derive(Debug)]
pub struct FileStatus {
    /// Git status flags (e.g., "AM", "??", "M ").
    pub status: String,
    /// Path to the file relative to repository root.
    pub file: String,
}

impl GitRepository {
    /// Opens the repository at the current directory.
    pub fn open() -> Result<Self> {
        let repo = Repository::open(".").context("Not in a git repository")?;

        Ok(Self { repo })
    }

    /// Opens the repository at the specified path.
    pub fn open_at<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let repo = Repository::open(path).context("Failed to open git repository")?;

        Ok(Self { repo })
    }

    /// Returns the working directory status.
    pub fn working_directory_status(&self) -> Result<WorkingDirectoryStatus> {
        let statuses = self
            .repo
            .statuses(None)
            .context("Failed to get repository status")?;

        let mut changes = Vec::new();

        for entry in statuses.iter() {
            if let Some(path) = entry.path() {
                changes.push(FileStatus {
                    status: format_status_flags(entry.status()),
                    file: path.to_string(),
                });
            }
        }

        let clean = changes.is_empty();

        Ok(WorkingDirectoryStatus { clean, changes })
    }

    /// Returns access to the underlying git2 repository.
    pub fn repository(&self) -> &Repository {
        &self.repo
    }

    /// Returns the current branch name.
    pub fn current_branch(&self) -> Result<String> {
        let head = self.repo.head().context("Failed to get HEAD reference")?;

        match head.shorthand() {
            Some(name) if name != "HEAD" => Ok(name.to_string()),
            _ => anyhow::bail!("Repository is in detached HEAD state"),
        }
    }

    /// Checks whether a branch or revision exists.
    pub fn branch_exists(&self, branch_name: &str) -> bool {
        if self
            .repo
            .find_branch(branch_name, git2::BranchType::Local)
            .is_ok()
        {
            return true;
        }

        if self
            .repo
            .find_branch(branch_name, git2::BranchType::Remote)
            .is_ok()
        {
            return true;
        }

        self.repo.revparse_single(branch_name).is_ok()
    }

    /// Creates a branch named `name` pointing at `base` and optionally
    /// checks it out.
    pub fn create_branch(&self, name: &str, base: &str, switch: bool) -> Result<()> {
        let base_obj = self
            .repo
            .revparse_single(base)
            .with_context(|| format!("Failed to resolve base revision: {base}"))?;
        let base_commit = base_obj
            .peel_to_commit()
            .with_context(|| format!("Base revision is not a commit: {base}"))?;

        self.repo
            .branch(name, &base_commit, false)
            .with_context(|| format!("Failed to create branch: {name}"))?;

        if switch {
            let refname = format!("refs/heads/{name}");
            let obj = self
                .repo
                .revparse_single(&refname)
                .context("Failed to resolve new branch")?;
            self.repo
                .checkout_tree(&obj, None)
                .with_context(|| format!("Failed to check out branch: {name}"))?;
            self.repo
                .set_head(&refname)
                .with_context(|| format!("Failed to switch HEAD to branch: {name}"))?;
        }

        Ok(())
    }

    /// Returns the commits in `base..head`, oldest first, skipping merges.
    pub fn commits_ahead_of(&self, base: &str, head: &str) -> Result<Vec<CommitInfo>> {
        let base_obj = self
            .repo
            .revparse_single(base)
            .with_context(|| format!("Failed to resolve revision: {base}"))?;
        let head_obj = self
            .repo
            .revparse_single(head)
            .with_context(|| format!("Failed to resolve revision: {head}"))?;

        let base_commit = base_obj
            .peel_to_commit()
            .context("Failed to peel base revision to commit")?;
        let head_commit = head_obj
            .peel_to_commit()
            .context("Failed to peel head revision to commit")?;

        let mut walker = self.repo.revwalk().context("Failed to create revwalk")?;
        walker
            .push(head_commit.id())
            .context("Failed to push head commit")?;
        walker
            .hide(base_commit.id())
            .context("Failed to hide base commit")?;

        let mut commits = Vec::new();
        for oid in walker {
            let oid = oid.context("Failed to get commit OID from walker")?;
            let commit = self
                .repo
                .find_commit(oid)
                .context("Failed to find commit")?;

            // Skip merge commits
            if commit.parent_count() > 1 {
                continue;
            }

            commits.push(CommitInfo::from_git_commit(&commit)?);
        }

        // Chronological order, oldest first
        commits.reverse();

        Ok(commits)
    }

    /// Parses a commit range expression and returns the matching commits.
    ///
    /// Supports `a..b` ranges and single revisions (one commit).
    pub fn commits_in_range(&self, range: &str) -> Result<Vec<CommitInfo>> {
        if let Some((base, head)) = range.split_once("..") {
            if base.is_empty() || head.is_empty() || head.starts_with('.') {
                anyhow::bail!("Invalid range format: {range}");
            }
            return self.commits_ahead_of(base, head);
        }

        let obj = self
            .repo
            .revparse_single(range)
            .with_context(|| format!("Failed to resolve revision: {range}"))?;
        let commit = obj
            .peel_to_commit()
            .with_context(|| format!("Revision is not a commit: {range}"))?;

        Ok(vec![CommitInfo::from_git_commit(&commit)?])
    }

    /// Returns how many commits the local revision is ahead of and behind
    /// the upstream revision.
    pub fn ahead_behind(&self, local: &str, upstream: &str) -> Result<(usize, usize)> {
        let local_oid = self
            .repo
            .revparse_single(local)
            .with_context(|| format!("Failed to resolve revision: {local}"))?
            .peel_to_commit()
            .context("Failed to peel local revision to commit")?
            .id();
        let upstream_oid = self
            .repo
            .revparse_single(upstream)
            .with_context(|| format!("Failed to resolve revision: {upstream}"))?
            .peel_to_commit()
            .context("Failed to peel upstream revision to commit")?
            .id();

        self.repo
            .graph_ahead_behind(local_oid, upstream_oid)
            .context("Failed to compute ahead/behind counts")
    }
}

/// Index-column characters for the two-character status rendering, first
/// match wins.
const INDEX_COLUMN: &[(Status, char)] = &[
    (Status::INDEX_NEW, 'A'),
    (Status::INDEX_MODIFIED, 'M'),
    (Status::INDEX_DELETED, 'D'),
    (Status::INDEX_RENAMED, 'R'),
    (Status::INDEX_TYPECHANGE, 'T'),
];

/// Worktree-column characters, first match wins.
const WORKTREE_COLUMN: &[(Status, char)] = &[
    (Status::WT_NEW, '?'),
    (Status::WT_MODIFIED, 'M'),
    (Status::WT_DELETED, 'D'),
    (Status::WT_TYPECHANGE, 'T'),
    (Status::WT_RENAMED, 'R'),
];

/// Renders git status flags in the familiar two-column short format
/// ("AM", " ?", "M ").
fn format_status_flags(flags: Status) -> String {
    let column = |table: &[(Status, char)]| {
        table
            .iter()
            .find(|(flag, _)| flags.contains(*flag))
            .map_or(' ', |&(_, c)| c)
    };

    format!("{}{}", column(INDEX_COLUMN), column(WORKTREE_COLUMN))
}
