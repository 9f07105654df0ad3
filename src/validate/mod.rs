//! Pure validation rules for commit messages and branch names.
//!
//! Nothing in this module performs I/O or touches a repository. Every
//! function is total: any input string, however malformed, produces a
//! well-formed result distinguishing hard failures (errors, which block an
//! operation) from soft advisories (warnings, which never do).

pub mod branch;
pub mod commit;

pub use branch::{validate_branch_name, BranchValidationResult};
pub use commit::{validate_commit_message, CommitValidationResult};
