//! # git-prep
//!
//! An opinionated Git workflow helper.
//!
//! `git-prep` wraps the everyday Git chores around feature work: creating
//! correctly named branches, linting commit messages against the
//! Conventional Commits format, rebasing onto the integration branch, and
//! checking that a branch is ready for a pull request.
//!
//! The validation rules live in [`validate`] as pure functions; everything
//! that touches a repository goes through the [`git`] facade.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod cli;
pub mod data;
pub mod git;
pub mod utils;
pub mod validate;

pub use crate::cli::Cli;

/// The current version of git-prep.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
