//! Git operations module

mod repo;
mod runner;

pub use repo::Repo;
pub use runner::{CommandOutput, CommandRunner, GitRunner, git_command, render_command};

use anyhow::{Context, Result};
use git2::Repository;
use std::path::Path;

/// Open a git repository at the given path
///
/// # Errors
///
/// Returns an error if the path is not a git repository
pub fn open_repository(path: &Path) -> Result<Repository> {
    Repository::discover(path)
        .with_context(|| format!("Failed to open git repository at {}", path.display()))
}

/// Check if a path is inside a git working tree
#[must_use]
pub fn is_git_repository(path: &Path) -> bool {
    open_repository(path).is_ok_and(|repo| !repo.is_bare())
}
