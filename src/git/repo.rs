//! Typed repository queries and mutations used by the branch switch workflow

use crate::error::WorkflowError;

use super::runner::CommandRunner;

/// Repository operations issued through a [`CommandRunner`]
pub struct Repo<'r, R: ?Sized> {
    runner: &'r R,
}

impl<R: ?Sized> std::fmt::Debug for Repo<'_, R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Repo").finish_non_exhaustive()
    }
}

impl<'r, R: CommandRunner + ?Sized> Repo<'r, R> {
    /// Wrap a command runner
    #[must_use]
    pub const fn new(runner: &'r R) -> Self {
        Self { runner }
    }

    /// Check for modified tracked files, ignoring untracked ones
    ///
    /// # Errors
    ///
    /// Returns an error if `git status` fails
    pub fn has_tracked_changes(&self) -> Result<bool, WorkflowError> {
        let output = self
            .runner
            .run(&["status", "--untracked-files=no", "--porcelain=v1"])?;
        Ok(!output.stdout_is_empty())
    }

    /// Stage every modification to already-tracked files
    ///
    /// # Errors
    ///
    /// Returns an error if `git add` fails
    pub fn stage_tracked(&self) -> Result<(), WorkflowError> {
        self.runner.run(&["add", "-u"]).map(drop)
    }

    /// Commit the index with a literal message
    ///
    /// # Errors
    ///
    /// Returns an error if the commit fails, for example when nothing is staged
    pub fn commit(&self, message: &str) -> Result<(), WorkflowError> {
        self.runner.run(&["commit", "-m", message]).map(drop)
    }

    /// Move the current branch back one commit, leaving the working tree as is
    ///
    /// # Errors
    ///
    /// Returns an error if `git reset` fails
    pub fn rewind_one(&self) -> Result<(), WorkflowError> {
        self.runner.run(&["reset", "HEAD~1"]).map(drop)
    }

    /// Switch to an existing branch
    ///
    /// # Errors
    ///
    /// Returns an error if the checkout fails
    pub fn checkout(&self, branch: &str) -> Result<(), WorkflowError> {
        self.runner.run(&["checkout", branch]).map(drop)
    }

    /// Create a branch from HEAD and switch to it
    ///
    /// # Errors
    ///
    /// Returns an error if the branch cannot be created
    pub fn create_and_checkout(&self, branch: &str) -> Result<(), WorkflowError> {
        self.runner.run(&["checkout", "-b", branch]).map(drop)
    }

    /// Update the current branch from its upstream
    ///
    /// # Errors
    ///
    /// Returns an error if the pull fails
    pub fn pull(&self) -> Result<(), WorkflowError> {
        self.runner.run(&["pull"]).map(drop)
    }

    /// Check whether a local branch with this name exists
    ///
    /// # Errors
    ///
    /// Returns an error if `git branch` fails
    pub fn branch_exists(&self, branch: &str) -> Result<bool, WorkflowError> {
        let output = self.runner.run(&["branch", "--list", branch])?;
        Ok(!output.stdout_is_empty())
    }

    /// Subject line of the commit at HEAD, untrimmed
    ///
    /// # Errors
    ///
    /// Returns an error if `git show` fails
    pub fn head_subject(&self) -> Result<String, WorkflowError> {
        let output = self.runner.run(&["show", "-s", "--format=%s"])?;
        Ok(output.stdout)
    }
}
