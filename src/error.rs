//! Error types for the branch switch workflow

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while switching branches
#[derive(Debug, Error)]
pub enum WorkflowError {
    /// A git command ran but exited with a failure status
    #[error("`{command}` failed{}: {}", exit_suffix(*.code), .stderr.trim())]
    CommandFailed {
        /// The command line that was executed
        command: String,
        /// Exit code, `None` if the process was killed by a signal
        code: Option<i32>,
        /// Captured standard error
        stderr: String,
    },

    /// A git command could not be started
    #[error("failed to execute `{command}`")]
    Spawn {
        /// The command line that was attempted
        command: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The working directory is not inside a git repository
    #[error("{} is not a git repository", .path.display())]
    NotARepository {
        /// Directory that was checked
        path: PathBuf,
    },

    /// A branch name was empty or whitespace only
    #[error("invalid branch name {name:?}")]
    InvalidBranchName {
        /// The rejected name
        name: String,
    },
}

impl WorkflowError {
    /// Whether this error was caught before any repository command ran
    #[must_use]
    pub const fn is_precondition(&self) -> bool {
        matches!(
            self,
            Self::NotARepository { .. } | Self::InvalidBranchName { .. }
        )
    }
}

fn exit_suffix(code: Option<i32>) -> String {
    code.map_or_else(
        || " (terminated by signal)".to_string(),
        |code| format!(" with exit code {code}"),
    )
}
