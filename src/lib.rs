//! Byttbranch - switch git branches without losing in-progress work
//!
//! Before leaving a branch, uncommitted changes to tracked files are parked
//! in a temporary "WIP" commit. Switching back to a branch whose tip is such
//! a commit undoes it again, so the work reappears as uncommitted changes.
//! Branches that do not exist yet are created from an up-to-date main branch.

pub mod config;
pub mod error;
pub mod git;
pub mod paths;
pub mod workflow;

pub use config::{Config, Settings, Verbosity};
pub use error::WorkflowError;
pub use workflow::{
    Orchestrator, Outcome, RunSummary, SENTINEL_COMMIT_MESSAGE, State, switch_branch,
};
