//! Branch switch orchestration
//!
//! A run protects uncommitted work with a sentinel commit, then either
//! switches to an existing branch (undoing a sentinel commit left at its
//! tip by an earlier run) or creates the branch from the freshly pulled
//! main branch.
//!
//! Steps run strictly in order. A failing git command aborts the run where
//! it stands; nothing is retried or rolled back, so a sentinel commit made
//! earlier in the run stays in place for manual recovery.

mod reporter;
mod state;


pub use reporter::{ConsoleReporter, NoOpReporter, Reporter};
pub use state::{Outcome, RunSummary, State};

use tracing::{debug, info};

use crate::config::Config;
use crate::error::WorkflowError;
use crate::git::{CommandRunner, GitRunner, Repo};

/// Message of the temporary commit that protects in-progress work.
///
/// A tip commit is only recognised as one of ours when its subject matches
/// this text exactly after trimming.
pub const SENTINEL_COMMIT_MESSAGE: &str = "WIP - Committing changes before switching branch";

/// Whether a commit subject marks a sentinel commit
#[must_use]
pub fn is_sentinel(subject: &str) -> bool {
    subject.trim() == SENTINEL_COMMIT_MESSAGE
}

/// Validate `config` and switch the repository it names to `target`
///
/// Runs real git commands and prints progress according to the configured
/// verbosity.
///
/// # Errors
///
/// Returns a precondition error if the configuration or target is invalid,
/// otherwise the first failing git command
pub fn switch_branch(config: &Config, target: &str) -> Result<RunSummary, WorkflowError> {
    config.validate()?;
    let runner = GitRunner::new(config);
    let reporter = ConsoleReporter::new(config.verbosity);
    Orchestrator::new(&runner, &config.main_branch, &reporter).run(target)
}

/// Drives one branch switch against a repository
pub struct Orchestrator<'a, R: ?Sized, P: ?Sized> {
    repo: Repo<'a, R>,
    main_branch: &'a str,
    reporter: &'a P,
    trail: Vec<State>,
}

impl<R: ?Sized, P: ?Sized> std::fmt::Debug for Orchestrator<'_, R, P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Orchestrator")
            .field("main_branch", &self.main_branch)
            .field("trail", &self.trail)
            .finish_non_exhaustive()
    }
}

impl<'a, R, P> Orchestrator<'a, R, P>
where
    R: CommandRunner + ?Sized,
    P: Reporter + ?Sized,
{
    /// Create an orchestrator that falls back to `main_branch` for new branches
    #[must_use]
    pub fn new(runner: &'a R, main_branch: &'a str, reporter: &'a P) -> Self {
        Self {
            repo: Repo::new(runner),
            main_branch,
            reporter,
            trail: vec![State::Idle],
        }
    }

    /// Current state of the most recent run
    #[must_use]
    pub const fn state(&self) -> State {
        match self.trail.as_slice().last() {
            Some(state) => *state,
            None => State::Idle,
        }
    }

    /// Every state the most recent run passed through, starting at `Idle`
    #[must_use]
    pub const fn trail(&self) -> &[State] {
        self.trail.as_slice()
    }

    /// Switch to `target`, protecting and restoring in-progress work
    ///
    /// # Errors
    ///
    /// Returns [`WorkflowError::InvalidBranchName`] before touching the
    /// repository if `target` is blank. Any failing git command is returned
    /// as is and ends the run in the state it reached.
    pub fn run(&mut self, target: &str) -> Result<RunSummary, WorkflowError> {
        self.trail.clear();
        self.trail.push(State::Idle);

        if target.trim().is_empty() {
            return Err(WorkflowError::InvalidBranchName {
                name: target.to_string(),
            });
        }
        info!(target, main_branch = self.main_branch, "Starting branch switch");

        let protected_changes = self.protect_changes()?;

        self.reporter.step("Checking if target branch exists");
        let exists = self.repo.branch_exists(target)?;
        self.advance(State::TargetResolved);

        let outcome = if exists {
            self.switch_to_existing(target)?
        } else {
            self.create_from_main(target)?
        };

        debug_assert!(self.state().is_terminal());
        debug_assert_eq!(self.state(), State::from(outcome));
        info!(target, ?outcome, protected_changes, "Branch switch complete");
        Ok(RunSummary {
            protected_changes,
            outcome,
        })
    }

    fn protect_changes(&mut self) -> Result<bool, WorkflowError> {
        self.reporter.step("Checking if there are changes");
        let needs_commit = self.repo.has_tracked_changes()?;
        self.advance(State::ChangesChecked);

        if needs_commit {
            self.reporter
                .step("Committing changes before switching branch");
            self.repo.stage_tracked()?;
            self.repo.commit(SENTINEL_COMMIT_MESSAGE)?;
            self.advance(State::Committed);
        } else {
            self.reporter.step("No changes to commit");
            self.advance(State::Clean);
        }
        Ok(needs_commit)
    }

    fn switch_to_existing(&mut self, target: &str) -> Result<Outcome, WorkflowError> {
        self.reporter.step("Target branch exists, checking out");
        self.repo.checkout(target)?;
        self.advance(State::CheckedOutExisting);

        self.reporter.step("Checking last commit");
        let subject = self.repo.head_subject()?;
        if is_sentinel(&subject) {
            self.reporter.step("Last commit is ours, resetting");
            self.repo.rewind_one()?;
            self.advance(State::Rewound);
            Ok(Outcome::Rewound)
        } else {
            self.reporter.step("Last commit is not ours, not resetting");
            self.advance(State::Unchanged);
            Ok(Outcome::Unchanged)
        }
    }

    fn create_from_main(&mut self, target: &str) -> Result<Outcome, WorkflowError> {
        let main_branch = self.main_branch;
        self.reporter.step(&format!(
            "Branch \"{target}\" does not exist. Switching to main branch first ({main_branch})"
        ));
        self.repo.checkout(main_branch)?;
        self.advance(State::OnMain);

        self.reporter
            .step(&format!("Pulling latest changes from {main_branch}"));
        self.repo.pull()?;
        self.advance(State::Pulled);

        self.reporter
            .step(&format!("Creating and checking out branch {target}"));
        self.repo.create_and_checkout(target)?;
        self.advance(State::NewBranchCreated);
        Ok(Outcome::NewBranchCreated)
    }

    fn advance(&mut self, next: State) {
        let current = self.state();
        debug_assert!(
            current.can_transition_to(next),
            "invalid transition {current:?} -> {next:?}"
        );
        debug!(from = ?current, to = ?next, "Workflow transition");
        self.trail.push(next);
    }
}
