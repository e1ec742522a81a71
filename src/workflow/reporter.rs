//! User-facing progress messages

use crate::config::Verbosity;

/// Receives a message for every step the orchestrator takes
pub trait Reporter {
    /// Report a step
    fn step(&self, message: &str);
}

/// Prints step messages to stdout unless running quietly
#[derive(Debug, Clone, Copy)]
pub struct ConsoleReporter {
    verbosity: Verbosity,
}

impl ConsoleReporter {
    /// Create a reporter for the given verbosity
    #[must_use]
    pub const fn new(verbosity: Verbosity) -> Self {
        Self { verbosity }
    }
}

impl Reporter for ConsoleReporter {
    fn step(&self, message: &str) {
        if self.verbosity.shows_progress() {
            println!("{message}");
        }
    }
}

/// Discards every message
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpReporter;

impl Reporter for NoOpReporter {
    fn step(&self, _message: &str) {}
}
