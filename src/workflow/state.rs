//! States and results of a branch switch run

/// Position of a run in the branch switch state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum State {
    /// Nothing has happened yet
    Idle,
    /// The working tree has been inspected for tracked changes
    ChangesChecked,
    /// Tracked changes were committed with the sentinel message
    Committed,
    /// There was nothing to protect
    Clean,
    /// Existence of the target branch is known
    TargetResolved,
    /// The existing target branch is checked out
    CheckedOutExisting,
    /// A leftover sentinel commit was rewound (terminal)
    Rewound,
    /// The tip commit belongs to the user and was kept (terminal)
    Unchanged,
    /// The main branch is checked out
    OnMain,
    /// The main branch was updated from its upstream
    Pulled,
    /// The target branch was created from main (terminal)
    NewBranchCreated,
}

impl State {
    /// Whether a run ends in this state
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Rewound | Self::Unchanged | Self::NewBranchCreated)
    }

    /// Whether `next` may directly follow this state
    #[must_use]
    pub const fn can_transition_to(self, next: Self) -> bool {
        matches!(
            (self, next),
            (Self::Idle, Self::ChangesChecked)
                | (Self::ChangesChecked, Self::Committed | Self::Clean)
                | (Self::Committed | Self::Clean, Self::TargetResolved)
                | (Self::TargetResolved, Self::CheckedOutExisting | Self::OnMain)
                | (Self::CheckedOutExisting, Self::Rewound | Self::Unchanged)
                | (Self::OnMain, Self::Pulled)
                | (Self::Pulled, Self::NewBranchCreated)
        )
    }
}

/// How a successful run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Switched to an existing branch and undid its sentinel commit
    Rewound,
    /// Switched to an existing branch and left its tip alone
    Unchanged,
    /// Created the target branch from the updated main branch
    NewBranchCreated,
}

impl From<Outcome> for State {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Rewound => Self::Rewound,
            Outcome::Unchanged => Self::Unchanged,
            Outcome::NewBranchCreated => Self::NewBranchCreated,
        }
    }
}

/// Summary of a completed run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Whether a sentinel commit was created at the start of the run
    pub protected_changes: bool,
    /// Terminal outcome
    pub outcome: Outcome,
}
