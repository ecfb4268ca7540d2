//! Explicit UI state machine for a single page session.
//!
//! ```text
//! Idle ───────────┐
//! ShowingResults ─┼─> Validating ─> Loading ─> ShowingResults
//! ShowingError ───┘        │                └> ShowingError
//!                          └─> (back to the state it came from)
//! ShowingResults / ShowingError ─> Idle   (reset)
//! ```
//!
//! A submission dropped mid-flight returns the machine to `Idle`.

use serde::Serialize;
use tracing::{debug, warn};

use crate::errors::SubmitError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum UiState {
    #[default]
    Idle,
    Validating,
    Loading,
    ShowingResults,
    ShowingError,
}

impl UiState {
    /// A submission is in flight; new submissions must be rejected.
    pub fn is_busy(self) -> bool {
        matches!(self, UiState::Validating | UiState::Loading)
    }

    /// States a new submission may start from.
    pub fn accepts_submission(self) -> bool {
        matches!(
            self,
            UiState::Idle | UiState::ShowingResults | UiState::ShowingError
        )
    }

    pub fn can_transition_to(self, next: UiState) -> bool {
        use UiState::*;
        match (self, next) {
            (Idle | ShowingResults | ShowingError, Validating) => true,
            // validation rejected: restore whatever was on screen
            (Validating, Idle | ShowingResults | ShowingError) => true,
            (Validating, Loading) => true,
            (Loading, ShowingResults | ShowingError) => true,
            (ShowingResults | ShowingError, Idle) => true,
            _ => false,
        }
    }
}

/// Holds the current [`UiState`] and refuses illegal transitions.
#[derive(Debug, Default)]
pub struct StateMachine {
    current: UiState,
}

impl StateMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> UiState {
        self.current
    }

    pub fn transition(&mut self, next: UiState) -> Result<(), SubmitError> {
        if !self.current.can_transition_to(next) {
            return Err(SubmitError::InvalidTransition {
                from: self.current,
                to: next,
            });
        }
        debug!(from = ?self.current, to = ?next, "ui state transition");
        self.current = next;
        Ok(())
    }

    /// Drops an in-flight submission whose caller went away.
    pub fn abandon(&mut self) {
        if self.current.is_busy() {
            warn!(from = ?self.current, "submission abandoned");
            self.current = UiState::Idle;
        }
    }
}
