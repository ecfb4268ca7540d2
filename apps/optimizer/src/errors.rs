use thiserror::Error;

use crate::state::UiState;

/// Everything that can end a submission attempt.
///
/// Only [`SubmitError::Transport`] is eligible for the simulated fallback;
/// every other variant is surfaced to the user as-is and never retried.
#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("Please upload your resume file.")]
    MissingResume,

    #[error("Please provide a job description (upload file or paste text).")]
    MissingJobDescription,

    #[error("Could not reach the optimization service: {0}")]
    Transport(String),

    #[error("Server error: {status}")]
    Server { status: u16, message: String },

    #[error("Malformed response from the optimization service: {0}")]
    Decode(String),

    #[error("Failed to build the HTTP client: {0}")]
    ClientSetup(String),

    #[error("A submission is already in progress")]
    SubmissionInFlight,

    #[error("Illegal state transition from {from:?} to {to:?}")]
    InvalidTransition { from: UiState, to: UiState },
}

impl SubmitError {
    /// True for failures that happen before the service answers at all.
    pub fn is_fallback_eligible(&self) -> bool {
        matches!(self, SubmitError::Transport(_))
    }

    /// Response body sent with an error status, when there is one.
    pub fn detail(&self) -> Option<&str> {
        match self {
            SubmitError::Server { message, .. } if !message.trim().is_empty() => {
                Some(message.trim())
            }
            _ => None,
        }
    }

    /// Pre-submission validation failures; the request never leaves the client.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            SubmitError::MissingResume | SubmitError::MissingJobDescription
        )
    }
}

/// Errors raised while bringing a file into a slot.
#[derive(Debug, Error)]
pub enum IntakeError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Text decode was aborted: {0}")]
    DecodeAborted(String),
}
