//! Resume Optimizer interaction core.
//!
//! File intake for a resume and a job description, submission to an external
//! optimization service with a simulated fallback, and result rendering, all
//! written against injected view ports.

pub mod client;
pub mod config;
pub mod errors;
pub mod intake;
pub mod models;
pub mod render;
pub mod rng;
pub mod state;
pub mod submission;
pub mod views;

pub use client::{HttpOptimizationService, OptimizationService};
pub use config::Config;
pub use errors::{IntakeError, SubmitError};
pub use intake::{IntakeController, Slot};
pub use models::{OptimizationResult, SelectedFile, SubmitOptions};
pub use state::UiState;
pub use submission::SubmissionOrchestrator;
