//! Submission Orchestrator: validation, the service call, the simulated
//! fallback and hand-off to the renderer.
//!
//! Only one submission may be in flight; a second `submit` while loading is
//! rejected with [`SubmitError::SubmissionInFlight`]. The step ticker lives for
//! exactly the loading phase on every path, including an abandoned future,
//! and so does the loading indicator.

pub mod simulator;
pub mod ticker;

use std::sync::Arc;
use std::time::Duration;

use tracing::{info, warn};

use crate::client::OptimizationService;
use crate::config::Config;
use crate::errors::SubmitError;
use crate::intake::IntakeController;
use crate::models::{OptimizationResult, SubmissionRequest, SubmitOptions};
use crate::render::ResultRenderer;
use crate::state::{StateMachine, UiState};
use crate::views::{DownloadKind, LoadingPort, Notice, ViewPorts};

pub use simulator::FallbackSimulator;
pub use ticker::{StepTicker, LOADING_STEPS};

pub struct SubmissionOrchestrator {
    state: StateMachine,
    service: Arc<dyn OptimizationService>,
    renderer: ResultRenderer,
    simulator: FallbackSimulator,
    views: ViewPorts,
    fallback_delay: Duration,
    step_interval: Duration,
    last_result: Option<OptimizationResult>,
    last_error: Option<String>,
}

impl SubmissionOrchestrator {
    pub fn new(service: Arc<dyn OptimizationService>, views: ViewPorts, config: &Config) -> Self {
        let renderer = ResultRenderer::new(views.clone(), config.keyword_selection);
        renderer.initialize();
        Self {
            state: StateMachine::new(),
            service,
            renderer,
            simulator: FallbackSimulator::default(),
            views,
            fallback_delay: config.fallback_delay,
            step_interval: config.step_interval,
            last_result: None,
            last_error: None,
        }
    }

    pub fn with_simulator(mut self, simulator: FallbackSimulator) -> Self {
        self.simulator = simulator;
        self
    }

    pub fn state(&self) -> UiState {
        self.state.current()
    }

    pub fn last_result(&self) -> Option<&OptimizationResult> {
        self.last_result.as_ref()
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Validates the intake form and runs one submission to completion.
    ///
    /// Every failure is also reported through the notice port before it is
    /// returned. A transport failure is not a failure: it produces a
    /// simulated result after the fallback delay.
    pub async fn submit(
        &mut self,
        intake: &IntakeController,
        options: &SubmitOptions,
    ) -> Result<OptimizationResult, SubmitError> {
        let previous = self.state.current();
        if !previous.accepts_submission() {
            warn!(state = ?previous, "rejecting submission while another is in flight");
            return Err(SubmitError::SubmissionInFlight);
        }

        self.state.transition(UiState::Validating)?;
        let request = match SubmissionRequest::build(
            intake.resume_slot(),
            intake.job_slot(),
            intake.job_text(),
            options,
        ) {
            Ok(request) => request,
            Err(e) => {
                self.views.notices.notify(&Notice::Invalid(e.to_string()));
                self.state.transition(previous)?;
                return Err(e);
            }
        };

        self.state.transition(UiState::Loading)?;
        let in_flight = InFlight::new(&mut self.state);

        info!(
            submission = %request.id,
            resume = %request.resume.name,
            job_file = request.job_file.as_ref().map(|f| f.name.as_str()),
            has_job_text = request.job_text.is_some(),
            "submitting for optimization"
        );

        let loading = LoadingGuard::show(self.views.loading.clone());
        let ticker = StepTicker::start(self.views.loading.clone(), self.step_interval);

        let outcome = match self.service.optimize(&request).await {
            Ok(result) => Ok(result),
            Err(e) if e.is_fallback_eligible() => {
                warn!(submission = %request.id, "service unreachable, using simulated results: {e}");
                self.views.notices.notify(&Notice::DemoMode);
                tokio::time::sleep(self.fallback_delay).await;
                Ok(self.simulator.synthesize())
            }
            Err(e) => Err(e),
        };

        ticker.stop();
        drop(loading);

        match outcome {
            Ok(result) => {
                in_flight.finish(UiState::ShowingResults)?;
                self.renderer.render(&result);
                if !result.missing_keywords.is_empty() {
                    self.views
                        .notices
                        .notify(&Notice::MissingKeywords(result.missing_keywords.clone()));
                }
                if let Some(text) = &result.recommendation {
                    self.views
                        .notices
                        .notify(&Notice::Recommendation(text.clone()));
                }
                info!(
                    submission = %request.id,
                    score = result.match_score,
                    simulated = result.is_simulated(),
                    "optimization result shown"
                );
                self.last_result = Some(result.clone());
                self.last_error = None;
                Ok(result)
            }
            Err(e) => {
                in_flight.finish(UiState::ShowingError)?;
                warn!(submission = %request.id, "submission failed: {e}");
                self.views.notices.notify(&Notice::Failure(e.to_string()));
                if let Some(detail) = e.detail() {
                    self.views.notices.notify(&Notice::Detail(detail.to_string()));
                }
                self.last_error = Some(e.to_string());
                Err(e)
            }
        }
    }

    /// Leaves a results or error screen and returns to `Idle`.
    pub fn reset(&mut self) -> Result<(), SubmitError> {
        self.state.transition(UiState::Idle)?;
        self.last_result = None;
        self.last_error = None;
        Ok(())
    }

    pub fn download(&self, kind: DownloadKind) {
        self.renderer.download(kind, self.last_result.as_ref());
    }
}

/// Keeps the loading indicator up for as long as it lives.
struct LoadingGuard {
    port: Arc<dyn LoadingPort>,
}

impl LoadingGuard {
    fn show(port: Arc<dyn LoadingPort>) -> Self {
        port.show_loading();
        Self { port }
    }
}

impl Drop for LoadingGuard {
    fn drop(&mut self) {
        self.port.hide_loading();
    }
}

/// Returns the state machine to `Idle` if the submission future is dropped
/// before it finishes.
struct InFlight<'a> {
    state: Option<&'a mut StateMachine>,
}

impl<'a> InFlight<'a> {
    fn new(state: &'a mut StateMachine) -> Self {
        Self { state: Some(state) }
    }

    fn finish(mut self, next: UiState) -> Result<(), SubmitError> {
        match self.state.take() {
            Some(state) => state.transition(next),
            None => Ok(()),
        }
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if let Some(state) = self.state.take() {
            state.abandon();
        }
    }
}
