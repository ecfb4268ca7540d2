//! Cosmetic "processing" step labels shown while a submission is loading.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use crate::views::LoadingPort;

pub const LOADING_STEPS: [&str; 4] = [
    "Parsing resume",
    "Analyzing job description",
    "Matching keywords",
    "Generating suggestions",
];

/// Cycles [`LOADING_STEPS`] on a fixed interval until stopped or dropped.
pub struct StepTicker {
    handle: JoinHandle<()>,
}

impl StepTicker {
    pub fn start(port: Arc<dyn LoadingPort>, interval: Duration) -> Self {
        let handle = tokio::spawn(async move {
            let mut ticks = tokio::time::interval(interval);
            ticks.set_missed_tick_behavior(MissedTickBehavior::Delay);
            for index in (0..LOADING_STEPS.len()).cycle() {
                ticks.tick().await;
                port.set_active_step(index, LOADING_STEPS[index]);
            }
        });
        Self { handle }
    }

    /// Same as dropping the ticker.
    pub fn stop(self) {}
}

impl Drop for StepTicker {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
