use std::io::Write;
use std::sync::Mutex;

use tracing::{debug, warn};

use super::*;

/// Terminal surface used by the `optimizer` binary.
pub struct ConsoleView {
    out: Mutex<Box<dyn Write + Send>>,
}

impl ConsoleView {
    pub fn stdout() -> Self {
        Self::new(Box::new(std::io::stdout()))
    }

    pub fn new(out: Box<dyn Write + Send>) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    fn line(&self, text: &str) {
        let Ok(mut out) = self.out.lock() else {
            return;
        };
        if let Err(e) = writeln!(out, "{text}") {
            warn!("console write failed: {e}");
        }
    }
}

impl SlotStatusPort for ConsoleView {
    fn show_slot_status(&self, slot: Slot, status: &SlotStatus) {
        match status {
            SlotStatus::Empty => {}
            SlotStatus::Valid { summary } => self.line(&format!("✓ {}: {summary}", slot.label())),
            SlotStatus::Invalid { reason } => self.line(&format!("✗ {}: {reason}", slot.label())),
        }
    }
}

impl DropZonePort for ConsoleView {
    fn set_highlight(&self, zone: Slot, active: bool) {
        debug!(zone = zone.label(), active, "drop zone highlight");
    }
}

impl JobTextPort for ConsoleView {
    fn set_job_text(&self, text: &str) {
        debug!(chars = text.chars().count(), "job description text updated");
    }
}

impl LoadingPort for ConsoleView {
    fn show_loading(&self) {
        self.line("Optimizing…");
    }

    fn hide_loading(&self) {}

    fn set_active_step(&self, index: usize, label: &str) {
        self.line(&format!("  [{}] {label}", index + 1));
    }
}

impl ScorePort for ConsoleView {
    fn show_score(&self, score: u8, band: ScoreBand, _gauge: ScoreGauge) {
        self.line(&format!("Match score: {score}% ({})", band.as_str()));
    }
}

impl KeywordPort for ConsoleView {
    fn show_keywords(&self, keywords: &[String]) {
        self.line(&format!("Keywords: {}", keywords.join(", ")));
    }
}

impl SuggestionPort for ConsoleView {
    fn show_suggestions(&self, suggestions: &[String]) {
        self.line("Suggestions:");
        for s in suggestions {
            self.line(&format!("  - {s}"));
        }
    }
}

impl ResultsPort for ConsoleView {
    fn reveal_results(&self, source: ResultSource) {
        if source == ResultSource::Simulated {
            self.line("(simulated results: optimization service unavailable)");
        }
    }
}

impl NoticePort for ConsoleView {
    fn notify(&self, notice: &Notice) {
        self.line(&format!("! {notice}"));
    }
}
