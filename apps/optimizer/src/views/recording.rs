use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use super::*;

/// What a page would currently display.
#[derive(Debug, Clone, Default)]
pub(crate) struct Display {
    pub statuses: HashMap<Slot, SlotStatus>,
    pub highlighted: HashMap<Slot, bool>,
    pub job_text: Option<String>,
    pub loading_visible: bool,
    pub steps: Vec<(usize, String)>,
    pub score: Option<(u8, ScoreBand, ScoreGauge)>,
    pub keywords: Vec<String>,
    pub suggestions: Vec<String>,
    pub revealed: Option<ResultSource>,
    pub notices: Vec<Notice>,
}

/// In-memory surface for tests.
#[derive(Debug, Default)]
pub(crate) struct RecordingView {
    display: Mutex<Display>,
}

impl RecordingView {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn ports(self: &Arc<Self>) -> ViewPorts {
        ViewPorts::shared(self.clone())
    }

    pub fn display(&self) -> MutexGuard<'_, Display> {
        self.display.lock().unwrap()
    }

    pub fn snapshot(&self) -> Display {
        self.display().clone()
    }
}

impl SlotStatusPort for RecordingView {
    fn show_slot_status(&self, slot: Slot, status: &SlotStatus) {
        self.display().statuses.insert(slot, status.clone());
    }
}

impl DropZonePort for RecordingView {
    fn set_highlight(&self, zone: Slot, active: bool) {
        self.display().highlighted.insert(zone, active);
    }
}

impl JobTextPort for RecordingView {
    fn set_job_text(&self, text: &str) {
        self.display().job_text = Some(text.to_string());
    }
}

impl LoadingPort for RecordingView {
    fn show_loading(&self) {
        self.display().loading_visible = true;
    }

    fn hide_loading(&self) {
        self.display().loading_visible = false;
    }

    fn set_active_step(&self, index: usize, label: &str) {
        self.display().steps.push((index, label.to_string()));
    }
}

impl ScorePort for RecordingView {
    fn show_score(&self, score: u8, band: ScoreBand, gauge: ScoreGauge) {
        self.display().score = Some((score, band, gauge));
    }
}

impl KeywordPort for RecordingView {
    fn show_keywords(&self, keywords: &[String]) {
        self.display().keywords = keywords.to_vec();
    }
}

impl SuggestionPort for RecordingView {
    fn show_suggestions(&self, suggestions: &[String]) {
        self.display().suggestions = suggestions.to_vec();
    }
}

impl ResultsPort for RecordingView {
    fn reveal_results(&self, source: ResultSource) {
        self.display().revealed = Some(source);
    }
}

impl NoticePort for RecordingView {
    fn notify(&self, notice: &Notice) {
        self.display().notices.push(notice.clone());
    }
}
