//! View ports: the named display elements the controllers write to.
//!
//! Each port replaces one element lookup of a rendered page. Controllers hold
//! them as `Arc<dyn Port>` so tests can substitute a recording surface and the
//! terminal driver can substitute [`console::ConsoleView`].

pub mod console;
pub mod notice;
#[cfg(test)]
pub(crate) mod recording;

use std::sync::Arc;

use crate::intake::{Slot, SlotStatus};
use crate::models::ResultSource;
use crate::render::{ScoreBand, ScoreGauge};

pub use notice::{DownloadKind, Notice};

/// Status line under each file picker.
pub trait SlotStatusPort: Send + Sync {
    fn show_slot_status(&self, slot: Slot, status: &SlotStatus);
}

/// Drag-over highlight of a drop zone. Presentation only.
pub trait DropZonePort: Send + Sync {
    fn set_highlight(&self, zone: Slot, active: bool);
}

/// The pasted job description text field.
pub trait JobTextPort: Send + Sync {
    fn set_job_text(&self, text: &str);
}

/// Loading overlay and its step labels.
pub trait LoadingPort: Send + Sync {
    fn show_loading(&self);
    fn hide_loading(&self);
    fn set_active_step(&self, index: usize, label: &str);
}

pub trait ScorePort: Send + Sync {
    fn show_score(&self, score: u8, band: ScoreBand, gauge: ScoreGauge);
}

pub trait KeywordPort: Send + Sync {
    fn show_keywords(&self, keywords: &[String]);
}

pub trait SuggestionPort: Send + Sync {
    fn show_suggestions(&self, suggestions: &[String]);
}

/// Results section visibility.
pub trait ResultsPort: Send + Sync {
    fn reveal_results(&self, source: ResultSource);
}

/// User-facing notices (alerts or inline banners).
pub trait NoticePort: Send + Sync {
    fn notify(&self, notice: &Notice);
}

/// Every port a session needs, bundled for injection.
#[derive(Clone)]
pub struct ViewPorts {
    pub slot_status: Arc<dyn SlotStatusPort>,
    pub drop_zone: Arc<dyn DropZonePort>,
    pub job_text: Arc<dyn JobTextPort>,
    pub loading: Arc<dyn LoadingPort>,
    pub score: Arc<dyn ScorePort>,
    pub keywords: Arc<dyn KeywordPort>,
    pub suggestions: Arc<dyn SuggestionPort>,
    pub results: Arc<dyn ResultsPort>,
    pub notices: Arc<dyn NoticePort>,
}

impl ViewPorts {
    /// Wires every port to one surface that implements them all.
    pub fn shared<V>(view: Arc<V>) -> Self
    where
        V: SlotStatusPort
            + DropZonePort
            + JobTextPort
            + LoadingPort
            + ScorePort
            + KeywordPort
            + SuggestionPort
            + ResultsPort
            + NoticePort
            + 'static,
    {
        Self {
            slot_status: view.clone(),
            drop_zone: view.clone(),
            job_text: view.clone(),
            loading: view.clone(),
            score: view.clone(),
            keywords: view.clone(),
            suggestions: view.clone(),
            results: view.clone(),
            notices: view,
        }
    }
}
