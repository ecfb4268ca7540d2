//! Intake Controller: file selection, drag-and-drop and the job text field.

pub mod decode;
pub mod format;
pub mod slot;

use tracing::{debug, info};

use crate::models::SelectedFile;
use crate::views::ViewPorts;

pub use decode::{DecodeTicket, DecodedText, PendingDecode};
pub use format::format_bytes;
pub use slot::{FileSlot, Slot, SlotStatus};

/// Drag events a drop zone reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragKind {
    Enter,
    Over,
    Leave,
}

/// Result of handling a drop.
#[derive(Debug)]
pub struct DropOutcome {
    /// Always true: the host must suppress the browser's own open/navigate.
    pub prevent_default: bool,
    pub decode: Option<PendingDecode>,
}

pub struct IntakeController {
    resume: FileSlot,
    job: FileSlot,
    job_text: String,
    /// Bumped whenever the job description slot changes.
    job_generation: u64,
    /// Bumped on every write to `job_text`.
    text_generation: u64,
    views: ViewPorts,
}

impl IntakeController {
    pub fn new(views: ViewPorts) -> Self {
        Self {
            resume: FileSlot::default(),
            job: FileSlot::default(),
            job_text: String::new(),
            job_generation: 0,
            text_generation: 0,
            views,
        }
    }

    /// Handles a file picked for `slot`.
    ///
    /// Returns a pending decode when an accepted plain-text job description
    /// should be copied into the job text field.
    pub fn on_file_selected(&mut self, slot: Slot, file: SelectedFile) -> Option<PendingDecode> {
        let accepted = slot.accepts(&file);
        let wants_decode = accepted && slot == Slot::JobDescription && file.is_plain_text();
        let pending_file = wants_decode.then(|| file.clone());

        let target = self.slot_mut(slot);
        if accepted {
            info!(slot = slot.label(), file = %file.name, size = file.size, "file accepted");
            target.accept(file);
        } else {
            info!(slot = slot.label(), file = %file.name, mime = %file.mime, "file rejected");
            target.reject(slot.rejection_message());
        }
        let status = target.status().clone();

        if slot == Slot::JobDescription {
            self.job_generation += 1;
        }
        self.views.slot_status.show_slot_status(slot, &status);

        pending_file.map(|file| PendingDecode {
            ticket: self.ticket(),
            file,
        })
    }

    /// Handles a drop onto `zone`; only the first file is considered.
    pub fn on_drop(&mut self, zone: Slot, files: Vec<SelectedFile>) -> DropOutcome {
        self.views.drop_zone.set_highlight(zone, false);

        let decode = match files.into_iter().next() {
            Some(file) => self.on_file_selected(zone, file),
            None => {
                let target = self.slot_mut(zone);
                target.reject(zone.rejection_message());
                let status = target.status().clone();
                if zone == Slot::JobDescription {
                    self.job_generation += 1;
                }
                self.views.slot_status.show_slot_status(zone, &status);
                None
            }
        };

        DropOutcome {
            prevent_default: true,
            decode,
        }
    }

    /// Highlight feedback while dragging. Returns whether default handling
    /// must be suppressed, which is always the case for drop zones.
    pub fn on_drag(&self, zone: Slot, kind: DragKind) -> bool {
        let active = matches!(kind, DragKind::Enter | DragKind::Over);
        self.views.drop_zone.set_highlight(zone, active);
        true
    }

    /// The user typed into the job description field.
    pub fn on_job_text_input(&mut self, text: impl Into<String>) {
        self.job_text = text.into();
        self.text_generation += 1;
    }

    /// Applies decoded file text unless it has gone stale.
    ///
    /// Returns false when a newer job file was chosen or the user edited the
    /// text after the decode was issued.
    pub fn apply_decoded(&mut self, decoded: DecodedText) -> bool {
        if decoded.ticket != self.ticket() {
            debug!(
                ticket = ?decoded.ticket,
                current = ?self.ticket(),
                "discarding stale job description decode"
            );
            return false;
        }

        self.job_text = decoded.text;
        self.text_generation += 1;
        self.views.job_text.set_job_text(&self.job_text);
        true
    }

    pub fn clear(&mut self, slot: Slot) {
        self.slot_mut(slot).clear();
        if slot == Slot::JobDescription {
            self.job_generation += 1;
        }
        self.views.slot_status.show_slot_status(slot, &SlotStatus::Empty);
    }

    pub fn resume_slot(&self) -> &FileSlot {
        &self.resume
    }

    pub fn job_slot(&self) -> &FileSlot {
        &self.job
    }

    pub fn job_text(&self) -> &str {
        &self.job_text
    }

    fn ticket(&self) -> DecodeTicket {
        DecodeTicket {
            job_generation: self.job_generation,
            text_generation: self.text_generation,
        }
    }

    fn slot_mut(&mut self, slot: Slot) -> &mut FileSlot {
        match slot {
            Slot::Resume => &mut self.resume,
            Slot::JobDescription => &mut self.job,
        }
    }
}
