use serde::Serialize;

use crate::intake::format::format_bytes;
use crate::models::file::{MIME_PDF, MIME_TEXT};
use crate::models::SelectedFile;

/// One of the two file intake targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Slot {
    Resume,
    JobDescription,
}

impl Slot {
    /// Resume: PDF, DOCX or TXT. Job description: TXT, DOCX or PDF.
    /// MIME type or extension is enough; extensions match case-insensitively.
    pub fn accepts(self, file: &SelectedFile) -> bool {
        let by_mime = match self {
            Slot::Resume => file.mime == MIME_PDF,
            Slot::JobDescription => file.mime == MIME_TEXT,
        };
        by_mime || ["pdf", "docx", "txt"].iter().any(|ext| file.has_extension(ext))
    }

    pub fn rejection_message(self) -> &'static str {
        match self {
            Slot::Resume => "Please upload PDF, DOCX, or TXT files only",
            Slot::JobDescription => "Please upload TXT, DOCX, or PDF files only",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Slot::Resume => "resume",
            Slot::JobDescription => "job description",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub enum SlotStatus {
    #[default]
    Empty,
    Valid { summary: String },
    Invalid { reason: String },
}

impl SlotStatus {
    pub fn message(&self) -> &str {
        match self {
            SlotStatus::Empty => "",
            SlotStatus::Valid { summary } => summary,
            SlotStatus::Invalid { reason } => reason,
        }
    }
}

/// File slot state. A rejected file is not retained.
#[derive(Debug, Clone, Default)]
pub struct FileSlot {
    file: Option<SelectedFile>,
    status: SlotStatus,
}

impl FileSlot {
    pub(crate) fn accept(&mut self, file: SelectedFile) {
        self.status = SlotStatus::Valid {
            summary: format!("{} ({})", file.name, format_bytes(file.size)),
        };
        self.file = Some(file);
    }

    pub(crate) fn reject(&mut self, reason: &str) {
        self.file = None;
        self.status = SlotStatus::Invalid {
            reason: reason.to_string(),
        };
    }

    pub(crate) fn clear(&mut self) {
        *self = FileSlot::default();
    }

    /// The selected file, present only while the slot is valid.
    pub fn file(&self) -> Option<&SelectedFile> {
        match self.status {
            SlotStatus::Valid { .. } => self.file.as_ref(),
            _ => None,
        }
    }

    pub fn status(&self) -> &SlotStatus {
        &self.status
    }

    pub fn is_valid(&self) -> bool {
        matches!(self.status, SlotStatus::Valid { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::file::MIME_DOCX;

    fn file(name: &str, mime: &str) -> SelectedFile {
        SelectedFile::new(name, mime, vec![0u8; 2048])
    }

    #[test]
    fn test_resume_accepts_pdf_docx_txt() {
        assert!(Slot::Resume.accepts(&file("cv.pdf", MIME_PDF)));
        assert!(Slot::Resume.accepts(&file("cv", MIME_PDF)));
        assert!(Slot::Resume.accepts(&file("cv.docx", MIME_DOCX)));
        assert!(Slot::Resume.accepts(&file("cv.TXT", "")));
        assert!(!Slot::Resume.accepts(&file("cv.png", "image/png")));
        assert!(!Slot::Resume.accepts(&file("cv", MIME_TEXT)));
    }

    #[test]
    fn test_job_description_accepts_text_mime() {
        assert!(Slot::JobDescription.accepts(&file("jd", MIME_TEXT)));
        assert!(Slot::JobDescription.accepts(&file("jd.pdf", "")));
        assert!(!Slot::JobDescription.accepts(&file("jd.rtf", "application/rtf")));
    }

    #[test]
    fn test_accept_formats_summary() {
        let mut slot = FileSlot::default();
        slot.accept(file("cv.pdf", MIME_PDF));
        assert!(slot.is_valid());
        assert_eq!(slot.status().message(), "cv.pdf (2 KB)");
        assert_eq!(slot.file().map(|f| f.name.as_str()), Some("cv.pdf"));
    }

    #[test]
    fn test_reject_drops_previous_file() {
        let mut slot = FileSlot::default();
        slot.accept(file("cv.pdf", MIME_PDF));
        slot.reject(Slot::Resume.rejection_message());
        assert!(slot.file().is_none());
        assert_eq!(
            slot.status(),
            &SlotStatus::Invalid {
                reason: "Please upload PDF, DOCX, or TXT files only".into()
            }
        );
    }
}
