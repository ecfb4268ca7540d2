//! Cancellable text decode for plain-text job description files.
//!
//! A [`PendingDecode`] is issued with a [`DecodeTicket`] that snapshots the
//! job slot's generation and the job text's generation. The decoded text is
//! applied only while both are unchanged, so a slow read can never clobber a
//! newer file selection or newer typing.

use tracing::debug;

use crate::errors::IntakeError;
use crate::models::SelectedFile;

const UTF8_BOM: &str = "\u{feff}";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeTicket {
    pub(crate) job_generation: u64,
    pub(crate) text_generation: u64,
}

/// A read that has been requested but not yet performed.
#[derive(Debug, Clone)]
pub struct PendingDecode {
    pub ticket: DecodeTicket,
    pub file: SelectedFile,
}

/// Text produced by a finished read, still waiting to be applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedText {
    pub ticket: DecodeTicket,
    pub text: String,
}

impl PendingDecode {
    /// Decodes the file on the blocking pool.
    pub async fn read(self) -> Result<DecodedText, IntakeError> {
        let name = self.file.name.clone();
        let bytes = self.file.bytes;
        let text = tokio::task::spawn_blocking(move || decode_text(&bytes))
            .await
            .map_err(|e| IntakeError::DecodeAborted(e.to_string()))?;

        debug!(file = %name, chars = text.chars().count(), "decoded job description text");
        Ok(DecodedText {
            ticket: self.ticket,
            text,
        })
    }
}

/// UTF-8 decode with replacement characters; a leading BOM is dropped.
pub fn decode_text(bytes: &[u8]) -> String {
    let text = String::from_utf8_lossy(bytes);
    text.strip_prefix(UTF8_BOM).unwrap_or(&text).to_string()
}
