use std::path::Path;

use bytes::Bytes;

use crate::errors::IntakeError;

pub const MIME_PDF: &str = "application/pdf";
pub const MIME_DOCX: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";
pub const MIME_TEXT: &str = "text/plain";
pub const MIME_UNKNOWN: &str = "application/octet-stream";

/// A file picked or dropped by the user, held fully in memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub name: String,
    pub size: u64,
    pub mime: String,
    pub bytes: Bytes,
}

impl SelectedFile {
    pub fn new(name: impl Into<String>, mime: impl Into<String>, bytes: impl Into<Bytes>) -> Self {
        let bytes = bytes.into();
        Self {
            name: name.into(),
            size: bytes.len() as u64,
            mime: mime.into(),
            bytes,
        }
    }

    /// Loads a file from disk, deriving the MIME type from its extension.
    pub async fn from_path(path: &Path) -> Result<Self, IntakeError> {
        let bytes = tokio::fs::read(path).await.map_err(|source| IntakeError::Read {
            path: path.display().to_string(),
            source,
        })?;

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        let mime = mime_for_name(&name);

        Ok(Self::new(name, mime, bytes))
    }

    /// Lower-cased extension without the dot, if the name has one.
    pub fn extension(&self) -> Option<String> {
        Path::new(&self.name)
            .extension()
            .map(|e| e.to_string_lossy().to_ascii_lowercase())
    }

    pub fn has_extension(&self, ext: &str) -> bool {
        self.extension().as_deref() == Some(ext)
    }

    /// Plain text by MIME type or by `.txt` suffix.
    pub fn is_plain_text(&self) -> bool {
        self.mime == MIME_TEXT || self.has_extension("txt")
    }
}

pub fn mime_for_name(name: &str) -> &'static str {
    let ext = Path::new(name)
        .extension()
        .map(|e| e.to_string_lossy().to_ascii_lowercase());
    match ext.as_deref() {
        Some("pdf") => MIME_PDF,
        Some("docx") => MIME_DOCX,
        Some("txt") => MIME_TEXT,
        _ => MIME_UNKNOWN,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_size_follows_bytes() {
        let file = SelectedFile::new("cv.pdf", MIME_PDF, vec![0u8; 1536]);
        assert_eq!(file.size, 1536);
    }

    #[test]
    fn test_extension_is_case_insensitive() {
        let file = SelectedFile::new("Resume.DOCX", "", Bytes::new());
        assert_eq!(file.extension().as_deref(), Some("docx"));
        assert!(file.has_extension("docx"));
    }

    #[test]
    fn test_plain_text_by_mime_or_suffix() {
        assert!(SelectedFile::new("jd", MIME_TEXT, Bytes::new()).is_plain_text());
        assert!(SelectedFile::new("jd.txt", "", Bytes::new()).is_plain_text());
        assert!(!SelectedFile::new("jd.pdf", MIME_PDF, Bytes::new()).is_plain_text());
    }

    #[test]
    fn test_mime_for_name() {
        assert_eq!(mime_for_name("a.pdf"), MIME_PDF);
        assert_eq!(mime_for_name("a.TXT"), MIME_TEXT);
        assert_eq!(mime_for_name("a.docx"), MIME_DOCX);
        assert_eq!(mime_for_name("a.png"), MIME_UNKNOWN);
        assert_eq!(mime_for_name("noext"), MIME_UNKNOWN);
    }

    #[tokio::test]
    async fn test_from_path_reads_bytes_and_mime() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("job.txt");
        let mut f = std::fs::File::create(&path).unwrap();
        f.write_all(b"Senior Rust Engineer").unwrap();

        let file = SelectedFile::from_path(&path).await.unwrap();
        assert_eq!(file.name, "job.txt");
        assert_eq!(file.mime, MIME_TEXT);
        assert_eq!(file.size, 20);
        assert_eq!(&file.bytes[..], b"Senior Rust Engineer");
    }

    #[tokio::test]
    async fn test_from_path_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = SelectedFile::from_path(&dir.path().join("nope.pdf"))
            .await
            .unwrap_err();
        assert!(matches!(err, IntakeError::Read { .. }));
    }
}
