use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::SubmitError;
use crate::intake::FileSlot;
use crate::models::SelectedFile;

/// The two selector values sent with every submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitOptions {
    pub template: String,
    pub industry: String,
}

impl Default for SubmitOptions {
    fn default() -> Self {
        Self {
            template: "modern".to_string(),
            industry: "technology".to_string(),
        }
    }
}

/// One submit action's worth of input. Never persisted.
#[derive(Debug, Clone)]
pub struct SubmissionRequest {
    pub id: Uuid,
    pub resume: SelectedFile,
    pub job_file: Option<SelectedFile>,
    /// Trimmed; `None` when the field was blank.
    pub job_text: Option<String>,
    pub options: SubmitOptions,
}

impl SubmissionRequest {
    /// Validates the form and assembles a request.
    ///
    /// A resume is mandatory. A job description must come from a file or from
    /// non-blank text.
    pub fn build(
        resume: &FileSlot,
        job: &FileSlot,
        job_text: &str,
        options: &SubmitOptions,
    ) -> Result<Self, SubmitError> {
        let resume = resume.file().ok_or(SubmitError::MissingResume)?;
        let job_file = job.file();
        let job_text = Some(job_text.trim())
            .filter(|t| !t.is_empty())
            .map(str::to_string);

        if job_file.is_none() && job_text.is_none() {
            return Err(SubmitError::MissingJobDescription);
        }

        Ok(Self {
            id: Uuid::new_v4(),
            resume: resume.clone(),
            job_file: job_file.cloned(),
            job_text,
            options: options.clone(),
        })
    }
}
