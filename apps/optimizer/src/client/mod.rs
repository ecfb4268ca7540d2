//! Optimization service client.
//!
//! The orchestrator only sees [`OptimizationService`]; [`HttpOptimizationService`]
//! is the production backend talking to `POST /optimize` with a multipart body.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use tracing::{debug, warn};

use crate::errors::SubmitError;
use crate::models::{OptimizationResult, OptimizeResponse, SelectedFile, SubmissionRequest};

/// Anything that can turn a submission into a result.
#[async_trait]
pub trait OptimizationService: Send + Sync {
    async fn optimize(&self, request: &SubmissionRequest)
        -> Result<OptimizationResult, SubmitError>;
}

#[derive(Clone)]
pub struct HttpOptimizationService {
    client: Client,
    endpoint: String,
}

impl HttpOptimizationService {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, SubmitError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| SubmitError::ClientSetup(e.to_string()))?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl OptimizationService for HttpOptimizationService {
    async fn optimize(
        &self,
        request: &SubmissionRequest,
    ) -> Result<OptimizationResult, SubmitError> {
        let form = build_form(request);

        let response = self
            .client
            .post(&self.endpoint)
            .multipart(form)
            .send()
            .await
            .map_err(|e| {
                warn!(submission = %request.id, "optimization request failed: {e}");
                SubmitError::Transport(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!(submission = %request.id, "optimization service returned {status}");
            let message = match response.text().await {
                Ok(text) => text,
                Err(e) => {
                    warn!(submission = %request.id, "failed to read error body: {e}");
                    String::new()
                }
            };
            return Err(SubmitError::Server {
                status: status.as_u16(),
                message,
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| SubmitError::Transport(e.to_string()))?;
        let wire: OptimizeResponse =
            serde_json::from_slice(&body).map_err(|e| SubmitError::Decode(e.to_string()))?;

        debug!(submission = %request.id, "optimization response decoded");
        Ok(wire.into())
    }
}

/// Multipart body: `resume`, optional `jobDescriptionFile`, optional
/// `jobDescriptionText`, `template`, `industry`.
fn build_form(request: &SubmissionRequest) -> Form {
    let mut form = Form::new().part("resume", file_part(&request.resume));

    if let Some(job_file) = &request.job_file {
        form = form.part("jobDescriptionFile", file_part(job_file));
    }
    if let Some(text) = &request.job_text {
        form = form.text("jobDescriptionText", text.clone());
    }

    form.text("template", request.options.template.clone())
        .text("industry", request.options.industry.clone())
}

/// File part tagged with the file's MIME type; unparsable types are left off.
fn file_part(file: &SelectedFile) -> Part {
    let part = || Part::bytes(file.bytes.to_vec()).file_name(file.name.clone());
    part().mime_str(&file.mime).unwrap_or_else(|_| {
        debug!(file = %file.name, mime = %file.mime, "sending file part without content type");
        part()
    })
}
