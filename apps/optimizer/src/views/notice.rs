use std::fmt;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DownloadKind {
    Report,
    OptimizedResume,
}

/// Messages surfaced to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Notice {
    /// Pre-submission validation failed.
    Invalid(String),
    /// The service was unreachable; simulated results follow.
    DemoMode,
    /// Server or decode failure.
    Failure(String),
    /// Body text the service sent with an error status.
    Detail(String),
    /// Keywords the service found in the job description but not the resume.
    MissingKeywords(Vec<String>),
    /// Free-text advice returned alongside a result.
    Recommendation(String),
    Download {
        kind: DownloadKind,
        url: Option<String>,
    },
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::Invalid(msg) => write!(f, "{msg}"),
            Notice::DemoMode => write!(
                f,
                "Backend server is not running. Starting demo mode with simulated results."
            ),
            Notice::Failure(msg) => write!(
                f,
                "Error: {msg}. Please check if the backend server is running."
            ),
            Notice::Detail(text) => write!(f, "Details: {text}"),
            Notice::MissingKeywords(keywords) => {
                write!(f, "Missing keywords: {}", keywords.join(", "))
            }
            Notice::Recommendation(text) => write!(f, "{text}"),
            Notice::Download { kind, url: Some(url) } => match kind {
                DownloadKind::Report => write!(f, "Optimization report available at {url}"),
                DownloadKind::OptimizedResume => write!(f, "Optimized resume available at {url}"),
            },
            Notice::Download { kind, url: None } => match kind {
                DownloadKind::Report => write!(
                    f,
                    "In a full implementation, this would open the detailed optimization report."
                ),
                DownloadKind::OptimizedResume => write!(
                    f,
                    "In a full implementation, this would download the optimized resume file."
                ),
            },
        }
    }
}
