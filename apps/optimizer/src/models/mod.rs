pub mod file;
pub mod request;
pub mod result;

pub use file::SelectedFile;
pub use request::{SubmissionRequest, SubmitOptions};
pub use result::{OptimizationResult, OptimizeResponse, ResultSource, DEFAULT_MATCH_SCORE};
