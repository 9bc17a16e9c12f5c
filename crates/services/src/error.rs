//! Shared error types for the services crate.

use thiserror::Error;

/// One failed submission attempt.
///
/// The retry loop treats every variant identically; the distinction exists
/// for diagnostics only.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AttemptFailure {
    #[error("request failed with status {0}")]
    Status(reqwest::StatusCode),

    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    #[error("server rejected the submission: {}", message.as_deref().unwrap_or("no message"))]
    Rejected { message: Option<String> },

    #[error("response body carried no assessment id")]
    MissingAssessmentId,
}

/// Errors emitted by `SubmissionService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SubmissionError {
    #[error("submission failed after {attempts} attempts")]
    Exhausted {
        attempts: u32,
        #[source]
        last: AttemptFailure,
    },
}
