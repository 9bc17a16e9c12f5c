#![forbid(unsafe_code)]

pub mod api;
pub mod error;
pub mod results;
pub mod retry;
pub mod submission;

pub use assess_core::Clock;

pub use api::{ApiConfig, AssessmentApi, HttpApi, SubmitResponseBody, WireRecommendation};
pub use error::{AttemptFailure, SubmissionError};
pub use results::ResultsStore;
pub use retry::RetryPolicy;
pub use submission::{AssessmentOutcome, SubmissionService};
