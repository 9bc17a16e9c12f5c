use std::collections::HashMap;
use std::env;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use assess_core::model::SubmissionPayload;

use crate::error::AttemptFailure;

/// Where to reach the assessment backend.
#[derive(Clone, Debug)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    /// Local dev server default.
    pub const DEFAULT_BASE_URL: &'static str = "http://127.0.0.1:5001";

    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Reads `ASSESS_API_URL`, falling back to the default base URL.
    #[must_use]
    pub fn from_env() -> Self {
        let base_url = env::var("ASSESS_API_URL")
            .ok()
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| Self::DEFAULT_BASE_URL.to_string());
        Self { base_url }
    }

    fn submit_endpoint(&self) -> String {
        format!(
            "{}/api/submit_assessment",
            self.base_url.trim_end_matches('/')
        )
    }
}

//
// ─── WIRE TYPES ────────────────────────────────────────────────────────────────
//

/// Body of a decoded submit response.
///
/// Everything except the success flag is optional on the wire; the
/// submission service decides what a usable success looks like.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SubmitResponseBody {
    pub success: bool,
    #[serde(default)]
    pub assessment_id: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub overall_score: Option<f64>,
    #[serde(default)]
    pub category_scores: HashMap<String, f64>,
    #[serde(default)]
    pub recommendations: Vec<WireRecommendation>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WireRecommendation {
    pub priority: String,
    pub category: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub actions: Vec<String>,
}

//
// ─── TRANSPORT SEAM ────────────────────────────────────────────────────────────
//

/// One submission attempt against the backend.
///
/// Implementations perform exactly one request; retry scheduling lives in
/// `SubmissionService` so tests can script attempt outcomes.
#[async_trait]
pub trait AssessmentApi: Send + Sync {
    async fn submit_assessment(
        &self,
        payload: &SubmissionPayload,
    ) -> Result<SubmitResponseBody, AttemptFailure>;
}

/// Production transport: JSON POST over a shared `reqwest` client.
pub struct HttpApi {
    client: Client,
    config: ApiConfig,
}

impl HttpApi {
    #[must_use]
    pub fn new(config: ApiConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    #[must_use]
    pub fn from_env() -> Self {
        Self::new(ApiConfig::from_env())
    }
}

#[async_trait]
impl AssessmentApi for HttpApi {
    async fn submit_assessment(
        &self,
        payload: &SubmissionPayload,
    ) -> Result<SubmitResponseBody, AttemptFailure> {
        let response = self
            .client
            .post(self.config.submit_endpoint())
            .json(payload)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(AttemptFailure::Status(response.status()));
        }

        let body: SubmitResponseBody = response.json().await?;
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_joins_without_double_slash() {
        let config = ApiConfig::new("https://assess.example.com/");
        assert_eq!(
            config.submit_endpoint(),
            "https://assess.example.com/api/submit_assessment"
        );
    }

    #[test]
    fn response_body_tolerates_minimal_payloads() {
        let body: SubmitResponseBody =
            serde_json::from_str(r#"{"success": false, "message": "nope"}"#).unwrap();
        assert!(!body.success);
        assert_eq!(body.message.as_deref(), Some("nope"));
        assert!(body.category_scores.is_empty());
        assert!(body.recommendations.is_empty());
    }

    #[test]
    fn response_body_decodes_full_payload() {
        let body: SubmitResponseBody = serde_json::from_str(
            r#"{
                "success": true,
                "assessment_id": "abc-123",
                "overall_score": 3.42,
                "category_scores": {"leadership": 4.0, "data": 2.67},
                "recommendations": [{
                    "priority": "High",
                    "category": "Leadership & Strategy",
                    "title": "Strengthen Leadership Alignment",
                    "description": "Build stronger executive support.",
                    "actions": ["Develop comprehensive AI business case"]
                }]
            }"#,
        )
        .unwrap();

        assert!(body.success);
        assert_eq!(body.assessment_id.as_deref(), Some("abc-123"));
        assert_eq!(body.category_scores.len(), 2);
        assert_eq!(body.recommendations[0].actions.len(), 1);
    }
}
