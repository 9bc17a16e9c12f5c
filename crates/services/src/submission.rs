use std::sync::Arc;

use tracing::warn;

use assess_core::Clock;
use assess_core::model::{
    AssessmentId, AssessmentResult, CategoryId, CategoryScore, Recommendation, SubmissionPayload,
};

use crate::api::{AssessmentApi, SubmitResponseBody};
use crate::error::{AttemptFailure, SubmissionError};
use crate::retry::RetryPolicy;

/// What a successful submission chain yields: the server-issued id and the
/// shaped result for the results view.
#[derive(Debug, Clone, PartialEq)]
pub struct AssessmentOutcome {
    pub assessment_id: AssessmentId,
    pub result: AssessmentResult,
}

/// Drives one logical submission: a sequence of attempts over the transport
/// seam, spaced by the retry policy.
///
/// Callers are expected to run at most one chain per user action; the view
/// layer enforces that by disabling the submit control while a chain runs.
pub struct SubmissionService {
    api: Arc<dyn AssessmentApi>,
    policy: RetryPolicy,
    clock: Clock,
}

impl SubmissionService {
    #[must_use]
    pub fn new(api: Arc<dyn AssessmentApi>) -> Self {
        Self {
            api,
            policy: RetryPolicy::default(),
            clock: Clock::default_clock(),
        }
    }

    #[must_use]
    pub fn with_policy(mut self, policy: RetryPolicy) -> Self {
        self.policy = policy;
        self
    }

    #[must_use]
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    /// Submits the payload, re-sending it unchanged on failure until the
    /// retry budget is spent. Attempts are strictly sequential.
    ///
    /// # Errors
    ///
    /// Returns `SubmissionError::Exhausted` carrying the final attempt's
    /// failure once every attempt has failed. Individual attempt failures
    /// never escape the loop.
    pub async fn submit(
        &self,
        payload: &SubmissionPayload,
    ) -> Result<AssessmentOutcome, SubmissionError> {
        let mut attempt_index: u32 = 0;
        loop {
            match self.attempt(payload).await {
                Ok(outcome) => return Ok(outcome),
                Err(failure) => {
                    warn!(
                        attempt = attempt_index + 1,
                        error = %failure,
                        "assessment submission attempt failed"
                    );
                    if attempt_index >= self.policy.max_retries {
                        return Err(SubmissionError::Exhausted {
                            attempts: attempt_index + 1,
                            last: failure,
                        });
                    }
                    tokio::time::sleep(self.policy.delay_after(attempt_index)).await;
                    attempt_index += 1;
                }
            }
        }
    }

    async fn attempt(
        &self,
        payload: &SubmissionPayload,
    ) -> Result<AssessmentOutcome, AttemptFailure> {
        let body = self.api.submit_assessment(payload).await?;

        if !body.success {
            return Err(AttemptFailure::Rejected {
                message: body.message,
            });
        }

        let assessment_id = body
            .assessment_id
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .map(AssessmentId::new)
            .ok_or(AttemptFailure::MissingAssessmentId)?;

        let result = shape_result(payload, body, self.clock);
        Ok(AssessmentOutcome {
            assessment_id,
            result,
        })
    }
}

fn shape_result(
    payload: &SubmissionPayload,
    body: SubmitResponseBody,
    clock: Clock,
) -> AssessmentResult {
    let mut category_scores: Vec<CategoryScore> = body
        .category_scores
        .into_iter()
        .map(|(category, score)| CategoryScore {
            category: CategoryId::new(category),
            score,
        })
        .collect();
    // The wire map has no order; fix one so renders and summaries are stable.
    category_scores.sort_by(|a, b| a.category.cmp(&b.category));

    let recommendations = body
        .recommendations
        .into_iter()
        .map(|rec| Recommendation {
            priority: rec.priority,
            category: rec.category,
            title: rec.title,
            description: rec.description,
            actions: rec.actions,
        })
        .collect();

    AssessmentResult {
        company: payload.company_info.clone(),
        overall_score: body.overall_score.unwrap_or_default(),
        category_scores,
        recommendations,
        completed_at: clock.now(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assess_core::model::{CompanyInfo, QuestionId, Response, Score};
    use assess_core::time::{fixed_clock, fixed_now};
    use std::collections::HashMap;

    fn payload() -> SubmissionPayload {
        SubmissionPayload {
            company_info: CompanyInfo {
                name: "Acme Corp".to_string(),
                industry: "Retail".to_string(),
                size: "51-200".to_string(),
                role: "COO".to_string(),
            },
            responses: vec![Response {
                question_id: QuestionId::new("l1"),
                score: Score::from_u8(4).unwrap(),
            }],
        }
    }

    #[test]
    fn shape_result_orders_categories_and_stamps_completion() {
        let mut scores = HashMap::new();
        scores.insert("technology".to_string(), 2.5);
        scores.insert("data".to_string(), 4.0);
        let body = SubmitResponseBody {
            success: true,
            assessment_id: Some("abc".to_string()),
            overall_score: Some(3.1),
            category_scores: scores,
            ..SubmitResponseBody::default()
        };

        let result = shape_result(&payload(), body, fixed_clock());

        assert_eq!(result.company.name, "Acme Corp");
        assert_eq!(result.completed_at, fixed_now());
        let order: Vec<&str> = result
            .category_scores
            .iter()
            .map(|entry| entry.category.as_str())
            .collect();
        assert_eq!(order, vec!["data", "technology"]);
    }
}
