use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::time::Instant;

use assess_core::model::{CompanyInfo, QuestionId, Response, Score, SubmissionPayload};
use assess_core::time::fixed_clock;
use services::{
    AssessmentApi, AttemptFailure, SubmissionError, SubmissionService, SubmitResponseBody,
};

/// Transport stub that replays a script of attempt outcomes.
///
/// `None` plays as a transport-level failure (HTTP 502); an exhausted script
/// keeps failing, which models a permanently unreachable endpoint.
struct ScriptedApi {
    script: Mutex<VecDeque<Option<SubmitResponseBody>>>,
    attempts: AtomicU32,
    attempt_times: Mutex<Vec<Instant>>,
}

impl ScriptedApi {
    fn new(script: Vec<Option<SubmitResponseBody>>) -> Arc<Self> {
        Arc::new(Self {
            script: Mutex::new(script.into()),
            attempts: AtomicU32::new(0),
            attempt_times: Mutex::new(Vec::new()),
        })
    }

    fn attempts(&self) -> u32 {
        self.attempts.load(Ordering::SeqCst)
    }

    fn attempt_gaps(&self) -> Vec<Duration> {
        let times = self.attempt_times.lock().unwrap();
        times.windows(2).map(|pair| pair[1] - pair[0]).collect()
    }
}

#[async_trait]
impl AssessmentApi for ScriptedApi {
    async fn submit_assessment(
        &self,
        _payload: &SubmissionPayload,
    ) -> Result<SubmitResponseBody, AttemptFailure> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        self.attempt_times.lock().unwrap().push(Instant::now());
        match self.script.lock().unwrap().pop_front() {
            Some(Some(body)) => Ok(body),
            Some(None) | None => Err(AttemptFailure::Status(reqwest::StatusCode::BAD_GATEWAY)),
        }
    }
}

fn payload() -> SubmissionPayload {
    SubmissionPayload {
        company_info: CompanyInfo {
            name: "Acme Corp".to_string(),
            industry: "Manufacturing".to_string(),
            size: "201-1000".to_string(),
            role: "CTO".to_string(),
        },
        responses: vec![Response {
            question_id: QuestionId::new("l1"),
            score: Score::from_u8(4).unwrap(),
        }],
    }
}

fn success_body(id: &str) -> SubmitResponseBody {
    SubmitResponseBody {
        success: true,
        assessment_id: Some(id.to_string()),
        overall_score: Some(3.42),
        category_scores: HashMap::from([("leadership".to_string(), 4.0)]),
        ..SubmitResponseBody::default()
    }
}

fn rejected_body() -> SubmitResponseBody {
    SubmitResponseBody {
        success: false,
        message: Some("scoring failed".to_string()),
        ..SubmitResponseBody::default()
    }
}

fn service(api: Arc<ScriptedApi>) -> SubmissionService {
    SubmissionService::new(api).with_clock(fixed_clock())
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn failing_endpoint_performs_four_attempts_with_linear_backoff() {
    let api = ScriptedApi::new(Vec::new());
    let started = Instant::now();

    let err = service(api.clone()).submit(&payload()).await.unwrap_err();

    assert!(matches!(
        err,
        SubmissionError::Exhausted { attempts: 4, .. }
    ));
    assert_eq!(api.attempts(), 4);
    assert_eq!(
        api.attempt_gaps(),
        vec![
            Duration::from_millis(1000),
            Duration::from_millis(2000),
            Duration::from_millis(3000),
        ]
    );
    assert_eq!(started.elapsed(), Duration::from_secs(6));
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn success_on_a_retry_stops_the_chain() {
    let api = ScriptedApi::new(vec![None, Some(success_body("abc-123"))]);
    let started = Instant::now();

    let outcome = service(api.clone()).submit(&payload()).await.unwrap();

    assert_eq!(outcome.assessment_id.as_str(), "abc-123");
    assert_eq!(api.attempts(), 2);
    // Only the first backoff was slept.
    assert_eq!(started.elapsed(), Duration::from_secs(1));
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn immediate_success_takes_a_single_attempt() {
    let api = ScriptedApi::new(vec![Some(success_body("abc-123"))]);
    let started = Instant::now();

    let outcome = service(api.clone()).submit(&payload()).await.unwrap();

    assert_eq!(api.attempts(), 1);
    assert_eq!(started.elapsed(), Duration::ZERO);
    assert_eq!(outcome.result.company.name, "Acme Corp");
    assert!((outcome.result.overall_score - 3.42).abs() < f64::EPSILON);
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn rejected_body_is_retried_like_a_transport_failure() {
    let api = ScriptedApi::new(vec![
        Some(rejected_body()),
        Some(rejected_body()),
        Some(rejected_body()),
        Some(rejected_body()),
    ]);

    let err = service(api.clone()).submit(&payload()).await.unwrap_err();

    assert_eq!(api.attempts(), 4);
    let SubmissionError::Exhausted { last, .. } = err else {
        panic!("expected exhausted error");
    };
    assert!(matches!(last, AttemptFailure::Rejected { .. }));
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn success_body_without_id_counts_as_a_failed_attempt() {
    let no_id = SubmitResponseBody {
        success: true,
        assessment_id: Some("   ".to_string()),
        ..SubmitResponseBody::default()
    };
    let api = ScriptedApi::new(vec![Some(no_id), Some(success_body("late-id"))]);

    let outcome = service(api.clone()).submit(&payload()).await.unwrap();

    assert_eq!(api.attempts(), 2);
    assert_eq!(outcome.assessment_id.as_str(), "late-id");
}
