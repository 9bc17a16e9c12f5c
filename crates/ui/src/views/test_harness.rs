use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};

use assess_core::model::{
    AssessmentResult, CategoryId, CategoryScore, CompanyInfo, Questionnaire, Recommendation,
    SubmissionPayload,
};
use assess_core::time::{fixed_clock, fixed_now};
use services::{
    AssessmentApi, AttemptFailure, ResultsStore, SubmissionService, SubmitResponseBody,
};

use crate::context::{UiApp, build_app_context};
use crate::views::{AssessmentView, HomeView, ResultsView};

/// Transport stub that always succeeds with a fixed id.
struct StubApi;

#[async_trait]
impl AssessmentApi for StubApi {
    async fn submit_assessment(
        &self,
        _payload: &SubmissionPayload,
    ) -> Result<SubmitResponseBody, AttemptFailure> {
        Ok(SubmitResponseBody {
            success: true,
            assessment_id: Some("test-assessment".to_string()),
            overall_score: Some(3.4),
            category_scores: HashMap::from([("leadership".to_string(), 4.0)]),
            ..SubmitResponseBody::default()
        })
    }
}

struct TestApp {
    questionnaire: Arc<Questionnaire>,
    submission: Arc<SubmissionService>,
    results: Arc<ResultsStore>,
}

impl UiApp for TestApp {
    fn questionnaire(&self) -> Arc<Questionnaire> {
        Arc::clone(&self.questionnaire)
    }

    fn submission(&self) -> Arc<SubmissionService> {
        Arc::clone(&self.submission)
    }

    fn results(&self) -> Arc<ResultsStore> {
        Arc::clone(&self.results)
    }
}

#[derive(Clone, PartialEq, Eq)]
pub enum ViewKind {
    Home,
    Assessment,
    Results(String),
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.view.clone());
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    match view {
        ViewKind::Home => rsx! { HomeView {} },
        ViewKind::Assessment => rsx! { AssessmentView {} },
        ViewKind::Results(assessment_id) => rsx! { ResultsView { assessment_id } },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub results: Arc<ResultsStore>,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_view_harness(view: ViewKind) -> ViewHarness {
    let questionnaire = Arc::new(Questionnaire::builtin());
    let results = Arc::new(ResultsStore::new());
    let submission =
        Arc::new(SubmissionService::new(Arc::new(StubApi)).with_clock(fixed_clock()));

    let app = Arc::new(TestApp {
        questionnaire,
        submission,
        results: Arc::clone(&results),
    });

    let dom = VirtualDom::new_with_props(ViewRouterHarness, ViewHarnessProps { app, view });

    ViewHarness { dom, results }
}

/// A stored result the smoke tests can render.
pub fn sample_result() -> AssessmentResult {
    AssessmentResult {
        company: CompanyInfo {
            name: "Acme Corp".to_string(),
            industry: "Manufacturing".to_string(),
            size: "201-1000".to_string(),
            role: "CTO".to_string(),
        },
        overall_score: 3.4,
        category_scores: vec![
            CategoryScore {
                category: CategoryId::new("leadership"),
                score: 4.0,
            },
            CategoryScore {
                category: CategoryId::new("data"),
                score: 2.5,
            },
        ],
        recommendations: vec![Recommendation {
            priority: "High".to_string(),
            category: "Leadership & Strategy".to_string(),
            title: "Strengthen Leadership Alignment".to_string(),
            description: "Build stronger executive support.".to_string(),
            actions: vec!["Create AI steering committee".to_string()],
        }],
        completed_at: fixed_now(),
    }
}
