use std::sync::Arc;

use assess_core::model::Questionnaire;
use services::{ResultsStore, SubmissionService};

/// What the composition root must provide to the views.
pub trait UiApp: Send + Sync {
    fn questionnaire(&self) -> Arc<Questionnaire>;
    fn submission(&self) -> Arc<SubmissionService>;
    fn results(&self) -> Arc<ResultsStore>;
}

#[derive(Clone)]
pub struct AppContext {
    questionnaire: Arc<Questionnaire>,
    submission: Arc<SubmissionService>,
    results: Arc<ResultsStore>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            questionnaire: app.questionnaire(),
            submission: app.submission(),
            results: app.results(),
        }
    }

    #[must_use]
    pub fn questionnaire(&self) -> Arc<Questionnaire> {
        Arc::clone(&self.questionnaire)
    }

    #[must_use]
    pub fn submission(&self) -> Arc<SubmissionService> {
        Arc::clone(&self.submission)
    }

    #[must_use]
    pub fn results(&self) -> Arc<ResultsStore> {
        Arc::clone(&self.results)
    }
}

// This context is provided by the application composition root (`crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
