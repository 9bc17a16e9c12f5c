use std::sync::Arc;

use assess_core::FormProgress;
use assess_core::model::{
    AssessmentForm, AssessmentId, CompanyField, Questionnaire, QuestionId, Score,
    SubmissionPayload,
};
use services::{ResultsStore, SubmissionService};

use crate::views::ViewError;

/// User intents dispatched from the assessment view.
#[derive(Clone, Debug, PartialEq)]
pub enum FormIntent {
    Answer { question: QuestionId, score: Score },
    EditCompany { field: CompanyField, value: String },
}

/// Submission lifecycle of the form.
///
/// `Failed` renders the same editable form as `Idle`; it exists so the view
/// can tell "never tried" from "came back after a failure".
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitPhase {
    Idle,
    Submitting,
    Failed,
}

/// View-model for the assessment form: form state plus submission phase.
pub struct FormVm {
    form: AssessmentForm,
    phase: SubmitPhase,
}

impl FormVm {
    #[must_use]
    pub fn new(questionnaire: Arc<Questionnaire>) -> Self {
        Self {
            form: AssessmentForm::new(questionnaire),
            phase: SubmitPhase::Idle,
        }
    }

    #[must_use]
    pub fn phase(&self) -> SubmitPhase {
        self.phase
    }

    #[must_use]
    pub fn progress(&self) -> FormProgress {
        self.form.progress()
    }

    #[must_use]
    pub fn answer(&self, question: &QuestionId) -> Option<Score> {
        self.form.answer(question)
    }

    #[must_use]
    pub fn is_answered(&self, question: &QuestionId) -> bool {
        self.form.is_answered(question)
    }

    #[must_use]
    pub fn company_value(&self, field: CompanyField) -> &str {
        self.form.company().get(field)
    }

    /// True when the form is complete and no chain is in flight.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        self.form.is_complete() && self.phase != SubmitPhase::Submitting
    }

    #[must_use]
    pub fn scroll_target_after(&self, answered: &QuestionId) -> Option<QuestionId> {
        self.form.scroll_target_after(answered).cloned()
    }

    pub fn apply(&mut self, intent: FormIntent) {
        match intent {
            FormIntent::Answer { question, score } => {
                // Intents come from the rendered form, so the id is always known.
                let _ = self.form.set_answer(question, score);
            }
            FormIntent::EditCompany { field, value } => {
                self.form.set_company_field(field, value);
            }
        }
    }

    /// Locks the form for submission and hands back the payload to send.
    ///
    /// # Errors
    ///
    /// Returns `ViewError::Unknown` when a chain is already in flight or the
    /// form is not actually complete.
    pub fn begin_submit(&mut self) -> Result<SubmissionPayload, ViewError> {
        if self.phase == SubmitPhase::Submitting {
            return Err(ViewError::Unknown);
        }
        let payload = self.form.build_payload().map_err(|_| ViewError::Unknown)?;
        self.phase = SubmitPhase::Submitting;
        Ok(payload)
    }

    /// Returns the form to an editable state after a terminal failure.
    pub fn fail_submit(&mut self) {
        self.phase = SubmitPhase::Failed;
    }
}

/// Runs one submission chain and stashes the result for the results route.
///
/// # Errors
///
/// Returns `ViewError::Unknown` after the service exhausts its retries; the
/// caller shows the one generic connectivity notice either way.
pub async fn submit_assessment(
    submission: &SubmissionService,
    results: &ResultsStore,
    payload: SubmissionPayload,
) -> Result<AssessmentId, ViewError> {
    let outcome = submission
        .submit(&payload)
        .await
        .map_err(|_| ViewError::Unknown)?;
    results.insert(outcome.assessment_id.clone(), outcome.result);
    Ok(outcome.assessment_id)
}
