use std::collections::BTreeMap;
use std::sync::Arc;
use thiserror::Error;

use crate::model::company::{CompanyDraft, CompanyError, CompanyField};
use crate::model::ids::QuestionId;
use crate::model::payload::{Response, SubmissionPayload};
use crate::model::question::Score;
use crate::model::questionnaire::Questionnaire;
use crate::progress::FormProgress;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum FormError {
    #[error("question is not part of this form: {0}")]
    UnknownQuestion(QuestionId),

    #[error("form is incomplete: {answered} of {required} answered")]
    Incomplete { answered: usize, required: usize },

    #[error(transparent)]
    Company(#[from] CompanyError),
}

//
// ─── FORM STATE ────────────────────────────────────────────────────────────────
//

/// Client-side state of one assessment form.
///
/// Holds the answer map and the company draft over a shared questionnaire.
/// All reads are pure; progress is derived on demand rather than cached so
/// it can never drift from the answers.
#[derive(Debug, Clone, PartialEq)]
pub struct AssessmentForm {
    questionnaire: Arc<Questionnaire>,
    answers: BTreeMap<QuestionId, Score>,
    company: CompanyDraft,
}

impl AssessmentForm {
    #[must_use]
    pub fn new(questionnaire: Arc<Questionnaire>) -> Self {
        Self {
            questionnaire,
            answers: BTreeMap::new(),
            company: CompanyDraft::default(),
        }
    }

    #[must_use]
    pub fn questionnaire(&self) -> &Questionnaire {
        &self.questionnaire
    }

    #[must_use]
    pub fn company(&self) -> &CompanyDraft {
        &self.company
    }

    /// Records the selected option for a question group. Re-answering a
    /// question replaces the previous selection.
    ///
    /// # Errors
    ///
    /// Returns `FormError::UnknownQuestion` for ids outside the form.
    pub fn set_answer(&mut self, question: QuestionId, score: Score) -> Result<(), FormError> {
        if !self.questionnaire.contains(&question) {
            return Err(FormError::UnknownQuestion(question));
        }
        self.answers.insert(question, score);
        Ok(())
    }

    #[must_use]
    pub fn answer(&self, question: &QuestionId) -> Option<Score> {
        self.answers.get(question).copied()
    }

    #[must_use]
    pub fn is_answered(&self, question: &QuestionId) -> bool {
        self.answers.contains_key(question)
    }

    pub fn set_company_field(&mut self, field: CompanyField, value: impl Into<String>) {
        self.company.set(field, value);
    }

    /// Current completion state: answered question groups plus filled company
    /// fields, against the full required set.
    #[must_use]
    pub fn progress(&self) -> FormProgress {
        FormProgress {
            answered: self.answers.len() + self.company.filled_count(),
            required: self.questionnaire.question_count() + CompanyField::ALL.len(),
        }
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.progress().is_complete()
    }

    /// The question group to bring into view after `answered` was selected:
    /// the next group in the same category section, only if it is still
    /// unanswered.
    #[must_use]
    pub fn scroll_target_after(&self, answered: &QuestionId) -> Option<&QuestionId> {
        let next = self.questionnaire.question_after(answered)?;
        if self.is_answered(&next.id) {
            return None;
        }
        Some(&next.id)
    }

    /// Collects the answers into the wire payload, in form order.
    ///
    /// # Errors
    ///
    /// Returns `FormError::Incomplete` when any question is unanswered and a
    /// `CompanyError` when a company field is empty.
    pub fn build_payload(&self) -> Result<SubmissionPayload, FormError> {
        let progress = self.progress();
        if self.answers.len() < self.questionnaire.question_count() {
            return Err(FormError::Incomplete {
                answered: progress.answered,
                required: progress.required,
            });
        }

        let company_info = self.company.validate()?;
        let responses = self
            .questionnaire
            .questions()
            .filter_map(|question| {
                self.answer(&question.id).map(|score| Response {
                    question_id: question.id.clone(),
                    score,
                })
            })
            .collect();

        Ok(SubmissionPayload {
            company_info,
            responses,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(value: u8) -> Score {
        Score::from_u8(value).unwrap()
    }

    fn form() -> AssessmentForm {
        AssessmentForm::new(Arc::new(Questionnaire::builtin()))
    }

    fn fill_company(form: &mut AssessmentForm) {
        form.set_company_field(CompanyField::Name, "Acme Corp");
        form.set_company_field(CompanyField::Industry, "Manufacturing");
        form.set_company_field(CompanyField::Size, "201-1000");
        form.set_company_field(CompanyField::Role, "CTO");
    }

    fn answer_all(form: &mut AssessmentForm) {
        let ids: Vec<QuestionId> = form
            .questionnaire()
            .questions()
            .map(|q| q.id.clone())
            .collect();
        for id in ids {
            form.set_answer(id, score(3)).unwrap();
        }
    }

    #[test]
    fn progress_counts_questions_and_company_fields() {
        let mut form = form();
        assert_eq!(
            form.progress(),
            FormProgress {
                answered: 0,
                required: 19
            }
        );

        form.set_answer(QuestionId::new("l1"), score(5)).unwrap();
        form.set_company_field(CompanyField::Name, "Acme Corp");
        assert_eq!(
            form.progress(),
            FormProgress {
                answered: 2,
                required: 19
            }
        );
    }

    #[test]
    fn reanswering_does_not_double_count() {
        let mut form = form();
        form.set_answer(QuestionId::new("l1"), score(2)).unwrap();
        form.set_answer(QuestionId::new("l1"), score(4)).unwrap();
        assert_eq!(form.progress().answered, 1);
        assert_eq!(form.answer(&QuestionId::new("l1")), Some(score(4)));
    }

    #[test]
    fn unknown_question_is_rejected() {
        let mut form = form();
        let err = form.set_answer(QuestionId::new("zz9"), score(1)).unwrap_err();
        assert_eq!(err, FormError::UnknownQuestion(QuestionId::new("zz9")));
    }

    #[test]
    fn build_payload_requires_completion() {
        let mut form = form();
        fill_company(&mut form);
        let err = form.build_payload().unwrap_err();
        assert!(matches!(err, FormError::Incomplete { .. }));

        answer_all(&mut form);
        let payload = form.build_payload().unwrap();
        assert_eq!(payload.responses.len(), 15);
        assert_eq!(payload.company_info.name, "Acme Corp");
    }

    #[test]
    fn build_payload_requires_company_fields() {
        let mut form = form();
        answer_all(&mut form);
        let err = form.build_payload().unwrap_err();
        assert_eq!(err, FormError::Company(CompanyError::MissingName));
    }

    #[test]
    fn payload_responses_follow_form_order() {
        let mut form = form();
        fill_company(&mut form);
        // Answer in reverse order; the payload must still come out in form order.
        let mut ids: Vec<QuestionId> = form
            .questionnaire()
            .questions()
            .map(|q| q.id.clone())
            .collect();
        ids.reverse();
        for id in ids {
            form.set_answer(id, score(1)).unwrap();
        }

        let payload = form.build_payload().unwrap();
        let first = payload.responses.first().unwrap();
        assert_eq!(first.question_id, QuestionId::new("l1"));
    }

    #[test]
    fn scroll_target_is_next_unanswered_group_only() {
        let mut form = form();
        form.set_answer(QuestionId::new("l1"), score(3)).unwrap();
        assert_eq!(
            form.scroll_target_after(&QuestionId::new("l1")),
            Some(&QuestionId::new("l2"))
        );

        // Already-answered successor: stay put.
        form.set_answer(QuestionId::new("l2"), score(3)).unwrap();
        assert_eq!(form.scroll_target_after(&QuestionId::new("l1")), None);

        // Final question has nothing after it.
        form.set_answer(QuestionId::new("s2"), score(3)).unwrap();
        assert_eq!(form.scroll_target_after(&QuestionId::new("s2")), None);
    }
}
