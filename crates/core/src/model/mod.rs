pub mod company;
pub mod form;
pub mod ids;
pub mod payload;
pub mod question;
pub mod questionnaire;
pub mod results;

pub use company::{CompanyDraft, CompanyError, CompanyField, CompanyInfo};
pub use form::{AssessmentForm, FormError};
pub use ids::{AssessmentId, CategoryId, ParseIdError, QuestionId};
pub use payload::{Response, SubmissionPayload};
pub use question::{Category, Question, QuestionOption, Score, ScoreError};
pub use questionnaire::{CategorySection, Questionnaire, QuestionnaireError};
pub use results::{
    AssessmentResult, CategoryScore, ReadinessBand, Recommendation,
};
