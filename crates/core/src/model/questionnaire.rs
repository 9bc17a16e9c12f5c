use std::collections::HashSet;
use thiserror::Error;

use crate::model::ids::{CategoryId, QuestionId};
use crate::model::question::{Category, Question, QuestionOption, Score};

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionnaireError {
    #[error("duplicate question id: {0}")]
    DuplicateQuestion(QuestionId),

    #[error("question {0} must offer at least one option")]
    NoOptions(QuestionId),
}

//
// ─── QUESTIONNAIRE ─────────────────────────────────────────────────────────────
//

/// One category of the form together with its question groups, in form order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorySection {
    pub category: Category,
    pub questions: Vec<Question>,
}

/// The full assessment form definition.
///
/// Question ids are unique across all sections; form order is the order in
/// which sections and questions were provided.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Questionnaire {
    sections: Vec<CategorySection>,
}

impl Questionnaire {
    /// Builds a questionnaire from category sections.
    ///
    /// # Errors
    ///
    /// Returns `QuestionnaireError::DuplicateQuestion` if two questions share
    /// an id, and `QuestionnaireError::NoOptions` for an empty option list.
    pub fn new(sections: Vec<CategorySection>) -> Result<Self, QuestionnaireError> {
        let mut seen = HashSet::new();
        for section in &sections {
            for question in &section.questions {
                if question.options.is_empty() {
                    return Err(QuestionnaireError::NoOptions(question.id.clone()));
                }
                if !seen.insert(question.id.clone()) {
                    return Err(QuestionnaireError::DuplicateQuestion(question.id.clone()));
                }
            }
        }
        Ok(Self { sections })
    }

    #[must_use]
    pub fn sections(&self) -> &[CategorySection] {
        &self.sections
    }

    /// All questions in form order.
    pub fn questions(&self) -> impl Iterator<Item = &Question> {
        self.sections.iter().flat_map(|section| section.questions.iter())
    }

    /// Number of question groups in the form.
    #[must_use]
    pub fn question_count(&self) -> usize {
        self.sections.iter().map(|section| section.questions.len()).sum()
    }

    #[must_use]
    pub fn contains(&self, id: &QuestionId) -> bool {
        self.questions().any(|question| question.id == *id)
    }

    /// The question group immediately following `id` within the same
    /// category section. The follow-up scroll stops at section boundaries;
    /// moving into the next category is left to the user.
    #[must_use]
    pub fn question_after(&self, id: &QuestionId) -> Option<&Question> {
        for section in &self.sections {
            let mut questions = section.questions.iter();
            if questions.find(|question| question.id == *id).is_some() {
                return questions.next();
            }
        }
        None
    }

    /// Display name of a category, if the id is part of this form.
    #[must_use]
    pub fn category_name(&self, id: &CategoryId) -> Option<&str> {
        self.sections
            .iter()
            .find(|section| section.category.id == *id)
            .map(|section| section.category.name.as_str())
    }

    /// The built-in AI readiness catalog: six categories, fifteen questions.
    ///
    /// # Panics
    ///
    /// Panics if the catalog violates its own invariants; it cannot for the
    /// shipped data.
    #[must_use]
    pub fn builtin() -> Self {
        Self::new(builtin_sections()).expect("builtin catalog has unique question ids")
    }
}

fn question(id: &str, prompt: &str, options: [&str; 5]) -> Question {
    Question {
        id: QuestionId::new(id),
        prompt: prompt.to_string(),
        options: options
            .iter()
            .enumerate()
            .map(|(index, label)| QuestionOption {
                score: Score::from_u8(index as u8 + 1).expect("option scores run 1 through 5"),
                label: (*label).to_string(),
            })
            .collect(),
    }
}

fn section(
    id: &str,
    name: &str,
    description: &str,
    questions: Vec<Question>,
) -> CategorySection {
    CategorySection {
        category: Category {
            id: CategoryId::new(id),
            name: name.to_string(),
            description: description.to_string(),
        },
        questions,
    }
}

fn builtin_sections() -> Vec<CategorySection> {
    vec![
        section(
            "leadership",
            "Leadership & Strategy",
            "Strategic commitment and leadership alignment with AI initiatives",
            vec![
                question(
                    "l1",
                    "How committed is senior leadership to AI adoption?",
                    [
                        "No clear commitment or understanding",
                        "Some interest but no concrete plans",
                        "Moderate commitment with basic AI strategy",
                        "Strong commitment with well-defined AI roadmap",
                        "AI is central to organizational strategy with full C-suite buy-in",
                    ],
                ),
                question(
                    "l2",
                    "How does your organization view AI pilot failures?",
                    [
                        "As major setbacks that discourage further investment",
                        "As concerning issues requiring blame assignment",
                        "As normal but disappointing outcomes",
                        "As valuable learning experiences",
                        "As essential stepping stones in our AI journey",
                    ],
                ),
                question(
                    "l3",
                    "How integrated is AI into your strategic decision-making?",
                    [
                        "AI is not considered in strategic decisions",
                        "AI is occasionally mentioned but not prioritized",
                        "AI is considered for some strategic initiatives",
                        "AI potential is regularly evaluated for major decisions",
                        "AI transformation is core to all strategic planning",
                    ],
                ),
            ],
        ),
        section(
            "culture",
            "Organizational Culture",
            "Learning culture, experimentation mindset, and change readiness",
            vec![
                question(
                    "c1",
                    "How does your organization approach learning from AI experiments?",
                    [
                        "We avoid experiments due to risk of failure",
                        "Limited experimentation with focus on avoiding mistakes",
                        "Some experimentation but lessons are not systematically captured",
                        "Regular experimentation with structured learning processes",
                        "Culture of rapid experimentation and contextual learning",
                    ],
                ),
                question(
                    "c2",
                    "How engaged are your teams with AI initiatives?",
                    [
                        "Teams are resistant or disengaged",
                        "Limited engagement, mostly from IT department",
                        "Moderate interest across some business units",
                        "Good engagement with active participation",
                        "High enthusiasm and cross-functional collaboration",
                    ],
                ),
                question(
                    "c3",
                    "How does your organization manage risk in AI adoption?",
                    [
                        "Very conservative - avoids any AI-related risks",
                        "Risk-averse with extensive approval processes",
                        "Balanced approach with standard risk management",
                        "Calculated risk-taking with proper governance",
                        "Intelligent risk-taking with rapid iteration cycles",
                    ],
                ),
            ],
        ),
        section(
            "data",
            "Data Infrastructure",
            "Data quality, accessibility, and management capabilities",
            vec![
                question(
                    "d1",
                    "How accessible is your organizational data?",
                    [
                        "Data is heavily siloed and difficult to access",
                        "Some data silos with limited integration",
                        "Moderate data accessibility with some integration",
                        "Good data accessibility across most systems",
                        "Unified data architecture with easy access",
                    ],
                ),
                question(
                    "d2",
                    "What is the quality of your data for AI applications?",
                    [
                        "Poor quality - unstructured and inconsistent",
                        "Below average - requires significant cleanup",
                        "Average quality - some cleaning needed",
                        "Good quality - mostly ready for AI use",
                        "High quality - AI-ready with proper governance",
                    ],
                ),
                question(
                    "d3",
                    "How well is your data governance established?",
                    [
                        "No formal data governance processes",
                        "Basic data policies with limited enforcement",
                        "Standard data governance practices",
                        "Robust governance with clear data ownership",
                        "Comprehensive governance enabling AI innovation",
                    ],
                ),
            ],
        ),
        section(
            "processes",
            "Process Readiness",
            "Workflow documentation and integration capabilities",
            vec![
                question(
                    "p1",
                    "How well documented are your business workflows?",
                    [
                        "Poorly documented - mostly tribal knowledge",
                        "Basic documentation with many gaps",
                        "Adequate documentation for key processes",
                        "Well documented with regular updates",
                        "Comprehensive process documentation optimized for AI integration",
                    ],
                ),
                question(
                    "p2",
                    "How adaptable are your current workflows to AI integration?",
                    [
                        "Rigid processes that resist change",
                        "Some flexibility but significant barriers",
                        "Moderately adaptable with some redesign needed",
                        "Flexible processes ready for AI enhancement",
                        "Workflows designed with AI integration in mind",
                    ],
                ),
            ],
        ),
        section(
            "technology",
            "Technical Capabilities",
            "Existing technology stack and AI integration readiness",
            vec![
                question(
                    "t1",
                    "How modern is your technology infrastructure?",
                    [
                        "Legacy systems with limited integration capabilities",
                        "Mostly legacy with some modern components",
                        "Mixed environment with integration challenges",
                        "Modern infrastructure with good API capabilities",
                        "Cloud-native, AI-ready architecture",
                    ],
                ),
                question(
                    "t2",
                    "What is your organization's experience with AI/ML tools?",
                    [
                        "No experience with AI/ML tools",
                        "Limited experimentation with basic tools",
                        "Some experience with standard AI platforms",
                        "Good experience across multiple AI tools",
                        "Advanced AI/ML capabilities with custom solutions",
                    ],
                ),
            ],
        ),
        section(
            "skills",
            "Skills & Talent",
            "AI literacy and technical expertise in the organization",
            vec![
                question(
                    "s1",
                    "What is the level of AI literacy in your organization?",
                    [
                        "Very low - limited understanding of AI concepts",
                        "Basic awareness but little practical knowledge",
                        "Moderate understanding in key roles",
                        "Good AI literacy across business functions",
                        "High AI fluency with internal expertise",
                    ],
                ),
                question(
                    "s2",
                    "How strong is your technical talent for AI initiatives?",
                    [
                        "No dedicated AI technical talent",
                        "Limited technical skills, mostly outsourced",
                        "Some internal technical capabilities",
                        "Strong technical team with AI experience",
                        "World-class AI technical expertise",
                    ],
                ),
            ],
        ),
    ]
}
