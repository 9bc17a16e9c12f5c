use chrono::{DateTime, Utc};
use std::fmt::Write as _;

use crate::model::company::CompanyInfo;
use crate::model::ids::CategoryId;
use crate::model::questionnaire::Questionnaire;

//
// ─── RESULT DATA ───────────────────────────────────────────────────────────────
//

/// Server-computed average score of one category.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryScore {
    pub category: CategoryId,
    pub score: f64,
}

/// One server-provided recommendation. All fields are display text the
/// client passes through untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recommendation {
    pub priority: String,
    pub category: String,
    pub title: String,
    pub description: String,
    pub actions: Vec<String>,
}

/// Display bucket for an overall score. Derived for labeling only; all
/// scoring happens server-side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadinessBand {
    Foundational,
    Emerging,
    Developing,
    Advanced,
}

impl ReadinessBand {
    /// Buckets follow the thresholds the server's recommendation engine
    /// already uses (2.0 and 3.0), plus a 4.0 cut for the top band.
    #[must_use]
    pub fn for_score(score: f64) -> Self {
        if score < 2.0 {
            Self::Foundational
        } else if score < 3.0 {
            Self::Emerging
        } else if score < 4.0 {
            Self::Developing
        } else {
            Self::Advanced
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Foundational => "Foundational",
            Self::Emerging => "Emerging",
            Self::Developing => "Developing",
            Self::Advanced => "Advanced",
        }
    }
}

/// One completed assessment as shown on the results view.
///
/// Assembled from the submit response plus the payload the user sent;
/// held in memory for the life of the process, never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct AssessmentResult {
    pub company: CompanyInfo,
    pub overall_score: f64,
    pub category_scores: Vec<CategoryScore>,
    pub recommendations: Vec<Recommendation>,
    pub completed_at: DateTime<Utc>,
}

impl AssessmentResult {
    #[must_use]
    pub fn band(&self) -> ReadinessBand {
        ReadinessBand::for_score(self.overall_score)
    }

    /// Plain-text summary for the clipboard: company, overall score, one
    /// line per category, then numbered recommendations.
    #[must_use]
    pub fn summary_text(&self, questionnaire: &Questionnaire) -> String {
        let mut text = String::new();
        let _ = writeln!(text, "AI Readiness Assessment Results");
        let _ = writeln!(text, "Company: {}", self.company.name);
        let _ = writeln!(text, "Overall Score: {:.1}/5.0", self.overall_score);

        if !self.category_scores.is_empty() {
            let _ = writeln!(text);
            let _ = writeln!(text, "Category Breakdown:");
            for entry in &self.category_scores {
                let name = questionnaire
                    .category_name(&entry.category)
                    .unwrap_or_else(|| entry.category.as_str());
                let _ = writeln!(text, "- {}: {:.1}", name, entry.score);
            }
        }

        if !self.recommendations.is_empty() {
            let _ = writeln!(text);
            let _ = writeln!(text, "Recommendations:");
            for (index, rec) in self.recommendations.iter().enumerate() {
                let _ = writeln!(text, "{}. {}", index + 1, rec.title);
                let _ = writeln!(text, "   {}", rec.description);
            }
        }

        text
    }
}
