use assess_core::model::{AssessmentResult, CategoryScore, Questionnaire};

use crate::vm::time_fmt::format_date;

/// One category row of the results view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CategoryBarVm {
    pub name: String,
    pub score_text: String,
    /// Target width of the bar fill, e.g. "84%".
    pub width: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecommendationVm {
    pub priority: String,
    /// CSS modifier derived from the priority, e.g. "priority-high".
    pub priority_class: String,
    pub category: String,
    pub title: String,
    pub description: String,
    pub actions: Vec<String>,
}

/// Everything the results view renders, precomputed as display strings.
#[derive(Clone, Debug, PartialEq)]
pub struct ResultsVm {
    pub company_name: String,
    pub overall_score: f64,
    pub score_text: String,
    pub band_label: &'static str,
    pub date_line: String,
    pub categories: Vec<CategoryBarVm>,
    pub recommendations: Vec<RecommendationVm>,
    pub summary_text: String,
}

/// Maps a stored result into display form. Categories follow questionnaire
/// order; categories the form does not know about keep their stored order
/// at the end and display their raw id.
#[must_use]
pub fn map_results(result: &AssessmentResult, questionnaire: &Questionnaire) -> ResultsVm {
    let mut categories = Vec::with_capacity(result.category_scores.len());
    for section in questionnaire.sections() {
        if let Some(entry) = result
            .category_scores
            .iter()
            .find(|entry| entry.category == section.category.id)
        {
            categories.push(bar_vm(section.category.name.clone(), entry));
        }
    }
    for entry in &result.category_scores {
        if questionnaire.category_name(&entry.category).is_none() {
            categories.push(bar_vm(entry.category.as_str().to_string(), entry));
        }
    }

    let recommendations = result
        .recommendations
        .iter()
        .map(|rec| RecommendationVm {
            priority_class: format!("priority-{}", rec.priority.to_lowercase()),
            priority: rec.priority.clone(),
            category: rec.category.clone(),
            title: rec.title.clone(),
            description: rec.description.clone(),
            actions: rec.actions.clone(),
        })
        .collect();

    ResultsVm {
        company_name: result.company.name.clone(),
        overall_score: result.overall_score,
        score_text: format!("{:.1}", result.overall_score),
        band_label: result.band().label(),
        date_line: format_date(result.completed_at),
        categories,
        recommendations,
        summary_text: result.summary_text(questionnaire),
    }
}

fn bar_vm(name: String, entry: &CategoryScore) -> CategoryBarVm {
    let fraction = (entry.score / f64::from(assess_core::model::Score::MAX)).clamp(0.0, 1.0);
    CategoryBarVm {
        name,
        score_text: format!("{:.1}", entry.score),
        width: format!("{:.0}%", fraction * 100.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assess_core::model::{CategoryId, CompanyInfo, Recommendation};
    use assess_core::time::fixed_now;

    fn sample_result() -> AssessmentResult {
        AssessmentResult {
            company: CompanyInfo {
                name: "Acme Corp".to_string(),
                industry: "Retail".to_string(),
                size: "51-200".to_string(),
                role: "COO".to_string(),
            },
            overall_score: 4.2,
            category_scores: vec![
                CategoryScore {
                    category: CategoryId::new("data"),
                    score: 2.5,
                },
                CategoryScore {
                    category: CategoryId::new("leadership"),
                    score: 4.0,
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

    #[test]
    fn categories_follow_questionnaire_order() {
        let vm = map_results(&sample_result(), &Questionnaire::builtin());
        let names: Vec<&str> = vm.categories.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Leadership & Strategy", "Data Infrastructure"]);
    }

    #[test]
    fn bar_widths_scale_against_the_maximum_score() {
        let vm = map_results(&sample_result(), &Questionnaire::builtin());
        assert_eq!(vm.categories[0].width, "80%");
        assert_eq!(vm.categories[0].score_text, "4.0");
        assert_eq!(vm.categories[1].width, "50%");
    }

    #[test]
    fn header_fields_are_formatted() {
        let vm = map_results(&sample_result(), &Questionnaire::builtin());
        assert_eq!(vm.score_text, "4.2");
        assert_eq!(vm.band_label, "Advanced");
        assert_eq!(vm.company_name, "Acme Corp");
        assert_eq!(vm.date_line, "June 15, 2025");
    }

    #[test]
    fn priority_class_is_css_friendly() {
        let vm = map_results(&sample_result(), &Questionnaire::builtin());
        assert_eq!(vm.recommendations[0].priority_class, "priority-high");
    }

    #[test]
    fn unknown_categories_trail_with_raw_ids() {
        let mut result = sample_result();
        result.category_scores.push(CategoryScore {
            category: CategoryId::new("mystery"),
            score: 5.0,
        });
        let vm = map_results(&result, &Questionnaire::builtin());
        let last = vm.categories.last().unwrap();
        assert_eq!(last.name, "mystery");
        assert_eq!(last.width, "100%");
    }
}
