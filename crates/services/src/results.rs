use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use assess_core::model::{AssessmentId, AssessmentResult};

/// Process-lifetime store of completed assessments, keyed by id.
///
/// The submit flow inserts, the results route looks up, and an unknown id
/// means "go home". Nothing is ever written to disk.
#[derive(Debug, Default)]
pub struct ResultsStore {
    inner: Mutex<HashMap<AssessmentId, AssessmentResult>>,
}

impl ResultsStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, id: AssessmentId, result: AssessmentResult) {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(id, result);
    }

    #[must_use]
    pub fn get(&self, id: &AssessmentId) -> Option<AssessmentResult> {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(id)
            .cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assess_core::model::CompanyInfo;
    use assess_core::time::fixed_now;

    fn sample_result() -> AssessmentResult {
        AssessmentResult {
            company: CompanyInfo {
                name: "Acme Corp".to_string(),
                industry: "Retail".to_string(),
                size: "51-200".to_string(),
                role: "COO".to_string(),
            },
            overall_score: 3.0,
            category_scores: Vec::new(),
            recommendations: Vec::new(),
            completed_at: fixed_now(),
        }
    }

    #[test]
    fn stores_and_returns_results_by_id() {
        let store = ResultsStore::new();
        let id = AssessmentId::new("abc");
        store.insert(id.clone(), sample_result());

        assert_eq!(store.get(&id), Some(sample_result()));
        assert_eq!(store.get(&AssessmentId::new("other")), None);
    }

    #[test]
    fn later_insert_replaces_earlier_one() {
        let store = ResultsStore::new();
        let id = AssessmentId::new("abc");
        store.insert(id.clone(), sample_result());

        let mut updated = sample_result();
        updated.overall_score = 4.5;
        store.insert(id.clone(), updated.clone());

        assert_eq!(store.get(&id), Some(updated));
    }
}
