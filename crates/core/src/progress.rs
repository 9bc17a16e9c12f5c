/// Aggregated completion state of the assessment form, useful for UI.
///
/// `required` counts every question group plus every required company field;
/// `answered` counts how many of those currently hold a value. Derived on
/// every form mutation and never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormProgress {
    pub answered: usize,
    pub required: usize,
}

impl FormProgress {
    /// Completion as a percentage in 0.0..=100.0.
    ///
    /// An empty requirement set counts as fully complete rather than
    /// dividing by zero.
    #[must_use]
    pub fn percent(&self) -> f64 {
        if self.required == 0 {
            return 100.0;
        }
        self.answered as f64 / self.required as f64 * 100.0
    }

    /// True when every required item is answered; gates submission.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.answered >= self.required
    }

    #[must_use]
    pub fn remaining(&self) -> usize {
        self.required.saturating_sub(self.answered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_is_linear_in_answered_count() {
        for required in 1..=30 {
            for answered in 0..=required {
                let progress = FormProgress { answered, required };
                let expected = answered as f64 / required as f64 * 100.0;
                assert!((progress.percent() - expected).abs() < f64::EPSILON);
                assert_eq!(progress.is_complete(), answered == required);
            }
        }
    }

    #[test]
    fn zero_required_counts_as_complete() {
        let progress = FormProgress {
            answered: 0,
            required: 0,
        };
        assert!((progress.percent() - 100.0).abs() < f64::EPSILON);
        assert!(progress.is_complete());
    }

    #[test]
    fn three_questions_two_fields_scenario() {
        // 3 answered questions + 1 of 2 filled fields -> 80%, not submittable.
        let partial = FormProgress {
            answered: 4,
            required: 5,
        };
        assert!((partial.percent() - 80.0).abs() < f64::EPSILON);
        assert!(!partial.is_complete());
        assert_eq!(partial.remaining(), 1);

        let full = FormProgress {
            answered: 5,
            required: 5,
        };
        assert!((full.percent() - 100.0).abs() < f64::EPSILON);
        assert!(full.is_complete());
    }
}
