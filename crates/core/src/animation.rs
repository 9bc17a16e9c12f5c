//! Timing curves for the results reveal.
//!
//! The views drive the actual frames through small generated scripts; the
//! curve math lives here so the landing and stagger behavior is testable
//! without a renderer.

use std::time::Duration;

/// Duration of the overall-score count-up.
pub const SCORE_REVEAL_DURATION: Duration = Duration::from_millis(1500);

/// Delay before the first category bar starts filling.
pub const BAR_STAGGER_BASE: Duration = Duration::from_millis(300);

/// Additional delay per category bar.
pub const BAR_STAGGER_STEP: Duration = Duration::from_millis(150);

/// Width-transition duration of one category bar.
pub const BAR_FILL_DURATION: Duration = Duration::from_millis(1200);

/// Ease-out quartic curve. Input outside 0..=1 is clamped.
#[must_use]
pub fn ease_out_quart(progress: f64) -> f64 {
    let p = progress.clamp(0.0, 1.0);
    1.0 - (1.0 - p).powi(4)
}

/// Samples a count-up from zero toward a target value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreCountUp {
    target: f64,
    duration: Duration,
}

impl ScoreCountUp {
    #[must_use]
    pub fn new(target: f64, duration: Duration) -> Self {
        Self { target, duration }
    }

    #[must_use]
    pub fn target(&self) -> f64 {
        self.target
    }

    /// Value shown at `elapsed` into the animation.
    ///
    /// Lands exactly on the target at (and after) the full duration; the
    /// curve never overshoots on the way there.
    #[must_use]
    pub fn value_at(&self, elapsed: Duration) -> f64 {
        if elapsed >= self.duration || self.duration.is_zero() {
            return self.target;
        }
        let progress = elapsed.as_secs_f64() / self.duration.as_secs_f64();
        self.target * ease_out_quart(progress)
    }
}

/// Start delay of the category bar at `index`.
#[must_use]
pub fn bar_stagger_delay(index: usize) -> Duration {
    BAR_STAGGER_BASE + BAR_STAGGER_STEP.saturating_mul(index as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ease_out_quart_endpoints() {
        assert!((ease_out_quart(0.0) - 0.0).abs() < f64::EPSILON);
        assert!((ease_out_quart(1.0) - 1.0).abs() < f64::EPSILON);
        // Clamped outside the unit interval.
        assert!((ease_out_quart(-1.0) - 0.0).abs() < f64::EPSILON);
        assert!((ease_out_quart(2.0) - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn count_up_lands_exactly_on_target() {
        let count_up = ScoreCountUp::new(4.2, SCORE_REVEAL_DURATION);
        assert!((count_up.value_at(Duration::from_millis(1500)) - 4.2).abs() < f64::EPSILON);
        assert!((count_up.value_at(Duration::from_millis(9000)) - 4.2).abs() < f64::EPSILON);
    }

    #[test]
    fn count_up_never_overshoots_and_is_monotone() {
        let count_up = ScoreCountUp::new(4.2, SCORE_REVEAL_DURATION);
        let mut last = 0.0;
        for ms in (0..=1500).step_by(10) {
            let value = count_up.value_at(Duration::from_millis(ms));
            assert!(value <= 4.2 + f64::EPSILON, "overshoot at {ms}ms: {value}");
            assert!(value + f64::EPSILON >= last, "regression at {ms}ms");
            last = value;
        }
    }

    #[test]
    fn count_up_starts_at_zero() {
        let count_up = ScoreCountUp::new(3.0, SCORE_REVEAL_DURATION);
        assert!((count_up.value_at(Duration::ZERO) - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn bar_stagger_is_linear() {
        assert_eq!(bar_stagger_delay(0), Duration::from_millis(300));
        assert_eq!(bar_stagger_delay(1), Duration::from_millis(450));
        assert_eq!(bar_stagger_delay(5), Duration::from_millis(1050));
    }
}
