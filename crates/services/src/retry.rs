use std::time::Duration;

/// Linear backoff schedule for submission retries.
///
/// Re-sends after 1s, 2s and 3s by default. The schedule is deliberately
/// deterministic (no jitter) and the payload is never mutated between
/// attempts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_retries: u32,
    pub backoff_unit: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 3,
            backoff_unit: Duration::from_millis(1000),
        }
    }
}

impl RetryPolicy {
    /// Total attempts including the initial one.
    #[must_use]
    pub fn max_attempts(&self) -> u32 {
        self.max_retries + 1
    }

    /// Delay before re-sending after the failure of the 0-based
    /// `attempt_index`: `unit × (attempt_index + 1)`.
    #[must_use]
    pub fn delay_after(&self, attempt_index: u32) -> Duration {
        self.backoff_unit.saturating_mul(attempt_index + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_client_schedule() {
        let policy = RetryPolicy::default();
        assert_eq!(policy.max_attempts(), 4);
        assert_eq!(policy.delay_after(0), Duration::from_millis(1000));
        assert_eq!(policy.delay_after(1), Duration::from_millis(2000));
        assert_eq!(policy.delay_after(2), Duration::from_millis(3000));
    }
}
