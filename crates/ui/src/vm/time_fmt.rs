use chrono::{DateTime, Utc};

/// Date line for the results header, e.g. "June 15, 2025".
#[must_use]
pub fn format_date(value: DateTime<Utc>) -> String {
    value.format("%B %-d, %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use assess_core::time::fixed_now;

    #[test]
    fn formats_a_readable_date() {
        assert_eq!(format_date(fixed_now()), "June 15, 2025");
    }
}
