use std::time::Duration;

/// Settle delay before scrolling, so the answered-state render lands first.
pub(super) const SCROLL_SETTLE_DELAY: Duration = Duration::from_millis(100);

/// Brings the next unanswered question group into view after a short delay.
pub(super) fn scroll_to_question_script(element_id: &str) -> String {
    format!(
        r#"setTimeout(() => {{
            const el = document.getElementById({element_id:?});
            if (el) el.scrollIntoView({{ behavior: "smooth", block: "center" }});
        }}, {delay});"#,
        delay = SCROLL_SETTLE_DELAY.as_millis()
    )
}

/// Jumps to a category section from the category navigation.
pub(super) fn scroll_to_category_script(element_id: &str) -> String {
    format!(
        r#"(function() {{
            const el = document.getElementById({element_id:?});
            if (el) el.scrollIntoView({{ behavior: "smooth", block: "start" }});
        }})();"#
    )
}
