use std::time::Duration;

use assess_core::animation::{
    BAR_FILL_DURATION, BAR_STAGGER_BASE, BAR_STAGGER_STEP,
};

/// Counts the overall score up from zero with the ease-out quartic curve,
/// landing exactly on the target text. No-op when the element is missing.
pub(super) fn score_reveal_script(target: f64, duration: Duration) -> String {
    format!(
        r#"(function() {{
            const el = document.getElementById("overall-score");
            if (!el) return;
            const target = {target};
            const duration = {duration};
            const start = performance.now();
            const step = (now) => {{
                const progress = Math.min((now - start) / duration, 1);
                const eased = 1 - Math.pow(1 - progress, 4);
                el.textContent = (target * eased).toFixed(1);
                if (progress < 1) {{
                    requestAnimationFrame(step);
                }} else {{
                    el.textContent = target.toFixed(1);
                }}
            }};
            requestAnimationFrame(step);
        }})();"#,
        duration = duration.as_millis()
    )
}

/// Fills each category bar to its `data-target` width on a staggered start.
/// Bars are rendered at zero width; the transition is applied here so the
/// initial render does not animate.
pub(super) fn bar_reveal_script() -> String {
    format!(
        r#"(function() {{
            const bars = document.querySelectorAll(".category-bar__fill");
            bars.forEach((bar, index) => {{
                const target = bar.dataset.target;
                if (!target) return;
                setTimeout(() => {{
                    bar.style.transition = "width {fill_ms}ms ease-out";
                    bar.style.width = target;
                }}, {base_ms} + index * {step_ms});
            }});
        }})();"#,
        fill_ms = BAR_FILL_DURATION.as_millis(),
        base_ms = BAR_STAGGER_BASE.as_millis(),
        step_ms = BAR_STAGGER_STEP.as_millis(),
    )
}

/// Writes the plain-text summary to the clipboard.
pub(super) fn copy_summary_script(summary: &str) -> String {
    format!("navigator.clipboard.writeText({summary:?});")
}

/// Opens the native print dialog.
pub(super) fn print_script() -> String {
    "window.print();".to_string()
}
