mod scripts;

use std::time::Duration;

use dioxus::document::eval;
use dioxus::prelude::*;
use dioxus_router::use_navigator;

use assess_core::animation::SCORE_REVEAL_DURATION;
use assess_core::model::AssessmentId;

use crate::context::AppContext;
use crate::routes::Route;
use crate::vm::map_results;

use scripts::{bar_reveal_script, copy_summary_script, print_script, score_reveal_script};

/// How long the copy button celebrates before its label resets.
const COPY_FEEDBACK_TTL: Duration = Duration::from_secs(2);

#[component]
pub fn ResultsView(assessment_id: String) -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let questionnaire = ctx.questionnaire();

    let vm = assessment_id
        .parse::<AssessmentId>()
        .ok()
        .and_then(|id| ctx.results().get(&id))
        .map(|result| map_results(&result, &questionnaire));

    // Results live only for the life of the process; unknown ids go home.
    let missing = vm.is_none();
    use_effect(move || {
        if missing {
            let _ = navigator.replace(Route::Home {});
        }
    });

    let mut did_animate = use_signal(|| false);
    let score_target = vm.as_ref().map(|vm| vm.overall_score);
    use_effect(move || {
        let Some(target) = score_target else {
            return;
        };
        if did_animate() {
            return;
        }
        did_animate.set(true);
        let _ = eval(&score_reveal_script(target, SCORE_REVEAL_DURATION));
        let _ = eval(&bar_reveal_script());
    });

    let mut copied = use_signal(|| false);
    let summary = vm
        .as_ref()
        .map(|vm| vm.summary_text.clone())
        .unwrap_or_default();
    let on_copy = use_callback(move |()| {
        let _ = eval(&copy_summary_script(&summary));
        copied.set(true);
        spawn(async move {
            let mut copied = copied;
            tokio::time::sleep(COPY_FEEDBACK_TTL).await;
            copied.set(false);
        });
    });
    let on_print = use_callback(move |()| {
        let _ = eval(&print_script());
    });

    let Some(vm) = vm else {
        return rsx! {
            div { class: "page", p { "Redirecting..." } }
        };
    };

    rsx! {
        div { class: "page results-page",
            header { class: "results-header",
                h2 { "Your AI Readiness Results" }
                p { class: "lead", "{vm.company_name}" }
                p { class: "results-date", "Assessed on {vm.date_line}" }
            }

            section { class: "score-circle",
                span { class: "score-value", id: "overall-score", "0.0" }
                span { class: "score-denominator", "/5.0" }
                p { class: "score-band", "{vm.band_label} readiness" }
            }

            section { class: "card category-breakdown",
                h4 { class: "card__title", "Category Breakdown" }
                for bar in &vm.categories {
                    div { class: "category-bar",
                        div { class: "category-bar__meta",
                            span { class: "category-bar__name", "{bar.name}" }
                            span { class: "category-bar__score", "{bar.score_text}" }
                        }
                        div { class: "category-bar__track",
                            div {
                                class: "category-bar__fill",
                                style: "width: 0%",
                                "data-target": "{bar.width}",
                            }
                        }
                    }
                }
            }

            if !vm.recommendations.is_empty() {
                section { class: "card recommendations",
                    h4 { class: "card__title", "Recommendations" }
                    for rec in &vm.recommendations {
                        article { class: "recommendation-card",
                            div { class: "recommendation-card__head",
                                span { class: "badge {rec.priority_class}", "{rec.priority}" }
                                span { class: "recommendation-card__category", "{rec.category}" }
                            }
                            h5 { class: "recommendation-card__title", "{rec.title}" }
                            p { class: "recommendation-card__description", "{rec.description}" }
                            if !rec.actions.is_empty() {
                                ul { class: "recommendation-card__actions",
                                    for action in &rec.actions {
                                        li { "{action}" }
                                    }
                                }
                            }
                        }
                    }
                }
            }

            div { class: "results-actions",
                button {
                    class: "btn btn-outline",
                    id: "copy-results",
                    r#type: "button",
                    onclick: move |_| on_copy.call(()),
                    if copied() {
                        "Copied!"
                    } else {
                        "Copy Results"
                    }
                }
                button {
                    class: "btn btn-outline",
                    id: "print-results",
                    r#type: "button",
                    onclick: move |_| on_print.call(()),
                    "Print"
                }
            }
        }
    }
}
