mod scripts;

use std::time::Duration;

use dioxus::document::eval;
use dioxus::prelude::*;
use dioxus_router::use_navigator;

use assess_core::model::CompanyField;

use crate::context::AppContext;
use crate::routes::Route;
use crate::vm::{FormIntent, FormVm, SubmitPhase, submit_assessment};

use scripts::{scroll_to_category_script, scroll_to_question_script};

/// How long the failure notice stays up before dismissing itself.
const NOTICE_TTL: Duration = Duration::from_secs(5);

const INDUSTRIES: [&str; 9] = [
    "Technology",
    "Healthcare",
    "Financial Services",
    "Manufacturing",
    "Retail",
    "Education",
    "Government",
    "Professional Services",
    "Other",
];

const COMPANY_SIZES: [&str; 5] = ["1-10", "11-50", "51-200", "201-1000", "1000+"];

#[component]
pub fn AssessmentView() -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let questionnaire = ctx.questionnaire();

    let vm = use_signal({
        let questionnaire = questionnaire.clone();
        move || FormVm::new(questionnaire)
    });
    let mut notice = use_signal(|| None::<&'static str>);
    let mut notice_seq = use_signal(|| 0_u32);

    let dispatch_intent = use_callback(move |intent: FormIntent| {
        let mut vm = vm;
        let answered = match &intent {
            FormIntent::Answer { question, .. } => Some(question.clone()),
            FormIntent::EditCompany { .. } => None,
        };
        vm.write().apply(intent);
        if let Some(question) = answered {
            if let Some(target) = vm.read().scroll_target_after(&question) {
                let _ = eval(&scroll_to_question_script(&format!("question-{target}")));
            }
        }
    });

    let on_submit = {
        let ctx = ctx.clone();
        use_callback(move |evt: FormEvent| {
            evt.prevent_default();
            let mut vm = vm;
            let Ok(payload) = vm.write().begin_submit() else {
                return;
            };
            notice.set(None);

            let submission = ctx.submission();
            let results = ctx.results();
            spawn(async move {
                let mut vm = vm;
                match submit_assessment(&submission, &results, payload).await {
                    Ok(id) => {
                        let _ = navigator.push(Route::Results {
                            assessment_id: id.to_string(),
                        });
                    }
                    Err(err) => {
                        vm.write().fail_submit();
                        let seq = notice_seq() + 1;
                        notice_seq.set(seq);
                        notice.set(Some(err.message()));
                        tokio::time::sleep(NOTICE_TTL).await;
                        if notice_seq() == seq {
                            notice.set(None);
                        }
                    }
                }
            });
        })
    };

    let progress = vm.read().progress();
    let percent = progress.percent();
    let fill_width = format!("{percent:.0}%");
    let percent_label = format!("{percent:.0}% Complete");
    let submitting = vm.read().phase() == SubmitPhase::Submitting;
    let can_submit = vm.read().can_submit();
    let complete = progress.is_complete();
    let submit_class = if complete {
        "btn btn-primary submit-btn btn-success"
    } else {
        "btn btn-primary submit-btn"
    };
    let company_name = vm.read().company_value(CompanyField::Name).to_string();
    let company_industry = vm.read().company_value(CompanyField::Industry).to_string();
    let company_size = vm.read().company_value(CompanyField::Size).to_string();
    let company_role = vm.read().company_value(CompanyField::Role).to_string();

    rsx! {
        div { class: "page assessment-page",
            h2 { "AI Readiness Assessment" }

            div { class: "progress-container",
                div {
                    class: "progress-bar-track",
                    role: "progressbar",
                    aria_valuenow: "{percent:.0}",
                    aria_valuemin: "0",
                    aria_valuemax: "100",
                    div { class: "progress-fill", style: "width: {fill_width}" }
                }
                span { class: "progress-text", id: "progress-text", "{percent_label}" }
            }

            if questionnaire.sections().len() > 1 {
                div { class: "category-navigation",
                    for section in questionnaire.sections() {
                        button {
                            class: "btn btn-outline category-navigation__item",
                            r#type: "button",
                            onclick: {
                                let element_id = format!("category-{}", section.category.id);
                                move |_| {
                                    let _ = eval(&scroll_to_category_script(&element_id));
                                }
                            },
                            "{section.category.name}"
                        }
                    }
                }
            }

            if let Some(message) = notice() {
                div { class: "alert alert-danger", role: "alert",
                    span { "{message}" }
                    button {
                        class: "alert__close",
                        r#type: "button",
                        onclick: move |_| notice.set(None),
                        "×"
                    }
                }
            }

            form { class: "assessment-form", onsubmit: on_submit,
                section { class: "card company-section", id: "company",
                    h4 { class: "card__title", "Company Information" }
                    div { class: "field-grid",
                        CompanyTextField {
                            field: CompanyField::Name,
                            value: company_name,
                            placeholder: "Acme Corp",
                            disabled: submitting,
                            on_edit: dispatch_intent,
                        }
                        CompanySelectField {
                            field: CompanyField::Industry,
                            value: company_industry,
                            options: INDUSTRIES.to_vec(),
                            disabled: submitting,
                            on_edit: dispatch_intent,
                        }
                        CompanySelectField {
                            field: CompanyField::Size,
                            value: company_size,
                            options: COMPANY_SIZES.to_vec(),
                            disabled: submitting,
                            on_edit: dispatch_intent,
                        }
                        CompanyTextField {
                            field: CompanyField::Role,
                            value: company_role,
                            placeholder: "Head of Operations",
                            disabled: submitting,
                            on_edit: dispatch_intent,
                        }
                    }
                }

                for section in questionnaire.sections() {
                    section {
                        class: "card category-section",
                        id: "category-{section.category.id}",
                        header { class: "category-section__header",
                            h4 { class: "card__title", "{section.category.name}" }
                            p { class: "category-section__description", "{section.category.description}" }
                        }
                        for question in &section.questions {
                            {
                                let selected = vm.read().answer(&question.id);
                                let group_class = if selected.is_some() {
                                    "question-group answered"
                                } else {
                                    "question-group"
                                };
                                rsx! {
                                    div { class: "{group_class}", id: "question-{question.id}",
                                        p { class: "question-group__prompt", "{question.prompt}" }
                                        div { class: "radio-group",
                                            for option in &question.options {
                                                label { class: "radio-option",
                                                    input {
                                                        r#type: "radio",
                                                        name: "{question.id}",
                                                        value: "{option.score}",
                                                        checked: selected == Some(option.score),
                                                        disabled: submitting,
                                                        onchange: {
                                                            let question = question.id.clone();
                                                            let score = option.score;
                                                            move |_| dispatch_intent.call(FormIntent::Answer {
                                                                question: question.clone(),
                                                                score,
                                                            })
                                                        },
                                                    }
                                                    span { class: "radio-option__label", "{option.label}" }
                                                }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }

                div { class: "submit-row",
                    if submitting {
                        span { class: "spinner", id: "loading-spinner" }
                    }
                    button {
                        class: "{submit_class}",
                        id: "submit-assessment",
                        r#type: "submit",
                        disabled: !can_submit,
                        if submitting {
                            "Calculating..."
                        } else {
                            "Calculate AI Readiness Score"
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn CompanyTextField(
    field: CompanyField,
    value: String,
    placeholder: &'static str,
    disabled: bool,
    on_edit: EventHandler<FormIntent>,
) -> Element {
    rsx! {
        label { class: "field",
            span { class: "field__label", "{field.label()}" }
            input {
                r#type: "text",
                value: "{value}",
                placeholder: "{placeholder}",
                disabled: disabled,
                oninput: move |evt| on_edit.call(FormIntent::EditCompany {
                    field,
                    value: evt.value(),
                }),
            }
        }
    }
}

#[component]
fn CompanySelectField(
    field: CompanyField,
    value: String,
    options: Vec<&'static str>,
    disabled: bool,
    on_edit: EventHandler<FormIntent>,
) -> Element {
    rsx! {
        label { class: "field",
            span { class: "field__label", "{field.label()}" }
            select {
                value: "{value}",
                disabled: disabled,
                onchange: move |evt| on_edit.call(FormIntent::EditCompany {
                    field,
                    value: evt.value(),
                }),
                option { value: "", selected: value.is_empty(), disabled: true, "Select..." }
                for choice in options {
                    option { value: "{choice}", selected: value == choice, "{choice}" }
                }
            }
        }
    }
}
