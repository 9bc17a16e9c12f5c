use dioxus::prelude::*;
use dioxus_router::Link;

use crate::routes::Route;

#[component]
pub fn HomeView() -> Element {
    rsx! {
        div { class: "page hero",
            h1 { class: "hero__title", "Is Your Company Ready for AI?" }
            p { class: "hero__lead",
                "Evaluate your organization across leadership, culture, data, "
                "processes, technology and talent, and get a personalized "
                "readiness score with concrete recommendations."
            }
            Link { to: Route::Assessment {}, class: "btn btn-primary hero__cta",
                "Start Assessment"
            }
            p { class: "hero__note", "15 questions · about 5 minutes" }
        }
    }
}
