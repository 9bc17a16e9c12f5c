use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable};

use crate::views::{AssessmentView, HomeView, ResultsView};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", HomeView)] Home {},
        #[route("/assessment", AssessmentView)] Assessment {},
        #[route("/results/:assessment_id", ResultsView)] Results { assessment_id: String },
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            header { class: "topbar",
                span { class: "topbar__brand", "AIReady" }
                nav { class: "topbar__nav",
                    Link { to: Route::Home {}, "Home" }
                    Link { to: Route::Assessment {}, "Assessment" }
                }
            }
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}
