use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable};
use tutor_core::model::LectureTopic;

use crate::views::{HomeView, LectureView, ProblemView, ReportView};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", HomeView)] Home {},
        #[route("/problem/:id", ProblemView)] Problem { id: String },
        #[route("/lecture/:code", LectureView)] Lecture { code: String },
        #[route("/report", ReportView)] Report {},
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            Sidebar {}
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
fn Sidebar() -> Element {
    rsx! {
        nav { class: "sidebar",
            h1 { "Engineering Tutor" }
            ul {
                li { Link { to: Route::Home {}, "Problems" } }
                for topic in LectureTopic::ALL {
                    li {
                        Link {
                            to: Route::Lecture { code: topic.code().to_string() },
                            "{topic.code()} {topic.title()}"
                        }
                    }
                }
            }
        }
    }
}
