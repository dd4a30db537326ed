use dioxus::prelude::*;
use dioxus_router::Router;

use crate::routes::Route;

#[component]
pub fn App() -> Element {
    rsx! {
        document::Stylesheet { href: asset!("/assets/style.css") }
        // Inline and display math from tutor replies.
        document::Stylesheet { href: "https://cdn.jsdelivr.net/npm/katex@0.16.11/dist/katex.min.css" }
        document::Script { src: "https://cdn.jsdelivr.net/npm/katex@0.16.11/dist/katex.min.js" }

        document::Title { "Engineering Tutor" }

        div { class: "app-root",
            ErrorBoundary {
                handle_error: |errors: ErrorContext| rsx! {
                    div { class: "fatal",
                        h1 { "Something went wrong" }
                        pre { "{errors:?}" }
                    }
                },
                Router::<Route> {}
            }
        }
    }
}
