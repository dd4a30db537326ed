use dioxus::prelude::*;
use dioxus_router::use_navigator;

use crate::context::AppContext;
use crate::routes::Route;
use crate::vm::{ReportVm, map_report};

#[component]
pub fn ReportView() -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();

    let report = {
        let ctx = ctx.clone();
        use_resource(move || {
            let state = ctx.state();
            async move { state.lock().await.last_report().map(map_report) }
        })
    };

    let home = {
        let ctx = ctx.clone();
        move |_| {
            let tutor = ctx.tutor();
            let state = ctx.state();
            spawn(async move {
                tutor.exit_to_home(&mut *state.lock().await);
                navigator.push(Route::Home {});
            });
        }
    };

    let restart = {
        let ctx = ctx.clone();
        move |_| {
            let tutor = ctx.tutor();
            let state = ctx.state();
            spawn(async move {
                tutor.reset(&mut *state.lock().await);
                navigator.push(Route::Home {});
            });
        }
    };

    let loaded = report.read().clone();

    rsx! {
        div { class: "page report-page",
            h2 { "Session Report" }
            match loaded {
                None => rsx! { p { "Preparing report..." } },
                Some(None) => rsx! { p { "No session has been submitted yet." } },
                Some(Some(vm)) => rsx! { ReportDetails { vm } },
            }
            div { class: "report-actions",
                button { id: "report-home", onclick: home, "Back to problems" }
                button { class: "secondary", id: "report-reset", onclick: restart, "Start over" }
            }
        }
    }
}

#[component]
fn ReportDetails(vm: ReportVm) -> Element {
    rsx! {
        dl { class: "summary",
            dt { "Student" }
            dd { "{vm.student}" }

            dt { "Topic" }
            dd { "{vm.topic}" }

            dt { "Score" }
            dd { class: "score", "{vm.score}" }

            dt { "Generated" }
            dd { "{vm.generated_at}" }
        }
        div { class: "narrative", dangerous_inner_html: "{vm.narrative_html}" }
    }
}
