use dioxus::prelude::*;
use dioxus_router::Link;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{CatalogVm, map_catalog};

#[derive(Clone, Debug, PartialEq, Eq)]
struct HomeData {
    student: Option<String>,
    catalog: CatalogVm,
}

#[component]
pub fn HomeView() -> Element {
    let ctx = use_context::<AppContext>();
    let mut name = use_signal(String::new);
    let mut name_error = use_signal(|| None::<String>);

    let mut resource = {
        let ctx = ctx.clone();
        use_resource(move || {
            let tutor = ctx.tutor();
            let state = ctx.state();
            async move {
                let student = state.lock().await.student().map(ToString::to_string);
                let problems = tutor
                    .catalog()
                    .await
                    .map_err(|err| ViewError::from_tutor(&err))?;
                Ok::<_, ViewError>(HomeData {
                    student,
                    catalog: map_catalog(&problems),
                })
            }
        })
    };

    let sign_in = {
        let ctx = ctx.clone();
        move |evt: FormEvent| {
            evt.prevent_default();
            let tutor = ctx.tutor();
            let state = ctx.state();
            let entered = name.read().clone();
            spawn(async move {
                let mut guard = state.lock().await;
                match tutor.sign_in(&mut guard, &entered) {
                    Ok(()) => {
                        name_error.set(None);
                        resource.restart();
                    }
                    Err(err) => name_error.set(Some(err.to_string())),
                }
            });
        }
    };

    let sign_out = {
        let ctx = ctx.clone();
        move |_| {
            let tutor = ctx.tutor();
            let state = ctx.state();
            spawn(async move {
                tutor.reset(&mut *state.lock().await);
                resource.restart();
            });
        }
    };

    let view = view_state_from_resource(&resource);

    rsx! {
        div { class: "page home-page",
            match view {
                ViewState::Idle | ViewState::Loading => rsx! {
                    p { "Loading..." }
                },
                ViewState::Error(err) => rsx! {
                    p { class: "error", "{err.message()}" }
                },
                ViewState::Ready(HomeData { student: None, .. }) => rsx! {
                    h2 { "Welcome to the Engineering Tutor" }
                    form { class: "name-entry", onsubmit: sign_in,
                        label { r#for: "student-name", "Your name" }
                        input {
                            id: "student-name",
                            r#type: "text",
                            value: "{name}",
                            oninput: move |evt| name.set(evt.value()),
                        }
                        button { r#type: "submit", "Start" }
                    }
                    if let Some(message) = name_error.read().as_ref() {
                        p { class: "error", "{message}" }
                    }
                },
                ViewState::Ready(HomeData { student: Some(student), catalog }) => rsx! {
                    header { class: "home-header",
                        h2 { "Hello, {student}" }
                        button { class: "secondary", onclick: sign_out, "Sign out" }
                    }
                    for bucket in catalog.buckets.iter() {
                        section { class: "bucket",
                            h3 { "{bucket.title}" }
                            div { class: "bucket-problems",
                                for problem in bucket.problems.iter() {
                                    Link {
                                        class: "problem-button",
                                        to: Route::Problem { id: problem.id.clone() },
                                        "{problem.label}"
                                    }
                                }
                            }
                        }
                    }
                    section { class: "bucket lectures",
                        h3 { "Lecture simulations" }
                        div { class: "bucket-problems",
                            for lecture in catalog.lectures.iter() {
                                Link {
                                    class: "problem-button",
                                    to: Route::Lecture { code: lecture.code.to_string() },
                                    "{lecture.label}"
                                }
                            }
                        }
                    }
                },
            }
        }
    }
}
