use dioxus::prelude::*;
use dioxus_router::use_navigator;
use tutor_core::model::LectureTopic;

use super::chat::ChatPanel;
use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{ChatVm, map_lecture_chat, notices_for_open, notices_for_turn};

#[component]
pub fn LectureView(code: String) -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let mut latest = use_signal(|| None::<ChatVm>);
    let mut action_error = use_signal(|| None::<ViewError>);
    let mut busy = use_signal(|| false);
    let topic = LectureTopic::from_code(&code);

    let opened = {
        let ctx = ctx.clone();
        use_resource(use_reactive!(|(topic,)| {
            let tutor = ctx.tutor();
            let state = ctx.state();
            async move {
                latest.set(None);
                let topic = topic.ok_or(ViewError::UnknownLecture)?;
                let mut guard = state.lock().await;
                let agent_error = tutor
                    .open_lecture(&mut guard, topic)
                    .await
                    .map_err(|err| ViewError::from_tutor(&err))?;
                Ok::<_, ViewError>(map_lecture_chat(
                    &guard,
                    topic,
                    &tutor.lecture_diagram(topic),
                    notices_for_open(agent_error.as_ref()),
                ))
            }
        }))
    };

    let on_send = {
        let ctx = ctx.clone();
        move |text: String| {
            let tutor = ctx.tutor();
            let state = ctx.state();
            spawn(async move {
                let Some(topic) = topic else {
                    return;
                };
                busy.set(true);
                let mut guard = state.lock().await;
                match tutor.send_lecture_message(&mut guard, &text).await {
                    Ok(outcome) => latest.set(Some(map_lecture_chat(
                        &guard,
                        topic,
                        &tutor.lecture_diagram(topic),
                        notices_for_turn(&outcome),
                    ))),
                    Err(err) => action_error.set(Some(ViewError::from_tutor(&err))),
                }
                busy.set(false);
            });
        }
    };

    let on_submit = {
        let ctx = ctx.clone();
        move |feedback: String| {
            let tutor = ctx.tutor();
            let state = ctx.state();
            spawn(async move {
                busy.set(true);
                let result = tutor.submit_session(&mut *state.lock().await, &feedback).await;
                busy.set(false);
                match result {
                    Ok(_) => {
                        navigator.push(Route::Report {});
                    }
                    Err(err) => action_error.set(Some(ViewError::from_tutor(&err))),
                }
            });
        }
    };

    let on_exit = {
        let ctx = ctx.clone();
        move |()| {
            let tutor = ctx.tutor();
            let state = ctx.state();
            spawn(async move {
                tutor.exit_to_home(&mut *state.lock().await);
                navigator.push(Route::Home {});
            });
        }
    };

    let view = match latest.read().clone() {
        Some(vm) => ViewState::Ready(vm),
        None => view_state_from_resource(&opened),
    };

    rsx! {
        match view {
            ViewState::Idle | ViewState::Loading => rsx! {
                div { class: "page", p { "Starting lecture..." } }
            },
            ViewState::Error(err) => rsx! {
                div { class: "page", p { class: "error", "{err.message()}" } }
            },
            ViewState::Ready(vm) => rsx! {
                if let Some(err) = *action_error.read() {
                    p { class: "error", "{err.message()}" }
                }
                ChatPanel { vm, busy: busy(), on_send, on_submit, on_exit }
            },
        }
    }
}
