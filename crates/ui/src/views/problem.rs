use dioxus::prelude::*;
use dioxus_router::use_navigator;
use tutor_core::model::ProblemId;

use super::chat::ChatPanel;
use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{ChatVm, map_problem_chat, notices_for_open, notices_for_turn};

#[component]
pub fn ProblemView(id: String) -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let mut latest = use_signal(|| None::<ChatVm>);
    let mut action_error = use_signal(|| None::<ViewError>);
    let mut busy = use_signal(|| false);

    // Opening starts a fresh conversation every time the route is entered.
    let opened = {
        let ctx = ctx.clone();
        let id = id.clone();
        use_resource(use_reactive!(|(id,)| {
            let tutor = ctx.tutor();
            let state = ctx.state();
            async move {
                latest.set(None);
                let problem_id = ProblemId::new(id).map_err(|_| ViewError::NotFound)?;
                let mut guard = state.lock().await;
                let opened = tutor
                    .open_problem(&mut guard, &problem_id)
                    .await
                    .map_err(|err| ViewError::from_tutor(&err))?;
                let diagram = tutor.diagram(&opened.problem);
                Ok::<_, ViewError>(map_problem_chat(
                    &guard,
                    &opened.problem,
                    &diagram,
                    notices_for_open(opened.agent_error.as_ref()),
                ))
            }
        }))
    };

    let on_send = {
        let ctx = ctx.clone();
        let id = id.clone();
        move |text: String| {
            let tutor = ctx.tutor();
            let state = ctx.state();
            let id = id.clone();
            spawn(async move {
                busy.set(true);
                let mut guard = state.lock().await;
                let result = async {
                    let problem_id = ProblemId::new(id).map_err(|_| ViewError::NotFound)?;
                    let outcome = tutor
                        .send_problem_message(&mut guard, &text)
                        .await
                        .map_err(|err| ViewError::from_tutor(&err))?;
                    let problem = tutor
                        .problem(&problem_id)
                        .await
                        .map_err(|err| ViewError::from_tutor(&err))?;
                    let diagram = tutor.diagram(&problem);
                    Ok::<_, ViewError>(map_problem_chat(
                        &guard,
                        &problem,
                        &diagram,
                        notices_for_turn(&outcome),
                    ))
                }
                .await;
                match result {
                    Ok(vm) => latest.set(Some(vm)),
                    Err(err) => action_error.set(Some(err)),
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
                div { class: "page", p { "Opening problem..." } }
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
