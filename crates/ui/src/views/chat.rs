use dioxus::document::eval;
use dioxus::prelude::*;

use super::scripts::RENDER_MATH_SCRIPT;
use crate::vm::{ChatVm, Notice};

/// Conversation pane shared by problems and lectures.
#[component]
pub fn ChatPanel(
    vm: ChatVm,
    busy: bool,
    on_send: EventHandler<String>,
    on_submit: EventHandler<String>,
    on_exit: EventHandler<()>,
) -> Element {
    let mut draft = use_signal(String::new);
    let mut feedback = use_signal(String::new);

    let message_count = vm.messages.len();
    use_effect(use_reactive!(|(message_count,)| {
        let _ = message_count;
        let _ = eval(RENDER_MATH_SCRIPT);
    }));

    let send = move |evt: FormEvent| {
        evt.prevent_default();
        let text = draft.read().trim().to_string();
        if text.is_empty() {
            return;
        }
        draft.set(String::new());
        on_send.call(text);
    };

    rsx! {
        div { class: "page chat-page",
            header { class: "chat-header",
                h2 { "{vm.title}" }
                button {
                    class: "secondary",
                    id: "chat-exit",
                    disabled: busy,
                    onclick: move |_| on_exit.call(()),
                    "Exit to home"
                }
            }

            div { class: "chat-columns",
                section { class: "chat-reference",
                    img { class: "diagram", src: "{vm.diagram_uri}", alt: "{vm.title}" }
                    if let Some(statement) = vm.statement_html.as_ref() {
                        div { class: "statement", dangerous_inner_html: "{statement}" }
                    }
                    if let Some(progress) = vm.progress.as_ref().filter(|progress| progress.total > 0) {
                        p { class: "progress", "Solved {progress.solved}/{progress.total}" }
                        if progress.is_complete {
                            p { class: "notice success", "All targets verified." }
                        }
                        ul { class: "targets",
                            for target in vm.targets.iter() {
                                li {
                                    class: if target.solved { "target solved" } else { "target" },
                                    "{target.name}"
                                }
                            }
                        }
                    }
                    p { class: "footer-label", "{vm.footer}" }
                }

                section { class: "chat-thread",
                    if !vm.greeting.is_empty() {
                        div { class: "message tutor",
                            span { class: "speaker", "Tutor" }
                            p { "{vm.greeting}" }
                        }
                    }
                    for (index, message) in vm.messages.iter().enumerate() {
                        div {
                            key: "{index}",
                            class: if message.from_student { "message student" } else { "message tutor" },
                            span { class: "speaker", "{message.speaker}" }
                            div { class: "message-body", dangerous_inner_html: "{message.html}" }
                        }
                    }
                    for notice in vm.notices.iter() {
                        match notice {
                            Notice::Solved(text) => rsx! { div { class: "notice success", "{text}" } },
                            Notice::Warning(text) => rsx! { div { class: "notice warning", "{text}" } },
                        }
                    }

                    form { class: "chat-input", onsubmit: send,
                        input {
                            id: "chat-draft",
                            r#type: "text",
                            placeholder: "Explain your next step...",
                            value: "{draft}",
                            disabled: busy,
                            oninput: move |evt| draft.set(evt.value()),
                        }
                        button { r#type: "submit", disabled: busy, "Send" }
                    }

                    div { class: "submit-box",
                        textarea {
                            id: "chat-feedback",
                            placeholder: "Feedback for your instructor (optional)",
                            value: "{feedback}",
                            disabled: busy,
                            oninput: move |evt| feedback.set(evt.value()),
                        }
                        button {
                            id: "chat-submit",
                            disabled: busy,
                            onclick: move |_| on_submit.call(feedback.read().clone()),
                            "Submit session"
                        }
                    }
                }
            }
        }
    }
}
