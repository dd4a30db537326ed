use std::sync::Arc;

use async_trait::async_trait;
use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use services::ai::{AgentSession, ChatAgent};
use services::error::AgentError;
use services::reports::DisabledMailer;
use services::{AppServices, Clock, FileDiagramProvider, TutorService};
use storage::{InMemoryRepository, Storage};
use tutor_core::model::{ExpectedAnswer, ProblemDraft, Role, Transcript};
use tutor_core::time::fixed_now;

use crate::context::{AppContext, UiApp, build_app_context};
use crate::views::{HomeView, LectureView, ProblemView, ReportView};

/// Answers every message with the same line.
struct FixedAgent(&'static str);

#[async_trait]
impl ChatAgent for FixedAgent {
    async fn start(&self, _instruction: &str) -> Result<Box<dyn AgentSession>, AgentError> {
        Ok(Box::new(FixedSession {
            reply: self.0,
            history: Transcript::new(),
        }))
    }
}

struct FixedSession {
    reply: &'static str,
    history: Transcript,
}

#[async_trait]
impl AgentSession for FixedSession {
    async fn send(&mut self, text: &str) -> Result<String, AgentError> {
        self.history.push(Role::Student, text);
        self.history.push(Role::Tutor, self.reply);
        Ok(self.reply.to_string())
    }

    fn history(&self) -> &Transcript {
        &self.history
    }
}

struct TestApp {
    tutor: Arc<TutorService>,
}

impl UiApp for TestApp {
    fn tutor(&self) -> Arc<TutorService> {
        Arc::clone(&self.tutor)
    }
}

#[derive(Clone, PartialEq, Eq)]
pub enum ViewKind {
    Home,
    Problem(String),
    Lecture(String),
    Report,
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    context: AppContext,
    view: ViewKind,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    use_context_provider(|| props.context.clone());
    use_context_provider(|| props.view.clone());
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    match use_context::<ViewKind>() {
        ViewKind::Home => rsx! { HomeView {} },
        ViewKind::Problem(id) => rsx! { ProblemView { id } },
        ViewKind::Lecture(code) => rsx! { LectureView { code } },
        ViewKind::Report => rsx! { ReportView {} },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub context: AppContext,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        for _ in 0..3 {
            let _ = tokio::time::timeout(
                std::time::Duration::from_millis(50),
                self.dom.wait_for_work(),
            )
            .await;
            self.dom.render_immediate(&mut NoOpMutations);
            self.dom.process_events();
        }
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

fn seeded_storage() -> Storage {
    let repo = InMemoryRepository::new();
    let problem = ProblemDraft {
        id: "198".into(),
        category: "Impulse and Momentum".into(),
        statement: "Two carts collide and couple together.".into(),
        targets: [("v".to_string(), ExpectedAnswer::Numeric(2.5))]
            .into_iter()
            .collect(),
        hw_title: Some("HW 9".into()),
        hw_subtitle: Some("impulse".into()),
        ..ProblemDraft::default()
    }
    .validate()
    .expect("valid problem");
    repo.insert_problem(problem).expect("insert problem");
    Storage {
        problems: Arc::new(repo),
    }
}

/// Build a harness; `student` signs in before the first render.
pub async fn setup_view_harness(view: ViewKind, student: Option<&str>) -> ViewHarness {
    let services = AppServices::new(
        seeded_storage(),
        Arc::new(FixedAgent("7")),
        Arc::new(DisabledMailer),
        Arc::new(FileDiagramProvider::new("/nonexistent")),
        Clock::fixed(fixed_now()),
    );
    let app: Arc<dyn UiApp> = Arc::new(TestApp {
        tutor: services.tutor(),
    });
    let context = build_app_context(&app);

    if let Some(name) = student {
        let state = context.state();
        context
            .tutor()
            .sign_in(&mut *state.lock().await, name)
            .expect("sign in");
    }

    let dom = VirtualDom::new_with_props(
        ViewRouterHarness,
        ViewHarnessProps {
            context: context.clone(),
            view,
        },
    );

    ViewHarness { dom, context }
}
