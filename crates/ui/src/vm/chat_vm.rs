use services::{AgentError, Conversation, Diagram, ProblemProgress, TurnOutcome, TutorState};
use tutor_core::model::{LectureTopic, Problem, Role};

use super::markdown_vm::markdown_to_html;

/// Inline banner above the chat input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Notice {
    Solved(String),
    Warning(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MessageVm {
    pub speaker: &'static str,
    pub html: String,
    pub from_student: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TargetVm {
    pub name: String,
    pub solved: bool,
}

/// One chat screen, problem or lecture.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatVm {
    pub title: String,
    pub statement_html: Option<String>,
    pub footer: String,
    pub diagram_uri: String,
    pub greeting: String,
    pub messages: Vec<MessageVm>,
    pub targets: Vec<TargetVm>,
    /// `None` for lectures, which have nothing to grade.
    pub progress: Option<ProblemProgress>,
    pub notices: Vec<Notice>,
}

#[must_use]
pub fn map_problem_chat(
    state: &TutorState,
    problem: &Problem,
    diagram: &Diagram,
    notices: Vec<Notice>,
) -> ChatVm {
    let solved = state.progress().solved(problem.id());
    let targets = problem
        .targets()
        .keys()
        .map(|name| TargetVm {
            name: name.to_string(),
            solved: solved.is_some_and(|set| set.contains(name)),
        })
        .collect();
    let chat = state.chat(problem.id());

    ChatVm {
        title: format!("Problem {}", problem.id()),
        statement_html: Some(markdown_to_html(problem.statement())),
        footer: problem.footer_label(),
        diagram_uri: diagram.data_uri(),
        greeting: chat.map(|c| c.greeting().to_string()).unwrap_or_default(),
        messages: chat.map(map_messages).unwrap_or_default(),
        targets,
        progress: Some(state.progress().progress(problem)),
        notices,
    }
}

#[must_use]
pub fn map_lecture_chat(
    state: &TutorState,
    topic: LectureTopic,
    diagram: &Diagram,
    notices: Vec<Notice>,
) -> ChatVm {
    let chat = state
        .lecture()
        .filter(|(open, _)| *open == topic)
        .map(|(_, chat)| chat);

    ChatVm {
        title: format!("{} {}", topic.code(), topic.title()),
        statement_html: None,
        footer: "Lecture simulation".to_string(),
        diagram_uri: diagram.data_uri(),
        greeting: chat.map(|c| c.greeting().to_string()).unwrap_or_default(),
        messages: chat.map(map_messages).unwrap_or_default(),
        targets: Vec::new(),
        progress: None,
        notices,
    }
}

fn map_messages(chat: &Conversation) -> Vec<MessageVm> {
    chat.transcript()
        .turns()
        .iter()
        .map(|turn| MessageVm {
            speaker: turn.role.label(),
            html: markdown_to_html(&turn.text),
            from_student: turn.role == Role::Student,
        })
        .collect()
}

#[must_use]
pub fn notices_for_open(agent_error: Option<&AgentError>) -> Vec<Notice> {
    agent_error
        .map(|err| vec![Notice::Warning(err.user_message())])
        .unwrap_or_default()
}

#[must_use]
pub fn notices_for_turn(outcome: &TurnOutcome) -> Vec<Notice> {
    let mut notices = Vec::new();
    if !outcome.newly_solved.is_empty() {
        let names: Vec<_> = outcome.newly_solved.iter().map(ToString::to_string).collect();
        notices.push(Notice::Solved(format!(
            "Correct! Verified: {}.",
            names.join(", ")
        )));
    }
    if let Err(err) = &outcome.reply {
        notices.push(Notice::Warning(err.user_message()));
    }
    notices
}
