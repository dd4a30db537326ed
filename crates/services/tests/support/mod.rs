#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use services::ai::{AgentSession, ChatAgent};
use services::error::{AgentError, MailError};
use services::reports::ReportMailer;
use tutor_core::model::{ExpectedAnswer, ProblemDraft, Role, Transcript};

/// What the scripted agent does on the next `send`.
#[derive(Debug, Clone)]
pub enum Step {
    Reply(&'static str),
    RateLimited(Option<u64>),
    Empty,
}

/// Fake agent replaying a fixed script across all of its sessions.
#[derive(Clone, Default)]
pub struct ScriptedAgent {
    steps: Arc<Mutex<VecDeque<Step>>>,
    instructions: Arc<Mutex<Vec<String>>>,
    sent: Arc<Mutex<Vec<String>>>,
    refuse_start: bool,
}

impl ScriptedAgent {
    pub fn new(steps: impl IntoIterator<Item = Step>) -> Self {
        Self {
            steps: Arc::new(Mutex::new(steps.into_iter().collect())),
            ..Self::default()
        }
    }

    /// An agent that cannot open sessions, like one with no API key.
    pub fn disabled() -> Self {
        Self {
            refuse_start: true,
            ..Self::default()
        }
    }

    pub fn instructions(&self) -> Vec<String> {
        self.instructions.lock().unwrap().clone()
    }

    /// Every text sent to any of this agent's sessions, in order.
    pub fn sent(&self) -> Vec<String> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl ChatAgent for ScriptedAgent {
    async fn start(&self, instruction: &str) -> Result<Box<dyn AgentSession>, AgentError> {
        if self.refuse_start {
            return Err(AgentError::Disabled);
        }
        self.instructions.lock().unwrap().push(instruction.to_string());
        Ok(Box::new(ScriptedSession {
            steps: Arc::clone(&self.steps),
            sent: Arc::clone(&self.sent),
            history: Transcript::new(),
        }))
    }
}

struct ScriptedSession {
    steps: Arc<Mutex<VecDeque<Step>>>,
    sent: Arc<Mutex<Vec<String>>>,
    history: Transcript,
}

#[async_trait]
impl AgentSession for ScriptedSession {
    async fn send(&mut self, text: &str) -> Result<String, AgentError> {
        self.sent.lock().unwrap().push(text.to_string());
        let step = self.steps.lock().unwrap().pop_front().unwrap_or(Step::Empty);
        match step {
            Step::Reply(reply) => {
                self.history.push(Role::Student, text);
                self.history.push(Role::Tutor, reply);
                Ok(reply.to_string())
            }
            Step::RateLimited(retry_after_secs) => {
                Err(AgentError::RateLimited { retry_after_secs })
            }
            Step::Empty => Err(AgentError::EmptyResponse),
        }
    }

    fn history(&self) -> &Transcript {
        &self.history
    }
}

/// Records every report it is asked to send.
#[derive(Clone, Default)]
pub struct RecordingMailer {
    sent: Arc<Mutex<Vec<(String, String)>>>,
}

impl RecordingMailer {
    pub fn sent(&self) -> Vec<(String, String)> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl ReportMailer for RecordingMailer {
    async fn send_report(&self, subject: &str, body: &str) -> Result<(), MailError> {
        self.sent
            .lock()
            .unwrap()
            .push((subject.to_string(), body.to_string()));
        Ok(())
    }
}

/// Always fails at the transport.
#[derive(Clone, Default)]
pub struct FailingMailer;

#[async_trait]
impl ReportMailer for FailingMailer {
    async fn send_report(&self, _subject: &str, _body: &str) -> Result<(), MailError> {
        Err(MailError::Transport("connection refused".into()))
    }
}

/// A two-target projectile problem: `v` = 12.5 and `t` = 3.
pub fn projectile_draft() -> ProblemDraft {
    ProblemDraft {
        id: "K_2.2_1".into(),
        category: "Kinematics (HW 2)".into(),
        statement: "A ball is thrown horizontally from a 44 m cliff.".into(),
        targets: [
            ("v".to_string(), ExpectedAnswer::Numeric(12.5)),
            ("t".to_string(), ExpectedAnswer::Numeric(3.0)),
        ]
            .into_iter()
            .collect(),
        ..ProblemDraft::default()
    }
}
