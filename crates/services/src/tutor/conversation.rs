use tutor_core::model::{Role, Transcript};

use crate::ai::{AgentSession, ChatAgent};
use crate::error::AgentError;

/// One chat pane: the agent session behind it and the turns shown to the student.
///
/// The visible log records every student message, including ones the agent
/// failed to answer, so the submitted transcript reflects the student's work.
pub struct Conversation {
    instruction: String,
    greeting: String,
    session: Option<Box<dyn AgentSession>>,
    log: Transcript,
}

impl Conversation {
    #[must_use]
    pub fn new(
        instruction: impl Into<String>,
        greeting: impl Into<String>,
        session: Option<Box<dyn AgentSession>>,
    ) -> Self {
        Self {
            instruction: instruction.into(),
            greeting: greeting.into(),
            session,
            log: Transcript::new(),
        }
    }

    /// Tutor line shown above the first turn.
    #[must_use]
    pub fn greeting(&self) -> &str {
        &self.greeting
    }

    #[must_use]
    pub fn transcript(&self) -> &Transcript {
        &self.log
    }

    #[must_use]
    pub fn has_agent(&self) -> bool {
        self.session.is_some()
    }

    /// Send `text` to the agent, starting a session first if the last start failed.
    ///
    /// # Errors
    ///
    /// Returns `AgentError` if the session cannot be started or the send fails.
    pub async fn exchange(
        &mut self,
        agent: &dyn ChatAgent,
        text: &str,
    ) -> Result<String, AgentError> {
        self.log.push(Role::Student, text);

        let session = match self.session.take() {
            Some(session) => session,
            None => agent.start(&self.instruction).await?,
        };
        let session = self.session.insert(session);

        let reply = session.send(text).await?;
        self.log.push(Role::Tutor, reply.clone());
        Ok(reply)
    }
}
