use async_trait::async_trait;
use tutor_core::model::Transcript;

use crate::error::AgentError;

/// A hosted chat model that can open conversations under a fixed instruction.
#[async_trait]
pub trait ChatAgent: Send + Sync {
    /// Open a new conversation whose system instruction is `instruction`.
    ///
    /// # Errors
    ///
    /// Returns `AgentError::Disabled` if the agent is not configured.
    async fn start(&self, instruction: &str) -> Result<Box<dyn AgentSession>, AgentError>;
}

/// One conversation with the agent.
///
/// The history only grows on successful exchanges: a failed `send` leaves it unchanged.
#[async_trait]
pub trait AgentSession: Send + Sync {
    /// Send a student message and return the tutor's reply.
    ///
    /// # Errors
    ///
    /// Returns `AgentError` if the provider call fails or is rate limited.
    async fn send(&mut self, text: &str) -> Result<String, AgentError>;

    /// Ordered turns exchanged so far.
    fn history(&self) -> &Transcript;
}
