use async_trait::async_trait;
use reqwest::header::RETRY_AFTER;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use tutor_core::model::{Role, Transcript};

use super::agent::{AgentSession, ChatAgent};
use crate::config::AgentConfig;
use crate::error::AgentError;

/// Agent backed by an OpenAI-compatible `/chat/completions` endpoint.
#[derive(Clone)]
pub struct ChatCompletionsAgent {
    client: Client,
    config: Option<AgentConfig>,
}

impl ChatCompletionsAgent {
    #[must_use]
    pub fn new(config: Option<AgentConfig>) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    #[must_use]
    pub fn enabled(&self) -> bool {
        self.config.is_some()
    }
}

#[async_trait]
impl ChatAgent for ChatCompletionsAgent {
    async fn start(&self, instruction: &str) -> Result<Box<dyn AgentSession>, AgentError> {
        let config = self.config.clone().ok_or(AgentError::Disabled)?;
        debug!(model = %config.model, "opening chat session");
        Ok(Box::new(ChatCompletionsSession {
            client: self.client.clone(),
            config,
            instruction: instruction.to_string(),
            history: Transcript::new(),
        }))
    }
}

struct ChatCompletionsSession {
    client: Client,
    config: AgentConfig,
    instruction: String,
    history: Transcript,
}

impl ChatCompletionsSession {
    fn messages(&self, text: &str) -> Vec<ChatMessage> {
        let mut messages = Vec::with_capacity(self.history.len() + 2);
        messages.push(ChatMessage {
            role: "system",
            content: self.instruction.clone(),
        });
        for turn in self.history.turns() {
            messages.push(ChatMessage {
                role: match turn.role {
                    Role::Tutor => "assistant",
                    Role::Student => "user",
                },
                content: turn.text.clone(),
            });
        }
        messages.push(ChatMessage {
            role: "user",
            content: text.to_string(),
        });
        messages
    }
}

#[async_trait]
impl AgentSession for ChatCompletionsSession {
    async fn send(&mut self, text: &str) -> Result<String, AgentError> {
        let url = format!(
            "{}/chat/completions",
            self.config.base_url.trim_end_matches('/')
        );
        let payload = ChatRequest {
            model: self.config.model.clone(),
            messages: self.messages(text),
            temperature: 0.2,
        };

        let response = self
            .client
            .post(url)
            .bearer_auth(&self.config.api_key)
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::TOO_MANY_REQUESTS {
            let retry_after_secs = response
                .headers()
                .get(RETRY_AFTER)
                .and_then(|value| value.to_str().ok())
                .and_then(|value| value.trim().parse::<u64>().ok());
            warn!(?retry_after_secs, "chat agent rate limited");
            return Err(AgentError::RateLimited { retry_after_secs });
        }
        if !status.is_success() {
            warn!(%status, "chat agent request failed");
            return Err(AgentError::HttpStatus(status));
        }

        let body: ChatResponse = response.json().await?;
        let content = body
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .map(|content| content.trim().to_string())
            .filter(|content| !content.is_empty())
            .ok_or(AgentError::EmptyResponse)?;

        self.history.push(Role::Student, text);
        self.history.push(Role::Tutor, content.clone());
        Ok(content)
    }

    fn history(&self) -> &Transcript {
        &self.history
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessageResponse,
}

#[derive(Debug, Deserialize)]
struct ChatMessageResponse {
    content: Option<String>,
}
