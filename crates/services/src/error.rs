//! Shared error types for the services crate.

use thiserror::Error;

use storage::repository::StorageError;
use tutor_core::model::ProblemId;

/// Seconds to ask the student to wait when the provider gives no hint.
pub const DEFAULT_RETRY_SECS: u64 = 60;

/// Errors emitted by the conversational agent.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AgentError {
    #[error("chat agent is not configured")]
    Disabled,
    #[error("chat agent rate limit reached")]
    RateLimited { retry_after_secs: Option<u64> },
    #[error("chat agent returned an empty response")]
    EmptyResponse,
    #[error("chat agent request failed with status {0}")]
    HttpStatus(reqwest::StatusCode),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

impl AgentError {
    #[must_use]
    pub fn is_rate_limited(&self) -> bool {
        matches!(self, Self::RateLimited { .. })
    }

    /// Inline warning for the student. Rate limiting asks them to wait rather than retry now.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::RateLimited { retry_after_secs } => format!(
                "System limit reached. Please wait {} seconds.",
                retry_after_secs.unwrap_or(DEFAULT_RETRY_SECS)
            ),
            Self::Disabled => "The tutor is not configured on this machine.".to_string(),
            other => format!("Tutor error: {other}"),
        }
    }
}

/// Errors emitted by report mail delivery.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum MailError {
    #[error("report mail is not configured")]
    Disabled,
    #[error("invalid mail address: {0}")]
    Address(String),
    #[error("could not build report mail: {0}")]
    Build(String),
    #[error("mail transport failed: {0}")]
    Transport(String),
}

/// Errors emitted while reading configuration.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(String),
    #[error("invalid SMTP port: {0}")]
    InvalidPort(String),
}

/// Errors emitted by tutoring handlers.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum TutorError {
    #[error("a display name is required")]
    EmptyName,
    #[error("sign in before starting a session")]
    NotSignedIn,
    #[error("no active problem or lecture")]
    NoActiveSession,
    #[error("message cannot be empty")]
    EmptyMessage,
    #[error("unknown problem {0}")]
    UnknownProblem(ProblemId),
    #[error(transparent)]
    Storage(#[from] StorageError),
}
