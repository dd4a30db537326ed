#![forbid(unsafe_code)]

pub mod ai;
pub mod app_services;
pub mod config;
pub mod diagrams;
pub mod error;
pub mod grading;
pub mod prompts;
pub mod reports;
pub mod tutor;

pub use tutor_core::Clock;

pub use app_services::AppServices;
pub use config::{AgentConfig, MailConfig, TutorConfig};
pub use diagrams::{Diagram, DiagramProvider, FileDiagramProvider};
pub use error::{AgentError, ConfigError, MailError, TutorError};
pub use grading::{ProblemProgress, ProgressTracker};
pub use reports::{ReportMailer, ReportSynthesizer};
pub use tutor::{Conversation, Opened, Page, TurnOutcome, TutorService, TutorState};
