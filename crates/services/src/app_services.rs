use std::sync::Arc;

use storage::repository::Storage;
use tracing::info;

use crate::Clock;
use crate::ai::{ChatAgent, ChatCompletionsAgent};
use crate::config::TutorConfig;
use crate::diagrams::{DiagramProvider, FileDiagramProvider};
use crate::reports::{DisabledMailer, ReportMailer, ReportSynthesizer, SmtpMailer};
use crate::tutor::TutorService;

/// Assembles the app-facing services from configuration.
#[derive(Clone)]
pub struct AppServices {
    storage: Storage,
    tutor: Arc<TutorService>,
}

impl AppServices {
    /// Wire the catalog, agent, mailer, and diagrams described by `config`.
    ///
    /// Missing credentials leave the agent or mailer disabled; startup never fails.
    #[must_use]
    pub fn from_config(config: &TutorConfig, clock: Clock) -> Self {
        let storage = Storage::from_catalog_file(&config.problems_path);

        let agent = ChatCompletionsAgent::new(config.agent.clone());
        if !agent.enabled() {
            info!("no API key configured; tutor replies are disabled");
        }
        let mailer: Arc<dyn ReportMailer> = match config.mail.clone() {
            Some(mail) => Arc::new(SmtpMailer::new(mail)),
            None => {
                info!("mail not configured; reports are shown but not sent");
                Arc::new(DisabledMailer)
            }
        };
        let diagrams = Arc::new(FileDiagramProvider::new(config.images_dir.clone()));

        Self::new(storage, Arc::new(agent), mailer, diagrams, clock)
    }

    /// Wire explicit collaborators, e.g. fakes in tests.
    #[must_use]
    pub fn new(
        storage: Storage,
        agent: Arc<dyn ChatAgent>,
        mailer: Arc<dyn ReportMailer>,
        diagrams: Arc<dyn DiagramProvider>,
        clock: Clock,
    ) -> Self {
        let reports = ReportSynthesizer::new(Arc::clone(&agent), mailer, clock);
        let tutor = Arc::new(TutorService::new(
            Arc::clone(&storage.problems),
            agent,
            reports,
            diagrams,
        ));
        Self { storage, tutor }
    }

    #[must_use]
    pub fn storage(&self) -> &Storage {
        &self.storage
    }

    #[must_use]
    pub fn tutor(&self) -> Arc<TutorService> {
        Arc::clone(&self.tutor)
    }
}
