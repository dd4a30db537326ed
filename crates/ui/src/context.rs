use std::sync::Arc;

use services::{TutorService, TutorState};
use tokio::sync::Mutex;

/// What the composition root hands to the UI.
pub trait UiApp: Send + Sync {
    fn tutor(&self) -> Arc<TutorService>;
}

/// Shared by every view: the service handlers and the one session they act on.
///
/// The state sits behind an async mutex because handlers hold it across agent calls.
#[derive(Clone)]
pub struct AppContext {
    tutor: Arc<TutorService>,
    state: Arc<Mutex<TutorState>>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            tutor: app.tutor(),
            state: Arc::new(Mutex::new(TutorState::new())),
        }
    }

    #[must_use]
    pub fn tutor(&self) -> Arc<TutorService> {
        Arc::clone(&self.tutor)
    }

    #[must_use]
    pub fn state(&self) -> Arc<Mutex<TutorState>> {
        Arc::clone(&self.state)
    }
}

// This context is provided by the application composition root (`crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
