//! The tutoring session: typed state plus the handlers the UI drives.

mod conversation;
mod service;
mod state;

pub use conversation::Conversation;
pub use service::{Opened, TurnOutcome, TutorService};
pub use state::{Page, TutorState};
