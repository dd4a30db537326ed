use std::collections::HashMap;

use tutor_core::model::{LectureTopic, ProblemId, Report, StudentName};

use super::conversation::Conversation;
use crate::grading::ProgressTracker;

/// Which screen the session is on.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Landing,
    Problem(ProblemId),
    Lecture(LectureTopic),
    Report,
}

/// Everything one student's session holds. Owned by the UI and lent to
/// `TutorService` handlers by `&mut`.
#[derive(Default)]
pub struct TutorState {
    pub(super) student: Option<StudentName>,
    pub(super) page: Page,
    pub(super) chats: HashMap<ProblemId, Conversation>,
    pub(super) progress: ProgressTracker,
    pub(super) lecture: Option<(LectureTopic, Conversation)>,
    pub(super) last_report: Option<Report>,
}

impl TutorState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn student(&self) -> Option<&StudentName> {
        self.student.as_ref()
    }

    #[must_use]
    pub fn page(&self) -> &Page {
        &self.page
    }

    #[must_use]
    pub fn chat(&self, problem_id: &ProblemId) -> Option<&Conversation> {
        self.chats.get(problem_id)
    }

    #[must_use]
    pub fn lecture(&self) -> Option<(LectureTopic, &Conversation)> {
        self.lecture.as_ref().map(|(topic, chat)| (*topic, chat))
    }

    #[must_use]
    pub fn progress(&self) -> &ProgressTracker {
        &self.progress
    }

    #[must_use]
    pub fn last_report(&self) -> Option<&Report> {
        self.last_report.as_ref()
    }
}
