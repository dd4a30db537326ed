use std::collections::BTreeSet;
use std::sync::Arc;

use storage::repository::{ProblemRepository, StorageError};
use tracing::{info, warn};
use tutor_core::model::{LectureTopic, Problem, ProblemId, Report, StudentName, TargetName};

use super::conversation::Conversation;
use super::state::{Page, TutorState};
use crate::ai::ChatAgent;
use crate::diagrams::{Diagram, DiagramProvider};
use crate::error::{AgentError, TutorError};
use crate::prompts::{greeting, lecture_instruction, problem_instruction};
use crate::reports::ReportSynthesizer;

/// Result of opening a problem. The page switches even if the agent could not start.
#[derive(Debug)]
pub struct Opened {
    pub problem: Problem,
    pub agent_error: Option<AgentError>,
}

/// Result of one student message.
#[derive(Debug)]
pub struct TurnOutcome {
    /// Targets solved by this message; always empty in lectures.
    pub newly_solved: BTreeSet<TargetName>,
    pub reply: Result<String, AgentError>,
}

/// Handlers for every student action. Stateless itself; all session data
/// lives in the `TutorState` passed in.
#[derive(Clone)]
pub struct TutorService {
    problems: Arc<dyn ProblemRepository>,
    agent: Arc<dyn ChatAgent>,
    reports: ReportSynthesizer,
    diagrams: Arc<dyn DiagramProvider>,
}

impl TutorService {
    #[must_use]
    pub fn new(
        problems: Arc<dyn ProblemRepository>,
        agent: Arc<dyn ChatAgent>,
        reports: ReportSynthesizer,
        diagrams: Arc<dyn DiagramProvider>,
    ) -> Self {
        Self {
            problems,
            agent,
            reports,
            diagrams,
        }
    }

    /// # Errors
    ///
    /// Returns `TutorError::EmptyName` if `name` is blank.
    pub fn sign_in(&self, state: &mut TutorState, name: &str) -> Result<(), TutorError> {
        let student = StudentName::new(name).map_err(|_| TutorError::EmptyName)?;
        info!(student = %student, "student signed in");
        state.student = Some(student);
        state.page = Page::Landing;
        Ok(())
    }

    /// All problems in catalog order.
    ///
    /// # Errors
    ///
    /// Returns `TutorError::Storage` if the repository fails.
    pub async fn catalog(&self) -> Result<Vec<Problem>, TutorError> {
        Ok(self.problems.list_problems().await?)
    }

    /// # Errors
    ///
    /// Returns `TutorError::UnknownProblem` if no problem has `problem_id`.
    pub async fn problem(&self, problem_id: &ProblemId) -> Result<Problem, TutorError> {
        self.problems
            .get_problem(problem_id)
            .await
            .map_err(|err| match err {
                StorageError::NotFound => TutorError::UnknownProblem(problem_id.clone()),
                other => TutorError::Storage(other),
            })
    }

    /// Start a fresh conversation on a problem. Progress on it is kept.
    ///
    /// # Errors
    ///
    /// Returns `TutorError::NotSignedIn` or `TutorError::UnknownProblem`.
    pub async fn open_problem(
        &self,
        state: &mut TutorState,
        problem_id: &ProblemId,
    ) -> Result<Opened, TutorError> {
        let student = state.student.clone().ok_or(TutorError::NotSignedIn)?;
        let problem = self.problem(problem_id).await?;

        state.progress.visit(problem_id);
        let instruction = problem_instruction(student.as_str(), &problem);
        let (session, agent_error) = match self.agent.start(&instruction).await {
            Ok(session) => (Some(session), None),
            Err(err) => {
                warn!(problem = %problem_id, error = %err, "agent session did not start");
                (None, Some(err))
            }
        };
        let chat = Conversation::new(
            instruction,
            greeting(student.as_str(), problem.category()),
            session,
        );
        state.chats.insert(problem_id.clone(), chat);
        state.page = Page::Problem(problem_id.clone());
        info!(problem = %problem_id, "problem opened");

        Ok(Opened {
            problem,
            agent_error,
        })
    }

    /// Grade the message against the open problem, then ask the agent.
    ///
    /// Grading is recorded even when the agent call fails.
    ///
    /// # Errors
    ///
    /// Returns `TutorError` if the message is blank, no problem is open, or the
    /// problem has vanished from the catalog.
    pub async fn send_problem_message(
        &self,
        state: &mut TutorState,
        text: &str,
    ) -> Result<TurnOutcome, TutorError> {
        let text = non_empty(text)?;
        let Page::Problem(problem_id) = state.page.clone() else {
            return Err(TutorError::NoActiveSession);
        };
        let student = state.student.clone().ok_or(TutorError::NotSignedIn)?;
        let problem = self.problem(&problem_id).await?;

        let newly_solved = state
            .progress
            .record_attempt(&problem_id, text, problem.targets());

        let chat = state.chats.entry(problem_id).or_insert_with(|| {
            Conversation::new(
                problem_instruction(student.as_str(), &problem),
                greeting(student.as_str(), problem.category()),
                None,
            )
        });
        let reply = chat.exchange(self.agent.as_ref(), text).await;
        log_failed_reply(&reply);

        Ok(TurnOutcome {
            newly_solved,
            reply,
        })
    }

    /// Start a lecture conversation, replacing any previous one.
    ///
    /// # Errors
    ///
    /// Returns `TutorError::NotSignedIn` if no student is signed in.
    pub async fn open_lecture(
        &self,
        state: &mut TutorState,
        topic: LectureTopic,
    ) -> Result<Option<AgentError>, TutorError> {
        let student = state.student.clone().ok_or(TutorError::NotSignedIn)?;
        let instruction = lecture_instruction(student.as_str(), topic);
        let (session, agent_error) = match self.agent.start(&instruction).await {
            Ok(session) => (Some(session), None),
            Err(err) => {
                warn!(topic = %topic, error = %err, "lecture session did not start");
                (None, Some(err))
            }
        };
        let chat = Conversation::new(
            instruction,
            greeting(student.as_str(), topic.title()),
            session,
        );
        state.lecture = Some((topic, chat));
        state.page = Page::Lecture(topic);
        info!(topic = %topic, "lecture opened");
        Ok(agent_error)
    }

    /// # Errors
    ///
    /// Returns `TutorError` if the message is blank or no lecture is open.
    pub async fn send_lecture_message(
        &self,
        state: &mut TutorState,
        text: &str,
    ) -> Result<TurnOutcome, TutorError> {
        let text = non_empty(text)?;
        let Page::Lecture(topic) = state.page else {
            return Err(TutorError::NoActiveSession);
        };
        let chat = match &mut state.lecture {
            Some((open, chat)) if *open == topic => chat,
            _ => return Err(TutorError::NoActiveSession),
        };
        let reply = chat.exchange(self.agent.as_ref(), text).await;
        log_failed_reply(&reply);

        Ok(TurnOutcome {
            newly_solved: BTreeSet::new(),
            reply,
        })
    }

    /// Score the current conversation, mail the report, and show it.
    ///
    /// # Errors
    ///
    /// Returns `TutorError` if nobody is signed in or no problem or lecture is open.
    pub async fn submit_session(
        &self,
        state: &mut TutorState,
        feedback: &str,
    ) -> Result<Report, TutorError> {
        let student = state.student.clone().ok_or(TutorError::NotSignedIn)?;
        let (topic, mut transcript) = match state.page.clone() {
            Page::Problem(problem_id) => {
                let problem = self.problem(&problem_id).await?;
                let topic = if problem.category().is_empty() {
                    problem_id.to_string()
                } else {
                    problem.category().to_string()
                };
                let text = state
                    .chats
                    .get(&problem_id)
                    .map(|chat| chat.transcript().to_plain_text())
                    .unwrap_or_default();
                (topic, text)
            }
            Page::Lecture(topic) => {
                let text = state
                    .lecture
                    .as_ref()
                    .map(|(_, chat)| chat.transcript().to_plain_text())
                    .unwrap_or_default();
                (topic.title().to_string(), text)
            }
            Page::Landing | Page::Report => return Err(TutorError::NoActiveSession),
        };

        let feedback = feedback.trim();
        if !feedback.is_empty() {
            transcript.push_str("Student feedback: ");
            transcript.push_str(feedback);
            transcript.push('\n');
        }

        let report = self
            .reports
            .synthesize(student.as_str(), &topic, &transcript)
            .await;
        state.last_report = Some(report.clone());
        state.page = Page::Report;
        Ok(report)
    }

    /// Back to the landing page. Problem chats and progress survive; the lecture does not.
    pub fn exit_to_home(&self, state: &mut TutorState) {
        state.lecture = None;
        state.page = Page::Landing;
    }

    /// End the session entirely, back to name entry.
    pub fn reset(&self, state: &mut TutorState) {
        info!("session reset");
        state.student = None;
        state.page = Page::Landing;
        state.chats.clear();
        state.progress.reset();
        state.lecture = None;
        state.last_report = None;
    }

    #[must_use]
    pub fn diagram(&self, problem: &Problem) -> Diagram {
        self.diagrams.render(problem)
    }

    #[must_use]
    pub fn lecture_diagram(&self, topic: LectureTopic) -> Diagram {
        self.diagrams.render_lecture(topic)
    }
}

fn non_empty(text: &str) -> Result<&str, TutorError> {
    let text = text.trim();
    if text.is_empty() {
        Err(TutorError::EmptyMessage)
    } else {
        Ok(text)
    }
}

fn log_failed_reply(reply: &Result<String, AgentError>) {
    if let Err(err) = reply {
        if err.is_rate_limited() {
            warn!("agent rate limited; asking student to wait");
        } else {
            warn!(error = %err, "agent reply failed");
        }
    }
}
