mod support;

use std::collections::BTreeSet;
use std::sync::Arc;

use services::{AppServices, Clock, FileDiagramProvider, Page, TutorError, TutorState};
use storage::{InMemoryRepository, Storage};
use support::{RecordingMailer, ScriptedAgent, Step, projectile_draft};
use tutor_core::model::{LectureTopic, ProblemId, Role, TargetName};
use tutor_core::time::fixed_now;

fn services_with(agent: ScriptedAgent, mailer: RecordingMailer) -> AppServices {
    let repo = InMemoryRepository::new();
    repo.insert_problem(projectile_draft().validate().unwrap())
        .unwrap();
    let storage = Storage {
        problems: Arc::new(repo),
    };
    AppServices::new(
        storage,
        Arc::new(agent),
        Arc::new(mailer),
        Arc::new(FileDiagramProvider::new("/nonexistent")),
        Clock::fixed(fixed_now()),
    )
}

fn pid() -> ProblemId {
    ProblemId::new("K_2.2_1").unwrap()
}

fn target(name: &str) -> TargetName {
    TargetName::new(name).unwrap()
}

#[tokio::test]
async fn blank_name_is_rejected() {
    let tutor = services_with(ScriptedAgent::default(), RecordingMailer::default()).tutor();
    let mut state = TutorState::new();

    assert!(matches!(
        tutor.sign_in(&mut state, "   "),
        Err(TutorError::EmptyName)
    ));
    assert!(state.student().is_none());

    tutor.sign_in(&mut state, "  Ada ").unwrap();
    assert_eq!(state.student().unwrap().as_str(), "Ada");
}

#[tokio::test]
async fn opening_requires_sign_in_and_known_problem() {
    let tutor = services_with(ScriptedAgent::default(), RecordingMailer::default()).tutor();
    let mut state = TutorState::new();

    assert!(matches!(
        tutor.open_problem(&mut state, &pid()).await,
        Err(TutorError::NotSignedIn)
    ));

    tutor.sign_in(&mut state, "Ada").unwrap();
    let missing = ProblemId::new("nope").unwrap();
    assert!(matches!(
        tutor.open_problem(&mut state, &missing).await,
        Err(TutorError::UnknownProblem(id)) if id == missing
    ));
    assert_eq!(state.page(), &Page::Landing);
}

#[tokio::test]
async fn grading_is_recorded_even_when_agent_fails() {
    let tutor = services_with(ScriptedAgent::disabled(), RecordingMailer::default()).tutor();
    let mut state = TutorState::new();
    tutor.sign_in(&mut state, "Ada").unwrap();

    let opened = tutor.open_problem(&mut state, &pid()).await.unwrap();
    assert!(opened.agent_error.is_some());
    assert_eq!(state.page(), &Page::Problem(pid()));

    let outcome = tutor
        .send_problem_message(&mut state, "I get v = 12.6 m/s")
        .await
        .unwrap();
    assert_eq!(outcome.newly_solved, BTreeSet::from([target("v")]));
    assert!(outcome.reply.is_err());
    assert!(state.progress().is_solved(&pid(), &target("v")));

    let chat = state.chat(&pid()).unwrap();
    assert_eq!(chat.transcript().len(), 1);
    assert_eq!(chat.transcript().turns()[0].role, Role::Student);
}

#[tokio::test]
async fn rate_limit_is_surfaced_as_a_wait_message() {
    let agent = ScriptedAgent::new([Step::RateLimited(Some(42))]);
    let tutor = services_with(agent, RecordingMailer::default()).tutor();
    let mut state = TutorState::new();
    tutor.sign_in(&mut state, "Ada").unwrap();
    tutor.open_problem(&mut state, &pid()).await.unwrap();

    let outcome = tutor
        .send_problem_message(&mut state, "where do I start?")
        .await
        .unwrap();
    let err = outcome.reply.unwrap_err();
    assert!(err.is_rate_limited());
    assert_eq!(err.user_message(), "System limit reached. Please wait 42 seconds.");
    assert!(outcome.newly_solved.is_empty());
}

#[tokio::test]
async fn reopening_resets_chat_but_keeps_progress() {
    let agent = ScriptedAgent::new([Step::Reply("Good. Now find t.")]);
    let tutor = services_with(agent.clone(), RecordingMailer::default()).tutor();
    let mut state = TutorState::new();
    tutor.sign_in(&mut state, "Ada").unwrap();
    tutor.open_problem(&mut state, &pid()).await.unwrap();

    let outcome = tutor
        .send_problem_message(&mut state, "v = 12.5")
        .await
        .unwrap();
    assert_eq!(outcome.reply.unwrap(), "Good. Now find t.");
    assert_eq!(state.chat(&pid()).unwrap().transcript().len(), 2);

    tutor.exit_to_home(&mut state);
    assert_eq!(state.page(), &Page::Landing);
    tutor.open_problem(&mut state, &pid()).await.unwrap();

    let chat = state.chat(&pid()).unwrap();
    assert!(chat.transcript().is_empty());
    assert_eq!(
        chat.greeting(),
        "Hello Ada. How should we begin analyzing this Kinematics (HW 2)?"
    );
    assert!(state.progress().is_solved(&pid(), &target("v")));
    assert_eq!(agent.instructions().len(), 2);
    assert!(agent.instructions()[0].contains("A ball is thrown horizontally"));

    let t = tutor
        .send_problem_message(&mut state, "t = 3.1 s")
        .await
        .unwrap();
    assert_eq!(t.newly_solved, BTreeSet::from([target("t")]));

    // Solved targets are never reported twice.
    let again = tutor
        .send_problem_message(&mut state, "so v = 12.5")
        .await
        .unwrap();
    assert!(again.newly_solved.is_empty());
}

#[tokio::test]
async fn blank_message_and_missing_page_are_errors() {
    let tutor = services_with(ScriptedAgent::default(), RecordingMailer::default()).tutor();
    let mut state = TutorState::new();
    tutor.sign_in(&mut state, "Ada").unwrap();

    assert!(matches!(
        tutor.send_problem_message(&mut state, "v = 1").await,
        Err(TutorError::NoActiveSession)
    ));
    tutor.open_problem(&mut state, &pid()).await.unwrap();
    assert!(matches!(
        tutor.send_problem_message(&mut state, "  ").await,
        Err(TutorError::EmptyMessage)
    ));
}

#[tokio::test]
async fn submit_scores_transcript_with_feedback_and_shows_report() {
    let agent = ScriptedAgent::new([
        Step::Reply("What is the horizontal speed?"),
        Step::Reply("8"),
        Step::Reply("Clear reasoning."),
    ]);
    let mailer = RecordingMailer::default();
    let tutor = services_with(agent.clone(), mailer.clone()).tutor();
    let mut state = TutorState::new();
    tutor.sign_in(&mut state, "Ada").unwrap();
    tutor.open_problem(&mut state, &pid()).await.unwrap();
    tutor
        .send_problem_message(&mut state, "t = 3 s")
        .await
        .unwrap();

    let report = tutor
        .submit_session(&mut state, "  loved it ")
        .await
        .unwrap();

    let sent = agent.sent();
    assert_eq!(sent.len(), 3);
    assert_eq!(
        sent[1],
        "Chat history to evaluate:\n\
         Student: t = 3 s\n\
         Tutor: What is the horizontal speed?\n\
         Student feedback: loved it\n"
    );
    assert!(sent[2].contains("Assigned Score: 8/10"), "{}", sent[2]);
    assert!(sent[2].contains("Student feedback: loved it"), "{}", sent[2]);
    assert!(sent[2].contains("Topic: Kinematics (HW 2)"), "{}", sent[2]);

    assert_eq!(report.score().value(), 8);
    assert_eq!(report.topic(), "Kinematics (HW 2)");
    assert_eq!(state.page(), &Page::Report);
    assert_eq!(state.last_report(), Some(&report));
    assert_eq!(mailer.sent().len(), 1);
    assert_eq!(
        mailer.sent()[0].0,
        "Eng. Tutor (Ada): Kinematics (HW 2) [Score: 8/10]"
    );

    tutor.reset(&mut state);
    assert!(state.student().is_none());
    assert!(state.last_report().is_none());
    assert!(!state.progress().is_solved(&pid(), &target("t")));
}

#[tokio::test]
async fn blank_feedback_is_left_out_of_the_scored_transcript() {
    let agent = ScriptedAgent::new([
        Step::Reply("Which way does gravity act?"),
        Step::Reply("4"),
        Step::Reply("Needs more equations."),
    ]);
    let tutor = services_with(agent.clone(), RecordingMailer::default()).tutor();
    let mut state = TutorState::new();
    tutor.sign_in(&mut state, "Ada").unwrap();
    tutor.open_problem(&mut state, &pid()).await.unwrap();
    tutor
        .send_problem_message(&mut state, "is it down?")
        .await
        .unwrap();

    let report = tutor.submit_session(&mut state, "   ").await.unwrap();

    assert_eq!(report.score().value(), 4);
    let sent = agent.sent();
    assert_eq!(
        sent[1],
        "Chat history to evaluate:\n\
         Student: is it down?\n\
         Tutor: Which way does gravity act?\n"
    );
    assert!(!sent[2].contains("Student feedback"), "{}", sent[2]);
}

#[tokio::test]
async fn submit_without_open_session_fails() {
    let tutor = services_with(ScriptedAgent::default(), RecordingMailer::default()).tutor();
    let mut state = TutorState::new();
    tutor.sign_in(&mut state, "Ada").unwrap();
    assert!(matches!(
        tutor.submit_session(&mut state, "").await,
        Err(TutorError::NoActiveSession)
    ));
}

#[tokio::test]
async fn lecture_chats_without_grading() {
    let agent = ScriptedAgent::new([Step::Reply("Predict the range first.")]);
    let tutor = services_with(agent.clone(), RecordingMailer::default()).tutor();
    let mut state = TutorState::new();
    tutor.sign_in(&mut state, "Ada").unwrap();

    let agent_error = tutor
        .open_lecture(&mut state, LectureTopic::ProjectileMotion)
        .await
        .unwrap();
    assert!(agent_error.is_none());
    assert_eq!(state.page(), &Page::Lecture(LectureTopic::ProjectileMotion));
    assert!(agent.instructions()[0].contains("Projectile Motion"));

    let outcome = tutor
        .send_lecture_message(&mut state, "12.5")
        .await
        .unwrap();
    assert!(outcome.newly_solved.is_empty());
    assert_eq!(outcome.reply.unwrap(), "Predict the range first.");

    let (topic, chat) = state.lecture().unwrap();
    assert_eq!(topic, LectureTopic::ProjectileMotion);
    assert_eq!(chat.transcript().len(), 2);

    tutor.exit_to_home(&mut state);
    assert!(state.lecture().is_none());
}
