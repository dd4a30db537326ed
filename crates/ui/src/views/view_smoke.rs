use tutor_core::model::ProblemId;

use super::test_harness::{ViewKind, setup_view_harness};

#[tokio::test(flavor = "current_thread")]
async fn home_asks_for_a_name_before_sign_in() {
    let mut harness = setup_view_harness(ViewKind::Home, None).await;
    harness.rebuild();
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains("Your name"), "missing name form in {html}");
    assert!(!html.contains("Impulse and Momentum"), "catalog shown early in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn home_lists_buckets_and_lectures_once_signed_in() {
    let mut harness = setup_view_harness(ViewKind::Home, Some("Ada")).await;
    harness.rebuild();
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains("Hello, Ada"), "missing greeting in {html}");
    assert!(html.contains("Impulse and Momentum"), "missing bucket in {html}");
    assert!(html.contains("Impulse"), "missing problem button in {html}");
    assert!(html.contains("K_2.4 Polar Coordinates"), "missing lecture in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn problem_view_opens_a_fresh_chat() {
    let mut harness = setup_view_harness(ViewKind::Problem("198".into()), Some("Ada")).await;
    harness.rebuild();
    harness.drive_async().await;

    let html = harness.render();
    assert!(
        html.contains("How should we begin analyzing this Impulse and Momentum?"),
        "missing greeting in {html}"
    );
    assert!(html.contains("Two carts collide"), "missing statement in {html}");
    assert!(html.contains("Solved 0/1"), "missing progress in {html}");
    assert!(html.contains("data:image/svg+xml;base64,"), "missing diagram in {html}");

    let state = harness.context.state();
    let guard = state.lock().await;
    assert!(guard.chat(&ProblemId::new("198").unwrap()).is_some());
}

#[tokio::test(flavor = "current_thread")]
async fn problem_view_requires_sign_in() {
    let mut harness = setup_view_harness(ViewKind::Problem("198".into()), None).await;
    harness.rebuild();
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains("Enter your name on the home page first."), "{html}");
}

#[tokio::test(flavor = "current_thread")]
async fn unknown_lecture_code_shows_lecture_not_found() {
    let mut harness = setup_view_harness(ViewKind::Lecture("K_9.9".into()), Some("Ada")).await;
    harness.rebuild();
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains("There is no lecture with that code."), "{html}");
    assert!(!html.contains("That problem is not in the catalog."), "{html}");
}

#[tokio::test(flavor = "current_thread")]
async fn report_view_shows_submitted_report() {
    let mut harness = setup_view_harness(ViewKind::Report, Some("Ada")).await;
    {
        let tutor = harness.context.tutor();
        let state = harness.context.state();
        let mut guard = state.lock().await;
        tutor
            .open_problem(&mut guard, &ProblemId::new("198").unwrap())
            .await
            .unwrap();
        tutor
            .send_problem_message(&mut guard, "v = 2.5 m/s")
            .await
            .unwrap();
        tutor.submit_session(&mut guard, "").await.unwrap();
    }
    harness.rebuild();
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains("Session Report"), "{html}");
    assert!(html.contains("7/10"), "missing score in {html}");
    assert!(html.contains("Impulse and Momentum"), "missing topic in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn report_view_without_submission() {
    let mut harness = setup_view_harness(ViewKind::Report, Some("Ada")).await;
    harness.rebuild();
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains("No session has been submitted yet."), "{html}");
}
