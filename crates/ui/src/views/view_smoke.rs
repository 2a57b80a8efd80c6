use services::display::DEFAULT_QUESTION_NOTE;
use services::preferences_service::PREFERENCES_KEY;
use services::solved_store::SOLVED_KEY;

use super::test_harness::{
    TWO_QUESTIONS, ViewKind, create_interview, mount, sample_catalog, test_services,
};

#[tokio::test(flavor = "current_thread")]
async fn questions_view_smoke_renders_first_page() {
    let (_storage, services) = test_services(sample_catalog(12), &[]);
    let mut harness = mount(ViewKind::Questions, services);

    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Question 10"), "missing row in {html}");
    assert!(!html.contains("Question 11"), "second page leaked into {html}");
    assert!(html.contains("Page 1 of 2"), "missing pager in {html}");
    assert!(html.contains("Showing 1-10 of 12"), "missing range in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn questions_view_smoke_counts_persisted_solved_items() {
    let (storage, services) = test_services(sample_catalog(12), &[]);
    storage
        .kv
        .set(SOLVED_KEY, r#"{"1":true,"5":true,"6":false}"#)
        .await
        .expect("seed solved map");
    let mut harness = mount(ViewKind::Questions, services);

    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("2 / 12"), "missing overall count in {html}");
    assert!(html.contains("1 / 4"), "missing easy count in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn questions_view_smoke_renders_facets() {
    let (_storage, services) = test_services(sample_catalog(12), &[]);
    let mut harness = mount(ViewKind::Questions, services);

    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("google (8)"), "missing company facet in {html}");
    assert!(html.contains("amazon (4)"), "missing company facet in {html}");
    assert!(html.contains("Graph"), "missing topic chip in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn new_interview_view_smoke_lists_previous_interviews() {
    let (_storage, services) = test_services(Vec::new(), &[TWO_QUESTIONS]);
    create_interview(&services).await;
    let mut harness = mount(ViewKind::NewInterview, services);

    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("Create a new mock interview"), "missing title in {html}");
    assert!(html.contains("Backend Engineer"), "missing interview card in {html}");
    assert!(html.contains("4 years of experience, 2 questions"), "missing subtitle in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn intro_view_smoke_renders_details_and_banner() {
    let (_storage, services) = test_services(Vec::new(), &[TWO_QUESTIONS]);
    let interview = create_interview(&services).await;
    let mut harness = mount(ViewKind::Intro(interview.id().to_string()), services);

    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("Rust, PostgreSQL"), "missing description in {html}");
    assert!(html.contains("Information"), "missing banner in {html}");
    assert!(html.contains("Start interview"), "missing start link in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn run_view_smoke_starts_at_first_question() {
    let (_storage, services) = test_services(Vec::new(), &[TWO_QUESTIONS]);
    let interview = create_interview(&services).await;
    let mut harness = mount(ViewKind::Run(interview.id().to_string()), services);

    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("What is ownership?"), "missing question in {html}");
    assert!(!html.contains("Explain lifetimes."), "second question shown in {html}");
    assert!(html.contains("Question #2"), "missing tab in {html}");
    assert!(html.contains(DEFAULT_QUESTION_NOTE), "missing note in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn run_view_smoke_reports_unknown_interview() {
    let (_storage, services) = test_services(Vec::new(), &[]);
    let mut harness = mount(ViewKind::Run("not-an-id".into()), services);

    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("Nothing found here."), "missing not-found in {html}");
    assert!(html.contains("Back to interviews"), "missing back link in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn feedback_view_smoke_renders_average_and_answers() {
    let (_storage, services) = test_services(
        Vec::new(),
        &[
            TWO_QUESTIONS,
            r#"{"rating": 7, "feedback": "Mention **borrowing**."}"#,
            r#"{"rating": "8/10", "feedback": "Solid."}"#,
        ],
    );
    let interview = create_interview(&services).await;
    let interviews = services.interviews();
    interviews
        .submit_answer(&interview, 0, "Values have exactly one owner at a time.")
        .await
        .expect("first answer");
    interviews
        .submit_answer(&interview, 1, "Lifetimes describe how long borrows are valid.")
        .await
        .expect("second answer");
    let mut harness = mount(ViewKind::Feedback(interview.id().to_string()), services);

    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();
    assert!(
        html.contains("Your overall interview rating: 8/10"),
        "missing average in {html}"
    );
    assert!(html.contains("Rating: 7/10"), "missing item rating in {html}");
    assert!(html.contains("<strong>borrowing</strong>"), "missing markdown in {html}");
    assert!(html.contains("Each value has a single owner."), "missing reference in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn feedback_view_smoke_handles_interview_without_answers() {
    let (_storage, services) = test_services(Vec::new(), &[TWO_QUESTIONS]);
    let interview = create_interview(&services).await;
    let mut harness = mount(ViewKind::Feedback(interview.id().to_string()), services);

    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("No answers recorded"), "missing empty state in {html}");
    assert!(html.contains("Go home"), "missing home link in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn settings_view_smoke_loads_saved_preferences() {
    let (storage, services) = test_services(Vec::new(), &[]);
    storage
        .kv
        .set(PREFERENCES_KEY, r#"{"api_model":"gpt-test","language":"German"}"#)
        .await
        .expect("seed preferences");
    let mut harness = mount(ViewKind::Settings, services);

    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("gpt-test"), "missing model in {html}");
    assert!(html.contains("German"), "missing language in {html}");
    assert!(html.contains("Preferred language"), "missing field label in {html}");
}
