use medico_core::model::{ReminderDraft, ReminderKind, Section};
use services::Action;
use storage::repository::ReminderRepository;

use super::test_harness::{login, setup_view_harness};

fn reminder(date: &str, time: &str, text: &str, kind: ReminderKind) -> Action {
    Action::EditReminderDraft(ReminderDraft {
        date: date.to_string(),
        time: time.to_string(),
        text: text.to_string(),
        kind,
        ..ReminderDraft::default()
    })
}

#[tokio::test(flavor = "current_thread")]
async fn logged_out_shell_shows_login_without_navigation() {
    let mut harness = setup_view_harness(Vec::new()).await;
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Medico Learning Platform"), "missing header in {html}");
    assert!(html.contains("id=\"login\""), "missing login form in {html}");
    assert!(!html.contains("nav-link"), "unexpected navigation in {html}");
    assert!(html.contains("All rights reserved."), "missing footer in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn private_section_falls_back_to_login_when_logged_out() {
    let mut harness = setup_view_harness(vec![Action::Navigate(Section::Calendar)]).await;
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("id=\"login\""), "missing login form in {html}");
    assert!(!html.contains("id=\"calendar\""), "calendar leaked in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn failed_login_renders_inline_error() {
    let mut harness = setup_view_harness(vec![Action::Login {
        email: "x".to_string(),
        password: "y".to_string(),
    }])
    .await;
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Invalid email or password"), "missing error in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn login_lands_on_dashboard_with_navigation() {
    let mut harness = setup_view_harness(vec![login()]).await;
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("id=\"dashboard\""), "missing dashboard in {html}");
    assert!(html.contains("Video Recordings"), "missing nav entry in {html}");
    assert!(html.contains("Quizzes completed: 0"), "missing stat in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn courses_panel_lists_four_courses() {
    let mut harness =
        setup_view_harness(vec![login(), Action::Navigate(Section::Courses)]).await;
    harness.rebuild();
    let html = harness.render();
    for course in ["Anatomy", "Physiology", "Pathology", "Pharmacology"] {
        assert!(html.contains(course), "missing {course} in {html}");
    }
    assert!(html.contains("Learn drug mechanisms with interactive diagrams."));
}

#[tokio::test(flavor = "current_thread")]
async fn tests_panel_shows_current_question() {
    let mut harness = setup_view_harness(vec![
        login(),
        Action::Navigate(Section::Tests),
        Action::SelectTopic("Anatomy".to_string()),
        Action::SelectSubtopic("General Anatomy".to_string()),
    ])
    .await;
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Question 1 of 2"), "missing progress in {html}");
    assert!(
        html.contains("What is the largest organ of the human body?"),
        "missing prompt in {html}"
    );
    assert!(html.contains("Score: 0"), "missing score in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn finished_quiz_shows_result_and_leaderboard() {
    let mut harness = setup_view_harness(vec![
        login(),
        Action::Navigate(Section::Tests),
        Action::SelectTopic("Anatomy".to_string()),
        Action::SelectSubtopic("General Anatomy".to_string()),
        Action::EditAnswer("skin".to_string()),
        Action::SubmitAnswer,
        Action::EditAnswer(" 206 ".to_string()),
        Action::SubmitAnswer,
    ])
    .await;
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Score: 2 / 2"), "missing score in {html}");
    assert!(html.contains("100.00%"), "missing accuracy in {html}");
    assert!(html.contains("Leaderboard"), "missing leaderboard in {html}");
    assert!(html.contains("General Anatomy"), "missing row in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn review_lists_submitted_answers() {
    let mut harness = setup_view_harness(vec![
        login(),
        Action::Navigate(Section::Tests),
        Action::SelectTopic("Anatomy".to_string()),
        Action::SelectSubtopic("General Anatomy".to_string()),
        Action::EditAnswer("Liver".to_string()),
        Action::SubmitAnswer,
        Action::EditAnswer("206".to_string()),
        Action::SubmitAnswer,
        Action::EnterReview,
    ])
    .await;
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Liver"), "missing given answer in {html}");
    assert!(html.contains("Incorrect"), "missing verdict in {html}");
    assert!(html.contains("Score: 1 / 2"), "missing summary in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn calendar_marks_days_with_reminders() {
    let harness_actions = vec![
        login(),
        Action::Navigate(Section::Calendar),
        reminder("2024-01-04", "", "Test Deadline: Anatomy", ReminderKind::Test),
        Action::AddReminder,
    ];
    let mut harness = setup_view_harness(harness_actions).await;
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("January 2024"), "missing month title in {html}");
    assert!(html.contains("day-marked"), "missing marked day in {html}");
    assert!(html.contains("Test Deadline: Anatomy"), "missing reminder in {html}");

    let saved = harness
        .storage
        .reminders
        .load_reminders()
        .await
        .expect("load reminders");
    assert_eq!(saved.len(), 1);
}

#[tokio::test(flavor = "current_thread")]
async fn notifications_panel_lists_fired_reminders() {
    let mut harness = setup_view_harness(vec![
        login(),
        reminder("2024-01-03", "09:45", "Anatomy lecture", ReminderKind::Lesson),
        Action::AddReminder,
        Action::Navigate(Section::Notifications),
    ])
    .await;
    harness.rebuild();
    let html = harness.render();
    assert_eq!(harness.inbox.notifications().len(), 1);
    assert!(html.contains("Anatomy lecture"), "missing notification in {html}");
    assert!(html.contains("granted"), "missing permission in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn notifications_panel_updates_while_mounted() {
    let mut harness =
        setup_view_harness(vec![login(), Action::Navigate(Section::Notifications)]).await;
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("No reminders have fired yet."), "unexpected inbox in {html}");

    harness
        .dispatch(reminder("2024-01-03", "09:45", "Anatomy lecture", ReminderKind::Lesson))
        .await;
    harness.dispatch(Action::AddReminder).await;

    let html = harness.render();
    assert!(html.contains("id=\"notifications\""), "panel unmounted in {html}");
    assert!(html.contains("Anatomy lecture"), "missing notification in {html}");
    assert!(!html.contains("No reminders have fired yet."), "stale inbox in {html}");
    assert_eq!(harness.inbox.notifications().len(), 1);
}

#[tokio::test(flavor = "current_thread")]
async fn analysis_aggregates_completed_quizzes() {
    let mut harness = setup_view_harness(vec![
        login(),
        Action::Navigate(Section::Tests),
        Action::SelectTopic("Physiology".to_string()),
        Action::SelectSubtopic("Respiratory".to_string()),
        Action::EditAnswer("Diaphragm".to_string()),
        Action::SubmitAnswer,
        Action::SubmitAnswer,
        Action::Navigate(Section::Analysis),
    ])
    .await;
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Performance by topic"), "missing heading in {html}");
    assert!(html.contains("Physiology"), "missing topic in {html}");
    assert!(html.contains("50.00%"), "missing accuracy in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn profile_shows_logged_in_email() {
    let mut harness =
        setup_view_harness(vec![login(), Action::Navigate(Section::Profile)]).await;
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains(medico_core::auth::DEFAULT_EMAIL), "missing email in {html}");
    assert!(html.contains("Logout"), "missing logout in {html}");
}
