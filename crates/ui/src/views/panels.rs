use dioxus::prelude::*;

use crate::context::{AppContext, use_app_state};

pub const COURSES: [(&str, &str); 4] = [
    ("Anatomy", "Comprehensive video lectures and notes."),
    ("Physiology", "Detailed explanations with quizzes."),
    ("Pathology", "Master key concepts with interactive modules."),
    ("Pharmacology", "Learn drug mechanisms with interactive diagrams."),
];

const RECORDINGS: [(&str, &[&str]); 4] = [
    (
        "Anatomy",
        &["Upper limb dissection walkthrough", "Surface anatomy of the thorax"],
    ),
    (
        "Physiology",
        &["Cardiac cycle explained", "Mechanics of breathing"],
    ),
    (
        "Pathology",
        &["Cell injury and necrosis", "Acute versus chronic inflammation"],
    ),
    (
        "Pharmacology",
        &["Autonomic drugs overview", "Choosing an antibiotic"],
    ),
];

#[component]
pub fn DashboardView() -> Element {
    let ctx = use_context::<AppContext>();
    let state = use_app_state();
    let today = ctx.services().clock().today();
    let (upcoming, completed) = {
        let state = state.read();
        let upcoming = state
            .reminders()
            .reminders()
            .iter()
            .filter(|reminder| reminder.date >= today)
            .count();
        (upcoming, state.leaderboard().len())
    };

    rsx! {
        section { class: "page", id: "dashboard",
            h2 { "Dashboard" }
            p {
                "Welcome to your personalized dashboard. Access your learning materials, track progress, and stay updated."
            }
            ul {
                li { "Track your daily progress" }
                li { "View upcoming exams and deadlines" }
                li { "Access quick links to your courses and tests" }
            }
            div { class: "stat-row",
                div { class: "stat", "Upcoming reminders: {upcoming}" }
                div { class: "stat", "Quizzes completed: {completed}" }
            }
        }
    }
}

#[component]
pub fn CoursesView() -> Element {
    rsx! {
        section { class: "page", id: "courses",
            h2 { "Courses" }
            div { class: "course-grid",
                for (name, description) in COURSES {
                    div { key: "{name}", class: "course-card",
                        h3 { "{name}" }
                        p { "{description}" }
                    }
                }
            }
        }
    }
}

#[component]
pub fn NotesView() -> Element {
    rsx! {
        section { class: "page", id: "notes",
            h2 { "Notes" }
            p { "Access your saved notes and organize your learning resources." }
            ul {
                li { "View subject-wise notes" }
                li { "Add new notes with rich formatting options" }
                li { "Organize notes with tags and folders" }
            }
        }
    }
}

#[component]
pub fn VideoRecordingsView() -> Element {
    rsx! {
        section { class: "page", id: "video-recordings",
            h2 { "Video Recordings" }
            p { "Watch recorded lectures for each course at your own pace." }
            for (course, videos) in RECORDINGS {
                div { key: "{course}", class: "recording-group",
                    h3 { "{course}" }
                    ul {
                        for title in videos.iter() {
                            li { "{title}" }
                        }
                    }
                }
            }
        }
    }
}
