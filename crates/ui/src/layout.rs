use dioxus::prelude::*;
use medico_core::model::Section;
use services::Action;

use crate::context::{use_app_state, use_dispatch};
use crate::views::{
    AnalysisView, CalendarView, CoursesView, DashboardView, FeedbackView, LoginView, NotesView,
    NotificationsView, ProfileView, SignupView, TestsView, VideoRecordingsView,
};

pub const APP_TITLE: &str = "Medico Learning Platform";

/// Header, the visible section and the footer.
#[component]
pub fn Shell() -> Element {
    let state = use_app_state();
    let (logged_in, visible) = {
        let state = state.read();
        (state.session().is_logged_in(), state.session().visible())
    };

    rsx! {
        div { class: "shell",
            header { class: "app-header",
                h1 { "{APP_TITLE}" }
                if logged_in {
                    NavBar { active: visible }
                }
            }
            main { class: "content",
                SectionView { section: visible }
            }
            footer { class: "app-footer",
                p { "© 2024 Medico Learning Platform. All rights reserved." }
            }
        }
    }
}

#[component]
fn NavBar(active: Section) -> Element {
    let dispatch = use_dispatch();
    rsx! {
        nav { class: "nav",
            ul {
                for section in Section::NAVIGATION {
                    li { key: "{section}",
                        a {
                            class: if section == active { "nav-link active" } else { "nav-link" },
                            href: "#{section}",
                            onclick: move |evt: MouseEvent| {
                                evt.prevent_default();
                                dispatch.call(Action::Navigate(section));
                            },
                            "{section.label()}"
                        }
                    }
                }
                li {
                    button {
                        class: "link-button",
                        onclick: move |_| dispatch.call(Action::Logout),
                        "Logout"
                    }
                }
            }
        }
    }
}

/// Mount the component for `section`.
#[component]
pub fn SectionView(section: Section) -> Element {
    match section {
        Section::Login => rsx! { LoginView {} },
        Section::Signup => rsx! { SignupView {} },
        Section::Dashboard => rsx! { DashboardView {} },
        Section::Courses => rsx! { CoursesView {} },
        Section::Tests => rsx! { TestsView {} },
        Section::Calendar => rsx! { CalendarView {} },
        Section::Analysis => rsx! { AnalysisView {} },
        Section::Notifications => rsx! { NotificationsView {} },
        Section::Notes => rsx! { NotesView {} },
        Section::Profile => rsx! { ProfileView {} },
        Section::VideoRecordings => rsx! { VideoRecordingsView {} },
        Section::Feedback => rsx! { FeedbackView {} },
    }
}
