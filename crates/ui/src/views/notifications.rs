use dioxus::prelude::*;
use services::Notifier;

use crate::context::{AppContext, use_app_state};

#[component]
pub fn NotificationsView() -> Element {
    let ctx = use_context::<AppContext>();
    let state = use_app_state();
    let permission = ctx.inbox().permission().as_str();
    // newest first
    let items: Vec<(String, String, String)> = state
        .read()
        .notifications()
        .iter()
        .rev()
        .map(|n| {
            let at = n.fired_at.format("%Y-%m-%d %H:%M").to_string();
            (n.title.clone(), n.body.clone(), at)
        })
        .collect();

    rsx! {
        section { class: "page", id: "notifications",
            h2 { "Notifications" }
            p { "Stay updated with the latest announcements and reminders." }
            ul {
                li { "Exam schedules and changes" }
                li { "Course updates and new content" }
                li { "Important platform notifications" }
            }

            p { class: "permission", "Notification permission: {permission}" }
            if items.is_empty() {
                p { "No reminders have fired yet." }
            } else {
                ul { class: "inbox",
                    for (title, body, at) in items {
                        li {
                            strong { "{title}" }
                            span { class: "inbox-body", " {body}" }
                            span { class: "inbox-time", " ({at})" }
                        }
                    }
                }
            }
        }
    }
}
