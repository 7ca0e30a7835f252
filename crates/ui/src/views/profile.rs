use dioxus::prelude::*;
use services::Action;

use crate::context::{use_app_state, use_dispatch};

#[component]
pub fn ProfileView() -> Element {
    let state = use_app_state();
    let dispatch = use_dispatch();
    let (email, reminders, quizzes) = {
        let state = state.read();
        (
            state
                .session()
                .user()
                .map(|user| user.email().to_string())
                .unwrap_or_default(),
            state.reminders().len(),
            state.leaderboard().len(),
        )
    };

    rsx! {
        section { class: "page", id: "profile",
            h2 { "Profile" }
            dl { class: "profile-details",
                dt { "Email" }
                dd { "{email}" }
                dt { "Saved reminders" }
                dd { "{reminders}" }
                dt { "Quizzes completed" }
                dd { "{quizzes}" }
            }
            button {
                class: "btn btn-secondary",
                onclick: move |_| dispatch.call(Action::Logout),
                "Logout"
            }
        }
    }
}
