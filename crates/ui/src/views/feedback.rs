use dioxus::prelude::*;
use medico_core::model::FeedbackDraft;
use services::Action;

use crate::context::{use_app_state, use_dispatch};

#[component]
pub fn FeedbackView() -> Element {
    let state = use_app_state();
    let dispatch = use_dispatch();
    let mut draft = use_signal(FeedbackDraft::default);
    let mut sent = use_signal(|| false);
    let (error, received) = {
        let state = state.read();
        (state.errors().feedback.clone(), state.feedback().len())
    };

    rsx! {
        section { class: "page", id: "feedback",
            h2 { "Feedback" }
            p { "Tell us what works and what we should improve." }
            if sent() && error.is_none() {
                p { class: "form-success", "Thank you for your feedback!" }
            }
            form { class: "feedback-form",
                onsubmit: move |evt: FormEvent| {
                    evt.prevent_default();
                    let before = state.read().feedback().len();
                    dispatch.call(Action::SubmitFeedback(draft()));
                    if state.read().feedback().len() > before {
                        draft.set(FeedbackDraft::default());
                        sent.set(true);
                    } else {
                        sent.set(false);
                    }
                },
                label { "Name" }
                input {
                    r#type: "text",
                    value: "{draft.read().name}",
                    oninput: move |evt| draft.write().name = evt.value(),
                }
                label { "Email" }
                input {
                    r#type: "email",
                    value: "{draft.read().email}",
                    oninput: move |evt| draft.write().email = evt.value(),
                }
                label { "Message" }
                textarea {
                    value: "{draft.read().message}",
                    oninput: move |evt| draft.write().message = evt.value(),
                }
                if let Some(message) = error {
                    p { class: "form-error", "{message}" }
                }
                button { class: "btn btn-primary", r#type: "submit", "Send Feedback" }
            }
            p { class: "feedback-count", "Messages received this session: {received}" }
        }
    }
}
