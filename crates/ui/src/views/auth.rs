use dioxus::prelude::*;
use medico_core::model::Section;
use services::Action;

use crate::context::{use_app_state, use_dispatch};

#[component]
pub fn LoginView() -> Element {
    let state = use_app_state();
    let dispatch = use_dispatch();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let error = state.read().errors().login.clone();

    rsx! {
        section { class: "page auth-page", id: "login",
            h2 { "Login" }
            form { class: "auth-form",
                onsubmit: move |evt: FormEvent| {
                    evt.prevent_default();
                    dispatch.call(Action::Login {
                        email: email(),
                        password: password(),
                    });
                },
                label { r#for: "login-email", "Email" }
                input {
                    id: "login-email",
                    r#type: "email",
                    required: true,
                    value: "{email}",
                    oninput: move |evt| email.set(evt.value()),
                }
                label { r#for: "login-password", "Password" }
                input {
                    id: "login-password",
                    r#type: "password",
                    required: true,
                    value: "{password}",
                    oninput: move |evt| password.set(evt.value()),
                }
                if let Some(message) = error {
                    p { class: "form-error", "{message}" }
                }
                button { class: "btn btn-primary", r#type: "submit", "Login" }
            }
            p { class: "auth-switch",
                "Don't have an account? "
                button {
                    class: "link-button",
                    r#type: "button",
                    onclick: move |_| dispatch.call(Action::Navigate(Section::Signup)),
                    "Sign up"
                }
            }
        }
    }
}

#[component]
pub fn SignupView() -> Element {
    let state = use_app_state();
    let dispatch = use_dispatch();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirm = use_signal(String::new);
    let error = state.read().errors().signup.clone();

    rsx! {
        section { class: "page auth-page", id: "signup",
            h2 { "Sign Up" }
            form { class: "auth-form",
                onsubmit: move |evt: FormEvent| {
                    evt.prevent_default();
                    dispatch.call(Action::Signup {
                        email: email(),
                        password: password(),
                        confirm_password: confirm(),
                    });
                },
                label { r#for: "signup-email", "Email" }
                input {
                    id: "signup-email",
                    r#type: "email",
                    required: true,
                    value: "{email}",
                    oninput: move |evt| email.set(evt.value()),
                }
                label { r#for: "signup-password", "Password" }
                input {
                    id: "signup-password",
                    r#type: "password",
                    required: true,
                    value: "{password}",
                    oninput: move |evt| password.set(evt.value()),
                }
                label { r#for: "signup-confirm", "Confirm Password" }
                input {
                    id: "signup-confirm",
                    r#type: "password",
                    required: true,
                    value: "{confirm}",
                    oninput: move |evt| confirm.set(evt.value()),
                }
                if let Some(message) = error {
                    p { class: "form-error", "{message}" }
                }
                button { class: "btn btn-primary", r#type: "submit", "Sign Up" }
            }
            p { class: "auth-switch",
                "Already have an account? "
                button {
                    class: "link-button",
                    r#type: "button",
                    onclick: move |_| dispatch.call(Action::Navigate(Section::Login)),
                    "Login"
                }
            }
        }
    }
}
