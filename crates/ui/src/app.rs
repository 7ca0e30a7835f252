use dioxus::prelude::*;

use crate::context::{AppContext, use_effect_runner};
use crate::layout::{APP_TITLE, Shell};

#[component]
pub fn App() -> Element {
    let ctx = use_context::<AppContext>();
    use_context_provider(|| Signal::new(ctx.initial_state()));
    use_effect_runner();

    rsx! {
        document::Stylesheet { href: asset!("/assets/style.css") }

        document::Title { "{APP_TITLE}" }

        // A single root container for global layout CSS hooks.
        div { class: "app-root",
            ErrorBoundary {
                handle_error: |errors: ErrorContext| rsx! {
                    div { class: "fatal",
                        h1 { "Something went wrong" }
                        pre { "{errors:?}" }
                    }
                },
                Shell {}
            }
        }
    }
}
