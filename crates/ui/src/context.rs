use std::sync::Arc;

use dioxus::prelude::*;
use services::{Action, AppServices, AppState, Effect, InboxNotifier};

pub trait UiApp: Send + Sync {
    fn services(&self) -> Arc<AppServices>;
    fn inbox(&self) -> Arc<InboxNotifier>;

    /// State loaded at startup; the UI takes ownership of a copy.
    fn initial_state(&self) -> AppState;
}

#[derive(Clone)]
pub struct AppContext {
    services: Arc<AppServices>,
    inbox: Arc<InboxNotifier>,
    initial_state: AppState,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            services: app.services(),
            inbox: app.inbox(),
            initial_state: app.initial_state(),
        }
    }

    #[must_use]
    pub fn services(&self) -> Arc<AppServices> {
        Arc::clone(&self.services)
    }

    #[must_use]
    pub fn inbox(&self) -> Arc<InboxNotifier> {
        Arc::clone(&self.inbox)
    }

    #[must_use]
    pub fn initial_state(&self) -> AppState {
        self.initial_state.clone()
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}

/// The shared state signal installed by [`crate::App`].
#[must_use]
pub fn use_app_state() -> Signal<AppState> {
    use_context::<Signal<AppState>>()
}

/// Install the single task that runs effect batches in dispatch order.
///
/// Call once, next to the state signal; [`use_dispatch`] sends to it.
pub fn use_effect_runner() -> Coroutine<Vec<Effect>> {
    let ctx = use_context::<AppContext>();
    use_coroutine(move |batches: UnboundedReceiver<Vec<Effect>>| {
        let services = ctx.services();
        async move { services.run_effect_stream(batches).await }
    })
}

/// Callback that runs an action through the reducer and queues its effects
/// on the effect runner.
///
/// Effect failures are logged; the state change has already happened.
#[must_use]
pub fn use_dispatch() -> Callback<Action> {
    let ctx = use_context::<AppContext>();
    let mut state = use_app_state();
    let runner = use_coroutine_handle::<Vec<Effect>>();
    use_callback(move |action: Action| {
        let effects = ctx.services().dispatch(&mut state.write(), action);
        if !effects.is_empty() {
            tracing::debug!(count = effects.len(), "effects queued");
            runner.send(effects);
        }
    })
}
