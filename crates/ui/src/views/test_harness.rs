use std::cell::Cell;
use std::rc::Rc;
use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use medico_core::model::QuestionBank;
use medico_core::time::fixed_clock;
use services::{Action, AppServices, AppState, InboxNotifier, Notifier};
use storage::repository::Storage;

use crate::context::{UiApp, build_app_context, use_effect_runner};
use crate::layout::Shell;

#[derive(Clone)]
struct TestApp {
    services: Arc<AppServices>,
    inbox: Arc<InboxNotifier>,
    state: AppState,
}

impl UiApp for TestApp {
    fn services(&self) -> Arc<AppServices> {
        Arc::clone(&self.services)
    }

    fn inbox(&self) -> Arc<InboxNotifier> {
        Arc::clone(&self.inbox)
    }

    fn initial_state(&self) -> AppState {
        self.state.clone()
    }
}

#[derive(Props, Clone)]
struct ShellHarnessProps {
    app: Arc<TestApp>,
    mounted_state: Rc<Cell<Option<Signal<AppState>>>>,
}

impl PartialEq for ShellHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ShellHarnessProps {}

#[component]
fn ShellHarness(props: ShellHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    let ctx = use_context_provider(|| build_app_context(&app));
    let state = use_context_provider(|| Signal::new(ctx.initial_state()));
    use_effect_runner();
    props.mounted_state.set(Some(state));
    rsx! { Shell {} }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub storage: Storage,
    pub inbox: Arc<InboxNotifier>,
    services: Arc<AppServices>,
    mounted_state: Rc<Cell<Option<Signal<AppState>>>>,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }

    /// Apply `action` to the mounted state signal the way `use_dispatch`
    /// does, run its effects, then let the dom re-render.
    pub async fn dispatch(&mut self, action: Action) {
        let mut state = self.mounted_state.get().expect("rebuild before dispatch");
        let services = Arc::clone(&self.services);
        let effects = self
            .dom
            .in_runtime(|| services.dispatch(&mut state.write(), action));
        services.run_effects(effects).await.expect("run effects");
        drive_dom(&mut self.dom);
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

/// Run `actions` through the reducer (executing their effects) on a fixed
/// clock with in-memory storage, then mount the shell on the result.
pub async fn setup_view_harness(actions: Vec<Action>) -> ViewHarness {
    let storage = Storage::in_memory();
    let inbox = Arc::new(InboxNotifier::new(true));
    inbox.request_permission().await;
    let services = Arc::new(AppServices::new(
        fixed_clock(),
        storage.clone(),
        Arc::clone(&inbox) as Arc<dyn Notifier>,
    ));

    let mut state = AppState::new(Arc::new(QuestionBank::builtin()));
    for action in actions {
        let effects = services.dispatch(&mut state, action);
        services.run_effects(effects).await.expect("run effects");
    }

    let app = Arc::new(TestApp {
        services: Arc::clone(&services),
        inbox: Arc::clone(&inbox),
        state,
    });
    let mounted_state = Rc::new(Cell::new(None));
    let dom = VirtualDom::new_with_props(
        ShellHarness,
        ShellHarnessProps {
            app,
            mounted_state: Rc::clone(&mounted_state),
        },
    );

    ViewHarness {
        dom,
        storage,
        inbox,
        services,
        mounted_state,
    }
}

pub fn login() -> Action {
    Action::Login {
        email: medico_core::auth::DEFAULT_EMAIL.to_string(),
        password: medico_core::auth::DEFAULT_PASSWORD.to_string(),
    }
}
