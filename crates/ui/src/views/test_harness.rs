use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::Router;
use quiz_core::{QuestionCatalog, QuizSession};

use crate::context::{UiApp, build_app_context};
use crate::routes::Route;
use crate::views::QuizView;
use crate::views::quiz::QuizTestHandles;
use crate::vm::QuizIntent;

pub const TEST_TITLE: &str = "Riddle Master";

struct TestApp {
    catalog: Arc<QuestionCatalog>,
}

impl UiApp for TestApp {
    fn app_title(&self) -> String {
        TEST_TITLE.to_string()
    }

    fn catalog(&self) -> Arc<QuestionCatalog> {
        Arc::clone(&self.catalog)
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    /// The quiz view on its own, with dispatch handles registered.
    Quiz,
    /// The full router with its layout around the quiz.
    Routed,
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
    handles: QuizTestHandles,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn ViewRootHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.handles.clone());
    match props.view {
        ViewKind::Quiz => rsx! { QuizView {} },
        ViewKind::Routed => rsx! { Router::<Route> {} },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    handles: QuizTestHandles,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    /// Send an intent through the view's own dispatcher and re-render.
    pub fn dispatch(&mut self, intent: QuizIntent) {
        let dispatch = self.handles.dispatch();
        self.dom.in_runtime(|| dispatch.call(intent));
        drive_dom(&mut self.dom);
    }

    /// Press a key on the quiz root; returns whether it mapped to an intent.
    pub fn press_key(&mut self, key: &str) -> bool {
        let handle_key = self.handles.key();
        let handled = self.dom.in_runtime(|| handle_key.call(key.to_string()));
        drive_dom(&mut self.dom);
        handled
    }

    pub fn session(&self) -> QuizSession {
        let session = self.handles.session();
        self.dom.in_runtime(|| session.read().clone())
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_view_harness(view: ViewKind) -> ViewHarness {
    let catalog = QuestionCatalog::riddles().expect("bundled riddles");
    setup_view_harness_with_catalog(view, catalog)
}

pub fn setup_view_harness_with_catalog(view: ViewKind, catalog: QuestionCatalog) -> ViewHarness {
    let handles = QuizTestHandles::default();
    let app = Arc::new(TestApp {
        catalog: Arc::new(catalog),
    });

    let dom = VirtualDom::new_with_props(
        ViewRootHarness,
        ViewHarnessProps {
            app,
            view,
            handles: handles.clone(),
        },
    );

    let mut harness = ViewHarness { dom, handles };
    harness.rebuild();
    harness
}
