use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use quiz_core::time::fixed_clock;
use services::{InMemoryQuestionRepository, QuestionRepository, QuizIntent, QuizService};

use crate::context::{UiApp, build_app_context};
use crate::routes::Footer;
use crate::views::QuizView;
use crate::views::quiz::QuizTestHandles;
use crate::vm::QuizVm;

struct TestApp {
    quiz_service: Arc<QuizService>,
}

impl UiApp for TestApp {
    fn title(&self) -> String {
        "Test Quiz".to_string()
    }

    fn quiz_service(&self) -> Arc<QuizService> {
        Arc::clone(&self.quiz_service)
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Quiz,
    Footer,
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

#[component]
fn ViewHarnessRoot(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.handles.clone());
    match props.view {
        ViewKind::Quiz => rsx! { QuizView {} },
        ViewKind::Footer => rsx! { Footer {} },
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

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }

    /// Send an intent through the view's own dispatcher, then re-render.
    pub fn dispatch(&mut self, intent: QuizIntent) {
        let dispatch = self.handles.dispatch();
        self.dom.in_runtime(|| dispatch.call(intent));
        drive_dom(&mut self.dom);
    }

    pub fn with_vm<R>(&self, f: impl FnOnce(&QuizVm) -> R) -> R {
        let vm = self.handles.vm();
        self.dom.in_runtime(|| f(&vm.read()))
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_view_harness(view: ViewKind) -> ViewHarness {
    let repo = InMemoryQuestionRepository::sample().expect("sample bank");
    setup_view_harness_with_repo(view, Arc::new(repo))
}

pub fn setup_view_harness_with_repo(
    view: ViewKind,
    repo: Arc<dyn QuestionRepository>,
) -> ViewHarness {
    let quiz_service = Arc::new(QuizService::new(fixed_clock(), repo));
    let handles = QuizTestHandles::default();
    let app = Arc::new(TestApp { quiz_service });

    let dom = VirtualDom::new_with_props(
        ViewHarnessRoot,
        ViewHarnessProps {
            app,
            view,
            handles: handles.clone(),
        },
    );

    ViewHarness { dom, handles }
}
