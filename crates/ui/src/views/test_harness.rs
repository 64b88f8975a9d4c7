use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use services::{ChoiceJitter, QuizLoopService};
use storage::repository::{InMemoryRepository, Storage};

use crate::context::{UiApp, build_app_context};
use crate::views::BoardView;

#[derive(Clone)]
struct TestApp {
    quiz_loop: Arc<QuizLoopService>,
}

impl UiApp for TestApp {
    fn quiz_loop(&self) -> Arc<QuizLoopService> {
        Arc::clone(&self.quiz_loop)
    }
}

#[derive(Props, Clone)]
struct BoardHarnessProps {
    app: Arc<TestApp>,
}

impl PartialEq for BoardHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn BoardHarness(props: BoardHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    rsx! { BoardView {} }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub storage: Storage,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
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

/// Board wired to `repo`, with reproducible choices.
pub fn setup_board_harness(repo: InMemoryRepository) -> ViewHarness {
    let completions = Arc::new(repo);
    let storage = Storage {
        completions: completions.clone(),
    };
    let quiz_loop = QuizLoopService::new(completions).with_choice_jitter(ChoiceJitter::Seeded);
    let app = Arc::new(TestApp {
        quiz_loop: Arc::new(quiz_loop),
    });
    let dom = VirtualDom::new_with_props(BoardHarness, BoardHarnessProps { app });
    ViewHarness { dom, storage }
}

/// Render a single component with fixed props.
pub fn render_component<P: Clone + 'static>(component: fn(P) -> Element, props: P) -> String {
    let mut dom = VirtualDom::new_with_props(component, props);
    dom.rebuild_in_place();
    drive_dom(&mut dom);
    dioxus_ssr::render(&dom)
}
