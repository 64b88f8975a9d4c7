use dioxus::prelude::*;
use services::QuizController;

use crate::audio::EvalAudio;
use crate::context::AppContext;
use crate::driver::{QuizIntent, QuizTiming, run_quiz};
use crate::renderer::SignalRenderer;
use crate::views::{QuizModal, RosterGrid};
use crate::vm::BoardVm;

#[component]
pub fn BoardView() -> Element {
    let ctx = use_context::<AppContext>();
    let board = use_signal(BoardVm::default);

    let quiz = use_coroutine(move |intents: UnboundedReceiver<QuizIntent>| {
        let quiz_loop = ctx.quiz_loop();
        async move {
            let controller =
                QuizController::new((*quiz_loop).clone(), SignalRenderer::new(board), EvalAudio);
            run_quiz(controller, intents, QuizTiming::default()).await;
        }
    });

    let snapshot = board.read().clone();

    rsx! {
        div { class: "page",
            h1 { class: "title", "اختبار جدول الضرب" }
            p { class: "subtitle", "اختر رقمك لبدء الاختبار" }
            RosterGrid {
                cells: snapshot.roster,
                on_select: move |participant| quiz.send(QuizIntent::Select(participant)),
            }
            {snapshot.modal.map(|modal| rsx! {
                QuizModal {
                    modal,
                    on_choose: move |value| quiz.send(QuizIntent::Choose(value)),
                    on_close: move |()| quiz.send(QuizIntent::Close),
                }
            })}
        }
    }
}
