use dioxus::prelude::*;

use crate::vm::ModalVm;

#[component]
pub fn QuizModal(modal: ModalVm, on_choose: EventHandler<u32>, on_close: EventHandler<()>) -> Element {
    let options = modal.options.clone();
    let feedback = modal.feedback;

    rsx! {
        div { class: "modal", role: "dialog", "aria-hidden": "false",
            div { class: "modal-content",
                button {
                    class: "close-btn",
                    id: "closeModal",
                    aria_label: "إغلاق",
                    onclick: move |_| on_close.call(()),
                    "✕"
                }
                div { class: "status-row",
                    span { id: "score", "{modal.score_line}" }
                    span { id: "progress", "{modal.progress_line}" }
                }
                h2 { id: "questionText", "{modal.headline}" }
                div { class: "choices", id: "choices",
                    for option in options {
                        button {
                            key: "{option.value}",
                            class: option.state.class(),
                            disabled: !option.state.is_enabled(),
                            onclick: move |_| on_choose.call(option.value),
                            "{option.label}"
                        }
                    }
                }
                div { id: "feedback", class: "feedback",
                    {feedback.map(|feedback| rsx! {
                        span { class: feedback.class(), {feedback.text} }
                    })}
                }
            }
        }
    }
}
