use dioxus::prelude::*;

use crate::views::BoardView;

#[component]
pub fn App() -> Element {
    rsx! {
        document::Stylesheet { href: asset!("/assets/style.css") }
        document::Title { "جدول الضرب" }

        div { class: "app-root", dir: "rtl",
            ErrorBoundary {
                handle_error: |errors: ErrorContext| rsx! {
                    div { class: "fatal",
                        h1 { "Something went wrong" }
                        pre { "{errors:?}" }
                    }
                },
                BoardView {}
            }
        }
    }
}
