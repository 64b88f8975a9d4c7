use dioxus::prelude::*;
use quiz_core::model::ParticipantId;

use crate::vm::RosterCellVm;

#[component]
pub fn RosterGrid(cells: Vec<RosterCellVm>, on_select: EventHandler<ParticipantId>) -> Element {
    rsx! {
        div { class: "grid", id: "grid",
            for cell in cells {
                button {
                    key: "{cell.participant}",
                    class: cell.class(),
                    "data-student-id": "{cell.participant}",
                    onclick: move |_| on_select.call(cell.participant),
                    span { class: "number", "{cell.label}" }
                    span { class: "status-icon", {cell.icon()} }
                }
            }
        }
    }
}
