use dioxus::prelude::*;
use quiz_core::model::{ParticipantId, Question, make_choices};
use quiz_core::rng::Lcg;
use services::{AnswerOutcome, QuizRenderer, RosterEntry};
use storage::repository::{CompletionRepository, InMemoryRepository};

use super::test_harness::{render_component, setup_board_harness};
use crate::views::{QuizModal, RosterGrid};
use crate::vm::{BoardVm, ModalVm, RosterCellVm};

#[component]
fn RosterFixture(cells: Vec<RosterCellVm>) -> Element {
    rsx! { RosterGrid { cells, on_select: |_| {} } }
}

#[component]
fn ModalFixture(modal: ModalVm) -> Element {
    rsx! { QuizModal { modal, on_choose: |_| {}, on_close: |()| {} } }
}

fn open_board() -> BoardVm {
    let mut board = BoardVm::default();
    board.open_modal(ParticipantId::new(1));
    let question = Question::new(4, 7).unwrap();
    let choices = make_choices(&question, &mut Lcg::new(3_414_953_164), 0.7);
    board.show_question(&question, &choices);
    board
}

#[test]
fn roster_grid_renders_cards_with_status() {
    let cells = vec![
        RosterCellVm::new(ParticipantId::new(1), true),
        RosterCellVm::new(ParticipantId::new(2), false),
    ];
    let html = render_component(RosterFixture, RosterFixtureProps { cells });
    assert!(html.contains("student-card completed"), "missing completed card in {html}");
    assert!(html.contains("data-student-id=\"2\""), "missing id attribute in {html}");
    assert!(html.contains("١"), "missing localized number in {html}");
    assert!(html.contains("✅") && html.contains("🔒"), "missing icons in {html}");
}

#[test]
fn modal_renders_question_and_options() {
    let modal = open_board().modal.unwrap();
    let html = render_component(ModalFixture, ModalFixtureProps { modal });
    assert!(html.contains("٤ × ٧"), "missing question in {html}");
    assert!(html.contains("الدرجة: ٠/٥"), "missing score in {html}");
    for label in ["٣٥", "٣٢", "٢٨", "٢٤"] {
        assert!(html.contains(label), "missing option {label} in {html}");
    }
    assert!(!html.contains("disabled"), "options locked too early in {html}");
}

#[test]
fn answered_modal_locks_options_and_shows_feedback() {
    let mut board = open_board();
    board.mark_choice(&AnswerOutcome {
        index: 0,
        selected: 28,
        correct: 28,
        is_correct: true,
        score: 1,
    });
    board.show_score(1, 5);
    let html = render_component(
        ModalFixture,
        ModalFixtureProps {
            modal: board.modal.unwrap(),
        },
    );
    assert!(html.contains("choice-btn correct"), "missing verdict in {html}");
    assert!(html.contains("disabled"), "options still enabled in {html}");
    assert!(html.contains("أحسنت! إجابة صحيحة."), "missing feedback in {html}");
    assert!(html.contains("الدرجة: ١/٥"), "missing score in {html}");
}

#[test]
fn empty_roster_entries_render_nothing_inside_grid() {
    let mut board = BoardVm::default();
    board.show_roster(&Vec::<RosterEntry>::new());
    let html = render_component(
        RosterFixture,
        RosterFixtureProps {
            cells: board.roster,
        },
    );
    assert!(!html.contains("student-card"), "unexpected card in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn board_view_smoke_loads_roster_from_ledger() {
    let repo = InMemoryRepository::new();
    repo.mark_completed(ParticipantId::new(3)).await.unwrap();

    let mut harness = setup_board_harness(repo);
    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();

    assert_eq!(html.matches("class=\"student-card").count(), 40, "{html}");
    assert_eq!(html.matches("✅").count(), 1, "{html}");
    assert!(html.contains("٤٠"), "missing last seat in {html}");
    assert!(!html.contains("questionText"), "modal open without a pick in {html}");
    assert!(harness.storage.completions.is_completed(ParticipantId::new(3)).await.unwrap());
}
