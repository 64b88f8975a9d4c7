use dioxus::prelude::*;
use quiz_core::model::{ChoiceSet, ParticipantId, Question, ScoreBand};
use services::{AnswerOutcome, QuizRenderer, RosterEntry, SessionProgress};

use crate::vm::BoardVm;

/// Renders into a board signal so the view re-renders on every change.
#[derive(Clone, Copy)]
pub struct SignalRenderer {
    board: Signal<BoardVm>,
}

impl SignalRenderer {
    #[must_use]
    pub fn new(board: Signal<BoardVm>) -> Self {
        Self { board }
    }
}

impl QuizRenderer for SignalRenderer {
    fn show_roster(&mut self, entries: &[RosterEntry]) {
        self.board.write().show_roster(entries);
    }

    fn mark_completed(&mut self, participant: ParticipantId) {
        self.board.write().mark_completed(participant);
    }

    fn open_modal(&mut self, participant: ParticipantId) {
        self.board.write().open_modal(participant);
    }

    fn close_modal(&mut self) {
        self.board.write().close_modal();
    }

    fn show_question(&mut self, question: &Question, choices: &ChoiceSet) {
        self.board.write().show_question(question, choices);
    }

    fn show_progress(&mut self, progress: &SessionProgress) {
        self.board.write().show_progress(progress);
    }

    fn show_score(&mut self, score: u32, total: usize) {
        self.board.write().show_score(score, total);
    }

    fn mark_choice(&mut self, outcome: &AnswerOutcome) {
        self.board.write().mark_choice(outcome);
    }

    fn show_result(&mut self, score: u32, total: usize, band: ScoreBand) {
        self.board.write().show_result(score, total, band);
    }
}
