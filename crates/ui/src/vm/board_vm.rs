use quiz_core::model::{ChoiceSet, ParticipantId, Question, ScoreBand};
use quiz_core::numerals::to_local_digits;
use services::{AnswerOutcome, QuizRenderer, RosterEntry, SessionProgress};

use super::labels::{
    feedback_text, progress_line, question_text, result_text, score_line, status_icon,
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RosterCellVm {
    pub participant: ParticipantId,
    pub label: String,
    pub completed: bool,
}

impl RosterCellVm {
    #[must_use]
    pub fn new(participant: ParticipantId, completed: bool) -> Self {
        Self {
            participant,
            label: to_local_digits(participant),
            completed,
        }
    }

    #[must_use]
    pub fn icon(&self) -> &'static str {
        status_icon(self.completed)
    }

    #[must_use]
    pub fn class(&self) -> &'static str {
        if self.completed {
            "student-card completed"
        } else {
            "student-card"
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OptionState {
    Open,
    /// Another option was picked.
    Locked,
    Correct,
    Wrong,
}

impl OptionState {
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Open | Self::Locked => "choice-btn",
            Self::Correct => "choice-btn correct",
            Self::Wrong => "choice-btn wrong",
        }
    }

    #[must_use]
    pub fn is_enabled(self) -> bool {
        self == Self::Open
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionVm {
    pub value: u32,
    pub label: String,
    pub state: OptionState,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FeedbackVm {
    pub text: &'static str,
    pub is_correct: bool,
}

impl FeedbackVm {
    #[must_use]
    pub fn class(self) -> &'static str {
        if self.is_correct { "ok" } else { "bad" }
    }
}

/// Contents of the quiz modal.
///
/// `headline` holds the question while the quiz runs and the result message
/// once it is over.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModalVm {
    pub participant: ParticipantId,
    pub headline: String,
    pub options: Vec<OptionVm>,
    pub score_line: String,
    pub progress_line: String,
    pub feedback: Option<FeedbackVm>,
    pub finished: bool,
}

impl ModalVm {
    fn opened_for(participant: ParticipantId) -> Self {
        Self {
            participant,
            headline: String::new(),
            options: Vec::new(),
            score_line: score_line(0),
            progress_line: String::new(),
            feedback: None,
            finished: false,
        }
    }
}

/// Everything the board shows: the roster grid and, while a quiz runs, the modal.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BoardVm {
    pub roster: Vec<RosterCellVm>,
    pub modal: Option<ModalVm>,
}

impl BoardVm {
    #[must_use]
    pub fn is_modal_open(&self) -> bool {
        self.modal.is_some()
    }

    fn modal_mut(&mut self) -> Option<&mut ModalVm> {
        self.modal.as_mut()
    }
}

impl QuizRenderer for BoardVm {
    fn show_roster(&mut self, entries: &[RosterEntry]) {
        self.roster = entries
            .iter()
            .map(|entry| RosterCellVm::new(entry.participant, entry.completed))
            .collect();
    }

    fn mark_completed(&mut self, participant: ParticipantId) {
        if let Some(cell) = self
            .roster
            .iter_mut()
            .find(|cell| cell.participant == participant)
        {
            cell.completed = true;
        }
    }

    fn open_modal(&mut self, participant: ParticipantId) {
        self.modal = Some(ModalVm::opened_for(participant));
    }

    fn close_modal(&mut self) {
        self.modal = None;
    }

    fn show_question(&mut self, question: &Question, choices: &ChoiceSet) {
        let Some(modal) = self.modal_mut() else {
            return;
        };
        modal.headline = question_text(question);
        modal.options = choices
            .iter()
            .map(|value| OptionVm {
                value,
                label: to_local_digits(value),
                state: OptionState::Open,
            })
            .collect();
        modal.feedback = None;
    }

    fn show_progress(&mut self, progress: &SessionProgress) {
        if let Some(modal) = self.modal_mut() {
            modal.progress_line = progress_line(progress.position, progress.total);
        }
    }

    fn show_score(&mut self, score: u32, _total: usize) {
        if let Some(modal) = self.modal_mut() {
            modal.score_line = score_line(score);
        }
    }

    fn mark_choice(&mut self, outcome: &AnswerOutcome) {
        let Some(modal) = self.modal_mut() else {
            return;
        };
        for option in &mut modal.options {
            option.state = if option.value != outcome.selected {
                OptionState::Locked
            } else if outcome.is_correct {
                OptionState::Correct
            } else {
                OptionState::Wrong
            };
        }
        modal.feedback = Some(FeedbackVm {
            text: feedback_text(outcome.is_correct),
            is_correct: outcome.is_correct,
        });
    }

    fn show_result(&mut self, score: u32, total: usize, band: ScoreBand) {
        let Some(modal) = self.modal_mut() else {
            return;
        };
        modal.headline = result_text(score, total, band);
        modal.options.clear();
        modal.feedback = None;
        modal.finished = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome(selected: u32, correct: u32) -> AnswerOutcome {
        AnswerOutcome {
            index: 0,
            selected,
            correct,
            is_correct: selected == correct,
            score: u32::from(selected == correct),
        }
    }

    fn board_with_question() -> BoardVm {
        let mut board = BoardVm::default();
        board.open_modal(ParticipantId::new(1));
        let question = Question::new(4, 7).unwrap();
        let choices = quiz_core::model::make_choices(
            &question,
            &mut quiz_core::rng::Lcg::new(3_414_953_164),
            0.7,
        );
        board.show_question(&question, &choices);
        board
    }

    #[test]
    fn roster_cells_show_localized_numbers_and_icons() {
        let mut board = BoardVm::default();
        board.show_roster(&[
            RosterEntry {
                participant: ParticipantId::new(12),
                completed: true,
            },
            RosterEntry {
                participant: ParticipantId::new(13),
                completed: false,
            },
        ]);
        assert_eq!(board.roster[0].label, "١٢");
        assert_eq!(board.roster[0].icon(), "✅");
        assert_eq!(board.roster[1].icon(), "🔒");

        board.mark_completed(ParticipantId::new(13));
        assert!(board.roster[1].completed);
    }

    #[test]
    fn question_renders_headline_and_open_options() {
        let board = board_with_question();
        let modal = board.modal.as_ref().unwrap();
        assert_eq!(modal.headline, "٤ × ٧");
        assert_eq!(modal.score_line, "الدرجة: ٠/٥");
        let labels: Vec<_> = modal.options.iter().map(|o| o.label.as_str()).collect();
        assert_eq!(labels, vec!["٣٥", "٣٢", "٢٨", "٢٤"]);
        assert!(modal.options.iter().all(|o| o.state.is_enabled()));
    }

    #[test]
    fn wrong_pick_locks_the_rest_and_shows_feedback() {
        let mut board = board_with_question();
        board.mark_choice(&outcome(32, 28));
        let modal = board.modal.as_ref().unwrap();
        let states: Vec<_> = modal.options.iter().map(|o| o.state).collect();
        assert_eq!(
            states,
            vec![
                OptionState::Locked,
                OptionState::Wrong,
                OptionState::Locked,
                OptionState::Locked
            ]
        );
        assert_eq!(modal.feedback.map(|f| f.text), Some("للأسف، إجابة غير صحيحة."));
    }

    #[test]
    fn result_replaces_question_and_clears_options() {
        let mut board = board_with_question();
        board.mark_choice(&outcome(28, 28));
        board.show_result(4, 5, ScoreBand::Great);
        let modal = board.modal.as_ref().unwrap();
        assert!(modal.finished);
        assert!(modal.options.is_empty());
        assert!(modal.feedback.is_none());
        assert_eq!(modal.headline, "رائع! نتيجتك هي ٤/٥");

        board.close_modal();
        assert!(!board.is_modal_open());
    }

    #[test]
    fn updates_without_an_open_modal_are_dropped() {
        let mut board = BoardVm::default();
        board.show_score(3, 5);
        board.mark_choice(&outcome(1, 2));
        assert_eq!(board, BoardVm::default());
    }
}
