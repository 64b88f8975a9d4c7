//! Collaborators the quiz drives but does not own: rendering and audio.

use quiz_core::model::{ChoiceSet, ParticipantId, Question, ScoreBand};
use thiserror::Error;

use crate::sessions::{AnswerOutcome, RosterEntry, SessionProgress};

/// Display surface for the roster and the quiz modal.
pub trait QuizRenderer {
    fn show_roster(&mut self, entries: &[RosterEntry]);
    fn mark_completed(&mut self, participant: ParticipantId);
    fn open_modal(&mut self, participant: ParticipantId);
    fn close_modal(&mut self);
    fn show_question(&mut self, question: &Question, choices: &ChoiceSet);
    fn show_progress(&mut self, progress: &SessionProgress);
    fn show_score(&mut self, score: u32, total: usize);
    /// Highlight the picked option and lock the remaining ones.
    fn mark_choice(&mut self, outcome: &AnswerOutcome);
    fn show_result(&mut self, score: u32, total: usize, band: ScoreBand);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    Correct,
    Incorrect,
}

impl Cue {
    #[must_use]
    pub fn for_answer(is_correct: bool) -> Self {
        if is_correct { Self::Correct } else { Self::Incorrect }
    }
}

#[derive(Debug, Error)]
#[error("audio playback failed: {0}")]
pub struct AudioError(pub String);

/// Plays feedback cues. Failures are reported but never interrupt the quiz.
pub trait AudioPlayer {
    /// # Errors
    ///
    /// Returns `AudioError` when the cue could not be played.
    fn play(&self, cue: Cue) -> Result<(), AudioError>;
}

/// Audio player that plays nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentAudio;

impl AudioPlayer for SilentAudio {
    fn play(&self, _cue: Cue) -> Result<(), AudioError> {
        Ok(())
    }
}
