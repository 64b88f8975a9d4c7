use quiz_core::model::{
    ChoiceSet, ParticipantId, QUESTIONS_PER_SESSION, Question, QuestionSet, ScoreBand,
    generate_questions, make_choices,
};
use quiz_core::rng::Lcg;
use rand::Rng;

use super::progress::SessionProgress;
use crate::error::SessionError;

const SESSION_SEED_FACTOR: u32 = 1_315_423_911;
const SESSION_SEED_MASK: u32 = 0x85eb_ca6b;

/// Seed of the generator a session carries for choice synthesis.
#[must_use]
pub fn session_seed(participant: ParticipantId) -> u32 {
    participant.value().wrapping_mul(SESSION_SEED_FACTOR) ^ SESSION_SEED_MASK
}

//
// ─── CONFIGURATION ─────────────────────────────────────────────────────────────
//

/// Where the direction of the last distractor comes from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ChoiceJitter {
    /// Thread-local entropy, independent of the session seed. Option sets can
    /// differ between runs for the same participant.
    #[default]
    Independent,
    /// Drawn from the session generator, so every presentation is reproducible.
    Seeded,
}

//
// ─── STATE ─────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    AwaitingAnswer { index: usize },
    Answered { index: usize, is_correct: bool },
    Finished,
}

/// What happened when an option was submitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnswerOutcome {
    pub index: usize,
    pub selected: u32,
    pub correct: u32,
    pub is_correct: bool,
    /// Score after this answer.
    pub score: u32,
}

/// Where the session went after `advance`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    Question { index: usize },
    Finished { score: u32, band: ScoreBand },
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// One participant's run through their five questions.
///
/// `submit` and `advance` alternate: every answer must be followed by an
/// `advance` before the next answer is accepted. Timing between the two is
/// the caller's business.
#[derive(Debug, Clone)]
pub struct QuizSession {
    participant: ParticipantId,
    rng: Lcg,
    jitter: ChoiceJitter,
    questions: QuestionSet,
    choices: ChoiceSet,
    index: usize,
    score: u32,
    phase: SessionPhase,
}

impl QuizSession {
    /// Start a session at the first question with its options already drawn.
    #[must_use]
    pub fn start(participant: ParticipantId, jitter: ChoiceJitter) -> Self {
        let mut rng = Lcg::new(session_seed(participant));
        let questions = generate_questions(participant);
        let first = questions.as_slice()[0];
        let choices = draw_choices(&first, &mut rng, jitter);

        Self {
            participant,
            rng,
            jitter,
            questions,
            choices,
            index: 0,
            score: 0,
            phase: SessionPhase::AwaitingAnswer { index: 0 },
        }
    }

    #[must_use]
    pub fn participant(&self) -> ParticipantId {
        self.participant
    }

    #[must_use]
    pub fn questions(&self) -> &QuestionSet {
        &self.questions
    }

    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Index of the question on screen (the last one once finished).
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.phase == SessionPhase::Finished
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        if self.is_finished() {
            return None;
        }
        self.questions.get(self.index)
    }

    /// Options for the question on screen.
    #[must_use]
    pub fn choices(&self) -> Option<&ChoiceSet> {
        if self.is_finished() {
            None
        } else {
            Some(&self.choices)
        }
    }

    /// Number of questions answered so far.
    #[must_use]
    pub fn answered_count(&self) -> usize {
        match self.phase {
            SessionPhase::AwaitingAnswer { index } => index,
            SessionPhase::Answered { index, .. } => index + 1,
            SessionPhase::Finished => self.questions.len(),
        }
    }

    #[must_use]
    pub fn progress(&self) -> SessionProgress {
        SessionProgress {
            position: self.index + 1,
            total: self.questions.len(),
            answered: self.answered_count(),
            score: self.score,
            is_complete: self.is_finished(),
        }
    }

    /// Final score and band, once finished.
    #[must_use]
    pub fn final_result(&self) -> Option<(u32, ScoreBand)> {
        self.is_finished()
            .then(|| (self.score, ScoreBand::from_score(self.score)))
    }

    /// Judge `selected` against the question on screen.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NotAwaitingAnswer` if the current question was
    /// already answered, or `SessionError::Finished` once the session is over.
    pub fn submit(&mut self, selected: u32) -> Result<AnswerOutcome, SessionError> {
        let index = match self.phase {
            SessionPhase::AwaitingAnswer { index } => index,
            SessionPhase::Answered { .. } => return Err(SessionError::NotAwaitingAnswer),
            SessionPhase::Finished => return Err(SessionError::Finished),
        };
        let question = self.questions.as_slice()[index];
        let is_correct = question.is_correct(selected);
        if is_correct {
            self.score += 1;
        }
        self.phase = SessionPhase::Answered { index, is_correct };

        Ok(AnswerOutcome {
            index,
            selected,
            correct: question.correct(),
            is_correct,
            score: self.score,
        })
    }

    /// Move past the answered question.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NotAnswered` if the current question is still
    /// open, or `SessionError::Finished` once the session is over.
    pub fn advance(&mut self) -> Result<Advance, SessionError> {
        let index = match self.phase {
            SessionPhase::Answered { index, .. } => index,
            SessionPhase::AwaitingAnswer { .. } => return Err(SessionError::NotAnswered),
            SessionPhase::Finished => return Err(SessionError::Finished),
        };

        let next = index + 1;
        if next < QUESTIONS_PER_SESSION {
            let question = self.questions.as_slice()[next];
            self.choices = draw_choices(&question, &mut self.rng, self.jitter);
            self.index = next;
            self.phase = SessionPhase::AwaitingAnswer { index: next };
            return Ok(Advance::Question { index: next });
        }

        self.phase = SessionPhase::Finished;
        Ok(Advance::Finished {
            score: self.score,
            band: ScoreBand::from_score(self.score),
        })
    }
}

fn draw_choices(question: &Question, rng: &mut Lcg, jitter: ChoiceJitter) -> ChoiceSet {
    let swing = match jitter {
        ChoiceJitter::Independent => rand::rng().random::<f64>(),
        ChoiceJitter::Seeded => rng.next_unit(),
    };
    make_choices(question, rng, swing)
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
