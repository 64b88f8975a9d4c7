use std::collections::HashSet;

use serde::Serialize;
use thiserror::Error;

use crate::model::ids::ParticipantId;
use crate::rng::{Lcg, UnitSource, scaled_index};

/// Questions drawn for every participant.
pub const QUESTIONS_PER_SESSION: usize = 5;

pub const MIN_FACTOR: u32 = 2;
pub const MAX_FACTOR: u32 = 9;
pub const MIN_MULTIPLIER: u32 = 1;
pub const MAX_MULTIPLIER: u32 = 10;

const QUESTION_SEED_FACTOR: u32 = 997;
const QUESTION_SEED_MASK: u32 = 0x9e37_79b9;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("factor {0} is outside 2..=9")]
    FactorOutOfRange(u32),
    #[error("multiplier {0} is outside 1..=10")]
    MultiplierOutOfRange(u32),
}

/// A single multiplication question `a × b`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Question {
    a: u32,
    b: u32,
    correct: u32,
}

impl Question {
    /// Build a question, checking operand ranges.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError` when `a` is outside `2..=9` or `b` outside `1..=10`.
    pub fn new(a: u32, b: u32) -> Result<Self, QuestionError> {
        if !(MIN_FACTOR..=MAX_FACTOR).contains(&a) {
            return Err(QuestionError::FactorOutOfRange(a));
        }
        if !(MIN_MULTIPLIER..=MAX_MULTIPLIER).contains(&b) {
            return Err(QuestionError::MultiplierOutOfRange(b));
        }
        Ok(Self { a, b, correct: a * b })
    }

    #[must_use]
    pub fn a(&self) -> u32 {
        self.a
    }

    #[must_use]
    pub fn b(&self) -> u32 {
        self.b
    }

    #[must_use]
    pub fn correct(&self) -> u32 {
        self.correct
    }

    #[must_use]
    pub fn is_correct(&self, selected: u32) -> bool {
        selected == self.correct
    }
}

/// The ordered questions of one participant, in draw order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionSet {
    questions: [Question; QUESTIONS_PER_SESSION],
}

impl QuestionSet {
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Question] {
        &self.questions
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Question> {
        self.questions.iter()
    }
}

/// Seed of the question generator for `participant`.
#[must_use]
pub fn question_seed(participant: ParticipantId) -> u32 {
    participant.value().wrapping_mul(QUESTION_SEED_FACTOR) ^ QUESTION_SEED_MASK
}

/// Draw the participant's five distinct questions.
///
/// Pairs are drawn `a` first, then `b`; a pair already taken is discarded and
/// drawing continues. The loop has no cap: with 80 possible pairs and only 5
/// needed it always terminates in practice.
#[must_use]
pub fn generate_questions(participant: ParticipantId) -> QuestionSet {
    let mut source = Lcg::new(question_seed(participant));
    let mut seen = HashSet::with_capacity(QUESTIONS_PER_SESSION);
    let mut drawn = Vec::with_capacity(QUESTIONS_PER_SESSION);

    while drawn.len() < QUESTIONS_PER_SESSION {
        let a = MIN_FACTOR + scaled_index(source.draw(), MAX_FACTOR - MIN_FACTOR + 1);
        let b = MIN_MULTIPLIER + scaled_index(source.draw(), MAX_MULTIPLIER - MIN_MULTIPLIER + 1);
        if !seen.insert((a, b)) {
            continue;
        }
        drawn.push(Question { a, b, correct: a * b });
    }

    let mut questions = [drawn[0]; QUESTIONS_PER_SESSION];
    questions.copy_from_slice(&drawn);
    QuestionSet { questions }
}
