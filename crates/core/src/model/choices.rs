use serde::Serialize;

use crate::model::question::Question;
use crate::rng::{UnitSource, scaled_index};

/// Options presented for every question.
pub const CHOICES_PER_QUESTION: usize = 4;

/// Four distinct positive options, exactly one of them correct, in presentation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ChoiceSet {
    options: [u32; CHOICES_PER_QUESTION],
}

impl ChoiceSet {
    #[must_use]
    pub fn options(&self) -> &[u32; CHOICES_PER_QUESTION] {
        &self.options
    }

    #[must_use]
    pub fn contains(&self, value: u32) -> bool {
        self.options.contains(&value)
    }

    #[must_use]
    pub fn position(&self, value: u32) -> Option<usize> {
        self.options.iter().position(|option| *option == value)
    }

    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        self.options.iter().copied()
    }
}

/// Insertion-ordered pool of distinct positive options.
struct OptionPool {
    values: Vec<u32>,
}

impl OptionPool {
    fn seeded_with(correct: u32) -> Self {
        let mut values = Vec::with_capacity(CHOICES_PER_QUESTION);
        values.push(correct);
        Self { values }
    }

    fn is_full(&self) -> bool {
        self.values.len() >= CHOICES_PER_QUESTION
    }

    fn offer(&mut self, candidate: i64) {
        let Ok(value) = u32::try_from(candidate) else {
            return;
        };
        if value == 0 || self.values.contains(&value) {
            return;
        }
        self.values.push(value);
    }
}

/// Build the shuffled options for `question`.
///
/// Distractors mimic common slips (off by one operand, one row up or down the
/// table, adding instead of multiplying) and are taken in a fixed order until
/// four distinct positive values are held. `jitter` picks the direction of the
/// last distractor (`b + 2` when below 0.5, else `b - 2`). When the fixed
/// candidates run out, values within 5 of the answer are drawn from `source`.
/// The result is shuffled with Fisher–Yates using `source`.
pub fn make_choices<S>(question: &Question, source: &mut S, jitter: f64) -> ChoiceSet
where
    S: UnitSource + ?Sized,
{
    let a = i64::from(question.a());
    let b = i64::from(question.b());
    let correct = i64::from(question.correct());
    let swing = if jitter < 0.5 { 2 } else { -2 };

    let candidates = [
        correct + a,
        correct - a,
        correct + b,
        correct - b,
        a * (b + 1),
        a * (b - 1),
        a + b,
        a * (b + swing),
    ];

    let mut pool = OptionPool::seeded_with(question.correct());
    for candidate in candidates {
        if pool.is_full() {
            break;
        }
        pool.offer(candidate);
    }

    while !pool.is_full() {
        let delta = 1 + i64::from(scaled_index(source.draw(), 5));
        let sign = if source.draw() < 0.5 { -1 } else { 1 };
        pool.offer(correct + sign * delta);
    }

    let mut options = [0_u32; CHOICES_PER_QUESTION];
    options.copy_from_slice(&pool.values[..CHOICES_PER_QUESTION]);
    for i in (1..CHOICES_PER_QUESTION).rev() {
        #[allow(clippy::cast_possible_truncation)]
        let j = scaled_index(source.draw(), (i + 1) as u32) as usize;
        options.swap(i, j);
    }

    ChoiceSet { options }
}
