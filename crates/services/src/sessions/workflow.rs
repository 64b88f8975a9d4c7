use std::sync::Arc;

use quiz_core::model::ParticipantId;
use serde::Serialize;
use storage::repository::CompletionRepository;

use super::service::{Advance, ChoiceJitter, QuizSession};
use crate::error::SessionError;

/// Completion state of one roster seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RosterEntry {
    pub participant: ParticipantId,
    pub completed: bool,
}

/// Orchestrates session start and the completion ledger.
#[derive(Clone)]
pub struct QuizLoopService {
    completions: Arc<dyn CompletionRepository>,
    jitter: ChoiceJitter,
}

impl QuizLoopService {
    #[must_use]
    pub fn new(completions: Arc<dyn CompletionRepository>) -> Self {
        Self {
            completions,
            jitter: ChoiceJitter::default(),
        }
    }

    #[must_use]
    pub fn with_choice_jitter(mut self, jitter: ChoiceJitter) -> Self {
        self.jitter = jitter;
        self
    }

    /// Start a new session for `participant`.
    #[must_use]
    pub fn start_session(&self, participant: ParticipantId) -> QuizSession {
        tracing::info!(%participant, jitter = ?self.jitter, "quiz session started");
        QuizSession::start(participant, self.jitter)
    }

    /// Advance `session` and record completion when it finishes.
    ///
    /// The session has already moved to `Finished` when a ledger write fails.
    ///
    /// # Errors
    ///
    /// Returns `SessionError` for invalid transitions or ledger failures.
    pub async fn advance(&self, session: &mut QuizSession) -> Result<Advance, SessionError> {
        let step = session.advance()?;
        if let Advance::Finished { score, band } = step {
            let participant = session.participant();
            self.completions.mark_completed(participant).await?;
            tracing::info!(%participant, score, band = band.label(), "quiz session finished");
        }
        Ok(step)
    }

    /// Completion state of every roster seat, in seat order.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Storage` if the ledger cannot be read.
    pub async fn roster(&self) -> Result<Vec<RosterEntry>, SessionError> {
        let completed = self.completions.list_completed().await?;
        Ok(ParticipantId::roster()
            .map(|participant| RosterEntry {
                participant,
                completed: completed.binary_search(&participant).is_ok(),
            })
            .collect())
    }

    /// Clear one participant's flag, or every flag when `participant` is `None`.
    /// Returns the number of flags removed.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Storage` if the ledger cannot be updated.
    pub async fn reset(&self, participant: Option<ParticipantId>) -> Result<u64, SessionError> {
        let removed = match participant {
            Some(participant) => u64::from(self.completions.clear_completion(participant).await?),
            None => self.completions.clear_all().await?,
        };
        tracing::info!(?participant, removed, "completion flags cleared");
        Ok(removed)
    }
}
