//! Event-driven front of the quiz: turns roster clicks, option picks and
//! timer firings into session transitions and collaborator calls.

use quiz_core::model::{ParticipantId, QUESTIONS_PER_SESSION};

use crate::error::SessionError;
use crate::presenter::{AudioPlayer, Cue, QuizRenderer};
use crate::sessions::{Advance, QuizLoopService, SessionSlot, Ticket, TicketKind};

pub struct QuizController<R, A> {
    quiz_loop: QuizLoopService,
    slot: SessionSlot,
    renderer: R,
    audio: A,
}

impl<R, A> QuizController<R, A>
where
    R: QuizRenderer,
    A: AudioPlayer,
{
    #[must_use]
    pub fn new(quiz_loop: QuizLoopService, renderer: R, audio: A) -> Self {
        Self {
            quiz_loop,
            slot: SessionSlot::new(),
            renderer,
            audio,
        }
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn slot(&self) -> &SessionSlot {
        &self.slot
    }

    /// Read the ledger and show the roster.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Storage` if the ledger cannot be read.
    pub async fn load_roster(&mut self) -> Result<(), SessionError> {
        let entries = self.quiz_loop.roster().await?;
        self.renderer.show_roster(&entries);
        Ok(())
    }

    /// Open the quiz for `participant`, replacing any session in progress.
    pub fn select(&mut self, participant: ParticipantId) {
        let session = self.quiz_loop.start_session(participant);
        if let Some(previous) = self.slot.install(session) {
            tracing::debug!(previous = %previous.participant(), "discarded unfinished session");
        }
        self.renderer.open_modal(participant);
        self.render_current();
    }

    /// Judge the picked option. Returns the ticket for the pending advance, or
    /// `None` when the pick was ignored (no session, or already answered).
    pub fn choose(&mut self, selected: u32) -> Option<Ticket> {
        let Some(session) = self.slot.session_mut() else {
            tracing::debug!(selected, "choice ignored: no active session");
            return None;
        };
        let outcome = match session.submit(selected) {
            Ok(outcome) => outcome,
            Err(err) => {
                tracing::debug!(selected, %err, "choice ignored");
                return None;
            }
        };

        self.renderer.mark_choice(&outcome);
        if let Err(err) = self.audio.play(Cue::for_answer(outcome.is_correct)) {
            tracing::debug!(%err, "feedback cue skipped");
        }
        self.renderer.show_score(outcome.score, QUESTIONS_PER_SESSION);
        Some(self.slot.issue(TicketKind::Advance))
    }

    /// Run a delayed transition. Stale tickets are ignored. Returns the next
    /// ticket to schedule, if any.
    ///
    /// # Errors
    ///
    /// Returns `SessionError` if the session rejects the transition.
    pub async fn fire(&mut self, ticket: Ticket) -> Result<Option<Ticket>, SessionError> {
        if !self.slot.accepts(ticket) {
            tracing::debug!(?ticket, "stale ticket ignored");
            return Ok(None);
        }
        match ticket.kind() {
            TicketKind::Advance => self.advance().await,
            TicketKind::Close => {
                self.close();
                Ok(None)
            }
        }
    }

    /// Dismiss the modal immediately. An unfinished session is discarded
    /// without touching the ledger.
    pub fn close(&mut self) {
        match self.slot.clear() {
            Some(session) if !session.is_finished() => {
                tracing::info!(participant = %session.participant(), "quiz closed early");
            }
            _ => {}
        }
        self.renderer.close_modal();
    }

    async fn advance(&mut self) -> Result<Option<Ticket>, SessionError> {
        let Some(session) = self.slot.session_mut() else {
            return Ok(None);
        };
        let participant = session.participant();

        match self.quiz_loop.advance(session).await {
            Ok(Advance::Question { .. }) => {
                self.render_current();
                Ok(None)
            }
            Ok(Advance::Finished { score, band }) => {
                self.renderer.show_result(score, QUESTIONS_PER_SESSION, band);
                self.renderer.mark_completed(participant);
                Ok(Some(self.slot.issue(TicketKind::Close)))
            }
            Err(SessionError::Storage(err)) => {
                tracing::warn!(%participant, %err, "completion not recorded");
                if let Some((score, band)) = self.slot.session().and_then(|s| s.final_result()) {
                    self.renderer.show_result(score, QUESTIONS_PER_SESSION, band);
                }
                Ok(Some(self.slot.issue(TicketKind::Close)))
            }
            Err(err) => Err(err),
        }
    }

    fn render_current(&mut self) {
        let Some(session) = self.slot.session() else {
            return;
        };
        let (Some(question), Some(choices)) = (session.current_question(), session.choices())
        else {
            return;
        };
        self.renderer.show_score(session.score(), QUESTIONS_PER_SESSION);
        self.renderer.show_progress(&session.progress());
        self.renderer.show_question(question, choices);
    }
}
