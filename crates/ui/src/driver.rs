//! Event loop owning the quiz controller: user intents come in through a
//! stream, delayed transitions are kept as a single pending ticket.

use std::time::Duration;

use futures::{Stream, StreamExt};
use quiz_core::model::ParticipantId;
use services::{AudioPlayer, QuizController, QuizRenderer, Ticket, TicketKind};
use tokio::time::{Instant, sleep_until};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuizIntent {
    Select(ParticipantId),
    Choose(u32),
    Close,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct QuizTiming {
    /// Pause between an answer and the next question.
    pub advance_delay: Duration,
    /// How long the result stays up before the modal closes.
    pub close_delay: Duration,
}

impl Default for QuizTiming {
    fn default() -> Self {
        Self {
            advance_delay: Duration::from_millis(800),
            close_delay: Duration::from_millis(2000),
        }
    }
}

impl QuizTiming {
    fn delay_for(&self, kind: TicketKind) -> Duration {
        match kind {
            TicketKind::Advance => self.advance_delay,
            TicketKind::Close => self.close_delay,
        }
    }
}

struct Pending {
    due: Instant,
    ticket: Ticket,
}

/// Drive `controller` until `intents` ends.
pub async fn run_quiz<R, A, S>(mut controller: QuizController<R, A>, mut intents: S, timing: QuizTiming)
where
    R: QuizRenderer,
    A: AudioPlayer,
    S: Stream<Item = QuizIntent> + Unpin,
{
    load_roster(&mut controller).await;
    let mut pending: Option<Pending> = None;

    loop {
        let intent = match pending.as_ref().map(|timer| timer.due) {
            Some(due) => {
                tokio::select! {
                    intent = intents.next() => intent,
                    () = sleep_until(due) => {
                        if let Some(timer) = pending.take() {
                            pending = fire(&mut controller, timer.ticket, timing).await;
                        }
                        continue;
                    }
                }
            }
            None => intents.next().await,
        };
        let Some(intent) = intent else {
            break;
        };

        match intent {
            QuizIntent::Select(participant) => {
                controller.select(participant);
                pending = None;
            }
            QuizIntent::Choose(value) => {
                if let Some(ticket) = controller.choose(value) {
                    pending = Some(schedule(ticket, timing));
                }
            }
            QuizIntent::Close => {
                controller.close();
                pending = None;
            }
        }
    }
    tracing::debug!("quiz intent stream closed");
}

fn schedule(ticket: Ticket, timing: QuizTiming) -> Pending {
    Pending {
        due: Instant::now() + timing.delay_for(ticket.kind()),
        ticket,
    }
}

async fn fire<R, A>(
    controller: &mut QuizController<R, A>,
    ticket: Ticket,
    timing: QuizTiming,
) -> Option<Pending>
where
    R: QuizRenderer,
    A: AudioPlayer,
{
    match controller.fire(ticket).await {
        Ok(next) => next.map(|ticket| schedule(ticket, timing)),
        Err(err) => {
            tracing::warn!(%err, "quiz transition failed");
            None
        }
    }
}

async fn load_roster<R, A>(controller: &mut QuizController<R, A>)
where
    R: QuizRenderer,
    A: AudioPlayer,
{
    if let Err(err) = controller.load_roster().await {
        tracing::warn!(%err, "could not read completion ledger");
    }
}
