mod progress;
mod service;
mod slot;
mod workflow;

// Public API of the session subsystem.
pub use crate::error::SessionError;
pub use progress::SessionProgress;
pub use service::{
    Advance, AnswerOutcome, ChoiceJitter, QuizSession, SessionPhase, session_seed,
};
pub use slot::{SessionSlot, Ticket, TicketKind};
pub use workflow::{QuizLoopService, RosterEntry};
