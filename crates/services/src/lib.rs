#![forbid(unsafe_code)]

pub mod controller;
pub mod error;
pub mod presenter;
pub mod sessions;

pub use sessions as session;

pub use controller::QuizController;
pub use error::SessionError;
pub use presenter::{AudioError, AudioPlayer, Cue, QuizRenderer, SilentAudio};

pub use sessions::{
    Advance, AnswerOutcome, ChoiceJitter, QuizLoopService, QuizSession, RosterEntry,
    SessionPhase, SessionProgress, SessionSlot, Ticket, TicketKind,
};
