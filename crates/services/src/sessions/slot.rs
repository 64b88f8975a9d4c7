use super::service::QuizSession;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TicketKind {
    /// Move on after an answered question.
    Advance,
    /// Dismiss a finished session.
    Close,
}

/// Handle for a delayed transition.
///
/// A ticket is only honoured while the slot still holds the session that
/// issued it; installing or clearing a session invalidates every outstanding
/// ticket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket {
    generation: u64,
    kind: TicketKind,
}

impl Ticket {
    #[must_use]
    pub fn kind(&self) -> TicketKind {
        self.kind
    }
}

/// Holds the single active session.
#[derive(Debug, Default)]
pub struct SessionSlot {
    active: Option<QuizSession>,
    generation: u64,
}

impl SessionSlot {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `session` the active one, returning whatever it replaced.
    pub fn install(&mut self, session: QuizSession) -> Option<QuizSession> {
        self.generation = self.generation.wrapping_add(1);
        self.active.replace(session)
    }

    /// Drop the active session, if any.
    pub fn clear(&mut self) -> Option<QuizSession> {
        self.generation = self.generation.wrapping_add(1);
        self.active.take()
    }

    #[must_use]
    pub fn session(&self) -> Option<&QuizSession> {
        self.active.as_ref()
    }

    pub fn session_mut(&mut self) -> Option<&mut QuizSession> {
        self.active.as_mut()
    }

    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.active.is_none()
    }

    #[must_use]
    pub fn issue(&self, kind: TicketKind) -> Ticket {
        Ticket {
            generation: self.generation,
            kind,
        }
    }

    /// Whether `ticket` was issued for the session currently held.
    #[must_use]
    pub fn accepts(&self, ticket: Ticket) -> bool {
        self.active.is_some() && ticket.generation == self.generation
    }
}
