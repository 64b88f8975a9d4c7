mod board;
mod modal;
mod roster;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use board::BoardView;
pub use modal::QuizModal;
pub use roster::RosterGrid;
