//! Shared error types for the services crate.

use thiserror::Error;

use storage::repository::StorageError;

/// Errors emitted by quiz sessions.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SessionError {
    #[error("session is not waiting for an answer")]
    NotAwaitingAnswer,
    #[error("current question has not been answered yet")]
    NotAnswered,
    #[error("session already finished")]
    Finished,
    #[error(transparent)]
    Storage(#[from] StorageError),
}
