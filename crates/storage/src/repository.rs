use async_trait::async_trait;
use quiz_core::model::ParticipantId;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use thiserror::Error;

/// Key prefix of completion flags in the key-value store.
pub const COMPLETION_KEY_PREFIX: &str = "studentDone_";

/// Value stored for a completed participant.
pub const COMPLETED_VALUE: &str = "1";

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("connection error: {0}")]
    Connection(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Key under which `participant`'s completion flag is stored, e.g. `studentDone_7`.
#[must_use]
pub fn completion_key(participant: ParticipantId) -> String {
    format!("{COMPLETION_KEY_PREFIX}{participant}")
}

/// Inverse of [`completion_key`]; `None` for keys that are not completion flags.
///
/// Only the exact key `completion_key` writes is accepted, so `studentDone_07`
/// or `studentDone_+7` never stand in for participant 7.
#[must_use]
pub fn participant_from_key(key: &str) -> Option<ParticipantId> {
    let participant: ParticipantId = key.strip_prefix(COMPLETION_KEY_PREFIX)?.parse().ok()?;
    (completion_key(participant) == key).then_some(participant)
}

/// Repository contract for the completion ledger.
///
/// A participant counts as completed only when their key holds [`COMPLETED_VALUE`].
#[async_trait]
pub trait CompletionRepository: Send + Sync {
    /// Whether `participant` has finished a session.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the flag cannot be read.
    async fn is_completed(&self, participant: ParticipantId) -> Result<bool, StorageError>;

    /// Record that `participant` finished a session. Writing twice is harmless.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the flag cannot be stored.
    async fn mark_completed(&self, participant: ParticipantId) -> Result<(), StorageError>;

    /// All completed participants, in ascending order.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the ledger cannot be read.
    async fn list_completed(&self) -> Result<Vec<ParticipantId>, StorageError>;

    /// Remove `participant`'s flag. Returns whether a flag was present.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the flag cannot be removed.
    async fn clear_completion(&self, participant: ParticipantId) -> Result<bool, StorageError>;

    /// Remove every completion flag, returning how many were removed.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the ledger cannot be cleared.
    async fn clear_all(&self) -> Result<u64, StorageError>;
}

/// Simple in-memory key-value store for testing and prototyping.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Raw value stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Connection` if the store lock is poisoned.
    pub fn raw_value(&self, key: &str) -> Result<Option<String>, StorageError> {
        let guard = self
            .entries
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(guard.get(key).cloned())
    }

    /// Store an arbitrary key, e.g. to simulate values written by another client.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Connection` if the store lock is poisoned.
    pub fn put_raw(&self, key: impl Into<String>, value: impl Into<String>) -> Result<(), StorageError> {
        let mut guard = self
            .entries
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard.insert(key.into(), value.into());
        Ok(())
    }
}

#[async_trait]
impl CompletionRepository for InMemoryRepository {
    async fn is_completed(&self, participant: ParticipantId) -> Result<bool, StorageError> {
        let value = self.raw_value(&completion_key(participant))?;
        Ok(value.as_deref() == Some(COMPLETED_VALUE))
    }

    async fn mark_completed(&self, participant: ParticipantId) -> Result<(), StorageError> {
        self.put_raw(completion_key(participant), COMPLETED_VALUE)
    }

    async fn list_completed(&self) -> Result<Vec<ParticipantId>, StorageError> {
        let guard = self
            .entries
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        let mut completed: Vec<ParticipantId> = guard
            .iter()
            .filter(|(_, value)| value.as_str() == COMPLETED_VALUE)
            .filter_map(|(key, _)| participant_from_key(key))
            .collect();
        completed.sort_unstable();
        Ok(completed)
    }

    async fn clear_completion(&self, participant: ParticipantId) -> Result<bool, StorageError> {
        let mut guard = self
            .entries
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(guard.remove(&completion_key(participant)).is_some())
    }

    async fn clear_all(&self) -> Result<u64, StorageError> {
        let mut guard = self
            .entries
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        let before = guard.len();
        guard.retain(|key, _| participant_from_key(key).is_none());
        Ok(u64::try_from(before - guard.len()).unwrap_or(u64::MAX))
    }
}

/// Aggregates repositories behind trait objects for easy backend swapping.
#[derive(Clone)]
pub struct Storage {
    pub completions: Arc<dyn CompletionRepository>,
}

impl Storage {
    #[must_use]
    pub fn in_memory() -> Self {
        let completions: Arc<dyn CompletionRepository> = Arc::new(InMemoryRepository::new());
        Self { completions }
    }
}
