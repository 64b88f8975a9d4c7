use async_trait::async_trait;
use quiz_core::model::ParticipantId;
use sqlx::Row;

use super::SqliteRepository;
use crate::repository::{
    COMPLETED_VALUE, COMPLETION_KEY_PREFIX, CompletionRepository, StorageError, completion_key,
    participant_from_key,
};

fn ser<E: core::fmt::Display>(e: E) -> StorageError {
    StorageError::Serialization(e.to_string())
}

fn conn<E: core::fmt::Display>(e: E) -> StorageError {
    StorageError::Connection(e.to_string())
}

/// `LIKE` pattern matching every completion key; `_` is escaped so it only matches itself.
fn key_pattern() -> String {
    format!("{}%", COMPLETION_KEY_PREFIX.replace('_', "\\_"))
}

#[async_trait]
impl CompletionRepository for SqliteRepository {
    async fn is_completed(&self, participant: ParticipantId) -> Result<bool, StorageError> {
        let row = sqlx::query("SELECT value FROM kv_store WHERE key = ?1")
            .bind(completion_key(participant))
            .fetch_optional(&self.pool)
            .await
            .map_err(conn)?;

        let Some(row) = row else {
            return Ok(false);
        };
        let value: String = row.try_get("value").map_err(ser)?;
        Ok(value == COMPLETED_VALUE)
    }

    async fn mark_completed(&self, participant: ParticipantId) -> Result<(), StorageError> {
        sqlx::query(
            r"
            INSERT INTO kv_store (key, value)
            VALUES (?1, ?2)
            ON CONFLICT(key) DO UPDATE SET value = excluded.value
            ",
        )
        .bind(completion_key(participant))
        .bind(COMPLETED_VALUE)
        .execute(&self.pool)
        .await
        .map_err(conn)?;

        Ok(())
    }

    async fn list_completed(&self) -> Result<Vec<ParticipantId>, StorageError> {
        let rows = sqlx::query(r"SELECT key FROM kv_store WHERE key LIKE ?1 ESCAPE '\' AND value = ?2")
            .bind(key_pattern())
            .bind(COMPLETED_VALUE)
            .fetch_all(&self.pool)
            .await
            .map_err(conn)?;

        let mut completed = Vec::with_capacity(rows.len());
        for row in rows {
            let key: String = row.try_get("key").map_err(ser)?;
            match participant_from_key(&key) {
                Some(participant) => completed.push(participant),
                None => tracing::warn!(%key, "skipping malformed completion key"),
            }
        }
        completed.sort_unstable();
        Ok(completed)
    }

    async fn clear_completion(&self, participant: ParticipantId) -> Result<bool, StorageError> {
        let res = sqlx::query("DELETE FROM kv_store WHERE key = ?1")
            .bind(completion_key(participant))
            .execute(&self.pool)
            .await
            .map_err(conn)?;
        Ok(res.rows_affected() > 0)
    }

    async fn clear_all(&self) -> Result<u64, StorageError> {
        let mut tx = self.pool.begin().await.map_err(conn)?;
        let rows = sqlx::query(r"SELECT key FROM kv_store WHERE key LIKE ?1 ESCAPE '\'")
            .bind(key_pattern())
            .fetch_all(&mut *tx)
            .await
            .map_err(conn)?;

        let mut removed = 0;
        for row in rows {
            let key: String = row.try_get("key").map_err(ser)?;
            if participant_from_key(&key).is_none() {
                continue;
            }
            let res = sqlx::query("DELETE FROM kv_store WHERE key = ?1")
                .bind(&key)
                .execute(&mut *tx)
                .await
                .map_err(conn)?;
            removed += res.rows_affected();
        }

        tx.commit().await.map_err(conn)?;
        Ok(removed)
    }
}
