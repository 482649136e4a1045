/**
 * Participant Collection
 *
 * CRUD over the `participants` table. Names are unique at the schema level;
 * a colliding insert surfaces as `StoreError::Duplicate`.
 */

use crate::backend::store::{Store, StoreError};
use crate::shared::Participant;

#[derive(sqlx::FromRow)]
struct ParticipantRow {
    name: String,
    last_status: i64,
}

impl From<ParticipantRow> for Participant {
    fn from(row: ParticipantRow) -> Self {
        Participant::new(row.name, row.last_status)
    }
}

/// The `participants` collection of a [`Store`]
#[derive(Debug, Clone, Copy)]
pub struct Participants<'a> {
    store: &'a Store,
}

impl<'a> Participants<'a> {
    pub(super) fn new(store: &'a Store) -> Self {
        Self { store }
    }

    /// Insert a participant without a join notice
    pub async fn insert(&self, participant: &Participant) -> Result<(), StoreError> {
        let query = sqlx::query("INSERT INTO participants (name, last_status) VALUES (?, ?)")
            .bind(&participant.name)
            .bind(participant.last_status)
            .execute(self.store.pool());

        self.store.timed("participants.insert", query).await?;
        Ok(())
    }

    /// Look up a participant by name
    pub async fn find_one(&self, name: &str) -> Result<Option<Participant>, StoreError> {
        let query = sqlx::query_as::<_, ParticipantRow>(
            "SELECT name, last_status FROM participants WHERE name = ?",
        )
        .bind(name)
        .fetch_optional(self.store.pool());

        let row = self.store.timed("participants.find_one", query).await?;
        Ok(row.map(Participant::from))
    }

    /// Every participant, in join order
    pub async fn find(&self) -> Result<Vec<Participant>, StoreError> {
        let query = sqlx::query_as::<_, ParticipantRow>(
            "SELECT name, last_status FROM participants ORDER BY rowid ASC",
        )
        .fetch_all(self.store.pool());

        let rows = self.store.timed("participants.find", query).await?;
        Ok(rows.into_iter().map(Participant::from).collect())
    }

    /// Participants whose last heartbeat is older than `cutoff`
    pub async fn find_stale(&self, cutoff: i64) -> Result<Vec<Participant>, StoreError> {
        let query = sqlx::query_as::<_, ParticipantRow>(
            "SELECT name, last_status FROM participants WHERE last_status < ? ORDER BY rowid ASC",
        )
        .bind(cutoff)
        .fetch_all(self.store.pool());

        let rows = self.store.timed("participants.find_stale", query).await?;
        Ok(rows.into_iter().map(Participant::from).collect())
    }

    /// Record a heartbeat; `false` when no such participant exists
    pub async fn update_one(&self, name: &str, last_status: i64) -> Result<bool, StoreError> {
        let query = sqlx::query("UPDATE participants SET last_status = ? WHERE name = ?")
            .bind(last_status)
            .bind(name)
            .execute(self.store.pool());

        let result = self.store.timed("participants.update_one", query).await?;
        Ok(result.rows_affected() > 0)
    }

    /// Remove a participant; `false` when no such participant exists
    pub async fn delete_one(&self, name: &str) -> Result<bool, StoreError> {
        let query = sqlx::query("DELETE FROM participants WHERE name = ?")
            .bind(name)
            .execute(self.store.pool());

        let result = self.store.timed("participants.delete_one", query).await?;
        Ok(result.rows_affected() > 0)
    }
}
