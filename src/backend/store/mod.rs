//! Store Adapter
//!
//! Owns the single connection pool shared by every request handler and by
//! the inactivity sweeper, and exposes collection-scoped CRUD over the two
//! collections of the room: `participants` and `messages`.
//!
//! # Architecture
//!
//! - **`participants`** - Participant collection (insert, find, heartbeat, delete)
//! - **`messages`** - Message collection (insert, find, owner-conditional writes)
//! - **`error`** - Store error type
//!
//! Operations that touch both collections (joining and eviction) run in one
//! transaction on [`Store`] itself.
//!
//! # Concurrency
//!
//! There are no in-process locks. Participant-name uniqueness is a unique
//! key in the schema and message ownership is part of the write predicate,
//! so concurrent requests cannot slip between a check and a write.
//!
//! Every call is bounded by the configured store timeout.
//!
//! # Example
//!
//! ```rust,no_run
//! use roomchat::backend::store::Store;
//! use std::time::Duration;
//!
//! # async fn example() -> Result<(), roomchat::backend::store::StoreError> {
//! let store = Store::connect("sqlite://roomchat.db?mode=rwc", 5, Duration::from_secs(5)).await?;
//! let everyone = store.participants().find().await?;
//! # Ok(())
//! # }
//! ```

/// Store error type
pub mod error;

/// Participant collection
pub mod participants;

/// Message collection
pub mod messages;

use std::future::Future;
use std::str::FromStr;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

use crate::shared::{Message, NewMessage, Participant};

pub use error::StoreError;
pub use messages::{Messages, OwnedWrite};
pub use participants::Participants;

/// Default bound on a single store call
pub const DEFAULT_STORE_TIMEOUT: Duration = Duration::from_secs(5);

/// Handle to the chat store
///
/// Cheap to clone; every clone shares the same pool.
#[derive(Debug, Clone)]
pub struct Store {
    pool: SqlitePool,
    op_timeout: Duration,
}

impl Store {
    /// Open a pool against `database_url` and apply migrations
    pub async fn connect(
        database_url: &str,
        max_connections: u32,
        op_timeout: Duration,
    ) -> Result<Self, StoreError> {
        tracing::info!("Connecting to database...");

        let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .acquire_timeout(op_timeout)
            .connect_with(options)
            .await?;

        tracing::info!("Database connection pool created successfully");

        let store = Self { pool, op_timeout };
        store.migrate().await?;
        Ok(store)
    }

    /// A private in-memory store, used by tests and local experiments
    ///
    /// Each SQLite in-memory connection is its own database, so the pool is
    /// pinned to one connection that never expires.
    pub async fn in_memory() -> Result<Self, StoreError> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")?;
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?;

        let store = Self {
            pool,
            op_timeout: DEFAULT_STORE_TIMEOUT,
        };
        store.migrate().await?;
        Ok(store)
    }

    async fn migrate(&self) -> Result<(), StoreError> {
        tracing::info!("Running database migrations...");
        sqlx::migrate!().run(&self.pool).await?;
        tracing::info!("Database migrations completed successfully");
        Ok(())
    }

    /// The `participants` collection
    pub fn participants(&self) -> Participants<'_> {
        Participants::new(self)
    }

    /// The `messages` collection
    pub fn messages(&self) -> Messages<'_> {
        Messages::new(self)
    }

    /// Insert a participant and its join notice atomically
    ///
    /// Returns [`StoreError::Duplicate`] when the name is taken; in that case
    /// no notice is written.
    pub async fn admit(
        &self,
        participant: &Participant,
        notice: &NewMessage,
    ) -> Result<Message, StoreError> {
        self.timed("admit", admit_tx(&self.pool, participant, notice))
            .await
    }

    /// Remove a participant that is still stale and append its departure notice
    ///
    /// The delete only matches when `last_status < cutoff`, so a heartbeat
    /// that landed after the scan keeps the participant. Returns `None` when
    /// nothing was deleted.
    pub async fn evict(
        &self,
        name: &str,
        cutoff: i64,
        notice: &NewMessage,
    ) -> Result<Option<Message>, StoreError> {
        self.timed("evict", evict_tx(&self.pool, name, cutoff, notice))
            .await
    }

    /// Close the pool, waiting for checked-out connections to return
    pub async fn close(&self) {
        self.pool.close().await;
        tracing::info!("Database connection pool closed");
    }

    pub(crate) fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Run a driver call under the store timeout
    pub(crate) async fn timed<T, F>(&self, operation: &'static str, call: F) -> Result<T, StoreError>
    where
        F: Future<Output = Result<T, sqlx::Error>>,
    {
        match tokio::time::timeout(self.op_timeout, call).await {
            Ok(result) => result.map_err(StoreError::from),
            Err(_) => {
                tracing::warn!(operation, timeout_ms = self.op_timeout.as_millis() as u64, "store call timed out");
                Err(StoreError::Timeout { operation })
            }
        }
    }
}

async fn admit_tx(
    pool: &SqlitePool,
    participant: &Participant,
    notice: &NewMessage,
) -> Result<Message, sqlx::Error> {
    let mut tx = pool.begin().await?;

    sqlx::query("INSERT INTO participants (name, last_status) VALUES (?, ?)")
        .bind(&participant.name)
        .bind(participant.last_status)
        .execute(&mut *tx)
        .await?;

    let message = messages::insert_row(&mut *tx, notice).await?;
    tx.commit().await?;
    Ok(message)
}

async fn evict_tx(
    pool: &SqlitePool,
    name: &str,
    cutoff: i64,
    notice: &NewMessage,
) -> Result<Option<Message>, sqlx::Error> {
    let mut tx = pool.begin().await?;

    let deleted = sqlx::query("DELETE FROM participants WHERE name = ? AND last_status < ?")
        .bind(name)
        .bind(cutoff)
        .execute(&mut *tx)
        .await?
        .rows_affected();

    if deleted == 0 {
        tx.rollback().await?;
        return Ok(None);
    }

    let message = messages::insert_row(&mut *tx, notice).await?;
    tx.commit().await?;
    Ok(Some(message))
}
