/**
 * Message Collection
 *
 * CRUD over the `messages` table. Rows are returned in insertion order
 * (`seq`), which is the room's chronological order.
 *
 * Replacing or deleting a message is owner-conditional: the author is part
 * of the write predicate, and only when nothing matched is the message
 * looked up again to tell "missing" apart from "not yours".
 */

use sqlx::{Executor, Sqlite};
use uuid::Uuid;

use crate::backend::store::{Store, StoreError};
use crate::shared::{Message, MessageKind, NewMessage, ValidMessage};

/// Outcome of an owner-conditional write
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OwnedWrite {
    /// The message existed, belonged to the caller and was written
    Applied,
    /// No message with that id exists
    NotFound,
    /// The message exists but was authored by someone else
    NotOwner,
}

#[derive(sqlx::FromRow)]
struct MessageRow {
    id: String,
    from_name: String,
    to_name: String,
    text: String,
    kind: String,
    time: String,
}

impl TryFrom<MessageRow> for Message {
    type Error = StoreError;

    fn try_from(row: MessageRow) -> Result<Self, Self::Error> {
        let id = Uuid::parse_str(&row.id)
            .map_err(|e| StoreError::corrupt(format!("bad message id '{}': {}", row.id, e)))?;
        let kind = MessageKind::parse(&row.kind)
            .ok_or_else(|| StoreError::corrupt(format!("bad message kind '{}'", row.kind)))?;

        Ok(Message {
            id,
            from: row.from_name,
            to: row.to_name,
            text: row.text,
            kind,
            time: row.time,
        })
    }
}

const SELECT_MESSAGE: &str = "SELECT id, from_name, to_name, text, kind, time FROM messages";

/// Insert a message through any executor (pool or open transaction)
pub(super) async fn insert_row<'e, E>(executor: E, message: &NewMessage) -> Result<Message, sqlx::Error>
where
    E: Executor<'e, Database = Sqlite>,
{
    let id = Uuid::new_v4();

    sqlx::query(
        "INSERT INTO messages (id, from_name, to_name, text, kind, time) VALUES (?, ?, ?, ?, ?, ?)",
    )
    .bind(id.to_string())
    .bind(&message.from)
    .bind(&message.to)
    .bind(&message.text)
    .bind(message.kind.as_str())
    .bind(&message.time)
    .execute(executor)
    .await?;

    Ok(message.clone().into_message(id))
}

/// The `messages` collection of a [`Store`]
#[derive(Debug, Clone, Copy)]
pub struct Messages<'a> {
    store: &'a Store,
}

impl<'a> Messages<'a> {
    pub(super) fn new(store: &'a Store) -> Self {
        Self { store }
    }

    /// Append a message and return it with its assigned id
    pub async fn insert(&self, message: &NewMessage) -> Result<Message, StoreError> {
        self.store
            .timed("messages.insert", insert_row(self.store.pool(), message))
            .await
    }

    /// Look up a message by id
    pub async fn find_one(&self, id: Uuid) -> Result<Option<Message>, StoreError> {
        let sql = format!("{} WHERE id = ?", SELECT_MESSAGE);
        let query = sqlx::query_as::<_, MessageRow>(&sql)
            .bind(id.to_string())
            .fetch_optional(self.store.pool());

        let row = self.store.timed("messages.find_one", query).await?;
        row.map(Message::try_from).transpose()
    }

    /// Every message, oldest first
    pub async fn find(&self) -> Result<Vec<Message>, StoreError> {
        let sql = format!("{} ORDER BY seq ASC", SELECT_MESSAGE);
        let query = sqlx::query_as::<_, MessageRow>(&sql).fetch_all(self.store.pool());

        let rows = self.store.timed("messages.find", query).await?;
        rows.into_iter().map(Message::try_from).collect()
    }

    /// Replace the content of a message authored by `author`
    ///
    /// `from` is never changed; `to`, `text`, `type` and `time` are.
    pub async fn update_one(
        &self,
        id: Uuid,
        author: &str,
        content: &ValidMessage,
        time: &str,
    ) -> Result<OwnedWrite, StoreError> {
        let query = sqlx::query(
            "UPDATE messages SET to_name = ?, text = ?, kind = ?, time = ? WHERE id = ? AND from_name = ?",
        )
        .bind(&content.to)
        .bind(&content.text)
        .bind(content.kind.as_str())
        .bind(time)
        .bind(id.to_string())
        .bind(author)
        .execute(self.store.pool());

        let result = self.store.timed("messages.update_one", query).await?;
        self.resolve(id, result.rows_affected()).await
    }

    /// Delete a message authored by `author`
    pub async fn delete_one(&self, id: Uuid, author: &str) -> Result<OwnedWrite, StoreError> {
        let query = sqlx::query("DELETE FROM messages WHERE id = ? AND from_name = ?")
            .bind(id.to_string())
            .bind(author)
            .execute(self.store.pool());

        let result = self.store.timed("messages.delete_one", query).await?;
        self.resolve(id, result.rows_affected()).await
    }

    async fn resolve(&self, id: Uuid, rows_affected: u64) -> Result<OwnedWrite, StoreError> {
        if rows_affected > 0 {
            return Ok(OwnedWrite::Applied);
        }
        match self.find_one(id).await? {
            Some(_) => Ok(OwnedWrite::NotOwner),
            None => Ok(OwnedWrite::NotFound),
        }
    }
}
