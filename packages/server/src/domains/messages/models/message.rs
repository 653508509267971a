use anyhow::Result;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

/// Message board entry - SQL persistence layer
///
/// Anonymous posts store a null name; the API layer masks them as "익명".
#[derive(sqlx::FromRow, Debug, Clone)]
pub struct Message {
    pub id: Uuid,
    pub name: Option<String>,
    pub message: String,
    pub is_anonymous: bool,
    pub admin_reply: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Message {
    /// Find all messages, newest first.
    pub async fn find_all(pool: &PgPool) -> Result<Vec<Self>> {
        sqlx::query_as::<_, Self>("SELECT * FROM messages ORDER BY created_at DESC")
            .fetch_all(pool)
            .await
            .map_err(Into::into)
    }

    pub async fn insert(
        name: Option<&str>,
        message: &str,
        is_anonymous: bool,
        pool: &PgPool,
    ) -> Result<Self> {
        sqlx::query_as::<_, Self>(
            "INSERT INTO messages (name, message, is_anonymous)
             VALUES ($1, $2, $3)
             RETURNING *",
        )
        .bind(name)
        .bind(message)
        .bind(is_anonymous)
        .fetch_one(pool)
        .await
        .map_err(Into::into)
    }

    /// Attach or replace the admin reply. Returns None for unknown ids.
    pub async fn set_reply(id: Uuid, reply: &str, pool: &PgPool) -> Result<Option<Self>> {
        sqlx::query_as::<_, Self>(
            "UPDATE messages SET admin_reply = $2 WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(reply)
        .fetch_optional(pool)
        .await
        .map_err(Into::into)
    }

    pub async fn delete(id: Uuid, pool: &PgPool) -> Result<bool> {
        let result = sqlx::query("DELETE FROM messages WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
