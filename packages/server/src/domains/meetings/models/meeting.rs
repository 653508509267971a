use anyhow::Result;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::PgPool;
use uuid::Uuid;

/// Meeting record - SQL persistence layer
#[derive(sqlx::FromRow, Debug, Clone)]
pub struct Meeting {
    pub id: Uuid,
    pub title: String,
    pub date: NaiveDate,
    pub summary: Option<String>,
    pub decisions: Vec<String>,
    pub next_actions: Vec<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewMeeting {
    pub title: String,
    pub date: NaiveDate,
    pub summary: Option<String>,
    pub decisions: Vec<String>,
    pub next_actions: Vec<String>,
}

impl Meeting {
    /// Find all meetings, newest meeting date first.
    pub async fn find_all(pool: &PgPool) -> Result<Vec<Self>> {
        sqlx::query_as::<_, Self>("SELECT * FROM meetings ORDER BY date DESC")
            .fetch_all(pool)
            .await
            .map_err(Into::into)
    }

    pub async fn insert(new: &NewMeeting, pool: &PgPool) -> Result<Self> {
        sqlx::query_as::<_, Self>(
            "INSERT INTO meetings (title, date, summary, decisions, next_actions)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING *",
        )
        .bind(&new.title)
        .bind(new.date)
        .bind(&new.summary)
        .bind(&new.decisions)
        .bind(&new.next_actions)
        .fetch_one(pool)
        .await
        .map_err(Into::into)
    }

    pub async fn update(id: Uuid, new: &NewMeeting, pool: &PgPool) -> Result<Option<Self>> {
        sqlx::query_as::<_, Self>(
            "UPDATE meetings
             SET title = $2, date = $3, summary = $4, decisions = $5, next_actions = $6
             WHERE id = $1
             RETURNING *",
        )
        .bind(id)
        .bind(&new.title)
        .bind(new.date)
        .bind(&new.summary)
        .bind(&new.decisions)
        .bind(&new.next_actions)
        .fetch_optional(pool)
        .await
        .map_err(Into::into)
    }

    pub async fn delete(id: Uuid, pool: &PgPool) -> Result<bool> {
        let result = sqlx::query("DELETE FROM meetings WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn count(pool: &PgPool) -> Result<i64> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM meetings")
            .fetch_one(pool)
            .await?;

        Ok(count)
    }
}
