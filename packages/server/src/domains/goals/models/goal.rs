use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

/// Goal lifecycle status. Stored as the `goal_status` Postgres enum with
/// kebab-case labels matching the API representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "goal_status", rename_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum GoalStatus {
    Pending,
    InProgress,
    Completed,
}

/// Goal model - SQL persistence layer
#[derive(sqlx::FromRow, Debug, Clone)]
pub struct Goal {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    /// 0-100, clamped at the API boundary and checked by the schema.
    pub progress: i32,
    pub status: GoalStatus,
    pub tags: Vec<String>,
    pub author: String,
    pub updated_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewGoal {
    pub title: String,
    pub description: String,
    pub progress: i32,
    pub status: GoalStatus,
    pub tags: Vec<String>,
    pub author: String,
}

impl Goal {
    /// Find all goals, most recently updated first.
    pub async fn find_all(pool: &PgPool) -> Result<Vec<Self>> {
        sqlx::query_as::<_, Self>("SELECT * FROM goals ORDER BY updated_at DESC")
            .fetch_all(pool)
            .await
            .map_err(Into::into)
    }

    pub async fn insert(new: &NewGoal, pool: &PgPool) -> Result<Self> {
        sqlx::query_as::<_, Self>(
            "INSERT INTO goals (title, description, progress, status, tags, author)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING *",
        )
        .bind(&new.title)
        .bind(&new.description)
        .bind(new.progress)
        .bind(new.status)
        .bind(&new.tags)
        .bind(&new.author)
        .fetch_one(pool)
        .await
        .map_err(Into::into)
    }

    /// Update a goal. Bumps updated_at so the dashboard resorts it to the top.
    pub async fn update(id: Uuid, new: &NewGoal, pool: &PgPool) -> Result<Option<Self>> {
        sqlx::query_as::<_, Self>(
            "UPDATE goals
             SET title = $2,
                 description = $3,
                 progress = $4,
                 status = $5,
                 tags = $6,
                 author = $7,
                 updated_at = NOW()
             WHERE id = $1
             RETURNING *",
        )
        .bind(id)
        .bind(&new.title)
        .bind(&new.description)
        .bind(new.progress)
        .bind(new.status)
        .bind(&new.tags)
        .bind(&new.author)
        .fetch_optional(pool)
        .await
        .map_err(Into::into)
    }

    pub async fn delete(id: Uuid, pool: &PgPool) -> Result<bool> {
        let result = sqlx::query("DELETE FROM goals WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_serializes_kebab_case() {
        assert_eq!(
            serde_json::to_string(&GoalStatus::InProgress).unwrap(),
            "\"in-progress\""
        );
        let parsed: GoalStatus = serde_json::from_str("\"completed\"").unwrap();
        assert_eq!(parsed, GoalStatus::Completed);
    }
}
