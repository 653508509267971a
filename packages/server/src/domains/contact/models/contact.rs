use anyhow::Result;
use sqlx::PgPool;
use uuid::Uuid;

/// Contact info - singleton row in the `contact` table.
#[derive(sqlx::FromRow, Debug, Clone)]
pub struct Contact {
    pub id: Uuid,
    pub email: String,
    pub address: String,
    pub instagram: Option<String>,
    pub facebook: Option<String>,
    pub twitter: Option<String>,
}

impl Contact {
    /// Fetch the singleton row, if one has been created.
    pub async fn get(pool: &PgPool) -> Result<Option<Self>> {
        sqlx::query_as::<_, Self>("SELECT * FROM contact LIMIT 1")
            .fetch_optional(pool)
            .await
            .map_err(Into::into)
    }

    /// Replace the singleton: update the existing row or insert the first one.
    pub async fn upsert(
        email: &str,
        address: &str,
        instagram: Option<&str>,
        facebook: Option<&str>,
        twitter: Option<&str>,
        pool: &PgPool,
    ) -> Result<Self> {
        if let Some(existing) = Self::get(pool).await? {
            sqlx::query_as::<_, Self>(
                "UPDATE contact
                 SET email = $2, address = $3, instagram = $4, facebook = $5, twitter = $6
                 WHERE id = $1
                 RETURNING *",
            )
            .bind(existing.id)
            .bind(email)
            .bind(address)
            .bind(instagram)
            .bind(facebook)
            .bind(twitter)
            .fetch_one(pool)
            .await
            .map_err(Into::into)
        } else {
            sqlx::query_as::<_, Self>(
                "INSERT INTO contact (email, address, instagram, facebook, twitter)
                 VALUES ($1, $2, $3, $4, $5)
                 RETURNING *",
            )
            .bind(email)
            .bind(address)
            .bind(instagram)
            .bind(facebook)
            .bind(twitter)
            .fetch_one(pool)
            .await
            .map_err(Into::into)
        }
    }
}
