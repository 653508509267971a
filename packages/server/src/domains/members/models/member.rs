use anyhow::Result;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

/// Member model - SQL persistence layer
///
/// `image` and `display_order` are nullable: both columns were added after
/// launch (see migrations 0002/0003) and older rows never set them.
#[derive(sqlx::FromRow, Debug, Clone)]
pub struct Member {
    pub id: Uuid,
    pub name: String,
    pub role: String,
    pub comment: Option<String>,
    pub image: Option<String>,
    pub instagram: Option<String>,
    pub facebook: Option<String>,
    pub linkedin: Option<String>,
    pub display_order: Option<i32>,
    pub created_at: DateTime<Utc>,
}

/// Fields accepted when creating or updating a member.
#[derive(Debug, Clone, Default)]
pub struct NewMember {
    pub name: String,
    pub role: String,
    pub comment: Option<String>,
    pub image: Option<String>,
    pub instagram: Option<String>,
    pub facebook: Option<String>,
    pub linkedin: Option<String>,
    pub display_order: Option<i32>,
}

impl Member {
    /// Find all members, oldest first.
    ///
    /// Presentation order is resolved afterwards (see ordering module);
    /// created_at ascending is the stable base order.
    pub async fn find_all(pool: &PgPool) -> Result<Vec<Self>> {
        sqlx::query_as::<_, Self>("SELECT * FROM members ORDER BY created_at ASC")
            .fetch_all(pool)
            .await
            .map_err(Into::into)
    }

    /// Insert new member
    pub async fn insert(new: &NewMember, pool: &PgPool) -> Result<Self> {
        sqlx::query_as::<_, Self>(
            "INSERT INTO members (
                name, role, comment, image, instagram, facebook, linkedin, display_order
             )
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING *",
        )
        .bind(&new.name)
        .bind(&new.role)
        .bind(&new.comment)
        .bind(&new.image)
        .bind(&new.instagram)
        .bind(&new.facebook)
        .bind(&new.linkedin)
        .bind(new.display_order)
        .fetch_one(pool)
        .await
        .map_err(Into::into)
    }

    /// Update an existing member, replacing all editable fields.
    /// Returns None if the member does not exist.
    pub async fn update(id: Uuid, new: &NewMember, pool: &PgPool) -> Result<Option<Self>> {
        sqlx::query_as::<_, Self>(
            "UPDATE members
             SET name = $2,
                 role = $3,
                 comment = $4,
                 image = $5,
                 instagram = $6,
                 facebook = $7,
                 linkedin = $8,
                 display_order = $9
             WHERE id = $1
             RETURNING *",
        )
        .bind(id)
        .bind(&new.name)
        .bind(&new.role)
        .bind(&new.comment)
        .bind(&new.image)
        .bind(&new.instagram)
        .bind(&new.facebook)
        .bind(&new.linkedin)
        .bind(new.display_order)
        .fetch_optional(pool)
        .await
        .map_err(Into::into)
    }

    /// Delete a member. Returns true if a row was removed.
    pub async fn delete(id: Uuid, pool: &PgPool) -> Result<bool> {
        let result = sqlx::query("DELETE FROM members WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Count members (used by startup seeding).
    pub async fn count(pool: &PgPool) -> Result<i64> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM members")
            .fetch_one(pool)
            .await?;

        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_member_struct() {
        // Just verify struct compiles
        let member = Member {
            id: Uuid::new_v4(),
            name: "김지수".to_string(),
            role: "프로젝트 리더".to_string(),
            comment: Some("함께 배우는 즐거움을 나누고 싶어요".to_string()),
            image: None,
            instagram: Some("#".to_string()),
            facebook: None,
            linkedin: Some("#".to_string()),
            display_order: None,
            created_at: Utc::now(),
        };

        assert_eq!(member.role, "프로젝트 리더");
    }
}
