//! Adds the late-arriving `image` and `display_order` columns to `members`.
//!
//! Idempotent: columns that already exist are reported, not re-created.

use anyhow::Result;
use serde::Serialize;
use sqlx::PgPool;

#[derive(Debug, Clone, Serialize)]
pub struct MemberColumnsReport {
    pub image_added: bool,
    pub display_order_added: bool,
}

async fn column_exists(pool: &PgPool, column: &str) -> Result<bool> {
    let (exists,): (bool,) = sqlx::query_as(
        "SELECT EXISTS (
             SELECT 1 FROM information_schema.columns
             WHERE table_name = 'members' AND column_name = $1
         )",
    )
    .bind(column)
    .fetch_one(pool)
    .await?;

    Ok(exists)
}

pub async fn ensure_member_columns(pool: &PgPool) -> Result<MemberColumnsReport> {
    let had_image = column_exists(pool, "image").await?;
    let had_display_order = column_exists(pool, "display_order").await?;

    sqlx::query("ALTER TABLE members ADD COLUMN IF NOT EXISTS image TEXT")
        .execute(pool)
        .await?;
    sqlx::query("ALTER TABLE members ADD COLUMN IF NOT EXISTS display_order INTEGER")
        .execute(pool)
        .await?;

    let report = MemberColumnsReport {
        image_added: !had_image,
        display_order_added: !had_display_order,
    };

    if report.image_added || report.display_order_added {
        tracing::info!(?report, "Member columns migration applied");
    }

    Ok(report)
}
