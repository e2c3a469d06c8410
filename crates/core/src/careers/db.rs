use sqlx::PgPool;
use uuid::Uuid;

use super::JobPosting;

/// Row type for sqlx deserialization from the `jobs` table.
#[derive(sqlx::FromRow)]
struct JobRow {
    id: Uuid,
    title: String,
    slug: String,
    description: String,
    location: String,
    #[sqlx(rename = "type")]
    job_type: String,
    created_at: chrono::DateTime<chrono::Utc>,
}

impl From<JobRow> for JobPosting {
    fn from(row: JobRow) -> Self {
        Self {
            id: row.id,
            title: row.title,
            slug: row.slug,
            description: row.description,
            location: row.location,
            job_type: row.job_type,
            created_at: row.created_at,
        }
    }
}

/// Fetch every posting, newest first.
pub async fn fetch_all(pool: &PgPool) -> Result<Vec<JobPosting>, sqlx::Error> {
    let rows: Vec<JobRow> = sqlx::query_as(
        "SELECT id, title, slug, description, location, type, created_at
         FROM jobs ORDER BY created_at DESC",
    )
    .fetch_all(pool)
    .await?;
    Ok(rows.into_iter().map(Into::into).collect())
}

/// Fetch the first posting with `slug`. Slugs are not guaranteed unique.
pub async fn fetch_by_slug(pool: &PgPool, slug: &str) -> Result<Option<JobPosting>, sqlx::Error> {
    let row: Option<JobRow> = sqlx::query_as(
        "SELECT id, title, slug, description, location, type, created_at
         FROM jobs WHERE slug = $1 ORDER BY created_at ASC LIMIT 1",
    )
    .bind(slug)
    .fetch_optional(pool)
    .await?;
    Ok(row.map(Into::into))
}
