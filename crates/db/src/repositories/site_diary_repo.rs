//! Repository for the `site_diaries` table.

use sitediary_core::diary::NewDiaryDocument;
use sqlx::{PgExecutor, PgPool};

use crate::models::site_diary::SiteDiaryRow;

/// Column list for site_diaries queries.
const COLUMNS: &str = "pk, id, date, title, created_by, content, \
    weather_description, weather_temperature, attendees, attachments, created_at, updated_at";

/// Name of the unique constraint on the caller-supplied `id`.
pub const UNIQUE_ID_CONSTRAINT: &str = "uq_site_diaries_id";

/// Provides insert and read operations for site diaries.
pub struct SiteDiaryRepo;

impl SiteDiaryRepo {
    /// Insert a validated diary, returning the created row.
    ///
    /// Fails with a unique violation on [`UNIQUE_ID_CONSTRAINT`] when the id
    /// is taken.
    pub async fn create<'e, E>(
        executor: E,
        input: &NewDiaryDocument,
    ) -> Result<SiteDiaryRow, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let (weather_description, weather_temperature) = match &input.weather {
            Some(w) => (Some(w.description.as_str()), Some(w.temperature)),
            None => (None, None),
        };
        let query = format!(
            "INSERT INTO site_diaries
                (id, date, title, created_by, content,
                 weather_description, weather_temperature, attendees, attachments)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, SiteDiaryRow>(&query)
            .bind(&input.id)
            .bind(&input.date)
            .bind(&input.title)
            .bind(&input.created_by)
            .bind(&input.content)
            .bind(weather_description)
            .bind(weather_temperature)
            .bind(&input.attendees)
            .bind(&input.attachments)
            .fetch_one(executor)
            .await
    }

    /// Find a diary by its caller-supplied id.
    pub async fn find_by_id(pool: &PgPool, id: &str) -> Result<Option<SiteDiaryRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM site_diaries WHERE id = $1");
        sqlx::query_as::<_, SiteDiaryRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List every diary, newest `date` first, ties in insertion order.
    pub async fn list_by_date_desc(pool: &PgPool) -> Result<Vec<SiteDiaryRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM site_diaries ORDER BY date DESC, pk ASC");
        sqlx::query_as::<_, SiteDiaryRow>(&query)
            .fetch_all(pool)
            .await
    }

    /// Delete every diary. Returns the number of rows removed.
    pub async fn delete_all<'e, E>(executor: E) -> Result<u64, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let result = sqlx::query("DELETE FROM site_diaries")
            .execute(executor)
            .await?;
        Ok(result.rows_affected())
    }
}
