//! [`RecordStore`] backed by PostgreSQL.

use async_trait::async_trait;
use sitediary_core::diary::{DiaryDocument, NewDiaryDocument};
use sitediary_core::store::{RecordStore, StoreError};

use crate::repositories::site_diary_repo::UNIQUE_ID_CONSTRAINT;
use crate::repositories::SiteDiaryRepo;
use crate::DbPool;

/// Record store over the `site_diaries` table.
#[derive(Clone)]
pub struct PgRecordStore {
    pool: DbPool,
}

impl PgRecordStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RecordStore for PgRecordStore {
    async fn find_all_sorted_by_date_desc(&self) -> Result<Vec<DiaryDocument>, StoreError> {
        let rows = SiteDiaryRepo::list_by_date_desc(&self.pool)
            .await
            .map_err(|err| classify_sqlx_error(err, None))?;
        Ok(rows.into_iter().map(DiaryDocument::from).collect())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<DiaryDocument>, StoreError> {
        let row = SiteDiaryRepo::find_by_id(&self.pool, id)
            .await
            .map_err(|err| classify_sqlx_error(err, None))?;
        Ok(row.map(DiaryDocument::from))
    }

    async fn insert(&self, fields: &NewDiaryDocument) -> Result<DiaryDocument, StoreError> {
        let row = SiteDiaryRepo::create(&self.pool, fields)
            .await
            .map_err(|err| classify_sqlx_error(err, Some(fields.id.as_str())))?;
        Ok(row.into())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        crate::health_check(&self.pool)
            .await
            .map_err(|err| classify_sqlx_error(err, None))
    }
}

/// Classify a sqlx error into the store taxonomy.
///
/// - Unique violation (`23505`) on the id constraint maps to `DuplicateId`.
/// - Pool exhaustion, closed pools and transport failures map to `Unavailable`.
/// - Everything else maps to `Internal`.
pub fn classify_sqlx_error(err: sqlx::Error, inserting_id: Option<&str>) -> StoreError {
    match &err {
        sqlx::Error::Database(db_err)
            if db_err.code().as_deref() == Some("23505")
                && db_err.constraint() == Some(UNIQUE_ID_CONSTRAINT) =>
        {
            StoreError::DuplicateId(inserting_id.unwrap_or_default().to_string())
        }
        sqlx::Error::PoolTimedOut
        | sqlx::Error::PoolClosed
        | sqlx::Error::Io(_)
        | sqlx::Error::Tls(_)
        | sqlx::Error::WorkerCrashed => StoreError::Unavailable(err.to_string()),
        _ => StoreError::Internal(err.to_string()),
    }
}
