//! Diary record service.
//!
//! The single path every entry point (REST and GraphQL alike) goes through:
//! validate, persist, normalize. Holds no state between calls beyond the
//! shared store handle.

use std::sync::Arc;

use crate::diary::{DiaryCandidate, DiaryRecord, SummaryRecord, DIARY_ENTITY};
use crate::error::CoreError;
use crate::normalize::{to_summary, to_wire};
use crate::store::{RecordStore, StoreError};
use crate::validation::validate;

/// Orchestrates diary creation and reads over a [`RecordStore`].
#[derive(Clone)]
pub struct DiaryRecordService {
    store: Arc<dyn RecordStore>,
}

impl DiaryRecordService {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    /// Validate and persist a new diary entry, returning its full projection.
    ///
    /// The store is not called when validation fails.
    pub async fn create(&self, candidate: &DiaryCandidate) -> Result<DiaryRecord, CoreError> {
        let fields = validate(candidate).inspect_err(|err| {
            tracing::debug!(error = %err, "Rejected site diary candidate");
        })?;

        let document = self
            .store
            .insert(&fields)
            .await
            .map_err(|err| store_failure("insert", err))?;

        tracing::info!(
            diary_id = %document.id,
            date = %document.date,
            "Site diary created"
        );

        Ok(to_wire(&document))
    }

    /// Summary projection of every entry, newest `date` first.
    pub async fn list(&self) -> Result<Vec<SummaryRecord>, CoreError> {
        let documents = self
            .store
            .find_all_sorted_by_date_desc()
            .await
            .map_err(|err| store_failure("list", err))?;

        Ok(documents.iter().map(to_summary).collect())
    }

    /// Full projection of every entry, same order as [`Self::list`].
    pub async fn list_full(&self) -> Result<Vec<DiaryRecord>, CoreError> {
        let documents = self
            .store
            .find_all_sorted_by_date_desc()
            .await
            .map_err(|err| store_failure("list", err))?;

        Ok(documents.iter().map(to_wire).collect())
    }

    /// Full projection of the entry with exactly this `id`.
    pub async fn get(&self, id: &str) -> Result<DiaryRecord, CoreError> {
        let document = self
            .store
            .find_by_id(id)
            .await
            .map_err(|err| store_failure("get", err))?
            .ok_or_else(|| CoreError::NotFound {
                entity: DIARY_ENTITY,
                id: id.to_string(),
            })?;

        Ok(to_wire(&document))
    }

    /// Whether the backing store currently answers.
    pub async fn store_healthy(&self) -> bool {
        self.store.ping().await.is_ok()
    }
}

fn store_failure(operation: &'static str, err: StoreError) -> CoreError {
    match &err {
        StoreError::DuplicateId(id) => {
            tracing::info!(diary_id = %id, "Site diary id already exists");
        }
        StoreError::Unavailable(_) | StoreError::Internal(_) => {
            tracing::error!(operation, error = %err, "Record store failure");
        }
    }
    CoreError::from_store(DIARY_ENTITY, err)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
