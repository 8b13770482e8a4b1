//! Record store seam.
//!
//! The diary service only ever talks to persistence through [`RecordStore`].
//! `sitediary_db::PgRecordStore` is the production implementation;
//! [`memory::InMemoryRecordStore`] backs tests and the `memory` backend.

pub mod memory;

use async_trait::async_trait;

use crate::diary::{DiaryDocument, NewDiaryDocument};

/// Failure reported by a record store.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StoreError {
    /// A document with this `id` already exists.
    #[error("duplicate id: {0}")]
    DuplicateId(String),

    /// The store could not be reached (connection refused, pool timeout, ...).
    #[error("store unavailable: {0}")]
    Unavailable(String),

    /// Any other store-side failure.
    #[error("store error: {0}")]
    Internal(String),
}

/// Persistence for diary documents.
///
/// Implementations own uniqueness of `id`: `insert` must fail with
/// [`StoreError::DuplicateId`] atomically rather than overwrite.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Every document, newest `date` first; ties keep insertion order.
    async fn find_all_sorted_by_date_desc(&self) -> Result<Vec<DiaryDocument>, StoreError>;

    /// The document with exactly this `id`, if any.
    async fn find_by_id(&self, id: &str) -> Result<Option<DiaryDocument>, StoreError>;

    /// Persist a validated document and return it as stored.
    async fn insert(&self, fields: &NewDiaryDocument) -> Result<DiaryDocument, StoreError>;

    /// Cheap reachability check.
    async fn ping(&self) -> Result<(), StoreError>;
}
