//! In-process [`RecordStore`].

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use super::{RecordStore, StoreError};
use crate::diary::{DiaryDocument, NewDiaryDocument};

/// Record store held in memory, in insertion order.
#[derive(Debug, Default)]
pub struct InMemoryRecordStore {
    documents: RwLock<Vec<DiaryDocument>>,
}

impl InMemoryRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from existing documents, taken as already persisted.
    pub fn with_documents(documents: Vec<DiaryDocument>) -> Self {
        Self {
            documents: RwLock::new(documents),
        }
    }

    pub async fn len(&self) -> usize {
        self.documents.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.documents.read().await.is_empty()
    }
}

#[async_trait]
impl RecordStore for InMemoryRecordStore {
    async fn find_all_sorted_by_date_desc(&self) -> Result<Vec<DiaryDocument>, StoreError> {
        let mut documents = self.documents.read().await.clone();
        // `sort_by` is stable, so equal dates stay in insertion order.
        documents.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(documents)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<DiaryDocument>, StoreError> {
        let documents = self.documents.read().await;
        Ok(documents.iter().find(|d| d.id == id).cloned())
    }

    async fn insert(&self, fields: &NewDiaryDocument) -> Result<DiaryDocument, StoreError> {
        let mut documents = self.documents.write().await;
        if documents.iter().any(|d| d.id == fields.id) {
            return Err(StoreError::DuplicateId(fields.id.clone()));
        }
        let document = DiaryDocument::stamped(fields.clone(), Utc::now());
        documents.push(document.clone());
        Ok(document)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
