use crate::store::StoreError;
use crate::validation::ValidationError;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: String },

    #[error("Duplicate id: {entity} with id {id} already exists")]
    DuplicateId { entity: &'static str, id: String },

    #[error("Store unavailable: {0}")]
    Unavailable(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl CoreError {
    /// Lift a store failure into the domain taxonomy for the given entity.
    pub fn from_store(entity: &'static str, err: StoreError) -> Self {
        match err {
            StoreError::DuplicateId(id) => CoreError::DuplicateId { entity, id },
            StoreError::Unavailable(msg) => CoreError::Unavailable(msg),
            StoreError::Internal(msg) => CoreError::Internal(msg),
        }
    }
}
