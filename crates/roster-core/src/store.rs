use async_trait::async_trait;

use crate::{NewRecord, Record};

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("record with id {id} not found")]
    NotFound { id: String },

    #[error("record store unavailable: {0}")]
    Transport(String),
}

impl StoreError {
    pub fn not_found(id: &str) -> Self {
        StoreError::NotFound { id: id.to_string() }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound { .. })
    }
}

/// The record collection as the controllers see it.
#[async_trait]
pub trait RecordStore: Send + Sync {
    async fn create(&self, new_record: NewRecord) -> Result<Record, StoreError>;
    async fn read(&self, id: &str) -> Result<Record, StoreError>;
    async fn read_all(&self) -> Result<Vec<Record>, StoreError>;
    async fn update(&self, id: &str, fields: NewRecord) -> Result<(), StoreError>;
    async fn delete(&self, id: &str) -> Result<(), StoreError>;
}
