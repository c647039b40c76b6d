use roster_core::{NewRecord, Record};

use crate::persistence::Persistence;

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("{0}")]
    Invalid(String),

    #[error("record id {0} not found")]
    NotFound(String),

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

#[derive(Debug)]
pub struct RecordService {
    pub persistence: Box<dyn Persistence<Record>>,
}

impl RecordService {
    #[tracing::instrument(name = "service::record::create", skip(self))]
    pub async fn create(&self, new_record: NewRecord) -> Result<Record, ServiceError> {
        new_record
            .validate()
            .map_err(|err| ServiceError::Invalid(err.to_string()))?;

        let record_id = uuid::Uuid::new_v4().to_string();
        let record = new_record.with_id(&record_id);

        self.persistence.create(&record).await?;

        tracing::info!("record created: {:?}", record);

        Ok(record)
    }

    #[tracing::instrument(name = "service::record::get_by_id", skip(self))]
    pub async fn get_by_id(&self, record_id: &str) -> Result<Option<Record>, ServiceError> {
        Ok(self.persistence.get_by_id(record_id).await?)
    }

    #[tracing::instrument(name = "service::record::list", skip(self))]
    pub async fn list(&self) -> Result<Vec<Record>, ServiceError> {
        Ok(self.persistence.list().await?)
    }

    #[tracing::instrument(name = "service::record::update", skip(self))]
    pub async fn update(&self, record_id: &str, fields: NewRecord) -> Result<Record, ServiceError> {
        fields
            .validate()
            .map_err(|err| ServiceError::Invalid(err.to_string()))?;

        let record = fields.with_id(record_id);
        let updated_count = self.persistence.update(&record).await?;

        if updated_count == 0 {
            return Err(ServiceError::NotFound(record_id.to_string()));
        }

        tracing::info!("record updated: {:?}", record);

        Ok(record)
    }

    #[tracing::instrument(name = "service::record::delete", skip(self))]
    pub async fn delete(&self, record_id: &str) -> Result<(), ServiceError> {
        let deleted_count = self.persistence.delete(record_id).await?;

        if deleted_count == 0 {
            return Err(ServiceError::NotFound(record_id.to_string()));
        }

        tracing::info!("record deleted: {record_id}");

        Ok(())
    }
}
