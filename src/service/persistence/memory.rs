use async_trait::async_trait;
use std::sync::{Arc, Mutex, MutexGuard};

use crate::persistence::{PersistableModel, Persistence};

/// Insertion-ordered collection held in process memory.
#[derive(Debug)]
pub struct MemoryPersistence<Model>
where
    Model: PersistableModel,
{
    models: Arc<Mutex<Vec<Model>>>,
}

#[async_trait]
impl<Model> Persistence<Model> for MemoryPersistence<Model>
where
    Model: PersistableModel + 'static,
{
    async fn create(&self, model: &Model) -> anyhow::Result<u64> {
        let mut locked_models = self.get_models_locked()?;

        if locked_models.iter().any(|m| m.get_id() == model.get_id()) {
            return Err(anyhow::anyhow!("model id {} already exists", model.get_id()));
        }

        locked_models.push(model.clone());

        Ok(1)
    }

    async fn delete(&self, model_id: &str) -> anyhow::Result<u64> {
        let mut locked_models = self.get_models_locked()?;

        let before = locked_models.len();
        locked_models.retain(|model| model.get_id() != model_id);

        Ok((before - locked_models.len()) as u64)
    }

    async fn get_by_id(&self, model_id: &str) -> anyhow::Result<Option<Model>> {
        let locked_models = self.get_models_locked()?;

        Ok(locked_models
            .iter()
            .find(|model| model.get_id() == model_id)
            .cloned())
    }

    async fn list(&self) -> anyhow::Result<Vec<Model>> {
        let locked_models = self.get_models_locked()?;

        Ok(locked_models.clone())
    }

    async fn update(&self, model: &Model) -> anyhow::Result<u64> {
        let mut locked_models = self.get_models_locked()?;

        match locked_models
            .iter_mut()
            .find(|existing| existing.get_id() == model.get_id())
        {
            Some(existing) => {
                *existing = model.clone();
                Ok(1)
            }
            None => Ok(0),
        }
    }
}

impl<Model> Default for MemoryPersistence<Model>
where
    Model: PersistableModel,
{
    fn default() -> Self {
        Self {
            models: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

impl<Model> MemoryPersistence<Model>
where
    Model: PersistableModel,
{
    fn get_models_locked(&self) -> anyhow::Result<MutexGuard<Vec<Model>>> {
        match self.models.lock() {
            Ok(locked_models) => Ok(locked_models),
            Err(_) => Err(anyhow::anyhow!("failed to acquire lock")),
        }
    }
}

#[cfg(test)]
mod tests {
    use roster_core::{
        test::{get_record_fixture, get_records_fixture},
        Level, Record,
    };

    use super::*;

    #[tokio::test]
    async fn test_create_get_delete() {
        let record_persistence = MemoryPersistence::<Record>::default();
        let record = get_record_fixture(None);

        record_persistence.create(&record).await.unwrap();

        let fetched_record = record_persistence
            .get_by_id(&record.id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(fetched_record, record);

        let deleted_records = record_persistence.delete(&record.id).await.unwrap();
        assert_eq!(deleted_records, 1);

        let deleted_records = record_persistence.delete(&record.id).await.unwrap();
        assert_eq!(deleted_records, 0);
    }

    #[tokio::test]
    async fn test_list_keeps_insertion_order() {
        let record_persistence = MemoryPersistence::<Record>::default();

        for record in get_records_fixture().iter().rev() {
            record_persistence.create(record).await.unwrap();
        }

        let ids: Vec<String> = record_persistence
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|record| record.id)
            .collect();
        assert_eq!(ids, vec!["3", "2", "1"]);
    }

    #[tokio::test]
    async fn test_duplicate_id_rejected() {
        let record_persistence = MemoryPersistence::<Record>::default();
        let record = get_record_fixture(None);

        record_persistence.create(&record).await.unwrap();
        assert!(record_persistence.create(&record).await.is_err());
    }

    #[tokio::test]
    async fn test_update() {
        let record_persistence = MemoryPersistence::<Record>::default();
        let mut record = get_record_fixture(None);
        record_persistence.create(&record).await.unwrap();

        record.level = Level::Senior;
        assert_eq!(record_persistence.update(&record).await.unwrap(), 1);

        let fetched_record = record_persistence
            .get_by_id(&record.id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(fetched_record.level, Level::Senior);

        let missing = get_record_fixture(Some("missing"));
        assert_eq!(record_persistence.update(&missing).await.unwrap(), 0);
    }
}
