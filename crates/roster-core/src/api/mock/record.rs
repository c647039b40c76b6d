use async_trait::async_trait;
use std::sync::{
    atomic::{AtomicBool, AtomicUsize, Ordering},
    Mutex, MutexGuard,
};

use crate::{NewRecord, Record, RecordStore, StoreError};

/// In-memory record store for exercising the controllers.
///
/// Ids are handed out sequentially starting at "1". Flipping `set_unavailable`
/// makes every operation fail as if the server could not be reached.
#[derive(Debug, Default)]
pub struct MockRecordStore {
    records: Mutex<Vec<Record>>,
    next_id: AtomicUsize,
    unavailable: AtomicBool,
    calls: AtomicUsize,
}

impl MockRecordStore {
    pub fn with_records(records: Vec<Record>) -> Self {
        let mut store = MockRecordStore::default();
        store.next_id.store(records.len(), Ordering::SeqCst);
        *store.records.get_mut().unwrap_or_else(|err| err.into_inner()) = records;

        store
    }

    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    /// Number of operations that reached the store, failed ones included.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn snapshot(&self) -> Vec<Record> {
        match self.records.lock() {
            Ok(records) => records.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    fn enter(&self) -> Result<MutexGuard<Vec<Record>>, StoreError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if self.unavailable.load(Ordering::SeqCst) {
            return Err(StoreError::Transport("connection refused".to_string()));
        }

        self.records
            .lock()
            .map_err(|_| StoreError::Transport("failed to acquire lock".to_string()))
    }
}

#[async_trait]
impl RecordStore for MockRecordStore {
    async fn create(&self, new_record: NewRecord) -> Result<Record, StoreError> {
        let mut records = self.enter()?;

        let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        let record = new_record.with_id(&id.to_string());
        records.push(record.clone());

        Ok(record)
    }

    async fn read(&self, id: &str) -> Result<Record, StoreError> {
        let records = self.enter()?;

        records
            .iter()
            .find(|record| record.id == id)
            .cloned()
            .ok_or_else(|| StoreError::not_found(id))
    }

    async fn read_all(&self) -> Result<Vec<Record>, StoreError> {
        let records = self.enter()?;

        Ok(records.clone())
    }

    async fn update(&self, id: &str, fields: NewRecord) -> Result<(), StoreError> {
        let mut records = self.enter()?;

        match records.iter_mut().find(|record| record.id == id) {
            Some(record) => {
                *record = fields.with_id(id);
                Ok(())
            }
            None => Err(StoreError::not_found(id)),
        }
    }

    async fn delete(&self, id: &str) -> Result<(), StoreError> {
        let mut records = self.enter()?;

        match records.iter().position(|record| record.id == id) {
            Some(index) => {
                records.remove(index);
                Ok(())
            }
            None => Err(StoreError::not_found(id)),
        }
    }
}
