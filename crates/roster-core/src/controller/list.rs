use std::sync::Arc;

use crate::{Record, RecordStore, StoreError};

pub const LOAD_FAILED: &str = "Failed to fetch employee records. Please try again later.";

/// Local snapshot of the record collection.
///
/// The snapshot is a cache, not a live view: it starts stale, a successful
/// `load` makes it fresh, and any mutation this client makes (or learns
/// about through `invalidate`) makes it stale again. `refresh` refetches only
/// when stale, so the snapshot can lag the server by at most one mutation made
/// elsewhere until the next `load`.
pub struct ListController {
    store: Arc<dyn RecordStore>,

    records: Vec<Record>,
    is_loading: bool,
    error: Option<String>,
    stale: bool,
}

impl ListController {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self {
            store,
            records: Vec::new(),
            is_loading: false,
            error: None,
            stale: true,
        }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_stale(&self) -> bool {
        self.stale
    }

    pub fn invalidate(&mut self) {
        self.stale = true;
    }

    #[tracing::instrument(name = "controller::list::load", skip(self))]
    pub async fn load(&mut self) -> Result<(), StoreError> {
        self.is_loading = true;

        let result = self.store.read_all().await;

        let outcome = match result {
            Ok(records) => {
                self.records = records;
                self.error = None;
                self.stale = false;
                Ok(())
            }
            Err(err) => {
                tracing::error!("{err}");
                self.error = Some(LOAD_FAILED.to_string());
                Err(err)
            }
        };

        self.is_loading = false;

        outcome
    }

    pub async fn refresh(&mut self) -> Result<(), StoreError> {
        if !self.stale {
            return Ok(());
        }

        self.load().await
    }

    #[tracing::instrument(name = "controller::list::delete_record", skip(self))]
    pub async fn delete_record(&mut self, id: &str) -> Result<(), StoreError> {
        if let Err(err) = self.store.delete(id).await {
            tracing::error!("failed to delete record: {err}");
            return Err(err);
        }

        let before = self.records.len();
        self.records.retain(|record| record.id != id);

        if self.records.len() != before {
            self.stale = true;
        }

        Ok(())
    }
}
