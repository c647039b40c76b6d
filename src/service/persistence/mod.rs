use async_trait::async_trait;
use roster_core::Record;
use std::fmt::Debug;

pub mod memory;
pub mod relational;

#[async_trait]
pub trait Persistence<Model>: Debug + Send + Sync {
    async fn create(&self, model: &Model) -> anyhow::Result<u64>;
    async fn delete(&self, id: &str) -> anyhow::Result<u64>;
    async fn get_by_id(&self, id: &str) -> anyhow::Result<Option<Model>>;
    async fn list(&self) -> anyhow::Result<Vec<Model>>;
    async fn update(&self, model: &Model) -> anyhow::Result<u64>;
}

pub trait PersistableModel: Clone + Debug + Send + Sync {
    fn get_id(&self) -> &str;
}

impl PersistableModel for Record {
    fn get_id(&self) -> &str {
        &self.id
    }
}
