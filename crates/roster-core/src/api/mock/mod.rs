mod record;

pub use record::MockRecordStore;
