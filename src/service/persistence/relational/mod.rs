mod record;

pub use record::RecordRelationalPersistence;
