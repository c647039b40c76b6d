mod record;

pub use record::HttpRecordStore;
