mod record;

pub use record::{RecordService, ServiceError};
