pub mod api;
pub mod controller;
mod model;
mod store;
mod transport;
pub mod validation;

pub use model::{Level, NewRecord, Record};
pub use store::{RecordStore, StoreError};
pub use transport::{ReqwestTransport, Transport, TransportError, TransportRequest, TransportResponse};
