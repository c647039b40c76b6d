use roster_core::{api::client::HttpRecordStore, RecordStore, ReqwestTransport};
use std::sync::Arc;

const DEFAULT_ENDPOINT: &str = "http://localhost:5050";

pub struct Context {
    pub endpoint: String,
}

impl Context {
    /// `--endpoint` wins over `ROSTER_ENDPOINT`, which wins over the default.
    pub fn new(endpoint: Option<&String>) -> Self {
        let endpoint = match endpoint {
            Some(endpoint) => endpoint.to_owned(),
            None => dotenvy::var("ROSTER_ENDPOINT").unwrap_or_else(|_| DEFAULT_ENDPOINT.to_owned()),
        };

        Self { endpoint }
    }

    pub fn record_store(&self) -> anyhow::Result<Arc<dyn RecordStore>> {
        let transport = ReqwestTransport::new(&self.endpoint)?;

        Ok(Arc::new(HttpRecordStore::new(transport)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_overrides_environment() {
        let endpoint = "http://roster.internal:8080".to_owned();
        let context = Context::new(Some(&endpoint));

        assert_eq!(context.endpoint, endpoint);
        assert!(context.record_store().is_ok());
    }

    #[test]
    fn test_bad_endpoint_is_rejected() {
        let endpoint = "not a url".to_owned();
        let context = Context::new(Some(&endpoint));

        assert!(context.record_store().is_err());
    }
}
