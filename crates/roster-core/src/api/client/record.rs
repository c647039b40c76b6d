use async_trait::async_trait;
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::{
    NewRecord, Record, RecordStore, StoreError, Transport, TransportRequest, TransportResponse,
};

const RECORD_PATH: &str = "/record";

/// Record store reached over the JSON record endpoints.
pub struct HttpRecordStore<T: Transport> {
    transport: T,
}

impl<T: Transport> HttpRecordStore<T> {
    pub fn new(transport: T) -> Self {
        HttpRecordStore { transport }
    }

    async fn send(&self, request: TransportRequest, id: Option<&str>) -> Result<Option<Value>, StoreError> {
        let response = self
            .transport
            .send(request)
            .await
            .map_err(|err| StoreError::Transport(err.to_string()))?;

        check_status(&response, id)?;

        Ok(response.body.filter(|body| !body.is_null()))
    }
}

// ids are opaque, so `?`, `#` and `/` must not leak into the url structure
fn record_path(id: &str) -> String {
    format!("{RECORD_PATH}/{}", urlencoding::encode(id))
}

fn check_status(response: &TransportResponse, id: Option<&str>) -> Result<(), StoreError> {
    if response.is_success() {
        return Ok(());
    }

    match (response.status, id) {
        (404, Some(id)) => Err(StoreError::not_found(id)),
        (status, _) => Err(StoreError::Transport(format!(
            "server responded with status {status}"
        ))),
    }
}

fn decode<Model: DeserializeOwned>(body: Value) -> Result<Model, StoreError> {
    serde_json::from_value(body)
        .map_err(|err| StoreError::Transport(format!("malformed response body: {err}")))
}

fn encode(new_record: &NewRecord) -> Result<Value, StoreError> {
    serde_json::to_value(new_record)
        .map_err(|err| StoreError::Transport(format!("failed to encode record: {err}")))
}

#[async_trait]
impl<T: Transport> RecordStore for HttpRecordStore<T> {
    async fn create(&self, new_record: NewRecord) -> Result<Record, StoreError> {
        let request = TransportRequest::new(Method::POST, RECORD_PATH).with_body(encode(&new_record)?);

        match self.send(request, None).await? {
            Some(body) => decode(body),
            // the server echoes the stored record; without it the outcome is unknown
            None => Err(StoreError::Transport(
                "create succeeded without returning a record, it may already be stored".to_string(),
            )),
        }
    }

    async fn read(&self, id: &str) -> Result<Record, StoreError> {
        let request = TransportRequest::new(Method::GET, record_path(id));

        match self.send(request, Some(id)).await? {
            Some(body) => decode(body),
            None => Err(StoreError::not_found(id)),
        }
    }

    async fn read_all(&self) -> Result<Vec<Record>, StoreError> {
        let request = TransportRequest::new(Method::GET, RECORD_PATH);

        match self.send(request, None).await? {
            Some(body) => decode(body),
            None => Ok(Vec::new()),
        }
    }

    async fn update(&self, id: &str, fields: NewRecord) -> Result<(), StoreError> {
        let request = TransportRequest::new(Method::PATCH, record_path(id)).with_body(encode(&fields)?);

        self.send(request, Some(id)).await?;

        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<(), StoreError> {
        let request = TransportRequest::new(Method::DELETE, record_path(id));

        self.send(request, Some(id)).await?;

        Ok(())
    }
}
