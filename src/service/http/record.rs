use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use roster_core::{NewRecord, Record};
use serde_json::json;
use std::sync::Arc;

use crate::services::{RecordService, ServiceError};

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let status = match &self {
            ServiceError::Invalid(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ServiceError::NotFound(_) => StatusCode::NOT_FOUND,
            ServiceError::Internal(err) => {
                tracing::error!("request failed: {err:#}");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

#[tracing::instrument(name = "http::record::list", skip_all)]
pub async fn list(
    Extension(service): Extension<Arc<RecordService>>,
) -> Result<Json<Vec<Record>>, ServiceError> {
    Ok(Json(service.list().await?))
}

#[tracing::instrument(name = "http::record::get_by_id", skip(service))]
pub async fn get_by_id(
    Extension(service): Extension<Arc<RecordService>>,
    Path(id): Path<String>,
) -> Result<Json<Record>, ServiceError> {
    match service.get_by_id(&id).await? {
        Some(record) => Ok(Json(record)),
        None => Err(ServiceError::NotFound(id)),
    }
}

#[tracing::instrument(name = "http::record::create", skip(service))]
pub async fn create(
    Extension(service): Extension<Arc<RecordService>>,
    Json(new_record): Json<NewRecord>,
) -> Result<(StatusCode, Json<Record>), ServiceError> {
    let record = service.create(new_record).await?;

    Ok((StatusCode::CREATED, Json(record)))
}

#[tracing::instrument(name = "http::record::update", skip(service))]
pub async fn update(
    Extension(service): Extension<Arc<RecordService>>,
    Path(id): Path<String>,
    Json(fields): Json<NewRecord>,
) -> Result<Json<Record>, ServiceError> {
    Ok(Json(service.update(&id, fields).await?))
}

#[tracing::instrument(name = "http::record::delete", skip(service))]
pub async fn delete(
    Extension(service): Extension<Arc<RecordService>>,
    Path(id): Path<String>,
) -> Result<StatusCode, ServiceError> {
    service.delete(&id).await?;

    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use axum::{body::Body, http::Request, Router};
    use roster_core::test::get_new_record_fixture;
    use tower::ServiceExt;

    use crate::{http::http_router, persistence::memory::MemoryPersistence};

    use super::*;

    fn router() -> Router {
        http_router(Arc::new(RecordService {
            persistence: Box::new(MemoryPersistence::<Record>::default()),
        }))
    }

    fn json_request(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn empty_request(method: &str, uri: &str) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    }

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = hyper::body::to_bytes(response.into_body()).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_create_then_list() {
        let router = router();

        let body = serde_json::to_value(get_new_record_fixture()).unwrap();
        let response = router
            .clone()
            .oneshot(json_request("POST", "/record", body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        let created: Record = serde_json::from_value(body_json(response).await).unwrap();

        let response = router
            .oneshot(empty_request("GET", "/record"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let listed: Vec<Record> = serde_json::from_value(body_json(response).await).unwrap();
        assert_eq!(listed, vec![created]);
    }

    #[tokio::test]
    async fn test_unknown_id_is_not_found() {
        let router = router();
        let body = serde_json::to_value(get_new_record_fixture()).unwrap();

        for request in [
            empty_request("GET", "/record/missing"),
            json_request("PATCH", "/record/missing", body),
            empty_request("DELETE", "/record/missing"),
        ] {
            let response = router.clone().oneshot(request).await.unwrap();
            assert_eq!(response.status(), StatusCode::NOT_FOUND);
        }
    }

    #[tokio::test]
    async fn test_invalid_body_is_unprocessable() {
        let router = router();

        let blank_name = json!({"name": " ", "position": "Engineer", "level": "Senior"});
        let response = router
            .clone()
            .oneshot(json_request("POST", "/record", blank_name))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body_json(response).await["error"], "name is required");

        let unknown_level = json!({"name": "Ana", "position": "Engineer", "level": "Principal"});
        let response = router
            .oneshot(json_request("POST", "/record", unknown_level))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_health() {
        let response = router()
            .oneshot(empty_request("GET", "/health"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let bytes = hyper::body::to_bytes(response.into_body()).await.unwrap();
        assert_eq!(&bytes[..], b"ok");
    }
}
