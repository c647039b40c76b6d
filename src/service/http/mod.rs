use axum::{extract::Extension, routing::get, Router};
use hyper::{Body, Request};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::services::RecordService;

pub mod health;
pub mod record;

pub fn http_router(record_service: Arc<RecordService>) -> Router {
    let tracing_layer =
        TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http",
                http.method = %request.method(),
                http.url = %request.uri(),
            )
        });

    Router::new()
        .route("/health", get(health::health))
        .route("/record", get(record::list).post(record::create))
        .route(
            "/record/:id",
            get(record::get_by_id)
                .patch(record::update)
                .delete(record::delete),
        )
        .layer(
            ServiceBuilder::new()
                .layer(tracing_layer)
                .layer(Extension(record_service)),
        )
}
