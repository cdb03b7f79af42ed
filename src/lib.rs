pub mod call_descriptor;
pub mod cli_arguments;
pub mod relay_service;
pub mod request_id;
pub mod route;

use std::sync::Arc;

use axum::extract::Request;
use axum::{Router, routing::get};
use tower_http::request_id::{PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::{DefaultOnResponse, TraceLayer};

use crate::relay_service::relay_service::RelayService;
use crate::request_id::{HttpodRequestId, UNKNOWN_REQUEST_ID, X_REQUEST_ID};
use crate::route::{health::health, relay::relay};

#[derive(Clone)]
pub struct ServerState {
    pub relay: Arc<dyn RelayService>,
}

pub fn router(server_state: ServerState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/proxy", get(relay))
        .with_state(server_state)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<_>| {
                    let request_id = request
                        .headers()
                        .get(X_REQUEST_ID)
                        .and_then(|v| v.to_str().ok())
                        .unwrap_or(UNKNOWN_REQUEST_ID);

                    tracing::info_span!(
                        "http_request",
                        method = %request.method(),
                        uri = %request.uri(),
                        request_id = %request_id,
                    )
                })
                .on_response(DefaultOnResponse::new().include_headers(true)),
        )
        .layer(PropagateRequestIdLayer::new(X_REQUEST_ID))
        .layer(SetRequestIdLayer::new(
            X_REQUEST_ID.clone(),
            HttpodRequestId::default(),
        ))
}
