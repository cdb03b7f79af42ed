use axum::extract::State;
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Response};
use tracing::{error, info, warn};

use crate::ServerState;
use crate::call_descriptor::{call_descriptor::CallDescriptor, call_metadata::CallMetadata};

/// Performs the backend call described by the inbound headers and answers
/// with its outcome as JSON.
pub async fn relay(State(state): State<ServerState>, headers: HeaderMap) -> Response {
    let descriptor = match CallDescriptor::build(CallMetadata::from(&headers)) {
        Ok(descriptor) => descriptor,
        Err(err) => {
            warn!("Rejected relay request: {err}");
            return (StatusCode::BAD_REQUEST, err.to_string()).into_response();
        }
    };

    let target = descriptor.target.clone();

    let result = match state.relay.execute(descriptor).await {
        Ok(result) => result,
        Err(err) => {
            error!("Relaying to {target} failed: {err}");
            return (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()).into_response();
        }
    };

    match result.to_json() {
        Ok(body) => {
            info!("Relayed to {target} with status {}", result.status_code);
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                body,
            )
                .into_response()
        }
        Err(err) => {
            error!("Serializing the result from {target} failed: {err}");
            (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()).into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;
    use std::sync::Arc;

    use axum::body::Bytes;
    use axum::extract::State;
    use axum::http::{HeaderMap, HeaderValue, StatusCode};
    use mockall::predicate::function;

    use crate::ServerState;
    use crate::call_descriptor::call_descriptor::CallDescriptor;
    use crate::relay_service::{
        call_result::CallResult, relay_service::MockRelayService,
        relay_service_error::RelayServiceError,
    };
    use crate::route::relay::relay;

    fn headers(pairs: &[(&'static str, &'static str)]) -> HeaderMap {
        let mut headers = HeaderMap::new();
        for (name, value) in pairs {
            headers.insert(*name, HeaderValue::from_static(*value));
        }
        headers
    }

    fn state(mock: MockRelayService) -> State<ServerState> {
        State(ServerState {
            relay: Arc::new(mock),
        })
    }

    async fn body_of(response: axum::response::Response) -> Bytes {
        axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn should_answer_with_the_call_result_as_json() {
        let mut mock = MockRelayService::default();

        mock.expect_execute()
            .with(function(|d: &CallDescriptor| {
                d.method == "POST"
                    && d.target.as_str() == "http://backend.local/echo"
                    && d.extra_headers.get("X-Test") == Some(&"1".to_string())
            }))
            .times(1)
            .returning(|_| {
                Ok(CallResult {
                    status_code: 200,
                    uri: "/echo".to_string(),
                    headers: BTreeMap::from([("X-Test".to_string(), vec!["1".to_string()])]),
                    body: "hello".to_string(),
                })
            });

        let response = relay(
            state(mock),
            headers(&[
                ("method", "post"),
                ("url", "http://backend.local/echo"),
                ("additionalheaders", r#"{"X-Test":"1"}"#),
            ]),
        )
        .await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get("content-type").unwrap(),
            "application/json"
        );

        let json: serde_json::Value = serde_json::from_slice(&body_of(response).await).unwrap();
        assert_eq!(json["StatusCode"], 200);
        assert_eq!(json["Headers"]["X-Test"][0], "1");
        assert_eq!(json["Body"], "hello");
    }

    #[tokio::test]
    async fn should_reject_an_invalid_target_without_relaying() {
        let mut mock = MockRelayService::default();
        mock.expect_execute().never();

        let response = relay(state(mock), headers(&[("url", "/only/a/path")])).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_of(response).await;
        assert!(String::from_utf8_lossy(&body).starts_with("Invalid query input"));
    }

    #[tokio::test]
    async fn should_reject_a_missing_target_without_relaying() {
        let mut mock = MockRelayService::default();
        mock.expect_execute().never();

        let response = relay(state(mock), HeaderMap::new()).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn should_report_relay_failures_as_server_errors() {
        let mut mock = MockRelayService::default();

        mock.expect_execute().returning(|_| {
            Err(RelayServiceError::BackendUnreachable(
                "connection refused".to_string(),
            ))
        });

        let response = relay(state(mock), headers(&[("url", "http://backend.local/")])).await;

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_of(response).await,
            Bytes::from_static(b"Backend unreachable: connection refused")
        );
    }
}
