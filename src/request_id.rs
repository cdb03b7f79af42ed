use http::{HeaderName, HeaderValue, Request};
use uuid::Uuid;

use tower_http::request_id::{MakeRequestId, RequestId};

pub const X_REQUEST_ID: HeaderName = HeaderName::from_static("x-request-id");
pub const UNKNOWN_REQUEST_ID: &str = "unknown";

#[derive(Clone, Default)]
pub struct HttpodRequestId {}

impl MakeRequestId for HttpodRequestId {
    fn make_request_id<B>(&mut self, _: &Request<B>) -> Option<RequestId> {
        HeaderValue::from_str(&Uuid::new_v4().to_string())
            .ok()
            .map(RequestId::new)
    }
}
