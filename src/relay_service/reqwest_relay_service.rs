use async_trait::async_trait;
use http::{HeaderMap, HeaderName, HeaderValue};
use tracing::info;

use crate::call_descriptor::call_descriptor::{CallDescriptor, CallDescriptorHeaders};
use crate::relay_service::{
    call_result::{CallResult, collect_headers},
    relay_service::RelayService,
    relay_service_error::RelayServiceError,
    shared_transport::{SharedTransport, TransportConfig},
};

pub struct ReqwestRelayService {
    transport: SharedTransport,
}

impl ReqwestRelayService {
    pub fn new(config: TransportConfig) -> Self {
        Self {
            transport: SharedTransport::new(config),
        }
    }

    pub fn transport(&self) -> &SharedTransport {
        &self.transport
    }

    async fn build_request(
        &self,
        descriptor: CallDescriptor,
    ) -> Result<reqwest::Request, RelayServiceError> {
        let client = self.transport.client().await?;

        let method = reqwest::Method::from_bytes(descriptor.method.as_bytes()).map_err(|e| {
            RelayServiceError::RequestConstructionFailed(format!(
                "method {:?}: {e}",
                descriptor.method
            ))
        })?;

        let headers = HeaderMap::try_from(&descriptor.extra_headers)?;

        let mut request_builder = client
            .request(method, descriptor.target)
            .headers(headers)
            .timeout(self.transport.config().call_timeout);

        if let Some(body) = descriptor.body {
            request_builder = request_builder.body(body);
        }

        request_builder
            .build()
            .map_err(|e| RelayServiceError::from_send(&e))
    }
}

impl Default for ReqwestRelayService {
    fn default() -> Self {
        Self::new(TransportConfig::default())
    }
}

#[async_trait]
impl RelayService for ReqwestRelayService {
    async fn execute(&self, descriptor: CallDescriptor) -> Result<CallResult, RelayServiceError> {
        info!("Relaying {} {}", descriptor.method, descriptor.target);

        let request = self.build_request(descriptor).await?;
        let client = self.transport.client().await?;

        let response = client
            .execute(request)
            .await
            .map_err(|e| RelayServiceError::from_send(&e))?;

        let status_code = response.status().as_u16();

        let final_url = response.url();
        let uri = match final_url.query() {
            Some(query) => format!("{}?{}", final_url.path(), query),
            None => final_url.path().to_string(),
        };

        let headers = collect_headers(response.headers());

        // Reading the body to the end hands the connection back to the pool.
        let body = response
            .bytes()
            .await
            .map_err(|e| RelayServiceError::ResponseBodyUnreadable(e.to_string()))?;

        Ok(CallResult {
            status_code,
            uri,
            headers,
            body: String::from_utf8_lossy(&body).into_owned(),
        })
    }
}

impl<'a> TryFrom<&'a CallDescriptorHeaders> for HeaderMap {
    type Error = RelayServiceError;

    fn try_from(h: &'a CallDescriptorHeaders) -> Result<Self, Self::Error> {
        let mut header_map = HeaderMap::new();
        for (k, v) in h.iter() {
            let name = HeaderName::from_bytes(k.as_bytes()).map_err(|e| {
                RelayServiceError::RequestConstructionFailed(format!("header name {k:?}: {e}"))
            })?;
            let value = HeaderValue::from_str(v).map_err(|e| {
                RelayServiceError::RequestConstructionFailed(format!("header {k:?} value: {e}"))
            })?;
            header_map.append(name, value);
        }
        Ok(header_map)
    }
}
