use std::time::Duration;

use tokio::sync::OnceCell;
use tracing::info;

use crate::relay_service::relay_service_error::RelayServiceError;

#[derive(Debug, Clone, PartialEq)]
pub struct TransportConfig {
    pub max_idle_connections: usize,
    pub idle_timeout: Duration,
    pub call_timeout: Duration,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            max_idle_connections: 3,
            idle_timeout: Duration::from_secs(5),
            call_timeout: Duration::from_secs(30),
        }
    }
}

/// The one HTTP client every relayed call goes through.
///
/// Built on first use. Concurrent first calls wait on the same
/// initialization instead of racing to build their own client.
///
/// `max_idle_connections` bounds the idle pool per backend host, not in
/// total. Across many hosts the idle pool is only bounded by `idle_timeout`.
pub struct SharedTransport {
    config: TransportConfig,
    client: OnceCell<reqwest::Client>,
}

impl SharedTransport {
    pub fn new(config: TransportConfig) -> Self {
        Self {
            config,
            client: OnceCell::new(),
        }
    }

    pub fn config(&self) -> &TransportConfig {
        &self.config
    }

    pub fn is_initialized(&self) -> bool {
        self.client.initialized()
    }

    pub async fn client(&self) -> Result<&reqwest::Client, RelayServiceError> {
        self.client
            .get_or_try_init(|| async { self.build_client() })
            .await
    }

    fn build_client(&self) -> Result<reqwest::Client, RelayServiceError> {
        info!(
            "Building backend transport: {} idle connections per host, {:?} idle timeout",
            self.config.max_idle_connections, self.config.idle_timeout
        );

        reqwest::Client::builder()
            .pool_max_idle_per_host(self.config.max_idle_connections)
            .pool_idle_timeout(self.config.idle_timeout)
            .no_gzip()
            .no_brotli()
            .no_deflate()
            .build()
            .map_err(|e| {
                RelayServiceError::RequestConstructionFailed(format!(
                    "cannot build transport: {e}"
                ))
            })
    }
}

impl Default for SharedTransport {
    fn default() -> Self {
        Self::new(TransportConfig::default())
    }
}
