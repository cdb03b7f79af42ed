use tracing::debug;

/// Liveness probe, independent of any backend.
pub async fn health() -> &'static str {
    debug!("Liveness probe answered");
    "PONG"
}
