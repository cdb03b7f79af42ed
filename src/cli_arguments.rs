use std::time::Duration;

use clap::{Parser, command};

use crate::relay_service::shared_transport::TransportConfig;

#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
pub struct CliArguments {
    #[arg(short, long, env = "HTTPOD_PORT", default_value_t = 8080)]
    pub port: u16,

    #[arg(short, long, env = "HTTPOD_BIND_ADDRESS", default_value = "0.0.0.0")]
    pub bind_address: String,

    /// Idle backend connections kept per host
    #[arg(long, env = "HTTPOD_MAX_IDLE_CONNECTIONS", default_value_t = 3)]
    pub max_idle_connections: usize,

    #[arg(long, env = "HTTPOD_IDLE_TIMEOUT_SECS", default_value_t = 5)]
    pub idle_timeout_secs: u64,

    /// Deadline for a whole backend call, body included
    #[arg(long, env = "HTTPOD_CALL_TIMEOUT_SECS", default_value_t = 30)]
    pub call_timeout_secs: u64,
}

impl CliArguments {
    pub fn transport_config(&self) -> TransportConfig {
        TransportConfig {
            max_idle_connections: self.max_idle_connections,
            idle_timeout: Duration::from_secs(self.idle_timeout_secs),
            call_timeout: Duration::from_secs(self.call_timeout_secs),
        }
    }
}
