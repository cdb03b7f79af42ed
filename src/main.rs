use std::sync::Arc;

use clap::Parser;
use httpod::cli_arguments::CliArguments;
use httpod::relay_service::reqwest_relay_service::ReqwestRelayService;
use httpod::{ServerState, router};
use tracing::info;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args: CliArguments = CliArguments::parse();

    let tcp_listener =
        tokio::net::TcpListener::bind((args.bind_address.as_str(), args.port)).await?;

    info!("Server started on {}:{}", args.bind_address, args.port);

    let state = ServerState {
        relay: Arc::new(ReqwestRelayService::new(args.transport_config())),
    };

    axum::serve(tcp_listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!("Cannot listen for shutdown signal: {err}");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
