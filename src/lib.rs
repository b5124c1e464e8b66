pub mod api;
pub mod config;
pub mod screening;
pub mod vision;

use tracing_subscriber::EnvFilter;

use crate::api::{start_server_on, ApiContext, ServerError};
use crate::config::ServerConfig;

/// Serve the screening API until Ctrl-C.
pub async fn run() -> Result<(), ServerError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    tracing::info!(
        "{} starting v{} ({})",
        config::APP_NAME,
        config::APP_VERSION,
        config::ENGINE_VERSION
    );

    let server_config = ServerConfig::from_env()?;
    let bind_addr = server_config.bind_addr;
    let server = start_server_on(ApiContext::new(server_config), bind_addr).await?;

    tracing::info!(addr = %server.session.server_addr, "Listening");

    let signal = tokio::signal::ctrl_c().await.map_err(ServerError::Signal);
    server.stop().await;
    signal
}
