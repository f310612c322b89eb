//! Protscope Server - Main entry point

use anyhow::Result;
use protscope_common::logging::{init_logging, LogConfig};
use tracing::info;

use protscope_server::{api, config::Config};

#[tokio::main]
async fn main() -> Result<()> {
    // Environment variables take precedence over these defaults
    let log_config = LogConfig::from_env_with(LogConfig {
        log_file_prefix: "protscope-server".to_string(),
        filter_directives: Some("protscope_server=debug,tower_http=debug".to_string()),
        ..LogConfig::default()
    })?;

    let _guard = init_logging(&log_config)?;

    info!("Starting Protscope Server");

    let config = Config::load()?;
    info!(
        "Configuration loaded - server will bind to {}:{}",
        config.server.host, config.server.port
    );

    api::serve(config).await
}
