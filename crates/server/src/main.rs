//! HAL-FORMS demonstration server.
//!
//! Serves a todo list as HAL and HAL-FORMS documents.

use clap::Parser;
use hal_forms_rest::{ServerConfig, init_logging};
use hal_forms_server::create_app;
use tracing::info;

/// Starts the Axum HTTP server.
async fn serve(app: axum::Router, config: &ServerConfig) -> anyhow::Result<()> {
    let addr = config.socket_addr();
    info!(address = %addr, "Server listening");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::parse();
    init_logging(&config.log_level);

    if let Err(errors) = config.validate() {
        for error in &errors {
            eprintln!("Configuration error: {}", error);
        }
        std::process::exit(1);
    }

    info!(
        port = config.port,
        host = %config.host,
        base_url = %config.base_url,
        pretty_json = config.pretty_json,
        "Starting HAL-FORMS demo server"
    );

    let app = create_app(config.clone());
    serve(app, &config).await
}
