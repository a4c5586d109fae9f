//! Static host for the built Flashfy site.
//!
//! SYSTEM CONTEXT
//! ==============
//! The client is a fully static WASM bundle. This binary serves it, rewrites
//! every non-file path to `index.html` so deep links survive a reload, and
//! exposes `/healthz`. It holds no state and talks to no backend.

mod assets;
mod config;
mod routes;

use config::{ConfigError, ServerConfig};

#[derive(Debug, thiserror::Error)]
enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    if let Err(e) = run().await {
        tracing::error!(error = %e, "flashfy-server failed");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), StartupError> {
    match dotenvy::dotenv() {
        Ok(path) => tracing::debug!(path = %path.display(), "loaded .env"),
        Err(e) if e.not_found() => {}
        Err(e) => tracing::warn!(error = %e, "ignoring unreadable .env"),
    }

    let config = ServerConfig::from_env()?;
    assets::check_site(&config.site_dir);

    let app = routes::app(&config);
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;

    tracing::info!(port = config.port, site_dir = %config.site_dir.display(), "flashfy-server listening");
    axum::serve(listener, app).await?;
    Ok(())
}
