//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Three layers of lookup, in order:
//! - `/healthz` for load balancers.
//! - `/images/*` straight from disk with a real 404 when absent, so the
//!   client's `onerror` placeholder swap fires.
//! - everything else from the site root, falling back to `index.html` with
//!   `200` for paths that are not files (deep-link reloads).

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use tower_http::compression::CompressionLayer;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;
use flashfy_client::content::assets::IMAGE_DIR;

pub fn app(config: &ServerConfig) -> Router {
    let images = ServeDir::new(config.site_dir.join(IMAGE_DIR.trim_start_matches('/')));
    let site = ServeDir::new(&config.site_dir).fallback(ServeFile::new(config.index_file()));

    Router::new()
        .route("/healthz", get(healthz))
        .nest_service(IMAGE_DIR, images)
        .fallback_service(site)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
