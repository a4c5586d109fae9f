//! # flashfy-client
//!
//! Leptos + WASM frontend for the Flashfy sourcing site.
//!
//! Routing is fragment based (`#/product/ahu`), content is a static table,
//! and the two lead forms deliver through EmailJS or hand a prefilled
//! `mailto:` link to the local mail client when no credentials are configured.
//!
//! Build for the browser with the `csr` feature (Trunk does this through
//! `index.html`). Without it the crate compiles natively so the routing,
//! content, form and gateway logic can be unit tested.

pub mod app;
pub mod components;
pub mod config;
pub mod content;
pub mod net;
pub mod pages;
pub mod router;
pub mod state;
pub mod util;

/// WASM entry point: installs the panic hook and console logger, then mounts
/// the app on `<body>`.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    match console_log::init_with_level(log::Level::Debug) {
        Ok(()) => {}
        // Hot reload re-runs start; the logger from the first run stays installed.
        Err(err) => log::debug!("console logger already installed: {err}"),
    }
    leptos::mount::mount_to_body(app::App);
}
