//! Startup check of the built site against the client's image contract.
//!
//! Missing images are not fatal: the client swaps in remote placeholders.
//! They are still worth a warning since every page load pays the 404.

#[cfg(test)]
#[path = "assets_test.rs"]
mod assets_test;

use std::path::{Path, PathBuf};

use flashfy_client::content::assets::IMAGE_ASSETS;

/// On-disk location of a site-relative asset path (`/images/hero.jpg`).
pub fn asset_file(site_dir: &Path, asset_path: &str) -> PathBuf {
    site_dir.join(asset_path.trim_start_matches('/'))
}

/// Image paths from the contract that are absent under `site_dir`.
pub fn missing_images(site_dir: &Path) -> Vec<&'static str> {
    IMAGE_ASSETS
        .iter()
        .map(|asset| asset.path)
        .filter(|path| !asset_file(site_dir, path).is_file())
        .collect()
}

/// Log the state of the site directory. Never fails startup.
pub fn check_site(site_dir: &Path) {
    if !site_dir.join("index.html").is_file() {
        tracing::warn!(site_dir = %site_dir.display(), "index.html not found; build the client with trunk first");
    }
    let missing = missing_images(site_dir);
    if missing.is_empty() {
        tracing::info!(count = IMAGE_ASSETS.len(), "all site images present");
        return;
    }
    for path in &missing {
        tracing::warn!(%path, "site image missing; client will use its placeholder");
    }
}
