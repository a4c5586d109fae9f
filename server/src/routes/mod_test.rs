use std::fs;
use std::path::Path;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;

use super::*;

const INDEX: &str = "<!DOCTYPE html><title>Flashfy</title>";

fn site() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    fs::write(root.join("index.html"), INDEX).unwrap();
    fs::write(root.join("flashfy-client.js"), "export default 1;").unwrap();
    fs::create_dir_all(root.join("images")).unwrap();
    fs::write(root.join("images/hero.jpg"), b"hero").unwrap();
    dir
}

fn router(root: &Path) -> Router {
    app(&ServerConfig { port: 0, site_dir: root.to_path_buf() })
}

async fn get_path(app: Router, path: &str) -> (StatusCode, String) {
    let req = Request::builder().uri(path).body(Body::empty()).unwrap();
    let resp = app.oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8_lossy(&bytes).into_owned())
}

#[tokio::test]
async fn healthz_is_ok() {
    let dir = site();
    let (status, _) = get_path(router(dir.path()), "/healthz").await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn root_serves_index() {
    let dir = site();
    let (status, body) = get_path(router(dir.path()), "/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, INDEX);
}

#[tokio::test]
async fn unknown_paths_rewrite_to_index_with_200() {
    let dir = site();
    for path in ["/about", "/product/ahu", "/deep/nested/link"] {
        let (status, body) = get_path(router(dir.path()), path).await;
        assert_eq!(status, StatusCode::OK, "{path}");
        assert_eq!(body, INDEX, "{path}");
    }
}

#[tokio::test]
async fn existing_files_are_served_as_is() {
    let dir = site();
    let (status, body) = get_path(router(dir.path()), "/flashfy-client.js").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "export default 1;");
}

#[tokio::test]
async fn present_image_is_served() {
    let dir = site();
    let (status, body) = get_path(router(dir.path()), "/images/hero.jpg").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "hero");
}

#[tokio::test]
async fn missing_image_is_404_not_index() {
    let dir = site();
    let (status, body) = get_path(router(dir.path()), "/images/ahu.jpg").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_ne!(body, INDEX);
}
