use super::*;

#[test]
fn image_assets_live_under_image_dir() {
    for asset in IMAGE_ASSETS {
        assert!(asset.path.starts_with(&format!("{IMAGE_DIR}/")), "{}", asset.path);
    }
}

#[test]
fn image_assets_have_distinct_paths() {
    for (i, a) in IMAGE_ASSETS.iter().enumerate() {
        for b in &IMAGE_ASSETS[i + 1..] {
            assert_ne!(a.path, b.path);
        }
    }
}

#[test]
fn placeholders_differ_from_primary() {
    for asset in IMAGE_ASSETS {
        assert_ne!(asset.path, asset.placeholder);
        assert!(asset.placeholder.starts_with("https://"));
    }
}
