use std::fs;

use super::*;

#[test]
fn asset_file_strips_leading_slash() {
    let site = Path::new("/srv/site");
    assert_eq!(asset_file(site, "/images/hero.jpg"), PathBuf::from("/srv/site/images/hero.jpg"));
}

#[test]
fn empty_site_reports_every_image() {
    let dir = tempfile::tempdir().unwrap();
    assert_eq!(missing_images(dir.path()).len(), IMAGE_ASSETS.len());
}

#[test]
fn present_images_are_not_reported() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir_all(dir.path().join("images")).unwrap();
    fs::write(dir.path().join("images/hero.jpg"), b"jpg").unwrap();
    fs::write(dir.path().join("images/Logo.jpg"), b"jpg").unwrap();

    let missing = missing_images(dir.path());
    assert!(!missing.contains(&"/images/hero.jpg"));
    assert!(!missing.contains(&"/images/Logo.jpg"));
    assert!(missing.contains(&"/images/ahu.jpg"));
    assert_eq!(missing.len(), IMAGE_ASSETS.len() - 2);
}

#[test]
fn complete_site_reports_nothing() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir_all(dir.path().join("images")).unwrap();
    for asset in IMAGE_ASSETS {
        fs::write(asset_file(dir.path(), asset.path), b"jpg").unwrap();
    }
    assert!(missing_images(dir.path()).is_empty());
}
