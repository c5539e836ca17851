use std::io::Cursor;

use futures::executor::block_on;

use super::*;

#[test]
fn normalize_path_slash_normalization() {
    assert_eq!(normalize_rel_path("a/b.png").unwrap(), "a/b.png");
    assert_eq!(normalize_rel_path("a\\.\\b.png").unwrap(), "a/b.png");
    assert_eq!(normalize_rel_path("./frame//f.png").unwrap(), "frame/f.png");
    assert!(normalize_rel_path("../x.png").is_err());
    assert!(normalize_rel_path("/abs.png").is_err());
    assert!(normalize_rel_path("./").is_err());
}

fn write_png(dir: &std::path::Path, rel: &str) {
    let img = image::RgbaImage::from_raw(2, 1, vec![255, 0, 0, 255, 0, 0, 255, 255]).unwrap();
    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .unwrap();
    let path = dir.join(rel);
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(path, buf).unwrap();
}

#[test]
fn loads_and_caches_by_normalized_path() {
    let dir = tempfile::tempdir().unwrap();
    write_png(dir.path(), "frame/frame-effect.png");
    let source = FsAssetSource::new(dir.path());

    let img = block_on(source.load("frame/frame-effect.png")).unwrap();
    assert_eq!((img.width, img.height), (2, 1));

    std::fs::remove_file(dir.path().join("frame/frame-effect.png")).unwrap();
    let cached = block_on(source.load("./frame\\frame-effect.png")).unwrap();
    assert_eq!(cached, img);
}

#[test]
fn missing_and_corrupt_assets_are_asset_errors() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("bad.png"), b"nope").unwrap();
    let source = FsAssetSource::new(dir.path());

    let missing = block_on(source.load("missing.png")).unwrap_err();
    assert!(matches!(missing, CardError::AssetLoad(_)));
    let corrupt = block_on(source.load("bad.png")).unwrap_err();
    assert!(matches!(corrupt, CardError::AssetLoad(_)));
    let escaping = block_on(source.load("../etc/passwd")).unwrap_err();
    assert!(matches!(escaping, CardError::Validation(_)));
}
