mod common;

use wwwd::error::ServeError;
use wwwd::files::{PathClass, load};

#[tokio::test]
async fn test_load_file() {
    let (_dir, site) = common::temp_site();
    let resolved = site.root.resolve("/index.html");

    let text = load(&resolved, PathClass::File, &site).await.unwrap();
    assert_eq!(text, "<p>hi</p>");
}

#[tokio::test]
async fn test_load_directory_reads_index() {
    let (_dir, site) = common::temp_site();

    let text = load(&site.root.resolve("/sub/"), PathClass::Directory, &site)
        .await
        .unwrap();
    assert_eq!(text, "<p>sub</p>");

    let text = load(&site.root.resolve("/"), PathClass::Directory, &site)
        .await
        .unwrap();
    assert_eq!(text, "<p>hi</p>");
}

#[tokio::test]
async fn test_load_missing_file() {
    let (_dir, site) = common::temp_site();

    let result = load(&site.root.resolve("/missing.css"), PathClass::File, &site).await;
    assert!(matches!(result, Err(ServeError::ResourceMissing { source: Some(_), .. })));
}

#[tokio::test]
async fn test_load_directory_without_index() {
    let (dir, site) = common::temp_site();
    std::fs::create_dir(dir.path().join("empty")).unwrap();

    let result = load(&site.root.resolve("/empty/"), PathClass::Directory, &site).await;
    assert!(matches!(result, Err(ServeError::ResourceMissing { .. })));
}

#[tokio::test]
async fn test_load_directory_named_like_a_file() {
    let (dir, site) = common::temp_site();
    std::fs::create_dir(dir.path().join("odd.html")).unwrap();

    let result = load(&site.root.resolve("/odd.html"), PathClass::File, &site).await;
    assert!(matches!(result, Err(ServeError::ResourceMissing { .. })));
}

#[tokio::test]
async fn test_load_non_utf8_file() {
    let (dir, site) = common::temp_site();
    std::fs::write(dir.path().join("bin.css"), [0xff, 0xfe, 0x00]).unwrap();

    let result = load(&site.root.resolve("/bin.css"), PathClass::File, &site).await;
    assert!(matches!(result, Err(ServeError::ResourceMissing { .. })));
}

#[tokio::test]
async fn test_load_rejects_other_classes() {
    let (_dir, site) = common::temp_site();

    for class in [PathClass::BadPath, PathClass::NotFound] {
        let result = load(&site.root.resolve("/index.html"), class, &site).await;
        assert!(matches!(result, Err(ServeError::InternalInvariantViolation(_))));
    }
}

#[tokio::test]
async fn test_load_nested_traversal_allowed_without_strict_containment() {
    let outer = tempfile::TempDir::new().unwrap();
    common::write(outer.path(), "secret.html", "top secret");
    common::write(outer.path(), "www/deep/index.html", "<p>deep</p>");
    let root = wwwd::files::DocumentRoot::new(outer.path().join("www").to_str().unwrap()).unwrap();
    let site = wwwd::site::Site::new(root);

    let text = load(&site.root.resolve("/deep/../../secret.html"), PathClass::File, &site)
        .await
        .unwrap();
    assert_eq!(text, "top secret");
}

#[tokio::test]
async fn test_load_strict_containment_blocks_nested_traversal() {
    let outer = tempfile::TempDir::new().unwrap();
    common::write(outer.path(), "secret.html", "top secret");
    common::write(outer.path(), "www/deep/index.html", "<p>deep</p>");
    let root = wwwd::files::DocumentRoot::new(outer.path().join("www").to_str().unwrap()).unwrap();
    let mut site = wwwd::site::Site::new(root);
    site.strict_containment = true;

    let result = load(&site.root.resolve("/deep/../../secret.html"), PathClass::File, &site).await;
    assert!(matches!(result, Err(ServeError::ResourceMissing { source: None, .. })));

    let text = load(&site.root.resolve("/deep/"), PathClass::Directory, &site)
        .await
        .unwrap();
    assert_eq!(text, "<p>deep</p>");
}
