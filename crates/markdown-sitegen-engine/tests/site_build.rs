use std::{fs, path::Path};

use markdown_sitegen_engine::{IoError, SiteError, SiteOptions, build_site};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

fn write(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn site_options(root: &Path, base_path: &str) -> SiteOptions {
    SiteOptions {
        content_dir: root.join("content"),
        static_dir: root.join("static"),
        template_path: root.join("template.html"),
        output_dir: root.join("public"),
        base_path: base_path.to_string(),
    }
}

fn sample_site() -> TempDir {
    let root = TempDir::new().unwrap();
    write(root.path(), "static/index.css", "body { margin: 0; }");
    write(root.path(), "static/images/logo.png", "png bytes");
    write(
        root.path(),
        "template.html",
        r#"<html><head><title>{{ Title }}</title><link href="/index.css" rel="stylesheet"></head><body>{{ Content }}</body></html>"#,
    );
    write(root.path(), "content/index.md", "# Home\n\nRead the [blog](/blog/post).");
    write(root.path(), "content/blog/post.md", "# A post\n\n- one\n- two");
    write(root.path(), "public/stale.html", "from a previous build");
    root
}

#[test]
fn builds_whole_site() {
    let root = sample_site();

    let pages = build_site(&site_options(root.path(), "/")).unwrap();

    let public = root.path().join("public");
    assert_eq!(pages, 2);
    assert_eq!(
        fs::read_to_string(public.join("index.css")).unwrap(),
        "body { margin: 0; }"
    );
    assert!(public.join("images/logo.png").exists());
    assert!(!public.join("stale.html").exists());
    assert_eq!(
        fs::read_to_string(public.join("index.html")).unwrap(),
        r#"<html><head><title>Home</title><link href="/index.css" rel="stylesheet"></head><body><div><h1>Home</h1><p>Read the <a href="/blog/post">blog</a>.</p></div></body></html>"#
    );
    assert_eq!(
        fs::read_to_string(public.join("blog/post.html")).unwrap(),
        r#"<html><head><title>A post</title><link href="/index.css" rel="stylesheet"></head><body><div><h1>A post</h1><ul><li>one</li><li>two</li></ul></div></body></html>"#
    );
}

#[test]
fn base_path_rewrites_template_and_content() {
    let root = sample_site();

    build_site(&site_options(root.path(), "/my-site/")).unwrap();

    let index = fs::read_to_string(root.path().join("public/index.html")).unwrap();
    assert!(index.contains(r#"<link href="/my-site/index.css""#));
    assert!(index.contains(r#"<a href="/my-site/blog/post">blog</a>"#));
}

#[test]
fn missing_static_dir_fails() {
    let root = sample_site();
    fs::remove_dir_all(root.path().join("static")).unwrap();

    let err = build_site(&site_options(root.path(), "/")).unwrap_err();

    assert!(matches!(err, SiteError::Io(IoError::InvalidDir(_))));
}

#[test]
fn malformed_page_aborts_build() {
    let root = sample_site();
    write(root.path(), "content/broken.md", "# Broken\n\nan **unclosed bold");

    let err = build_site(&site_options(root.path(), "/")).unwrap_err();

    assert!(matches!(err, SiteError::Convert { ref path, .. } if path.ends_with("broken.md")));
    assert!(err.to_string().contains("broken.md"));
}

#[test]
fn output_dir_equal_to_static_dir_is_rejected() {
    let root = sample_site();
    let options = SiteOptions {
        output_dir: root.path().join("static"),
        ..site_options(root.path(), "/")
    };

    let err = build_site(&options).unwrap_err();

    assert!(matches!(err, SiteError::Io(IoError::OverlappingDirs { .. })));
    assert_eq!(
        fs::read_to_string(root.path().join("static/index.css")).unwrap(),
        "body { margin: 0; }"
    );
}

#[test]
fn output_dir_inside_static_dir_is_rejected() {
    let root = sample_site();
    let options = SiteOptions {
        output_dir: root.path().join("static/public"),
        ..site_options(root.path(), "/")
    };

    let err = build_site(&options).unwrap_err();

    assert!(matches!(err, SiteError::Io(IoError::OverlappingDirs { .. })));
    assert!(!root.path().join("static/public").exists());
}

#[test]
fn output_dir_holding_content_is_rejected() {
    let root = sample_site();
    let options = SiteOptions {
        output_dir: root.path().to_path_buf(),
        ..site_options(root.path(), "/")
    };

    let err = build_site(&options).unwrap_err();

    assert!(matches!(err, SiteError::Io(IoError::OverlappingDirs { .. })));
    assert!(root.path().join("content/index.md").exists());
}
