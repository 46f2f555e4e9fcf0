use std::fs;
use std::path::{Path, PathBuf};

use tempfile::{Builder, TempDir};

use super::scan::{Problem, RefKind, ScanOptions, SiteFileKind, normalize_ref, scan_content, should_ignore};
use super::{check_site, scan_site};
use crate::cli::CheckArgs;
use crate::config::{CheckLevel, EnhanceConfig};
use crate::utils::path::normalize_path;

/// Temp site root; the default `.tmp` prefix would be a hidden directory.
fn site_dir() -> TempDir {
    Builder::new().prefix("site").tempdir().unwrap()
}

fn write(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

/// A small built site with one of every kind of finding.
fn make_site() -> (TempDir, PathBuf) {
    let temp = site_dir();
    let root = normalize_path(temp.path());

    write(&root, "img/logo.png", "png");
    write(
        &root,
        "index.html",
        r##"<html><body>
          <a href="/about.html">About</a>
          <a href="//cdn.example.com/lib.js">CDN</a>
          <a href="#top">Top</a>
          <img src="img/logo.png" alt="">
          <img src="img/missing.png" alt="">
          <img src="https://example.com/remote.png">
          <img src="data:image/png;base64,AAAA">
          <img alt="" srcset="img/logo.png 1x, img/logo@2x.png 2x">
        </body></html>"##,
    );
    write(
        &root,
        "css/site.css",
        r#"body { background: url("../img/logo.png"); }
           .a { background: url(../../outside.png); }
           .b { mask: url('#mask'); }
           @font-face { src: url(fonts/a.woff2?v=1); }"#,
    );
    write(
        &root,
        "js/app.js",
        r#"const hero = "img/hero.webp"; const logo = '../img/logo.png'; const doc = "readme.txt";"#,
    );
    write(&root, "blog/post.html", "<p>no references</p>");

    (temp, root)
}

#[test]
fn test_normalize_ref() {
    assert_eq!(normalize_ref("  'img/a.png' "), "img/a.png");
    assert_eq!(normalize_ref("\"a.png?v=2\""), "a.png");
    assert_eq!(normalize_ref("a.svg#icon"), "a.svg");
    assert_eq!(normalize_ref("#only"), "");
}

#[test]
fn test_should_ignore() {
    let none: &[String] = &[];
    for reference in ["", "http://a", "https://a", "data:x", "mailto:a", "tel:1", "#x", "//cdn"] {
        assert!(should_ignore(reference, none), "{reference}");
    }
    assert!(!should_ignore("img/a.png", none));
    assert!(!should_ignore("/img/a.png", none));

    let extra = vec!["/cdn-cgi/".to_string()];
    assert!(should_ignore("/cdn-cgi/x.png", &extra));
}

#[test]
fn test_site_file_kind() {
    assert_eq!(SiteFileKind::from_path(Path::new("a/index.html")), Some(SiteFileKind::Html));
    assert_eq!(SiteFileKind::from_path(Path::new("style.CSS")), Some(SiteFileKind::Css));
    assert_eq!(SiteFileKind::from_path(Path::new("app.js")), Some(SiteFileKind::Js));
    assert_eq!(SiteFileKind::from_path(Path::new("logo.png")), None);
    assert_eq!(SiteFileKind::from_path(Path::new("Makefile")), None);
}

#[test]
fn test_scan_site_counts_files() {
    let (_temp, root) = make_site();
    let report = scan_site(&root, &EnhanceConfig::default());
    assert_eq!(report.html_files, 2);
    assert_eq!(report.css_files, 1);
    assert_eq!(report.js_files, 1);
}

#[test]
fn test_scan_site_findings() {
    let (_temp, root) = make_site();
    let report = scan_site(&root, &EnhanceConfig::default());

    let html = &report.broken["index.html"];
    let html: Vec<_> = html.iter().map(|b| (b.kind, b.reference.as_str(), b.problem)).collect();
    assert_eq!(
        html,
        [
            (RefKind::ImgSrc, "img/missing.png", Problem::Missing),
            (RefKind::Srcset, "img/logo@2x.png", Problem::Missing),
        ]
    );

    let css: Vec<_> = report.broken["css/site.css"]
        .iter()
        .map(|b| (b.reference.as_str(), b.problem))
        .collect();
    assert_eq!(
        css,
        [
            ("../../outside.png", Problem::OutsideRoot),
            ("fonts/a.woff2", Problem::Missing),
        ]
    );

    let js: Vec<_> = report.broken["js/app.js"]
        .iter()
        .map(|b| (b.kind, b.reference.as_str()))
        .collect();
    assert_eq!(js, [(RefKind::JsImage, "img/hero.webp")]);

    assert_eq!(report.leading_slash["index.html"], [r#"href="/about.html""#]);
    assert_eq!(report.leading_slash_count(), 1);
    assert_eq!(report.broken_count(), 5);
    assert!(!report.broken.contains_key("blog/post.html"));
}

#[test]
fn test_leading_slash_can_be_disabled() {
    let (_temp, root) = make_site();
    let mut config = EnhanceConfig::default();
    config.check.leading_slash = false;
    let report = scan_site(&root, &config);
    assert!(report.leading_slash.is_empty());
}

#[test]
fn test_clean_site() {
    let temp = site_dir();
    let root = normalize_path(temp.path());
    write(&root, "img/a.png", "png");
    write(&root, "index.html", r#"<img src="img/a.png"><a href="about.html">About</a>"#);

    let report = scan_site(&root, &EnhanceConfig::default());
    assert!(report.is_clean());
    assert_eq!(report.html_files, 1);
}

#[test]
fn test_scan_content_relative_to_base() {
    let temp = site_dir();
    let root = normalize_path(temp.path());
    write(&root, "posts/img/a.png", "png");

    let opts = ScanOptions {
        root: &root,
        leading_slash: true,
        extra_ignored: &[],
    };
    let scanned = scan_content(
        SiteFileKind::Html,
        r#"<img src="img/a.png"><img src="/posts/img/a.png">"#,
        &root.join("posts"),
        &opts,
    );
    // the root-relative one resolves against the file system root
    assert_eq!(scanned.broken.len(), 1);
    assert_eq!(scanned.broken[0].problem, Problem::OutsideRoot);
    assert_eq!(scanned.leading_slash, [r#"src="/posts/img/a.png""#]);
}

#[test]
fn test_scans_hidden_directories() {
    let temp = site_dir();
    let root = normalize_path(temp.path());
    write(&root, ".well-known/page.html", r#"<img src="gone.png">"#);

    let report = scan_site(&root, &EnhanceConfig::default());
    assert_eq!(report.html_files, 1);
    assert_eq!(report.broken[".well-known/page.html"][0].reference, "gone.png");
}

#[test]
fn test_report_summary_respects_color_override() {
    owo_colors::set_override(false);
    assert_eq!(super::CheckReport::default().to_string(), "all checks passed");
}

#[test]
fn test_check_site_fails_on_findings() {
    let (_temp, root) = make_site();
    let args = CheckArgs {
        root: Some(root.clone()),
        warn_only: false,
    };
    assert!(check_site(&args, &EnhanceConfig::default()).is_err());

    let warn = CheckArgs {
        root: Some(root.clone()),
        warn_only: true,
    };
    assert!(check_site(&warn, &EnhanceConfig::default()).is_ok());

    let mut config = EnhanceConfig::default();
    config.check.level = CheckLevel::Warn;
    assert!(check_site(&args, &config).is_ok());
}

#[test]
fn test_check_site_rejects_missing_root() {
    let temp = site_dir();
    let args = CheckArgs {
        root: Some(temp.path().join("nope")),
        warn_only: false,
    };
    assert!(check_site(&args, &EnhanceConfig::default()).is_err());
}
