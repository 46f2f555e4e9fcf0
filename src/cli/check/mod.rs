//! Asset reference check for a built site.
//!
//! Finds local references (`<img src>`, `srcset`, CSS `url()`, image string
//! literals in JS) that do not resolve to a file inside the site root, and
//! root-relative `href`/`src` paths that break when the site is served from
//! a project subpath.

mod report;
mod scan;
#[cfg(test)]
mod tests;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Result, bail};
use jwalk::WalkDir;
use parking_lot::RwLock;
use rayon::prelude::*;

use crate::cli::CheckArgs;
use crate::config::{CheckLevel, EnhanceConfig};
use crate::log;
use crate::utils::path::normalize_path;
use crate::utils::plural_s;

pub use report::CheckReport;
use scan::{ScanOptions, SiteFileKind, scan_content};

/// Run the check command and fail on findings unless told otherwise.
pub fn check_site(args: &CheckArgs, config: &EnhanceConfig) -> Result<()> {
    let root = normalize_path(args.root.as_deref().unwrap_or(Path::new(".")));
    if !root.is_dir() {
        bail!("site root `{}` is not a directory", root.display());
    }

    log!("check"; "scanning {}", root.display());
    let report = scan_site(&root, config);

    log!(
        "check";
        "HTML files: {} | CSS files: {} | JS files: {}",
        report.html_files, report.css_files, report.js_files
    );
    let leading = report.leading_slash_count();
    let broken = report.broken_count();
    log!("check"; "leading-slash href/src finding{}: {}", plural_s(leading), leading);
    log!("check"; "missing asset ref{}: {}", plural_s(broken), broken);

    report.print();
    if !report.is_clean() {
        eprintln!();
    }
    log!("check"; "{}", report);

    let warn_only = args.warn_only || config.check.level == CheckLevel::Warn;
    if !report.is_clean() && !warn_only {
        bail!(
            "check failed: {} leading-slash finding{}, {} missing asset ref{}",
            leading,
            plural_s(leading),
            broken,
            plural_s(broken)
        );
    }
    Ok(())
}

/// Scan every HTML/CSS/JS file under `root` (must be absolute).
pub fn scan_site(root: &Path, config: &EnhanceConfig) -> CheckReport {
    let files = collect_site_files(root);

    let mut report = CheckReport::default();
    for (_, kind) in &files {
        match kind {
            SiteFileKind::Html => report.html_files += 1,
            SiteFileKind::Css => report.css_files += 1,
            SiteFileKind::Js => report.js_files += 1,
        }
    }

    let opts = ScanOptions {
        root,
        leading_slash: config.check.leading_slash,
        extra_ignored: &config.check.ignore,
    };
    let report = RwLock::new(report);

    files.par_iter().for_each(|(path, kind)| {
        let Ok(bytes) = fs::read(path) else {
            crate::debug!("check"; "cannot read {}", path.display());
            return;
        };
        // Invalid UTF-8 is replaced rather than skipping the whole file
        let content = String::from_utf8_lossy(&bytes);
        let base = path.parent().unwrap_or(root);
        let scanned = scan_content(*kind, &content, base, &opts);

        if !scanned.broken.is_empty() || !scanned.leading_slash.is_empty() {
            report.write().add_file(owner_name(path, root), scanned);
        }
    });

    report.into_inner()
}

/// Collect site files recursively, sorted for stable output.
///
/// Hidden directories such as `.well-known/` are served too, so they are
/// scanned.
fn collect_site_files(root: &Path) -> Vec<(PathBuf, SiteFileKind)> {
    let mut files: Vec<_> = WalkDir::new(root)
        .skip_hidden(false)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .filter_map(|e| {
            let path = e.path();
            SiteFileKind::from_path(&path).map(|kind| (path, kind))
        })
        .collect();
    files.sort_by(|a, b| a.0.cmp(&b.0));
    files
}

/// Root-relative path with forward slashes, for display.
fn owner_name(path: &Path, root: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path);
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
