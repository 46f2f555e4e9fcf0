//! Path normalization utilities.
//!
//! - `normalize_path` - file system paths (canonicalize + fallback)
//! - `clean_path` - lexical `.`/`..` resolution for paths that may not exist

use std::path::{Component, Path, PathBuf};

/// Normalize a file system path to absolute form.
///
/// Tries `canonicalize()` first (resolves symlinks, `.`, `..`).
/// Falls back to:
/// - Return as-is if already absolute
/// - Join with current directory if relative
#[inline]
pub fn normalize_path(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            std::env::current_dir().map_or_else(|_| path.to_path_buf(), |cwd| cwd.join(path))
        }
    })
}

/// Resolve `.` and `..` without touching the file system.
///
/// Missing asset references cannot be canonicalized, but we still need to
/// know whether they point outside the site root.
///
/// # Example
/// ```ignore
/// assert_eq!(clean_path(Path::new("/site/css/../img/a.png")), PathBuf::from("/site/img/a.png"));
/// ```
pub fn clean_path(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            // `..` above the root stays at the root, like the OS does
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => out.push(".."),
            },
            other => out.push(other),
        }
    }
    out
}

/// Resolve a reference against `base` and canonicalize when possible.
pub fn resolve_ref(base: &Path, reference: &str) -> PathBuf {
    let joined = clean_path(&base.join(reference));
    joined.canonicalize().unwrap_or(joined)
}
