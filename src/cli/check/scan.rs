//! Reference extraction and resolution for a single site file.

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use crate::utils::path::resolve_ref;

static IMG_SRC_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?i)<img\b[^>]*\bsrc=['"]([^'">]+)['"]"#).unwrap());

static SRCSET_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?i)\bsrcset=['"]([^'"]+)['"]"#).unwrap());

static CSS_URL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)url\(([^)]+)\)").unwrap());

/// Quoted string literal naming an image, either quote style.
static JS_IMG_STR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?i)'([^'"]+\.(?:png|jpe?g|gif|svg|webp))'|"([^'"]+\.(?:png|jpe?g|gif|svg|webp))""#,
    )
    .unwrap()
});

/// `href`/`src` pointing at the server root (`/x`, not `//host`).
static LEADING_SLASH_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?i)\b(?:href|src)=['"]/[^/][^'"]*['"]"#).unwrap());

/// Reference prefixes that never point at a local file.
const IGNORED_PREFIXES: &[&str] = &[
    "http://", "https://", "data:", "mailto:", "tel:", "#", "//",
];

/// Kind of site file, decided by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SiteFileKind {
    Html,
    Css,
    Js,
}

impl SiteFileKind {
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?;
        if ext.eq_ignore_ascii_case("html") {
            Some(Self::Html)
        } else if ext.eq_ignore_ascii_case("css") {
            Some(Self::Css)
        } else if ext.eq_ignore_ascii_case("js") {
            Some(Self::Js)
        } else {
            None
        }
    }
}

/// Where a checked reference was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefKind {
    ImgSrc,
    Srcset,
    CssUrl,
    JsImage,
}

impl RefKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::ImgSrc => "img src",
            Self::Srcset => "srcset",
            Self::CssUrl => "css url",
            Self::JsImage => "js image",
        }
    }
}

/// Why a reference failed to resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Problem {
    Missing,
    OutsideRoot,
}

impl Problem {
    pub fn label(self) -> &'static str {
        match self {
            Self::Missing => "missing",
            Self::OutsideRoot => "outside root",
        }
    }
}

/// A reference that does not resolve to a file inside the site root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrokenRef {
    pub kind: RefKind,
    pub reference: String,
    pub problem: Problem,
}

/// Everything found in one file.
#[derive(Debug, Default)]
pub struct ScannedFile {
    pub broken: Vec<BrokenRef>,
    /// Raw `href="/..."` snippets.
    pub leading_slash: Vec<String>,
}

/// Options shared by every file scan.
pub struct ScanOptions<'a> {
    pub root: &'a Path,
    pub leading_slash: bool,
    pub extra_ignored: &'a [String],
}

/// Strip surrounding whitespace/quotes, then any `#fragment` and `?query`.
pub fn normalize_ref(reference: &str) -> &str {
    let trimmed = reference.trim().trim_matches(|c| c == '"' || c == '\'');
    let no_fragment = trimmed.split('#').next().unwrap_or(trimmed);
    no_fragment.split('?').next().unwrap_or(no_fragment)
}

/// Whether a normalized reference is skipped entirely.
pub fn should_ignore(reference: &str, extra: &[String]) -> bool {
    reference.is_empty()
        || IGNORED_PREFIXES.iter().any(|p| reference.starts_with(p))
        || extra.iter().any(|p| reference.starts_with(p.as_str()))
}

/// Scan file content of the given kind. `base` is the file's directory.
pub fn scan_content(kind: SiteFileKind, content: &str, base: &Path, opts: &ScanOptions<'_>) -> ScannedFile {
    let mut out = ScannedFile::default();
    let mut check = |kind: RefKind, raw: &str| {
        if let Some(broken) = check_ref(kind, raw, base, opts) {
            out.broken.push(broken);
        }
    };

    match kind {
        SiteFileKind::Html => {
            for cap in IMG_SRC_RE.captures_iter(content) {
                check(RefKind::ImgSrc, &cap[1]);
            }
            for cap in SRCSET_RE.captures_iter(content) {
                // "a.jpg 1x, b.jpg 2x" -> each candidate's URL
                for candidate in cap[1].split(',') {
                    if let Some(url) = candidate.split_whitespace().next() {
                        check(RefKind::Srcset, url);
                    }
                }
            }
        }
        SiteFileKind::Css => {
            for cap in CSS_URL_RE.captures_iter(content) {
                check(RefKind::CssUrl, &cap[1]);
            }
        }
        SiteFileKind::Js => {
            for cap in JS_IMG_STR_RE.captures_iter(content) {
                if let Some(m) = cap.get(1).or_else(|| cap.get(2)) {
                    check(RefKind::JsImage, m.as_str());
                }
            }
        }
    }

    if kind == SiteFileKind::Html && opts.leading_slash {
        out.leading_slash = LEADING_SLASH_RE
            .find_iter(content)
            .map(|m| m.as_str().to_string())
            .collect();
    }

    out
}

/// Resolve one raw reference; `None` when it is ignored or exists.
fn check_ref(kind: RefKind, raw: &str, base: &Path, opts: &ScanOptions<'_>) -> Option<BrokenRef> {
    let reference = normalize_ref(raw);
    if should_ignore(reference, opts.extra_ignored) {
        return None;
    }

    let target = resolve_ref(base, reference);
    let problem = if !target.starts_with(opts.root) {
        Problem::OutsideRoot
    } else if !target.exists() {
        Problem::Missing
    } else {
        return None;
    };

    Some(BrokenRef {
        kind,
        reference: reference.to_string(),
        problem,
    })
}
