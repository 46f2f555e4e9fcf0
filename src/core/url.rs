//! URL path type for matching pages against navigation links.
//!
//! - Internal representation: Always decoded (human-readable)
//! - Browser boundary: Decode on input, never re-encode

use percent_encoding::percent_decode_str;

/// Decoded URL path (internal representation)
///
/// Invariants:
/// - Always decoded (no percent-encoding)
/// - No query string or fragment
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct UrlPath(String);

impl UrlPath {
    /// Create from a browser `location.pathname` or an `href` attribute.
    ///
    /// Strips the query string and fragment, then decodes percent-encoding.
    /// Invalid UTF-8 sequences are kept as written.
    pub fn from_browser(encoded: &str) -> Self {
        let path = encoded.split(['?', '#']).next().unwrap_or(encoded).trim();
        let decoded = percent_decode_str(path)
            .decode_utf8()
            .map(|s| s.into_owned())
            .unwrap_or_else(|_| path.to_string());
        Self(decoded)
    }

    /// Get the decoded URL path as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Last non-empty `/`-separated segment, if any.
    ///
    /// `/blog/post.html` -> `post.html`, `/blog/` -> `blog`, `/` -> `None`
    pub fn last_segment(&self) -> Option<&str> {
        self.0.split('/').filter(|s| !s.is_empty()).next_back()
    }

    /// Last segment, or `default` when the path has none (site root).
    pub fn page_name<'a>(&'a self, default: &'a str) -> &'a str {
        self.last_segment().unwrap_or(default)
    }

    /// Whether the path lies below the `/<section>/` directory anywhere.
    ///
    /// Matches on the substring, so project-subpath hosting
    /// (`/my-site/blog/post.html`) still counts.
    pub fn in_section(&self, section: &str) -> bool {
        self.0.contains(&format!("/{section}/"))
    }

    /// Whether the path points into `<section>/` (relative or absolute).
    pub fn targets_section(&self, section: &str) -> bool {
        self.0.contains(&format!("{section}/"))
    }
}

impl std::fmt::Display for UrlPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for UrlPath {
    fn from(s: &str) -> Self {
        Self::from_browser(s)
    }
}
