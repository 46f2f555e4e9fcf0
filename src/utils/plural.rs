//! Pluralization utilities.

/// Return "s" suffix for plural counts
///
/// # Examples
///
/// - `plural_s(0)` -> `"s"` (0 files)
/// - `plural_s(1)` -> `""` (1 file)
/// - `plural_s(5)` -> `"s"` (5 files)
#[inline]
pub fn plural_s(n: usize) -> &'static str {
    if n == 1 { "" } else { "s" }
}

/// Format count with noun, handling pluralization
///
/// # Examples
///
/// - `plural_count(0, "article")` -> `"0 articles"`
/// - `plural_count(1, "article")` -> `"1 article"`
/// - `plural_count(5, "file")` -> `"5 files"`
#[inline]
pub fn plural_count(count: usize, noun: &str) -> String {
    format!("{} {}{}", count, noun, plural_s(count))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plural_count() {
        assert_eq!(plural_count(0, "article"), "0 articles");
        assert_eq!(plural_count(1, "article"), "1 article");
        assert_eq!(plural_count(2, "file"), "2 files");
    }
}
