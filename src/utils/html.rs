//! HTML text helpers.
//!
//! `tl` hands back raw source bytes for text and attribute values, so
//! anything that should read like the browser's `textContent` or
//! `getAttribute` goes through [`unescape`] first.
//!
//! Attribute lists are read from the raw opening tag with
//! [`parse_attributes`]: tl 0.7 drops the first character of an attribute
//! name that follows a valueless one (`<input data-x value="a">`).

use std::borrow::Cow;

/// Longest entity name we try to decode before giving up.
const MAX_ENTITY_LEN: usize = 10;

/// Unescape HTML entities back to characters.
///
/// Handles common named entities and numeric character references.
/// Unknown or malformed entities are kept verbatim.
pub fn unescape(s: &str) -> Cow<'_, str> {
    if !s.contains('&') {
        return Cow::Borrowed(s);
    }

    let mut result = String::with_capacity(s.len());
    let mut rest = s;

    while let Some(amp) = rest.find('&') {
        result.push_str(&rest[..amp]);
        let after = &rest[amp + 1..];

        let decoded = after
            .find(';')
            .filter(|&end| end > 0 && end <= MAX_ENTITY_LEN)
            .and_then(|end| decode_entity(&after[..end]).map(|c| (c, end)));

        match decoded {
            Some((c, end)) => {
                result.push(c);
                rest = &after[end + 1..];
            }
            None => {
                result.push('&');
                rest = after;
            }
        }
    }
    result.push_str(rest);

    Cow::Owned(result)
}

/// Decode a single entity body (the part between `&` and `;`).
fn decode_entity(entity: &str) -> Option<char> {
    match entity {
        "lt" => Some('<'),
        "gt" => Some('>'),
        "amp" => Some('&'),
        "quot" => Some('"'),
        "apos" => Some('\''),
        "nbsp" => Some('\u{00A0}'),
        s if s.starts_with("#x") || s.starts_with("#X") => {
            u32::from_str_radix(&s[2..], 16).ok().and_then(char::from_u32)
        }
        s if s.starts_with('#') => s[1..].parse().ok().and_then(char::from_u32),
        _ => None,
    }
}

// =============================================================================
// Attribute Parsing
// =============================================================================

/// Attribute text of an opening tag, without the tag name and brackets.
///
/// `<input type="search" data-q>..</input>` -> `type="search" data-q`
pub fn opening_tag_attrs(raw: &str) -> &str {
    let s = raw.trim_start().trim_start_matches('<');
    let start = s
        .find(|c: char| c.is_whitespace() || c == '>' || c == '/')
        .unwrap_or(s.len());
    let rest = &s[start..];

    let mut quote = None;
    for (i, c) in rest.char_indices() {
        match (quote, c) {
            (Some(q), c) if c == q => quote = None,
            (Some(_), _) => {}
            (None, '"' | '\'') => quote = Some(c),
            (None, '>') => return rest[..i].trim(),
            _ => {}
        }
    }
    rest.trim()
}

/// Parse HTML-style attributes from a string.
///
/// Input: `data-blog-search value="rust" hidden`
/// Output: `vec![("data-blog-search", ""), ("value", "rust"), ("hidden", "")]`
///
/// A bare `/` (self-closing marker) is skipped.
pub fn parse_attributes(s: &str) -> Vec<(String, String)> {
    let mut attrs = Vec::new();
    let mut chars = s.chars().peekable();

    while let Some(c) = chars.next() {
        if c.is_whitespace() {
            continue;
        }

        // Read attribute name
        let mut name = String::from(c);
        while let Some(next) = chars.next_if(|&n| n != '=' && !n.is_whitespace()) {
            name.push(next);
        }

        while chars.next_if(|c| c.is_whitespace()).is_some() {}

        if chars.next_if_eq(&'=').is_none() {
            if name != "/" {
                attrs.push((name, String::new()));
            }
            continue;
        }

        while chars.next_if(|c| c.is_whitespace()).is_some() {}

        let mut value = String::new();
        if let Some(quote) = chars.next_if(|&c| c == '"' || c == '\'') {
            for c in chars.by_ref() {
                if c == quote {
                    break;
                }
                value.push(c);
            }
        } else {
            // Unquoted value (read until whitespace)
            while let Some(c) = chars.next_if(|c| !c.is_whitespace()) {
                value.push(c);
            }
        }
        attrs.push((name, value));
    }

    attrs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unescape_named_and_numeric() {
        assert_eq!(unescape("Rust &amp; Go"), "Rust & Go");
        assert_eq!(unescape("&lt;b&gt;"), "<b>");
        assert_eq!(unescape("caf&#233;"), "café");
        assert_eq!(unescape("caf&#xE9;"), "café");
    }

    #[test]
    fn test_unescape_keeps_unknown() {
        assert_eq!(unescape("a & b"), "a & b");
        assert_eq!(unescape("&bogus;"), "&bogus;");
        assert_eq!(unescape("tail &"), "tail &");
    }

    #[test]
    fn test_opening_tag_attrs() {
        assert_eq!(opening_tag_attrs(r#"<x a b="c">text</x>"#), r#"a b="c""#);
        assert_eq!(opening_tag_attrs(r#"<a title="1 > 0" href=x>"#), r#"title="1 > 0" href=x"#);
        assert_eq!(opening_tag_attrs("<br/>"), "/");
        assert_eq!(opening_tag_attrs("<p>"), "");
    }

    #[test]
    fn test_parse_attributes_after_valueless() {
        let attrs = parse_attributes(r#"a b="c""#);
        assert_eq!(
            attrs,
            [
                ("a".to_string(), String::new()),
                ("b".to_string(), "c".to_string()),
            ]
        );

        let attrs = parse_attributes(r#"data-blog-card data-search='Intro to Rust' hidden"#);
        assert_eq!(
            attrs,
            [
                ("data-blog-card".to_string(), String::new()),
                ("data-search".to_string(), "Intro to Rust".to_string()),
                ("hidden".to_string(), String::new()),
            ]
        );
    }

    #[test]
    fn test_parse_attributes_unquoted_and_self_closing() {
        let attrs = parse_attributes(r#"src=a.png alt = "x" /"#);
        assert_eq!(
            attrs,
            [
                ("src".to_string(), "a.png".to_string()),
                ("alt".to_string(), "x".to_string()),
            ]
        );
    }

    #[test]
    fn test_unescape_borrows_plain_text() {
        assert!(matches!(unescape("plain"), Cow::Borrowed("plain")));
    }
}
