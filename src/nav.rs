//! Navigation highlighting.
//!
//! Marks the navigation link(s) pointing at the current page with the
//! active marker (`aria-current="page"` by default). Links are matched by
//! their last path segment, so the same markup works whether the site is
//! served from `/` or from a project subpath.

use crate::config::EnhanceConfig;
use crate::core::UrlPath;
use crate::debug;
use crate::dom::{Document, Element, Selector};

/// Mark the navigation links that point at `location`.
///
/// Every link in the nav container is cleared first, so calling this again
/// (e.g. after client-side navigation) is idempotent. Returns how many links
/// ended up marked; zero when the page has no nav container.
///
/// A link matches when its last path segment equals the page's last path
/// segment (`index.html` for the site root). Pages under the blog section
/// also keep the section's index link marked.
pub fn set_active_nav<D: Document>(doc: &D, location: &str, config: &EnhanceConfig) -> usize {
    let markers = &config.markers;
    let Some(nav) = doc.query(&Selector::attr(&markers.nav)) else {
        debug!("nav"; "no [{}] element, skipping", markers.nav);
        return 0;
    };

    let page = UrlPath::from_browser(location);
    let current = page.page_name(&config.nav.home);
    let in_section = page.in_section(&config.nav.section);

    let mut marked = 0;
    for link in nav.query_all(&Selector::tag_with_attr("a", "href")) {
        link.remove_attribute(&markers.active);

        let href = UrlPath::from_browser(&link.attribute("href").unwrap_or_default());
        let Some(href_last) = href.last_segment() else {
            continue;
        };

        let same_page = href_last == current;
        let section_index = in_section
            && href_last == config.nav.section_index
            && href.targets_section(&config.nav.section);

        if same_page || section_index {
            link.set_attribute(&markers.active, &markers.active_value);
            marked += 1;
        }
    }

    debug!("nav"; "{} marked {} link(s)", page, marked);
    marked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::{MemoryDocument, MemoryElement};

    const NAV: &str = r#"
        <header>
          <nav data-site-nav>
            <a href="index.html">Home</a>
            <a href="about.html">About</a>
            <a href="blog/index.html">Blog</a>
            <a href="projects/">Projects</a>
            <a href="">Empty</a>
            <a href="/">Root</a>
          </nav>
        </header>
        <footer><a href="about.html">About (footer)</a></footer>
    "#;

    fn links(doc: &MemoryDocument) -> Vec<MemoryElement> {
        doc.query_all(&Selector::tag_with_attr("a", "href"))
    }

    /// Text of every link carrying `aria-current="page"`.
    fn active(doc: &MemoryDocument) -> Vec<String> {
        links(doc)
            .into_iter()
            .filter(|a| a.attribute("aria-current").as_deref() == Some("page"))
            .map(|a| a.text_content())
            .collect()
    }

    fn run(location: &str) -> (MemoryDocument, usize) {
        let doc = MemoryDocument::parse(NAV).unwrap();
        let marked = set_active_nav(&doc, location, &EnhanceConfig::default());
        (doc, marked)
    }

    #[test]
    fn test_matches_last_segment() {
        let (doc, marked) = run("/about.html");
        assert_eq!(marked, 1);
        assert_eq!(active(&doc), ["About"]);
    }

    #[test]
    fn test_matches_under_project_subpath() {
        let (doc, _) = run("/my-site/about.html");
        assert_eq!(active(&doc), ["About"]);
    }

    #[test]
    fn test_root_is_home_page() {
        let (root, _) = run("/");
        let (index, _) = run("/index.html");
        // Segment-only matching also picks up `blog/index.html`
        assert_eq!(active(&root), ["Home", "Blog"]);
        assert_eq!(active(&root), active(&index));
    }

    #[test]
    fn test_blog_pages_keep_blog_link_active() {
        let (doc, marked) = run("/blog/2024/post.html");
        assert_eq!(marked, 1);
        assert_eq!(active(&doc), ["Blog"]);
    }

    #[test]
    fn test_blog_index_marks_home_and_blog() {
        // `index.html` is also the last segment of the home link
        let (doc, _) = run("/blog/index.html");
        assert_eq!(active(&doc), ["Home", "Blog"]);
    }

    #[test]
    fn test_directory_links_match_by_name() {
        let (doc, _) = run("/projects/");
        assert_eq!(active(&doc), ["Projects"]);
    }

    #[test]
    fn test_unmatched_page_marks_nothing() {
        let (doc, marked) = run("/contact.html");
        assert_eq!(marked, 0);
        assert!(active(&doc).is_empty());
    }

    #[test]
    fn test_links_outside_nav_untouched() {
        let (doc, _) = run("/about.html");
        let footer = links(&doc).pop().unwrap();
        assert_eq!(footer.text_content(), "About (footer)");
        assert_eq!(footer.attribute("aria-current"), None);
    }

    #[test]
    fn test_clears_stale_markers() {
        let doc = MemoryDocument::parse(
            r#"<nav data-site-nav><a href="a.html" aria-current="page">A</a><a href="b.html">B</a></nav>"#,
        )
        .unwrap();
        set_active_nav(&doc, "/b.html", &EnhanceConfig::default());
        assert_eq!(active(&doc), ["B"]);
    }

    #[test]
    fn test_idempotent() {
        let doc = MemoryDocument::parse(NAV).unwrap();
        let config = EnhanceConfig::default();
        set_active_nav(&doc, "/blog/index.html", &config);
        let once = active(&doc);
        set_active_nav(&doc, "/blog/index.html", &config);
        assert_eq!(active(&doc), once);
    }

    #[test]
    fn test_percent_encoded_location() {
        let doc =
            MemoryDocument::parse(r#"<nav data-site-nav><a href="café.html">Café</a></nav>"#).unwrap();
        set_active_nav(&doc, "/caf%C3%A9.html", &EnhanceConfig::default());
        assert_eq!(active(&doc), ["Café"]);
    }

    #[test]
    fn test_href_fragment_ignored() {
        let doc = MemoryDocument::parse(
            r#"<nav data-site-nav><a href="about.html#team">Team</a></nav>"#,
        )
        .unwrap();
        set_active_nav(&doc, "/about.html", &EnhanceConfig::default());
        assert_eq!(active(&doc), ["Team"]);
    }

    #[test]
    fn test_missing_nav_is_noop() {
        let doc = MemoryDocument::parse("<main><a href=\"index.html\">Home</a></main>").unwrap();
        assert_eq!(set_active_nav(&doc, "/", &EnhanceConfig::default()), 0);
        assert!(active(&doc).is_empty());
    }

    #[test]
    fn test_custom_section_and_markers() {
        let mut config = EnhanceConfig::default();
        config.nav.section = "notes".into();
        config.markers.nav = "data-menu".into();
        config.markers.active = "data-active".into();
        config.markers.active_value = "true".into();

        let doc = MemoryDocument::parse(
            r#"<ul data-menu><li><a href="notes/index.html">Notes</a></li><li><a href="blog/index.html">Blog</a></li></ul>"#,
        )
        .unwrap();
        assert_eq!(set_active_nav(&doc, "/notes/rust.html", &config), 1);

        let marked: Vec<_> = links(&doc)
            .into_iter()
            .filter(|a| a.attribute("data-active").as_deref() == Some("true"))
            .map(|a| a.text_content())
            .collect();
        assert_eq!(marked, ["Notes"]);
    }
}
