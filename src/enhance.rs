//! Page load entry: runs every enhancement against one document.

use crate::config::EnhanceConfig;
use crate::dom::Document;
use crate::nav::set_active_nav;
use crate::search::{SearchFilter, blog_search};

/// What [`enhance`] did to a page.
#[derive(Debug)]
pub struct Enhanced<E: crate::dom::Element> {
    /// Number of navigation links marked active.
    pub nav_marked: usize,
    /// Live search filter, `None` when the page has no search.
    pub search: Option<SearchFilter<E>>,
}

/// Run navigation highlighting and blog search on a ready document.
///
/// The two are independent: a page with only one of them gets only that one.
pub fn enhance<D: Document>(doc: &D, location: &str, config: &EnhanceConfig) -> Enhanced<D::Element> {
    Enhanced {
        nav_marked: set_active_nav(doc, location, config),
        search: blog_search(doc, config),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::{Element, MemoryDocument, Selector};

    const PAGE: &str = r#"
        <nav data-site-nav><a href="../index.html">Home</a><a href="index.html">Blog</a></nav>
        <input data-blog-search value="">
        <span data-search-count></span>
        <ul>
          <li data-blog-card data-search="Intro to Rust">1</li>
          <li data-blog-card data-search="Go basics">2</li>
        </ul>
    "#;

    #[test]
    fn test_runs_both_components() {
        let doc = MemoryDocument::parse(PAGE).unwrap();
        let result = enhance(&doc, "/blog/index.html", &EnhanceConfig::default());

        // both links end in index.html
        assert_eq!(result.nav_marked, 2);
        let search = result.search.unwrap();
        assert_eq!(search.cards().len(), 2);
        let count = doc.query(&Selector::attr("data-search-count")).unwrap();
        assert_eq!(count.text_content(), "2 articles shown");
    }

    #[test]
    fn test_components_are_independent() {
        let nav_only =
            MemoryDocument::parse(r#"<nav data-site-nav><a href="a.html">A</a></nav>"#).unwrap();
        let result = enhance(&nav_only, "/a.html", &EnhanceConfig::default());
        assert_eq!(result.nav_marked, 1);
        assert!(result.search.is_none());

        let search_only = MemoryDocument::parse(
            r#"<input data-blog-search value="x"><div data-blog-card>x</div>"#,
        )
        .unwrap();
        let result = enhance(&search_only, "/", &EnhanceConfig::default());
        assert_eq!(result.nav_marked, 0);
        assert!(result.search.is_some());
    }
}
