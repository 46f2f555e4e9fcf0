//! `[markers]` section configuration.
//!
//! Attribute names the page markup uses to tag the elements both
//! components look for.
//!
//! # Example
//!
//! ```toml
//! [markers]
//! nav = "data-site-nav"
//! active = "aria-current"
//! active_value = "page"
//! search_input = "data-blog-search"
//! card = "data-blog-card"
//! card_text = "data-search"
//! count = "data-search-count"
//! ```

use serde::{Deserialize, Serialize};

/// Marker attribute names shared by the page markup and this crate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkerConfig {
    /// Attribute on the element wrapping the site navigation.
    pub nav: String,

    /// Attribute set on the active navigation link(s).
    pub active: String,

    /// Value written to the active attribute.
    pub active_value: String,

    /// Attribute on the search text box.
    pub search_input: String,

    /// Attribute on each filterable blog card.
    pub card: String,

    /// Optional per-card attribute overriding the searchable text.
    pub card_text: String,

    /// Attribute on the element showing "N articles shown".
    pub count: String,
}

impl Default for MarkerConfig {
    fn default() -> Self {
        Self {
            nav: "data-site-nav".into(),
            active: "aria-current".into(),
            active_value: "page".into(),
            search_input: "data-blog-search".into(),
            card: "data-blog-card".into(),
            card_text: "data-search".into(),
            count: "data-search-count".into(),
        }
    }
}
