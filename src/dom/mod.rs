//! Document abstraction the enhancement components run against.
//!
//! Pages are queried through marker attributes, and every lookup may come
//! back empty: components treat an absent element as "nothing to do".
//!
//! Two implementations exist:
//! - [`MemoryDocument`]: an in-memory tree parsed from HTML text, used by the
//!   CLI preview and by tests
//! - `web` (wasm32 only): the live browser DOM through `web-sys`

mod memory;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use memory::{MemoryDocument, MemoryElement};

// ============================================================================
// Selector
// ============================================================================

/// An optional tag name plus a required attribute, e.g. `a[href]`.
///
/// This is the only selector shape the components need, so both backends
/// can match it without a CSS engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selector<'a> {
    tag: Option<&'a str>,
    attr: &'a str,
}

impl<'a> Selector<'a> {
    /// Elements of any tag carrying `attr`.
    pub const fn attr(attr: &'a str) -> Self {
        Self { tag: None, attr }
    }

    /// Elements named `tag` carrying `attr`.
    pub const fn tag_with_attr(tag: &'a str, attr: &'a str) -> Self {
        Self {
            tag: Some(tag),
            attr,
        }
    }

    /// Render as a CSS selector (`[data-site-nav]`, `a[href]`).
    pub fn to_css(&self) -> String {
        match self.tag {
            Some(tag) => format!("{tag}[{}]", self.attr),
            None => format!("[{}]", self.attr),
        }
    }

    /// Whether an element named `tag` with the given attribute lookup matches.
    ///
    /// Tag and attribute names compare ASCII case-insensitively, as in HTML.
    pub fn matches(&self, tag: &str, has_attr: impl Fn(&str) -> bool) -> bool {
        self.tag.is_none_or(|t| t.eq_ignore_ascii_case(tag)) && has_attr(self.attr)
    }
}

// ============================================================================
// Traits
// ============================================================================

/// A handle to one element of a document.
///
/// Handles are cheap to clone and mutate through `&self`, the same way a
/// browser element reference does.
pub trait Element: Clone {
    /// Attribute value, `None` when the attribute is absent.
    fn attribute(&self, name: &str) -> Option<String>;

    fn set_attribute(&self, name: &str, value: &str);

    fn remove_attribute(&self, name: &str);

    /// Concatenated text of all descendant text nodes.
    fn text_content(&self) -> String;

    /// Replace all children with a single text node.
    fn set_text_content(&self, text: &str);

    /// Current form value (for inputs), empty for other elements.
    fn value(&self) -> String;

    /// Show or hide the element.
    fn set_visible(&self, visible: bool);

    /// Descendants matching `selector`, in document order.
    fn query_all(&self, selector: &Selector<'_>) -> Vec<Self>;
}

/// A queryable document.
pub trait Document {
    type Element: Element;

    /// First element matching `selector` in document order.
    fn query(&self, selector: &Selector<'_>) -> Option<Self::Element>;

    /// All elements matching `selector`, in document order.
    fn query_all(&self, selector: &Selector<'_>) -> Vec<Self::Element>;
}
