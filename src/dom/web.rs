//! Browser DOM bindings (wasm32 only).
//!
//! Wraps `web_sys` handles in the [`Document`]/[`Element`] traits and
//! exposes the page-load entry point to JavaScript. Every missing browser
//! object (`window`, `document`, `location`) means "do nothing".

use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

use super::{Document, Element, Selector};
use crate::config::EnhanceConfig;
use crate::enhance::enhance;
use crate::nav::set_active_nav;
use crate::search::{SearchFilter, blog_search};

/// The page's `document`.
#[derive(Clone)]
pub struct WebDocument(web_sys::Document);

/// A live DOM element.
#[derive(Clone)]
pub struct WebElement(web_sys::Element);

impl WebDocument {
    /// The document of the current window, if there is one.
    pub fn current() -> Option<Self> {
        web_sys::window()?.document().map(Self)
    }
}

/// Elements of a `querySelectorAll` result, in document order.
fn collect(list: Result<web_sys::NodeList, JsValue>) -> Vec<WebElement> {
    let Ok(list) = list else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<web_sys::Element>().ok())
        .map(WebElement)
        .collect()
}

impl Document for WebDocument {
    type Element = WebElement;

    fn query(&self, selector: &Selector<'_>) -> Option<WebElement> {
        self.0
            .query_selector(&selector.to_css())
            .ok()
            .flatten()
            .map(WebElement)
    }

    fn query_all(&self, selector: &Selector<'_>) -> Vec<WebElement> {
        collect(self.0.query_selector_all(&selector.to_css()))
    }
}

impl Element for WebElement {
    fn attribute(&self, name: &str) -> Option<String> {
        self.0.get_attribute(name)
    }

    fn set_attribute(&self, name: &str, value: &str) {
        self.0.set_attribute(name, value).ok();
    }

    fn remove_attribute(&self, name: &str) {
        self.0.remove_attribute(name).ok();
    }

    fn text_content(&self) -> String {
        self.0.text_content().unwrap_or_default()
    }

    fn set_text_content(&self, text: &str) {
        self.0.set_text_content(Some(text));
    }

    fn value(&self) -> String {
        if let Some(input) = self.0.dyn_ref::<web_sys::HtmlInputElement>() {
            return input.value();
        }
        if let Some(area) = self.0.dyn_ref::<web_sys::HtmlTextAreaElement>() {
            return area.value();
        }
        self.0.get_attribute("value").unwrap_or_default()
    }

    /// Hide with inline `display: none`; show by removing the inline value
    /// so the stylesheet's display applies again.
    fn set_visible(&self, visible: bool) {
        let Some(element) = self.0.dyn_ref::<web_sys::HtmlElement>() else {
            return;
        };
        let style = element.style();
        if visible {
            style.remove_property("display").ok();
        } else {
            style.set_property("display", "none").ok();
        }
    }

    fn query_all(&self, selector: &Selector<'_>) -> Vec<Self> {
        collect(self.0.query_selector_all(&selector.to_css()))
    }
}

// ============================================================================
// Entry points
// ============================================================================

/// `location.pathname` of the current window, `/` if unavailable.
fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

/// Re-run the filter on every `input` event of the search box.
///
/// The listener lives as long as the page, so its closure is leaked.
fn wire(filter: SearchFilter<WebElement>) {
    let filter = Rc::new(filter);
    let target = filter.input().0.clone();
    let handler = Rc::clone(&filter);
    let closure = Closure::<dyn FnMut(web_sys::Event)>::new(move |_: web_sys::Event| {
        handler.apply();
    });

    if target
        .add_event_listener_with_callback("input", closure.as_ref().unchecked_ref())
        .is_ok()
    {
        closure.forget();
    }
}

fn run() {
    let Some(doc) = WebDocument::current() else {
        return;
    };
    let result = enhance(&doc, &current_path(), &EnhanceConfig::default());
    if let Some(filter) = result.search {
        wire(filter);
    }
}

/// Module start: enhance the page once the document is ready.
///
/// The module is often instantiated after `DOMContentLoaded` already fired,
/// so a document that is no longer loading is enhanced right away.
#[wasm_bindgen(start)]
pub fn start() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };

    if document.ready_state() == "loading" {
        let callback = Closure::once_into_js(run);
        document
            .add_event_listener_with_callback("DOMContentLoaded", callback.unchecked_ref())
            .ok();
    } else {
        run();
    }
}

/// Highlight the current page's navigation link again.
#[wasm_bindgen(js_name = setActiveNav)]
pub fn set_active_nav_js() {
    if let Some(doc) = WebDocument::current() {
        set_active_nav(&doc, &current_path(), &EnhanceConfig::default());
    }
}

/// Bind the search box to the blog cards and filter once.
#[wasm_bindgen(js_name = blogSearch)]
pub fn blog_search_js() {
    if let Some(filter) = WebDocument::current().and_then(|doc| blog_search(&doc, &EnhanceConfig::default())) {
        wire(filter);
    }
}
