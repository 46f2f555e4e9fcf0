//! Navigation highlighting and blog search for static sites.
//!
//! The same two components run in the browser (compiled to wasm, see
//! `dom::web`) and against HTML files on the command line:
//!
//! - [`nav::set_active_nav`] marks the navigation link for the current page
//! - [`search::blog_search`] filters blog cards by the search box's text
//!
//! Both are written against the [`dom::Document`] trait and configured by
//! [`config::EnhanceConfig`].

#[cfg(not(target_arch = "wasm32"))]
pub mod cli;
pub mod config;
pub mod core;
pub mod dom;
pub mod enhance;
pub mod logger;
pub mod nav;
pub mod search;
pub mod utils;

pub use config::EnhanceConfig;
pub use dom::{Document, Element, MemoryDocument, MemoryElement, Selector};
pub use enhance::{Enhanced, enhance};
pub use nav::set_active_nav;
pub use search::{SearchFilter, blog_search};
