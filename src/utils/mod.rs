//! Shared helpers.

pub mod html;
#[cfg(not(target_arch = "wasm32"))]
pub mod path;
pub mod plural;

pub use plural::{plural_count, plural_s};
