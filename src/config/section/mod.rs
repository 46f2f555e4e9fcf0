//! Configuration section definitions.
//!
//! Each module corresponds to a section in `enhance.toml`:
//!
//! | Module    | TOML Section | Purpose                               |
//! |-----------|--------------|---------------------------------------|
//! | `markers` | `[markers]`  | Attribute names used by page markup   |
//! | `nav`     | `[nav]`      | Home page name, blog section rule     |
//! | `check`   | `[check]`    | Asset reference verification          |

mod check;
mod markers;
mod nav;

pub use check::{CheckConfig, CheckLevel};
pub use markers::MarkerConfig;
pub use nav::NavConfig;
