//! `[nav]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [nav]
//! home = "index.html"          # page name used for the site root
//! section = "blog"             # directory whose pages keep its index link active
//! section_index = "index.html" # file name of that directory's index
//! ```

use serde::{Deserialize, Serialize};

/// Navigation highlighting settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavConfig {
    /// Page name assumed when the location has no path segments.
    pub home: String,

    /// Section directory whose sub-pages highlight the section index link.
    pub section: String,

    /// File name of the section index page.
    pub section_index: String,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            home: "index.html".into(),
            section: "blog".into(),
            section_index: "index.html".into(),
        }
    }
}
