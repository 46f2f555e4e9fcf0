//! `[check]` section configuration.
//!
//! Settings for the `site-enhance check` command.
//!
//! # Example
//!
//! ```toml
//! [check]
//! leading_slash = true          # Report root-relative href/src paths
//! ignore = ["/cdn-cgi/"]        # Extra reference prefixes to skip
//! level = "error"               # Failure level: error | warn
//! ```

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckConfig {
    /// Report `href="/..."`/`src="/..."` (breaks on project-subpath hosting).
    pub leading_slash: bool,

    /// Reference prefixes to skip in addition to the built-in ones.
    pub ignore: Vec<String>,

    /// How to treat findings: "error" or "warn".
    pub level: CheckLevel,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            leading_slash: true,
            ignore: Vec::new(),
            level: CheckLevel::Error,
        }
    }
}

/// Check failure level.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CheckLevel {
    /// Findings fail the command.
    #[default]
    Error,
    /// Findings are reported, the command still succeeds.
    Warn,
}
