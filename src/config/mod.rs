//! Configuration management for `enhance.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── check      # [check]
//! │   ├── markers    # [markers]
//! │   └── nav        # [nav]
//! ├── error          # ConfigError
//! └── mod.rs         # EnhanceConfig (this file)
//! ```
//!
//! The file is optional: every field has a default matching the markup
//! conventions the browser module expects.

mod error;
pub mod section;

pub use error::ConfigError;
pub use section::{CheckConfig, CheckLevel, MarkerConfig, NavConfig};

use crate::log;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Default config file name, searched upward from the working directory.
pub const CONFIG_FILE: &str = "enhance.toml";

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing enhance.toml
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnhanceConfig {
    /// Absolute path to the config file, if one was found (internal use only)
    #[serde(skip)]
    pub config_path: Option<PathBuf>,

    /// Marker attribute names
    #[serde(default)]
    pub markers: MarkerConfig,

    /// Navigation highlighting settings
    #[serde(default)]
    pub nav: NavConfig,

    /// Asset check settings
    #[serde(default)]
    pub check: CheckConfig,
}

impl EnhanceConfig {
    /// Load configuration, searching upward from cwd for `config_name`.
    ///
    /// A missing file is not an error: defaults are used.
    pub fn load(config_name: &Path) -> Result<Self, ConfigError> {
        let Some(path) = find_config_file(config_name) else {
            crate::debug!("config"; "no {} found, using defaults", config_name.display());
            return Ok(Self::default());
        };

        let mut config = Self::from_path(&path)?;
        config.config_path = Some(path);
        config.validate()?;
        Ok(config)
    }

    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;
        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    pub(crate) fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {}", field);
        }
    }

    /// Reject marker names that could never match anything.
    fn validate(&self) -> Result<(), ConfigError> {
        let m = &self.markers;
        let markers = [
            ("markers.nav", &m.nav),
            ("markers.active", &m.active),
            ("markers.search_input", &m.search_input),
            ("markers.card", &m.card),
            ("markers.card_text", &m.card_text),
            ("markers.count", &m.count),
        ];
        for (field, value) in markers {
            if value.trim().is_empty() || value.contains(char::is_whitespace) {
                return Err(ConfigError::Validation(format!(
                    "`{field}` must be a single attribute name, got {value:?}"
                )));
            }
        }
        if self.nav.home.is_empty() || self.nav.home.contains('/') {
            return Err(ConfigError::Validation(
                "`nav.home` must be a file name without `/`".into(),
            ));
        }
        Ok(())
    }
}

/// Find config file by searching upward from current directory
///
/// Starts from cwd and walks up parent directories until finding `config_name`
/// Returns the absolute path to the config file if found
///
/// # Example
/// ```text
/// /home/user/site/blog/     ← cwd
/// /home/user/site/enhance.toml  ← found!
/// ```
fn find_config_file(config_name: &Path) -> Option<PathBuf> {
    if config_name.is_absolute() {
        return config_name.exists().then(|| config_name.to_path_buf());
    }

    let cwd = std::env::current_dir().ok()?;
    let mut current = cwd.as_path();
    loop {
        let candidate = current.join(config_name);
        if candidate.exists() {
            return Some(candidate);
        }
        current = current.parent()?;
    }
}

// ============================================================================
// Tests
// ============================================================================
