//! Logging utilities with colored output.
//!
//! This module provides:
//! - `log!` macro for formatted terminal output with colored prefixes
//! - `debug!` macro for output gated behind `--verbose`
//!
//! # Example
//!
//! ```ignore
//! log!("check"; "scanning {} files", count);
//! debug!("nav"; "no nav container, skipping");
//! ```
//!
//! In the browser build nothing is printed: stdout is discarded on
//! `wasm32-unknown-unknown` and verbose mode is never switched on.

use owo_colors::{OwoColorize, Stream::Stdout};
use std::{
    io::{Write, stdout},
    sync::atomic::{AtomicBool, Ordering},
};

/// Global verbose flag (set by --verbose CLI argument)
static VERBOSE: AtomicBool = AtomicBool::new(false);

/// Set verbose mode globally
pub fn set_verbose(v: bool) {
    VERBOSE.store(v, Ordering::SeqCst);
}

/// Check if verbose mode is enabled
pub fn is_verbose() -> bool {
    VERBOSE.load(Ordering::SeqCst)
}

// ============================================================================
// Log Macro
// ============================================================================

/// Log a message with a colored module prefix
///
/// # Usage
/// ```ignore
/// log!("module"; "message with {} formatting", args);
/// ```
#[macro_export]
macro_rules! log {
    ($module:expr; $($arg:tt)*) => {{
        $crate::logger::log($module, &format!($($arg)*))
    }};
}

/// Log a debug message (only shown when --verbose is enabled)
///
/// # Usage
/// ```ignore
/// debug!("module"; "debug info: {}", value);
/// ```
#[macro_export]
macro_rules! debug {
    ($module:expr; $($arg:tt)*) => {{
        if $crate::logger::is_verbose() {
            $crate::logger::log($module, &format!($($arg)*))
        }
    }};
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Log a message with a colored module prefix
#[inline]
pub fn log(module: &str, message: &str) {
    let module_lower = module.to_ascii_lowercase();
    let prefix = colorize_prefix(module, &module_lower);

    let mut stdout = stdout().lock();
    writeln!(stdout, "{prefix} {message}").ok();
    stdout.flush().ok();
}

/// Apply color to a module prefix based on module type
#[inline]
fn colorize_prefix(module: &str, module_lower: &str) -> String {
    let prefix = format!("[{module}]");
    match module_lower {
        "preview" => prefix
            .if_supports_color(Stdout, |p| p.style(owo_colors::Style::new().bright_blue().bold()))
            .to_string(),
        "check" => prefix
            .if_supports_color(Stdout, |p| p.style(owo_colors::Style::new().bright_green().bold()))
            .to_string(),
        "error" => prefix
            .if_supports_color(Stdout, |p| p.style(owo_colors::Style::new().bright_red().bold()))
            .to_string(),
        _ => prefix
            .if_supports_color(Stdout, |p| p.style(owo_colors::Style::new().bright_yellow().bold()))
            .to_string(),
    }
}
