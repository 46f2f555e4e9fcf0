//! Command-line interface module.

mod args;
pub mod check;
pub mod preview;

pub use args::{CheckArgs, Cli, Commands, PreviewArgs};
