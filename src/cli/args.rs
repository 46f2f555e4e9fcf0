//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

use crate::config::CONFIG_FILE;

/// Navigation highlighting and blog search for static sites
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path, searched upward from the current directory
    #[arg(short = 'C', long, global = true, default_value = CONFIG_FILE, value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Enable verbose output for debugging
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Show what a page looks like after navigation highlighting and search
    #[command(visible_alias = "p")]
    Preview {
        #[command(flatten)]
        args: PreviewArgs,
    },

    /// Check a built site for missing asset references
    #[command(visible_alias = "c")]
    Check {
        #[command(flatten)]
        args: CheckArgs,
    },
}

/// Preview command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct PreviewArgs {
    /// HTML file to load
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub file: PathBuf,

    /// Page path the browser would report (`location.pathname`)
    #[arg(short, long, default_value = "/")]
    pub path: String,

    /// Text typed into the search box (default: the input's own value)
    #[arg(short, long)]
    pub query: Option<String>,

    /// Print the result as JSON
    #[arg(short, long)]
    pub json: bool,
}

/// Check command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct CheckArgs {
    /// Site root to scan (default: current directory)
    #[arg(value_name = "ROOT", value_hint = clap::ValueHint::DirPath)]
    pub root: Option<PathBuf>,

    /// Treat findings as warnings instead of errors
    #[arg(long, short = 'w')]
    pub warn_only: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_preview() {
        let cli = Cli::parse_from([
            "site-enhance", "preview", "page.html", "--path", "/blog/a.html", "-q", "rust", "--json",
        ]);
        let Commands::Preview { args } = cli.command else {
            panic!("expected preview");
        };
        assert_eq!(args.file, PathBuf::from("page.html"));
        assert_eq!(args.path, "/blog/a.html");
        assert_eq!(args.query.as_deref(), Some("rust"));
        assert!(args.json);
    }

    #[test]
    fn test_parse_check_alias_and_globals() {
        let cli = Cli::parse_from(["site-enhance", "c", "public", "-w", "-v", "-C", "site.toml"]);
        assert!(cli.verbose);
        assert_eq!(cli.config, PathBuf::from("site.toml"));
        let Commands::Check { args } = cli.command else {
            panic!("expected check");
        };
        assert_eq!(args.root, Some(PathBuf::from("public")));
        assert!(args.warn_only);
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["site-enhance", "preview", "index.html"]);
        assert_eq!(cli.config, PathBuf::from(CONFIG_FILE));
        let Commands::Preview { args } = cli.command else {
            panic!("expected preview");
        };
        assert_eq!(args.path, "/");
        assert!(args.query.is_none());
    }
}
