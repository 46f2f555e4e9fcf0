//! site-enhance - preview and check static site pages.

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    use clap::{ColorChoice, Parser};
    use site_enhance::cli::{Cli, Commands, check::check_site, preview::run_preview};
    use site_enhance::{EnhanceConfig, logger};

    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    let config = EnhanceConfig::load(&cli.config)?;

    match &cli.command {
        Commands::Preview { args } => run_preview(args, &config),
        Commands::Check { args } => check_site(args, &config),
    }
}

// The browser build starts from `dom::web::start`.
#[cfg(target_arch = "wasm32")]
fn main() {}
