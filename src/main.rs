//! weft - flatten and resolve content objects for static sites.

use anyhow::Result;
use clap::{ColorChoice, Parser};
use weft::cli::{self, Cli, Commands};
use weft::config::WeftConfig;
use weft::logger::{self, summary_error};

fn main() {
    if let Err(err) = run() {
        let detail = err
            .chain()
            .skip(1)
            .map(|cause| format!("  caused by: {cause}"))
            .collect::<Vec<_>>()
            .join("\n");
        summary_error(&err.to_string(), &detail);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    // These two need no configuration.
    match &cli.command {
        Commands::Init { dir, dry } => return cli::init::run_init(dir.as_deref(), *dry),
        Commands::Url { paths } => return cli::url::run_url(paths),
        _ => {}
    }

    let config = WeftConfig::load(&cli)?;

    match &cli.command {
        Commands::Resolve { io, strict, .. } => cli::resolve::run_resolve(io, *strict, &config),
        Commands::Pages { io, .. } => cli::pages::run_pages(io, &config),
        Commands::Check {
            input, warn_only, ..
        } => cli::check::run_check(input.as_deref(), *warn_only, &config),
        Commands::Init { .. } | Commands::Url { .. } => Ok(()),
    }
}
