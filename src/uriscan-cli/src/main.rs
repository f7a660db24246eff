mod cache;
mod cli;
mod commands;
mod config;
mod file_io;
mod report;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use cli::*;
use commands::configure::ConfigUpdate;

/// Log to stderr so reports on stdout stay machine-readable.
fn init_tracing(verbose: bool, quiet: bool) {
    let fallback = if verbose {
        "uriscan=debug"
    } else if quiet {
        "uriscan=warn"
    } else {
        "uriscan=info"
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| fallback.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    match cli.command {
        Commands::Init { cache_dir, dataset } => {
            commands::init::handle(cache_dir.as_deref(), dataset)?;
        }

        Commands::Render { args } => {
            commands::run::render(&args)?;
        }

        Commands::Check { args } => {
            commands::run::check(&args)?;
        }

        Commands::Decode { input, svg, ratio } => {
            commands::decode::handle(input.as_deref(), svg, ratio)?;
        }

        Commands::Configure {
            cache_dir,
            membership,
            write_artifacts,
            show,
        } => {
            let update = ConfigUpdate {
                cache_dir,
                membership,
                write_artifacts,
            };
            commands::configure::handle(update, show)?;
        }
    }

    Ok(())
}
