//! # ids
//!
//! Command-line entry point.

#![forbid(unsafe_code)]

use anyhow::Context;
use clap::Parser;
use ids_cli::{
    cli::{Cli, Command},
    commands::{run_activate, run_catalog, run_seed},
    output::error,
};
use ids_core::Config;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = Config::from_env().context("failed to load configuration")?;

    let level = if cli.verbose { "debug" } else { config.log_level.as_str() };
    tracing_subscriber::registry()
        .with(EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let database_url = cli.database_url.as_deref();
    let result = match cli.command {
        Command::Seed(args) => run_seed(args, &config, database_url).await,
        Command::Activate(args) => run_activate(args, &config, database_url).await,
        Command::Catalog => run_catalog(),
    };

    let code = match result {
        Ok(code) => code,
        Err(e) => {
            error(&e.to_string());
            e.exit_code()
        }
    };

    if code != 0 {
        std::process::exit(code);
    }
    Ok(())
}
