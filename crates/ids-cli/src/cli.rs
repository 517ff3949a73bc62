//! CLI argument parsing.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Identity server integration tools.
#[derive(Debug, Parser)]
#[command(name = "ids")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Database URL (overrides `DATABASE_URL` from the environment or `.env`).
    #[arg(long, global = true)]
    pub database_url: Option<String>,

    /// Enable debug logging.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Insert the configuration entities that are missing from the store.
    Seed(SeedArgs),

    /// Activate a provisioned account by setting its password.
    Activate(ActivateArgs),

    /// Print the quickstart catalog as JSON.
    Catalog,
}

/// Seed command arguments.
#[derive(Debug, clap::Args)]
pub struct SeedArgs {
    /// JSON catalog to seed instead of the quickstart catalog.
    #[arg(long)]
    pub catalog: Option<PathBuf>,

    /// Seed an in-memory store instead of the database.
    #[arg(long)]
    pub in_memory: bool,
}

/// Activate command arguments.
#[derive(Debug, clap::Args)]
pub struct ActivateArgs {
    /// Username of the provisioned account.
    pub username: String,

    /// Password to set.
    #[arg(long, env = "IDS_PASSWORD", hide_env_values = true)]
    pub password: String,
}
