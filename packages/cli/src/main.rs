mod catalog;
mod config;
mod demo;
mod session;

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "trivium", about = "Contest scoring engine playground", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Seed a contest catalog and walk through a full attempt.
    Demo {
        /// TOML catalog file. Uses the built-in sample when absent.
        #[arg(long)]
        catalog: Option<PathBuf>,
    },
    /// Show the persisted session record.
    Session,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_target(false).init();

    let cli = Cli::parse();
    let config = config::AppConfig::load().context("Failed to load config")?;

    match cli.command {
        Command::Demo { catalog } => demo::run(&config, catalog.as_deref()),
        Command::Session => session::show(&config),
    }
}
