//! Subtrack CLI - Subscription spending analytics
//!
//! Usage:
//!   subtrack forecast --file subs.json --months 3    Forecast spending
//!   subtrack budget --file subs.json --income 4000   Recommend a budget
//!   subtrack reminders --file subs.json              Renewal reminders and tips
//!   subtrack serve --port 8000                       Start web server

mod cli;
mod commands;


use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::*;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).compact())
        .init();

    match cli.command {
        Commands::Serve { port, host } => {
            commands::cmd_serve(&host, port, cli.today.as_deref(), cli.seed).await
        }
        Commands::Forecast { file, months, json } => {
            let engine = commands::build_engine(cli.today.as_deref(), cli.seed)?;
            commands::cmd_forecast(&engine, &file, months, json)
        }
        Commands::Budget {
            file,
            income,
            current_budget,
            json,
        } => {
            let engine = commands::build_engine(cli.today.as_deref(), cli.seed)?;
            commands::cmd_budget(&engine, &file, income, current_budget, json)
        }
        Commands::Reminders { file, json } => {
            let engine = commands::build_engine(cli.today.as_deref(), cli.seed)?;
            commands::cmd_reminders(&engine, &file, json)
        }
    }
}
