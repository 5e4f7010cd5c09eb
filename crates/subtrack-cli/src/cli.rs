//! CLI argument definitions using clap
//!
//! This module contains all the clap structs and enums for parsing CLI arguments.
//! The actual command implementations are in the `commands` module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Subtrack - Subscription spending analytics
#[derive(Parser)]
#[command(name = "subtrack")]
#[command(about = "Subscription spending forecasts, budgets, and reminders", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Treat this date (YYYY-MM-DD) as today instead of the system date
    #[arg(long, global = true)]
    pub today: Option<String>,

    /// Seed for the forecast variance (reproducible output)
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the web server
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value = "8000")]
        port: u16,

        /// Host to bind to
        #[arg(long, default_value = "0.0.0.0")]
        host: String,
    },

    /// Forecast subscription spending for the coming months
    Forecast {
        /// JSON file: a subscription array or a forecast request object
        #[arg(short, long)]
        file: PathBuf,

        /// Number of months to forecast (overrides the file)
        #[arg(short, long)]
        months: Option<u32>,

        /// Print the raw JSON response
        #[arg(long)]
        json: bool,
    },

    /// Recommend a monthly subscription budget
    Budget {
        /// JSON file: a subscription array or a budget request object
        #[arg(short, long)]
        file: PathBuf,

        /// Monthly income (overrides the file)
        #[arg(long)]
        income: Option<f64>,

        /// Current subscription budget (overrides the file)
        #[arg(long)]
        current_budget: Option<f64>,

        /// Print the raw JSON response
        #[arg(long)]
        json: bool,
    },

    /// Show renewal reminders and optimization tips
    Reminders {
        /// JSON file: a subscription array or a reminder request object
        #[arg(short, long)]
        file: PathBuf,

        /// Print the raw JSON response
        #[arg(long)]
        json: bool,
    },
}
