//! Server command implementation

use anyhow::{Context, Result};

pub async fn cmd_serve(host: &str, port: u16, today: Option<&str>, seed: Option<u64>) -> Result<()> {
    println!("🚀 Starting Subtrack analysis server...");
    println!("   Listening: http://{}:{}", host, port);

    // Parse allowed CORS origins from environment (comma-separated)
    let origins_str = std::env::var("SUBTRACK_ALLOWED_ORIGINS").unwrap_or_default();
    let allowed_origins = subtrack_server::parse_allowed_origins(&origins_str);

    // --seed wins over SUBTRACK_SEED
    let seed = match seed {
        Some(seed) => Some(seed),
        None => std::env::var("SUBTRACK_SEED")
            .ok()
            .filter(|s| !s.is_empty())
            .map(|s| s.parse::<u64>())
            .transpose()
            .context("SUBTRACK_SEED must be an unsigned integer")?,
    };

    if allowed_origins.is_empty() {
        println!("   🌐 CORS: any origin");
    } else {
        println!(
            "   🌐 CORS: {} (SUBTRACK_ALLOWED_ORIGINS)",
            allowed_origins.join(", ")
        );
    }
    if let Some(seed) = seed {
        println!("   🎲 Forecast seed: {}", seed);
    }
    if let Some(today) = today {
        println!("   📅 Today pinned to {}", today);
    }
    println!();
    println!("   Press Ctrl+C to stop");

    let config = subtrack_server::ServerConfig {
        allowed_origins,
        ..Default::default()
    };

    let engine = super::build_engine(today, seed)?;
    subtrack_server::serve(host, port, engine, config).await?;

    Ok(())
}
