//! CLI command implementations
//!
//! Commands are organized by domain:
//! - `analysis` - Forecast, budget, and reminder commands over a JSON file
//! - `core` - Shared utilities (engine construction, request file loading)
//! - `serve` - Web server command

pub mod analysis;
pub mod core;
pub mod serve;

// Re-export command functions for main.rs
pub use analysis::*;
pub use core::*;
pub use serve::*;

/// Truncate a string to a maximum length, adding "..." if truncated
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
