//! Shared command utilities

use std::path::Path;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use subtrack_core::models::{Subscription, DATE_FORMAT};
use subtrack_core::{AnalysisEngine, FixedClock};

/// Build the analysis engine from the global `--today` and `--seed` flags
pub fn build_engine(today: Option<&str>, seed: Option<u64>) -> Result<AnalysisEngine> {
    let mut engine = AnalysisEngine::new();

    if let Some(today) = today {
        let date = NaiveDate::parse_from_str(today, DATE_FORMAT)
            .context("Invalid --today date format (use YYYY-MM-DD)")?;
        engine = engine.with_clock(FixedClock(date));
    }

    if let Some(seed) = seed {
        engine = engine.with_seed(seed);
    }

    Ok(engine)
}

/// Load a request file.
///
/// The file holds either a full request object or just an array of
/// subscriptions, in which case `from_subscriptions` builds the request.
pub fn load_request<T, F>(path: &Path, from_subscriptions: F) -> Result<T>
where
    T: DeserializeOwned,
    F: FnOnce(Vec<Subscription>) -> T,
{
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let value: serde_json::Value = serde_json::from_str(&content)
        .with_context(|| format!("Invalid JSON in {}", path.display()))?;

    if value.is_array() {
        let subscriptions: Vec<Subscription> = serde_json::from_value(value)
            .with_context(|| format!("Invalid subscription list in {}", path.display()))?;
        return Ok(from_subscriptions(subscriptions));
    }

    serde_json::from_value(value).with_context(|| format!("Invalid request in {}", path.display()))
}
