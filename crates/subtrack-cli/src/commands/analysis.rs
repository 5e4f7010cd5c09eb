//! Analysis command implementations

use std::path::Path;

use anyhow::Result;
use serde::Serialize;
use subtrack_core::analysis::{
    BudgetRecommendation, BudgetRequest, ForecastRequest, ReminderKind, ReminderPriority,
    ReminderRequest, ReminderSuggestions, SpendingForecast,
};
use subtrack_core::AnalysisEngine;

use super::{load_request, truncate};

const DEFAULT_MONTHS_AHEAD: u32 = 3;

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Load a forecast request, applying the `--months` override
pub fn load_forecast_request(path: &Path, months: Option<u32>) -> Result<ForecastRequest> {
    let mut request = load_request(path, |subs| {
        ForecastRequest::new(subs, DEFAULT_MONTHS_AHEAD)
    })?;
    if let Some(months) = months {
        request.months_ahead = months;
    }
    Ok(request)
}

/// Load a budget request, applying `--income` and `--current-budget` overrides
pub fn load_budget_request(
    path: &Path,
    income: Option<f64>,
    current_budget: Option<f64>,
) -> Result<BudgetRequest> {
    let mut request = load_request(path, BudgetRequest::new)?;
    if let Some(income) = income {
        request.income = income;
    }
    if let Some(current_budget) = current_budget {
        request.current_budget = current_budget;
    }
    if request.income < 0.0 || request.current_budget < 0.0 {
        anyhow::bail!("Income and current budget must not be negative");
    }
    Ok(request)
}

pub fn load_reminder_request(path: &Path) -> Result<ReminderRequest> {
    load_request(path, ReminderRequest::new)
}

pub fn cmd_forecast(
    engine: &AnalysisEngine,
    path: &Path,
    months: Option<u32>,
    json: bool,
) -> Result<()> {
    let request = load_forecast_request(path, months)?;
    let forecast = engine.forecast_spending(&request)?;

    if json {
        return print_json(&forecast);
    }
    print_forecast(&forecast);
    Ok(())
}

fn print_forecast(forecast: &SpendingForecast) {
    println!();
    println!("📈 Spending Forecast");
    println!("   ─────────────────────────────────────────────");

    if forecast.predictions.is_empty() {
        println!("   No months requested.");
    }
    for point in &forecast.predictions {
        println!(
            "   {} │ ${:>9.2} │ ×{:.3}",
            point.month, point.predicted_amount, point.variance_factor
        );
    }

    println!("   ─────────────────────────────────────────────");
    println!("   Total:      ${:.2}", forecast.total_predicted);
    println!("   Confidence: {:.0}%", forecast.confidence_score * 100.0);

    if !forecast.insights.is_empty() {
        println!();
        println!("💡 Insights");
        for insight in &forecast.insights {
            println!("   • {}", insight);
        }
    }
}

pub fn cmd_budget(
    engine: &AnalysisEngine,
    path: &Path,
    income: Option<f64>,
    current_budget: Option<f64>,
    json: bool,
) -> Result<()> {
    let request = load_budget_request(path, income, current_budget)?;
    let recommendation = engine.recommend_budget(&request)?;

    if json {
        return print_json(&recommendation);
    }
    print_budget(&recommendation);
    Ok(())
}

fn print_budget(rec: &BudgetRecommendation) {
    println!();
    println!("💰 Budget Recommendation");
    println!("   ─────────────────────────────────────────────");
    println!("   Recommended budget: ${:.2}", rec.recommended_budget);
    println!("   Savings potential:  ${:.2}", rec.savings_potential);

    if !rec.category_allocations.is_empty() {
        println!();
        println!("   By category:");
        for (category, amount) in &rec.category_allocations {
            println!("   {:20} │ ${:>9.2}", truncate(category, 20), amount);
        }
    }

    println!();
    println!("💡 Recommendations");
    for line in &rec.recommendations {
        println!("   • {}", line);
    }
}

pub fn cmd_reminders(engine: &AnalysisEngine, path: &Path, json: bool) -> Result<()> {
    let request = load_reminder_request(path)?;
    let suggestions = engine.suggest_reminders(&request)?;

    if json {
        return print_json(&suggestions);
    }
    print_reminders(&suggestions);
    Ok(())
}

fn print_reminders(suggestions: &ReminderSuggestions) {
    println!();
    println!("🔔 Reminders");
    println!("   ─────────────────────────────────────────────");

    for reminder in &suggestions.reminders {
        let icon = match (reminder.kind, reminder.priority) {
            (ReminderKind::Overdue, _) => "🚨",
            (ReminderKind::UpcomingRenewal, ReminderPriority::High) => "⚠️ ",
            (ReminderKind::UpcomingRenewal, _) => "📅",
            (ReminderKind::FreeTrialEnding, _) => "⏳",
        };
        println!("   {} [{}] {}", icon, reminder.priority, reminder.message);
    }

    println!();
    println!("💡 Optimization tips");
    for tip in &suggestions.optimization_tips {
        println!("   • {}", tip);
    }
}
