//! Subscription Analysis
//!
//! Three independent, stateless analyzers over a caller-supplied list of
//! subscriptions. All of them share the active-subscription helpers in
//! [`aggregate`].
//!
//! ## Analyzers
//!
//! - **Spending Forecaster** - Projects monthly totals with bounded variance
//! - **Budget Recommender** - Suggests a budget and where to cut
//! - **Reminder Advisor** - Flags due/overdue renewals and optimization tips
//!
//! ## Usage
//!
//! ```rust,ignore
//! use subtrack_core::analysis::{AnalysisEngine, ForecastRequest};
//!
//! let engine = AnalysisEngine::new().with_seed(42);
//! let forecast = engine.forecast_spending(&ForecastRequest::new(subs, 3))?;
//! ```

pub mod aggregate;
pub mod budget;
pub mod engine;
pub mod forecaster;
pub mod reminders;
pub mod types;

pub use budget::BudgetRecommender;
pub use engine::AnalysisEngine;
pub use forecaster::{SpendingForecaster, MAX_MONTHS_AHEAD};
pub use reminders::ReminderAdvisor;
pub use types::{
    BudgetRecommendation, BudgetRequest, CategorySpendingMap, ForecastPoint, ForecastRequest,
    Reminder, ReminderKind, ReminderPriority, ReminderRequest, ReminderSuggestions,
    SpendingForecast,
};
