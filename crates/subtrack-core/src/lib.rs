//! Subtrack Core Library
//!
//! Pure, synchronous analytics over subscription records:
//! - Active-subscription filtering and category aggregation
//! - Spending forecast with seedable variance
//! - Budget recommendation capped against income
//! - Renewal/overdue reminders and optimization tips
//! - Injectable clock for date-dependent rules

pub mod analysis;
pub mod clock;
pub mod error;
pub mod models;

pub use analysis::{
    AnalysisEngine, BudgetRecommendation, BudgetRequest, ForecastRequest, ReminderRequest,
    ReminderSuggestions, SpendingForecast,
};
pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{Error, Operation, Result};
pub use models::{Subscription, SubscriptionStatus};
