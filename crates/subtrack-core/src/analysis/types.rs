//! Request and response types for the analysis operations

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::{ExpenseEntry, HistoricalDataPoint, Subscription, UserPreferences};

/// Category label → summed active-subscription price
pub type CategorySpendingMap = BTreeMap<String, f64>;

fn default_months_ahead() -> u32 {
    3
}

/// Input for `forecast_spending`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastRequest {
    pub subscriptions: Vec<Subscription>,
    #[serde(default)]
    pub historical_data: Vec<HistoricalDataPoint>,
    #[serde(default = "default_months_ahead")]
    pub months_ahead: u32,
}

impl ForecastRequest {
    pub fn new(subscriptions: Vec<Subscription>, months_ahead: u32) -> Self {
        Self {
            subscriptions,
            historical_data: vec![],
            months_ahead,
        }
    }
}

/// Input for `recommend_budget`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BudgetRequest {
    pub subscriptions: Vec<Subscription>,
    /// 0 means "use the current subscription total"
    #[serde(default)]
    pub current_budget: f64,
    /// 0 means "unknown"
    #[serde(default)]
    pub income: f64,
    /// Reserved; doesn't affect the recommendation
    #[serde(default)]
    pub expenses: Vec<ExpenseEntry>,
}

impl BudgetRequest {
    pub fn new(subscriptions: Vec<Subscription>) -> Self {
        Self {
            subscriptions,
            current_budget: 0.0,
            income: 0.0,
            expenses: vec![],
        }
    }

    pub fn with_income(mut self, income: f64) -> Self {
        self.income = income;
        self
    }

    pub fn with_current_budget(mut self, current_budget: f64) -> Self {
        self.current_budget = current_budget;
        self
    }
}

/// Input for `suggest_reminders`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReminderRequest {
    pub subscriptions: Vec<Subscription>,
    /// Reserved; doesn't affect the suggestions
    #[serde(default)]
    pub user_preferences: UserPreferences,
}

impl ReminderRequest {
    pub fn new(subscriptions: Vec<Subscription>) -> Self {
        Self {
            subscriptions,
            user_preferences: UserPreferences::default(),
        }
    }
}

/// One future month's projection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastPoint {
    /// `YYYY-MM`
    pub month: String,
    pub predicted_amount: f64,
    pub base_amount: f64,
    pub variance_factor: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpendingForecast {
    pub predictions: Vec<ForecastPoint>,
    pub total_predicted: f64,
    pub confidence_score: f64,
    pub insights: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetRecommendation {
    pub recommended_budget: f64,
    pub category_allocations: CategorySpendingMap,
    pub savings_potential: f64,
    pub recommendations: Vec<String>,
}

/// Kinds of reminders
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReminderKind {
    /// Renewal within the next week
    UpcomingRenewal,
    /// Billing date already passed
    Overdue,
    /// Generic trial-conversion nudge
    FreeTrialEnding,
}

impl ReminderKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReminderKind::UpcomingRenewal => "upcoming_renewal",
            ReminderKind::Overdue => "overdue",
            ReminderKind::FreeTrialEnding => "free_trial_ending",
        }
    }
}

impl fmt::Display for ReminderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// How soon a reminder needs attention
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReminderPriority {
    Medium,
    High,
    Urgent,
}

impl ReminderPriority {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReminderPriority::Medium => "medium",
            ReminderPriority::High => "high",
            ReminderPriority::Urgent => "urgent",
        }
    }
}

impl fmt::Display for ReminderPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One actionable notice
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reminder {
    #[serde(rename = "type")]
    pub kind: ReminderKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscription: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    pub message: String,
    pub priority: ReminderPriority,
}

impl Reminder {
    /// Reminder tied to a specific subscription charge
    pub fn for_subscription(
        kind: ReminderKind,
        subscription: &Subscription,
        message: impl Into<String>,
        priority: ReminderPriority,
    ) -> Self {
        Self {
            kind,
            subscription: Some(subscription.name.clone()),
            date: Some(subscription.billing_date.clone()),
            amount: Some(subscription.price),
            message: message.into(),
            priority,
        }
    }

    /// Reminder not tied to any subscription
    pub fn general(
        kind: ReminderKind,
        message: impl Into<String>,
        priority: ReminderPriority,
    ) -> Self {
        Self {
            kind,
            subscription: None,
            date: None,
            amount: None,
            message: message.into(),
            priority,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReminderSuggestions {
    pub reminders: Vec<Reminder>,
    pub optimization_tips: Vec<String>,
}

/// Round half away from zero to `places` decimals
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}
