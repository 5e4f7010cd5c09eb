//! Data models for Subtrack

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Category label used when the caller doesn't supply one
pub const DEFAULT_CATEGORY: &str = "Other";

/// Date format for billing dates and report output
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// One recurring charge, as supplied by the caller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subscription {
    pub name: String,
    pub price: f64,
    /// Raw `YYYY-MM-DD` text; parsed on demand so bad dates become content errors
    pub billing_date: String,
    #[serde(default = "default_category")]
    pub category: String,
    #[serde(default)]
    pub status: SubscriptionStatus,
}

fn default_category() -> String {
    DEFAULT_CATEGORY.to_string()
}

impl Subscription {
    pub fn new(
        name: impl Into<String>,
        price: f64,
        billing_date: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            price,
            billing_date: billing_date.into(),
            category: category.into(),
            status: SubscriptionStatus::Active,
        }
    }

    pub fn with_status(mut self, status: SubscriptionStatus) -> Self {
        self.status = status;
        self
    }

    pub fn is_active(&self) -> bool {
        self.status.is_active()
    }

    /// Parse the billing date, failing with the subscription name and offending text.
    ///
    /// The text is taken as-is: any whitespace makes the date invalid.
    pub fn billing_date(&self) -> Result<NaiveDate> {
        let invalid = || Error::InvalidBillingDate {
            subscription: self.name.clone(),
            value: self.billing_date.clone(),
        };

        // chrono skips whitespace ahead of numeric fields
        if self.billing_date.chars().any(char::is_whitespace) {
            return Err(invalid());
        }
        NaiveDate::parse_from_str(&self.billing_date, DATE_FORMAT).map_err(|_| invalid())
    }
}

/// Subscription lifecycle status.
///
/// Only `active` counts toward spending. Unknown statuses are kept verbatim
/// and treated as inactive.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SubscriptionStatus {
    #[default]
    Active,
    Cancelled,
    Paused,
    Other(String),
}

impl SubscriptionStatus {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Active => "active",
            Self::Cancelled => "cancelled",
            Self::Paused => "paused",
            Self::Other(s) => s,
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, Self::Active)
    }
}

impl fmt::Display for SubscriptionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SubscriptionStatus {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self::from(s.to_string()))
    }
}

impl From<String> for SubscriptionStatus {
    fn from(s: String) -> Self {
        match s.as_str() {
            "active" => Self::Active,
            "cancelled" => Self::Cancelled,
            "paused" => Self::Paused,
            _ => Self::Other(s),
        }
    }
}

impl From<SubscriptionStatus> for String {
    fn from(status: SubscriptionStatus) -> Self {
        status.as_str().to_string()
    }
}

/// A caller-supplied historical record. Only the number of points matters
/// (as a proxy for data richness); the content is never inspected.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HistoricalDataPoint(pub serde_json::Value);

/// A caller-supplied expense breakdown (label → amount).
///
/// Accepted for forward compatibility; budget computation doesn't read it.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExpenseEntry(pub BTreeMap<String, f64>);

/// Caller preferences for reminders.
///
/// Accepted for forward compatibility; reminder generation doesn't read it.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserPreferences(pub serde_json::Map<String, serde_json::Value>);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subscription_defaults() {
        let sub: Subscription = serde_json::from_str(
            r#"{"name": "Netflix", "price": 15.99, "billing_date": "2026-01-15"}"#,
        )
        .unwrap();

        assert_eq!(sub.category, "Other");
        assert_eq!(sub.status, SubscriptionStatus::Active);
        assert!(sub.is_active());
    }

    #[test]
    fn test_unknown_status_is_inactive_and_preserved() {
        let sub: Subscription = serde_json::from_str(
            r#"{"name": "Gym", "price": 40.0, "billing_date": "2026-01-15", "status": "trial"}"#,
        )
        .unwrap();

        assert_eq!(sub.status, SubscriptionStatus::Other("trial".into()));
        assert!(!sub.is_active());

        let json = serde_json::to_value(&sub).unwrap();
        assert_eq!(json["status"], "trial");
    }

    #[test]
    fn test_status_is_case_sensitive() {
        assert_eq!(
            "Active".parse::<SubscriptionStatus>().unwrap(),
            SubscriptionStatus::Other("Active".into())
        );
        assert!("active".parse::<SubscriptionStatus>().unwrap().is_active());
    }

    #[test]
    fn test_billing_date_parse() {
        let sub = Subscription::new("Netflix", 15.99, "2026-02-28", "Entertainment");
        assert_eq!(
            sub.billing_date().unwrap(),
            NaiveDate::from_ymd_opt(2026, 2, 28).unwrap()
        );

        let bad = Subscription::new("Netflix", 15.99, "02/28/2026", "Entertainment");
        let err = bad.billing_date().unwrap_err();
        assert!(matches!(err, Error::InvalidBillingDate { .. }));
        assert!(err.to_string().contains("Netflix"));
        assert!(err.to_string().contains("02/28/2026"));
    }

    #[test]
    fn test_billing_date_surrounding_whitespace_is_invalid() {
        for raw in [" 2026-02-28", "2026-02-28 ", "2026- 02-28", "2026-02-28\n"] {
            let sub = Subscription::new("Netflix", 15.99, raw, "Entertainment");
            let err = sub.billing_date().unwrap_err();
            assert!(matches!(
                err,
                Error::InvalidBillingDate { ref value, .. } if value == raw
            ));
        }
    }
}
