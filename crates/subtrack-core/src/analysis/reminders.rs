//! Reminder/Optimization Advisor
//!
//! Scans active subscriptions for renewals due within a week and for
//! billing dates already passed, then adds general optimization tips.

use chrono::NaiveDate;

use crate::error::Result;
use crate::models::DEFAULT_CATEGORY;

use super::aggregate;
use super::types::{Reminder, ReminderKind, ReminderPriority, ReminderRequest, ReminderSuggestions};

/// Renewals this many days out (or fewer) get a reminder
const RENEWAL_WINDOW_DAYS: i64 = 7;
/// Renewals above this price are high priority
const HIGH_PRIORITY_PRICE: f64 = 50.0;
/// Subscriptions above this price prompt a review tip
const EXPENSIVE_PRICE: f64 = 20.0;
/// More than this many active subscriptions in a category prompts consolidation
const CONSOLIDATE_COUNT: usize = 2;

const EXPENSIVE_TIP: &str =
    "Review your most expensive subscriptions for potential downgrades or cancellations.";
const ANNUAL_BILLING_TIP: &str =
    "Consider switching to annual billing for frequently used services to save 10-20%.";
const FREE_TRIAL_MESSAGE: &str =
    "Remember to cancel free trials before they convert to paid subscriptions";

/// Suggests billing reminders and optimization tips
pub struct ReminderAdvisor;

impl ReminderAdvisor {
    pub fn new() -> Self {
        Self
    }

    fn billing_reminders(request: &ReminderRequest, today: NaiveDate) -> Result<Vec<Reminder>> {
        let mut reminders = Vec::new();

        for sub in aggregate::active(&request.subscriptions) {
            // A bad date fails the whole request
            let days_until = (sub.billing_date()? - today).num_days();

            if (0..=RENEWAL_WINDOW_DAYS).contains(&days_until) {
                let priority = if sub.price > HIGH_PRIORITY_PRICE {
                    ReminderPriority::High
                } else {
                    ReminderPriority::Medium
                };
                reminders.push(Reminder::for_subscription(
                    ReminderKind::UpcomingRenewal,
                    sub,
                    format!(
                        "{} renews in {} days for ${:.2}",
                        sub.name, days_until, sub.price
                    ),
                    priority,
                ));
            } else if days_until < 0 {
                reminders.push(Reminder::for_subscription(
                    ReminderKind::Overdue,
                    sub,
                    format!("{} payment was due {} days ago", sub.name, -days_until),
                    ReminderPriority::Urgent,
                ));
            }
        }

        Ok(reminders)
    }

    fn optimization_tips(request: &ReminderRequest) -> Vec<String> {
        let mut tips = Vec::new();

        if aggregate::active(&request.subscriptions).any(|s| s.price > EXPENSIVE_PRICE) {
            tips.push(EXPENSIVE_TIP.to_string());
        }

        for group in aggregate::group_active_by_category(&request.subscriptions) {
            if group.count() > CONSOLIDATE_COUNT && group.category != DEFAULT_CATEGORY {
                tips.push(format!(
                    "You have {} {} subscriptions. Consider consolidating.",
                    group.count(),
                    group.category
                ));
            }
        }

        tips.push(ANNUAL_BILLING_TIP.to_string());
        tips
    }

    pub fn suggest(&self, request: &ReminderRequest, today: NaiveDate) -> Result<ReminderSuggestions> {
        let mut reminders = Self::billing_reminders(request, today)?;
        let optimization_tips = Self::optimization_tips(request);

        reminders.push(Reminder::general(
            ReminderKind::FreeTrialEnding,
            FREE_TRIAL_MESSAGE,
            ReminderPriority::Medium,
        ));

        tracing::debug!(
            %today,
            reminders = reminders.len(),
            tips = optimization_tips.len(),
            "Reminder suggestions complete"
        );

        Ok(ReminderSuggestions {
            reminders,
            optimization_tips,
        })
    }
}

impl Default for ReminderAdvisor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::models::{Subscription, SubscriptionStatus};
    use chrono::Duration;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 10).unwrap()
    }

    fn due_in(days: i64) -> String {
        (today() + Duration::days(days)).format("%Y-%m-%d").to_string()
    }

    fn suggest(subs: Vec<Subscription>) -> ReminderSuggestions {
        ReminderAdvisor::new()
            .suggest(&ReminderRequest::new(subs), today())
            .unwrap()
    }

    #[test]
    fn test_upcoming_renewal_high_priority() {
        let result = suggest(vec![Subscription::new("Adobe", 60.0, due_in(3), "Software")]);

        let renewals: Vec<_> = result
            .reminders
            .iter()
            .filter(|r| r.kind == ReminderKind::UpcomingRenewal)
            .collect();
        assert_eq!(renewals.len(), 1);
        assert_eq!(renewals[0].priority, ReminderPriority::High);
        assert_eq!(renewals[0].message, "Adobe renews in 3 days for $60.00");
        assert_eq!(renewals[0].subscription.as_deref(), Some("Adobe"));
        assert_eq!(renewals[0].amount, Some(60.0));
        assert_eq!(renewals[0].date, Some(due_in(3)));
    }

    #[test]
    fn test_upcoming_renewal_medium_priority() {
        let result = suggest(vec![Subscription::new("Spotify", 9.99, due_in(0), "Music")]);

        assert_eq!(result.reminders[0].kind, ReminderKind::UpcomingRenewal);
        assert_eq!(result.reminders[0].priority, ReminderPriority::Medium);
        assert_eq!(result.reminders[0].message, "Spotify renews in 0 days for $9.99");
    }

    #[test]
    fn test_price_exactly_fifty_is_medium() {
        let result = suggest(vec![Subscription::new("Gym", 50.0, due_in(7), "Health")]);
        assert_eq!(result.reminders[0].priority, ReminderPriority::Medium);
    }

    #[test]
    fn test_overdue_reminder() {
        let result = suggest(vec![Subscription::new("Netflix", 15.99, due_in(-2), "Video")]);

        let overdue: Vec<_> = result
            .reminders
            .iter()
            .filter(|r| r.kind == ReminderKind::Overdue)
            .collect();
        assert_eq!(overdue.len(), 1);
        assert_eq!(overdue[0].priority, ReminderPriority::Urgent);
        assert_eq!(overdue[0].message, "Netflix payment was due 2 days ago");
    }

    #[test]
    fn test_no_reminder_beyond_window() {
        let result = suggest(vec![Subscription::new("Netflix", 15.99, due_in(8), "Video")]);

        assert_eq!(result.reminders.len(), 1);
        assert_eq!(result.reminders[0].kind, ReminderKind::FreeTrialEnding);
    }

    #[test]
    fn test_inactive_subscriptions_skipped() {
        // Even a malformed date is ignored when the subscription isn't active
        let result = suggest(vec![
            Subscription::new("Old", 99.0, due_in(-5), "Video")
                .with_status(SubscriptionStatus::Cancelled),
            Subscription::new("Broken", 99.0, "not-a-date", "Video")
                .with_status(SubscriptionStatus::Paused),
        ]);

        assert_eq!(result.reminders.len(), 1);
        assert_eq!(
            result.optimization_tips,
            vec![ANNUAL_BILLING_TIP.to_string()]
        );
    }

    #[test]
    fn test_malformed_date_fails_whole_request() {
        let request = ReminderRequest::new(vec![
            Subscription::new("Good", 10.0, due_in(1), "Video"),
            Subscription::new("Bad", 10.0, "2026-13-45", "Video"),
        ]);

        let err = ReminderAdvisor::new().suggest(&request, today()).unwrap_err();
        match err {
            Error::InvalidBillingDate {
                subscription,
                value,
            } => {
                assert_eq!(subscription, "Bad");
                assert_eq!(value, "2026-13-45");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_static_outputs_on_empty_input() {
        let result = suggest(vec![]);

        assert_eq!(result.reminders.len(), 1);
        assert_eq!(result.reminders[0].kind, ReminderKind::FreeTrialEnding);
        assert_eq!(result.reminders[0].priority, ReminderPriority::Medium);
        assert_eq!(result.reminders[0].message, FREE_TRIAL_MESSAGE);
        assert_eq!(result.optimization_tips, vec![ANNUAL_BILLING_TIP.to_string()]);
    }

    #[test]
    fn test_trial_reminder_is_last() {
        let result = suggest(vec![
            Subscription::new("A", 10.0, due_in(-1), "Video"),
            Subscription::new("B", 10.0, due_in(2), "Video"),
        ]);

        let kinds: Vec<_> = result.reminders.iter().map(|r| r.kind).collect();
        assert_eq!(
            kinds,
            vec![
                ReminderKind::Overdue,
                ReminderKind::UpcomingRenewal,
                ReminderKind::FreeTrialEnding
            ]
        );
    }

    #[test]
    fn test_optimization_tips_order() {
        let result = suggest(vec![
            Subscription::new("Netflix", 15.99, due_in(20), "Video"),
            Subscription::new("Misc 1", 1.0, due_in(20), "Other"),
            Subscription::new("Hulu", 12.99, due_in(20), "Video"),
            Subscription::new("Misc 2", 1.0, due_in(20), "Other"),
            Subscription::new("Adobe", 54.99, due_in(20), "Software"),
            Subscription::new("Max", 15.99, due_in(20), "Video"),
            Subscription::new("Misc 3", 1.0, due_in(20), "Other"),
            Subscription::new("Figma", 15.0, due_in(20), "Software"),
            Subscription::new("Notion", 10.0, due_in(20), "Software"),
        ]);

        assert_eq!(
            result.optimization_tips,
            vec![
                EXPENSIVE_TIP.to_string(),
                "You have 3 Video subscriptions. Consider consolidating.".to_string(),
                "You have 3 Software subscriptions. Consider consolidating.".to_string(),
                ANNUAL_BILLING_TIP.to_string(),
            ]
        );
    }

    #[test]
    fn test_consolidation_counts_active_only() {
        let result = suggest(vec![
            Subscription::new("Netflix", 5.0, due_in(20), "Video"),
            Subscription::new("Hulu", 5.0, due_in(20), "Video"),
            Subscription::new("Max", 5.0, due_in(20), "Video")
                .with_status(SubscriptionStatus::Cancelled),
        ]);

        assert_eq!(result.optimization_tips, vec![ANNUAL_BILLING_TIP.to_string()]);
    }
}
