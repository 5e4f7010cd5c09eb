//! Spending Forecaster
//!
//! Projects the current monthly subscription total forward with a bounded
//! random variance per month:
//! - Base total from active subscriptions
//! - One multiplier drawn from [0.95, 1.10] per future month
//! - Two-tier confidence from the amount of history supplied

use chrono::{Datelike, Months, NaiveDate};
use rand::Rng;

use crate::error::{Error, Result};

use super::aggregate;
use super::types::{round_to, ForecastPoint, ForecastRequest, SpendingForecast};

/// Lowest variance multiplier
pub const VARIANCE_MIN: f64 = 0.95;
/// Highest variance multiplier
pub const VARIANCE_MAX: f64 = 1.10;
/// Longest forecast horizon in months (ten years)
pub const MAX_MONTHS_AHEAD: u32 = 120;

/// Monthly total above which spending is flagged as above average
const HIGH_SPENDING_THRESHOLD: f64 = 200.0;
/// Subscription count above which bundling is suggested
const MANY_SUBSCRIPTIONS: usize = 10;
/// Entertainment subscriptions above which consolidation is suggested
const ENTERTAINMENT_CONSOLIDATE: usize = 3;
/// History points needed for the higher confidence tier
const RICH_HISTORY_POINTS: usize = 6;

const HIGH_CONFIDENCE: f64 = 0.85;
const BASE_CONFIDENCE: f64 = 0.70;

const ENTERTAINMENT: &str = "Entertainment";

/// Forecasts subscription spending over the coming months
pub struct SpendingForecaster;

impl SpendingForecaster {
    pub fn new() -> Self {
        Self
    }

    /// Label for the month `offset` calendar months after `today`'s month
    fn month_label(today: NaiveDate, offset: u32) -> Result<String> {
        let first_of_month = today.with_day(1).ok_or_else(|| {
            Error::Computation(format!("no first day of month for {}", today))
        })?;
        let target = first_of_month
            .checked_add_months(Months::new(offset))
            .ok_or_else(|| {
                Error::Computation(format!(
                    "forecast month {} after {} is out of range",
                    offset, today
                ))
            })?;
        Ok(target.format("%Y-%m").to_string())
    }

    fn confidence(history_points: usize) -> f64 {
        if history_points > RICH_HISTORY_POINTS {
            HIGH_CONFIDENCE
        } else {
            BASE_CONFIDENCE
        }
    }

    fn insights(request: &ForecastRequest, base_total: f64) -> Vec<String> {
        let mut insights = Vec::new();

        if base_total > HIGH_SPENDING_THRESHOLD {
            insights.push(
                "Your subscription spending is above average. Consider reviewing unused services."
                    .to_string(),
            );
        }

        // Counts every record regardless of status
        if request.subscriptions.len() > MANY_SUBSCRIPTIONS {
            insights.push(
                "You have many active subscriptions. Bundle opportunities may exist.".to_string(),
            );
        }

        if aggregate::count_in_category(&request.subscriptions, ENTERTAINMENT)
            > ENTERTAINMENT_CONSOLIDATE
        {
            insights.push(
                "Multiple entertainment subscriptions detected. Consider consolidating."
                    .to_string(),
            );
        }

        insights
    }

    pub fn forecast<R: Rng + ?Sized>(
        &self,
        request: &ForecastRequest,
        today: NaiveDate,
        rng: &mut R,
    ) -> Result<SpendingForecast> {
        if request.months_ahead > MAX_MONTHS_AHEAD {
            return Err(Error::InvalidData(format!(
                "months_ahead must be between 0 and {}, got {}",
                MAX_MONTHS_AHEAD, request.months_ahead
            )));
        }

        let base_total = aggregate::active_total(&request.subscriptions);

        let mut predictions = Vec::with_capacity(request.months_ahead as usize);
        for offset in 1..=request.months_ahead {
            let variance = rng.gen_range(VARIANCE_MIN..=VARIANCE_MAX);
            predictions.push(ForecastPoint {
                month: Self::month_label(today, offset)?,
                predicted_amount: round_to(base_total * variance, 2),
                base_amount: base_total,
                variance_factor: round_to(variance, 3),
            });
        }

        let total_predicted = round_to(predictions.iter().map(|p| p.predicted_amount).sum(), 2);
        let confidence_score = Self::confidence(request.historical_data.len());
        let insights = Self::insights(request, base_total);

        tracing::debug!(
            months = request.months_ahead,
            base_total,
            total_predicted,
            insights = insights.len(),
            "Spending forecast complete"
        );

        Ok(SpendingForecast {
            predictions,
            total_predicted,
            confidence_score,
            insights,
        })
    }
}

impl Default for SpendingForecaster {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{HistoricalDataPoint, Subscription, SubscriptionStatus};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 1, 31).unwrap()
    }

    fn streaming() -> Vec<Subscription> {
        vec![
            Subscription::new("Netflix", 15.99, "2026-02-05", "Entertainment"),
            Subscription::new("Spotify", 9.99, "2026-02-10", "Entertainment"),
            Subscription::new("Hulu", 12.99, "2026-02-12", "Entertainment"),
            Subscription::new("Disney+", 7.99, "2026-02-20", "Entertainment"),
        ]
    }

    #[test]
    fn test_month_labels_advance_by_calendar_month() {
        assert_eq!(SpendingForecaster::month_label(today(), 1).unwrap(), "2026-02");
        assert_eq!(SpendingForecaster::month_label(today(), 2).unwrap(), "2026-03");
        assert_eq!(SpendingForecaster::month_label(today(), 12).unwrap(), "2027-01");
    }

    #[test]
    fn test_month_label_out_of_range() {
        let err = SpendingForecaster::month_label(NaiveDate::MAX, 1).unwrap_err();
        assert!(matches!(err, Error::Computation(_)));
    }

    #[test]
    fn test_horizon_beyond_limit_is_rejected() {
        let mut rng = StdRng::seed_from_u64(1);

        let longest = ForecastRequest::new(streaming(), MAX_MONTHS_AHEAD);
        let forecast = SpendingForecaster::new()
            .forecast(&longest, today(), &mut rng)
            .unwrap();
        assert_eq!(forecast.predictions.len(), MAX_MONTHS_AHEAD as usize);

        for months in [MAX_MONTHS_AHEAD + 1, u32::MAX] {
            let request = ForecastRequest::new(streaming(), months);
            let err = SpendingForecaster::new()
                .forecast(&request, today(), &mut rng)
                .unwrap_err();
            assert!(matches!(err, Error::InvalidData(_)));
        }
    }

    #[test]
    fn test_zero_months_is_empty() {
        let request = ForecastRequest::new(streaming(), 0);
        let mut rng = StdRng::seed_from_u64(1);

        let forecast = SpendingForecaster::new()
            .forecast(&request, today(), &mut rng)
            .unwrap();

        assert!(forecast.predictions.is_empty());
        assert_eq!(forecast.total_predicted, 0.0);
    }

    #[test]
    fn test_predictions_within_variance_bounds() {
        let request = ForecastRequest::new(streaming(), 12);
        let mut rng = StdRng::seed_from_u64(42);
        let base = 15.99 + 9.99 + 12.99 + 7.99;

        let forecast = SpendingForecaster::new()
            .forecast(&request, today(), &mut rng)
            .unwrap();

        assert_eq!(forecast.predictions.len(), 12);
        for point in &forecast.predictions {
            assert!((point.base_amount - base).abs() < 1e-9);
            assert!(point.predicted_amount >= round_to(base * VARIANCE_MIN, 2) - 0.005);
            assert!(point.predicted_amount <= round_to(base * VARIANCE_MAX, 2) + 0.005);
            assert!(point.variance_factor >= VARIANCE_MIN);
            assert!(point.variance_factor <= VARIANCE_MAX);
        }

        let sum: f64 = forecast.predictions.iter().map(|p| p.predicted_amount).sum();
        assert_eq!(forecast.total_predicted, round_to(sum, 2));
    }

    #[test]
    fn test_same_seed_same_forecast() {
        let request = ForecastRequest::new(streaming(), 6);
        let forecaster = SpendingForecaster::new();

        let a = forecaster
            .forecast(&request, today(), &mut StdRng::seed_from_u64(7))
            .unwrap();
        let b = forecaster
            .forecast(&request, today(), &mut StdRng::seed_from_u64(7))
            .unwrap();

        assert_eq!(a, b);
    }

    #[test]
    fn test_confidence_tiers() {
        assert_eq!(SpendingForecaster::confidence(0), 0.70);
        assert_eq!(SpendingForecaster::confidence(6), 0.70);
        assert_eq!(SpendingForecaster::confidence(7), 0.85);

        let mut request = ForecastRequest::new(vec![], 1);
        request.historical_data = vec![HistoricalDataPoint::default(); 7];
        let forecast = SpendingForecaster::new()
            .forecast(&request, today(), &mut StdRng::seed_from_u64(3))
            .unwrap();
        assert_eq!(forecast.confidence_score, 0.85);
    }

    #[test]
    fn test_entertainment_consolidation_insight() {
        let request = ForecastRequest::new(streaming(), 1);
        let forecast = SpendingForecaster::new()
            .forecast(&request, today(), &mut StdRng::seed_from_u64(9))
            .unwrap();

        assert_eq!(
            forecast.insights,
            vec!["Multiple entertainment subscriptions detected. Consider consolidating."]
        );
    }

    #[test]
    fn test_entertainment_count_includes_inactive() {
        let mut subs = streaming();
        subs.truncate(3);
        subs.push(
            Subscription::new("Max", 15.99, "2026-02-01", "Entertainment")
                .with_status(SubscriptionStatus::Cancelled),
        );
        let request = ForecastRequest::new(subs, 1);
        let forecast = SpendingForecaster::new()
            .forecast(&request, today(), &mut StdRng::seed_from_u64(9))
            .unwrap();

        assert_eq!(forecast.insights.len(), 1);
    }

    #[test]
    fn test_high_spending_and_bundle_insights_in_order() {
        let subs: Vec<_> = (0..11)
            .map(|i| Subscription::new(format!("Service {}", i), 25.0, "2026-02-01", "Software"))
            .collect();
        let request = ForecastRequest::new(subs, 1);
        let forecast = SpendingForecaster::new()
            .forecast(&request, today(), &mut StdRng::seed_from_u64(9))
            .unwrap();

        assert_eq!(forecast.insights.len(), 2);
        assert!(forecast.insights[0].contains("above average"));
        assert!(forecast.insights[1].contains("Bundle opportunities"));
    }

    #[test]
    fn test_bundle_insight_counts_inactive_records() {
        let subs: Vec<_> = (0..11)
            .map(|i| {
                let sub = Subscription::new(format!("Service {}", i), 5.0, "2026-02-01", "Software");
                if i % 2 == 0 {
                    sub.with_status(SubscriptionStatus::Cancelled)
                } else {
                    sub
                }
            })
            .collect();
        let request = ForecastRequest::new(subs, 1);
        let forecast = SpendingForecaster::new()
            .forecast(&request, today(), &mut StdRng::seed_from_u64(9))
            .unwrap();

        assert_eq!(forecast.predictions[0].base_amount, 25.0);
        assert_eq!(
            forecast.insights,
            vec!["You have many active subscriptions. Bundle opportunities may exist."]
        );
    }

    #[test]
    fn test_empty_subscriptions_no_insights() {
        let request = ForecastRequest::new(vec![], 3);
        let forecast = SpendingForecaster::new()
            .forecast(&request, today(), &mut StdRng::seed_from_u64(9))
            .unwrap();

        assert_eq!(forecast.predictions.len(), 3);
        assert!(forecast.predictions.iter().all(|p| p.predicted_amount == 0.0));
        assert!(forecast.insights.is_empty());
    }
}
