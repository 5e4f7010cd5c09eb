//! Subscription analysis handlers

use std::sync::Arc;

use axum::{extract::State, Json};
use serde::Deserialize;

use crate::{AppError, AppState, JsonBody};
use subtrack_core::analysis::{
    BudgetRecommendation, BudgetRequest, ForecastRequest, ReminderRequest, ReminderSuggestions,
    SpendingForecast,
};
use subtrack_core::models::{HistoricalDataPoint, Subscription};

fn default_months_ahead() -> i64 {
    3
}

/// Request body for spending prediction.
///
/// `months_ahead` is signed here so negative input is rejected with a
/// validation message instead of a generic deserialization failure.
#[derive(Debug, Deserialize)]
pub struct PredictSpendingBody {
    pub subscriptions: Vec<Subscription>,
    #[serde(default)]
    pub historical_data: Vec<HistoricalDataPoint>,
    #[serde(default = "default_months_ahead")]
    pub months_ahead: i64,
}

impl PredictSpendingBody {
    fn into_request(self, max_months_ahead: u32) -> Result<ForecastRequest, AppError> {
        let months_ahead = u32::try_from(self.months_ahead)
            .ok()
            .filter(|m| *m <= max_months_ahead)
            .ok_or_else(|| {
                AppError::bad_request(&format!(
                    "months_ahead must be between 0 and {}",
                    max_months_ahead
                ))
            })?;

        Ok(ForecastRequest {
            subscriptions: self.subscriptions,
            historical_data: self.historical_data,
            months_ahead,
        })
    }
}

/// POST /ai/predict-spending - Forecast subscription spending
pub async fn predict_spending(
    State(state): State<Arc<AppState>>,
    JsonBody(body): JsonBody<PredictSpendingBody>,
) -> Result<Json<SpendingForecast>, AppError> {
    let request = body.into_request(state.config.max_months_ahead)?;

    tracing::info!(
        subscriptions = request.subscriptions.len(),
        months_ahead = request.months_ahead,
        "Predicting spending"
    );

    let forecast = state.engine.forecast_spending(&request)?;
    Ok(Json(forecast))
}

/// POST /ai/budget-recommendation - Recommend a subscription budget
pub async fn budget_recommendation(
    State(state): State<Arc<AppState>>,
    JsonBody(request): JsonBody<BudgetRequest>,
) -> Result<Json<BudgetRecommendation>, AppError> {
    if request.current_budget < 0.0 || request.income < 0.0 {
        return Err(AppError::bad_request(
            "current_budget and income must not be negative",
        ));
    }

    tracing::info!(
        subscriptions = request.subscriptions.len(),
        "Recommending budget"
    );

    let recommendation = state.engine.recommend_budget(&request)?;
    Ok(Json(recommendation))
}

/// POST /ai/reminder-suggestions - Suggest reminders and optimization tips
pub async fn reminder_suggestions(
    State(state): State<Arc<AppState>>,
    JsonBody(request): JsonBody<ReminderRequest>,
) -> Result<Json<ReminderSuggestions>, AppError> {
    tracing::info!(
        subscriptions = request.subscriptions.len(),
        "Suggesting reminders"
    );

    let suggestions = state.engine.suggest_reminders(&request)?;
    Ok(Json(suggestions))
}
