//! Analysis Engine - binds a clock and a random source to the three operations

use std::sync::Arc;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::clock::{Clock, SystemClock};
use crate::error::{Operation, Result};

use super::types::{
    BudgetRecommendation, BudgetRequest, ForecastRequest, ReminderRequest, ReminderSuggestions,
    SpendingForecast,
};
use super::{BudgetRecommender, ReminderAdvisor, SpendingForecaster};

/// Stateless entry point for the analysis operations.
///
/// Every call is independent; the engine only carries configuration, so a
/// single instance can be shared across concurrent requests.
#[derive(Clone)]
pub struct AnalysisEngine {
    clock: Arc<dyn Clock>,
    /// Fixed variance seed; `None` seeds each forecast from OS entropy
    seed: Option<u64>,
}

impl std::fmt::Debug for AnalysisEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnalysisEngine")
            .field("seed", &self.seed)
            .finish_non_exhaustive()
    }
}

impl Default for AnalysisEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl AnalysisEngine {
    /// Engine using the system clock and entropy-seeded variance
    pub fn new() -> Self {
        Self {
            clock: Arc::new(SystemClock),
            seed: None,
        }
    }

    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Arc::new(clock);
        self
    }

    /// Make every forecast draw the same variance sequence
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }

    fn finish<T>(operation: Operation, result: Result<T>) -> Result<T> {
        result.map_err(|e| {
            let err = e.in_operation(operation);
            tracing::warn!(operation = operation.as_str(), error = %err, "Analysis failed");
            err
        })
    }

    /// Forecast spending using the engine's own random source
    pub fn forecast_spending(&self, request: &ForecastRequest) -> Result<SpendingForecast> {
        let mut rng = self.rng();
        self.forecast_spending_with_rng(request, &mut rng)
    }

    /// Forecast spending drawing variance from a caller-supplied generator
    pub fn forecast_spending_with_rng<R: Rng + ?Sized>(
        &self,
        request: &ForecastRequest,
        rng: &mut R,
    ) -> Result<SpendingForecast> {
        let today = self.clock.today();
        Self::finish(
            Operation::Prediction,
            SpendingForecaster::new().forecast(request, today, rng),
        )
    }

    pub fn recommend_budget(&self, request: &BudgetRequest) -> Result<BudgetRecommendation> {
        Self::finish(
            Operation::BudgetRecommendation,
            BudgetRecommender::new().recommend(request),
        )
    }

    pub fn suggest_reminders(&self, request: &ReminderRequest) -> Result<ReminderSuggestions> {
        let today = self.clock.today();
        Self::finish(
            Operation::ReminderSuggestions,
            ReminderAdvisor::new().suggest(request, today),
        )
    }
}
