//! Budget Recommender
//!
//! Derives a subscription budget from current active spending, caps it
//! against income when income is known, and explains where money goes.

use crate::error::Result;

use super::aggregate;
use super::types::{round_to, BudgetRecommendation, BudgetRequest};

/// Buffer applied on top of current spending
const BUDGET_BUFFER: f64 = 1.15;
/// Recommended budget never exceeds this share of income
const INCOME_CAP_SHARE: f64 = 0.20;
/// Spending above this share of income triggers a warning
const INCOME_WARNING_SHARE: f64 = 0.15;
/// Savings above this amount are worth reporting
const SAVINGS_REPORT_THRESHOLD: f64 = 50.0;
/// A category above this share of spending is flagged
const CATEGORY_CONCENTRATION_SHARE: f64 = 0.40;
/// Entertainment spending above this amount suggests bundles
const ENTERTAINMENT_BUNDLE_THRESHOLD: f64 = 50.0;

const ENTERTAINMENT: &str = "Entertainment";

/// Recommends a subscription budget
pub struct BudgetRecommender;

impl BudgetRecommender {
    pub fn new() -> Self {
        Self
    }

    fn recommended_budget(total_cost: f64, income: f64) -> f64 {
        let buffered = total_cost * BUDGET_BUFFER;
        if income > 0.0 {
            buffered.min(income * INCOME_CAP_SHARE)
        } else {
            buffered
        }
    }

    fn savings_potential(current_budget: f64, total_cost: f64) -> f64 {
        let effective = if current_budget > 0.0 {
            current_budget
        } else {
            total_cost
        };
        (effective - total_cost).max(0.0)
    }

    pub fn recommend(&self, request: &BudgetRequest) -> Result<BudgetRecommendation> {
        let total_cost = aggregate::active_total(&request.subscriptions);
        let allocations = aggregate::category_spending(&request.subscriptions);
        let income = request.income;

        let recommended_budget = Self::recommended_budget(total_cost, income);
        let savings_potential = Self::savings_potential(request.current_budget, total_cost);

        let mut recommendations = Vec::new();

        if income > 0.0 && total_cost > income * INCOME_WARNING_SHARE {
            recommendations.push(
                "Subscription costs exceed 15% of income. Consider reducing services.".to_string(),
            );
        }

        if savings_potential > SAVINGS_REPORT_THRESHOLD {
            recommendations.push(format!(
                "You could save ${:.2} monthly by optimizing subscriptions.",
                savings_potential
            ));
        }

        // Share is undefined without positive spending
        if let Some((category, amount)) = aggregate::top_category(&allocations) {
            if total_cost > 0.0 && amount > total_cost * CATEGORY_CONCENTRATION_SHARE {
                recommendations.push(format!(
                    "Consider reducing {} subscriptions - they're {:.1}% of your total.",
                    category,
                    amount / total_cost * 100.0
                ));
            }
        }

        let entertainment = allocations.get(ENTERTAINMENT).copied().unwrap_or(0.0);
        if entertainment > ENTERTAINMENT_BUNDLE_THRESHOLD {
            recommendations
                .push("Look into bundled entertainment packages to reduce costs.".to_string());
        }

        if recommendations.is_empty() {
            recommendations.push("Your subscription budget looks well-balanced!".to_string());
        }

        tracing::debug!(
            total_cost,
            recommended_budget,
            savings_potential,
            categories = allocations.len(),
            "Budget recommendation complete"
        );

        Ok(BudgetRecommendation {
            recommended_budget: round_to(recommended_budget, 2),
            category_allocations: allocations
                .into_iter()
                .map(|(category, amount)| (category, round_to(amount, 2)))
                .collect(),
            savings_potential: round_to(savings_potential, 2),
            recommendations,
        })
    }
}

impl Default for BudgetRecommender {
    fn default() -> Self {
        Self::new()
    }
}
