//! Shared active-subscription filtering and aggregation

use crate::models::Subscription;

use super::types::CategorySpendingMap;

/// Active subscriptions grouped under one category, in encounter order
#[derive(Debug, Clone)]
pub struct CategoryGroup<'a> {
    pub category: &'a str,
    pub subscriptions: Vec<&'a Subscription>,
}

impl CategoryGroup<'_> {
    pub fn count(&self) -> usize {
        self.subscriptions.len()
    }
}

/// Iterate the subscriptions that count toward spending
pub fn active(subscriptions: &[Subscription]) -> impl Iterator<Item = &Subscription> {
    subscriptions.iter().filter(|s| s.is_active())
}

/// Sum of active prices. Zero and negative prices are summed as given.
pub fn active_total(subscriptions: &[Subscription]) -> f64 {
    active(subscriptions).map(|s| s.price).sum()
}

/// Category → summed active price
pub fn category_spending(subscriptions: &[Subscription]) -> CategorySpendingMap {
    let mut spending = CategorySpendingMap::new();
    for sub in active(subscriptions) {
        *spending.entry(sub.category.clone()).or_insert(0.0) += sub.price;
    }
    spending
}

/// Number of subscriptions (any status) in `category`
pub fn count_in_category(subscriptions: &[Subscription], category: &str) -> usize {
    subscriptions
        .iter()
        .filter(|s| s.category == category)
        .count()
}

/// Active subscriptions grouped by category, groups ordered by first appearance
pub fn group_active_by_category(subscriptions: &[Subscription]) -> Vec<CategoryGroup<'_>> {
    let mut groups: Vec<CategoryGroup<'_>> = Vec::new();
    for sub in active(subscriptions) {
        match groups.iter_mut().find(|g| g.category == sub.category) {
            Some(group) => group.subscriptions.push(sub),
            None => groups.push(CategoryGroup {
                category: &sub.category,
                subscriptions: vec![sub],
            }),
        }
    }
    groups
}

/// Category with the strictly largest total. Ties go to the lexically-first label.
pub fn top_category(spending: &CategorySpendingMap) -> Option<(&str, f64)> {
    let mut best: Option<(&str, f64)> = None;
    for (category, &amount) in spending {
        match best {
            Some((_, best_amount)) if amount <= best_amount => {}
            _ => best = Some((category.as_str(), amount)),
        }
    }
    best
}
