use crate::models::budget::Budget;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryShare {
    pub name: String,
    pub value: f64,
    pub color: String,
    pub percentage: f64,
    /// One-decimal text used for the breakdown bars and tooltips.
    pub percentage_label: String,
    /// Whole-number text used for the pie chart label.
    pub chart_label: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetSummary {
    pub total_budget: f64,
    pub spent_budget: f64,
    pub remaining_budget: f64,
    pub spent_percentage_label: String,
    pub remaining_percentage_label: String,
    pub categories: Vec<CategoryShare>,
}

/// `part / total * 100`, or 0 when there is nothing to divide by.
pub fn share_of(part: f64, total: f64) -> f64 {
    if total == 0.0 {
        return 0.0;
    }
    part / total * 100.0
}

pub fn one_decimal(value: f64) -> String {
    format!("{value:.1}")
}

/// Derives totals and per-category shares. Remaining is not floored, so an
/// overspent budget reports a negative remainder.
pub fn summarize(budget: &Budget) -> BudgetSummary {
    let total = budget.total();
    let spent = budget.spent_budget;
    let remaining = total - spent;

    let categories = budget
        .categories
        .iter()
        .map(|category| {
            let percentage = share_of(category.value, total);
            CategoryShare {
                name: category.name.clone(),
                value: category.value,
                color: category.color.clone(),
                percentage,
                percentage_label: one_decimal(percentage),
                chart_label: format!("{} {percentage:.0}%", category.name),
            }
        })
        .collect();

    BudgetSummary {
        total_budget: total,
        spent_budget: spent,
        remaining_budget: remaining,
        spent_percentage_label: one_decimal(share_of(spent, total)),
        remaining_percentage_label: one_decimal(share_of(remaining, total)),
        categories,
    }
}
