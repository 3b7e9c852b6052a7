use crate::error::{DashboardError, DashboardResult};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetCategory {
    pub name: String,
    pub value: f64,
    pub color: String, // display only
}

/// Category allocations plus the amount spent so far.
///
/// `spent` is tracked on its own: it is not the sum of any subset of
/// categories and is never inferred from them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Budget {
    pub categories: Vec<BudgetCategory>,
    pub spent_budget: f64,
}

impl Default for Budget {
    fn default() -> Self {
        let categories = [
            ("Design", 25000.0, "hsl(var(--chart-1))"),
            ("Development", 45000.0, "hsl(var(--chart-2))"),
            ("Content", 12000.0, "hsl(var(--chart-3))"),
            ("Marketing", 15000.0, "hsl(var(--chart-4))"),
            ("Misc", 8000.0, "hsl(var(--chart-5))"),
        ]
        .into_iter()
        .map(|(name, value, color)| BudgetCategory {
            name: name.to_string(),
            value,
            color: color.to_string(),
        })
        .collect();

        Self {
            categories,
            spent_budget: 52000.0,
        }
    }
}

impl Budget {
    pub fn total(&self) -> f64 {
        self.categories.iter().map(|c| c.value).sum()
    }

    pub fn set_spent(&mut self, spent: f64) -> DashboardResult<()> {
        if !spent.is_finite() {
            return Err(DashboardError::InvalidValue {
                field: "spentBudget",
                value: spent.to_string(),
            });
        }
        self.spent_budget = spent;
        Ok(())
    }

    pub fn set_category_value(&mut self, name: &str, value: f64) -> DashboardResult<()> {
        if !value.is_finite() {
            return Err(DashboardError::InvalidValue {
                field: "value",
                value: value.to_string(),
            });
        }
        let category = self
            .categories
            .iter_mut()
            .find(|c| c.name == name)
            .ok_or_else(|| DashboardError::not_found("Budget category", name))?;
        category.value = value;
        Ok(())
    }
}
