use crate::analysis::budget::{summarize, BudgetSummary};
use crate::commands::state::{lock, DashboardState};

#[tauri::command]
pub async fn get_budget_summary(
    state: tauri::State<'_, DashboardState>,
) -> Result<BudgetSummary, String> {
    get_budget_summary_internal(state.inner())
}

#[tauri::command]
pub async fn set_spent_budget(
    amount: f64,
    state: tauri::State<'_, DashboardState>,
) -> Result<BudgetSummary, String> {
    set_spent_budget_internal(state.inner(), amount)
}

#[tauri::command]
pub async fn set_category_value(
    name: String,
    value: f64,
    state: tauri::State<'_, DashboardState>,
) -> Result<BudgetSummary, String> {
    set_category_value_internal(state.inner(), &name, value)
}

pub fn get_budget_summary_internal(state: &DashboardState) -> Result<BudgetSummary, String> {
    Ok(summarize(&lock(&state.budget)?))
}

pub fn set_spent_budget_internal(state: &DashboardState, amount: f64) -> Result<BudgetSummary, String> {
    let mut budget = lock(&state.budget)?;
    budget.set_spent(amount).map_err(|e| e.to_string())?;
    Ok(summarize(&budget))
}

pub fn set_category_value_internal(
    state: &DashboardState,
    name: &str,
    value: f64,
) -> Result<BudgetSummary, String> {
    let mut budget = lock(&state.budget)?;
    budget
        .set_category_value(name, value)
        .map_err(|e| e.to_string())?;
    log::debug!("budget category {name} set to {value}");
    Ok(summarize(&budget))
}
