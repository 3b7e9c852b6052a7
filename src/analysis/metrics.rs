use crate::models::status::{Metric, MetricKind};
use rand::Rng;

#[derive(Debug, Clone, Copy)]
pub struct Jitter {
    pub percentage: f64,
    pub trend: f64,
}

impl Default for Jitter {
    fn default() -> Self {
        Self {
            percentage: 5.0,
            trend: 1.0,
        }
    }
}

fn offset<R: Rng>(rng: &mut R, amplitude: f64) -> f64 {
    if amplitude > 0.0 {
        rng.random_range(-amplitude..amplitude)
    } else {
        0.0
    }
}

/// Random walk applied on refresh. Percentages stay within [0, 100]; trend
/// values drift freely and are left absent when absent.
pub fn perturb<R: Rng>(metrics: &mut [Metric], rng: &mut R, jitter: Jitter) {
    for metric in metrics.iter_mut() {
        metric.percentage = (metric.percentage + offset(rng, jitter.percentage)).clamp(0.0, 100.0);
        if let Some(trend_value) = metric.trend_value.as_mut() {
            *trend_value += offset(rng, jitter.trend);
        }
    }
}

/// Leading integer of a display value such as `"3"` or `"3 open"`.
fn leading_count(value: &str) -> u32 {
    let digits: String = value
        .trim_start()
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().unwrap_or(0)
}

/// `(tasks completed %, budget used %, open issues)` read from the metrics.
/// Missing metrics count as zero.
pub fn health_inputs(metrics: &[Metric]) -> (f64, f64, u32) {
    let find = |kind: MetricKind| metrics.iter().find(|m| m.kind == kind);

    let tasks = find(MetricKind::TasksCompleted).map_or(0.0, |m| m.percentage);
    let budget = find(MetricKind::BudgetUtilization).map_or(0.0, |m| m.percentage);
    let issues = find(MetricKind::IssuesOpen).map_or(0, |m| leading_count(&m.value));

    (tasks, budget, issues)
}
