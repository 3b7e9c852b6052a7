use serde::{Deserialize, Serialize};

/// Ordinal project health, best first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthLevel {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl HealthLevel {
    pub fn display_text(self) -> &'static str {
        match self {
            HealthLevel::Excellent => "Excellent",
            HealthLevel::Good => "Good",
            HealthLevel::Fair => "Fair",
            HealthLevel::Poor => "Needs Attention",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            HealthLevel::Excellent => "Project is exceeding expectations across all metrics",
            HealthLevel::Good => "Project is progressing well with minor areas for improvement",
            HealthLevel::Fair => "Project requires attention in some areas",
            HealthLevel::Poor => "Immediate attention needed to get project back on track",
        }
    }
}

struct Rule {
    level: HealthLevel,
    min_tasks: f64,
    max_budget: f64,
    max_issues: u32,
}

const RULES: [Rule; 3] = [
    Rule { level: HealthLevel::Excellent, min_tasks: 80.0, max_budget: 60.0, max_issues: 1 },
    Rule { level: HealthLevel::Good, min_tasks: 60.0, max_budget: 80.0, max_issues: 3 },
    Rule { level: HealthLevel::Fair, min_tasks: 40.0, max_budget: 90.0, max_issues: 5 },
];

/// First matching rule wins; anything that matches none is `Poor`.
pub fn classify(tasks_completed_pct: f64, budget_used_pct: f64, open_issues: u32) -> HealthLevel {
    RULES
        .iter()
        .find(|rule| {
            tasks_completed_pct >= rule.min_tasks
                && budget_used_pct <= rule.max_budget
                && open_issues <= rule.max_issues
        })
        .map_or(HealthLevel::Poor, |rule| rule.level)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScheduleOutlook {
    AheadOfSchedule,
    OnTrack,
    NeedsAcceleration,
}

impl ScheduleOutlook {
    pub fn from_completion(overall_completion: u8) -> Self {
        if overall_completion >= 75 {
            ScheduleOutlook::AheadOfSchedule
        } else if overall_completion >= 50 {
            ScheduleOutlook::OnTrack
        } else {
            ScheduleOutlook::NeedsAcceleration
        }
    }

    pub fn display_text(self) -> &'static str {
        match self {
            ScheduleOutlook::AheadOfSchedule => "Ahead of schedule",
            ScheduleOutlook::OnTrack => "On track for completion",
            ScheduleOutlook::NeedsAcceleration => "Needs acceleration to meet deadline",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_reference_points() {
        assert_eq!(classify(85.0, 50.0, 0), HealthLevel::Excellent);
        assert_eq!(classify(65.0, 70.0, 2), HealthLevel::Good);
        assert_eq!(classify(45.0, 85.0, 4), HealthLevel::Fair);
        assert_eq!(classify(10.0, 95.0, 10), HealthLevel::Poor);
    }

    #[test]
    fn thresholds_are_inclusive() {
        assert_eq!(classify(80.0, 60.0, 1), HealthLevel::Excellent);
        assert_eq!(classify(60.0, 80.0, 3), HealthLevel::Good);
        assert_eq!(classify(40.0, 90.0, 5), HealthLevel::Fair);
        assert_eq!(classify(39.9, 90.0, 5), HealthLevel::Poor);
    }

    #[test]
    fn one_failing_input_drops_to_the_next_rule() {
        // great tasks and budget, too many issues for excellent
        assert_eq!(classify(95.0, 10.0, 2), HealthLevel::Good);
        assert_eq!(classify(95.0, 10.0, 6), HealthLevel::Poor);
        assert_eq!(classify(95.0, 85.0, 0), HealthLevel::Fair);
    }

    #[test]
    fn same_inputs_same_level() {
        for _ in 0..10 {
            assert_eq!(classify(68.0, 49.0, 3), HealthLevel::Good);
        }
    }

    #[test]
    fn levels_are_ordered_best_first() {
        assert!(HealthLevel::Excellent < HealthLevel::Good);
        assert!(HealthLevel::Fair < HealthLevel::Poor);
        assert_eq!(HealthLevel::Poor.display_text(), "Needs Attention");
    }

    #[test]
    fn outlook_bands() {
        assert_eq!(ScheduleOutlook::from_completion(75), ScheduleOutlook::AheadOfSchedule);
        assert_eq!(ScheduleOutlook::from_completion(65), ScheduleOutlook::OnTrack);
        assert_eq!(ScheduleOutlook::from_completion(49), ScheduleOutlook::NeedsAcceleration);
    }
}
