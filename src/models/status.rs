use crate::analysis::health::{classify, HealthLevel, ScheduleOutlook};
use crate::analysis::metrics::health_inputs;
use crate::error::{DashboardError, DashboardResult};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MetricKind {
    TasksCompleted,
    MilestonesReached,
    BudgetUtilization,
    IssuesOpen,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    Neutral,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metric {
    pub kind: MetricKind,
    pub label: String,
    pub value: String, // display string, e.g. "34 / 50"
    pub percentage: f64,
    pub trend: Trend,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trend_value: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UpdateKind {
    Success,
    Warning,
    Info,
    Issue,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusUpdate {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: UpdateKind,
    pub message: String,
    pub timestamp: String,
    #[serde(default)]
    pub resolved: bool,
}

impl StatusUpdate {
    pub fn is_open_issue(&self) -> bool {
        !self.resolved && matches!(self.kind, UpdateKind::Issue | UpdateKind::Warning)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusView {
    pub overall_completion: u8,
    pub schedule_outlook: ScheduleOutlook,
    pub schedule_outlook_text: String,
    pub project_health: HealthLevel,
    pub health_text: String,
    pub health_description: String,
    pub last_updated: String,
    pub is_refreshing: bool,
    pub metrics: Vec<Metric>,
    pub status_updates: Vec<StatusUpdate>,
    pub unresolved_issue_count: usize,
}

/// Status tab: seeded metrics, status feed and the derived health.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusBoard {
    pub overall_completion: u8,
    pub last_updated: String,
    pub metrics: Vec<Metric>,
    pub status_updates: Vec<StatusUpdate>,
    #[serde(skip)]
    pub(crate) refreshing: bool,
}

fn metric(
    kind: MetricKind,
    label: &str,
    value: &str,
    percentage: f64,
    trend: Trend,
    trend_value: Option<f64>,
    description: &str,
) -> Metric {
    Metric {
        kind,
        label: label.to_string(),
        value: value.to_string(),
        percentage,
        trend,
        trend_value,
        description: Some(description.to_string()),
    }
}

fn update(id: &str, kind: UpdateKind, message: &str, timestamp: &str, resolved: bool) -> StatusUpdate {
    StatusUpdate {
        id: id.to_string(),
        kind,
        message: message.to_string(),
        timestamp: timestamp.to_string(),
        resolved,
    }
}

impl Default for StatusBoard {
    fn default() -> Self {
        Self {
            overall_completion: 65,
            last_updated: chrono::Utc::now().to_rfc3339(),
            metrics: vec![
                metric(MetricKind::TasksCompleted, "Tasks Completed", "34 / 50", 68.0, Trend::Up, Some(5.0), "5% increase from last week"),
                metric(MetricKind::MilestonesReached, "Milestones Reached", "2 / 6", 33.0, Trend::Neutral, None, "On track with project timeline"),
                metric(MetricKind::BudgetUtilization, "Budget Utilization", "$52k / $105k", 49.0, Trend::Down, Some(3.0), "3% under budget"),
                metric(MetricKind::IssuesOpen, "Issues Open", "3", 0.0, Trend::Down, Some(2.0), "2 issues resolved this week"),
            ],
            status_updates: vec![
                update("1", UpdateKind::Success, "Development sprint 1 completed ahead of schedule", "2025-02-25T10:30:00Z", true),
                update("2", UpdateKind::Success, "Design phase successfully delivered and approved by stakeholders", "2025-02-20T14:15:00Z", true),
                update("3", UpdateKind::Issue, "3 minor issues requiring attention in mobile responsiveness", "2025-02-26T09:45:00Z", false),
                update("4", UpdateKind::Warning, "Content delivery delayed by 2 days due to client review", "2025-02-27T16:20:00Z", false),
                update("5", UpdateKind::Info, "Sprint planning session scheduled for next Monday", "2025-02-28T11:00:00Z", false),
            ],
            refreshing: false,
        }
    }
}

impl StatusBoard {
    /// Recomputed from the current metrics on every call.
    pub fn health(&self) -> HealthLevel {
        let (tasks, budget, issues) = health_inputs(&self.metrics);
        classify(tasks, budget, issues)
    }

    pub fn unresolved_issues(&self) -> impl Iterator<Item = &StatusUpdate> {
        self.status_updates.iter().filter(|u| u.is_open_issue())
    }

    pub fn mark_resolved(&mut self, id: &str) -> DashboardResult<()> {
        let entry = self
            .status_updates
            .iter_mut()
            .find(|u| u.id == id)
            .ok_or_else(|| DashboardError::not_found("Status update", id))?;
        entry.resolved = true;
        Ok(())
    }

    pub fn is_refreshing(&self) -> bool {
        self.refreshing
    }

    /// Marks a refresh as pending. Fails if one is already in flight.
    pub fn begin_refresh(&mut self) -> DashboardResult<()> {
        if self.refreshing {
            return Err(DashboardError::RefreshInProgress);
        }
        self.refreshing = true;
        Ok(())
    }

    pub fn finish_refresh(&mut self) {
        self.refreshing = false;
    }

    pub fn view(&self) -> StatusView {
        let health = self.health();
        let outlook = ScheduleOutlook::from_completion(self.overall_completion);
        StatusView {
            overall_completion: self.overall_completion,
            schedule_outlook: outlook,
            schedule_outlook_text: outlook.display_text().to_string(),
            project_health: health,
            health_text: health.display_text().to_string(),
            health_description: health.description().to_string(),
            last_updated: self.last_updated.clone(),
            is_refreshing: self.refreshing,
            metrics: self.metrics.clone(),
            status_updates: self.status_updates.clone(),
            unresolved_issue_count: self.unresolved_issues().count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_board_is_good_with_two_open_issues() {
        let board = StatusBoard::default();
        assert_eq!(board.health(), HealthLevel::Good);
        assert_eq!(board.unresolved_issues().count(), 2);
    }

    #[test]
    fn health_follows_metric_changes() {
        let mut board = StatusBoard::default();
        board.metrics[0].percentage = 90.0;
        board.metrics[3].value = "1".to_string();
        assert_eq!(board.health(), HealthLevel::Excellent);

        board.metrics[3].value = "12".to_string();
        assert_eq!(board.health(), HealthLevel::Poor);
    }

    #[test]
    fn resolving_an_issue_reduces_the_unresolved_count() {
        let mut board = StatusBoard::default();
        board.mark_resolved("3").unwrap();
        assert_eq!(board.unresolved_issues().count(), 1);

        // info entries never count as issues
        board.mark_resolved("5").unwrap();
        assert_eq!(board.unresolved_issues().count(), 1);
        assert!(board.mark_resolved("99").is_err());
    }

    #[test]
    fn second_refresh_is_rejected_while_pending() {
        let mut board = StatusBoard::default();
        board.begin_refresh().unwrap();
        assert_eq!(board.begin_refresh(), Err(DashboardError::RefreshInProgress));

        board.finish_refresh();
        assert!(board.begin_refresh().is_ok());
    }

    #[test]
    fn status_update_serializes_kind_as_type() {
        let value = serde_json::to_value(&StatusBoard::default().status_updates[2]).unwrap();
        assert_eq!(value["type"], "issue");
        assert_eq!(value["resolved"], false);
    }
}
