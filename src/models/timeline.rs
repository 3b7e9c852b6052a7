use crate::analysis::progress::completion_percent;
use crate::error::{DashboardError, DashboardResult};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MilestoneStatus {
    Upcoming,
    InProgress,
    Completed,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Milestone {
    pub id: u32,
    pub title: String,
    pub date: String,
    pub description: String,
    pub status: MilestoneStatus,
}

/// Form input for a new milestone; the id is assigned on insert.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MilestoneDraft {
    pub title: String,
    pub date: String,
    pub description: String,
    #[serde(default = "default_draft_status")]
    pub status: MilestoneStatus,
}

fn default_draft_status() -> MilestoneStatus {
    MilestoneStatus::Upcoming
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineView {
    pub milestones: Vec<Milestone>,
    pub completed_count: usize,
    pub progress_percentage: u8,
}

/// Milestones in insertion order. Status changes are unrestricted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Timeline {
    pub milestones: Vec<Milestone>,
}

impl Default for Timeline {
    fn default() -> Self {
        let sample = [
            (1, "Project Kickoff", "2025-01-15", "Initial team meeting and project planning session", MilestoneStatus::Completed),
            (2, "Design Phase Complete", "2025-02-20", "All design mockups and wireframes approved by stakeholders", MilestoneStatus::Completed),
            (3, "Development Sprint 1", "2025-03-10", "Homepage and core navigation components implemented", MilestoneStatus::InProgress),
            (4, "Development Sprint 2", "2025-03-31", "Product pages and responsive design implementation", MilestoneStatus::Upcoming),
            (5, "Testing & QA", "2025-04-15", "Comprehensive testing across all devices and browsers", MilestoneStatus::Upcoming),
            (6, "Launch", "2025-04-30", "Production deployment and go-live announcement", MilestoneStatus::Upcoming),
        ];

        Self {
            milestones: sample
                .into_iter()
                .map(|(id, title, date, description, status)| Milestone {
                    id,
                    title: title.to_string(),
                    date: date.to_string(),
                    description: description.to_string(),
                    status,
                })
                .collect(),
        }
    }
}

impl Timeline {
    pub fn new(milestones: Vec<Milestone>) -> Self {
        Self { milestones }
    }

    fn next_id(&self) -> DashboardResult<u32> {
        match self.milestones.iter().map(|m| m.id).max() {
            None => Ok(1),
            Some(max) => max.checked_add(1).ok_or(DashboardError::InvalidValue {
                field: "id",
                value: max.to_string(),
            }),
        }
    }

    pub fn add(&mut self, draft: MilestoneDraft) -> DashboardResult<&Milestone> {
        if draft.title.is_empty() {
            return Err(DashboardError::MissingField("title"));
        }
        if draft.date.is_empty() {
            return Err(DashboardError::MissingField("date"));
        }
        if draft.description.is_empty() {
            return Err(DashboardError::MissingField("description"));
        }

        let milestone = Milestone {
            id: self.next_id()?,
            title: draft.title,
            date: draft.date,
            description: draft.description,
            status: draft.status,
        };
        self.milestones.push(milestone);
        Ok(&self.milestones[self.milestones.len() - 1])
    }

    /// Replaces the milestone with the same id, keeping its position.
    pub fn update(&mut self, milestone: Milestone) -> DashboardResult<()> {
        let slot = self
            .milestones
            .iter_mut()
            .find(|m| m.id == milestone.id)
            .ok_or_else(|| DashboardError::not_found("Milestone", milestone.id))?;
        *slot = milestone;
        Ok(())
    }

    pub fn set_status(&mut self, id: u32, status: MilestoneStatus) -> DashboardResult<()> {
        let milestone = self
            .milestones
            .iter_mut()
            .find(|m| m.id == id)
            .ok_or_else(|| DashboardError::not_found("Milestone", id))?;
        milestone.status = status;
        Ok(())
    }

    pub fn remove(&mut self, id: u32) -> DashboardResult<Milestone> {
        let index = self
            .milestones
            .iter()
            .position(|m| m.id == id)
            .ok_or_else(|| DashboardError::not_found("Milestone", id))?;
        Ok(self.milestones.remove(index))
    }

    pub fn completed_count(&self) -> usize {
        self.milestones
            .iter()
            .filter(|m| m.status == MilestoneStatus::Completed)
            .count()
    }

    pub fn progress_percentage(&self) -> u8 {
        completion_percent(self.completed_count(), self.milestones.len())
    }

    pub fn view(&self) -> TimelineView {
        TimelineView {
            milestones: self.milestones.clone(),
            completed_count: self.completed_count(),
            progress_percentage: self.progress_percentage(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(title: &str, date: &str, description: &str) -> MilestoneDraft {
        MilestoneDraft {
            title: title.to_string(),
            date: date.to_string(),
            description: description.to_string(),
            status: MilestoneStatus::Upcoming,
        }
    }

    #[test]
    fn sample_timeline_progress_is_two_of_six() {
        let timeline = Timeline::default();
        assert_eq!(timeline.completed_count(), 2);
        assert_eq!(timeline.progress_percentage(), 33);
    }

    #[test]
    fn add_refuses_to_wrap_past_the_largest_id() {
        let mut timeline = Timeline::new(vec![Milestone {
            id: u32::MAX,
            title: "Imported".to_string(),
            date: "2025-01-01".to_string(),
            description: "Carried over".to_string(),
            status: MilestoneStatus::Completed,
        }]);

        let err = timeline.add(draft("Next", "2025-02-01", "Follow-up")).unwrap_err();
        assert!(matches!(err, DashboardError::InvalidValue { field: "id", .. }));
        assert_eq!(timeline.milestones.len(), 1);
    }

    #[test]
    fn add_assigns_max_plus_one_and_appends() {
        let mut timeline = Timeline::default();
        timeline.remove(3).unwrap();
        let added = timeline
            .add(draft("Retrospective", "2025-05-05", "Post-launch review"))
            .unwrap();

        assert_eq!(added.id, 7);
        assert_eq!(timeline.milestones.last().unwrap().title, "Retrospective");
    }

    #[test]
    fn add_to_empty_timeline_starts_at_one() {
        let mut timeline = Timeline::new(Vec::new());
        let added = timeline.add(draft("First", "2025-01-01", "Start")).unwrap();
        assert_eq!(added.id, 1);
    }

    #[test]
    fn add_rejects_missing_fields_without_side_effects() {
        let mut timeline = Timeline::default();
        let err = timeline.add(draft("Beta", "", "Open beta")).unwrap_err();

        assert_eq!(err, DashboardError::MissingField("date"));
        assert_eq!(timeline.milestones.len(), 6);
    }

    #[test]
    fn delete_removes_exactly_one_and_keeps_order() {
        let mut timeline = Timeline::default();
        let removed = timeline.remove(4).unwrap();

        assert_eq!(removed.title, "Development Sprint 2");
        let ids: Vec<u32> = timeline.milestones.iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 5, 6]);
        assert!(timeline.remove(4).is_err());
    }

    #[test]
    fn any_status_transition_is_allowed() {
        let mut timeline = Timeline::default();
        timeline.set_status(1, MilestoneStatus::Upcoming).unwrap();
        timeline.set_status(6, MilestoneStatus::Completed).unwrap();

        assert_eq!(timeline.milestones[0].status, MilestoneStatus::Upcoming);
        assert_eq!(timeline.milestones[5].status, MilestoneStatus::Completed);
        assert_eq!(timeline.completed_count(), 2);
    }

    #[test]
    fn update_replaces_in_place() {
        let mut timeline = Timeline::default();
        let mut edited = timeline.milestones[2].clone();
        edited.date = "2025-03-14".to_string();
        timeline.update(edited).unwrap();

        assert_eq!(timeline.milestones[2].date, "2025-03-14");
        assert_eq!(timeline.milestones[2].id, 3);
    }

    #[test]
    fn empty_timeline_reports_zero_progress() {
        assert_eq!(Timeline::new(Vec::new()).progress_percentage(), 0);
    }
}
