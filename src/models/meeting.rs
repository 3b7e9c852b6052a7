use crate::error::{DashboardError, DashboardResult};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meeting {
    pub id: String,
    pub title: String,
    pub date: String,
    pub summary: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub participants: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

impl Meeting {
    pub fn tags(&self) -> &[String] {
        self.tags.as_deref().unwrap_or(&[])
    }

    pub fn participants(&self) -> &[String] {
        self.participants.as_deref().unwrap_or(&[])
    }

    fn validate(&self) -> DashboardResult<()> {
        require("title", &self.title)?;
        require("date", &self.date)?;
        require("summary", &self.summary)
    }
}

fn require(field: &'static str, value: &str) -> DashboardResult<()> {
    if value.is_empty() {
        return Err(DashboardError::MissingField(field));
    }
    Ok(())
}

/// Raw "new meeting" form: participants and tags are comma separated.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MeetingDraft {
    pub title: String,
    pub date: String,
    pub summary: String,
    #[serde(default)]
    pub participants: String,
    #[serde(default)]
    pub tags: String,
}

/// `"planning, review,"` → `["planning", "review"]`
pub fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .map(str::to_string)
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeetingLog {
    pub meetings: Vec<Meeting>,
}

impl Default for MeetingLog {
    fn default() -> Self {
        let sample = |id: &str, title: &str, date: &str, summary: &str, participants: &[&str], tags: &[&str]| Meeting {
            id: id.to_string(),
            title: title.to_string(),
            date: date.to_string(),
            summary: summary.to_string(),
            participants: Some(participants.iter().map(|p| p.to_string()).collect()),
            tags: Some(tags.iter().map(|t| t.to_string()).collect()),
        };

        Self {
            meetings: vec![
                sample(
                    "1",
                    "Project Kickoff Meeting",
                    "2025-01-15",
                    "Discussed project scope, timeline, and team responsibilities. Established communication channels and weekly check-in schedule.",
                    &["John Doe", "Jane Smith", "Mike Johnson"],
                    &["planning", "kickoff"],
                ),
                sample(
                    "2",
                    "Design Review",
                    "2025-02-10",
                    "Reviewed initial design concepts and wireframes. Stakeholders approved the modern, minimal aesthetic. Requested minor adjustments to navigation.",
                    &["Jane Smith", "Sarah Wilson", "Design Team"],
                    &["design", "review"],
                ),
                sample(
                    "3",
                    "Sprint Planning - Development",
                    "2025-02-25",
                    "Planned development sprint 1 focusing on homepage and core components. Assigned tasks to frontend team and set milestone for March 10.",
                    &["Mike Johnson", "Dev Team", "QA Team"],
                    &["sprint", "planning", "development"],
                ),
            ],
        }
    }
}

impl MeetingLog {
    pub fn new(meetings: Vec<Meeting>) -> Self {
        Self { meetings }
    }

    /// Millisecond timestamp id, bumped past any id already in the log.
    fn next_id(&self, now_millis: i64) -> String {
        let mut candidate = now_millis;
        while self.meetings.iter().any(|m| m.id == candidate.to_string()) {
            candidate += 1;
        }
        candidate.to_string()
    }

    pub fn add(&mut self, draft: MeetingDraft) -> DashboardResult<&Meeting> {
        let id = self.next_id(chrono::Utc::now().timestamp_millis());
        let meeting = Meeting {
            id,
            title: draft.title,
            date: draft.date,
            summary: draft.summary,
            participants: Some(split_list(&draft.participants)),
            tags: Some(split_list(&draft.tags)),
        };
        meeting.validate()?;

        self.meetings.push(meeting);
        Ok(&self.meetings[self.meetings.len() - 1])
    }

    /// Replaces the meeting with the same id after the same required-field
    /// checks as [`MeetingLog::add`].
    pub fn update(&mut self, meeting: Meeting) -> DashboardResult<()> {
        meeting.validate()?;
        let slot = self
            .meetings
            .iter_mut()
            .find(|m| m.id == meeting.id)
            .ok_or_else(|| DashboardError::not_found("Meeting", &meeting.id))?;
        *slot = meeting;
        Ok(())
    }

    pub fn remove(&mut self, id: &str) -> DashboardResult<Meeting> {
        let index = self
            .meetings
            .iter()
            .position(|m| m.id == id)
            .ok_or_else(|| DashboardError::not_found("Meeting", id))?;
        Ok(self.meetings.remove(index))
    }

    pub fn get(&self, id: &str) -> Option<&Meeting> {
        self.meetings.iter().find(|m| m.id == id)
    }
}
