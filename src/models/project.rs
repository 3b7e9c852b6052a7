use crate::error::{DashboardError, DashboardResult};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectStatus {
    Planning,
    Active,
    OnHold,
    Completed,
}

impl ProjectStatus {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "planning" => Some(ProjectStatus::Planning),
            "active" => Some(ProjectStatus::Active),
            "on-hold" => Some(ProjectStatus::OnHold),
            "completed" => Some(ProjectStatus::Completed),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "low" => Some(Priority::Low),
            "medium" => Some(Priority::Medium),
            "high" => Some(Priority::High),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MemberStatus {
    Active,
    Inactive,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamMember {
    pub id: String,
    pub name: String,
    pub role: String,
    pub email: String,
    pub status: MemberStatus,
}

impl TeamMember {
    /// Empty placeholder row, filled in by subsequent field edits.
    pub fn placeholder() -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name: String::new(),
            role: String::new(),
            email: String::new(),
            status: MemberStatus::Active,
        }
    }

    fn sample(id: &str, name: &str, role: &str, email: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            role: role.to_string(),
            email: email.to_string(),
            status: MemberStatus::Active,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub project_name: String,
    pub start_date: String,
    pub target_date: String,
    pub scope: String,
    pub status: ProjectStatus,
    pub priority: Priority,
    pub budget: String, // free text, e.g. "$85,000"
    pub client: String,
    pub description: String,
    pub team_members: Vec<TeamMember>,
}

impl Default for Project {
    fn default() -> Self {
        Self {
            project_name: "Website Redesign".to_string(),
            start_date: "2025-01-15".to_string(),
            target_date: "2025-04-30".to_string(),
            scope: "Complete redesign of corporate website with improved UX and modern design"
                .to_string(),
            status: ProjectStatus::Active,
            priority: Priority::High,
            budget: "$85,000".to_string(),
            client: "Acme Corporation".to_string(),
            description: "Modernize the corporate website with responsive design, improved user experience, and updated content management system.".to_string(),
            team_members: vec![
                TeamMember::sample("1", "Sarah Chen", "Project Manager", "sarah.chen@company.com"),
                TeamMember::sample("2", "Marcus Rivera", "Lead Designer", "marcus.rivera@company.com"),
                TeamMember::sample("3", "Emily Watson", "Frontend Developer", "emily.watson@company.com"),
                TeamMember::sample("4", "Alex Kim", "Backend Developer", "alex.kim@company.com"),
            ],
        }
    }
}

impl Project {
    /// Sets one top-level field by its wire name. Dates are stored as given;
    /// no ordering between start and target is enforced.
    pub fn update_field(&mut self, field: &str, value: &str) -> DashboardResult<()> {
        match field {
            "projectName" => self.project_name = value.to_string(),
            "startDate" => self.start_date = value.to_string(),
            "targetDate" => self.target_date = value.to_string(),
            "scope" => self.scope = value.to_string(),
            "budget" => self.budget = value.to_string(),
            "client" => self.client = value.to_string(),
            "description" => self.description = value.to_string(),
            "status" => {
                self.status = ProjectStatus::parse(value).ok_or_else(|| {
                    DashboardError::InvalidValue {
                        field: "status",
                        value: value.to_string(),
                    }
                })?
            }
            "priority" => {
                self.priority =
                    Priority::parse(value).ok_or_else(|| DashboardError::InvalidValue {
                        field: "priority",
                        value: value.to_string(),
                    })?
            }
            other => return Err(DashboardError::UnknownField(other.to_string())),
        }
        Ok(())
    }

    pub fn add_team_member(&mut self) -> &TeamMember {
        self.team_members.push(TeamMember::placeholder());
        &self.team_members[self.team_members.len() - 1]
    }

    pub fn remove_team_member(&mut self, id: &str) -> DashboardResult<()> {
        let before = self.team_members.len();
        self.team_members.retain(|member| member.id != id);
        if self.team_members.len() == before {
            return Err(DashboardError::not_found("Team member", id));
        }
        Ok(())
    }

    pub fn update_team_member(&mut self, id: &str, field: &str, value: &str) -> DashboardResult<()> {
        let member = self
            .team_members
            .iter_mut()
            .find(|member| member.id == id)
            .ok_or_else(|| DashboardError::not_found("Team member", id))?;

        match field {
            "name" => member.name = value.to_string(),
            "role" => member.role = value.to_string(),
            "email" => member.email = value.to_string(),
            "status" => {
                member.status = match value {
                    "active" => MemberStatus::Active,
                    "inactive" => MemberStatus::Inactive,
                    _ => {
                        return Err(DashboardError::InvalidValue {
                            field: "status",
                            value: value.to_string(),
                        })
                    }
                }
            }
            other => return Err(DashboardError::UnknownField(other.to_string())),
        }
        Ok(())
    }

    pub fn active_member_count(&self) -> usize {
        self.team_members
            .iter()
            .filter(|member| member.status == MemberStatus::Active)
            .count()
    }

    /// Schedule progress as of `today`, recomputed on every call.
    pub fn progress(&self, today: chrono::NaiveDate) -> u8 {
        crate::analysis::progress::schedule_progress_from_str(
            &self.start_date,
            &self.target_date,
            today,
        )
    }

    /// `Website Redesign` → `website-redesign-project-data.json`
    pub fn export_file_name(&self) -> String {
        let slug = self
            .project_name
            .split_whitespace()
            .collect::<Vec<_>>()
            .join("-")
            .to_lowercase();
        format!("{slug}-project-data.json")
    }
}
