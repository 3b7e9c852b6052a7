use crate::commands::export::{project_export, ExportDocument};
use crate::commands::state::{lock, DashboardState};
use crate::models::project::{Project, TeamMember};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectView {
    pub project: Project,
    pub progress: u8,
    pub active_member_count: usize,
}

#[tauri::command]
pub async fn get_project(state: tauri::State<'_, DashboardState>) -> Result<ProjectView, String> {
    get_project_internal(state.inner(), chrono::Local::now().date_naive())
}

#[tauri::command]
pub async fn update_project_field(
    field: String,
    value: String,
    state: tauri::State<'_, DashboardState>,
) -> Result<ProjectView, String> {
    update_project_field_internal(state.inner(), &field, &value)?;
    get_project_internal(state.inner(), chrono::Local::now().date_naive())
}

#[tauri::command]
pub async fn add_team_member(state: tauri::State<'_, DashboardState>) -> Result<TeamMember, String> {
    add_team_member_internal(state.inner())
}

#[tauri::command]
pub async fn remove_team_member(
    id: String,
    state: tauri::State<'_, DashboardState>,
) -> Result<(), String> {
    remove_team_member_internal(state.inner(), &id)
}

#[tauri::command]
pub async fn update_team_member(
    id: String,
    field: String,
    value: String,
    state: tauri::State<'_, DashboardState>,
) -> Result<(), String> {
    update_team_member_internal(state.inner(), &id, &field, &value)
}

#[tauri::command]
pub async fn export_project(
    state: tauri::State<'_, DashboardState>,
) -> Result<ExportDocument, String> {
    export_project_internal(state.inner(), chrono::Utc::now())
}

pub fn get_project_internal(
    state: &DashboardState,
    today: chrono::NaiveDate,
) -> Result<ProjectView, String> {
    let project = lock(&state.project)?;
    Ok(ProjectView {
        progress: project.progress(today),
        active_member_count: project.active_member_count(),
        project: project.clone(),
    })
}

pub fn update_project_field_internal(
    state: &DashboardState,
    field: &str,
    value: &str,
) -> Result<(), String> {
    lock(&state.project)?
        .update_field(field, value)
        .map_err(|e| e.to_string())?;
    log::debug!("project field {field} updated");
    Ok(())
}

pub fn add_team_member_internal(state: &DashboardState) -> Result<TeamMember, String> {
    let mut project = lock(&state.project)?;
    let member = project.add_team_member().clone();
    log::info!("team member {} added", member.id);
    Ok(member)
}

pub fn remove_team_member_internal(state: &DashboardState, id: &str) -> Result<(), String> {
    lock(&state.project)?
        .remove_team_member(id)
        .map_err(|e| e.to_string())?;
    log::info!("team member {id} removed");
    Ok(())
}

pub fn update_team_member_internal(
    state: &DashboardState,
    id: &str,
    field: &str,
    value: &str,
) -> Result<(), String> {
    lock(&state.project)?
        .update_team_member(id, field, value)
        .map_err(|e| e.to_string())
}

pub fn export_project_internal(
    state: &DashboardState,
    now: chrono::DateTime<chrono::Utc>,
) -> Result<ExportDocument, String> {
    let project = lock(&state.project)?;
    project_export(&project, now).map_err(|e| e.to_string())
}
