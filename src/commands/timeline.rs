use crate::analysis::filter::filter_milestones;
use crate::commands::state::{lock, DashboardState};
use crate::models::timeline::{Milestone, MilestoneDraft, MilestoneStatus, TimelineView};

#[tauri::command]
pub async fn get_timeline(
    status: Option<MilestoneStatus>,
    state: tauri::State<'_, DashboardState>,
) -> Result<TimelineView, String> {
    get_timeline_internal(state.inner(), status)
}

#[tauri::command]
pub async fn add_milestone(
    draft: MilestoneDraft,
    state: tauri::State<'_, DashboardState>,
) -> Result<Milestone, String> {
    add_milestone_internal(state.inner(), draft)
}

#[tauri::command]
pub async fn update_milestone(
    milestone: Milestone,
    state: tauri::State<'_, DashboardState>,
) -> Result<(), String> {
    update_milestone_internal(state.inner(), milestone)
}

#[tauri::command]
pub async fn set_milestone_status(
    id: u32,
    status: MilestoneStatus,
    state: tauri::State<'_, DashboardState>,
) -> Result<(), String> {
    set_milestone_status_internal(state.inner(), id, status)
}

#[tauri::command]
pub async fn delete_milestone(
    id: u32,
    state: tauri::State<'_, DashboardState>,
) -> Result<(), String> {
    delete_milestone_internal(state.inner(), id)
}

/// Progress and completed count always cover the whole timeline; `status`
/// only narrows the returned list.
pub fn get_timeline_internal(
    state: &DashboardState,
    status: Option<MilestoneStatus>,
) -> Result<TimelineView, String> {
    let timeline = lock(&state.timeline)?;
    let mut view = timeline.view();
    view.milestones = filter_milestones(&timeline.milestones, status)
        .into_iter()
        .cloned()
        .collect();
    Ok(view)
}

pub fn add_milestone_internal(state: &DashboardState, draft: MilestoneDraft) -> Result<Milestone, String> {
    let mut timeline = lock(&state.timeline)?;
    let added = timeline.add(draft).map_err(|e| {
        log::warn!("milestone rejected: {e}");
        e.to_string()
    })?;
    log::info!("milestone {} added", added.id);
    Ok(added.clone())
}

pub fn update_milestone_internal(state: &DashboardState, milestone: Milestone) -> Result<(), String> {
    lock(&state.timeline)?
        .update(milestone)
        .map_err(|e| e.to_string())
}

pub fn set_milestone_status_internal(
    state: &DashboardState,
    id: u32,
    status: MilestoneStatus,
) -> Result<(), String> {
    lock(&state.timeline)?
        .set_status(id, status)
        .map_err(|e| e.to_string())?;
    log::debug!("milestone {id} status set to {status:?}");
    Ok(())
}

pub fn delete_milestone_internal(state: &DashboardState, id: u32) -> Result<(), String> {
    lock(&state.timeline)?.remove(id).map_err(|e| e.to_string())?;
    log::info!("milestone {id} deleted");
    Ok(())
}
