use crate::analysis::filter::{distinct_tags, filter_meetings, MeetingQuery};
use crate::commands::export::{all_meetings_mailto, meeting_mailto, meetings_export, ExportDocument};
use crate::commands::settings::load_effective_settings;
use crate::commands::state::{lock, DashboardState};
use crate::models::meeting::{Meeting, MeetingDraft};
use serde::{Deserialize, Serialize};
use tauri_plugin_opener::OpenerExt;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeetingsView {
    pub meetings: Vec<Meeting>,
    pub tags: Vec<String>,
    pub total_meetings: usize,
}

#[tauri::command]
pub async fn list_meetings(
    query: Option<MeetingQuery>,
    state: tauri::State<'_, DashboardState>,
) -> Result<MeetingsView, String> {
    list_meetings_internal(state.inner(), &query.unwrap_or_default())
}

#[tauri::command]
pub async fn add_meeting(
    draft: MeetingDraft,
    state: tauri::State<'_, DashboardState>,
) -> Result<Meeting, String> {
    add_meeting_internal(state.inner(), draft)
}

#[tauri::command]
pub async fn update_meeting(
    meeting: Meeting,
    state: tauri::State<'_, DashboardState>,
) -> Result<(), String> {
    update_meeting_internal(state.inner(), meeting)
}

#[tauri::command]
pub async fn delete_meeting(
    id: String,
    state: tauri::State<'_, DashboardState>,
) -> Result<(), String> {
    delete_meeting_internal(state.inner(), &id)
}

#[tauri::command]
pub async fn export_meetings(
    state: tauri::State<'_, DashboardState>,
) -> Result<ExportDocument, String> {
    export_meetings_internal(state.inner(), chrono::Utc::now())
}

/// Builds the mailto draft and hands it to the OS mail handler. Hand-off
/// failures are logged only.
#[tauri::command]
pub async fn email_meeting_notes(
    id: Option<String>,
    state: tauri::State<'_, DashboardState>,
    app: tauri::AppHandle,
) -> Result<String, String> {
    let uri = meeting_mailto_internal(state.inner(), id.as_deref())?;
    if let Err(e) = app.opener().open_url(uri.clone(), None::<&str>) {
        log::warn!("could not open mail client: {e}");
    }
    Ok(uri)
}

pub fn list_meetings_internal(state: &DashboardState, query: &MeetingQuery) -> Result<MeetingsView, String> {
    let notes = lock(&state.meetings)?;
    Ok(MeetingsView {
        meetings: filter_meetings(&notes.meetings, query).into_iter().cloned().collect(),
        tags: distinct_tags(&notes.meetings),
        total_meetings: notes.meetings.len(),
    })
}

pub fn add_meeting_internal(state: &DashboardState, draft: MeetingDraft) -> Result<Meeting, String> {
    let mut notes = lock(&state.meetings)?;
    let added = notes.add(draft).map_err(|e| {
        log::warn!("meeting rejected: {e}");
        e.to_string()
    })?;
    log::info!("meeting {} added", added.id);
    Ok(added.clone())
}

pub fn update_meeting_internal(state: &DashboardState, meeting: Meeting) -> Result<(), String> {
    lock(&state.meetings)?
        .update(meeting)
        .map_err(|e| e.to_string())
}

pub fn delete_meeting_internal(state: &DashboardState, id: &str) -> Result<(), String> {
    lock(&state.meetings)?.remove(id).map_err(|e| e.to_string())?;
    log::info!("meeting {id} deleted");
    Ok(())
}

pub fn export_meetings_internal(
    state: &DashboardState,
    now: chrono::DateTime<chrono::Utc>,
) -> Result<ExportDocument, String> {
    let notes = lock(&state.meetings)?;
    meetings_export(&notes.meetings, now).map_err(|e| e.to_string())
}

/// One meeting when `id` is given, otherwise every meeting in the log.
pub fn meeting_mailto_internal(state: &DashboardState, id: Option<&str>) -> Result<String, String> {
    let locale = load_effective_settings(state)?.date_locale;
    let notes = lock(&state.meetings)?;
    match id {
        Some(id) => {
            let meeting = notes.get(id).ok_or(format!("Meeting not found: {id}"))?;
            Ok(meeting_mailto(meeting, locale))
        }
        None => Ok(all_meetings_mailto(&notes.meetings, locale)),
    }
}
