pub mod analysis;
pub mod commands;
pub mod error;
pub mod models;

use commands::{
    budget::{get_budget_summary, set_category_value, set_spent_budget},
    export::save_export,
    meetings::{add_meeting, delete_meeting, email_meeting_notes, export_meetings, list_meetings, update_meeting},
    project::{add_team_member, export_project, get_project, remove_team_member, update_project_field, update_team_member},
    settings::{get_settings, save_settings},
    state::DashboardState,
    status::{export_status_report, get_status, mark_update_resolved, refresh_status},
    timeline::{add_milestone, delete_milestone, get_timeline, set_milestone_status, update_milestone},
};

/// Initializes `env_logger` with an `info` default, overridable via `RUST_LOG`.
/// Safe to call more than once.
pub fn init_logging() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .try_init();
}

/// Installs the dashboard backend on a Tauri builder: plugins, a fresh
/// in-memory [`DashboardState`] and every command handler. The host binary
/// supplies the context and calls `.run(...)`.
pub fn register(builder: tauri::Builder<tauri::Wry>) -> tauri::Builder<tauri::Wry> {
    init_logging();
    log::info!("registering dashboard commands");

    builder
        .plugin(tauri_plugin_opener::init())
        .plugin(tauri_plugin_dialog::init())
        .manage(DashboardState::default())
        .invoke_handler(tauri::generate_handler![
            get_project,
            update_project_field,
            add_team_member,
            remove_team_member,
            update_team_member,
            export_project,
            get_timeline,
            add_milestone,
            update_milestone,
            set_milestone_status,
            delete_milestone,
            get_budget_summary,
            set_spent_budget,
            set_category_value,
            get_status,
            refresh_status,
            mark_update_resolved,
            export_status_report,
            list_meetings,
            add_meeting,
            update_meeting,
            delete_meeting,
            export_meetings,
            email_meeting_notes,
            save_export,
            get_settings,
            save_settings,
        ])
}
