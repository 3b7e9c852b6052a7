use crate::analysis::metrics::perturb;
use crate::commands::export::{status_report_export, ExportDocument};
use crate::commands::settings::load_effective_settings;
use crate::commands::state::{lock, DashboardState};
use crate::models::status::{StatusBoard, StatusView};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Mutex;

/// Holds the board's pending flag for the lifetime of one refresh. Dropping it
/// without `complete` (cancelled future, early return) clears the flag.
struct PendingRefresh<'a> {
    board: &'a Mutex<StatusBoard>,
    armed: bool,
}

impl<'a> PendingRefresh<'a> {
    fn begin(board: &'a Mutex<StatusBoard>) -> Result<Self, String> {
        lock(board)?.begin_refresh().map_err(|e| {
            log::warn!("refresh ignored: {e}");
            e.to_string()
        })?;
        Ok(Self { board, armed: true })
    }

    fn complete(mut self, status: &mut StatusBoard) {
        status.finish_refresh();
        self.armed = false;
    }
}

impl Drop for PendingRefresh<'_> {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }
        log::debug!("refresh abandoned, clearing pending flag");
        let mut status = self.board.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        status.finish_refresh();
    }
}

#[tauri::command]
pub async fn get_status(state: tauri::State<'_, DashboardState>) -> Result<StatusView, String> {
    get_status_internal(state.inner())
}

#[tauri::command]
pub async fn refresh_status(state: tauri::State<'_, DashboardState>) -> Result<StatusView, String> {
    let mut rng = StdRng::from_os_rng();
    refresh_status_internal(state.inner(), &mut rng).await
}

#[tauri::command]
pub async fn mark_update_resolved(
    id: String,
    state: tauri::State<'_, DashboardState>,
) -> Result<StatusView, String> {
    mark_update_resolved_internal(state.inner(), &id)
}

#[tauri::command]
pub async fn export_status_report(
    state: tauri::State<'_, DashboardState>,
) -> Result<ExportDocument, String> {
    export_status_report_internal(state.inner(), chrono::Utc::now())
}

pub fn get_status_internal(state: &DashboardState) -> Result<StatusView, String> {
    Ok(lock(&state.status)?.view())
}

/// Waits out the configured delay, then perturbs every metric and stamps
/// `lastUpdated`. Rejected while another refresh is pending.
pub async fn refresh_status_internal<R>(state: &DashboardState, rng: &mut R) -> Result<StatusView, String>
where
    R: Rng + Send,
{
    let settings = load_effective_settings(state)?;
    let pending = PendingRefresh::begin(&state.status)?;

    log::debug!("refreshing status metrics after {:?}", settings.refresh_delay);
    tokio::time::sleep(settings.refresh_delay).await;

    let mut status = lock(&state.status)?;
    pending.complete(&mut status);
    perturb(&mut status.metrics, rng, settings.jitter);
    status.last_updated = chrono::Utc::now().to_rfc3339();
    log::info!("status metrics refreshed, health is {:?}", status.health());

    Ok(status.view())
}

pub fn mark_update_resolved_internal(state: &DashboardState, id: &str) -> Result<StatusView, String> {
    let mut status = lock(&state.status)?;
    status.mark_resolved(id).map_err(|e| e.to_string())?;
    log::info!("status update {id} resolved");
    Ok(status.view())
}

pub fn export_status_report_internal(
    state: &DashboardState,
    now: chrono::DateTime<chrono::Utc>,
) -> Result<ExportDocument, String> {
    let status = lock(&state.status)?;
    status_report_export(&status, now).map_err(|e| e.to_string())
}
