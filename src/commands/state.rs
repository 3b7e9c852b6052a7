use crate::commands::settings::normalize_settings;
use crate::models::budget::Budget;
use crate::models::meeting::MeetingLog;
use crate::models::project::Project;
use crate::models::status::StatusBoard;
use crate::models::timeline::Timeline;
use serde_json::Value;
use std::sync::{Mutex, MutexGuard};

/// Managed Tauri state. Each tab owns its aggregate behind its own lock; no
/// tab reads another's data.
#[derive(Debug)]
pub struct DashboardState {
    pub project: Mutex<Project>,
    pub timeline: Mutex<Timeline>,
    pub budget: Mutex<Budget>,
    pub status: Mutex<StatusBoard>,
    pub meetings: Mutex<MeetingLog>,
    pub settings: Mutex<Value>,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self {
            project: Mutex::new(Project::default()),
            timeline: Mutex::new(Timeline::default()),
            budget: Mutex::new(Budget::default()),
            status: Mutex::new(StatusBoard::default()),
            meetings: Mutex::new(MeetingLog::default()),
            settings: Mutex::new(normalize_settings(Value::Null)),
        }
    }
}

pub fn lock<T>(mutex: &Mutex<T>) -> Result<MutexGuard<'_, T>, String> {
    mutex.lock().map_err(|_| "State lock error".to_string())
}
