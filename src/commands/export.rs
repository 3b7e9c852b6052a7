use crate::commands::settings::DateLocale;
use crate::error::{DashboardError, DashboardResult};
use crate::models::meeting::Meeting;
use crate::models::project::Project;
use crate::models::status::{StatusBoard, Trend, UpdateKind};
use crate::analysis::health::HealthLevel;
use chrono::{DateTime, Datelike, SecondsFormat, Utc};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tauri_plugin_dialog::DialogExt;

/// Characters `encodeURIComponent` leaves as-is.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// A rendered JSON export plus the file name the front end should suggest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportDocument {
    pub file_name: String,
    pub contents: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ProjectExport<'a> {
    exported_at: String,
    team_member_count: usize,
    project: &'a Project,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct MeetingsExport<'a> {
    exported_at: String,
    total_meetings: usize,
    meetings: &'a [Meeting],
}

#[derive(Serialize)]
struct ReportMetric<'a> {
    label: &'a str,
    value: &'a str,
    percentage: f64,
    trend: Trend,
}

#[derive(Serialize)]
struct ReportUpdate<'a> {
    #[serde(rename = "type")]
    kind: UpdateKind,
    message: &'a str,
    timestamp: &'a str,
    resolved: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct StatusReport<'a> {
    exported_at: String,
    overall_completion: u8,
    project_health: HealthLevel,
    metrics: Vec<ReportMetric<'a>>,
    status_updates: Vec<ReportUpdate<'a>>,
}

fn iso_timestamp(now: DateTime<Utc>) -> String {
    now.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Pretty JSON with two-space indentation.
fn render<T: Serialize>(value: &T) -> DashboardResult<String> {
    serde_json::to_string_pretty(value).map_err(|e| DashboardError::Export(e.to_string()))
}

pub fn project_export(project: &Project, now: DateTime<Utc>) -> DashboardResult<ExportDocument> {
    let contents = render(&ProjectExport {
        exported_at: iso_timestamp(now),
        team_member_count: project.team_members.len(),
        project,
    })?;
    Ok(ExportDocument {
        file_name: project.export_file_name(),
        contents,
    })
}

pub fn meetings_export(meetings: &[Meeting], now: DateTime<Utc>) -> DashboardResult<ExportDocument> {
    let contents = render(&MeetingsExport {
        exported_at: iso_timestamp(now),
        total_meetings: meetings.len(),
        meetings,
    })?;
    Ok(ExportDocument {
        file_name: format!("meeting-notes-{}.json", now.format("%Y-%m-%d")),
        contents,
    })
}

pub fn status_report_export(board: &StatusBoard, now: DateTime<Utc>) -> DashboardResult<ExportDocument> {
    let report = StatusReport {
        exported_at: iso_timestamp(now),
        overall_completion: board.overall_completion,
        project_health: board.health(),
        metrics: board
            .metrics
            .iter()
            .map(|m| ReportMetric {
                label: &m.label,
                value: &m.value,
                percentage: m.percentage,
                trend: m.trend,
            })
            .collect(),
        status_updates: board
            .status_updates
            .iter()
            .map(|u| ReportUpdate {
                kind: u.kind,
                message: &u.message,
                timestamp: &u.timestamp,
                resolved: u.resolved,
            })
            .collect(),
    };
    Ok(ExportDocument {
        file_name: format!("project-status-report-{}.json", now.format("%Y-%m-%d")),
        contents: render(&report)?,
    })
}

pub fn encode_uri_component(raw: &str) -> String {
    utf8_percent_encode(raw, URI_COMPONENT).to_string()
}

fn display_date(raw: &str, locale: DateLocale) -> String {
    match (crate::analysis::progress::parse_iso_date(raw), locale) {
        (Some(date), DateLocale::EnUs) => format!("{}/{}/{}", date.month(), date.day(), date.year()),
        (Some(date), DateLocale::Iso) => date.format("%Y-%m-%d").to_string(),
        (None, _) => raw.to_string(),
    }
}

fn participants_line(meeting: &Meeting) -> String {
    if meeting.participants().is_empty() {
        "N/A".to_string()
    } else {
        meeting.participants().join(", ")
    }
}

fn mailto(subject: &str, body: &str) -> String {
    format!(
        "mailto:?subject={}&body={}",
        encode_uri_component(subject),
        encode_uri_component(body)
    )
}

pub fn meeting_mailto(meeting: &Meeting, locale: DateLocale) -> String {
    let subject = format!("Meeting Notes: {}", meeting.title);
    let body = format!(
        "{}\nDate: {}\n\nSummary:\n{}\n\nParticipants: {}",
        meeting.title,
        display_date(&meeting.date, locale),
        meeting.summary,
        participants_line(meeting)
    );
    mailto(&subject, &body)
}

pub fn all_meetings_mailto(meetings: &[Meeting], locale: DateLocale) -> String {
    let body: String = meetings
        .iter()
        .map(|m| {
            format!(
                "{}\nDate: {}\nSummary: {}\nParticipants: {}\n\n",
                m.title,
                display_date(&m.date, locale),
                m.summary,
                participants_line(m)
            )
        })
        .collect();
    mailto("Project Meeting Notes Summary", &body)
}

#[tauri::command]
pub async fn save_export(
    document: ExportDocument,
    app: tauri::AppHandle,
) -> Result<Option<String>, String> {
    let Some(picked) = app
        .dialog()
        .file()
        .set_file_name(document.file_name.clone())
        .add_filter("JSON", &["json"])
        .blocking_save_file()
    else {
        log::info!("export of {} cancelled", document.file_name);
        return Ok(None);
    };

    let path = picked
        .into_path()
        .map_err(|e| format!("Invalid export path: {e}"))?;
    write_export(&path, &document)?;
    Ok(Some(path.to_string_lossy().to_string()))
}

pub fn write_export(path: &Path, document: &ExportDocument) -> Result<(), String> {
    std::fs::write(path, &document.contents)
        .map_err(|e| format!("Failed to write {}: {e}", path.display()))?;
    log::info!("exported {} bytes to {}", document.contents.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::meeting::MeetingLog;
    use chrono::TimeZone;
    use serde_json::Value;

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 1, 9, 30, 0).unwrap()
    }

    #[test]
    fn project_export_carries_timestamp_count_and_entity() {
        let doc = project_export(&Project::default(), fixed_now()).unwrap();
        let parsed: Value = serde_json::from_str(&doc.contents).unwrap();

        assert_eq!(doc.file_name, "website-redesign-project-data.json");
        assert_eq!(parsed["exportedAt"], "2025-03-01T09:30:00.000Z");
        assert_eq!(parsed["teamMemberCount"], 4);
        assert_eq!(parsed["project"]["client"], "Acme Corporation");
    }

    #[test]
    fn exports_use_two_space_indentation() {
        let doc = meetings_export(&MeetingLog::default().meetings, fixed_now()).unwrap();
        assert!(doc.contents.starts_with("{\n  \"exportedAt\""));
        assert_eq!(doc.file_name, "meeting-notes-2025-03-01.json");

        let parsed: Value = serde_json::from_str(&doc.contents).unwrap();
        assert_eq!(parsed["totalMeetings"], 3);
        assert_eq!(parsed["meetings"][2]["tags"][1], "planning");
    }

    #[test]
    fn status_report_lists_metrics_and_updates() {
        let doc = status_report_export(&StatusBoard::default(), fixed_now()).unwrap();
        let parsed: Value = serde_json::from_str(&doc.contents).unwrap();

        assert_eq!(doc.file_name, "project-status-report-2025-03-01.json");
        assert_eq!(parsed["overallCompletion"], 65);
        assert_eq!(parsed["projectHealth"], "good");
        assert_eq!(parsed["metrics"][0]["label"], "Tasks Completed");
        assert_eq!(parsed["metrics"][0]["trend"], "up");
        assert_eq!(parsed["statusUpdates"][3]["type"], "warning");
        assert!(parsed["metrics"][0].get("kind").is_none());
    }

    #[test]
    fn uri_component_encoding_matches_browser_rules() {
        assert_eq!(encode_uri_component("Meeting Notes: A&B"), "Meeting%20Notes%3A%20A%26B");
        assert_eq!(encode_uri_component("it's (fine)!~*._-"), "it's%20(fine)!~*._-");
        assert_eq!(encode_uri_component("line\nbreak"), "line%0Abreak");
        assert_eq!(encode_uri_component("café"), "caf%C3%A9");
    }

    #[test]
    fn single_meeting_mailto_has_subject_and_body() {
        let log = MeetingLog::default();
        let uri = meeting_mailto(&log.meetings[1], DateLocale::EnUs);

        assert!(uri.starts_with("mailto:?subject=Meeting%20Notes%3A%20Design%20Review&body="));
        assert!(uri.contains("Date%3A%202%2F10%2F2025%0A%0ASummary%3A%0A"));
        assert!(uri.contains("Participants%3A%20Jane%20Smith%2C%20Sarah%20Wilson%2C%20Design%20Team"));
    }

    #[test]
    fn mailto_without_participants_says_na() {
        let mut meeting = MeetingLog::default().meetings[0].clone();
        meeting.participants = None;
        let uri = meeting_mailto(&meeting, DateLocale::Iso);

        assert!(uri.contains("Date%3A%202025-01-15"));
        assert!(uri.ends_with("Participants%3A%20N%2FA"));
    }

    #[test]
    fn all_meetings_mailto_concatenates_every_meeting() {
        let log = MeetingLog::default();
        let uri = all_meetings_mailto(&log.meetings, DateLocale::EnUs);

        assert!(uri.starts_with("mailto:?subject=Project%20Meeting%20Notes%20Summary&body="));
        assert_eq!(uri.matches("Summary%3A%20").count(), 3);
        assert!(uri.ends_with("%0A%0A"));
    }

    #[test]
    fn write_export_puts_contents_on_disk() {
        let dir = tempfile::tempdir().expect("temp dir");
        let doc = project_export(&Project::default(), fixed_now()).unwrap();
        let path = dir.path().join(&doc.file_name);

        write_export(&path, &doc).expect("write export");
        assert_eq!(std::fs::read_to_string(&path).unwrap(), doc.contents);
    }
}
