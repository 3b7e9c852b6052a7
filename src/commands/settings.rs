use crate::analysis::metrics::Jitter;
use crate::commands::state::{lock, DashboardState};
use serde_json::{json, Map, Value};
use std::time::Duration;

const SETTINGS_SCHEMA_VERSION: i64 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateLocale {
    /// `1/15/2025`
    EnUs,
    /// `2025-01-15`
    Iso,
}

#[derive(Debug, Clone)]
pub struct EffectiveSettings {
    pub refresh_delay: Duration,
    pub jitter: Jitter,
    pub date_locale: DateLocale,
}

#[tauri::command]
pub async fn get_settings(state: tauri::State<'_, DashboardState>) -> Result<Value, String> {
    get_settings_internal(state.inner())
}

#[tauri::command]
pub async fn save_settings(
    settings: Value,
    state: tauri::State<'_, DashboardState>,
) -> Result<Value, String> {
    save_settings_internal(state.inner(), settings)
}

pub fn get_settings_internal(state: &DashboardState) -> Result<Value, String> {
    Ok(lock(&state.settings)?.clone())
}

/// Merges a partial settings document over the current one and stores the
/// sanitized result.
pub fn save_settings_internal(state: &DashboardState, incoming: Value) -> Result<Value, String> {
    let mut current = lock(&state.settings)?;
    let mut merged = current.clone();
    overlay_settings(&mut merged, &incoming);

    let normalized = normalize_settings(merged);
    *current = normalized.clone();
    log::info!("settings updated");
    Ok(normalized)
}

pub fn load_effective_settings(state: &DashboardState) -> Result<EffectiveSettings, String> {
    let settings = lock(&state.settings)?;
    Ok(effective_from(&settings))
}

fn effective_from(settings: &Value) -> EffectiveSettings {
    let refresh_delay_ms = settings
        .get("refreshDelayMs")
        .and_then(Value::as_u64)
        .unwrap_or(1000)
        .min(10_000);
    let percentage = settings
        .get("percentageJitter")
        .and_then(Value::as_f64)
        .unwrap_or(5.0)
        .clamp(0.0, 50.0);
    let trend = settings
        .get("trendJitter")
        .and_then(Value::as_f64)
        .unwrap_or(1.0)
        .clamp(0.0, 10.0);
    let date_locale = match settings.get("dateLocale").and_then(Value::as_str) {
        Some("iso") => DateLocale::Iso,
        _ => DateLocale::EnUs,
    };

    EffectiveSettings {
        refresh_delay: Duration::from_millis(refresh_delay_ms),
        jitter: Jitter { percentage, trend },
        date_locale,
    }
}

/// Allowed shape of one settings key. Out-of-range numbers are clamped,
/// anything unreadable falls back to the default.
enum Rule {
    Millis { max: u64, default: u64 },
    Amplitude { max: f64, default: f64 },
    OneOf { allowed: &'static [&'static str], default: &'static str },
}

const RULES: &[(&str, Rule)] = &[
    ("refreshDelayMs", Rule::Millis { max: 10_000, default: 1000 }),
    ("percentageJitter", Rule::Amplitude { max: 50.0, default: 5.0 }),
    ("trendJitter", Rule::Amplitude { max: 10.0, default: 1.0 }),
    ("dateLocale", Rule::OneOf { allowed: &["en-US", "iso"], default: "en-US" }),
];

impl Rule {
    fn normalize(&self, raw: Option<&Value>) -> Value {
        match *self {
            Rule::Millis { max, default } => {
                json!(raw.and_then(Value::as_u64).unwrap_or(default).min(max))
            }
            Rule::Amplitude { max, default } => {
                let amplitude = raw
                    .and_then(Value::as_f64)
                    .filter(|v| v.is_finite())
                    .unwrap_or(default);
                json!(amplitude.clamp(0.0, max))
            }
            Rule::OneOf { allowed, default } => {
                let value = raw
                    .and_then(Value::as_str)
                    .filter(|v| allowed.contains(v))
                    .unwrap_or(default);
                json!(value)
            }
        }
    }
}

pub fn default_settings() -> Value {
    normalize_settings(Value::Null)
}

/// Brings any document to the current schema: every known key present and in
/// range, unknown keys kept as-is.
pub(crate) fn normalize_settings(input: Value) -> Value {
    let mut doc = match input {
        Value::Object(map) => map,
        _ => Map::new(),
    };

    for (key, rule) in RULES {
        let normalized = rule.normalize(doc.get(*key));
        doc.insert((*key).to_string(), normalized);
    }
    doc.insert("schema_version".to_string(), json!(SETTINGS_SCHEMA_VERSION));

    Value::Object(doc)
}

/// Settings are flat, so a partial update simply replaces the keys it names.
fn overlay_settings(current: &mut Value, incoming: &Value) {
    let Some(incoming) = incoming.as_object() else {
        log::warn!("ignoring non-object settings update");
        return;
    };
    if let Some(current) = current.as_object_mut() {
        current.extend(incoming.iter().map(|(k, v)| (k.clone(), v.clone())));
    }
}
