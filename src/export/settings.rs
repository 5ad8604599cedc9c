use super::document::{SettingValue, Settings};
use super::resolve::{probe, resolve};
use serde_json::Value;

/// Named, well-known settings and the single path each is probed at.
///
/// Keys are camelCase because the Markdown renderer humanizes them by
/// splitting on internal capitals.
const NAMED_PROBES: &[(&str, &str)] = &[
    ("model", "model"),
    ("temperature", "temperature"),
    ("language", "language"),
    ("voice", "voice_id"),
    ("responsiveness", "responsiveness"),
    ("interruptionSensitivity", "interruption_sensitivity"),
    ("ambientSound", "ambient_sound"),
    ("sttMode", "stt_mode"),
];

/// Millisecond-valued durations, rendered through `format_duration_ms`.
const DURATION_PROBES: &[(&str, &str)] = &[
    ("maxCallDuration", "max_call_duration_ms"),
    ("reminderTrigger", "reminder_trigger_ms"),
    ("endCallAfterSilence", "end_call_after_silence_ms"),
];

/// Legacy free-form settings object, merged last so its entries win.
const LEGACY_OBJECT_PATHS: &[&str] = &["settings", "config"];

/// Assembles the settings bag from an export root.
///
/// Named probes insert only when present; durations are pre-formatted; the
/// legacy object is merged entry-by-entry afterward, overwriting any named
/// key already present and skipping null entries.
pub fn assemble_settings(root: &Value) -> Settings {
    let mut settings = Settings::new();

    for (key, path) in NAMED_PROBES {
        if let Some(value) = probe(root, path) {
            settings.insert(*key, SettingValue::from(value));
        }
    }

    for (key, path) in DURATION_PROBES {
        if let Some(ms) = probe(root, path).and_then(Value::as_f64) {
            settings.insert(*key, SettingValue::Duration(format_duration_ms(ms)));
        }
    }

    if let Some(legacy) = resolve(root, LEGACY_OBJECT_PATHS).and_then(Value::as_object) {
        for (key, value) in legacy {
            if value.is_null() {
                continue;
            }
            settings.insert(key.clone(), SettingValue::from(value));
        }
    }

    settings
}

/// Formats a millisecond count for display.
///
/// Values under a second stay in milliseconds, values under a minute round
/// to whole seconds, everything above renders as minutes with one decimal.
pub fn format_duration_ms(ms: f64) -> String {
    if ms < 1000.0 {
        if ms.fract() == 0.0 {
            format!("{}ms", ms as i64)
        } else {
            format!("{}ms", ms)
        }
    } else if ms < 60_000.0 {
        format!("{}s", (ms / 1000.0).round() as i64)
    } else {
        format!("{:.1} min", ms / 60_000.0)
    }
}
