use serde::Deserialize;
use std::cmp::Ordering;

use crate::config::ViewConfig;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

impl PartialOrd for LogLevel {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for LogLevel {
    fn cmp(&self, other: &Self) -> Ordering {
        fn rank(level: LogLevel) -> u8 {
            match level {
                LogLevel::Debug => 0,
                LogLevel::Info => 1,
                LogLevel::Warn => 2,
                LogLevel::Error => 3,
            }
        }

        rank(*self).cmp(&rank(*other))
    }
}

impl LogLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

pub fn log_event(config: &ViewConfig, level: LogLevel, event: &str, fields: serde_json::Value) {
    if level < config.log_level {
        return;
    }

    let payload = build_payload(now_millis(), level, event, fields);
    emit(level, &payload.to_string());
}

/// Flattens `fields` into the envelope; envelope keys win over same-named fields.
fn build_payload(ts: u64, level: LogLevel, event: &str, fields: serde_json::Value) -> serde_json::Value {
    let mut payload = serde_json::Map::new();

    if let serde_json::Value::Object(extra) = fields {
        for (key, value) in extra {
            payload.insert(key, value);
        }
    }

    payload.insert(
        "ts".to_string(),
        serde_json::Value::Number(serde_json::Number::from(ts)),
    );
    payload.insert("level".to_string(), serde_json::Value::String(level.as_str().to_string()));
    payload.insert("event".to_string(), serde_json::Value::String(event.to_string()));

    serde_json::Value::Object(payload)
}

#[cfg(target_arch = "wasm32")]
fn now_millis() -> u64 {
    js_sys::Date::now().max(0.0) as u64
}

#[cfg(not(target_arch = "wasm32"))]
fn now_millis() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};

    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|value| value.as_millis() as u64)
        .unwrap_or(0)
}

#[cfg(target_arch = "wasm32")]
fn emit(level: LogLevel, line: &str) {
    let line = wasm_bindgen::JsValue::from_str(line);
    match level {
        LogLevel::Error => web_sys::console::error_1(&line),
        LogLevel::Warn => web_sys::console::warn_1(&line),
        LogLevel::Debug | LogLevel::Info => web_sys::console::log_1(&line),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(_level: LogLevel, line: &str) {
    eprintln!("{line}");
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn levels_order_from_debug_to_error() {
        assert!(LogLevel::Debug < LogLevel::Info);
        assert!(LogLevel::Info < LogLevel::Warn);
        assert!(LogLevel::Warn < LogLevel::Error);
    }

    #[test]
    fn payload_merges_fields_into_envelope() {
        let payload = build_payload(
            42,
            LogLevel::Warn,
            "gallery.lookup_miss",
            json!({ "title": "unknown-title" }),
        );

        assert_eq!(payload["ts"], 42);
        assert_eq!(payload["level"], "warn");
        assert_eq!(payload["event"], "gallery.lookup_miss");
        assert_eq!(payload["title"], "unknown-title");
    }

    #[test]
    fn payload_envelope_keys_are_not_overridden_by_fields() {
        let payload = build_payload(7, LogLevel::Info, "nav.click", json!({ "event": "spoofed" }));
        assert_eq!(payload["event"], "nav.click");
    }

    #[test]
    fn non_object_fields_are_dropped() {
        let payload = build_payload(1, LogLevel::Debug, "setup.skip", json!("loose string"));
        let object = payload.as_object().map(|map| map.len());
        assert_eq!(object, Some(3));
    }

    #[test]
    fn log_level_deserializes_from_lowercase_names() {
        let level: LogLevel = serde_json::from_str("\"warn\"").unwrap_or(LogLevel::Debug);
        assert_eq!(level, LogLevel::Warn);
    }
}
