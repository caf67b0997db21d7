use serde::Deserialize;

use crate::diagnostics::LogLevel;

pub const CONFIG_ELEMENT_ID: &str = "portfolio-config";

const DEFAULT_NAV_PROBE_OFFSET_PX: f64 = 100.0;
const DEFAULT_HEADER_OFFSET_PX: f64 = 80.0;
const DEFAULT_TYPING_INTERVAL_MS: u32 = 100;
const DEFAULT_DELETING_INTERVAL_MS: u32 = 50;
const DEFAULT_FULL_HOLD_MS: u32 = 2_000;
const DEFAULT_EMPTY_HOLD_MS: u32 = 500;
const DEFAULT_MODAL_EXPAND_DELAY_MS: u32 = 10;
const DEFAULT_MODAL_COLLAPSE_DELAY_MS: u32 = 300;
const DEFAULT_NAVBAR_SCROLLED_THRESHOLD_PX: f64 = 50.0;
const DEFAULT_SCROLL_TOP_THRESHOLD_PX: f64 = 300.0;
const DEFAULT_REVEAL_THRESHOLD: f64 = 0.1;
const DEFAULT_REVEAL_BOTTOM_MARGIN_PX: f64 = 50.0;
const DEFAULT_SKILL_FILL_DELAY_MS: u32 = 100;
const DEFAULT_LOG_LEVEL: LogLevel = LogLevel::Info;
const DEFAULT_PHRASES: [&str; 4] = [
    "Full Stack Developer",
    "UI/UX Designer",
    "Problem Solver",
    "Adaptive",
];

const NAV_PROBE_OFFSET_PX_BOUNDS: (f64, f64) = (0.0, 1_000.0);
const HEADER_OFFSET_PX_BOUNDS: (f64, f64) = (0.0, 500.0);
const TICK_INTERVAL_MS_BOUNDS: (u32, u32) = (10, 2_000);
const HOLD_MS_BOUNDS: (u32, u32) = (0, 30_000);
const MODAL_DELAY_MS_BOUNDS: (u32, u32) = (0, 5_000);
const SCROLL_THRESHOLD_PX_BOUNDS: (f64, f64) = (0.0, 10_000.0);
const REVEAL_THRESHOLD_BOUNDS: (f64, f64) = (0.0, 1.0);
const REVEAL_BOTTOM_MARGIN_PX_BOUNDS: (f64, f64) = (0.0, 500.0);
const SKILL_FILL_DELAY_MS_BOUNDS: (u32, u32) = (0, 5_000);

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TypingTimings {
    pub typing_interval_ms: u32,
    pub deleting_interval_ms: u32,
    pub full_hold_ms: u32,
    pub empty_hold_ms: u32,
}

impl Default for TypingTimings {
    fn default() -> Self {
        Self {
            typing_interval_ms: DEFAULT_TYPING_INTERVAL_MS,
            deleting_interval_ms: DEFAULT_DELETING_INTERVAL_MS,
            full_hold_ms: DEFAULT_FULL_HOLD_MS,
            empty_hold_ms: DEFAULT_EMPTY_HOLD_MS,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ModalTimings {
    /// Delay between making the overlay visible and expanding its content.
    pub expand_delay_ms: u32,
    /// Delay between collapsing the content and hiding the overlay.
    pub collapse_delay_ms: u32,
}

impl Default for ModalTimings {
    fn default() -> Self {
        Self {
            expand_delay_ms: DEFAULT_MODAL_EXPAND_DELAY_MS,
            collapse_delay_ms: DEFAULT_MODAL_COLLAPSE_DELAY_MS,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ViewConfig {
    pub nav_probe_offset_px: f64,
    pub header_offset_px: f64,
    pub typing: TypingTimings,
    pub modal: ModalTimings,
    pub navbar_scrolled_threshold_px: f64,
    pub scroll_top_threshold_px: f64,
    pub reveal_threshold: f64,
    pub reveal_bottom_margin_px: f64,
    pub skill_fill_delay_ms: u32,
    pub phrases: Vec<String>,
    pub log_level: LogLevel,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            nav_probe_offset_px: DEFAULT_NAV_PROBE_OFFSET_PX,
            header_offset_px: DEFAULT_HEADER_OFFSET_PX,
            typing: TypingTimings::default(),
            modal: ModalTimings::default(),
            navbar_scrolled_threshold_px: DEFAULT_NAVBAR_SCROLLED_THRESHOLD_PX,
            scroll_top_threshold_px: DEFAULT_SCROLL_TOP_THRESHOLD_PX,
            reveal_threshold: DEFAULT_REVEAL_THRESHOLD,
            reveal_bottom_margin_px: DEFAULT_REVEAL_BOTTOM_MARGIN_PX,
            skill_fill_delay_ms: DEFAULT_SKILL_FILL_DELAY_MS,
            phrases: DEFAULT_PHRASES.iter().map(|phrase| phrase.to_string()).collect(),
            log_level: DEFAULT_LOG_LEVEL,
        }
    }
}

/// Overrides as written by the host page. Every key is optional.
#[derive(Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct RawViewConfig {
    nav_probe_offset_px: Option<f64>,
    header_offset_px: Option<f64>,
    typing_interval_ms: Option<u32>,
    deleting_interval_ms: Option<u32>,
    full_hold_ms: Option<u32>,
    empty_hold_ms: Option<u32>,
    modal_expand_delay_ms: Option<u32>,
    modal_collapse_delay_ms: Option<u32>,
    navbar_scrolled_threshold_px: Option<f64>,
    scroll_top_threshold_px: Option<f64>,
    reveal_threshold: Option<f64>,
    reveal_bottom_margin_px: Option<f64>,
    skill_fill_delay_ms: Option<u32>,
    phrases: Option<Vec<String>>,
    log_level: Option<LogLevel>,
}

impl ViewConfig {
    /// Parses the inline JSON override block. Blank input yields the defaults.
    pub fn from_json(source: &str) -> Result<Self, serde_json::Error> {
        if source.trim().is_empty() {
            return Ok(Self::default());
        }

        let raw: RawViewConfig = serde_json::from_str(source)?;
        Ok(Self::from_raw(raw))
    }

    fn from_raw(raw: RawViewConfig) -> Self {
        let phrases = raw
            .phrases
            .map(|phrases| {
                phrases
                    .into_iter()
                    .filter(|phrase| !phrase.is_empty())
                    .collect::<Vec<_>>()
            })
            .unwrap_or_else(|| ViewConfig::default().phrases);

        Self {
            nav_probe_offset_px: within_bounds(
                raw.nav_probe_offset_px,
                DEFAULT_NAV_PROBE_OFFSET_PX,
                NAV_PROBE_OFFSET_PX_BOUNDS,
            ),
            header_offset_px: within_bounds(
                raw.header_offset_px,
                DEFAULT_HEADER_OFFSET_PX,
                HEADER_OFFSET_PX_BOUNDS,
            ),
            typing: TypingTimings {
                typing_interval_ms: within_bounds(
                    raw.typing_interval_ms,
                    DEFAULT_TYPING_INTERVAL_MS,
                    TICK_INTERVAL_MS_BOUNDS,
                ),
                deleting_interval_ms: within_bounds(
                    raw.deleting_interval_ms,
                    DEFAULT_DELETING_INTERVAL_MS,
                    TICK_INTERVAL_MS_BOUNDS,
                ),
                full_hold_ms: within_bounds(raw.full_hold_ms, DEFAULT_FULL_HOLD_MS, HOLD_MS_BOUNDS),
                empty_hold_ms: within_bounds(raw.empty_hold_ms, DEFAULT_EMPTY_HOLD_MS, HOLD_MS_BOUNDS),
            },
            modal: ModalTimings {
                expand_delay_ms: within_bounds(
                    raw.modal_expand_delay_ms,
                    DEFAULT_MODAL_EXPAND_DELAY_MS,
                    MODAL_DELAY_MS_BOUNDS,
                ),
                collapse_delay_ms: within_bounds(
                    raw.modal_collapse_delay_ms,
                    DEFAULT_MODAL_COLLAPSE_DELAY_MS,
                    MODAL_DELAY_MS_BOUNDS,
                ),
            },
            navbar_scrolled_threshold_px: within_bounds(
                raw.navbar_scrolled_threshold_px,
                DEFAULT_NAVBAR_SCROLLED_THRESHOLD_PX,
                SCROLL_THRESHOLD_PX_BOUNDS,
            ),
            scroll_top_threshold_px: within_bounds(
                raw.scroll_top_threshold_px,
                DEFAULT_SCROLL_TOP_THRESHOLD_PX,
                SCROLL_THRESHOLD_PX_BOUNDS,
            ),
            reveal_threshold: within_bounds(
                raw.reveal_threshold,
                DEFAULT_REVEAL_THRESHOLD,
                REVEAL_THRESHOLD_BOUNDS,
            ),
            reveal_bottom_margin_px: within_bounds(
                raw.reveal_bottom_margin_px,
                DEFAULT_REVEAL_BOTTOM_MARGIN_PX,
                REVEAL_BOTTOM_MARGIN_PX_BOUNDS,
            ),
            skill_fill_delay_ms: within_bounds(
                raw.skill_fill_delay_ms,
                DEFAULT_SKILL_FILL_DELAY_MS,
                SKILL_FILL_DELAY_MS_BOUNDS,
            ),
            phrases,
            log_level: raw.log_level.unwrap_or(DEFAULT_LOG_LEVEL),
        }
    }

    /// `rootMargin` for the reveal observer: only the bottom edge is pulled in.
    pub fn reveal_root_margin(&self) -> String {
        format!("0px 0px -{}px 0px", self.reveal_bottom_margin_px)
    }
}

fn within_bounds<T: PartialOrd + Copy>(value: Option<T>, default: T, bounds: (T, T)) -> T {
    value
        .filter(|value| *value >= bounds.0 && *value <= bounds.1)
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_source_yields_defaults() {
        let config = ViewConfig::from_json("   ").expect("blank config parses");
        assert_eq!(config, ViewConfig::default());
        assert_eq!(config.phrases.len(), 4);
        assert_eq!(config.modal.collapse_delay_ms, 300);
    }

    #[test]
    fn overrides_within_bounds_are_applied() {
        let config = ViewConfig::from_json(
            r#"{ "headerOffsetPx": 64, "typingIntervalMs": 80, "logLevel": "debug" }"#,
        )
        .expect("config parses");

        assert_eq!(config.header_offset_px, 64.0);
        assert_eq!(config.typing.typing_interval_ms, 80);
        assert_eq!(config.typing.deleting_interval_ms, DEFAULT_DELETING_INTERVAL_MS);
        assert_eq!(config.log_level, LogLevel::Debug);
    }

    #[test]
    fn out_of_bounds_overrides_fall_back_to_defaults() {
        let config = ViewConfig::from_json(
            r#"{ "revealThreshold": 1.5, "typingIntervalMs": 1, "modalCollapseDelayMs": 60000 }"#,
        )
        .expect("config parses");

        assert_eq!(config.reveal_threshold, DEFAULT_REVEAL_THRESHOLD);
        assert_eq!(config.typing.typing_interval_ms, DEFAULT_TYPING_INTERVAL_MS);
        assert_eq!(config.modal.collapse_delay_ms, DEFAULT_MODAL_COLLAPSE_DELAY_MS);
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let parsed = ViewConfig::from_json(r#"{ "theme": "dark" }"#);
        assert!(parsed.is_ok());
        assert_eq!(parsed.expect("config parses"), ViewConfig::default());

        let config = ViewConfig::from_json(r#"{ "theme": "dark", "headerOffsetPx": 64 }"#)
            .expect("config parses");
        assert_eq!(config.header_offset_px, 64.0);
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(ViewConfig::from_json("{ not json").is_err());
    }

    #[test]
    fn empty_phrases_are_dropped_from_override() {
        let config =
            ViewConfig::from_json(r#"{ "phrases": ["", "Rustacean", ""] }"#).expect("config parses");
        assert_eq!(config.phrases, vec!["Rustacean".to_string()]);
    }

    #[test]
    fn reveal_root_margin_pulls_in_bottom_edge() {
        assert_eq!(ViewConfig::default().reveal_root_margin(), "0px 0px -50px 0px");
    }
}
