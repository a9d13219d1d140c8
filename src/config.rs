use log::Level;
use serde::Deserialize;

use crate::error::LandingError;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose while developing locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Timings and thresholds for every interaction on the page.
///
/// Any subset can be overridden with a JSON object in the
/// `data-landing-config` attribute of `<body>`; missing keys keep
/// their defaults.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    pub nav_scrolled_threshold_px: f64,
    pub anchor_offset_px: f64,
    pub reveal_threshold: f64,
    pub reveal_stagger_ms: u32,
    pub submit_latency_ms: u32,
    pub confirmation_hold_ms: u32,
    pub toast_display_ms: u32,
    pub toast_fade_ms: u32,
    pub sticky_hero_threshold: f64,
    pub sticky_final_threshold: f64,
    pub ripple_duration_ms: u32,
    pub ripple_size_px: f64,
    pub success_color: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            nav_scrolled_threshold_px: 24.0,
            anchor_offset_px: 20.0,
            reveal_threshold: 0.1,
            reveal_stagger_ms: 75,
            submit_latency_ms: 1000,
            confirmation_hold_ms: 3000,
            toast_display_ms: 4000,
            toast_fade_ms: 200,
            sticky_hero_threshold: 0.3,
            sticky_final_threshold: 0.5,
            ripple_duration_ms: 400,
            ripple_size_px: 200.0,
            success_color: "#22C55E".to_string(),
        }
    }
}

impl Config {
    pub fn from_json(raw: &str) -> Result<Self, LandingError> {
        Ok(serde_json::from_str(raw)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_object_keeps_defaults() {
        assert_eq!(Config::from_json("{}").unwrap(), Config::default());
    }

    #[test]
    fn overrides_only_the_given_keys() {
        let config = Config::from_json(r##"{"submitLatencyMs": 250, "successColor": "#00FF00"}"##).unwrap();

        assert_eq!(config.submit_latency_ms, 250);
        assert_eq!(config.success_color, "#00FF00");
        assert_eq!(config.confirmation_hold_ms, 3000);
        assert_eq!(config.nav_scrolled_threshold_px, 24.0);
    }

    #[test]
    fn malformed_json_is_a_config_error() {
        let err = Config::from_json("{not json").unwrap_err();
        assert!(matches!(err, LandingError::Config(_)));
    }
}
