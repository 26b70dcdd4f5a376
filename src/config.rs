use serde::{Deserialize, Serialize};

/// Schema version of the persisted configuration. Bump this whenever a field
/// is added so that records written by older builds go through the
/// defaults-fill in [`Config::reconcile`].
pub const CURRENT_VERSION: u32 = 1;

/// Rendering parameters for the danmu converter. Every field is always
/// present on a loaded record; missing fields are filled from the defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub version: u32,
    /// Target canvas size in pixels.
    pub width: u32,
    pub height: u32,
    pub font: String,
    pub font_size: u32,
    /// Multiplier on measured text width; raise it to reduce overlap.
    pub width_ratio: f64,
    /// Minimum horizontal spacing between visible comments, in pixels.
    pub horizontal_gap: f64,
    /// Seconds a scrolling comment stays on screen.
    pub duration: f64,
    /// Vertical pixels allotted per comment row.
    pub lane_size: u32,
    /// Fraction (0..1) of screen height usable by scrolling comments.
    pub float_percentage: f64,
    /// Opacity (0..1).
    pub alpha: f64,
    /// Comments containing any of these keywords are suppressed.
    pub deny_list: Vec<String>,
    /// Stroke width for glyph outlines.
    pub outline: f64,
    pub bold: bool,
    /// Seconds to shift comment timing; positive delays, negative advances.
    pub time_offset: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: CURRENT_VERSION,
            width: 1280,
            height: 720,
            font: "黑体".to_string(),
            font_size: 36,
            width_ratio: 1.2,
            horizontal_gap: 20.0,
            duration: 10.0,
            lane_size: 46,
            float_percentage: 0.5,
            alpha: 0.7,
            deny_list: Vec::new(),
            outline: 0.8,
            bold: true,
            time_offset: 0.0,
        }
    }
}

/// A persisted record as found in the store: any field may be absent if the
/// blob was written by an older build. Serde fills missing keys (and `null`)
/// with `None`.
#[derive(Debug, Default, Deserialize)]
pub struct PartialConfig {
    pub version: Option<u32>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub font: Option<String>,
    pub font_size: Option<u32>,
    pub width_ratio: Option<f64>,
    pub horizontal_gap: Option<f64>,
    pub duration: Option<f64>,
    pub lane_size: Option<u32>,
    pub float_percentage: Option<f64>,
    pub alpha: Option<f64>,
    pub deny_list: Option<Vec<String>>,
    pub outline: Option<f64>,
    pub bold: Option<bool>,
    pub time_offset: Option<f64>,
}

impl Config {
    /// Fill every absent field from the defaults, keeping present fields
    /// as-is. A stale `version` is kept too rather than bumped to
    /// [`CURRENT_VERSION`]; the fill is idempotent, so such a record simply
    /// goes through reconciliation again on the next load.
    pub fn reconcile(partial: PartialConfig) -> Config {
        let defaults = Config::default();
        // Destructured without a rest pattern: adding a schema field without
        // deciding its fill here is a compile error.
        let PartialConfig {
            version,
            width,
            height,
            font,
            font_size,
            width_ratio,
            horizontal_gap,
            duration,
            lane_size,
            float_percentage,
            alpha,
            deny_list,
            outline,
            bold,
            time_offset,
        } = partial;

        Config {
            version: version.unwrap_or(defaults.version),
            width: width.unwrap_or(defaults.width),
            height: height.unwrap_or(defaults.height),
            font: font.unwrap_or(defaults.font),
            font_size: font_size.unwrap_or(defaults.font_size),
            width_ratio: width_ratio.unwrap_or(defaults.width_ratio),
            horizontal_gap: horizontal_gap.unwrap_or(defaults.horizontal_gap),
            duration: duration.unwrap_or(defaults.duration),
            lane_size: lane_size.unwrap_or(defaults.lane_size),
            float_percentage: float_percentage.unwrap_or(defaults.float_percentage),
            alpha: alpha.unwrap_or(defaults.alpha),
            deny_list: deny_list.unwrap_or(defaults.deny_list),
            outline: outline.unwrap_or(defaults.outline),
            bold: bold.unwrap_or(defaults.bold),
            time_offset: time_offset.unwrap_or(defaults.time_offset),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_version_is_current() {
        assert_eq!(Config::default().version, CURRENT_VERSION);
    }

    #[test]
    fn test_reconcile_empty_yields_defaults() {
        let config = Config::reconcile(PartialConfig::default());
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_reconcile_keeps_present_fields() {
        let partial = PartialConfig {
            version: Some(0),
            width: Some(1920),
            font: Some("楷体".to_string()),
            bold: Some(false),
            ..Default::default()
        };
        let config = Config::reconcile(partial);

        // Present fields survive, including the stale version
        assert_eq!(config.version, 0);
        assert_eq!(config.width, 1920);
        assert_eq!(config.font, "楷体");
        assert!(!config.bold);

        // Absent fields come from the defaults
        assert_eq!(config.height, 720);
        assert_eq!(config.duration, 10.0);
        assert!(config.deny_list.is_empty());
    }
}
