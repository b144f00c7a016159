//! Declarative list of the tunable render parameters.
//!
//! Consumed by settings surfaces (the CLI's `--prop` / `--list-props`); the
//! core itself only reads the defaults.

#[cfg(feature = "serde")]
use serde::Serialize;

#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropKind {
    Number,
}

#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PropSpec {
    pub id: &'static str,
    pub name: &'static str,
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub kind: PropKind,
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub default_value: f64,
}

impl PropSpec {
    const fn number(id: &'static str, name: &'static str, min: f64, max: f64, step: f64, default_value: f64) -> Self {
        Self {
            id,
            name,
            kind: PropKind::Number,
            min,
            max,
            step,
            default_value,
        }
    }
}

pub const MIN_NOTE: &str = "minNote";
pub const MAX_NOTE: &str = "maxNote";
pub const TIME_RANGE_SEC: &str = "timeRangeSec";
pub const MIN_HUE: &str = "minHue";
pub const MAX_HUE: &str = "maxHue";
pub const BASE_LIGHTNESS: &str = "baseLightness";
pub const PEAK_LIGHTNESS: &str = "peakLightness";
pub const ACTIVE_LIGHTNESS: &str = "activeLightness";
pub const BASE_THICKNESS: &str = "baseThickness";
pub const PEAK_THICKNESS: &str = "peakThickness";
pub const ACTIVE_THICKNESS: &str = "activeThickness";
pub const VERTICAL: &str = "vertical";

pub const PROPS: &[PropSpec] = &[
    PropSpec::number(MIN_NOTE, "Min Note", 0.0, 127.0, 1.0, 0.0),
    PropSpec::number(MAX_NOTE, "Max Note", 0.0, 127.0, 1.0, 127.0),
    PropSpec::number(TIME_RANGE_SEC, "Time Range (sec)", 1.0, 20.0, 1.0, 10.0),
    PropSpec::number(MIN_HUE, "Min Hue", -360.0, 360.0, 5.0, 0.0),
    PropSpec::number(MAX_HUE, "Max Hue", -360.0, 360.0, 5.0, 240.0),
    PropSpec::number(BASE_LIGHTNESS, "Base Lightness", 0.0, 100.0, 5.0, 30.0),
    PropSpec::number(PEAK_LIGHTNESS, "Peak Lightness", 0.0, 100.0, 5.0, 100.0),
    PropSpec::number(ACTIVE_LIGHTNESS, "Active Lightness", 0.0, 100.0, 5.0, 80.0),
    PropSpec::number(BASE_THICKNESS, "Base Thickness", 0.0, 1.0, 0.05, 0.4),
    PropSpec::number(PEAK_THICKNESS, "Peak Thickness", 0.0, 1.0, 0.05, 1.0),
    PropSpec::number(ACTIVE_THICKNESS, "Active Thickness", 0.0, 1.0, 0.05, 0.6),
    PropSpec::number(VERTICAL, "Vertical", 0.0, 1.0, 1.0, 0.0),
];

pub fn find(id: &str) -> Option<&'static PropSpec> {
    PROPS.iter().find(|spec| spec.id == id)
}
