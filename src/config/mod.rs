// Purpose - one validated value object carrying every render parameter

mod props;
pub mod schema;

pub use props::CustomProps;
pub use schema::{PropKind, PropSpec, PROPS};

use crate::error::ConfigError;
use crate::geometry::{Channel, Envelope, EnvelopeTiming};
use crate::model::Size;

/// Pitch window, time window and hue mapping.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NoteScale {
    pub min_note: f64,
    pub max_note: f64,
    pub time_range_sec: f64,
    pub min_hue: f64,
    pub max_hue: f64,
}

impl NoteScale {
    pub fn pitch_span(&self) -> f64 {
        self.max_note - self.min_note
    }

    /// Height of one semitone slot.
    pub fn height_per_note(&self, size: Size) -> f64 {
        size.height / self.pitch_span()
    }

    pub fn width_per_sec(&self, size: Size) -> f64 {
        size.width / self.time_range_sec
    }

    /// Linear hue across the pitch window (not clamped).
    pub fn hue_for(&self, note_number: u8) -> f64 {
        (note_number as f64 - self.min_note) / self.pitch_span() * (self.max_hue - self.min_hue) + self.min_hue
    }

    pub fn contains(&self, note_number: u8) -> bool {
        let n = note_number as f64;
        n >= self.min_note && n <= self.max_note
    }
}

impl Default for NoteScale {
    fn default() -> Self {
        Self {
            min_note: 0.0,
            max_note: 127.0,
            time_range_sec: 10.0,
            min_hue: 0.0,
            max_hue: 240.0,
        }
    }
}

/// Everything the geometry needs besides the note, the size and the time.
///
/// Validated once on construction so the per-frame math never divides by
/// zero: the pitch span, time range and time constants are strictly positive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderConfig {
    scale: NoteScale,
    lightness: Channel,
    thickness: Channel,
    timing: EnvelopeTiming,
    vertical: bool,
}

impl RenderConfig {
    pub fn new(
        scale: NoteScale,
        lightness: Channel,
        thickness: Channel,
        timing: EnvelopeTiming,
        vertical: bool,
    ) -> Result<Self, ConfigError> {
        let config = Self {
            scale,
            lightness,
            thickness,
            timing,
            vertical,
        };
        config.validate()?;
        Ok(config)
    }

    /// Build from a settings map, using the default decay/release constants.
    pub fn from_props(props: &CustomProps) -> Result<Self, ConfigError> {
        let scale = NoteScale {
            min_note: props.value(schema::MIN_NOTE),
            max_note: props.value(schema::MAX_NOTE),
            time_range_sec: props.value(schema::TIME_RANGE_SEC),
            min_hue: props.value(schema::MIN_HUE),
            max_hue: props.value(schema::MAX_HUE),
        };
        let lightness = Envelope::new(
            props.value(schema::BASE_LIGHTNESS),
            props.value(schema::PEAK_LIGHTNESS),
            props.value(schema::ACTIVE_LIGHTNESS),
        );
        let thickness = Envelope::new(
            props.value(schema::BASE_THICKNESS),
            props.value(schema::PEAK_THICKNESS),
            props.value(schema::ACTIVE_THICKNESS),
        );
        let vertical = props.value(schema::VERTICAL) != 0.0;

        Self::new(
            scale,
            lightness.into(),
            thickness.into(),
            EnvelopeTiming::default(),
            vertical,
        )
    }

    /// Full-height, lightness-only look used by the timer renderer.
    pub fn lightness_only(min_note: f64, max_note: f64) -> Result<Self, ConfigError> {
        let base = Self::default_lightness_only();
        let scale = NoteScale {
            min_note,
            max_note,
            ..base.scale
        };
        Self::new(scale, base.lightness, base.thickness, base.timing, false)
    }

    /// `lightness_only` over the full MIDI range.
    pub fn default_lightness_only() -> Self {
        Self {
            thickness: Channel::Fixed(1.0),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let s = &self.scale;
        let finite = [s.min_note, s.max_note, s.time_range_sec, s.min_hue, s.max_hue];
        if finite.iter().any(|v| !v.is_finite()) {
            return Err(ConfigError::NonFinite { id: "scale".into() });
        }
        if s.max_note <= s.min_note {
            return Err(ConfigError::EmptyPitchRange {
                min: s.min_note,
                max: s.max_note,
            });
        }
        if s.time_range_sec <= 0.0 {
            return Err(ConfigError::NonPositiveTimeRange(s.time_range_sec));
        }
        if self.timing.decay_sec.is_nan() || self.timing.decay_sec <= 0.0 {
            return Err(ConfigError::NonPositiveTimeConstant {
                name: "decay",
                value: self.timing.decay_sec,
            });
        }
        if self.timing.release_sec.is_nan() || self.timing.release_sec <= 0.0 {
            return Err(ConfigError::NonPositiveTimeConstant {
                name: "release",
                value: self.timing.release_sec,
            });
        }
        Ok(())
    }

    pub fn scale(&self) -> &NoteScale {
        &self.scale
    }

    pub fn lightness(&self) -> &Channel {
        &self.lightness
    }

    pub fn thickness(&self) -> &Channel {
        &self.thickness
    }

    pub fn timing(&self) -> &EnvelopeTiming {
        &self.timing
    }

    pub fn is_vertical(&self) -> bool {
        self.vertical
    }

    pub fn with_vertical(mut self, vertical: bool) -> Self {
        self.vertical = vertical;
        self
    }

    /// Change the time window, keeping the config valid.
    pub fn with_time_range(mut self, time_range_sec: f64) -> Result<Self, ConfigError> {
        self.scale.time_range_sec = time_range_sec;
        self.validate()?;
        Ok(self)
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            scale: NoteScale::default(),
            lightness: Envelope::new(30.0, 100.0, 80.0).into(),
            thickness: Envelope::new(0.4, 1.0, 0.6).into(),
            timing: EnvelopeTiming::default(),
            vertical: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_props_match_default_config() {
        let config = RenderConfig::from_props(&CustomProps::defaults()).unwrap();
        assert_eq!(config, RenderConfig::default());
    }

    #[test]
    fn vertical_prop_is_a_flag() {
        let mut props = CustomProps::defaults();
        props.set(schema::VERTICAL, 1.0).unwrap();
        assert!(RenderConfig::from_props(&props).unwrap().is_vertical());
    }

    #[test]
    fn empty_pitch_range_is_rejected() {
        let mut props = CustomProps::defaults();
        props.set(schema::MIN_NOTE, 64.0).unwrap();
        props.set(schema::MAX_NOTE, 64.0).unwrap();
        assert_eq!(
            RenderConfig::from_props(&props),
            Err(ConfigError::EmptyPitchRange { min: 64.0, max: 64.0 })
        );
    }

    #[test]
    fn zero_time_constants_are_rejected() {
        let result = RenderConfig::new(
            NoteScale::default(),
            Channel::Fixed(50.0),
            Channel::Fixed(1.0),
            EnvelopeTiming::new(0.0, 0.4),
            false,
        );
        assert!(matches!(
            result,
            Err(ConfigError::NonPositiveTimeConstant { name: "decay", .. })
        ));
    }

    #[test]
    fn time_range_change_is_validated() {
        let config = RenderConfig::default();
        assert!(config.with_time_range(0.0).is_err());
        assert_eq!(config.with_time_range(4.0).unwrap().scale().time_range_sec, 4.0);
    }

    #[test]
    fn hue_spans_the_pitch_window() {
        let scale = NoteScale::default();
        assert_eq!(scale.hue_for(0), 0.0);
        assert_eq!(scale.hue_for(127), 240.0);
        assert!(scale.contains(60));
    }
}
