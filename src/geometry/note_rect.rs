use super::color::{Fill, Hsl};
use crate::config::RenderConfig;
use crate::model::{Note, Size};
use crate::NOTE_SATURATION;

const BAR_WIDTH: f64 = 0.5;
const BAR_FILL: Fill = Fill::Css("#aaa");

/// Attributes applied to one display element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectPatch {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub fill: Fill,
}

impl RectPatch {
    /// Right edge.
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge.
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }
}

/// Playhead bar: a thin full-height line at the horizontal center.
pub fn bar_rect(size: Size) -> RectPatch {
    RectPatch {
        x: size.width / 2.0,
        y: 0.0,
        width: BAR_WIDTH,
        height: size.height,
        fill: BAR_FILL,
    }
}

/// Map a note to its rectangle at `elapsed_sec`.
///
/// Time runs along x with `elapsed_sec` at the center, so upcoming notes sit
/// right of the playhead and scroll left. Pitch runs along y, high notes on
/// top. Thickness shrinks the rectangle around the center of its semitone
/// slot; width depends only on the note's duration.
///
/// Notes outside the configured pitch window are still mapped (off canvas);
/// hiding them is up to the caller.
pub fn note_rect(size: Size, note: &Note, elapsed_sec: f64, config: &RenderConfig) -> RectPatch {
    let scale = config.scale();
    let timing = config.timing();

    let full_height_per_note = scale.height_per_note(size);
    let width_per_sec = scale.width_per_sec(size);
    let hue = scale.hue_for(note.note_number);

    let lightness = config.lightness().value(timing, note.from_sec, note.to_sec, elapsed_sec);
    let thickness = config.thickness().value(timing, note.from_sec, note.to_sec, elapsed_sec);

    let pitch = note.note_number as f64 - scale.min_note;
    let x = (note.from_sec - elapsed_sec + scale.time_range_sec / 2.0) * width_per_sec;
    let y = size.height - (pitch - 0.5 + thickness / 2.0) * full_height_per_note;

    RectPatch {
        x,
        y,
        width: note.duration_sec() * width_per_sec,
        height: full_height_per_note * thickness,
        fill: Fill::Hsl(Hsl::new(hue, NOTE_SATURATION, lightness)),
    }
}
