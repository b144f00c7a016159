//! Off-screen culling.
//!
//! Two policies, one per driver:
//!
//! - Policy A (declarative): while playing, a note whose last applied
//!   rectangle has scrolled past the left edge is frozen, and a note whose new
//!   rectangle starts beyond the right edge is left untouched. Playback is
//!   assumed to only move forward, so frozen notes never come back. Both
//!   checks use layout space (before the vertical flip), so the right edge
//!   is the layout width, not the screen width.
//! - Policy B (timer): a patch is dropped when it lies entirely left or right
//!   of the canvas, unless the caller forces it.
//!
//! Either way the per-frame cost follows the number of visible notes. Stale
//! geometry of hidden elements is accepted.

use crate::config::RenderConfig;
use crate::geometry::{note_rect, RectPatch};
use crate::model::{Note, Size};

/// Time-axis extent of the last rectangle applied to an element, in layout
/// space (before any orientation flip).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectState {
    pub x: f64,
    pub width: f64,
}

impl RectState {
    pub fn scrolled_past(&self) -> bool {
        self.x + self.width < 0.0
    }
}

impl From<&RectPatch> for RectState {
    fn from(patch: &RectPatch) -> Self {
        Self {
            x: patch.x,
            width: patch.width,
        }
    }
}

/// Policy A, first check: skip before computing anything.
pub fn frozen(playing: bool, previous: Option<&RectState>) -> bool {
    playing && previous.is_some_and(RectState::scrolled_past)
}

/// Policy A, second check: skip a freshly computed rectangle.
pub fn not_yet_visible(playing: bool, patch: &RectPatch, layout: Size) -> bool {
    playing && patch.x > layout.width
}

pub fn off_screen(patch: &RectPatch, size: Size) -> bool {
    patch.right() < 0.0 || patch.x > size.width
}

/// Policy B: compute a note's patch, or `None` when it is off screen and not
/// forced.
pub fn patch_if_visible(
    size: Size,
    note: &Note,
    elapsed_sec: f64,
    config: &RenderConfig,
    force: bool,
) -> Option<RectPatch> {
    let patch = note_rect(size, note, elapsed_sec, config);
    if !force && off_screen(&patch, size) {
        return None;
    }
    Some(patch)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SIZE: Size = Size::new(512.0, 288.0);

    #[test]
    fn policy_b_drops_notes_right_of_the_window_unless_forced() {
        let config = RenderConfig::lightness_only(0.0, 127.0).unwrap();
        // starts 6 s ahead with a 10 s window: x = 11 * 51.2 > 512
        let note = Note::new(60, 6.0, 7.0, 0);

        assert_eq!(patch_if_visible(SIZE, &note, 0.0, &config, false), None);
        let forced = patch_if_visible(SIZE, &note, 0.0, &config, true).unwrap();
        assert_eq!(forced, note_rect(SIZE, &note, 0.0, &config));
        assert!(forced.x > SIZE.width);
    }

    #[test]
    fn policy_b_drops_notes_left_of_the_window() {
        let config = RenderConfig::lightness_only(0.0, 127.0).unwrap();
        let note = Note::new(60, 0.0, 1.0, 0);
        assert_eq!(patch_if_visible(SIZE, &note, 20.0, &config, false), None);
        assert!(patch_if_visible(SIZE, &note, 20.0, &config, true).is_some());
        assert!(patch_if_visible(SIZE, &note, 0.5, &config, false).is_some());
    }

    #[test]
    fn policy_a_only_applies_while_playing() {
        let gone = RectState { x: -50.0, width: 10.0 };
        let visible = RectState { x: -5.0, width: 10.0 };
        assert!(frozen(true, Some(&gone)));
        assert!(!frozen(false, Some(&gone)));
        assert!(!frozen(true, Some(&visible)));
        assert!(!frozen(true, None));
    }

    #[test]
    fn policy_a_skips_rectangles_beyond_the_right_edge() {
        let config = RenderConfig::default();
        let ahead = note_rect(SIZE, &Note::new(60, 9.0, 10.0, 0), 0.0, &config);
        assert!(not_yet_visible(true, &ahead, SIZE));
        assert!(!not_yet_visible(false, &ahead, SIZE));
    }
}
