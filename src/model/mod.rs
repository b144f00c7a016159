// Purpose - data handed to the core by its loaders, and per-frame snapshots

mod note;

pub use note::{Note, NoteSet, Track};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Viewport dimensions in display units.
///
/// Supplied fresh every frame; drivers never keep a copy between frames.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

impl Default for Size {
    /// 512 wide at 16:9.
    fn default() -> Self {
        Self::new(512.0, 512.0 * (9.0 / 16.0))
    }
}

/// Everything a driver needs to know about "now", rebuilt every frame.
#[derive(Debug, Clone, Default)]
pub struct FrameContext {
    /// Playback position in seconds
    pub elapsed_sec: f64,
    /// Enabled flag per track, index-aligned with the note set's tracks
    pub enabled_tracks: Vec<bool>,
    /// Whether playback is running (enables culling)
    pub playing: bool,
}

impl FrameContext {
    pub fn new(elapsed_sec: f64, enabled_tracks: Vec<bool>, playing: bool) -> Self {
        Self {
            elapsed_sec,
            enabled_tracks,
            playing,
        }
    }

    /// A track with no flag is treated as disabled.
    pub fn is_track_enabled(&self, track_index: usize) -> bool {
        track_enabled(&self.enabled_tracks, track_index)
    }
}

pub(crate) fn track_enabled(enabled_tracks: &[bool], track_index: usize) -> bool {
    enabled_tracks.get(track_index).copied().unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_size_is_sixteen_by_nine() {
        let size = Size::default();
        assert_eq!(size.width, 512.0);
        assert_eq!(size.height, 288.0);
    }

    #[test]
    fn missing_track_flag_counts_as_disabled() {
        let frame = FrameContext::new(0.0, vec![true, false], true);
        assert!(frame.is_track_enabled(0));
        assert!(!frame.is_track_enabled(1));
        assert!(!frame.is_track_enabled(2));
    }
}
