use crate::error::NoteSetError;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A pitched event on one track.
///
/// Produced by the MIDI loader and never mutated by the core.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Note {
    /// MIDI note number (0-127)
    pub note_number: u8,
    /// Onset in seconds
    pub from_sec: f64,
    /// Release in seconds
    pub to_sec: f64,
    /// Owning track
    pub track_index: usize,
}

impl Note {
    pub fn new(note_number: u8, from_sec: f64, to_sec: f64, track_index: usize) -> Self {
        Self {
            note_number,
            from_sec,
            to_sec,
            track_index,
        }
    }

    pub fn duration_sec(&self) -> f64 {
        self.to_sec - self.from_sec
    }
}

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Track {
    pub name: String,
}

impl Track {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Tracks and notes from one MIDI load.
///
/// Always replaced as a whole; drivers rebuild their elements from it.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NoteSet {
    pub tracks: Vec<Track>,
    pub notes: Vec<Note>,
}

impl NoteSet {
    pub fn new(tracks: Vec<Track>, notes: Vec<Note>) -> Self {
        Self { tracks, notes }
    }

    /// Enabled flags after a fresh load: every track on.
    pub fn all_enabled(&self) -> Vec<bool> {
        vec![true; self.tracks.len()]
    }

    /// Time of the last release, or 0 for an empty set.
    pub fn duration_sec(&self) -> f64 {
        self.notes.iter().fold(0.0, |acc, n| acc.max(n.to_sec))
    }

    /// Reject notes the geometry cannot place sensibly.
    pub fn validate(&self) -> Result<(), NoteSetError> {
        for (index, note) in self.notes.iter().enumerate() {
            if note.note_number > 127 {
                return Err(NoteSetError::PitchOutOfRange {
                    index,
                    note_number: note.note_number,
                });
            }
            if !note.from_sec.is_finite() || !note.to_sec.is_finite() || note.from_sec < 0.0 {
                return Err(NoteSetError::InvalidTime {
                    index,
                    from_sec: note.from_sec,
                    to_sec: note.to_sec,
                });
            }
            if note.to_sec <= note.from_sec {
                return Err(NoteSetError::EmptySpan {
                    index,
                    from_sec: note.from_sec,
                    to_sec: note.to_sec,
                });
            }
            if note.track_index >= self.tracks.len() {
                return Err(NoteSetError::UnknownTrack {
                    index,
                    track_index: note.track_index,
                    tracks: self.tracks.len(),
                });
            }
        }
        Ok(())
    }
}
