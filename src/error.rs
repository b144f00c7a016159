use thiserror::Error;

/// Rejected render configuration.
///
/// Raised once when a `RenderConfig` is built, never on the per-frame path.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("pitch range is empty: min note {min} must be below max note {max}")]
    EmptyPitchRange { min: f64, max: f64 },
    #[error("time range must be positive, got {0} s")]
    NonPositiveTimeRange(f64),
    #[error("{name} must be positive, got {value} s")]
    NonPositiveTimeConstant { name: &'static str, value: f64 },
    #[error("unknown property `{0}`")]
    UnknownProp(String),
    #[error("property `{id}` is not a finite number")]
    NonFinite { id: String },
    #[error("could not parse property assignment `{0}` (expected id=value)")]
    Malformed(String),
}

/// Rejected note set.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum NoteSetError {
    #[error("note {index}: pitch {note_number} is outside 0-127")]
    PitchOutOfRange { index: usize, note_number: u8 },
    #[error("note {index}: invalid times {from_sec}..{to_sec}")]
    InvalidTime {
        index: usize,
        from_sec: f64,
        to_sec: f64,
    },
    #[error("note {index}: release {to_sec} s is not after onset {from_sec} s")]
    EmptySpan {
        index: usize,
        from_sec: f64,
        to_sec: f64,
    },
    #[error("note {index}: track {track_index} does not exist ({tracks} tracks loaded)")]
    UnknownTrack {
        index: usize,
        track_index: usize,
        tracks: usize,
    },
}
