pub mod config; // Tunable render parameters and their schema
pub mod error;
pub mod geometry; // Envelope and note-to-rectangle math
pub mod model;
pub mod playback; // Interval timers, sessions, transport clock
pub mod render; // Display surfaces and render drivers

pub use config::RenderConfig;
pub use error::{ConfigError, NoteSetError};
pub use model::{FrameContext, Note, NoteSet, Size, Track};

/// Saturation used for every note fill, in percent.
pub const NOTE_SATURATION: f64 = 20.0;
