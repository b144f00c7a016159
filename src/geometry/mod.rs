//! Pure per-frame math: envelopes, note rectangles, colors, orientation.
//!
//! Nothing here keeps state between calls. Both render drivers go through
//! these functions so their output can never drift apart.

pub mod color;
pub mod envelope;
pub mod note_rect;
pub mod orientation;

pub use color::{Fill, Hsl};
pub use envelope::{Channel, Envelope, EnvelopeTiming};
pub use note_rect::{bar_rect, note_rect, RectPatch};
pub use orientation::{flip_rect, flip_size, Orientation};
