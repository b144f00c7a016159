// Purpose - scheduling and clocks that drive the renderers

pub mod interval;
pub mod session;
pub mod transport;

pub use interval::IntervalTask;
pub use session::{AudioHandle, PlaybackSession, TICK_RATE_HZ};
pub use transport::{format_time, Transport};
