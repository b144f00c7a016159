//! Display surfaces and the two render drivers.
//!
//! - `declarative`: whole-set update every animation frame (configurable look)
//! - `timer`: incremental updates from a fixed-rate task (lightness-only look)
//!
//! Both share `geometry` and differ only in scheduling and culling policy.

pub mod cull;
pub mod declarative;
pub mod surface;
pub mod svg;
pub mod timer;

pub use declarative::{DeclarativeRenderer, FrameStats};
pub use surface::{Display, DisplaySurface, ElementId, ElementKind, ElementList, RectElement};
pub use svg::to_svg;
pub use timer::TimerRenderer;
