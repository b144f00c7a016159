//! Benchmarks for geometry and render drivers.

mod drivers;
mod geometry;

pub use drivers::bench_drivers;
pub use geometry::bench_geometry;
