//! Domain value types shared by the fetcher, the layout core and the HTTP layer.

pub mod day;
pub mod geometry;

pub use day::*;
pub use geometry::*;
