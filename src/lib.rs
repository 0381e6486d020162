pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;

pub use error::{ArcSplineError, Result};
pub use geometry::{ArcSpline, Segment, Vertex};
pub use operations::smooth::{smooth, CornerSmooth};
