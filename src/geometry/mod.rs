pub mod arc_spline;
pub mod segment;
pub mod vertex;

pub use arc_spline::ArcSpline;
pub use segment::{ArcSegment, LineSegment, Segment, SweepDirection};
pub use vertex::Vertex;
