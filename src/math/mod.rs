pub mod arc_2d;
pub mod intersect_2d;
pub mod project_2d;
pub mod vector_2d;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Default threshold on `|left - right|` between unit tangents for a vertex
/// to count as a kink.
pub const KINK_TOLERANCE: f64 = 1e-6;

/// Slack applied to `[0, 1]` parameter containment tests.
pub const PARAM_TOLERANCE: f64 = 1e-9;
