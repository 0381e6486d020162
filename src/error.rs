use thiserror::Error;

use crate::math::Point2;

/// Top-level error type for the arc-spline kernel.
#[derive(Debug, Error)]
pub enum ArcSplineError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Operation(#[from] OperationError),

    #[error(transparent)]
    NonSmoothable(#[from] NonSmoothableError),
}

/// Errors raised while validating curve data at construction time.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("an arc-spline needs at least 2 vertices, got {count}")]
    TooFewVertices { count: usize },

    #[error("vertex {index} has a non-finite coordinate or bulge")]
    NonFiniteVertex { index: usize },

    #[error("segment starting at vertex {index} has zero length")]
    ZeroLengthSegment { index: usize },

    #[error("segments do not chain: segment {index} does not start where the previous one ends")]
    BrokenChain { index: usize },
}

/// Errors related to operation parameters.
#[derive(Debug, Error)]
pub enum OperationError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// No fillet of the requested radius can be built at some kink.
#[derive(Debug, Error)]
pub enum NonSmoothableError {
    #[error("offset lines are parallel")]
    ParallelLines,

    #[error("fillet center falls outside the adjacent segments (t = {t}, u = {u})")]
    OutsideSegment { t: f64, u: f64 },

    #[error("offset line misses the offset circle (discriminant = {discriminant})")]
    NoLineCircleIntersection { discriminant: f64 },

    #[error("offset circles are too far apart ({distance} > {radius_sum})")]
    CirclesTooFarApart { distance: f64, radius_sum: f64 },

    #[error("offset circles are nested ({distance} < {radius_difference})")]
    CirclesNested {
        distance: f64,
        radius_difference: f64,
    },

    #[error("offset circles are identical")]
    IdenticalCircles,

    #[error("offset arc collapsed to radius {radius}")]
    CollapsedOffset { radius: f64 },

    #[error("no intersection candidate lies on both adjacent segments")]
    NoValidCandidate,

    #[error("two intersection candidates lie on both adjacent segments: {first:?} and {second:?}")]
    AmbiguousIntersection { first: Point2, second: Point2 },

    #[error("tangents at the kink are antiparallel")]
    AntiparallelTangents,

    #[error("fillet center coincides with an arc center")]
    DegenerateProjection,

    #[error("fillets overlap on segment {segment}")]
    OverlappingFillets { segment: usize },
}

/// Convenience type alias for results using [`ArcSplineError`].
pub type Result<T> = std::result::Result<T, ArcSplineError>;
