use crate::math::{Point2, TOLERANCE};

/// Bulge-encoded arc-spline vertex for mixed line/arc segments.
///
/// `bulge = tan(sweep_angle / 4)` describes the segment from this vertex to
/// the next one:
/// - `0` = straight line to next vertex
/// - `> 0` = counter-clockwise arc to next vertex
/// - `< 0` = clockwise arc to next vertex
/// - `|bulge| = 1` = semicircle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
    pub x: f64,
    pub y: f64,
    pub bulge: f64,
}

impl Vertex {
    /// Creates a new vertex with the given coordinates and bulge.
    #[must_use]
    pub fn new(x: f64, y: f64, bulge: f64) -> Self {
        Self { x, y, bulge }
    }

    /// Creates a line vertex (bulge = 0).
    #[must_use]
    pub fn line(x: f64, y: f64) -> Self {
        Self { x, y, bulge: 0.0 }
    }

    /// Creates a vertex at `pos`.
    #[must_use]
    pub fn at(pos: &Point2, bulge: f64) -> Self {
        Self::new(pos.x, pos.y, bulge)
    }

    /// Position of the vertex.
    #[must_use]
    pub fn pos(&self) -> Point2 {
        Point2::new(self.x, self.y)
    }

    /// Whether the outgoing segment is a straight line.
    #[must_use]
    pub fn bulge_is_zero(&self) -> bool {
        self.bulge.abs() < TOLERANCE
    }

    pub(crate) fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.bulge.is_finite()
    }
}
