use crate::error::{GeometryError, Result};
use crate::math::{Point2, Vector2, KINK_TOLERANCE, PARAM_TOLERANCE, TOLERANCE};

use super::segment::Segment;
use super::vertex::Vertex;

/// A curve of straight segments and circular arcs joined end to end.
///
/// Each segment between consecutive vertices is either a line (bulge=0)
/// or a circular arc (bulge≠0). For closed splines the last vertex
/// connects back to the first; for open splines the last bulge is ignored.
///
/// Instances are validated on construction and never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct ArcSpline {
    vertices: Vec<Vertex>,
    closed: bool,
}

impl ArcSpline {
    /// Creates an arc-spline from raw vertex data.
    ///
    /// # Errors
    ///
    /// - `GeometryError::TooFewVertices` for fewer than 2 vertices
    /// - `GeometryError::NonFiniteVertex` for NaN/infinite coordinates or bulges
    /// - `GeometryError::ZeroLengthSegment` if consecutive vertices coincide
    pub fn new(vertices: Vec<Vertex>, is_closed: bool) -> Result<Self> {
        if vertices.len() < 2 {
            return Err(GeometryError::TooFewVertices {
                count: vertices.len(),
            }
            .into());
        }
        if let Some(index) = vertices.iter().position(|v| !v.is_finite()) {
            return Err(GeometryError::NonFiniteVertex { index }.into());
        }

        let spline = Self {
            vertices,
            closed: is_closed,
        };
        let n = spline.vertices.len();
        for i in 0..spline.segment_count() {
            let a = spline.vertices[i].pos();
            let b = spline.vertices[(i + 1) % n].pos();
            if (b - a).norm() < TOLERANCE {
                return Err(GeometryError::ZeroLengthSegment { index: i }.into());
            }
        }
        Ok(spline)
    }

    /// Creates an arc-spline from a chain of segments.
    ///
    /// Each segment must start where the previous one ends. For closed
    /// splines the last segment must end at the start of the first.
    ///
    /// # Errors
    ///
    /// - `GeometryError::TooFewVertices` if the chain yields fewer than 2 vertices
    /// - `GeometryError::BrokenChain` if the segments do not connect
    /// - any error of [`ArcSpline::new`]
    pub fn from_segments(segments: &[Segment], is_closed: bool) -> Result<Self> {
        let (Some(first), Some(last)) = (segments.first(), segments.last()) else {
            return Err(GeometryError::TooFewVertices { count: 0 }.into());
        };

        for (index, pair) in segments.windows(2).enumerate() {
            if !same_point(&pair[0].end(), &pair[1].start()) {
                return Err(GeometryError::BrokenChain { index: index + 1 }.into());
            }
        }

        let mut vertices: Vec<Vertex> = segments
            .iter()
            .map(|seg| Vertex::at(&seg.start(), seg.bulge()))
            .collect();

        if is_closed {
            if !same_point(&last.end(), &first.start()) {
                return Err(GeometryError::BrokenChain { index: 0 }.into());
            }
        } else {
            vertices.push(Vertex::at(&last.end(), 0.0));
        }

        Self::new(vertices, is_closed)
    }

    #[must_use]
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    #[must_use]
    pub fn vertex(&self, index: usize) -> Option<&Vertex> {
        self.vertices.get(index)
    }

    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Returns the number of segments in this spline.
    #[must_use]
    pub fn segment_count(&self) -> usize {
        let n = self.vertices.len();
        if self.closed {
            n
        } else {
            n - 1
        }
    }

    /// Reconstructs the segment starting at vertex `index`.
    ///
    /// Returns `None` if no segment starts there.
    #[must_use]
    pub fn segment(&self, index: usize) -> Option<Segment> {
        if index >= self.segment_count() {
            return None;
        }
        let v0 = &self.vertices[index];
        let v1 = &self.vertices[(index + 1) % self.vertices.len()];
        Some(Segment::from_bulge(&v0.pos(), &v1.pos(), v0.bulge))
    }

    /// Reconstructs all segments in order.
    #[must_use]
    pub fn segments(&self) -> Vec<Segment> {
        (0..self.segment_count())
            .filter_map(|i| self.segment(i))
            .collect()
    }

    /// Index of the segment ending at vertex `index`, if any.
    #[must_use]
    pub fn incoming_segment_index(&self, index: usize) -> Option<usize> {
        if index >= self.vertices.len() {
            None
        } else if index > 0 {
            Some(index - 1)
        } else if self.closed {
            Some(self.vertices.len() - 1)
        } else {
            None
        }
    }

    /// One-sided unit tangents at vertex `index`: `(left, right)`.
    ///
    /// `left` is the end tangent of the segment ending at the vertex, `right`
    /// the start tangent of the segment starting there. Either is `None` at
    /// the open ends of the spline.
    #[must_use]
    pub fn unit_tangents(&self, index: usize) -> (Option<Vector2>, Option<Vector2>) {
        let left = self
            .incoming_segment_index(index)
            .and_then(|i| self.segment(i))
            .map(|seg| seg.unit_tangent_end());
        let right = self.segment(index).map(|seg| seg.unit_tangent_start());
        (left, right)
    }

    /// Indices of vertices where the tangent direction jumps.
    #[must_use]
    pub fn kinks(&self) -> Vec<usize> {
        self.kinks_with_tolerance(KINK_TOLERANCE)
    }

    /// Like [`ArcSpline::kinks`], with an explicit threshold on `|left - right|`.
    #[must_use]
    pub fn kinks_with_tolerance(&self, tolerance: f64) -> Vec<usize> {
        (0..self.vertices.len())
            .filter(|&i| match self.unit_tangents(i) {
                (Some(left), Some(right)) => (left - right).norm() > tolerance,
                _ => false,
            })
            .collect()
    }

    /// Returns a new spline tracing the same path in the opposite direction.
    ///
    /// For a segment `v[i] → v[i+1]` with bulge `b`, the reversed segment
    /// `v[i+1] → v[i]` has bulge `-b`. The ignored trailing bulge of an open
    /// spline is reset to zero.
    #[must_use]
    pub fn reversed(&self) -> Self {
        let m = self.vertices.len();
        let vertices = (0..m)
            .map(|j| {
                let src = &self.vertices[m - 1 - j];
                // Vertex j starts the reverse of original segment (m-2-j), wrapping for closed.
                let bulge = if j + 1 < m {
                    -self.vertices[m - 2 - j].bulge
                } else if self.closed {
                    -self.vertices[m - 1].bulge
                } else {
                    0.0
                };
                Vertex::new(src.x, src.y, bulge)
            })
            .collect();
        Self {
            vertices,
            closed: self.closed,
        }
    }

    /// Total length of all segments.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.segments().iter().map(Segment::length).sum()
    }

    /// Converts this spline to a list of points by tessellating arcs into line segments.
    ///
    /// `tolerance` controls the maximum deviation between the arc and its chord approximation.
    /// Closed splines do not repeat the first point at the end.
    #[must_use]
    pub fn to_points(&self, tolerance: f64) -> Vec<Point2> {
        let seg_count = self.segment_count();
        let mut points = Vec::with_capacity(self.vertices.len() * 2);
        points.push(self.vertices[0].pos());

        for (i, seg) in self.segments().iter().enumerate() {
            let end = self.vertices[(i + 1) % self.vertices.len()].pos();
            if let Segment::Arc(arc) = seg {
                let n_sub = arc_subdivision_count(arc.radius(), arc.sweep().abs(), tolerance);
                for j in 1..n_sub {
                    points.push(arc.point_at(f64::from(j) / f64::from(n_sub)));
                }
            }
            if !(self.closed && i + 1 == seg_count) {
                points.push(end);
            }
        }

        points
    }
}

fn same_point(a: &Point2, b: &Point2) -> bool {
    (a - b).norm() <= PARAM_TOLERANCE
}

/// Computes the number of line segments needed to approximate an arc
/// within the given tolerance.
fn arc_subdivision_count(radius: f64, abs_sweep: f64, tolerance: f64) -> u32 {
    if radius < 1e-12 || abs_sweep < 1e-12 || tolerance <= 0.0 {
        return 1;
    }
    // From the sagitta formula: sagitta = r * (1 - cos(θ/2))
    // For a given tolerance: θ = 2 * acos(1 - tolerance/r)
    let max_angle = if tolerance >= radius {
        std::f64::consts::PI
    } else {
        2.0 * (1.0 - tolerance / radius).acos()
    };
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let n = (abs_sweep / max_angle).ceil() as u32;
    n.max(1)
}
