use crate::math::arc_2d::{
    angle_to_arc_param, arc_from_bulge, arc_point_at, arc_tangent_at, bulge_from_sweep,
};
use crate::math::project_2d::line_param_of;
use crate::math::{Point2, Vector2, PARAM_TOLERANCE, TOLERANCE};

/// Whether an arc's angle increases or decreases from start to end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SweepDirection {
    CounterClockwise,
    Clockwise,
}

impl SweepDirection {
    /// Direction of a signed sweep angle (zero counts as counter-clockwise).
    #[must_use]
    pub fn of_sweep(sweep: f64) -> Self {
        if sweep >= 0.0 {
            Self::CounterClockwise
        } else {
            Self::Clockwise
        }
    }

    #[must_use]
    pub fn is_ccw(self) -> bool {
        self == Self::CounterClockwise
    }

    /// `+1.0` for counter-clockwise, `-1.0` for clockwise.
    #[must_use]
    pub fn sign(self) -> f64 {
        match self {
            Self::CounterClockwise => 1.0,
            Self::Clockwise => -1.0,
        }
    }
}

/// A straight segment between two points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSegment {
    start: Point2,
    end: Point2,
}

impl LineSegment {
    #[must_use]
    pub fn new(start: Point2, end: Point2) -> Self {
        Self { start, end }
    }

    #[must_use]
    pub fn start(&self) -> Point2 {
        self.start
    }

    #[must_use]
    pub fn end(&self) -> Point2 {
        self.end
    }

    /// Un-normalized direction `end - start`.
    #[must_use]
    pub fn direction(&self) -> Vector2 {
        self.end - self.start
    }

    /// Unit direction; zero for a degenerate segment.
    #[must_use]
    pub fn unit_tangent(&self) -> Vector2 {
        self.direction()
            .try_normalize(TOLERANCE)
            .unwrap_or_else(Vector2::zeros)
    }

    #[must_use]
    pub fn length(&self) -> f64 {
        self.direction().norm()
    }

    #[must_use]
    pub fn point_at(&self, t: f64) -> Point2 {
        self.start + self.direction() * t
    }

    /// The same segment translated by `shift`.
    #[must_use]
    pub fn translated(&self, shift: &Vector2) -> Self {
        Self::new(self.start + shift, self.end + shift)
    }

    /// Parameter of `p`'s projection if it falls within `[0, 1]`.
    #[must_use]
    pub fn param_of(&self, p: &Point2) -> Option<f64> {
        let t = line_param_of(p, &self.start, &self.end)?;
        contains_param(t).then_some(t.clamp(0.0, 1.0))
    }
}

/// A circular arc given by center, radius, start angle and signed sweep.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcSegment {
    center: Point2,
    radius: f64,
    start_angle: f64,
    sweep: f64,
}

impl ArcSegment {
    #[must_use]
    pub fn new(center: Point2, radius: f64, start_angle: f64, sweep: f64) -> Self {
        Self {
            center,
            radius,
            start_angle,
            sweep,
        }
    }

    /// Reconstructs the arc running from `start` to `end` with the given bulge.
    #[must_use]
    pub fn from_bulge(start: &Point2, end: &Point2, bulge: f64) -> Self {
        let (center, radius, start_angle, sweep) = arc_from_bulge(start, end, bulge);
        Self::new(center, radius, start_angle, sweep)
    }

    #[must_use]
    pub fn center(&self) -> Point2 {
        self.center
    }

    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    #[must_use]
    pub fn start_angle(&self) -> f64 {
        self.start_angle
    }

    #[must_use]
    pub fn end_angle(&self) -> f64 {
        self.start_angle + self.sweep
    }

    /// Signed sweep angle (positive = counter-clockwise).
    #[must_use]
    pub fn sweep(&self) -> f64 {
        self.sweep
    }

    #[must_use]
    pub fn direction(&self) -> SweepDirection {
        SweepDirection::of_sweep(self.sweep)
    }

    #[must_use]
    pub fn start(&self) -> Point2 {
        self.point_at(0.0)
    }

    #[must_use]
    pub fn end(&self) -> Point2 {
        self.point_at(1.0)
    }

    #[must_use]
    pub fn point_at(&self, t: f64) -> Point2 {
        arc_point_at(&self.center, self.radius, self.start_angle, self.sweep, t)
    }

    #[must_use]
    pub fn unit_tangent_start(&self) -> Vector2 {
        arc_tangent_at(self.start_angle, self.sweep, 0.0)
    }

    #[must_use]
    pub fn unit_tangent_end(&self) -> Vector2 {
        arc_tangent_at(self.start_angle, self.sweep, 1.0)
    }

    #[must_use]
    pub fn length(&self) -> f64 {
        self.radius * self.sweep.abs()
    }

    #[must_use]
    pub fn to_bulge(&self) -> f64 {
        bulge_from_sweep(self.sweep)
    }

    /// The same arc (center, angles, direction) on a different radius.
    #[must_use]
    pub fn with_radius(&self, radius: f64) -> Self {
        Self { radius, ..*self }
    }

    /// Arc parameter of `p`'s angle about the center if it lies within the sweep.
    #[must_use]
    pub fn param_of(&self, p: &Point2) -> Option<f64> {
        let offset = p - self.center;
        if offset.norm() < TOLERANCE {
            return None;
        }
        angle_to_arc_param(offset.y.atan2(offset.x), self.start_angle, self.sweep)
    }
}

/// One piece of an arc-spline, reconstructed from a vertex pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Segment {
    Line(LineSegment),
    Arc(ArcSegment),
}

impl Segment {
    /// Builds a line for a zero bulge, an arc otherwise.
    #[must_use]
    pub fn from_bulge(start: &Point2, end: &Point2, bulge: f64) -> Self {
        if bulge.abs() < TOLERANCE {
            Self::Line(LineSegment::new(*start, *end))
        } else {
            Self::Arc(ArcSegment::from_bulge(start, end, bulge))
        }
    }

    #[must_use]
    pub fn start(&self) -> Point2 {
        match self {
            Self::Line(line) => line.start(),
            Self::Arc(arc) => arc.start(),
        }
    }

    #[must_use]
    pub fn end(&self) -> Point2 {
        match self {
            Self::Line(line) => line.end(),
            Self::Arc(arc) => arc.end(),
        }
    }

    #[must_use]
    pub fn bulge(&self) -> f64 {
        match self {
            Self::Line(_) => 0.0,
            Self::Arc(arc) => arc.to_bulge(),
        }
    }

    #[must_use]
    pub fn unit_tangent_start(&self) -> Vector2 {
        match self {
            Self::Line(line) => line.unit_tangent(),
            Self::Arc(arc) => arc.unit_tangent_start(),
        }
    }

    #[must_use]
    pub fn unit_tangent_end(&self) -> Vector2 {
        match self {
            Self::Line(line) => line.unit_tangent(),
            Self::Arc(arc) => arc.unit_tangent_end(),
        }
    }

    #[must_use]
    pub fn length(&self) -> f64 {
        match self {
            Self::Line(line) => line.length(),
            Self::Arc(arc) => arc.length(),
        }
    }

    #[must_use]
    pub fn point_at(&self, t: f64) -> Point2 {
        match self {
            Self::Line(line) => line.point_at(t),
            Self::Arc(arc) => arc.point_at(t),
        }
    }

    /// Parameter in `[0, 1]` of the point of this segment nearest `p`, if
    /// that point is interior to the segment (orthogonal for a line, radial
    /// for an arc).
    #[must_use]
    pub fn param_of(&self, p: &Point2) -> Option<f64> {
        match self {
            Self::Line(line) => line.param_of(p),
            Self::Arc(arc) => arc.param_of(p),
        }
    }
}

/// `[0, 1]` containment with [`PARAM_TOLERANCE`] slack.
#[must_use]
pub fn contains_param(t: f64) -> bool {
    (-PARAM_TOLERANCE..=1.0 + PARAM_TOLERANCE).contains(&t)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_8, PI};

    use super::*;

    const TOL: f64 = 1e-10;

    #[test]
    fn zero_bulge_builds_line() {
        let seg = Segment::from_bulge(&Point2::new(0.0, 0.0), &Point2::new(3.0, 4.0), 0.0);
        let Segment::Line(line) = seg else {
            panic!("expected line, got {seg:?}");
        };
        assert!((line.length() - 5.0).abs() < TOL);
        let t = line.unit_tangent();
        assert!((t.x - 0.6).abs() < TOL && (t.y - 0.8).abs() < TOL);
    }

    #[test]
    fn quarter_arc_endpoints_and_tangents() {
        let seg = Segment::from_bulge(&Point2::new(1.0, 0.0), &Point2::new(0.0, 1.0), FRAC_PI_8.tan());
        let Segment::Arc(arc) = seg else {
            panic!("expected arc, got {seg:?}");
        };
        assert_eq!(arc.direction(), SweepDirection::CounterClockwise);
        assert!((arc.length() - FRAC_PI_2).abs() < 1e-9);
        let end = seg.end();
        assert!(end.x.abs() < 1e-9 && (end.y - 1.0).abs() < 1e-9, "end={end:?}");
        let ts = seg.unit_tangent_start();
        assert!(ts.x.abs() < 1e-9 && (ts.y - 1.0).abs() < 1e-9, "ts={ts:?}");
        let te = seg.unit_tangent_end();
        assert!((te.x + 1.0).abs() < 1e-9 && te.y.abs() < 1e-9, "te={te:?}");
        assert!((seg.bulge() - FRAC_PI_8.tan()).abs() < 1e-12);
    }

    #[test]
    fn clockwise_arc_tangent_reverses() {
        let arc = ArcSegment::from_bulge(&Point2::new(0.0, 0.0), &Point2::new(2.0, 0.0), -1.0);
        assert_eq!(arc.direction(), SweepDirection::Clockwise);
        // CW semicircle through the top starts heading up.
        let ts = arc.unit_tangent_start();
        assert!(ts.x.abs() < TOL && (ts.y - 1.0).abs() < TOL, "ts={ts:?}");
        assert!((arc.end_angle() - (arc.start_angle() - PI)).abs() < TOL);
    }

    #[test]
    fn line_param_containment() {
        let line = LineSegment::new(Point2::new(0.0, 0.0), Point2::new(4.0, 0.0));
        assert!((line.param_of(&Point2::new(1.0, 3.0)).unwrap() - 0.25).abs() < TOL);
        assert!(line.param_of(&Point2::new(5.0, 0.0)).is_none());
        assert!(line.param_of(&Point2::new(-0.1, 0.0)).is_none());
    }

    #[test]
    fn arc_param_containment() {
        let arc = ArcSegment::new(Point2::origin(), 1.0, 0.0, FRAC_PI_2);
        let t = arc.param_of(&Point2::new(3.0, 3.0)).unwrap();
        assert!((t - 0.5).abs() < TOL, "t={t}");
        assert!(arc.param_of(&Point2::new(-1.0, -1.0)).is_none());
        assert!(arc.param_of(&Point2::origin()).is_none());
    }

    #[test]
    fn with_radius_keeps_angles() {
        let arc = ArcSegment::new(Point2::new(1.0, 1.0), 2.0, 0.3, -1.2);
        let grown = arc.with_radius(3.0);
        assert!((grown.radius() - 3.0).abs() < TOL);
        assert!((grown.start_angle() - 0.3).abs() < TOL);
        assert!((grown.sweep() + 1.2).abs() < TOL);
        assert_eq!(grown.center(), arc.center());
    }
}
