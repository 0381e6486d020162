use crate::geometry::{ArcSegment, LineSegment, Segment};
use crate::math::vector_2d::TurnDirection;

/// One side of a prospective fillet: the locus of centers of a circle of the
/// fillet radius rolling along a segment on the inside of the turn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Offset {
    /// The line shifted perpendicular to itself. Parameters match the original.
    Line(LineSegment),
    /// Same center, angles and direction; adjusted radius (may be non-positive
    /// when the arc is tighter than the fillet).
    Arc(ArcSegment),
}

/// Offsets `segment` by `radius` toward the inside of the turn at a kink.
///
/// Both segments adjacent to a kink must be offset with the same `turn` so
/// that the two offsets meet at the fillet center.
#[must_use]
pub fn offset(segment: &Segment, radius: f64, turn: TurnDirection) -> Offset {
    match segment {
        Segment::Line(line) => {
            let shift = turn.inward_normal(&line.unit_tangent()) * radius;
            Offset::Line(line.translated(&shift))
        }
        Segment::Arc(arc) => {
            // The left normal of a CCW arc points at its center.
            let toward_center = turn.sign() * arc.direction().sign();
            Offset::Arc(arc.with_radius(arc.radius() - toward_center * radius))
        }
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::FRAC_PI_2;

    use super::*;
    use crate::math::{Point2, TOLERANCE};

    fn east_line() -> Segment {
        Segment::Line(LineSegment::new(Point2::new(0.0, 0.0), Point2::new(4.0, 0.0)))
    }

    #[test]
    fn line_left_turn_shifts_left() {
        let Offset::Line(line) = offset(&east_line(), 0.5, TurnDirection::Left) else {
            panic!("expected line offset");
        };
        assert!((line.start().y - 0.5).abs() < TOLERANCE);
        assert!((line.end().y - 0.5).abs() < TOLERANCE);
        assert!((line.end().x - 4.0).abs() < TOLERANCE);
    }

    #[test]
    fn line_right_turn_shifts_right() {
        let Offset::Line(line) = offset(&east_line(), 0.5, TurnDirection::Right) else {
            panic!("expected line offset");
        };
        assert!((line.start().y + 0.5).abs() < TOLERANCE);
    }

    #[test]
    fn ccw_arc_left_turn_shrinks() {
        let arc = Segment::Arc(ArcSegment::new(Point2::origin(), 10.0, 0.0, FRAC_PI_2));
        let Offset::Arc(off) = offset(&arc, 1.0, TurnDirection::Left) else {
            panic!("expected arc offset");
        };
        assert!((off.radius() - 9.0).abs() < TOLERANCE);
        assert!((off.sweep() - FRAC_PI_2).abs() < TOLERANCE);
    }

    #[test]
    fn ccw_arc_right_turn_grows() {
        let arc = Segment::Arc(ArcSegment::new(Point2::origin(), 10.0, 0.0, FRAC_PI_2));
        let Offset::Arc(off) = offset(&arc, 1.0, TurnDirection::Right) else {
            panic!("expected arc offset");
        };
        assert!((off.radius() - 11.0).abs() < TOLERANCE);
    }

    #[test]
    fn cw_arc_left_turn_grows() {
        let arc = Segment::Arc(ArcSegment::new(Point2::origin(), 10.0, FRAC_PI_2, -FRAC_PI_2));
        let Offset::Arc(off) = offset(&arc, 1.0, TurnDirection::Left) else {
            panic!("expected arc offset");
        };
        assert!((off.radius() - 11.0).abs() < TOLERANCE);
    }
}
