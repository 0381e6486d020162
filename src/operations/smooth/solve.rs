//! Fillet-center solver: intersects the two offsets at a kink and keeps the
//! candidate that also lies on both adjacent segments.
//!
//! Offsets share their parameterization with the original segments (a line
//! keeps its `[0, 1]` range, an arc keeps its center and angles), so testing
//! a candidate against an offset is the same as testing its projection
//! against the original segment.

use crate::error::{NonSmoothableError, Result};
use crate::geometry::segment::contains_param;
use crate::geometry::{ArcSegment, LineSegment};
use crate::math::intersect_2d::{
    circle_circle_intersect_2d, line_circle_intersect_2d, line_line_intersect_2d,
    CircleCircleHits, LineCircleHits,
};
use crate::math::{Point2, TOLERANCE};

use super::offset::Offset;

/// Outcome of filtering algebraic intersection candidates by containment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Intersection {
    Unique(Point2),
    None,
    Ambiguous(Point2, Point2),
}

impl Intersection {
    /// Classifies the candidates that passed containment.
    fn from_candidates(candidates: impl IntoIterator<Item = Point2>) -> Self {
        let mut found = Self::None;
        for p in candidates {
            found = match found {
                Self::None => Self::Unique(p),
                // Touching roots can show up twice.
                Self::Unique(q) if (p - q).norm() < TOLERANCE => Self::Unique(q),
                Self::Unique(q) => Self::Ambiguous(q, p),
                ambiguous @ Self::Ambiguous(..) => ambiguous,
            };
        }
        found
    }

    /// Converts to the fillet center, failing for `None` and `Ambiguous`.
    ///
    /// # Errors
    ///
    /// `NonSmoothableError::NoValidCandidate` or `AmbiguousIntersection`.
    pub fn into_point(self) -> Result<Point2> {
        match self {
            Self::Unique(p) => Ok(p),
            Self::None => Err(NonSmoothableError::NoValidCandidate.into()),
            Self::Ambiguous(first, second) => {
                Err(NonSmoothableError::AmbiguousIntersection { first, second }.into())
            }
        }
    }
}

/// Intersects two offsets to obtain the fillet center.
///
/// # Errors
///
/// Any [`NonSmoothableError`] raised by the pairwise solvers.
pub fn fillet_center(left: &Offset, right: &Offset) -> Result<Point2> {
    match (left, right) {
        (Offset::Line(a), Offset::Line(b)) => line_line(a, b),
        (Offset::Line(line), Offset::Arc(arc)) | (Offset::Arc(arc), Offset::Line(line)) => {
            line_arc(line, arc)
        }
        (Offset::Arc(a), Offset::Arc(b)) => arc_arc(a, b),
    }
}

/// Intersection of the infinite lines through `a` and `b`, accepted only if
/// it falls within `[0, 1]` on both.
///
/// # Errors
///
/// `ParallelLines` or `OutsideSegment`.
pub fn line_line(a: &LineSegment, b: &LineSegment) -> Result<Point2> {
    let (t, u) = line_line_intersect_2d(&a.start(), &a.direction(), &b.start(), &b.direction())
        .ok_or(NonSmoothableError::ParallelLines)?;
    if !(contains_param(t) && contains_param(u)) {
        return Err(NonSmoothableError::OutsideSegment { t, u }.into());
    }
    Ok(a.point_at(t))
}

/// Intersection of a line with an arc, accepted only if it lies within the
/// line's `[0, 1]` range and the arc's swept angle.
///
/// # Errors
///
/// `CollapsedOffset`, `NoLineCircleIntersection` (including tangential
/// contact), `NoValidCandidate` or `AmbiguousIntersection`.
pub fn line_arc(line: &LineSegment, arc: &ArcSegment) -> Result<Point2> {
    ensure_radius(arc)?;
    let (t0, t1) = match line_circle_intersect_2d(
        &line.start(),
        &line.direction(),
        &arc.center(),
        arc.radius(),
    ) {
        LineCircleHits::Secant(t0, t1) => (t0, t1),
        LineCircleHits::Miss { discriminant } | LineCircleHits::Tangent { discriminant, .. } => {
            return Err(NonSmoothableError::NoLineCircleIntersection { discriminant }.into());
        }
    };

    Intersection::from_candidates(
        [t0, t1]
            .into_iter()
            .filter(|&t| contains_param(t))
            .map(|t| line.point_at(t))
            .filter(|p| arc.param_of(p).is_some()),
    )
    .into_point()
}

/// Intersection of two arcs, accepted only if it lies within both swept angles.
///
/// # Errors
///
/// `CollapsedOffset`, `CirclesTooFarApart`, `CirclesNested`,
/// `IdenticalCircles`, `NoValidCandidate` or `AmbiguousIntersection`.
pub fn arc_arc(a: &ArcSegment, b: &ArcSegment) -> Result<Point2> {
    ensure_radius(a)?;
    ensure_radius(b)?;
    let candidates = match circle_circle_intersect_2d(&a.center(), a.radius(), &b.center(), b.radius()) {
        CircleCircleHits::Crossing(p, q) => vec![p, q],
        CircleCircleHits::Touching(p) => vec![p],
        CircleCircleHits::TooFarApart {
            distance,
            radius_sum,
        } => {
            return Err(NonSmoothableError::CirclesTooFarApart {
                distance,
                radius_sum,
            }
            .into());
        }
        CircleCircleHits::Nested {
            distance,
            radius_difference,
        } => {
            return Err(NonSmoothableError::CirclesNested {
                distance,
                radius_difference,
            }
            .into());
        }
        CircleCircleHits::Coincident => return Err(NonSmoothableError::IdenticalCircles.into()),
    };

    Intersection::from_candidates(
        candidates
            .into_iter()
            .filter(|p| a.param_of(p).is_some() && b.param_of(p).is_some()),
    )
    .into_point()
}

fn ensure_radius(arc: &ArcSegment) -> Result<()> {
    if arc.radius() <= TOLERANCE {
        return Err(NonSmoothableError::CollapsedOffset {
            radius: arc.radius(),
        }
        .into());
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::f64::consts::{FRAC_PI_2, PI};

    use super::*;
    use crate::error::ArcSplineError;

    fn line(x0: f64, y0: f64, x1: f64, y1: f64) -> LineSegment {
        LineSegment::new(Point2::new(x0, y0), Point2::new(x1, y1))
    }

    fn assert_point(p: &Point2, x: f64, y: f64) {
        assert!((p.x - x).abs() < 1e-9 && (p.y - y).abs() < 1e-9, "got {p:?}, want ({x}, {y})");
    }

    #[test]
    fn line_line_square_corner() {
        // Offsets of the corner at (0,0) of a CCW unit-ish square, r = 1.
        let p = line_line(&line(1.0, 10.0, 1.0, 0.0), &line(0.0, 1.0, 10.0, 1.0)).unwrap();
        assert_point(&p, 1.0, 1.0);
    }

    #[test]
    fn line_line_parallel() {
        let err = line_line(&line(0.0, 0.0, 1.0, 0.0), &line(0.0, 1.0, 1.0, 1.0)).unwrap_err();
        assert!(matches!(err, ArcSplineError::NonSmoothable(NonSmoothableError::ParallelLines)));
    }

    #[test]
    fn line_line_outside_short_segment() {
        // Second segment only reaches x = 0.5; the crossing is at x = 1.
        let err = line_line(&line(1.0, 10.0, 1.0, 0.0), &line(0.0, 1.0, 0.5, 1.0)).unwrap_err();
        assert!(matches!(
            err,
            ArcSplineError::NonSmoothable(NonSmoothableError::OutsideSegment { .. })
        ));
    }

    #[test]
    fn line_arc_picks_the_contained_root() {
        // Offset of (0,0)→(10,0) by 1 against a CCW quarter arc of radius 9.
        let arc = ArcSegment::new(Point2::origin(), 9.0, 0.0, FRAC_PI_2);
        let p = line_arc(&line(0.0, 1.0, 10.0, 1.0), &arc).unwrap();
        assert_point(&p, 80.0_f64.sqrt(), 1.0);
    }

    #[test]
    fn line_arc_miss_and_tangent() {
        let arc = ArcSegment::new(Point2::origin(), 1.0, 0.0, PI);
        let err = line_arc(&line(-2.0, 3.0, 2.0, 3.0), &arc).unwrap_err();
        assert!(matches!(
            err,
            ArcSplineError::NonSmoothable(NonSmoothableError::NoLineCircleIntersection { .. })
        ));
        let err = line_arc(&line(-2.0, 1.0, 2.0, 1.0), &arc).unwrap_err();
        assert!(matches!(
            err,
            ArcSplineError::NonSmoothable(NonSmoothableError::NoLineCircleIntersection { .. })
        ));
    }

    #[test]
    fn line_arc_outside_sweep() {
        // Crossings at angles ~30° and ~150°, arc only covers [60°, 120°].
        let arc = ArcSegment::new(Point2::origin(), 1.0, PI / 3.0, PI / 3.0);
        let err = line_arc(&line(-2.0, 0.5, 2.0, 0.5), &arc).unwrap_err();
        assert!(matches!(
            err,
            ArcSplineError::NonSmoothable(NonSmoothableError::NoValidCandidate)
        ));
    }

    #[test]
    fn line_arc_ambiguous() {
        // Upper semicircle, chord at y = 0.5 crosses it twice inside the sweep.
        let arc = ArcSegment::new(Point2::origin(), 1.0, 0.0, PI);
        let err = line_arc(&line(-2.0, 0.5, 2.0, 0.5), &arc).unwrap_err();
        assert!(matches!(
            err,
            ArcSplineError::NonSmoothable(NonSmoothableError::AmbiguousIntersection { .. })
        ));
    }

    #[test]
    fn line_arc_collapsed_offset() {
        let arc = ArcSegment::new(Point2::origin(), -0.5, 0.0, PI);
        let err = line_arc(&line(-2.0, 0.0, 2.0, 0.0), &arc).unwrap_err();
        assert!(matches!(
            err,
            ArcSplineError::NonSmoothable(NonSmoothableError::CollapsedOffset { .. })
        ));
    }

    #[test]
    fn arc_arc_selects_upper_crossing() {
        // Unit circles at (0,0) and (1,0) cross at (0.5, ±√3/2); arcs only
        // cover the upper half.
        let a = ArcSegment::new(Point2::origin(), 1.0, 0.0, PI);
        let b = ArcSegment::new(Point2::new(1.0, 0.0), 1.0, 0.0, PI);
        let p = arc_arc(&a, &b).unwrap();
        assert_point(&p, 0.5, 3.0_f64.sqrt() / 2.0);
    }

    #[test]
    fn arc_arc_ambiguous_for_full_sweeps() {
        let a = ArcSegment::new(Point2::origin(), 1.0, -PI, 1.9 * PI);
        let b = ArcSegment::new(Point2::new(1.0, 0.0), 1.0, -PI / 2.0, 1.9 * PI);
        let err = arc_arc(&a, &b).unwrap_err();
        assert!(matches!(
            err,
            ArcSplineError::NonSmoothable(NonSmoothableError::AmbiguousIntersection { .. })
        ));
    }

    #[test]
    fn arc_arc_failures() {
        let a = ArcSegment::new(Point2::origin(), 1.0, 0.0, PI);
        let far = ArcSegment::new(Point2::new(5.0, 0.0), 1.0, 0.0, PI);
        let inner = ArcSegment::new(Point2::new(0.1, 0.0), 0.2, 0.0, PI);
        assert!(matches!(
            arc_arc(&a, &far).unwrap_err(),
            ArcSplineError::NonSmoothable(NonSmoothableError::CirclesTooFarApart { .. })
        ));
        assert!(matches!(
            arc_arc(&a, &inner).unwrap_err(),
            ArcSplineError::NonSmoothable(NonSmoothableError::CirclesNested { .. })
        ));
        assert!(matches!(
            arc_arc(&a, &a).unwrap_err(),
            ArcSplineError::NonSmoothable(NonSmoothableError::IdenticalCircles)
        ));
    }

    #[test]
    fn fillet_center_dispatches_in_either_order() {
        let arc = ArcSegment::new(Point2::origin(), 9.0, 0.0, FRAC_PI_2);
        let l = line(0.0, 1.0, 10.0, 1.0);
        let p = fillet_center(&Offset::Line(l), &Offset::Arc(arc)).unwrap();
        let q = fillet_center(&Offset::Arc(arc), &Offset::Line(l)).unwrap();
        assert_eq!(p, q);
    }

    #[test]
    fn duplicate_candidates_collapse() {
        let p = Point2::new(1.0, 2.0);
        assert_eq!(Intersection::from_candidates([p, p]), Intersection::Unique(p));
        assert_eq!(Intersection::from_candidates(Vec::<Point2>::new()), Intersection::None);
    }
}
