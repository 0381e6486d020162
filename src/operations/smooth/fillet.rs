use tracing::debug;

use crate::error::{NonSmoothableError, Result};
use crate::geometry::{ArcSpline, Segment};
use crate::math::arc_2d::{bulge_from_sweep, sweep_between};
use crate::math::project_2d::{project_onto_circle, project_onto_line};
use crate::math::vector_2d::TurnDirection;
use crate::math::Point2;

use super::offset::offset;
use super::solve::fillet_center;

/// A fillet arc built for one kink, ready to be spliced into the output.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fillet {
    /// Vertex index of the kink in the original spline.
    pub kink: usize,
    /// Tangent point on the segment ending at the kink.
    pub left_point: Point2,
    pub center: Point2,
    /// Tangent point on the segment starting at the kink.
    pub right_point: Point2,
    pub bulge: f64,
}

/// Builds the fillet of `radius` at vertex `kink`.
///
/// # Errors
///
/// `NonSmoothableError::AntiparallelTangents` for a cusp, otherwise whatever
/// the solver or the projections report.
pub fn build(spline: &ArcSpline, kink: usize, radius: f64) -> Result<Fillet> {
    let (Some(left), Some(right)) = (
        spline
            .incoming_segment_index(kink)
            .and_then(|i| spline.segment(i)),
        spline.segment(kink),
    ) else {
        // Open ends have only one tangent and are never kinks.
        return Err(NonSmoothableError::NoValidCandidate.into());
    };

    let turn = TurnDirection::between(&left.unit_tangent_end(), &right.unit_tangent_start())
        .ok_or(NonSmoothableError::AntiparallelTangents)?;

    let center = fillet_center(&offset(&left, radius, turn), &offset(&right, radius, turn))?;
    let left_point = tangent_point(&left, &center)?;
    let right_point = tangent_point(&right, &center)?;

    let from = left_point - center;
    let to = right_point - center;
    let sweep = sweep_between(
        from.y.atan2(from.x),
        to.y.atan2(to.x),
        turn == TurnDirection::Left,
    );
    let bulge = bulge_from_sweep(sweep);

    debug!(
        kink,
        center_x = center.x,
        center_y = center.y,
        bulge,
        "built fillet"
    );

    Ok(Fillet {
        kink,
        left_point,
        center,
        right_point,
        bulge,
    })
}

/// Foot of the fillet center on the original segment: orthogonal for a line,
/// radial for an arc.
fn tangent_point(segment: &Segment, center: &Point2) -> Result<Point2> {
    let point = match segment {
        Segment::Line(line) => project_onto_line(center, &line.start(), &line.end()),
        Segment::Arc(arc) => project_onto_circle(center, &arc.center(), arc.radius()),
    };
    point.ok_or_else(|| NonSmoothableError::DegenerateProjection.into())
}
