use super::arc_2d::{angle_to_arc_param, arc_point_at};
use super::{Point2, Vector2, TOLERANCE};

/// Parameter of the orthogonal projection of `p` onto the infinite line
/// `start + t * (end - start)`.
///
/// Returns `None` for a zero-length segment.
#[must_use]
pub fn line_param_of(p: &Point2, start: &Point2, end: &Point2) -> Option<f64> {
    let dir = end - start;
    let len_sq = dir.norm_squared();
    if len_sq < TOLERANCE * TOLERANCE {
        return None;
    }
    Some((p - start).dot(&dir) / len_sq)
}

/// Closest point to `p` on the infinite line through `start` and `end`.
#[must_use]
pub fn project_onto_line(p: &Point2, start: &Point2, end: &Point2) -> Option<Point2> {
    line_param_of(p, start, end).map(|t| start + (end - start) * t)
}

/// Point where the ray from `center` through `p` meets the circle of `radius`.
///
/// Returns `None` when `p` coincides with `center`.
#[must_use]
pub fn project_onto_circle(p: &Point2, center: &Point2, radius: f64) -> Option<Point2> {
    let dir: Vector2 = (p - center).try_normalize(TOLERANCE)?;
    Some(center + dir * radius)
}

/// Returns the minimum distance from point `p` to the line segment from `a` to `b`.
#[must_use]
pub fn point_to_segment_dist(p: &Point2, a: &Point2, b: &Point2) -> f64 {
    match line_param_of(p, a, b) {
        Some(t) => {
            let closest = a + (b - a) * t.clamp(0.0, 1.0);
            (p - closest).norm()
        }
        // Degenerate segment (zero length).
        None => (p - a).norm(),
    }
}

/// Returns the minimum distance from point `p` to a circular arc.
///
/// If the point's angle (relative to center) falls within the arc range,
/// the distance is `||p - center| - radius|`.
/// Otherwise, the distance is the minimum of the distances to the two arc endpoints.
#[must_use]
pub fn point_to_arc_dist(
    p: &Point2,
    center: &Point2,
    radius: f64,
    start_angle: f64,
    sweep: f64,
) -> f64 {
    let offset = p - center;
    let angle = offset.y.atan2(offset.x);
    if angle_to_arc_param(angle, start_angle, sweep).is_some() {
        return (offset.norm() - radius).abs();
    }

    let d0 = (p - arc_point_at(center, radius, start_angle, sweep, 0.0)).norm();
    let d1 = (p - arc_point_at(center, radius, start_angle, sweep, 1.0)).norm();
    d0.min(d1)
}
