/// 2D arc/bulge math utilities.
///
/// Bulge convention: `bulge = tan(sweep_angle / 4)`.
/// - `bulge = 0`: straight line
/// - `bulge > 0`: counter-clockwise arc
/// - `bulge < 0`: clockwise arc
/// - `|bulge| = 1`: semicircle
use std::f64::consts::{PI, TAU};

use super::{Point2, Vector2, PARAM_TOLERANCE, TOLERANCE};

/// Converts a bulge-defined arc segment to center-radius-angle form.
///
/// Returns `(center, radius, start_angle, sweep)` where `sweep` is signed
/// (positive = counter-clockwise).
///
/// Returns degenerate values (zero radius, zero sweep) for zero-length chords
/// or a zero bulge.
#[must_use]
pub fn arc_from_bulge(start: &Point2, end: &Point2, bulge: f64) -> (Point2, f64, f64, f64) {
    let chord = end - start;
    let chord_len = chord.norm();

    if chord_len < TOLERANCE || bulge.abs() < TOLERANCE {
        return (*start, 0.0, 0.0, 0.0);
    }

    // Distance from chord midpoint to center, in half-chord units.
    let sagitta_ratio = (1.0 - bulge * bulge) / (2.0 * bulge);
    let mid = nalgebra::center(start, end);

    // Normal to chord pointing toward center (for positive bulge, center is left of chord).
    let normal = Vector2::new(-chord.y, chord.x) / chord_len;
    let center = mid + normal * (sagitta_ratio * chord_len * 0.5);

    // r = d*(1+b²)/(4*|b|) derived from r = d/(2*sin(θ/2)) with θ=4*atan(b)
    let radius = chord_len * (1.0 + bulge * bulge) / (4.0 * bulge.abs());

    let start_angle = (start.y - center.y).atan2(start.x - center.x);
    let sweep = 4.0 * bulge.atan();

    (center, radius, start_angle, sweep)
}

/// Bulge of an arc with the given signed sweep angle.
#[must_use]
pub fn bulge_from_sweep(sweep: f64) -> f64 {
    (sweep / 4.0).tan()
}

/// Signed sweep from `from_angle` to `to_angle` travelling counter-clockwise
/// (`is_ccw`) or clockwise. The magnitude lies in `[0, 2π)`.
#[must_use]
pub fn sweep_between(from_angle: f64, to_angle: f64, is_ccw: bool) -> f64 {
    let ccw = (to_angle - from_angle).rem_euclid(TAU);
    if is_ccw {
        ccw
    } else if ccw == 0.0 {
        0.0
    } else {
        ccw - TAU
    }
}

/// Converts arc endpoints + center back to bulge value.
///
/// `is_ccw`: true for counter-clockwise arc, false for clockwise.
#[must_use]
pub fn bulge_from_arc(start: &Point2, end: &Point2, center: &Point2, is_ccw: bool) -> f64 {
    let start_angle = (start.y - center.y).atan2(start.x - center.x);
    let end_angle = (end.y - center.y).atan2(end.x - center.x);
    bulge_from_sweep(sweep_between(start_angle, end_angle, is_ccw))
}

/// Evaluates a point on an arc at parameter `t` in `[0, 1]`.
#[must_use]
pub fn arc_point_at(center: &Point2, radius: f64, start_angle: f64, sweep: f64, t: f64) -> Point2 {
    let angle = start_angle + sweep * t;
    Point2::new(
        center.x + radius * angle.cos(),
        center.y + radius * angle.sin(),
    )
}

/// Computes the unit tangent direction on an arc at parameter `t` in `[0, 1]`.
///
/// The tangent points in the direction of increasing `t`.
#[must_use]
pub fn arc_tangent_at(start_angle: f64, sweep: f64, t: f64) -> Vector2 {
    let angle = start_angle + sweep * t;
    let sign = if sweep >= 0.0 { 1.0 } else { -1.0 };
    // Tangent to circle at angle θ is (-sin θ, cos θ) for CCW; negate for CW.
    Vector2::new(-sign * angle.sin(), sign * angle.cos())
}

/// Converts an absolute angle to an arc parameter `t` in `[0, 1]`.
///
/// Returns `None` if the angle is not within the arc's angular range. This is
/// the containment predicate for every "does this point lie on the arc" test.
#[must_use]
pub fn angle_to_arc_param(angle: f64, start_angle: f64, sweep: f64) -> Option<f64> {
    if sweep.abs() < TOLERANCE {
        return None;
    }
    let eps = TOLERANCE * 100.0;

    // Compute the angular offset from start_angle to angle in the sweep direction.
    let mut delta = angle - start_angle;

    if sweep > 0.0 {
        while delta < -eps {
            delta += 2.0 * PI;
        }
        while delta > 2.0 * PI + eps {
            delta -= 2.0 * PI;
        }
    } else {
        while delta > eps {
            delta -= 2.0 * PI;
        }
        while delta < -2.0 * PI - eps {
            delta += 2.0 * PI;
        }
    }

    let t = delta / sweep;
    if (-PARAM_TOLERANCE..=1.0 + PARAM_TOLERANCE).contains(&t) {
        Some(t.clamp(0.0, 1.0))
    } else {
        None
    }
}
