use super::{Point2, Vector2, TOLERANCE};
use crate::math::vector_2d::cross_2d;

/// Parametric 2D line-line intersection.
///
/// Given lines `p1 + t * d1` and `p2 + u * d2`, returns `(t, u)` if not parallel.
#[must_use]
pub fn line_line_intersect_2d(
    p1: &Point2,
    d1: &Vector2,
    p2: &Point2,
    d2: &Vector2,
) -> Option<(f64, f64)> {
    let cross = cross_2d(d1, d2);
    // Scale-aware parallel test: compare against |d1||d2|.
    if cross.abs() < TOLERANCE * d1.norm() * d2.norm() {
        return None;
    }
    let delta = p2 - p1;
    let t = cross_2d(&delta, d2) / cross;
    let u = cross_2d(&delta, d1) / cross;
    Some((t, u))
}

/// Linear interpolation: `origin + dir * t`.
#[must_use]
pub fn point_at(origin: &Point2, dir: &Vector2, t: f64) -> Point2 {
    origin + dir * t
}

/// Roots of a line against a full circle, in the line's parameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LineCircleHits {
    /// The line misses the circle.
    Miss { discriminant: f64 },
    /// The line touches the circle at a single parameter.
    Tangent { t: f64, discriminant: f64 },
    /// Two crossings, ordered by increasing `t`.
    Secant(f64, f64),
}

/// Intersection of the infinite line `origin + t * dir` with a full circle.
///
/// Substitutes the parametric line into the circle equation and solves the
/// resulting quadratic in `t`.
#[must_use]
pub fn line_circle_intersect_2d(
    origin: &Point2,
    dir: &Vector2,
    center: &Point2,
    radius: f64,
) -> LineCircleHits {
    // (o + t*d - c)² = r²
    let f = origin - center;
    let a = dir.norm_squared();
    let b = 2.0 * f.dot(dir);
    let c = f.norm_squared() - radius * radius;

    if a < TOLERANCE * TOLERANCE {
        return LineCircleHits::Miss { discriminant: 0.0 };
    }

    // Normalised so the tangent threshold does not depend on the line's length.
    let discriminant = (b * b - 4.0 * a * c) / (4.0 * a * a);
    if discriminant < -TOLERANCE {
        return LineCircleHits::Miss { discriminant };
    }
    let mid = -b / (2.0 * a);
    if discriminant <= TOLERANCE {
        return LineCircleHits::Tangent { t: mid, discriminant };
    }
    let half = discriminant.sqrt();
    LineCircleHits::Secant(mid - half, mid + half)
}

/// Intersection points of two full circles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CircleCircleHits {
    /// Centers are further apart than the sum of the radii.
    TooFarApart { distance: f64, radius_sum: f64 },
    /// One circle lies strictly inside the other.
    Nested { distance: f64, radius_difference: f64 },
    /// Same center and same radius.
    Coincident,
    /// The circles touch at one point.
    Touching(Point2),
    /// Two crossing points.
    Crossing(Point2, Point2),
}

/// Intersection of two full circles via the chord-midpoint construction.
#[must_use]
pub fn circle_circle_intersect_2d(c1: &Point2, r1: f64, c2: &Point2, r2: f64) -> CircleCircleHits {
    let delta = c2 - c1;
    let dist_sq = delta.norm_squared();
    let dist = dist_sq.sqrt();

    if dist < TOLERANCE {
        return if (r1 - r2).abs() < TOLERANCE {
            CircleCircleHits::Coincident
        } else {
            CircleCircleHits::Nested {
                distance: dist,
                radius_difference: (r1 - r2).abs(),
            }
        };
    }

    let radius_sum = r1 + r2;
    let radius_difference = (r1 - r2).abs();
    if dist > radius_sum + TOLERANCE {
        return CircleCircleHits::TooFarApart {
            distance: dist,
            radius_sum,
        };
    }
    if dist < radius_difference - TOLERANCE {
        return CircleCircleHits::Nested {
            distance: dist,
            radius_difference,
        };
    }

    // Distance from c1 along the line c1→c2 to the radical line.
    let a = (r1 * r1 - r2 * r2 + dist_sq) / (2.0 * dist);
    let h = (r1 * r1 - a * a).max(0.0).sqrt();

    let axis = delta / dist;
    let mid = c1 + axis * a;
    let perp = Vector2::new(-axis.y, axis.x);

    if h < TOLERANCE {
        CircleCircleHits::Touching(mid)
    } else {
        CircleCircleHits::Crossing(mid + perp * h, mid - perp * h)
    }
}
