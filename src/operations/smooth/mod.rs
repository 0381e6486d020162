pub mod fillet;
pub mod offset;
pub mod solve;
mod splice;

use tracing::debug;

use crate::error::{OperationError, Result};
use crate::geometry::ArcSpline;
use crate::math::{KINK_TOLERANCE, TOLERANCE};

/// Rounds every kink of an arc-spline with a circular fillet of a fixed radius.
///
/// The result is position-continuous everywhere and tangent-continuous at
/// every replaced corner. The input spline is never modified.
///
/// # Algorithm
///
/// 1. Detect kinks on the input spline
/// 2. Per kink: offset both adjacent segments toward the inside of the turn,
///    intersect the offsets to find the fillet center, and project the center
///    back onto the segments to get the tangent points
/// 3. Splice all fillets into a new vertex sequence in one forward pass
///
/// Any kink that cannot be filleted aborts the whole operation; there is no
/// partial result.
#[derive(Debug)]
pub struct CornerSmooth {
    spline: ArcSpline,
    radius: f64,
    kink_tolerance: f64,
}

impl CornerSmooth {
    /// Creates a new smoothing operation.
    #[must_use]
    pub fn new(spline: ArcSpline, radius: f64) -> Self {
        Self {
            spline,
            radius,
            kink_tolerance: KINK_TOLERANCE,
        }
    }

    /// Overrides the threshold used to classify vertices as kinks.
    #[must_use]
    pub fn with_kink_tolerance(mut self, tolerance: f64) -> Self {
        self.kink_tolerance = tolerance;
        self
    }

    /// Executes the smoothing, returning a new spline.
    ///
    /// # Errors
    ///
    /// - `OperationError::InvalidInput` for a non-finite or non-positive
    ///   radius or kink tolerance
    /// - `NonSmoothableError` if any kink has no fillet of the requested radius
    pub fn execute(&self) -> Result<ArcSpline> {
        if !self.radius.is_finite() || self.radius <= TOLERANCE {
            return Err(OperationError::InvalidInput(format!(
                "fillet radius must be positive and finite, got {}",
                self.radius
            ))
            .into());
        }
        if !self.kink_tolerance.is_finite() || self.kink_tolerance <= 0.0 {
            return Err(OperationError::InvalidInput(format!(
                "kink tolerance must be positive and finite, got {}",
                self.kink_tolerance
            ))
            .into());
        }

        let kinks = self.spline.kinks_with_tolerance(self.kink_tolerance);
        debug!(
            vertices = self.spline.vertex_count(),
            kinks = kinks.len(),
            radius = self.radius,
            closed = self.spline.is_closed(),
            "smoothing arc-spline"
        );
        if kinks.is_empty() {
            return Ok(self.spline.clone());
        }

        let fillets = kinks
            .iter()
            .map(|&kink| {
                fillet::build(&self.spline, kink, self.radius).inspect_err(|err| {
                    debug!(kink, %err, "kink is not smoothable");
                })
            })
            .collect::<Result<Vec<_>>>()?;

        splice::splice(&self.spline, &fillets)
    }
}

/// Smooths every kink of `spline` with a fillet of `radius`.
///
/// # Errors
///
/// See [`CornerSmooth::execute`].
pub fn smooth(spline: &ArcSpline, radius: f64) -> Result<ArcSpline> {
    CornerSmooth::new(spline.clone(), radius).execute()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::f64::consts::FRAC_PI_8;

    use super::*;
    use crate::error::{ArcSplineError, NonSmoothableError};
    use crate::geometry::Vertex;

    fn square(side: f64) -> ArcSpline {
        ArcSpline::new(
            vec![
                Vertex::line(0.0, 0.0),
                Vertex::line(side, 0.0),
                Vertex::line(side, side),
                Vertex::line(0.0, side),
            ],
            true,
        )
        .unwrap()
    }

    #[test]
    fn square_becomes_rounded_rectangle() {
        let result = smooth(&square(10.0), 1.0).unwrap();
        let v = result.vertices();
        assert_eq!(v.len(), 8);
        assert!(result.is_closed());
        let b = FRAC_PI_8.tan();
        let expected = [
            (0.0, 1.0, b),
            (1.0, 0.0, 0.0),
            (9.0, 0.0, b),
            (10.0, 1.0, 0.0),
            (10.0, 9.0, b),
            (9.0, 10.0, 0.0),
            (1.0, 10.0, b),
            (0.0, 9.0, 0.0),
        ];
        for (got, (x, y, bulge)) in v.iter().zip(expected) {
            assert!(
                (got.x - x).abs() < 1e-9 && (got.y - y).abs() < 1e-9 && (got.bulge - bulge).abs() < 1e-9,
                "got {got:?}, want ({x}, {y}, {bulge})"
            );
        }
    }

    #[test]
    fn input_is_untouched() {
        let input = square(4.0);
        let copy = input.clone();
        let _ = smooth(&input, 1.0).unwrap();
        assert_eq!(input, copy);
    }

    #[test]
    fn smooth_spline_is_returned_unchanged() {
        let spline = ArcSpline::new(
            vec![Vertex::line(0.0, 0.0), Vertex::line(5.0, 0.0)],
            false,
        )
        .unwrap();
        assert_eq!(smooth(&spline, 1.0).unwrap(), spline);
    }

    #[test]
    fn invalid_radius_is_rejected() {
        for radius in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let err = smooth(&square(4.0), radius).unwrap_err();
            assert!(
                matches!(err, ArcSplineError::Operation(OperationError::InvalidInput(_))),
                "radius {radius}: {err}"
            );
        }
    }

    #[test]
    fn invalid_kink_tolerance_is_rejected() {
        let err = CornerSmooth::new(square(4.0), 1.0)
            .with_kink_tolerance(-1.0)
            .execute()
            .unwrap_err();
        assert!(matches!(err, ArcSplineError::Operation(_)));
    }

    #[test]
    fn coarse_kink_tolerance_skips_shallow_corners() {
        // 1° bend: |left - right| ≈ 0.0175.
        let angle = 1.0_f64.to_radians();
        let spline = ArcSpline::new(
            vec![
                Vertex::line(0.0, 0.0),
                Vertex::line(10.0, 0.0),
                Vertex::line(10.0 + 10.0 * angle.cos(), 10.0 * angle.sin()),
            ],
            false,
        )
        .unwrap();
        let coarse = CornerSmooth::new(spline.clone(), 1.0)
            .with_kink_tolerance(0.1)
            .execute()
            .unwrap();
        assert_eq!(coarse, spline);
        let fine = CornerSmooth::new(spline, 1.0).execute().unwrap();
        assert_eq!(fine.vertex_count(), 4);
    }

    #[test]
    fn radius_too_large_for_square() {
        let err = smooth(&square(2.0), 1.5).unwrap_err();
        assert!(matches!(
            err,
            ArcSplineError::NonSmoothable(NonSmoothableError::OverlappingFillets { .. })
        ));
    }

    #[test]
    fn half_side_radius_makes_a_circle() {
        let result = smooth(&square(2.0), 1.0).unwrap();
        assert_eq!(result.vertex_count(), 4);
        assert!(result.kinks().is_empty(), "kinks={:?}", result.kinks());
        for v in result.vertices() {
            assert!((v.bulge - FRAC_PI_8.tan()).abs() < 1e-9, "{v:?}");
        }
    }
}
