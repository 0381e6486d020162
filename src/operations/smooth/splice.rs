use tracing::trace;

use crate::error::{NonSmoothableError, Result};
use crate::geometry::{ArcSpline, Segment, Vertex};
use crate::math::arc_2d::bulge_from_arc;
use crate::math::{Point2, PARAM_TOLERANCE};

use super::fillet::Fillet;

/// How a segment of the original spline survives the fillets at its ends.
#[derive(Debug, Clone, Copy)]
struct Trimmed {
    bulge: f64,
    /// The fillets meet (or reach the far vertex): nothing of the segment is left.
    collapsed: bool,
}

/// Writes the output vertex sequence in one forward pass over the original
/// vertices, replacing every filleted kink by its two tangent points.
///
/// # Errors
///
/// `NonSmoothableError::OverlappingFillets` when two fillets claim the same
/// stretch of a segment, or any validation error of [`ArcSpline::new`].
pub fn splice(spline: &ArcSpline, fillets: &[Fillet]) -> Result<ArcSpline> {
    let vertices = spline.vertices();
    let n = vertices.len();

    let mut by_vertex: Vec<Option<&Fillet>> = vec![None; n];
    for fillet in fillets {
        by_vertex[fillet.kink] = Some(fillet);
    }

    let trimmed = (0..spline.segment_count())
        .map(|j| {
            let segment = spline.segment(j).ok_or(NonSmoothableError::NoValidCandidate)?;
            trim(
                j,
                &segment,
                vertices[j].bulge,
                by_vertex[j].map(|f| f.right_point),
                by_vertex[(j + 1) % n].map(|f| f.left_point),
            )
        })
        .collect::<Result<Vec<_>>>()?;

    let mut out = Vec::with_capacity(n + fillets.len());
    for (i, vertex) in vertices.iter().enumerate() {
        let outgoing = trimmed.get(i);
        if let Some(fillet) = by_vertex[i] {
            out.push(Vertex::at(&fillet.left_point, fillet.bulge));
            if let Some(seg) = outgoing.filter(|s| !s.collapsed) {
                out.push(Vertex::at(&fillet.right_point, seg.bulge));
            }
        } else {
            match outgoing {
                Some(seg) if seg.collapsed => {}
                Some(seg) => out.push(Vertex::new(vertex.x, vertex.y, seg.bulge)),
                None => out.push(*vertex),
            }
        }
    }

    ArcSpline::new(out, spline.is_closed())
}

/// Shortens segment `index` to start at `start` and end at `end` (each
/// defaulting to the original endpoint) and recomputes its bulge.
fn trim(
    index: usize,
    segment: &Segment,
    bulge: f64,
    start: Option<Point2>,
    end: Option<Point2>,
) -> Result<Trimmed> {
    if start.is_none() && end.is_none() {
        return Ok(Trimmed {
            bulge,
            collapsed: false,
        });
    }

    let param = |p: Option<Point2>, default: f64| -> Result<f64> {
        match p {
            Some(p) => segment
                .param_of(&p)
                .ok_or_else(|| NonSmoothableError::OverlappingFillets { segment: index }.into()),
            None => Ok(default),
        }
    };
    let t_start = param(start, 0.0)?;
    let t_end = param(end, 1.0)?;

    if t_start > t_end + PARAM_TOLERANCE {
        return Err(NonSmoothableError::OverlappingFillets { segment: index }.into());
    }
    let collapsed = t_end - t_start <= PARAM_TOLERANCE;

    let bulge = match segment {
        Segment::Arc(arc) if !collapsed => bulge_from_arc(
            &start.unwrap_or_else(|| segment.start()),
            &end.unwrap_or_else(|| segment.end()),
            &arc.center(),
            arc.direction().is_ccw(),
        ),
        _ => bulge,
    };

    trace!(segment = index, t_start, t_end, collapsed, bulge, "trimmed segment");

    Ok(Trimmed { bulge, collapsed })
}
