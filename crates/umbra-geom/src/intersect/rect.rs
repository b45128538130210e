//! Ray-boundary intersection against the scene rectangle.

use umbra_math::Point2;

use super::segment::intersect_segment;
use crate::bounds::Aabb2;
use crate::edge::Edge;
use crate::ray::Ray;

/// Which side of the boundary rectangle a ray exited through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RectSide {
    /// The `y = min.y` side.
    Bottom,
    /// The `x = max.x` side.
    Right,
    /// The `y = max.y` side.
    Top,
    /// The `x = min.x` side.
    Left,
}

/// Result of a ray-boundary intersection.
#[derive(Debug, Clone, Copy)]
pub struct BoundaryHit {
    /// Parameter along the ray.
    pub t: f64,
    /// Exit point on the rectangle perimeter.
    pub point: Point2,
    /// Side of the rectangle that was hit.
    pub side: RectSide,
}

/// Intersect a ray with the scene boundary rectangle.
///
/// Runs the parametric segment test against all four sides and keeps the
/// smallest positive `t`. A ray starting inside the rectangle always exits
/// through exactly one side; `None` is only possible for a degenerate
/// direction or for an origin outside the rectangle with the ray pointing
/// away.
pub fn intersect_boundary(ray: &Ray, bounds: &Aabb2, eps: f64) -> Option<BoundaryHit> {
    let [c0, c1, c2, c3] = bounds.corners();
    let sides = [
        (RectSide::Bottom, Edge::new(c0, c1)),
        (RectSide::Right, Edge::new(c1, c2)),
        (RectSide::Top, Edge::new(c2, c3)),
        (RectSide::Left, Edge::new(c3, c0)),
    ];

    let mut best: Option<BoundaryHit> = None;
    for (side, edge) in sides {
        if let Some(hit) = intersect_segment(ray, &edge, eps) {
            // Positive t only: a ray leaving from a point on the perimeter
            // must not report its own origin.
            if hit.t <= eps {
                continue;
            }
            if best.map_or(true, |b| hit.t < b.t) {
                best = Some(BoundaryHit {
                    t: hit.t,
                    point: hit.point,
                    side,
                });
            }
        }
    }
    best
}
