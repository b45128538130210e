//! Ray-segment intersection (parametric, Cramer's rule).

use umbra_math::Point2;

use crate::edge::Edge;
use crate::ray::Ray;

/// Result of a ray-edge intersection.
#[derive(Debug, Clone, Copy)]
pub struct SegmentHit {
    /// Parameter along the ray (`origin + t * direction`).
    pub t: f64,
    /// Parameter along the edge (`v0 + s * (v1 - v0)`), in `[0, 1]`.
    pub s: f64,
    /// Intersection point, evaluated on the edge.
    pub point: Point2,
}

/// Intersect a ray with an edge.
///
/// Solves the 2x2 linear system
///
/// ```text
/// t*dx - s*(v1x - v0x) = v0x - ox
/// t*dy - s*(v1y - v0y) = v0y - oy
/// ```
///
/// by Cramer's rule. Returns `None` when the ray and edge are parallel or
/// the edge is degenerate (the determinant vanishes), when the hit lies
/// behind the ray origin, or when it falls outside the segment. An `s`
/// within `eps` of an endpoint is clamped into `[0, 1]` so endpoint hits
/// are not lost to floating-point error; the returned point is evaluated on
/// the edge, so a clamped hit lands exactly on the endpoint.
pub fn intersect_segment(ray: &Ray, edge: &Edge, eps: f64) -> Option<SegmentHit> {
    let d = ray.direction;
    let e = edge.direction();

    let det = d.x * (edge.v0.y - edge.v1.y) - d.y * (edge.v0.x - edge.v1.x);

    // Parallel, collinear, or degenerate: the determinant scales with
    // |d|*|e|*sin(angle), so compare against that magnitude.
    if det.abs() <= eps * d.norm() * e.norm() {
        return None;
    }

    let b = edge.v0 - ray.origin;
    let t = (e.x * b.y - e.y * b.x) / det;
    let s = (d.x * b.y - d.y * b.x) / det;

    // Behind the ray origin.
    if t < -eps {
        return None;
    }
    let t = t.max(0.0);

    // Outside the segment, with an epsilon band at the endpoints.
    if s < -eps || s > 1.0 + eps {
        return None;
    }
    let s = s.clamp(0.0, 1.0);

    Some(SegmentHit {
        t,
        s,
        point: edge.v0 + e * s,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use umbra_math::Vec2;

    #[test]
    fn test_crossing_segments() {
        let ray = Ray::new(Point2::new(0.0, 0.0), Vec2::new(1.0, 1.0));
        let edge = Edge::new(Point2::new(0.0, 10.0), Point2::new(10.0, 0.0));
        let hit = intersect_segment(&ray, &edge, 1e-9).unwrap();
        assert_abs_diff_eq!(hit.t, 5.0, epsilon = 1e-9);
        assert_abs_diff_eq!(hit.s, 0.5, epsilon = 1e-9);
        assert_abs_diff_eq!(hit.point, Point2::new(5.0, 5.0), epsilon = 1e-9);
    }

    #[test]
    fn test_parallel_is_no_hit() {
        let ray = Ray::new(Point2::new(0.0, 0.0), Vec2::new(1.0, 0.0));
        let edge = Edge::new(Point2::new(0.0, 5.0), Point2::new(10.0, 5.0));
        assert!(intersect_segment(&ray, &edge, 1e-9).is_none());
    }

    #[test]
    fn test_collinear_is_no_hit() {
        let ray = Ray::new(Point2::new(0.0, 0.0), Vec2::new(1.0, 0.0));
        let edge = Edge::new(Point2::new(3.0, 0.0), Point2::new(8.0, 0.0));
        assert!(intersect_segment(&ray, &edge, 1e-9).is_none());
    }

    #[test]
    fn test_degenerate_edge_is_no_hit() {
        let ray = Ray::new(Point2::new(0.0, 0.0), Vec2::new(1.0, 0.0));
        let edge = Edge::new(Point2::new(5.0, 0.0), Point2::new(5.0, 0.0));
        assert!(intersect_segment(&ray, &edge, 1e-9).is_none());
    }

    #[test]
    fn test_behind_origin_is_no_hit() {
        let ray = Ray::new(Point2::new(0.0, 0.0), Vec2::new(1.0, 0.0));
        let edge = Edge::new(Point2::new(-5.0, -5.0), Point2::new(-5.0, 5.0));
        assert!(intersect_segment(&ray, &edge, 1e-9).is_none());
    }

    #[test]
    fn test_beside_segment_is_no_hit() {
        let ray = Ray::new(Point2::new(0.0, 10.0), Vec2::new(1.0, 0.0));
        let edge = Edge::new(Point2::new(5.0, 0.0), Point2::new(5.0, 5.0));
        assert!(intersect_segment(&ray, &edge, 1e-9).is_none());
    }

    #[test]
    fn test_endpoint_hit_is_clamped() {
        let ray = Ray::new(Point2::new(0.0, 0.0), Vec2::new(1.0, 1.0));
        // The segment end sits exactly on the ray; tiny float error in s
        // must not lose the hit.
        let edge = Edge::new(Point2::new(4.0, 10.0), Point2::new(7.0, 7.0));
        let hit = intersect_segment(&ray, &edge, 1e-9).unwrap();
        assert_abs_diff_eq!(hit.s, 1.0, epsilon = 1e-9);
        assert_abs_diff_eq!(hit.point, Point2::new(7.0, 7.0), epsilon = 1e-9);
    }

    #[test]
    fn test_hit_from_non_unit_direction() {
        // Same geometry as the crossing test with a scaled direction; t
        // scales inversely, the point does not move.
        let ray = Ray::new(Point2::new(0.0, 0.0), Vec2::new(10.0, 10.0));
        let edge = Edge::new(Point2::new(0.0, 10.0), Point2::new(10.0, 0.0));
        let hit = intersect_segment(&ray, &edge, 1e-9).unwrap();
        assert!((hit.t - 0.5).abs() < 1e-9);
        assert!((hit.point.x - 5.0).abs() < 1e-9);
    }
}
