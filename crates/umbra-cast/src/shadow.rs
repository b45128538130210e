//! Shadow polygon assembly.

use umbra_geom::intersect::intersect_boundary;
use umbra_geom::{Aabb2, Edge, Polygon, Ray};
use umbra_math::Point2;

use crate::occluder::Occluder;
use crate::silhouette::silhouette_edges;

/// Project one silhouette edge away from the light onto the boundary.
///
/// The shadow of edge `(v0, v1)` is bounded by the edge itself, the two
/// projection rays through its endpoints, and the stretch of boundary
/// between the exit points; rectangle corners falling inside that stretch
/// are inserted so the polygon stays simple. The corner walk runs in the
/// same angular direction as from ray 0 to ray 1 around the light, which
/// keeps the winding consistent with the silhouette.
///
/// Projection rays are anchored at the silhouette vertices and point away
/// from the light, so the nearest boundary crossing is the exit beyond the
/// vertex even when the light sits outside the rectangle.
///
/// Returns `None` when the projection is degenerate: the light coincides
/// with an endpoint, or a ray never reaches the boundary.
pub fn cast_edge_shadow(
    light: &Point2,
    edge: &Edge,
    bounds: &Aabb2,
    eps: f64,
) -> Option<Polygon> {
    let d0 = edge.v0 - light;
    let d1 = edge.v1 - light;
    if d0.norm() <= eps || d1.norm() <= eps {
        return None;
    }

    let hit0 = intersect_boundary(&Ray::new(edge.v0, d0), bounds, eps)?;
    let hit1 = intersect_boundary(&Ray::new(edge.v1, d1), bounds, eps)?;

    let ccw = d0.x * d1.y - d0.y * d1.x > 0.0;
    let corners = corners_between(bounds, &hit0.point, &hit1.point, ccw, eps);

    let mut points = Vec::with_capacity(4 + corners.len());
    points.push(edge.v0);
    points.push(hit0.point);
    points.extend(corners);
    points.push(hit1.point);
    points.push(edge.v1);
    Some(Polygon::new(points))
}

/// All shadow polygons cast by one occluder, one per silhouette edge, in
/// silhouette-scan order.
///
/// Their union is the occluder's shadow; each polygon on its own is simple,
/// which also holds for non-convex occluders where a single merged outline
/// could self-intersect.
pub fn cast_occluder(
    light: &Point2,
    occluder: &Occluder,
    bounds: &Aabb2,
    eps: f64,
) -> Vec<Polygon> {
    silhouette_edges(occluder, light, eps)
        .iter()
        .filter_map(|edge| cast_edge_shadow(light, edge, bounds, eps))
        .collect()
}

/// Rectangle corners strictly between two perimeter points, walking the
/// perimeter in the given direction, ordered along the walk.
fn corners_between(
    bounds: &Aabb2,
    from: &Point2,
    to: &Point2,
    ccw: bool,
    eps: f64,
) -> Vec<Point2> {
    let total = bounds.perimeter();
    if total <= eps {
        return Vec::new();
    }
    let a = bounds.perimeter_coord(from);
    let b = bounds.perimeter_coord(to);
    let span = if ccw {
        (b - a).rem_euclid(total)
    } else {
        (a - b).rem_euclid(total)
    };

    let mut picked: Vec<(f64, Point2)> = bounds
        .corners()
        .iter()
        .filter_map(|&corner| {
            let c = bounds.perimeter_coord(&corner);
            let offset = if ccw {
                (c - a).rem_euclid(total)
            } else {
                (a - c).rem_euclid(total)
            };
            (offset > eps && offset < span - eps).then_some((offset, corner))
        })
        .collect();
    picked.sort_by(|x, y| x.0.partial_cmp(&y.0).unwrap_or(std::cmp::Ordering::Equal));
    picked.into_iter().map(|(_, corner)| corner).collect()
}
