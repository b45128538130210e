//! Occluder polygons.

use umbra_geom::{Edge, Polygon, Rgba, Vertex};
use umbra_math::{Point2, Tolerance};

use crate::error::{CastError, Result};

/// A polygonal occluder that blocks light.
///
/// Owns its vertices exclusively; nothing else aliases them. The vertex
/// list is cyclic: the edge from the last vertex back to the first is
/// implicit. Winding is normalized to counter-clockwise at construction so
/// the silhouette classification never has to branch on it.
#[derive(Debug, Clone)]
pub struct Occluder {
    name: String,
    vertices: Vec<Vertex>,
    pivot: Point2,
    rotation_speed: f64,
    angle: f64,
}

impl Occluder {
    /// Create an occluder from an ordered outline.
    ///
    /// An explicit closing point (the first point repeated at the end) and
    /// consecutive duplicate points are trimmed. Outlines with fewer than
    /// three distinct vertices or with zero area are rejected here, so the
    /// per-frame computation never sees them. The rotation pivot defaults
    /// to the centroid of the outline.
    pub fn new(name: impl Into<String>, outline: &[Point2], color: Rgba) -> Result<Self> {
        let name = name.into();
        let tol = Tolerance::DEFAULT;

        let mut points: Vec<Point2> = outline.to_vec();
        points.dedup_by(|a, b| tol.points_equal(a, b));
        if points.len() > 1 {
            let first = points[0];
            let last = points[points.len() - 1];
            if tol.points_equal(&first, &last) {
                points.pop();
            }
        }

        if points.len() < 3 {
            return Err(CastError::TooFewVertices {
                name,
                count: points.len(),
            });
        }

        let mut polygon = Polygon::new(points);
        if tol.is_zero(polygon.signed_area()) {
            return Err(CastError::DegenerateOccluder(name));
        }
        polygon.ensure_ccw();

        let pivot = polygon.centroid();
        let vertices = polygon
            .points
            .iter()
            .map(|&p| Vertex::new(p, color))
            .collect();

        Ok(Self {
            name,
            vertices,
            pivot,
            rotation_speed: 0.0,
            angle: 0.0,
        })
    }

    /// Use a custom rotation pivot instead of the outline centroid.
    pub fn with_pivot(mut self, pivot: Point2) -> Self {
        self.pivot = pivot;
        self
    }

    /// Set the rotation speed in degrees per second.
    pub fn with_rotation_speed(mut self, degrees_per_second: f64) -> Self {
        self.rotation_speed = degrees_per_second;
        self
    }

    /// Occluder name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current vertices, in counter-clockwise order.
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// The rotation pivot.
    pub fn pivot(&self) -> Point2 {
        self.pivot
    }

    /// Current absolute rotation angle in degrees.
    pub fn angle(&self) -> f64 {
        self.angle
    }

    /// Configured rotation speed in degrees per second.
    pub fn rotation_speed(&self) -> f64 {
        self.rotation_speed
    }

    /// Rotate to an absolute angle in degrees.
    ///
    /// Every vertex recomputes its position from its reference position, so
    /// the occluder can be re-posed arbitrarily often without accumulating
    /// error.
    pub fn set_angle(&mut self, angle_degrees: f64) {
        self.angle = angle_degrees;
        let pivot = self.pivot;
        for v in &mut self.vertices {
            v.rotate(angle_degrees, pivot);
        }
    }

    /// Advance the rotation by `dt` seconds at the configured speed.
    ///
    /// Static occluders (speed zero) are left untouched.
    pub fn advance(&mut self, dt: f64) {
        if self.rotation_speed != 0.0 {
            self.set_angle(self.angle + self.rotation_speed * dt);
        }
    }

    /// Edges derived from the current vertex positions, in cyclic order.
    pub fn edges(&self) -> Vec<Edge> {
        let n = self.vertices.len();
        (0..n)
            .map(|i| {
                Edge::new(
                    self.vertices[i].position,
                    self.vertices[(i + 1) % n].position,
                )
            })
            .collect()
    }

    /// The outline polygon at the current positions.
    pub fn outline(&self) -> Polygon {
        Polygon::new(self.vertices.iter().map(|v| v.position).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn square(size: f64) -> Vec<Point2> {
        vec![
            Point2::new(0.0, 0.0),
            Point2::new(size, 0.0),
            Point2::new(size, size),
            Point2::new(0.0, size),
        ]
    }

    #[test]
    fn test_too_few_vertices_rejected() {
        let err = Occluder::new("bad", &square(10.0)[..2], Rgba::WHITE).unwrap_err();
        assert!(matches!(err, CastError::TooFewVertices { count: 2, .. }));
    }

    #[test]
    fn test_closing_point_trimmed() {
        let mut points = square(10.0);
        points.push(points[0]);
        let occ = Occluder::new("square", &points, Rgba::WHITE).unwrap();
        assert_eq!(occ.vertices().len(), 4);
    }

    #[test]
    fn test_collinear_outline_rejected() {
        let points = [
            Point2::new(0.0, 0.0),
            Point2::new(5.0, 0.0),
            Point2::new(10.0, 0.0),
        ];
        let err = Occluder::new("line", &points, Rgba::WHITE).unwrap_err();
        assert!(matches!(err, CastError::DegenerateOccluder(_)));
    }

    #[test]
    fn test_cw_input_normalized_to_ccw() {
        let mut points = square(10.0);
        points.reverse();
        let occ = Occluder::new("square", &points, Rgba::WHITE).unwrap();
        assert!(occ.outline().is_ccw());
    }

    #[test]
    fn test_default_pivot_is_centroid() {
        let occ = Occluder::new("square", &square(10.0), Rgba::WHITE).unwrap();
        assert_eq!(occ.pivot(), Point2::new(5.0, 5.0));
    }

    #[test]
    fn test_set_angle_is_absolute() {
        let mut occ = Occluder::new("square", &square(10.0), Rgba::WHITE).unwrap();
        let initial: Vec<_> = occ.vertices().iter().map(|v| v.position).collect();
        occ.set_angle(90.0);
        occ.set_angle(180.0);
        occ.set_angle(0.0);
        let back: Vec<_> = occ.vertices().iter().map(|v| v.position).collect();
        assert_eq!(initial, back);
    }

    #[test]
    fn test_rotation_preserves_winding() {
        let mut occ = Occluder::new("square", &square(10.0), Rgba::WHITE).unwrap();
        occ.set_angle(37.0);
        assert!(occ.outline().is_ccw());
    }

    #[test]
    fn test_advance_uses_speed() {
        let mut occ = Occluder::new("square", &square(10.0), Rgba::WHITE)
            .unwrap()
            .with_rotation_speed(90.0);
        occ.advance(0.5);
        assert_abs_diff_eq!(occ.angle(), 45.0, epsilon = 1e-12);

        let mut fixed = Occluder::new("static", &square(10.0), Rgba::WHITE).unwrap();
        fixed.advance(0.5);
        assert_eq!(fixed.angle(), 0.0);
    }

    #[test]
    fn test_edges_are_cyclic() {
        let occ = Occluder::new("square", &square(10.0), Rgba::WHITE).unwrap();
        let edges = occ.edges();
        assert_eq!(edges.len(), 4);
        assert_eq!(edges[3].v1, edges[0].v0);
    }
}
