#![warn(missing_docs)]

//! Math types for the umbra shadow caster.
//!
//! Thin wrappers around nalgebra providing the 2D types the silhouette
//! engine works in: points, vectors, a pivot-anchored rotation, and
//! tolerance constants.

use nalgebra::Vector2;

/// A point in 2D scene space.
pub type Point2 = nalgebra::Point2<f64>;

/// A vector in 2D scene space.
pub type Vec2 = Vector2<f64>;

/// A 2D rotation about a fixed pivot point.
///
/// Built from an angle in degrees. The sine/cosine pair is computed once so
/// the same rotation can be applied to every vertex of a polygon.
#[derive(Debug, Clone, Copy)]
pub struct Rotation {
    sin: f64,
    cos: f64,
    pivot: Point2,
}

impl Rotation {
    /// Rotation by `angle_degrees` about `pivot`.
    pub fn about(pivot: Point2, angle_degrees: f64) -> Self {
        let (sin, cos) = angle_degrees.to_radians().sin_cos();
        Self { sin, cos, pivot }
    }

    /// Apply the rotation to a point.
    ///
    /// Translates so the pivot sits at the origin, applies the standard 2D
    /// rotation matrix, and translates back.
    pub fn apply(&self, p: &Point2) -> Point2 {
        let x = p.x - self.pivot.x;
        let y = p.y - self.pivot.y;
        Point2::new(
            x * self.cos - y * self.sin + self.pivot.x,
            x * self.sin + y * self.cos + self.pivot.y,
        )
    }
}

/// Tolerance constants for geometric comparisons.
#[derive(Debug, Clone, Copy)]
pub struct Tolerance {
    /// Linear distance tolerance in scene units.
    pub linear: f64,
}

impl Tolerance {
    /// Default tolerance (1e-9 scene units).
    pub const DEFAULT: Self = Self { linear: 1e-9 };

    /// Check if a scalar distance is effectively zero.
    pub fn is_zero(&self, d: f64) -> bool {
        d.abs() < self.linear
    }

    /// Check if two points are coincident within tolerance.
    pub fn points_equal(&self, a: &Point2, b: &Point2) -> bool {
        (a - b).norm() < self.linear
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotation_zero_is_identity() {
        let rot = Rotation::about(Point2::new(100.0, 100.0), 0.0);
        let p = Point2::new(110.0, 95.0);
        let r = rot.apply(&p);
        assert!((r - p).norm() < 1e-12);
    }

    #[test]
    fn test_rotation_90_about_pivot() {
        let pivot = Point2::new(100.0, 100.0);
        let rot = Rotation::about(pivot, 90.0);
        // (110, 100) is 10 units along +x from the pivot; a quarter turn
        // moves it 10 units along +y.
        let r = rot.apply(&Point2::new(110.0, 100.0));
        assert!((r.x - 100.0).abs() < 1e-9);
        assert!((r.y - 110.0).abs() < 1e-9);
    }

    #[test]
    fn test_rotation_roundtrip() {
        let pivot = Point2::new(3.0, -7.0);
        let p = Point2::new(12.5, 4.25);
        for angle in [1.0, 33.3, 90.0, 179.0, 270.0, 715.0] {
            let there = Rotation::about(pivot, angle).apply(&p);
            let back = Rotation::about(pivot, -angle).apply(&there);
            assert!((back - p).norm() < 1e-9, "angle {angle}");
        }
    }

    #[test]
    fn test_rotation_full_turn() {
        let pivot = Point2::new(0.0, 0.0);
        let p = Point2::new(5.0, 8.0);
        let r = Rotation::about(pivot, 360.0).apply(&p);
        assert!((r - p).norm() < 1e-9);
    }

    #[test]
    fn test_tolerance_points_equal() {
        let tol = Tolerance::DEFAULT;
        let a = Point2::new(1.0, 2.0);
        let b = Point2::new(1.0 + 1e-10, 2.0);
        assert!(tol.points_equal(&a, &b));
        let c = Point2::new(1.001, 2.0);
        assert!(!tol.points_equal(&a, &c));
    }

    #[test]
    fn test_tolerance_is_zero() {
        let tol = Tolerance::DEFAULT;
        assert!(tol.is_zero(1e-12));
        assert!(tol.is_zero(-1e-12));
        assert!(!tol.is_zero(1e-3));
    }
}
