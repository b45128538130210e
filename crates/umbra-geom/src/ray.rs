//! Ray representation for silhouette projection.

use umbra_math::{Point2, Vec2};

/// A 2D ray from `origin` along `direction`.
///
/// Constructed transiently per intersection query; the direction does not
/// need to be unit length.
#[derive(Debug, Clone, Copy)]
pub struct Ray {
    /// Origin point of the ray.
    pub origin: Point2,
    /// Direction of the ray.
    pub direction: Vec2,
}

impl Ray {
    /// Create a ray from origin and direction.
    pub fn new(origin: Point2, direction: Vec2) -> Self {
        Self { origin, direction }
    }

    /// Ray from `origin` aimed through `target`.
    pub fn through(origin: Point2, target: Point2) -> Self {
        Self::new(origin, target - origin)
    }

    /// Evaluate the ray at parameter `t`: `origin + t * direction`.
    #[inline]
    pub fn at(&self, t: f64) -> Point2 {
        self.origin + self.direction * t
    }
}
