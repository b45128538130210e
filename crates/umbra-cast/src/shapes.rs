//! Occluder outlines for the demo scene.
//!
//! All outlines are in model space around the origin; callers bake a scale
//! and translation with [`scaled`] before handing them to
//! [`Occluder::new`](crate::Occluder::new).

use umbra_math::{Point2, Vec2};

/// The letter C outline: the outer arc followed by the inner arc back.
pub fn letter_c() -> Vec<Point2> {
    vec![
        Point2::new(10.0, 10.0),
        Point2::new(5.0, 15.0),
        Point2::new(-10.0, 15.0),
        Point2::new(-20.0, 0.0),
        Point2::new(-10.0, -15.0),
        Point2::new(5.0, -15.0),
        Point2::new(10.0, -10.0),
        Point2::new(5.0, -12.0),
        Point2::new(-5.0, -10.0),
        Point2::new(-12.0, 0.0),
        Point2::new(-5.0, 10.0),
        Point2::new(5.0, 12.0),
    ]
}

/// The letter G outline: the C shape with the inner bar.
pub fn letter_g() -> Vec<Point2> {
    vec![
        Point2::new(10.0, 10.0),
        Point2::new(5.0, 15.0),
        Point2::new(-10.0, 15.0),
        Point2::new(-20.0, 0.0),
        Point2::new(-10.0, -15.0),
        Point2::new(5.0, -15.0),
        Point2::new(10.0, -10.0),
        Point2::new(10.0, -5.0),
        Point2::new(5.0, 2.0),
        Point2::new(-5.0, -3.0),
        Point2::new(3.0, -2.0),
        Point2::new(6.0, -7.0),
        Point2::new(-5.0, -10.0),
        Point2::new(-12.0, 0.0),
        Point2::new(-5.0, 10.0),
        Point2::new(5.0, 12.0),
    ]
}

/// An apex-up equilateral triangle with the given circumradius.
pub fn equilateral_triangle(radius: f64) -> Vec<Point2> {
    let (sin30, cos30) = 30f64.to_radians().sin_cos();
    vec![
        Point2::new(0.0, radius),
        Point2::new(-cos30 * radius, -sin30 * radius),
        Point2::new(cos30 * radius, -sin30 * radius),
    ]
}

/// Bake a uniform scale and a translation into an outline.
pub fn scaled(points: &[Point2], scale: f64, offset: Vec2) -> Vec<Point2> {
    points
        .iter()
        .map(|p| Point2::new(p.x * scale + offset.x, p.y * scale + offset.y))
        .collect()
}
