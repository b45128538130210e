//! Scene state consumed by the caster.

use umbra_geom::{Aabb2, Rgba};
use umbra_math::{Point2, Vec2};

use crate::error::{CastError, Result};
use crate::occluder::Occluder;
use crate::shapes;

/// The shadow-casting scene for one frame: a point light, a fixed boundary
/// rectangle, and the occluders inside it.
///
/// The light position is updated per frame by the caller (typically from
/// the pointer); occluder rotation is advanced externally through
/// [`Scene::advance`] before each recomputation.
#[derive(Debug, Clone)]
pub struct Scene {
    /// Current light position.
    pub light: Point2,
    /// Fixed extents of the drawable area.
    pub boundary: Aabb2,
    occluders: Vec<Occluder>,
}

impl Scene {
    /// Create an empty scene with the given boundary.
    ///
    /// The light starts at the boundary center. Boundaries with
    /// non-positive or non-finite extents are rejected.
    pub fn new(boundary: Aabb2) -> Result<Self> {
        if !boundary.width().is_finite() || !boundary.height().is_finite() {
            return Err(CastError::InvalidBoundary("extents must be finite".into()));
        }
        if boundary.width() <= 0.0 || boundary.height() <= 0.0 {
            return Err(CastError::InvalidBoundary(
                "extents must be positive".into(),
            ));
        }
        Ok(Self {
            light: boundary.center(),
            boundary,
            occluders: Vec::new(),
        })
    }

    /// Add an occluder to the scene.
    pub fn add_occluder(&mut self, occluder: Occluder) {
        self.occluders.push(occluder);
    }

    /// Move the light.
    pub fn set_light(&mut self, light: Point2) {
        self.light = light;
    }

    /// The occluders in the scene.
    pub fn occluders(&self) -> &[Occluder] {
        &self.occluders
    }

    /// Number of occluders.
    pub fn len(&self) -> usize {
        self.occluders.len()
    }

    /// Check if the scene has no occluders.
    pub fn is_empty(&self) -> bool {
        self.occluders.is_empty()
    }

    /// Advance every rotating occluder by `dt` seconds.
    ///
    /// Rotation is serialized per occluder here; the recomputation itself
    /// only ever reads the vertex arrays.
    pub fn advance(&mut self, dt: f64) {
        for occ in &mut self.occluders {
            occ.advance(dt);
        }
    }
}

/// A ready-made demo scene: a 400x400 boundary box with the letters C and G
/// and a field of eight spinning triangles.
///
/// The per-triangle rotation speeds are deterministic alternating values so
/// the scene is reproducible.
pub fn demo_scene() -> Result<Scene> {
    let mut scene = Scene::new(Aabb2::centered(400.0, 400.0))?;

    scene.add_occluder(Occluder::new(
        "letter-c",
        &shapes::scaled(&shapes::letter_c(), 5.0, Vec2::new(-70.0, 0.0)),
        Rgba::RED,
    )?);
    scene.add_occluder(Occluder::new(
        "letter-g",
        &shapes::scaled(&shapes::letter_g(), 5.0, Vec2::new(100.0, 0.0)),
        Rgba::RED,
    )?);

    let triangle_positions = [
        (-120.0, 120.0),
        (-10.0, 170.0),
        (30.0, 90.0),
        (140.0, 110.0),
        (-140.0, -140.0),
        (-50.0, -170.0),
        (60.0, -120.0),
        (140.0, -110.0),
    ];
    for (i, &(x, y)) in triangle_positions.iter().enumerate() {
        let sign = if i % 2 == 0 { 1.0 } else { -1.0 };
        let speed = sign * (1.0 + 0.25 * i as f64);
        scene.add_occluder(
            Occluder::new(
                format!("triangle-{i}"),
                &shapes::scaled(&shapes::equilateral_triangle(10.0), 2.0, Vec2::new(x, y)),
                Rgba::RED,
            )?
            .with_rotation_speed(speed),
        );
    }

    Ok(scene)
}
