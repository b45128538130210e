#![warn(missing_docs)]

//! Silhouette shadow casting for 2D scenes.
//!
//! Given a point light, a set of polygonal occluders, and the rectangle
//! bounding the drawable area, this crate selects the occluder edges facing
//! the light, projects their endpoints outward to the boundary, and
//! assembles the shadow polygons an external renderer fills to darken the
//! scene.
//!
//! # Example
//!
//! ```ignore
//! use umbra_cast::{cast_scene, demo_scene, CasterSettings};
//!
//! let mut scene = demo_scene()?;
//! let settings = CasterSettings::default();
//! loop {
//!     scene.advance(dt);
//!     scene.set_light(pointer);
//!     let result = cast_scene(&scene, &settings)?;
//!     // hand result.shadows to the renderer
//! }
//! ```

pub mod error;
pub mod occluder;
pub mod scene;
pub mod shadow;
pub mod shapes;
pub mod silhouette;

pub use error::{CastError, Result};
pub use occluder::Occluder;
pub use scene::{demo_scene, Scene};
pub use shadow::{cast_edge_shadow, cast_occluder};
pub use silhouette::{facing, silhouette_edges, Facing};

use log::{debug, trace};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use umbra_geom::Polygon;
use umbra_math::Tolerance;

/// Shadow casting parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CasterSettings {
    /// Geometric tolerance used by facing classification and intersection.
    pub epsilon: f64,
}

impl Default for CasterSettings {
    fn default() -> Self {
        Self {
            epsilon: Tolerance::DEFAULT.linear,
        }
    }
}

impl CasterSettings {
    /// Validate settings.
    pub fn validate(&self) -> Result<()> {
        if !self.epsilon.is_finite() || self.epsilon <= 0.0 {
            return Err(CastError::InvalidSettings(
                "epsilon must be positive and finite".into(),
            ));
        }
        Ok(())
    }
}

/// The shadow cast by one occluder.
#[derive(Debug, Clone)]
pub struct OccluderShadow {
    /// Name of the occluder that cast this shadow.
    pub name: String,
    /// One simple polygon per silhouette edge, in silhouette-scan order;
    /// their union is the shadow. Empty when the occluder was entirely
    /// back-facing this frame.
    pub polygons: Vec<Polygon>,
}

/// Statistics about one recomputation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CastStats {
    /// Number of occluders in the scene.
    pub occluder_count: usize,
    /// Total shadow polygons produced.
    pub shadow_polygon_count: usize,
    /// Occluders that produced at least one shadow polygon.
    pub casting_occluders: usize,
    /// Summed polygon area; overlapping regions count once per polygon.
    pub total_area: f64,
}

/// Result of one shadow recomputation.
#[derive(Debug, Clone)]
pub struct SceneShadows {
    /// Per-occluder shadows, in scene order.
    pub shadows: Vec<OccluderShadow>,
    /// Recomputation statistics.
    pub stats: CastStats,
}

/// Recompute every occluder's shadow for the current light position.
///
/// Pure with respect to its inputs: the same scene state always produces
/// the same shadows, and each call runs to completion with nothing carried
/// over to the next frame. Occluders are independent and only read during
/// the computation, so they are cast in parallel.
pub fn cast_scene(scene: &Scene, settings: &CasterSettings) -> Result<SceneShadows> {
    settings.validate()?;

    let shadows: Vec<OccluderShadow> = scene
        .occluders()
        .par_iter()
        .map(|occ| {
            let polygons = cast_occluder(&scene.light, occ, &scene.boundary, settings.epsilon);
            trace!(
                "occluder '{}': {} shadow polygon(s)",
                occ.name(),
                polygons.len()
            );
            OccluderShadow {
                name: occ.name().to_string(),
                polygons,
            }
        })
        .collect();

    let shadow_polygon_count = shadows.iter().map(|s| s.polygons.len()).sum();
    let casting_occluders = shadows.iter().filter(|s| !s.polygons.is_empty()).count();
    let total_area: f64 = shadows
        .iter()
        .flat_map(|s| &s.polygons)
        .map(Polygon::area)
        .sum();

    let stats = CastStats {
        occluder_count: scene.occluders().len(),
        shadow_polygon_count,
        casting_occluders,
        total_area,
    };
    debug!(
        "cast {} polygon(s) from {}/{} occluder(s)",
        stats.shadow_polygon_count, stats.casting_occluders, stats.occluder_count
    );

    Ok(SceneShadows { shadows, stats })
}
