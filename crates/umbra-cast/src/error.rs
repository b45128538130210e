//! Error types for the shadow caster.

use thiserror::Error;

/// Errors raised while building a scene or validating settings.
///
/// Per-frame geometry problems are not represented here: degenerate edges
/// and parallel ray/edge pairs are skipped, an entirely back-facing
/// occluder yields an empty shadow, and an out-of-bounds light just
/// produces whatever the intersection math yields. Malformed input is
/// rejected at construction time instead.
#[derive(Error, Debug)]
pub enum CastError {
    /// Occluder outline has fewer than three distinct vertices.
    #[error("occluder '{name}' has {count} distinct vertices, need at least 3")]
    TooFewVertices {
        /// Occluder name.
        name: String,
        /// Number of distinct vertices after trimming duplicates.
        count: usize,
    },

    /// Occluder outline encloses no area.
    #[error("occluder '{0}' is degenerate (zero area)")]
    DegenerateOccluder(String),

    /// Scene boundary rectangle is invalid.
    #[error("invalid boundary: {0}")]
    InvalidBoundary(String),

    /// Invalid caster settings.
    #[error("invalid settings: {0}")]
    InvalidSettings(String),
}

/// Result type for caster operations.
pub type Result<T> = std::result::Result<T, CastError>;
