//! Occluder vertices.

use umbra_math::{Point2, Rotation};

use crate::color::Rgba;

/// A polygon vertex with its current and reference positions.
///
/// `base_position` is fixed at construction and is the source for every
/// rotation: the current position is always recomputed from it, so repeated
/// re-posing never accumulates error. The current position is kept in
/// integer screen coordinates once the vertex has been rotated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
    /// Current transformed position.
    pub position: Point2,
    /// Vertex color, independent of position.
    pub color: Rgba,
    base_position: Point2,
}

impl Vertex {
    /// Create a vertex at `position` with the given color.
    ///
    /// The initial position doubles as the reference the vertex rotates
    /// from.
    pub fn new(position: Point2, color: Rgba) -> Self {
        Self {
            position,
            color,
            base_position: position,
        }
    }

    /// The untransformed reference position.
    pub fn base_position(&self) -> Point2 {
        self.base_position
    }

    /// Rotate to an absolute angle (degrees) about `pivot`.
    ///
    /// The new position is recomputed from the reference position and
    /// rounded to integer screen coordinates. Calling this repeatedly with
    /// different angles never drifts.
    pub fn rotate(&mut self, angle_degrees: f64, pivot: Point2) {
        let rotated = Rotation::about(pivot, angle_degrees).apply(&self.base_position);
        self.position = Point2::new(rotated.x.round(), rotated.y.round());
    }

    /// Euclidean distance between the current positions of two vertices.
    pub fn distance(&self, other: &Vertex) -> f64 {
        (other.position - self.position).norm()
    }

    /// Is the segment to `other` steep, i.e. `|dx| < |dy|`?
    ///
    /// Steepness is a property of the segment: both endpoints report the
    /// same answer.
    pub fn is_steep(&self, other: &Vertex) -> bool {
        let d = other.position - self.position;
        d.x.abs() < d.y.abs()
    }

    /// Slope of the segment to `other`.
    ///
    /// Steep segments return the inverted slope `dx/dy` so near-vertical
    /// segments stay finite, the usual line-stepping convention. Only a
    /// zero-length segment yields a non-finite value; callers skip those.
    pub fn slope(&self, other: &Vertex) -> f64 {
        let d = other.position - self.position;
        if self.is_steep(other) {
            d.x / d.y
        } else {
            d.y / d.x
        }
    }

    /// Exchange the whole value with another vertex.
    ///
    /// After the swap the two vertices share no state; position, reference
    /// position and color all move together.
    pub fn swap_with(&mut self, other: &mut Vertex) {
        std::mem::swap(self, other);
    }
}
