//! Rays

use super::{Point3f, Vector3f};
use crate::common::Float;

/// A ray with an origin and a direction. Immutable once constructed;
/// callers supply normalized directions.
#[derive(Copy, Clone, Debug)]
pub struct Ray {
    /// Origin.
    pub o: Point3f,

    /// Direction.
    pub d: Vector3f,
}

impl Ray {
    /// Creates a new ray.
    ///
    /// * `o` - Origin.
    /// * `d` - Direction.
    pub const fn new(o: Point3f, d: Vector3f) -> Self {
        Self { o, d }
    }

    /// Returns the point at the given parameter along the ray.
    ///
    /// * `t` - The ray parameter.
    pub fn point_at(&self, t: Float) -> Point3f {
        self.o + self.d * t
    }
}
