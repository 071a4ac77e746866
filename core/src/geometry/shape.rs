//! Shapes

use super::{Point2f, Point3f, Ray, Vector3f};
use crate::common::Float;
use crate::material::Material;
use std::sync::Arc;

/// Return value for `Shape::intersect()`.
#[derive(Copy, Clone, Debug)]
pub struct Hit {
    /// The intersection point.
    pub point: Point3f,

    /// The ray parameter at the intersection; always positive.
    pub t: Float,
}

impl Hit {
    /// Returns a new `Hit`.
    ///
    /// * `point` - The intersection point.
    /// * `t`     - The ray parameter at the intersection.
    pub fn new(point: Point3f, t: Float) -> Self {
        Self { point, t }
    }
}

/// Shape trait provides common behavior for geometric primitives.
pub trait Shape: Send + Sync {
    /// Intersects a ray with the shape, returning the nearest hit with
    /// a positive ray parameter, if any.
    ///
    /// * `ray` - The ray to intersect.
    fn intersect(&self, ray: &Ray) -> Option<Hit>;

    /// Returns the surface normal at a point on the shape.
    ///
    /// * `point` - The surface point.
    fn normal_at(&self, point: &Point3f) -> Vector3f;

    /// Returns the surface material, if any. A shape without a material
    /// is a pure occluder.
    fn material(&self) -> Option<Arc<Material>>;

    /// Returns the minimum ray parameter accepted when this shape is the
    /// origin of a secondary ray (self-intersection guard).
    fn epsilon(&self) -> Float;

    /// Returns whether the shape occludes shadow and visibility rays.
    fn casts_shadow(&self) -> bool;

    /// Returns the surface area for shapes usable as area-light
    /// emitters; 0.0 for everything else.
    fn area(&self) -> Float {
        0.0
    }

    /// Maps a unit-square sample coordinate onto the shape's surface.
    /// Only emitter-capable shapes implement this.
    ///
    /// * `u` - The unit-square sample.
    fn sample_point(&self, _u: &Point2f) -> Option<Point3f> {
        None
    }
}

/// Atomic reference counted `Shape`.
pub type ArcShape = Arc<dyn Shape>;
