//! Planes

use rt_core::common::{Float, K_EPSILON};
use rt_core::geometry::{Hit, Point3f, Ray, Shape, Vector3f};
use rt_core::material::Material;
use std::sync::Arc;

/// An infinite plane given by a point and a normal.
pub struct Plane {
    /// A point on the plane.
    point: Point3f,

    /// Plane normal.
    normal: Vector3f,

    /// Surface material; `None` makes the plane a pure occluder.
    material: Option<Arc<Material>>,

    /// Self-intersection epsilon.
    ep: Float,

    /// Whether the plane occludes shadow rays.
    cast_shadow: bool,
}

impl Plane {
    /// Creates a new plane.
    ///
    /// * `point`    - A point on the plane.
    /// * `normal`   - Plane normal.
    /// * `material` - Surface material.
    pub fn new(point: Point3f, normal: Vector3f, material: Option<Arc<Material>>) -> Self {
        Self {
            point,
            normal,
            material,
            ep: 0.0,
            cast_shadow: true,
        }
    }

    /// Sets the self-intersection epsilon.
    ///
    /// * `ep` - Minimum accepted secondary-ray parameter.
    pub fn with_epsilon(mut self, ep: Float) -> Self {
        self.ep = ep;
        self
    }

    /// Sets whether the plane occludes shadow rays.
    ///
    /// * `enable` - The flag value.
    pub fn with_cast_shadow(mut self, enable: bool) -> Self {
        self.cast_shadow = enable;
        self
    }
}

impl Shape for Plane {
    /// Solves `t = (point − origin)·normal / direction·normal`.
    /// Near-parallel rays and negative parameters are misses.
    ///
    /// * `ray` - The ray to intersect.
    fn intersect(&self, ray: &Ray) -> Option<Hit> {
        let a = (self.point - ray.o).dot(&self.normal);
        let b = ray.d.dot(&self.normal);
        if b.abs() < K_EPSILON {
            return None;
        }
        let t = a / b;
        (t > 0.0).then(|| Hit::new(ray.point_at(t), t))
    }

    /// Returns the plane normal regardless of the point.
    fn normal_at(&self, _point: &Point3f) -> Vector3f {
        self.normal
    }

    fn material(&self) -> Option<Arc<Material>> {
        self.material.clone()
    }

    fn epsilon(&self) -> Float {
        self.ep
    }

    fn casts_shadow(&self) -> bool {
        self.cast_shadow
    }
}
