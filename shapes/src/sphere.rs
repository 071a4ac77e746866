//! Spheres

use rt_core::common::Float;
use rt_core::geometry::{Hit, Point3f, Ray, Shape, Vector3f};
use rt_core::material::Material;
use std::sync::Arc;

/// A sphere given by center and radius.
pub struct Sphere {
    /// Center.
    center: Point3f,

    /// Radius.
    radius: Float,

    /// Surface material; `None` makes the sphere a pure occluder.
    material: Option<Arc<Material>>,

    /// Self-intersection epsilon.
    ep: Float,

    /// Whether the sphere occludes shadow rays.
    cast_shadow: bool,
}

impl Sphere {
    /// Creates a new sphere.
    ///
    /// * `center`   - Center.
    /// * `radius`   - Radius.
    /// * `material` - Surface material.
    pub fn new(center: Point3f, radius: Float, material: Option<Arc<Material>>) -> Self {
        Self {
            center,
            radius,
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

    /// Sets whether the sphere occludes shadow rays.
    ///
    /// * `enable` - The flag value.
    pub fn with_cast_shadow(mut self, enable: bool) -> Self {
        self.cast_shadow = enable;
        self
    }
}

impl Shape for Sphere {
    /// Solves the ray/sphere quadratic, keeping the smaller positive
    /// root; a negative discriminant or two non-positive roots is a
    /// miss, and a tangent root counts only if positive.
    ///
    /// * `ray` - The ray to intersect.
    fn intersect(&self, ray: &Ray) -> Option<Hit> {
        let oc = ray.o - self.center;
        let a = ray.d.dot(&ray.d);
        let b = 2.0 * oc.dot(&ray.d);
        let c = oc.dot(&oc) - self.radius * self.radius;

        let discriminant = b * b - 4.0 * a * c;
        if discriminant < 0.0 {
            return None;
        }

        if discriminant == 0.0 {
            let t = -b / (2.0 * a);
            return (t > 0.0).then(|| Hit::new(ray.point_at(t), t));
        }

        let sqrt_d = discriminant.sqrt();
        let t0 = (-b + sqrt_d) / (2.0 * a);
        let t1 = (-b - sqrt_d) / (2.0 * a);

        let t = if t0 <= 0.0 && t1 <= 0.0 {
            return None;
        } else if t1 > 0.0 {
            // t1 <= t0, so this is the near root (or the only positive one).
            t1
        } else {
            t0
        };
        Some(Hit::new(ray.point_at(t), t))
    }

    /// Returns the outward unit normal at a surface point.
    ///
    /// * `point` - The surface point.
    fn normal_at(&self, point: &Point3f) -> Vector3f {
        (*point - self.center).normalize()
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
