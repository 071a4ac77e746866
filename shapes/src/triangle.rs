//! Triangles

use rt_core::common::{Float, K_EPSILON};
use rt_core::geometry::{Hit, Point3f, Ray, Shape, Vector3f};
use rt_core::material::Material;
use std::sync::Arc;

/// A triangle given by three vertices. The geometric normal is the
/// normalized cross product of the edges out of `v0`.
pub struct Triangle {
    /// First vertex.
    v0: Point3f,

    /// Second vertex.
    v1: Point3f,

    /// Third vertex.
    v2: Point3f,

    /// Geometric normal.
    normal: Vector3f,

    /// Surface material; `None` makes the triangle a pure occluder.
    material: Option<Arc<Material>>,

    /// Self-intersection epsilon.
    ep: Float,

    /// Whether the triangle occludes shadow rays.
    cast_shadow: bool,
}

impl Triangle {
    /// Creates a new triangle.
    ///
    /// * `v0`       - First vertex.
    /// * `v1`       - Second vertex.
    /// * `v2`       - Third vertex.
    /// * `material` - Surface material.
    pub fn new(v0: Point3f, v1: Point3f, v2: Point3f, material: Option<Arc<Material>>) -> Self {
        let e0 = (v1 - v0).normalize();
        let e1 = (v2 - v0).normalize();
        Self {
            v0,
            v1,
            v2,
            normal: e0.cross(&e1).normalize(),
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

    /// Sets whether the triangle occludes shadow rays.
    ///
    /// * `enable` - The flag value.
    pub fn with_cast_shadow(mut self, enable: bool) -> Self {
        self.cast_shadow = enable;
        self
    }
}

impl Shape for Triangle {
    /// Barycentric solve via Cramer's rule on the edge-vector linear
    /// system. A near-singular determinant, a negative barycentric
    /// coordinate, a coordinate sum above one, or a parameter below the
    /// minimum threshold is a miss.
    ///
    /// * `ray` - The ray to intersect.
    fn intersect(&self, ray: &Ray) -> Option<Hit> {
        let a = self.v0.x - self.v1.x;
        let b = self.v0.x - self.v2.x;
        let c = ray.d.x;
        let d = self.v0.x - ray.o.x;

        let e = self.v0.y - self.v1.y;
        let f = self.v0.y - self.v2.y;
        let g = ray.d.y;
        let h = self.v0.y - ray.o.y;

        let i = self.v0.z - self.v1.z;
        let j = self.v0.z - self.v2.z;
        let k = ray.d.z;
        let l = self.v0.z - ray.o.z;

        let m = f * k - g * j;
        let n = h * k - g * l;
        let p = f * l - h * j;
        let q = g * i - e * k;
        let s = e * j - f * i;

        let denom = a * m + b * q + c * s;
        if denom.abs() < K_EPSILON {
            return None;
        }
        let inv_denom = 1.0 / denom;

        let beta = (d * m - b * n - c * p) * inv_denom;
        if beta < 0.0 {
            return None;
        }

        let r = e * l - h * i;
        let gamma = (a * n + d * q + c * r) * inv_denom;
        if gamma < 0.0 {
            return None;
        }

        if beta + gamma > 1.0 {
            return None;
        }

        let t = (a * p - b * r + d * s) * inv_denom;
        if t < K_EPSILON {
            return None;
        }

        Some(Hit::new(ray.point_at(t), t))
    }

    /// Returns the geometric normal regardless of the point.
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
