//! Squares

use crate::Triangle;
use rt_core::common::Float;
use rt_core::geometry::{Hit, Point2f, Point3f, Ray, Shape, Vector3f};
use rt_core::material::Material;
use std::sync::Arc;

/// A finite square given by center, side length and normal, represented
/// internally as two triangles sharing the diagonal. The only primitive
/// usable as an area-light emitter: it exposes surface area and a
/// unit-square → surface sample mapping.
pub struct Square {
    /// Center.
    center: Point3f,

    /// Side length.
    size: Float,

    /// Surface normal.
    normal: Vector3f,

    /// Right basis vector in the square's plane.
    right: Vector3f,

    /// Up basis vector in the square's plane.
    up: Vector3f,

    /// Half covering triangle.
    tr0: Triangle,

    /// Other half covering triangle.
    tr1: Triangle,

    /// Surface material; `None` makes the square a pure occluder.
    material: Option<Arc<Material>>,

    /// Self-intersection epsilon.
    ep: Float,

    /// Whether the square occludes shadow rays.
    cast_shadow: bool,
}

impl Square {
    /// Creates a new square.
    ///
    /// * `center`   - Center.
    /// * `size`     - Side length.
    /// * `normal`   - Surface normal.
    /// * `material` - Surface material.
    pub fn new(center: Point3f, size: Float, normal: Vector3f, material: Option<Arc<Material>>) -> Self {
        let world_up = Vector3f::new(0.0, 1.0, 0.0);
        let (right, up) = if normal.dot(&world_up).abs() < 0.9999 {
            let right = world_up.cross(&normal).normalize();
            let up = normal.cross(&right).normalize();
            (right, up)
        } else if normal.y > 0.0 {
            (Vector3f::new(1.0, 0.0, 0.0), Vector3f::new(0.0, 0.0, -1.0))
        } else {
            (Vector3f::new(-1.0, 0.0, 0.0), Vector3f::new(0.0, 0.0, 1.0))
        };

        let half = size / 2.0;
        let t0 = center - right * half + up * half;
        let t1 = center + right * half + up * half;
        let t2 = center + right * half - up * half;
        let t3 = center - right * half - up * half;

        Self {
            center,
            size,
            normal,
            right,
            up,
            tr0: Triangle::new(t0, t1, t2, None),
            tr1: Triangle::new(t0, t2, t3, None),
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

    /// Sets whether the square occludes shadow rays.
    ///
    /// * `enable` - The flag value.
    pub fn with_cast_shadow(mut self, enable: bool) -> Self {
        self.cast_shadow = enable;
        self
    }
}

impl Shape for Square {
    /// Tries the first covering triangle, then the second.
    ///
    /// * `ray` - The ray to intersect.
    fn intersect(&self, ray: &Ray) -> Option<Hit> {
        self.tr0.intersect(ray).or_else(|| self.tr1.intersect(ray))
    }

    /// Returns the square's normal regardless of the point.
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

    fn area(&self) -> Float {
        self.size * self.size
    }

    /// Maps a unit-square sample to a surface point: center the sample,
    /// scale by the side length and project onto the right/up basis.
    ///
    /// * `u` - The unit-square sample.
    fn sample_point(&self, u: &Point2f) -> Option<Point3f> {
        let centered = *u - Point2f::new(0.5, 0.5);
        Some(self.center + self.right * (centered.x * self.size) + self.up * (centered.y * self.size))
    }
}
