//! Shading interaction

use crate::camera::Camera;
use crate::common::Float;
use crate::geometry::{Point3f, Ray, Vector3f};
use crate::material::Material;
use crate::scene::Scene;
use crate::spectrum::Color;
use std::sync::Arc;

/// Per-intersection shading context, assembled fresh for every hit and
/// discarded after the hit is shaded.
#[derive(Clone)]
pub struct ShadeInfo {
    /// The intersection point.
    pub point: Point3f,

    /// Surface normal at the intersection.
    pub normal: Vector3f,

    /// Material of the hit surface.
    pub material: Arc<Material>,

    /// Self-intersection epsilon of the hit shape.
    pub ep: Float,

    /// Current recursion depth; 0 for camera rays.
    pub depth: usize,

    /// Maximum recursion depth configured at the tracer.
    pub max_depth: usize,

    /// The incident ray that produced this hit.
    pub ray: Ray,
}

impl ShadeInfo {
    /// Creates a new shading context.
    ///
    /// * `point`     - The intersection point.
    /// * `normal`    - Surface normal at the intersection.
    /// * `material`  - Material of the hit surface.
    /// * `ep`        - Self-intersection epsilon of the hit shape.
    /// * `depth`     - Current recursion depth.
    /// * `max_depth` - Maximum recursion depth.
    /// * `ray`       - The incident ray.
    pub fn new(
        point: Point3f,
        normal: Vector3f,
        material: Arc<Material>,
        ep: Float,
        depth: usize,
        max_depth: usize,
        ray: Ray,
    ) -> Self {
        Self {
            point,
            normal,
            material,
            ep,
            depth,
            max_depth,
            ray,
        }
    }
}

/// Shader trait: turns a shading context into outgoing radiance.
/// Implementations may recurse through the scene for indirect terms.
pub trait Shader: Send + Sync {
    /// Returns the outgoing radiance at the hit point.
    ///
    /// * `info`   - The shading context.
    /// * `scene`  - The scene.
    /// * `camera` - The camera (for eye-direction dependent terms).
    fn shade(&self, info: &ShadeInfo, scene: &Scene, camera: &Camera) -> Color;
}

/// Atomic reference counted `Shader`.
pub type ArcShader = Arc<dyn Shader>;
