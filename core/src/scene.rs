//! Scene

use crate::common::Float;
use crate::geometry::{ArcShape, Point3f, Ray};
use crate::light::{AmbientLight, AreaLight, EnvLight, ParallelLight};
use std::sync::Arc;

/// Return value for `Scene::intersect()`: the nearest shape hit along a
/// ray.
#[derive(Clone)]
pub struct SceneHit {
    /// The shape that was hit.
    pub shape: ArcShape,

    /// The intersection point.
    pub point: Point3f,

    /// The ray parameter at the intersection.
    pub t: Float,
}

/// The scene: an ordered shape collection plus typed light slots. Built
/// once before rendering and read-only while tracing.
///
/// An area light's emitter shape must be added to the shape collection
/// as well; the two lists are not synchronized automatically.
#[derive(Default)]
pub struct Scene {
    shapes: Vec<ArcShape>,
    ambient_light: Option<AmbientLight>,
    parallel_light: Option<ParallelLight>,
    env_light: Option<EnvLight>,
    area_lights: Vec<AreaLight>,
}

impl Scene {
    /// Creates a new empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a shape.
    ///
    /// * `shape` - The shape.
    pub fn add_shape(&mut self, shape: ArcShape) {
        self.shapes.push(shape);
    }

    /// Returns all shapes.
    pub fn shapes(&self) -> &[ArcShape] {
        &self.shapes
    }

    /// Sets the ambient light.
    ///
    /// * `light` - The light.
    pub fn set_ambient_light(&mut self, light: AmbientLight) {
        self.ambient_light = Some(light);
    }

    /// Returns the ambient light, if present.
    pub fn ambient_light(&self) -> Option<&AmbientLight> {
        self.ambient_light.as_ref()
    }

    /// Sets the parallel light.
    ///
    /// * `light` - The light.
    pub fn set_parallel_light(&mut self, light: ParallelLight) {
        self.parallel_light = Some(light);
    }

    /// Returns the parallel light, if present.
    pub fn parallel_light(&self) -> Option<&ParallelLight> {
        self.parallel_light.as_ref()
    }

    /// Sets the environment light.
    ///
    /// * `light` - The light.
    pub fn set_env_light(&mut self, light: EnvLight) {
        self.env_light = Some(light);
    }

    /// Returns the environment light, if present.
    pub fn env_light(&self) -> Option<&EnvLight> {
        self.env_light.as_ref()
    }

    /// Adds an area light.
    ///
    /// * `light` - The light.
    pub fn add_area_light(&mut self, light: AreaLight) {
        self.area_lights.push(light);
    }

    /// Returns all area lights.
    pub fn area_lights(&self) -> &[AreaLight] {
        &self.area_lights
    }

    /// Returns true if any shadow-casting shape intersects the ray with
    /// parameter greater than `ep`. Used for shadow and occlusion tests;
    /// only existence matters, not the nearest hit.
    ///
    /// * `ray` - The ray.
    /// * `ep`  - Minimum accepted ray parameter.
    pub fn is_intersection(&self, ray: &Ray, ep: Float) -> bool {
        self.shapes
            .iter()
            .filter(|shape| shape.casts_shadow())
            .any(|shape| shape.intersect(ray).is_some_and(|hit| hit.t > ep))
    }

    /// Returns true if nothing occludes the segment between `p0` and
    /// `p1`. The probe ray runs from `p1` toward `p0`; a hit occludes
    /// only when its parameter falls strictly inside
    /// `(ep1, distance − ep0)`, so both endpoint surfaces are excused.
    ///
    /// * `p0`  - Segment end point.
    /// * `ep0` - Self-intersection epsilon of the surface at `p0`.
    /// * `p1`  - Segment start point.
    /// * `ep1` - Self-intersection epsilon of the surface at `p1`.
    pub fn is_two_points_visible(&self, p0: &Point3f, ep0: Float, p1: &Point3f, ep1: Float) -> bool {
        let d = *p0 - *p1;
        let l = d.length() - ep0;
        let ray = Ray::new(*p1, d.normalize());
        !self
            .shapes
            .iter()
            .filter(|shape| shape.casts_shadow())
            .any(|shape| {
                shape
                    .intersect(&ray)
                    .is_some_and(|hit| ep1 < hit.t && hit.t < l)
            })
    }

    /// Returns the nearest hit along the ray with parameter greater than
    /// `ep`, scanning every shape.
    ///
    /// * `ray` - The ray.
    /// * `ep`  - Self-intersection epsilon of the surface the ray
    ///           originates from; 0 for camera rays.
    pub fn intersect(&self, ray: &Ray, ep: Float) -> Option<SceneHit> {
        let mut nearest: Option<SceneHit> = None;
        for shape in &self.shapes {
            if let Some(hit) = shape.intersect(ray) {
                if hit.t < ep {
                    continue;
                }
                if nearest.as_ref().map_or(true, |n| hit.t < n.t) {
                    nearest = Some(SceneHit {
                        shape: Arc::clone(shape),
                        point: hit.point,
                        t: hit.t,
                    });
                }
            }
        }
        nearest
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{Hit, Shape, Vector3f};
    use crate::material::Material;

    /// Hits every ray at a fixed parameter.
    struct Wall {
        t: Float,
        cast_shadow: bool,
    }

    impl Shape for Wall {
        fn intersect(&self, ray: &Ray) -> Option<Hit> {
            Some(Hit::new(ray.point_at(self.t), self.t))
        }

        fn normal_at(&self, _point: &Point3f) -> Vector3f {
            Vector3f::new(0.0, 1.0, 0.0)
        }

        fn material(&self) -> Option<Arc<Material>> {
            None
        }

        fn epsilon(&self) -> Float {
            0.0
        }

        fn casts_shadow(&self) -> bool {
            self.cast_shadow
        }
    }

    fn probe_ray() -> Ray {
        Ray::new(Point3f::zero(), Vector3f::new(0.0, 0.0, 1.0))
    }

    #[test]
    fn occlusion_queries_skip_non_shadow_casting_shapes() {
        let mut scene = Scene::new();
        scene.add_shape(Arc::new(Wall {
            t: 5.0,
            cast_shadow: false,
        }));

        assert!(!scene.is_intersection(&probe_ray(), 0.001));
        assert!(scene.is_two_points_visible(
            &Point3f::new(0.0, 0.0, 10.0),
            0.001,
            &Point3f::zero(),
            0.001,
        ));
    }

    #[test]
    fn occlusion_queries_respect_shadow_casting_shapes() {
        let mut scene = Scene::new();
        scene.add_shape(Arc::new(Wall {
            t: 5.0,
            cast_shadow: true,
        }));

        assert!(scene.is_intersection(&probe_ray(), 0.001));
        assert!(!scene.is_two_points_visible(
            &Point3f::new(0.0, 0.0, 10.0),
            0.001,
            &Point3f::zero(),
            0.001,
        ));
    }

    #[test]
    fn nearest_hit_ignores_the_cast_shadow_flag() {
        let mut scene = Scene::new();
        scene.add_shape(Arc::new(Wall {
            t: 5.0,
            cast_shadow: false,
        }));
        scene.add_shape(Arc::new(Wall {
            t: 8.0,
            cast_shadow: true,
        }));

        let hit = scene.intersect(&probe_ray(), 0.0).unwrap();
        assert_eq!(hit.t, 5.0);
    }
}
