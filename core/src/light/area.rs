//! Area Light

use crate::common::Float;
use crate::geometry::{ArcShape, Point3f};
use crate::sampler::{ArcSampler, SamplerError};
use std::sync::Arc;

/// An emitter wrapping a surface-sampleable shape. The shape must also
/// be added to the scene's shape list by the caller so the emitter is
/// directly visible and occludes other rays.
#[derive(Clone)]
pub struct AreaLight {
    /// The emitter shape. Carries the emissive material.
    pub shape: ArcShape,

    /// Strategy used to stratify sample points over the emitter.
    pub sampler: ArcSampler,

    /// Number of surface samples per shading evaluation.
    pub num_samples: usize,
}

impl AreaLight {
    /// Creates a new area light.
    ///
    /// * `shape`       - The emitter shape; must support surface sampling.
    /// * `sampler`     - Sample strategy.
    /// * `num_samples` - Surface samples per shading evaluation.
    pub fn new(shape: ArcShape, sampler: ArcSampler, num_samples: usize) -> Self {
        debug_assert!(shape.area() > 0.0, "area light shape must be sampleable");
        Self {
            shape: Arc::clone(&shape),
            sampler,
            num_samples,
        }
    }

    /// Returns the probability density of a surface sample point,
    /// uniform over the emitter area.
    pub fn pdf(&self) -> Float {
        1.0 / self.shape.area()
    }

    /// Generates a fresh stratified batch of sample points on the
    /// emitter surface.
    pub fn sample_points(&self) -> Result<Vec<Point3f>, SamplerError> {
        let samples = self.sampler.generate(self.num_samples)?;
        Ok(samples
            .iter()
            .filter_map(|u| self.shape.sample_point(u))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{Hit, Point2f, Ray, Shape, Vector3f};
    use crate::material::Material;
    use crate::sampler::Sampler;
    use float_cmp::approx_eq;

    struct FlatEmitter {
        size: Float,
    }

    impl Shape for FlatEmitter {
        fn intersect(&self, _ray: &Ray) -> Option<Hit> {
            None
        }

        fn normal_at(&self, _point: &Point3f) -> Vector3f {
            Vector3f::new(0.0, -1.0, 0.0)
        }

        fn material(&self) -> Option<Arc<Material>> {
            None
        }

        fn epsilon(&self) -> Float {
            0.0
        }

        fn casts_shadow(&self) -> bool {
            true
        }

        fn area(&self) -> Float {
            self.size * self.size
        }

        fn sample_point(&self, u: &Point2f) -> Option<Point3f> {
            Some(Point3f::new(u.x * self.size, 0.0, u.y * self.size))
        }
    }

    struct FixedSampler;

    impl Sampler for FixedSampler {
        fn generate(&self, n: usize) -> Result<Vec<Point2f>, SamplerError> {
            Ok(vec![Point2f::new(0.5, 0.5); n])
        }
    }

    #[test]
    fn pdf_is_inverse_area() {
        let light = AreaLight::new(
            Arc::new(FlatEmitter { size: 40.0 }),
            Arc::new(FixedSampler),
            4,
        );
        assert!(approx_eq!(Float, light.pdf(), 1.0 / 1600.0, epsilon = 1e-9));
    }

    #[test]
    fn sample_batch_maps_onto_the_surface() {
        let light = AreaLight::new(
            Arc::new(FlatEmitter { size: 40.0 }),
            Arc::new(FixedSampler),
            8,
        );
        let points = light.sample_points().unwrap();
        assert_eq!(points.len(), 8);
        assert_eq!(points[0], Point3f::new(20.0, 0.0, 20.0));
    }
}
