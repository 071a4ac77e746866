//! Environment Light

use crate::common::{Float, INV_PI};
use crate::geometry::Point2f;
use crate::sampler::{map_to_hemisphere, ArcSampler, SamplerError};
use crate::spectrum::Color;

/// Hemispherical light surrounding the scene; sampled with
/// cosine-weighted directions.
#[derive(Clone)]
pub struct EnvLight {
    /// Intensity scale.
    pub k: Float,

    /// Light color.
    pub c: Color,

    /// Strategy used to stratify the hemisphere directions.
    pub sampler: ArcSampler,

    /// Number of hemisphere directions per shading evaluation.
    pub num_samples: usize,
}

impl EnvLight {
    /// Creates a new environment light.
    ///
    /// * `k`           - Intensity scale.
    /// * `c`           - Light color.
    /// * `sampler`     - Sample strategy.
    /// * `num_samples` - Hemisphere directions per shading evaluation.
    pub fn new(k: Float, c: Color, sampler: ArcSampler, num_samples: usize) -> Self {
        Self {
            k,
            c,
            sampler,
            num_samples,
        }
    }

    /// Returns the scaled light color.
    pub fn color(&self) -> Color {
        self.c * self.k
    }

    /// Returns the probability density of a sampled direction with the
    /// given cosine to the surface normal.
    ///
    /// * `cos` - Cosine between the direction and the surface normal.
    pub fn pdf(&self, cos: Float) -> Float {
        cos * INV_PI
    }

    /// Generates a fresh batch of cosine-weighted hemisphere directions
    /// as `(φ, θ)` angle pairs.
    pub fn sample_hemisphere(&self) -> Result<Vec<Point2f>, SamplerError> {
        let samples = self.sampler.generate(self.num_samples)?;
        Ok(map_to_hemisphere(&samples, 1.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::PI;
    use float_cmp::approx_eq;

    struct FixedSampler;

    impl crate::sampler::Sampler for FixedSampler {
        fn generate(&self, n: usize) -> Result<Vec<Point2f>, SamplerError> {
            Ok(vec![Point2f::new(0.5, 0.5); n])
        }
    }

    #[test]
    fn pdf_is_cosine_over_pi() {
        let l = EnvLight::new(
            1.0,
            Color::new(1.0, 1.0, 1.0),
            std::sync::Arc::new(FixedSampler),
            4,
        );
        assert!(approx_eq!(Float, l.pdf(0.5), 0.5 / PI, epsilon = 1e-6));
    }

    #[test]
    fn hemisphere_batch_size() {
        let l = EnvLight::new(
            1.0,
            Color::new(1.0, 1.0, 1.0),
            std::sync::Arc::new(FixedSampler),
            8,
        );
        assert_eq!(l.sample_hemisphere().unwrap().len(), 8);
    }
}
