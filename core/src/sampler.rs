//! Samplers

use crate::common::{Float, TWO_PI};
use crate::geometry::Point2f;
use std::sync::Arc;

/// Errors reported by sample generation.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SamplerError {
    /// The strategy stratifies a t×t grid and requires a perfect-square
    /// sample count.
    #[error("sample count {0} is not a perfect square")]
    NotPerfectSquare(usize),
}

/// Sampler trait provides common behavior for unit-square point-set
/// generators.
///
/// `generate` returns a fresh batch on every call rather than mutating
/// internal state, so a sampler can be shared freely across rendering
/// threads. Randomized strategies return a different batch each call;
/// low-discrepancy strategies are deterministic.
pub trait Sampler: Send + Sync {
    /// Generates `n` sample points inside `[0,1)²`.
    ///
    /// * `n` - Number of samples.
    fn generate(&self, n: usize) -> Result<Vec<Point2f>, SamplerError>;
}

/// Atomic reference counted `Sampler`.
pub type ArcSampler = Arc<dyn Sampler>;

/// Remaps unit-square samples onto a cosine-power-weighted hemisphere
/// parameterization, rewriting each `(u, v)` as `(φ, θ)` with
/// `φ = 2π·u` and `θ = acos((1−v)^{1/(e+1)})`.
///
/// * `samples` - Unit-square samples to remap.
/// * `e`       - Cosine-power exponent (1 gives cosine weighting).
pub fn map_to_hemisphere(samples: &[Point2f], e: Float) -> Vec<Point2f> {
    samples
        .iter()
        .map(|s| {
            let phi = TWO_PI * s.x;
            let theta = (1.0 - s.y).powf(1.0 / (e + 1.0)).acos();
            Point2f::new(phi, theta)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::PI;

    #[test]
    fn hemisphere_remap_ranges() {
        let samples = [
            Point2f::new(0.0, 0.0),
            Point2f::new(0.25, 0.5),
            Point2f::new(0.99, 0.99),
        ];
        for s in map_to_hemisphere(&samples, 1.0) {
            assert!((0.0..TWO_PI).contains(&s.x));
            assert!((0.0..=PI / 2.0 + 1e-4).contains(&s.y));
        }
    }

    #[test]
    fn hemisphere_remap_pole() {
        // v = 0 maps to the pole (θ = 0) for any exponent.
        let mapped = map_to_hemisphere(&[Point2f::new(0.0, 0.0)], 1.0);
        assert_eq!(mapped[0].y, 0.0);
    }
}
