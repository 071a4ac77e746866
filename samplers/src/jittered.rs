//! Jittered Sampler.

use crate::grid_side;
use itertools::iproduct;
use rand::Rng;
use rt_core::common::Float;
use rt_core::geometry::Point2f;
use rt_core::sampler::{Sampler, SamplerError};

/// Partitions the unit square into a `t×t` grid and places one jittered
/// sample in every cell. The sample count must be a perfect square.
#[derive(Copy, Clone, Debug, Default)]
pub struct JitteredSampler;

impl JitteredSampler {
    /// Creates a new `JitteredSampler`.
    pub fn new() -> Self {
        Self
    }
}

impl Sampler for JitteredSampler {
    /// Generates `n = t²` samples, one per grid cell.
    ///
    /// * `n` - Number of samples; must be a perfect square.
    fn generate(&self, n: usize) -> Result<Vec<Point2f>, SamplerError> {
        let t = grid_side(n)?;
        let step = 1.0 / t as Float;
        let mut rng = rand::thread_rng();
        Ok(iproduct!(0..t, 0..t)
            .map(|(i, j)| {
                Point2f::new(
                    (j as Float + rng.gen::<Float>()) * step,
                    (i as Float + rng.gen::<Float>()) * step,
                )
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sixteen_samples_in_unit_square() {
        let samples = JitteredSampler::new().generate(16).unwrap();
        assert_eq!(samples.len(), 16);
        for s in &samples {
            assert!((0.0..1.0).contains(&s.x));
            assert!((0.0..1.0).contains(&s.y));
        }
    }

    #[test]
    fn one_sample_per_cell() {
        let samples = JitteredSampler::new().generate(16).unwrap();
        for (k, s) in samples.iter().enumerate() {
            let (i, j) = (k / 4, k % 4);
            assert!(s.x >= j as Float * 0.25 && s.x < (j + 1) as Float * 0.25);
            assert!(s.y >= i as Float * 0.25 && s.y < (i + 1) as Float * 0.25);
        }
    }

    #[test]
    fn non_square_count_is_an_error() {
        assert_eq!(
            JitteredSampler::new().generate(15),
            Err(SamplerError::NotPerfectSquare(15))
        );
    }
}
