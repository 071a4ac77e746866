//! Random Sampler.

use rand::Rng;
use rt_core::common::Float;
use rt_core::geometry::Point2f;
use rt_core::sampler::{Sampler, SamplerError};

/// Generates independent uniformly random samples with no
/// stratification.
#[derive(Copy, Clone, Debug, Default)]
pub struct RandomSampler;

impl RandomSampler {
    /// Creates a new `RandomSampler`.
    pub fn new() -> Self {
        Self
    }
}

impl Sampler for RandomSampler {
    /// Generates `n` independent uniform draws from `[0,1)²`.
    ///
    /// * `n` - Number of samples.
    fn generate(&self, n: usize) -> Result<Vec<Point2f>, SamplerError> {
        let mut rng = rand::thread_rng();
        Ok((0..n)
            .map(|_| Point2f::new(rng.gen::<Float>(), rng.gen::<Float>()))
            .collect())
    }
}
