//! Hammersley Sampler.

use rt_core::common::Float;
use rt_core::geometry::Point2f;
use rt_core::sampler::{Sampler, SamplerError};

/// Deterministic low-discrepancy point set: `x_i = i/n` and `y_i` the
/// base-2 radical inverse of `i`. Identical output for identical `n`.
#[derive(Copy, Clone, Debug, Default)]
pub struct HammersleySampler;

impl HammersleySampler {
    /// Creates a new `HammersleySampler`.
    pub fn new() -> Self {
        Self
    }
}

/// Reverses the bits of `v` around the radix point in base 2.
///
/// * `v` - The index to invert.
fn radical_inverse_base2(mut v: usize) -> Float {
    let mut x = 0.0;
    let mut f = 0.5;
    while v != 0 {
        x += f * (v & 1) as Float;
        v >>= 1;
        f *= 0.5;
    }
    x
}

impl Sampler for HammersleySampler {
    /// Generates the first `n` Hammersley points.
    ///
    /// * `n` - Number of samples.
    fn generate(&self, n: usize) -> Result<Vec<Point2f>, SamplerError> {
        Ok((0..n)
            .map(|i| Point2f::new(i as Float / n as Float, radical_inverse_base2(i)))
            .collect())
    }
}
