//! Multi-Jittered Sampler.

use crate::grid_side;
use itertools::iproduct;
use rand::Rng;
use rt_core::common::Float;
use rt_core::geometry::Point2f;
use rt_core::sampler::{Sampler, SamplerError};

/// Combines jittered and n-rooks stratification: one sample per cell of
/// a coarse `t×t` grid, with the sub-cell placement drawn from per-row
/// and per-column pools without replacement so the n-rooks property
/// holds inside every row band and column band of the fine `n×n` grid.
/// The sample count must be a perfect square.
#[derive(Copy, Clone, Debug, Default)]
pub struct MultiJitteredSampler;

impl MultiJitteredSampler {
    /// Creates a new `MultiJitteredSampler`.
    pub fn new() -> Self {
        Self
    }
}

impl Sampler for MultiJitteredSampler {
    /// Generates `n = t²` multi-jittered samples.
    ///
    /// * `n` - Number of samples; must be a perfect square.
    fn generate(&self, n: usize) -> Result<Vec<Point2f>, SamplerError> {
        let t = grid_side(n)?;
        let step = 1.0 / n as Float;
        let mut rng = rand::thread_rng();

        // One shrinking pool per column band and per row band.
        let mut col_pools: Vec<Vec<usize>> = (0..t).map(|_| (0..t).collect()).collect();
        let mut row_pools: Vec<Vec<usize>> = (0..t).map(|_| (0..t).collect()).collect();

        Ok(iproduct!(0..t, 0..t)
            .map(|(i, j)| {
                let ck = rng.gen_range(0..col_pools[j].len());
                let col = col_pools[j].swap_remove(ck);
                let rk = rng.gen_range(0..row_pools[i].len());
                let row = row_pools[i].swap_remove(rk);
                Point2f::new(
                    ((j * t + col) as Float + rng.gen::<Float>()) * step,
                    ((i * t + row) as Float + rng.gen::<Float>()) * step,
                )
            })
            .collect())
    }
}
