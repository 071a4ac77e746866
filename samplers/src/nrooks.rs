//! N-Rooks Sampler.

use rand::Rng;
use rt_core::common::Float;
use rt_core::geometry::Point2f;
use rt_core::sampler::{Sampler, SamplerError};

/// Places `n` samples so that no two share a row or a column of the
/// `n×n` grid, like n rooks on a chess board: one sample per row, with
/// the column drawn from a shrinking pool without replacement.
#[derive(Copy, Clone, Debug, Default)]
pub struct NRooksSampler;

impl NRooksSampler {
    /// Creates a new `NRooksSampler`.
    pub fn new() -> Self {
        Self
    }
}

impl Sampler for NRooksSampler {
    /// Generates `n` row/column-unique samples.
    ///
    /// * `n` - Number of samples.
    fn generate(&self, n: usize) -> Result<Vec<Point2f>, SamplerError> {
        let step = 1.0 / n as Float;
        let mut rng = rand::thread_rng();
        let mut columns: Vec<usize> = (0..n).collect();

        Ok((0..n)
            .map(|row| {
                let col = columns.swap_remove(rng.gen_range(0..columns.len()));
                Point2f::new(
                    (col as Float + rng.gen::<Float>()) * step,
                    (row as Float + rng.gen::<Float>()) * step,
                )
            })
            .collect())
    }
}
