//! Samplers

mod hammersley;
mod jittered;
mod multi_jittered;
mod nrooks;
mod random;

// Re-export
pub use hammersley::*;
pub use jittered::*;
pub use multi_jittered::*;
pub use nrooks::*;
pub use random::*;

use rt_core::sampler::SamplerError;

/// Returns the side length `t` of the `t×t` stratification grid for a
/// perfect-square sample count, or the invalid-argument error.
///
/// * `n` - Requested sample count.
pub(crate) fn grid_side(n: usize) -> Result<usize, SamplerError> {
    let t = (n as f64).sqrt().round() as usize;
    if t * t == n {
        Ok(t)
    } else {
        Err(SamplerError::NotPerfectSquare(n))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_side_accepts_squares() {
        assert_eq!(grid_side(16), Ok(4));
        assert_eq!(grid_side(1), Ok(1));
    }

    #[test]
    fn grid_side_rejects_non_squares() {
        assert_eq!(grid_side(15), Err(SamplerError::NotPerfectSquare(15)));
    }
}
