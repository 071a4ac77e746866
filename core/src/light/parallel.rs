//! Parallel Light

use crate::common::Float;
use crate::geometry::Vector3f;
use crate::spectrum::Color;

/// A directional light infinitely far away; all rays arrive along the
/// same direction.
#[derive(Copy, Clone, Debug)]
pub struct ParallelLight {
    /// Intensity scale.
    pub k: Float,

    /// Light color.
    pub c: Color,

    /// Direction the light travels, pointing away from the source.
    pub d: Vector3f,
}

impl ParallelLight {
    /// Creates a new parallel light.
    ///
    /// * `k` - Intensity scale.
    /// * `c` - Light color.
    /// * `d` - Direction the light travels.
    pub fn new(k: Float, c: Color, d: Vector3f) -> Self {
        Self { k, c, d }
    }

    /// Returns the scaled light color.
    pub fn color(&self) -> Color {
        self.c * self.k
    }

    /// Returns the direction the light travels.
    pub fn direction(&self) -> Vector3f {
        self.d
    }
}
