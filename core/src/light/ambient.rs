//! Ambient Light

use crate::common::Float;
use crate::spectrum::Color;

/// Constant background illumination with no direction.
#[derive(Copy, Clone, Debug)]
pub struct AmbientLight {
    /// Intensity scale.
    pub k: Float,

    /// Light color.
    pub c: Color,
}

impl AmbientLight {
    /// Creates a new ambient light.
    ///
    /// * `k` - Intensity scale.
    /// * `c` - Light color.
    pub fn new(k: Float, c: Color) -> Self {
        Self { k, c }
    }

    /// Returns the scaled light color.
    pub fn color(&self) -> Color {
        self.c * self.k
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scaled_color() {
        let l = AmbientLight::new(0.5, Color::new(1.0, 0.5, 0.0));
        assert_eq!(l.color(), Color::new(0.5, 0.25, 0.0));
    }
}
