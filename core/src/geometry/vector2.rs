//! 2-D Vectors

use crate::common::Float;
use std::ops::Sub;

/// A 2-D vector of `Float` values; used for unit-square sample
/// coordinates.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Vector2f {
    /// X-coordinate.
    pub x: Float,

    /// Y-coordinate.
    pub y: Float,
}

/// A 2-D sample point.
pub type Point2f = Vector2f;

impl Vector2f {
    /// Creates a new 2-D vector.
    ///
    /// * `x` - X-coordinate.
    /// * `y` - Y-coordinate.
    pub const fn new(x: Float, y: Float) -> Self {
        Self { x, y }
    }
}

impl Sub for Vector2f {
    type Output = Self;

    /// Subtracts the given vector.
    ///
    /// * `other` - The vector to subtract.
    fn sub(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y)
    }
}
