//! 3-D Vectors

use crate::common::Float;
use std::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};

/// A 3-D vector of `Float` values.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Vector3f {
    /// X-coordinate.
    pub x: Float,

    /// Y-coordinate.
    pub y: Float,

    /// Z-coordinate.
    pub z: Float,
}

/// A 3-D point. Points and vectors share representation; the alias
/// documents intent at the call site.
pub type Point3f = Vector3f;

impl Vector3f {
    /// Creates a new 3-D vector.
    ///
    /// * `x` - X-coordinate.
    /// * `y` - Y-coordinate.
    /// * `z` - Z-coordinate.
    pub const fn new(x: Float, y: Float, z: Float) -> Self {
        Self { x, y, z }
    }

    /// Creates a new 3-D zero vector.
    pub const fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    /// Returns the dot product with another vector.
    ///
    /// * `other` - The other vector.
    pub fn dot(&self, other: &Self) -> Float {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Returns the cross product with another vector.
    ///
    /// * `other` - The other vector.
    pub fn cross(&self, other: &Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Reflects a direction `l` about the normal `n`.
    ///
    /// Both `n` and `l` point away from the surface; so does the result.
    ///
    /// * `n` - The surface normal.
    /// * `l` - The direction to reflect.
    pub fn reflect(n: &Self, l: &Self) -> Self {
        *n * (2.0 * n.dot(l)) - *l
    }

    /// Returns the square of the vector's length.
    pub fn length_squared(&self) -> Float {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    /// Returns the vector's length.
    pub fn length(&self) -> Float {
        self.length_squared().sqrt()
    }

    /// Returns the unit vector. The zero vector is returned unchanged
    /// rather than dividing by zero.
    pub fn normalize(&self) -> Self {
        let l = self.length();
        if l == 0.0 {
            *self
        } else {
            Self::new(self.x / l, self.y / l, self.z / l)
        }
    }
}

impl Add for Vector3f {
    type Output = Self;

    /// Adds the given vector.
    ///
    /// * `other` - The vector to add.
    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}

impl AddAssign for Vector3f {
    /// Adds the given vector.
    ///
    /// * `other` - The vector to add.
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl Sub for Vector3f {
    type Output = Self;

    /// Subtracts the given vector.
    ///
    /// * `other` - The vector to subtract.
    fn sub(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}

impl SubAssign for Vector3f {
    /// Subtracts the given vector.
    ///
    /// * `other` - The vector to subtract.
    fn sub_assign(&mut self, other: Self) {
        *self = *self - other;
    }
}

impl Mul<Float> for Vector3f {
    type Output = Self;

    /// Scales the vector uniformly.
    ///
    /// * `f` - The scale factor.
    fn mul(self, f: Float) -> Self {
        Self::new(self.x * f, self.y * f, self.z * f)
    }
}

impl Neg for Vector3f {
    type Output = Self;

    /// Flips the sign of every coordinate.
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}
