//! Common types and constants.

/// Use 32-bit precision for floating point numbers.
pub type Float = f32;

/// Default signed integer to 32-bit.
pub type Int = i32;

/// Infinity (∞)
pub const INFINITY: Float = Float::INFINITY;

/// PI (π)
pub const PI: Float = std::f32::consts::PI;

/// 1/PI (1/π)
pub const INV_PI: Float = 1.0 / PI;

/// 2*PI (2π)
pub const TWO_PI: Float = PI * 2.0;

/// Cutoff for near-parallel denominators and minimum accepted ray
/// parameters in the plane and triangle intersection tests.
pub const K_EPSILON: Float = 0.0001;

/// Returns the minimum of 2 numbers.
///
/// * `a` - First number.
/// * `b` - Second number.
#[inline(always)]
pub fn min(a: Float, b: Float) -> Float {
    if a < b {
        a
    } else {
        b
    }
}

/// Returns the maximum of 2 numbers.
///
/// * `a` - First number.
/// * `b` - Second number.
#[inline(always)]
pub fn max(a: Float, b: Float) -> Float {
    if a > b {
        a
    } else {
        b
    }
}

/// Clamps a value to given range.
///
/// * `x`    - The value.
/// * `low`  - Lower bound.
/// * `high` - Upper bound.
#[inline(always)]
pub fn clamp(x: Float, low: Float, high: Float) -> Float {
    if x < low {
        low
    } else if x > high {
        high
    } else {
        x
    }
}
