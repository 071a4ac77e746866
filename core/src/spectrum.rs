//! RGB Color

use crate::common::{clamp, Float};
use std::ops::{Add, AddAssign, Mul};

/// An RGB color triple. Channels are logically unbounded but intended
/// to lie in [0, 1].
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Color {
    /// Red channel.
    pub r: Float,

    /// Green channel.
    pub g: Float,

    /// Blue channel.
    pub b: Float,
}

impl Color {
    /// Black.
    pub const BLACK: Color = Color::new(0.0, 0.0, 0.0);

    /// Creates a new color.
    ///
    /// * `r` - Red channel.
    /// * `g` - Green channel.
    /// * `b` - Blue channel.
    pub const fn new(r: Float, g: Float, b: Float) -> Self {
        Self { r, g, b }
    }

    /// Returns true if all channels are zero.
    pub fn is_black(&self) -> bool {
        self.r == 0.0 && self.g == 0.0 && self.b == 0.0
    }

    /// Formats the color as a `#rrggbb` hex string, clamping each
    /// channel to [0, 1] and flooring into two hex digits.
    pub fn to_hex(&self) -> String {
        let quantize = |c: Float| (clamp(c, 0.0, 1.0) * 255.0).floor() as u8;
        format!(
            "#{:02x}{:02x}{:02x}",
            quantize(self.r),
            quantize(self.g),
            quantize(self.b)
        )
    }
}

impl Add for Color {
    type Output = Self;

    /// Adds the given color.
    ///
    /// * `other` - The color to add.
    fn add(self, other: Self) -> Self {
        Self::new(self.r + other.r, self.g + other.g, self.b + other.b)
    }
}

impl AddAssign for Color {
    /// Adds the given color.
    ///
    /// * `other` - The color to add.
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl Mul<Float> for Color {
    type Output = Self;

    /// Scales every channel uniformly.
    ///
    /// * `f` - The scale factor.
    fn mul(self, f: Float) -> Self {
        Self::new(self.r * f, self.g * f, self.b * f)
    }
}

impl Mul for Color {
    type Output = Self;

    /// Multiplies channel-wise with another color.
    ///
    /// * `other` - The other color.
    fn mul(self, other: Self) -> Self {
        Self::new(self.r * other.r, self.g * other.g, self.b * other.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn black() {
        assert!(Color::BLACK.is_black());
        assert!(!Color::new(0.0, 0.1, 0.0).is_black());
    }

    #[test]
    fn hex_formatting() {
        assert_eq!(Color::new(0.5, 0.0, 0.0).to_hex(), "#7f0000");
        assert_eq!(Color::new(1.0, 1.0, 1.0).to_hex(), "#ffffff");
    }

    #[test]
    fn hex_clamps_out_of_range_channels() {
        assert_eq!(Color::new(2.0, -1.0, 0.0).to_hex(), "#ff0000");
    }

    #[test]
    fn channel_wise_multiply() {
        let a = Color::new(0.5, 1.0, 0.25);
        let b = Color::new(1.0, 0.5, 0.0);
        assert_eq!(a * b, Color::new(0.5, 0.5, 0.0));
    }
}
