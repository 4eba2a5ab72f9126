//! Building other types from color channels.
//!
//! [`Color::convert`](crate::Color::convert) maps a function over the four
//! channels and hands the results to any type implementing
//! [`FromRgba`]. This is how [`Color::rounded`](crate::Color::rounded)
//! is built, and how callers get a color out as their own type.
//!
//! # Example
//!
//! ```rust
//! use tint_color::{Color, FromRgba};
//!
//! struct Bytes([u8; 4]);
//!
//! impl FromRgba for Bytes {
//!     fn from_rgba(r: f64, g: f64, b: f64, a: f64) -> Self {
//!         Bytes([r as u8, g as u8, b as u8, (a * 255.0) as u8])
//!     }
//! }
//!
//! let bytes: Bytes = Color::from_channels(20.0, 25.0, 30.0).convert(|c| c * 2.0);
//! assert_eq!(bytes.0, [40, 50, 60, 255]);
//! ```

use crate::color::{Color, Rgba};

/// A type that can be built from `(r, g, b, a)` channel values.
pub trait FromRgba {
    /// Builds the value from four channels.
    fn from_rgba(r: f64, g: f64, b: f64, a: f64) -> Self;
}

impl FromRgba for Color {
    #[inline]
    fn from_rgba(r: f64, g: f64, b: f64, a: f64) -> Self {
        Color::new(r, g, b, a)
    }
}

impl FromRgba for Rgba {
    #[inline]
    fn from_rgba(r: f64, g: f64, b: f64, a: f64) -> Self {
        Rgba { r, g, b, a }
    }
}

impl FromRgba for [f64; 4] {
    #[inline]
    fn from_rgba(r: f64, g: f64, b: f64, a: f64) -> Self {
        [r, g, b, a]
    }
}

/// Drops alpha.
impl FromRgba for [f64; 3] {
    #[inline]
    fn from_rgba(r: f64, g: f64, b: f64, _a: f64) -> Self {
        [r, g, b]
    }
}

impl FromRgba for (f64, f64, f64, f64) {
    #[inline]
    fn from_rgba(r: f64, g: f64, b: f64, a: f64) -> Self {
        (r, g, b, a)
    }
}

impl FromRgba for Vec<f64> {
    #[inline]
    fn from_rgba(r: f64, g: f64, b: f64, a: f64) -> Self {
        vec![r, g, b, a]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_to_rgb_array() {
        let c = Color::from_channels(20.0, 25.0, 30.0);
        let rgb: [f64; 3] = c.convert(|x| x * 2.0);
        assert_eq!(rgb, [40.0, 50.0, 60.0]);
    }

    #[test]
    fn test_convert_to_tuple_and_vec() {
        let c = Color::new(1.0, 2.0, 3.0, 0.5);
        let t: (f64, f64, f64, f64) = c.convert(|x| x);
        assert_eq!(t, (1.0, 2.0, 3.0, 0.5));
        let v: Vec<f64> = c.convert(|x| -x);
        assert_eq!(v, vec![-1.0, -2.0, -3.0, -0.5]);
    }

    #[test]
    fn test_convert_applies_to_alpha() {
        let c = Color::new(10.0, 10.0, 10.0, 0.5);
        let out: Rgba = c.convert(|x| x + 1.0);
        assert_eq!(out, Rgba { r: 11.0, g: 11.0, b: 11.0, a: 1.5 });
    }
}
