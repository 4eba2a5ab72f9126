//! The [`Color`] value type.
//!
//! A color is four `f64` channels: red, green and blue in [0, 255] and
//! alpha in [0, 1]. The ranges are conventions only; nothing is clamped,
//! so out-of-range input flows through every operation unchanged.
//!
//! # Construction
//!
//! Each input shape has its own constructor:
//!
//! | Input | Constructor |
//! |-------|-------------|
//! | channels | [`Color::new`], [`Color::from_channels`] |
//! | HSL | [`Color::from_hsl`] |
//! | HSV | [`Color::from_hsv`] |
//! | 3 or 4 numbers | [`Color::from_array`], `From<[f64; 3]>`, `From<[f64; 4]>` |
//! | CSS string | [`Color::from_css_str`], [`str::parse`] |
//! | hex string | [`Color::from_hex`] |
//! | another color | [`Color::from_color`] |
//!
//! # Mutation
//!
//! Transforms ([`invert`](Color::invert), the grayscale family and
//! [`interpolate_with`](Color::interpolate_with)) return a new color and
//! leave the receiver alone. [`apply`](Color::apply) is the one in-place
//! operation and returns `&mut Self` for chaining.
//!
//! # Example
//!
//! ```rust
//! use tint_color::Color;
//!
//! let pink = Color::from_hsl(341.0, 0.91, 0.58).rounded();
//! assert_eq!(pink.to_array(), [245.0, 50.0, 112.0, 1.0]);
//! assert_eq!(pink.hex(), "#f53270");
//!
//! let gray = pink.grayscale();
//! assert_eq!(gray.r, gray.b);
//! assert_eq!(pink.r, 245.0);
//! ```

use std::fmt;
use std::str::FromStr;

use tracing::{debug, trace};

use crate::convert::FromRgba;
use crate::error::{ColorError, ColorResult};
use crate::luminance;
use crate::model;
use crate::parse::{self, ColorModel, ColorStringParser, CssParser, ParsedColor};

/// Named-field record of a color's channels, as returned by [`Color::to_object`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgba {
    /// Red, [0, 255].
    pub r: f64,
    /// Green, [0, 255].
    pub g: f64,
    /// Blue, [0, 255].
    pub b: f64,
    /// Alpha, [0, 1].
    pub a: f64,
}

/// An RGBA color.
///
/// Channels are public and may be read or written directly; no clamping
/// or rounding happens on set.
///
/// The default color is opaque black.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color {
    /// Red, [0, 255].
    pub r: f64,
    /// Green, [0, 255].
    pub g: f64,
    /// Blue, [0, 255].
    pub b: f64,
    /// Alpha, [0, 1].
    pub a: f64,
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl Color {
    /// Opaque black.
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0, 1.0);

    /// Opaque white.
    pub const WHITE: Self = Self::new(255.0, 255.0, 255.0, 1.0);

    /// Creates a color from all four channels.
    #[inline]
    pub const fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Creates an opaque color (alpha 1).
    #[inline]
    pub const fn from_channels(r: f64, g: f64, b: f64) -> Self {
        Self::new(r, g, b, 1.0)
    }

    /// Creates a color from hue, saturation and lightness.
    ///
    /// `h` in degrees [0, 360), `s` and `l` in [0, 1]. Channels are left
    /// unrounded; see [`crate::model`] for the segment rules.
    ///
    /// ```rust
    /// use tint_color::Color;
    ///
    /// let c = Color::from_hsl(341.0, 0.91, 0.58).rounded();
    /// assert_eq!((c.r, c.g, c.b, c.a), (245.0, 50.0, 112.0, 1.0));
    /// ```
    pub fn from_hsl(h: f64, s: f64, l: f64) -> Self {
        trace!(h, s, l, "color::from_hsl");
        let [r, g, b] = model::hsl_to_rgb(h, s, l);
        Self::from_channels(r, g, b)
    }

    /// Creates a color from hue, saturation and value.
    ///
    /// `h` in degrees [0, 360), `s` and `v` in [0, 1].
    ///
    /// ```rust
    /// use tint_color::Color;
    ///
    /// let c = Color::from_hsv(320.0, 0.50, 0.40).rounded();
    /// assert_eq!((c.r, c.g, c.b, c.a), (102.0, 51.0, 85.0, 1.0));
    /// ```
    pub fn from_hsv(h: f64, s: f64, v: f64) -> Self {
        trace!(h, s, v, "color::from_hsv");
        let [r, g, b] = model::hsv_to_rgb(h, s, v);
        Self::from_channels(r, g, b)
    }

    /// Creates a color from `[r, g, b]` or `[r, g, b, a]`.
    ///
    /// Alpha defaults to 1. Any other length is an
    /// [`InvalidColor`](ColorError::InvalidColor) error.
    pub fn from_array(values: &[f64]) -> ColorResult<Self> {
        match *values {
            [r, g, b] => Ok(Self::from_channels(r, g, b)),
            [r, g, b, a] => Ok(Self::new(r, g, b, a)),
            _ => {
                debug!(len = values.len(), "Rejecting channel array");
                Err(ColorError::InvalidColor(format!(
                    "expected 3 or 4 channels, got {}",
                    values.len()
                )))
            }
        }
    }

    /// Creates a color from a hex string, with or without the leading `#`.
    ///
    /// Accepts 3, 4, 6 or 8 hex digits.
    ///
    /// ```rust
    /// use tint_color::Color;
    ///
    /// let c = Color::from_hex("#f5336f").unwrap();
    /// assert_eq!(c.to_array(), [245.0, 51.0, 111.0, 1.0]);
    /// assert_eq!(Color::from_hex("f5336f").unwrap(), c);
    /// ```
    pub fn from_hex(hex: &str) -> ColorResult<Self> {
        let trimmed = hex.trim();
        let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);
        match parse::parse_hex(digits) {
            Some(parsed) => Self::from_parsed(&parsed),
            None => {
                debug!(input = hex, "Rejecting hex color");
                Err(ColorError::InvalidColor(format!("not a hex color: {hex:?}")))
            }
        }
    }

    /// Creates a color from a CSS color string using [`CssParser`].
    ///
    /// ```rust
    /// use tint_color::Color;
    ///
    /// let c = Color::from_css_str("rgb(245, 51, 111)").unwrap();
    /// assert_eq!(c, Color::from_channels(245.0, 51.0, 111.0));
    /// assert!(Color::from_css_str("nope").is_err());
    /// ```
    pub fn from_css_str(input: &str) -> ColorResult<Self> {
        Self::from_css_str_with(&CssParser, input)
    }

    /// Creates a color from a string using a caller-supplied parser.
    ///
    /// Fails with [`ColorError::InvalidColor`] if the parser does not
    /// recognise the string, and with [`ColorError::UnsupportedModel`] if
    /// it reports a model other than `rgb` or `hsl`.
    pub fn from_css_str_with<P>(parser: &P, input: &str) -> ColorResult<Self>
    where
        P: ColorStringParser + ?Sized,
    {
        match parser.parse(input) {
            Some(parsed) => Self::from_parsed(&parsed),
            None => {
                debug!(input, "Rejecting color string");
                Err(ColorError::InvalidColor(format!(
                    "unrecognised color string: {input:?}"
                )))
            }
        }
    }

    /// Creates a color from parser output.
    ///
    /// - `rgb`: `[r, g, b]` or `[r, g, b, a]`.
    /// - `hsl`: `[h, s, l]` or `[h, s, l, a]` with `s` and `l` in percent;
    ///   built through [`from_hsl`](Self::from_hsl) and given the parsed alpha.
    /// - anything else: [`ColorError::UnsupportedModel`].
    pub fn from_parsed(parsed: &ParsedColor) -> ColorResult<Self> {
        match parsed.model {
            ColorModel::Rgb => Self::from_array(&parsed.value),
            ColorModel::Hsl => match *parsed.value.as_slice() {
                [h, s, l] => Ok(Self::from_hsl(h, s / 100.0, l / 100.0)),
                [h, s, l, a] => Ok(Self::from_hsl(h, s / 100.0, l / 100.0).with_alpha(a)),
                _ => Err(ColorError::InvalidColor(format!(
                    "expected 3 or 4 hsl values, got {}",
                    parsed.value.len()
                ))),
            },
            model => {
                debug!(%model, "Rejecting unsupported color model");
                Err(ColorError::UnsupportedModel(model))
            }
        }
    }

    /// Returns a copy of `other`.
    #[inline]
    pub fn from_color(other: &Color) -> Self {
        *other
    }

    /// Returns this color with alpha replaced.
    #[must_use]
    #[inline]
    pub const fn with_alpha(self, a: f64) -> Self {
        Self::new(self.r, self.g, self.b, a)
    }

    /// Red, green and blue as an array.
    #[inline]
    pub const fn rgb(&self) -> [f64; 3] {
        [self.r, self.g, self.b]
    }

    /// Sets red, green and blue; alpha is kept.
    #[inline]
    pub fn set_rgb(&mut self, [r, g, b]: [f64; 3]) {
        self.r = r;
        self.g = g;
        self.b = b;
    }

    /// Sets all four channels.
    #[inline]
    pub fn set_rgba(&mut self, [r, g, b, a]: [f64; 4]) {
        self.set_rgb([r, g, b]);
        self.a = a;
    }

    // ------------------------------------------------------------------
    // Output formats
    // ------------------------------------------------------------------

    /// `[r, g, b, a]`.
    #[inline]
    pub const fn to_array(&self) -> [f64; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Channels as a named-field record.
    #[inline]
    pub const fn to_object(&self) -> Rgba {
        Rgba {
            r: self.r,
            g: self.g,
            b: self.b,
            a: self.a,
        }
    }

    /// CSS `rgb(r, g, b)` text.
    pub fn css_rgb(&self) -> String {
        format!("rgb({}, {}, {})", self.r, self.g, self.b)
    }

    /// CSS `rgba(r, g, b, a)` text. Same as the [`Display`](fmt::Display) output.
    ///
    /// ```rust
    /// use tint_color::Color;
    ///
    /// assert_eq!(Color::from_channels(245.0, 51.0, 111.0).css_rgba(), "rgba(245, 51, 111, 1)");
    /// ```
    pub fn css_rgba(&self) -> String {
        self.to_string()
    }

    /// Lowercase `#rrggbb`.
    ///
    /// Each channel is rounded, clamped to [0, 255] and written as two hex
    /// digits, so small channels are zero-padded (`5` is `05`).
    pub fn hex(&self) -> String {
        format!("#{}", self.hex_digits())
    }

    /// Lowercase `0xrrggbb`, formatted like [`hex`](Self::hex).
    pub fn hx(&self) -> String {
        format!("0x{}", self.hex_digits())
    }

    fn hex_digits(&self) -> String {
        let [r, g, b] = self.rgb().map(|c| c.round().clamp(0.0, 255.0) as u8);
        format!("{r:02x}{g:02x}{b:02x}")
    }

    // ------------------------------------------------------------------
    // Channel mapping
    // ------------------------------------------------------------------

    /// Replaces each RGB channel `c` with `f(c)`, and alpha too when
    /// `include_alpha` is set. Mutates in place.
    ///
    /// ```rust
    /// use tint_color::Color;
    ///
    /// let mut c = Color::new(10.4, 20.6, 30.5, 0.25);
    /// c.apply(f64::round, false).apply(|x| x * 2.0, true);
    /// assert_eq!(c.to_array(), [20.0, 42.0, 62.0, 0.5]);
    /// ```
    pub fn apply(&mut self, mut f: impl FnMut(f64) -> f64, include_alpha: bool) -> &mut Self {
        self.r = f(self.r);
        self.g = f(self.g);
        self.b = f(self.b);
        if include_alpha {
            self.a = f(self.a);
        }
        self
    }

    /// Builds a `T` from `(f(r), f(g), f(b), f(a))`.
    ///
    /// See [`FromRgba`] for the targets available.
    pub fn convert<T: FromRgba>(&self, mut f: impl FnMut(f64) -> f64) -> T {
        let r = f(self.r);
        let g = f(self.g);
        let b = f(self.b);
        let a = f(self.a);
        T::from_rgba(r, g, b, a)
    }

    /// A new color with every channel, alpha included, rounded to the
    /// nearest integer (halves away from zero).
    #[must_use]
    pub fn rounded(&self) -> Color {
        self.convert(f64::round)
    }

    // ------------------------------------------------------------------
    // Transforms
    // ------------------------------------------------------------------

    fn with_rgb(&self, rgb: [f64; 3]) -> Color {
        let mut out = *self;
        out.set_rgb(rgb);
        out
    }

    /// Each RGB channel becomes `255 - c`; alpha is kept.
    #[must_use]
    pub fn invert(&self) -> Color {
        self.with_rgb(self.rgb().map(|c| 255.0 - c))
    }

    /// Average grayscale, `(r + g + b) / 3` on every RGB channel.
    #[must_use]
    pub fn grayscale(&self) -> Color {
        let gray = (self.r + self.g + self.b) / 3.0;
        self.with_rgb([gray; 3])
    }

    /// Luma grayscale, `0.2126r + 0.7152g + 0.0722b` on every RGB channel.
    #[must_use]
    pub fn grayscale_luminance(&self) -> Color {
        let gray = luminance::luma(self.rgb());
        self.with_rgb([gray; 3])
    }

    /// Green-channel grayscale. Inaccurate but cheap.
    #[must_use]
    pub fn grayscale_fastest(&self) -> Color {
        self.with_rgb([self.g; 3])
    }

    /// Linear interpolation of the RGB channels toward `other`:
    /// `c + (other.c - c) * t`. Alpha is taken from `self`.
    ///
    /// `t = 0` gives `self`, `t = 1` gives `other`'s RGB. Values of `t`
    /// outside [0, 1] extrapolate.
    #[must_use]
    pub fn interpolate_with(&self, other: &Color, t: f64) -> Color {
        let lerp = |a: f64, b: f64| a + (b - a) * t;
        self.with_rgb([
            lerp(self.r, other.r),
            lerp(self.g, other.g),
            lerp(self.b, other.b),
        ])
    }

    /// Like [`interpolate_with`](Self::interpolate_with), alpha included.
    #[must_use]
    pub fn interpolate_with_alpha(&self, other: &Color, t: f64) -> Color {
        let mut out = self.interpolate_with(other, t);
        out.a = self.a + (other.a - self.a) * t;
        out
    }

    // ------------------------------------------------------------------
    // Conversions and perception
    // ------------------------------------------------------------------

    /// `[h, s, l]`, hue in degrees, saturation and lightness in [0, 1].
    pub fn to_hsl(&self) -> [f64; 3] {
        model::rgb_to_hsl(self.rgb())
    }

    /// `[h, s, v]`, hue in degrees, saturation and value in [0, 1].
    pub fn to_hsv(&self) -> [f64; 3] {
        model::rgb_to_hsv(self.rgb())
    }

    /// Relative luminance over the raw [0, 255] channels.
    ///
    /// Per channel `c <= 10.0164 ? c / 12.92 : ((c + 14.025) / 268.025)^2.4`,
    /// then `0.2126R + 0.7152G + 0.0722B`. See [`crate::luminance`] for how
    /// this differs from [`relative_luminance_wcag`](Self::relative_luminance_wcag).
    pub fn relative_luminance(&self) -> f64 {
        luminance::relative_luminance(self.rgb())
    }

    /// WCAG 2.0 relative luminance, channels normalized to [0, 1] first.
    pub fn relative_luminance_wcag(&self) -> f64 {
        luminance::relative_luminance_wcag(self.rgb())
    }

    /// `(self.relative_luminance() + 0.05) / (other.relative_luminance() + 0.05)`.
    ///
    /// The ratio is taken in the order given; put the lighter color first
    /// for a value of at least 1.
    pub fn contrast_with(&self, other: &Color) -> f64 {
        luminance::contrast(self.relative_luminance(), other.relative_luminance())
    }

    /// WCAG 2.0 contrast ratio, lighter over darker, in [1, 21].
    ///
    /// ```rust
    /// use tint_color::Color;
    ///
    /// let ratio = Color::BLACK.contrast_ratio_wcag(&Color::WHITE);
    /// assert!((ratio - 21.0).abs() < 1e-9);
    /// ```
    pub fn contrast_ratio_wcag(&self, other: &Color) -> f64 {
        let a = self.relative_luminance_wcag();
        let b = other.relative_luminance_wcag();
        if a >= b {
            luminance::contrast(a, b)
        } else {
            luminance::contrast(b, a)
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_css_str(s)
    }
}

impl TryFrom<&str> for Color {
    type Error = ColorError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::from_css_str(value)
    }
}

impl TryFrom<&[f64]> for Color {
    type Error = ColorError;

    fn try_from(value: &[f64]) -> Result<Self, Self::Error> {
        Self::from_array(value)
    }
}

impl From<[f64; 3]> for Color {
    #[inline]
    fn from([r, g, b]: [f64; 3]) -> Self {
        Self::from_channels(r, g, b)
    }
}

impl From<[f64; 4]> for Color {
    #[inline]
    fn from([r, g, b, a]: [f64; 4]) -> Self {
        Self::new(r, g, b, a)
    }
}

impl From<Color> for [f64; 4] {
    #[inline]
    fn from(c: Color) -> [f64; 4] {
        c.to_array()
    }
}

impl From<Rgba> for Color {
    #[inline]
    fn from(Rgba { r, g, b, a }: Rgba) -> Self {
        Self::new(r, g, b, a)
    }
}

impl From<Color> for Rgba {
    #[inline]
    fn from(c: Color) -> Rgba {
        c.to_object()
    }
}
