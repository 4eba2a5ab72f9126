//! HSL and HSV conversions.
//!
//! Both cylindrical models share the same hue machinery: the hue is cut
//! into six 60° segments, and the segment picks the order in which the
//! chroma `c` and the secondary component `x` land on R, G and B.
//!
//! ```text
//! h' = h / 60
//! x  = c * (1 - |h' mod 2 - 1|)
//!
//! [0,1) -> (c, x, 0)    [1,2) -> (x, c, 0)    [2,3) -> (0, c, x)
//! [3,4) -> (0, x, c)    [4,5) -> (x, 0, c)    [5,6] -> (c, 0, x)
//! ```
//!
//! Every segment is half-open, so `h' = 1` selects `[1,2)`. The last one
//! is closed at 6 and takes a hue of exactly 360. Hues outside [0, 360]
//! are wrapped with `rem_euclid` first.
//!
//! RGB values here are in the [0, 255] range used by [`Color`](crate::Color).
//!
//! # Reference
//!
//! <https://en.wikipedia.org/wiki/HSL_and_HSV>

/// Brings a hue into [0, 360]. Hues already inside, including 360, are kept.
#[inline]
fn wrap_hue(h: f64) -> f64 {
    if (0.0..=360.0).contains(&h) {
        h
    } else {
        h.rem_euclid(360.0)
    }
}

/// Picks `(R', G', B')` from chroma and hue, before the lightness offset.
#[inline]
fn hue_segment(h: f64, c: f64) -> [f64; 3] {
    let hp = wrap_hue(h) / 60.0;
    let x = c * (1.0 - ((hp % 2.0) - 1.0).abs());

    if hp < 1.0 {
        [c, x, 0.0]
    } else if hp < 2.0 {
        [x, c, 0.0]
    } else if hp < 3.0 {
        [0.0, c, x]
    } else if hp < 4.0 {
        [0.0, x, c]
    } else if hp < 5.0 {
        [x, 0.0, c]
    } else {
        [c, 0.0, x]
    }
}

#[inline]
fn offset_and_scale([r, g, b]: [f64; 3], m: f64) -> [f64; 3] {
    [(r + m) * 255.0, (g + m) * 255.0, (b + m) * 255.0]
}

/// HSL to RGB.
///
/// `h` in degrees [0, 360), `s` and `l` in [0, 1]. Returns channels in
/// [0, 255], unrounded.
///
/// # Formula
///
/// ```text
/// c = (1 - |2l - 1|) * s
/// m = l - c / 2
/// channel = (component + m) * 255
/// ```
///
/// # Example
///
/// ```rust
/// use tint_color::model::hsl_to_rgb;
///
/// let [r, g, b] = hsl_to_rgb(341.0, 0.91, 0.58);
/// assert_eq!([r.round(), g.round(), b.round()], [245.0, 50.0, 112.0]);
/// ```
pub fn hsl_to_rgb(h: f64, s: f64, l: f64) -> [f64; 3] {
    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let m = l - c / 2.0;
    offset_and_scale(hue_segment(h, c), m)
}

/// HSV to RGB.
///
/// `h` in degrees [0, 360), `s` and `v` in [0, 1]. Returns channels in
/// [0, 255], unrounded.
///
/// # Formula
///
/// ```text
/// c = v * s
/// m = v - c
/// channel = (component + m) * 255
/// ```
pub fn hsv_to_rgb(h: f64, s: f64, v: f64) -> [f64; 3] {
    let c = v * s;
    let m = v - c;
    offset_and_scale(hue_segment(h, c), m)
}

/// Hue, max, min and chroma of an RGB triple in [0, 255].
fn hue_and_extrema(rgb: [f64; 3]) -> (f64, f64, f64, f64) {
    let [r, g, b] = rgb.map(|c| c / 255.0);
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let h = if delta == 0.0 {
        0.0
    } else if max == r {
        60.0 * ((g - b) / delta).rem_euclid(6.0)
    } else if max == g {
        60.0 * ((b - r) / delta + 2.0)
    } else {
        60.0 * ((r - g) / delta + 4.0)
    };

    (h, max, min, delta)
}

/// RGB to HSL, the inverse of [`hsl_to_rgb`].
///
/// Returns `[h, s, l]` with `h` in degrees [0, 360) and `s`, `l` in [0, 1].
/// Achromatic input has hue and saturation 0.
pub fn rgb_to_hsl(rgb: [f64; 3]) -> [f64; 3] {
    let (h, max, min, delta) = hue_and_extrema(rgb);
    let l = (max + min) / 2.0;
    let s = if delta == 0.0 {
        0.0
    } else {
        delta / (1.0 - (2.0 * l - 1.0).abs())
    };
    [h, s, l]
}

/// RGB to HSV, the inverse of [`hsv_to_rgb`].
///
/// Returns `[h, s, v]` with `h` in degrees [0, 360) and `s`, `v` in [0, 1].
pub fn rgb_to_hsv(rgb: [f64; 3]) -> [f64; 3] {
    let (h, max, _, delta) = hue_and_extrema(rgb);
    let s = if max == 0.0 { 0.0 } else { delta / max };
    [h, s, max]
}
