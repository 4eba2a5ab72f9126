//! Luminance and contrast.
//!
//! Two relative-luminance variants live here:
//!
//! - [`relative_luminance`] works directly on [0, 255] channels with the
//!   constants `10.0164`, `12.92`, `14.025` and `268.025`. Below the
//!   threshold the linear branch divides the raw channel by 12.92, so the
//!   curve jumps at the threshold and white comes out slightly above 1.
//!   Its results are what [`Color::contrast_with`](crate::Color::contrast_with)
//!   reports.
//! - [`relative_luminance_wcag`] is the WCAG 2.0 definition: channels are
//!   normalized to [0, 1] first and decoded with the sRGB curve.
//!
//! # Reference
//!
//! - <https://www.w3.org/TR/WCAG20/#relativeluminancedef>
//! - <https://www.w3.org/TR/WCAG20/#contrast-ratiodef>

/// Rec.709 luma coefficient for red.
pub const LUMA_R: f64 = 0.2126;

/// Rec.709 luma coefficient for green.
pub const LUMA_G: f64 = 0.7152;

/// Rec.709 luma coefficient for blue.
pub const LUMA_B: f64 = 0.0722;

/// Rec.709 luma coefficients as `[R, G, B]`.
pub const LUMA: [f64; 3] = [LUMA_R, LUMA_G, LUMA_B];

/// Weighted sum `0.2126*R + 0.7152*G + 0.0722*B`.
///
/// ```rust
/// use tint_color::luminance::luma;
///
/// assert!((luma([0.0, 100.0, 0.0]) - 71.52).abs() < 1e-9);
/// ```
#[inline]
pub fn luma([r, g, b]: [f64; 3]) -> f64 {
    LUMA_R * r + LUMA_G * g + LUMA_B * b
}

/// Per-channel transfer used by [`relative_luminance`].
///
/// ```text
/// if c <= 10.0164:
///     c / 12.92
/// else:
///     ((c + 14.025) / 268.025)^2.4
/// ```
#[inline]
pub fn linearize_raw(c: f64) -> f64 {
    if c <= 10.0164 {
        c / 12.92
    } else {
        ((c + 14.025) / 268.025).powf(2.4)
    }
}

/// WCAG 2.0 per-channel transfer, for a channel in [0, 255].
///
/// ```text
/// c = channel / 255
/// if c <= 0.03928:
///     c / 12.92
/// else:
///     ((c + 0.055) / 1.055)^2.4
/// ```
#[inline]
pub fn linearize_wcag(channel: f64) -> f64 {
    let c = channel / 255.0;
    if c <= 0.03928 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Relative luminance over raw [0, 255] channels. See the [module docs](self).
#[inline]
pub fn relative_luminance(rgb: [f64; 3]) -> f64 {
    luma(rgb.map(linearize_raw))
}

/// WCAG 2.0 relative luminance, in [0, 1] for in-range channels.
///
/// ```rust
/// use tint_color::luminance::relative_luminance_wcag;
///
/// assert_eq!(relative_luminance_wcag([0.0, 0.0, 0.0]), 0.0);
/// assert!((relative_luminance_wcag([255.0, 255.0, 255.0]) - 1.0).abs() < 1e-12);
/// ```
#[inline]
pub fn relative_luminance_wcag(rgb: [f64; 3]) -> f64 {
    luma(rgb.map(linearize_wcag))
}

/// Contrast ratio `(l1 + 0.05) / (l2 + 0.05)`, in the order given.
#[inline]
pub fn contrast(l1: f64, l2: f64) -> f64 {
    (l1 + 0.05) / (l2 + 0.05)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_luma_weights_sum_to_one() {
        assert_relative_eq!(luma([1.0, 1.0, 1.0]), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_linearize_raw_branches() {
        assert_eq!(linearize_raw(0.0), 0.0);
        assert_eq!(linearize_raw(10.0164), 10.0164 / 12.92);
        assert_relative_eq!(
            linearize_raw(255.0),
            (269.025_f64 / 268.025).powf(2.4),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_linearize_wcag_branches() {
        assert_eq!(linearize_wcag(0.0), 0.0);
        assert_relative_eq!(linearize_wcag(255.0), 1.0, epsilon = 1e-12);
        assert_relative_eq!(linearize_wcag(10.0), 10.0 / 255.0 / 12.92, epsilon = 1e-15);
    }

    #[test]
    fn test_wcag_black_white_contrast() {
        let white = relative_luminance_wcag([255.0; 3]);
        let black = relative_luminance_wcag([0.0; 3]);
        assert_relative_eq!(contrast(white, black), 21.0, epsilon = 1e-9);
        assert_relative_eq!(contrast(black, white), 1.0 / 21.0, epsilon = 1e-9);
    }

    #[test]
    fn test_raw_white_exceeds_one() {
        assert!(relative_luminance([255.0; 3]) > 1.0);
    }
}
