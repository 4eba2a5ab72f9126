//! Reference-value checks for `Color` construction, conversion and contrast.
//!
//! HSL/HSV and hex tables were cross-checked against the CSS Color 4
//! sample conversions; contrast values against the WCAG 2.0 definitions.

use approx::{assert_abs_diff_eq, assert_relative_eq};
use tint_color::prelude::*;
use tint_color::luminance;

fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::TRACE)
        .try_init();
}

// ============================================================================
// Reference values
// ============================================================================

/// (h, s, l) -> rounded (r, g, b)
const HSL_REFERENCE: &[([f64; 3], [f64; 3])] = &[
    ([341.0, 0.91, 0.58], [245.0, 50.0, 112.0]),
    ([0.0, 1.0, 0.5], [255.0, 0.0, 0.0]),
    ([60.0, 1.0, 0.5], [255.0, 255.0, 0.0]),
    ([120.0, 1.0, 0.25], [0.0, 128.0, 0.0]),
    ([180.0, 1.0, 0.5], [0.0, 255.0, 255.0]),
    ([240.0, 1.0, 0.25], [0.0, 0.0, 128.0]),
    ([300.0, 1.0, 0.5], [255.0, 0.0, 255.0]),
    ([0.0, 0.0, 1.0], [255.0, 255.0, 255.0]),
    ([0.0, 0.0, 0.0], [0.0, 0.0, 0.0]),
];

/// (h, s, v) -> rounded (r, g, b)
const HSV_REFERENCE: &[([f64; 3], [f64; 3])] = &[
    ([320.0, 0.50, 0.40], [102.0, 51.0, 85.0]),
    ([0.0, 1.0, 1.0], [255.0, 0.0, 0.0]),
    ([120.0, 1.0, 1.0], [0.0, 255.0, 0.0]),
    ([240.0, 1.0, 1.0], [0.0, 0.0, 255.0]),
    ([30.0, 1.0, 1.0], [255.0, 128.0, 0.0]),
    ([0.0, 0.0, 0.5], [128.0, 128.0, 128.0]),
];

/// (css string, expected [r, g, b, a])
const CSS_REFERENCE: &[(&str, [f64; 4])] = &[
    ("#f5336f", [245.0, 51.0, 111.0, 1.0]),
    ("#F5336F", [245.0, 51.0, 111.0, 1.0]),
    ("#fff", [255.0, 255.0, 255.0, 1.0]),
    ("#00000000", [0.0, 0.0, 0.0, 0.0]),
    ("rgb(245, 51, 111)", [245.0, 51.0, 111.0, 1.0]),
    ("rgba(245, 51, 111, 0.25)", [245.0, 51.0, 111.0, 0.25]),
    ("rgb(245 51 111 / 50%)", [245.0, 51.0, 111.0, 0.5]),
    ("navy", [0.0, 0.0, 128.0, 1.0]),
    ("transparent", [0.0, 0.0, 0.0, 0.0]),
];

/// (rgb, hex)
const HEX_REFERENCE: &[([f64; 3], &str)] = &[
    ([245.0, 51.0, 111.0], "#f5336f"),
    ([0.0, 0.0, 0.0], "#000000"),
    ([255.0, 255.0, 255.0], "#ffffff"),
    ([1.0, 2.0, 3.0], "#010203"),
    ([15.4, 16.6, 254.5], "#0f11ff"),
];

// ============================================================================
// Construction
// ============================================================================

#[test]
fn hsl_matches_reference() {
    for (hsl, rgb) in HSL_REFERENCE {
        let [h, s, l] = *hsl;
        let c = Color::from_hsl(h, s, l).rounded();
        assert_eq!(c.rgb(), *rgb, "hsl{hsl:?}");
        assert_eq!(c.a, 1.0);
    }
}

#[test]
fn hsv_matches_reference() {
    for (hsv, rgb) in HSV_REFERENCE {
        let [h, s, v] = *hsv;
        let c = Color::from_hsv(h, s, v).rounded();
        assert_eq!(c.rgb(), *rgb, "hsv{hsv:?}");
    }
}

#[test]
fn css_strings_match_reference() {
    init_logging();
    for (input, expected) in CSS_REFERENCE {
        let c: Color = input.parse().unwrap();
        assert_eq!(c.to_array(), *expected, "{input}");
    }
}

#[test]
fn css_hsl_string_matches_from_hsl() {
    let parsed = Color::from_css_str("hsl(320deg 50% 40% / 0.5)").unwrap();
    let built = Color::from_hsl(320.0, 0.5, 0.4).with_alpha(0.5);
    assert_eq!(parsed, built);
}

#[test]
fn invalid_strings_are_rejected() {
    init_logging();
    for input in ["", "#12345", "rgb(1, 2)", "cmyk(0, 0, 0, 0)", "not-a-color"] {
        let err = Color::from_css_str(input).unwrap_err();
        assert!(err.is_invalid_color(), "{input}");
        assert!(err.to_string().starts_with("invalid color"));
    }

    let err = Color::from_css_str("hwb(120 0% 0%)").unwrap_err();
    assert_eq!(err, ColorError::UnsupportedModel(ColorModel::Hwb));
    assert!(err.is_invalid_color());
}

/// Parser that only knows one word.
struct OnlyPink;

impl ColorStringParser for OnlyPink {
    fn parse(&self, input: &str) -> Option<ParsedColor> {
        (input == "pink").then(|| ParsedColor::new(ColorModel::Rgb, [245.0, 51.0, 111.0]))
    }
}

#[test]
fn custom_parser_is_used() {
    let c = Color::from_css_str_with(&OnlyPink, "pink").unwrap();
    assert_eq!(c, Color::from_channels(245.0, 51.0, 111.0));
    assert!(Color::from_css_str_with(&OnlyPink, "#f5336f").is_err());

    let dynamic: &dyn ColorStringParser = &CssParser;
    assert!(Color::from_css_str_with(dynamic, "#f5336f").is_ok());
}

// ============================================================================
// Output
// ============================================================================

#[test]
fn hex_matches_reference() {
    for (rgb, hex) in HEX_REFERENCE {
        let c = Color::from(*rgb);
        assert_eq!(c.hex(), *hex, "{rgb:?}");
        assert_eq!(c.hx(), hex.replace('#', "0x"));
    }
}

#[test]
fn hex_round_trips_for_integer_channels() {
    let c = Color::from_channels(18.0, 52.0, 86.0);
    assert_eq!(Color::from_hex(&c.hex()).unwrap(), c);
}

#[test]
fn to_hsl_inverts_from_hsl() {
    let [h, s, l] = Color::from_hsl(341.0, 0.91, 0.58).to_hsl();
    assert_abs_diff_eq!(h, 341.0, epsilon = 1e-9);
    assert_abs_diff_eq!(s, 0.91, epsilon = 1e-9);
    assert_abs_diff_eq!(l, 0.58, epsilon = 1e-9);

    let [h, s, v] = Color::from_hsv(320.0, 0.5, 0.4).to_hsv();
    assert_abs_diff_eq!(h, 320.0, epsilon = 1e-9);
    assert_abs_diff_eq!(s, 0.5, epsilon = 1e-9);
    assert_abs_diff_eq!(v, 0.4, epsilon = 1e-9);
}

// ============================================================================
// Transforms
// ============================================================================

#[test]
fn invert_is_an_involution() {
    for c in [
        Color::new(245.0, 51.0, 111.0, 0.3),
        Color::new(0.0, 255.0, 127.5, 1.0),
        Color::new(-10.0, 300.0, 12.25, 0.0),
    ] {
        assert_eq!(c.invert().invert(), c);
    }
}

#[test]
fn grayscale_variants_agree_on_gray() {
    let gray = Color::new(128.0, 128.0, 128.0, 0.75);
    assert_eq!(gray.grayscale(), gray);
    assert_eq!(gray.grayscale_fastest(), gray);
    let luma = gray.grayscale_luminance();
    assert_relative_eq!(luma.r, 128.0, epsilon = 1e-9);
    assert_eq!(luma.a, 0.75);
}

#[test]
fn apply_chains_in_place() {
    let mut c = Color::new(100.0, 150.0, 200.0, 0.5);
    c.apply(|x| x / 2.0, false).apply(|x| x + 1.0, false);
    assert_eq!(c.to_array(), [51.0, 76.0, 101.0, 0.5]);
}

#[test]
fn convert_into_record() {
    let c = Color::new(10.2, 20.7, 30.5, 0.5);
    let rgba: Rgba = c.convert(f64::round);
    assert_eq!(rgba, Rgba { r: 10.0, g: 21.0, b: 31.0, a: 1.0 });
}

// ============================================================================
// Luminance and contrast
// ============================================================================

#[test]
fn relative_luminance_uses_raw_channels() {
    let c = Color::from_channels(10.0, 200.0, 255.0);
    let expected = 0.2126 * (10.0 / 12.92)
        + 0.7152 * ((200.0_f64 + 14.025) / 268.025).powf(2.4)
        + 0.0722 * ((255.0_f64 + 14.025) / 268.025).powf(2.4);
    assert_relative_eq!(c.relative_luminance(), expected, epsilon = 1e-12);
}

#[test]
fn contrast_with_is_directional() {
    let light = Color::from_channels(245.0, 245.0, 200.0);
    let dark = Color::from_channels(30.0, 30.0, 30.0);
    let forward = light.contrast_with(&dark);
    let backward = dark.contrast_with(&light);
    assert!(forward > 1.0);
    assert_relative_eq!(forward * backward, 1.0, epsilon = 1e-12);
}

#[test]
fn wcag_contrast_bounds() {
    assert_relative_eq!(Color::WHITE.contrast_ratio_wcag(&Color::BLACK), 21.0, epsilon = 1e-9);
    let c = Color::from_channels(245.0, 51.0, 111.0);
    assert_eq!(c.contrast_ratio_wcag(&c), 1.0);
    assert_relative_eq!(
        c.relative_luminance_wcag(),
        luminance::relative_luminance_wcag(c.rgb())
    );
}

// ============================================================================
// Serialization
// ============================================================================

#[cfg(feature = "serde")]
#[test]
fn serde_uses_named_channels() {
    let c = Color::new(245.0, 51.0, 111.0, 0.5);
    let json = serde_json::to_string(&c).unwrap();
    assert_eq!(json, r#"{"r":245.0,"g":51.0,"b":111.0,"a":0.5}"#);
    let back: Color = serde_json::from_str(&json).unwrap();
    assert_eq!(back, c);
}
