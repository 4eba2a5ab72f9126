//! CSS color string parsing.
//!
//! String handling is kept apart from [`Color`](crate::Color): a parser
//! only turns text into a [`ParsedColor`], a model tag plus the numbers
//! written in the string. `Color` decides what to do with each model.
//!
//! # Accepted syntax
//!
//! [`CssParser`] understands, case-insensitively:
//!
//! | Form | Model | Values |
//! |------|-------|--------|
//! | `#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa` | `rgb` | `[r, g, b, a]`, alpha in [0, 1] |
//! | `rgb(r, g, b)`, `rgba(r, g, b, a)`, `rgb(r g b / a)` | `rgb` | `[r, g, b, a]` |
//! | `hsl(h, s%, l%)`, `hsla(h, s%, l%, a)`, `hsl(h s% l% / a)` | `hsl` | `[h, s, l, a]`, s and l in percent |
//! | `hwb(h w% b%)`, `hwb(h w% b% / a)` | `hwb` | `[h, w, b, a]`, w and b in percent |
//! | basic CSS keywords, `transparent` | `rgb` | `[r, g, b, a]` |
//!
//! RGB channels may be written as percentages (`100%` is 255), alpha as a
//! number or a percentage, and hue with an optional `deg` suffix. Values
//! are reported as written; nothing is clamped.
//!
//! # Example
//!
//! ```rust
//! use tint_color::parse::{ColorModel, ColorStringParser, CssParser};
//!
//! let parsed = CssParser.parse("hsl(341, 91%, 58%)").unwrap();
//! assert_eq!(parsed.model, ColorModel::Hsl);
//! assert_eq!(parsed.value, vec![341.0, 91.0, 58.0, 1.0]);
//! ```

use std::fmt;

use tracing::trace;

/// Color model tag reported by a parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorModel {
    /// Red, green, blue (and alpha).
    Rgb,
    /// Hue, saturation, lightness (and alpha).
    Hsl,
    /// Hue, whiteness, blackness (and alpha).
    Hwb,
}

impl ColorModel {
    /// Lowercase CSS name of the model.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Rgb => "rgb",
            Self::Hsl => "hsl",
            Self::Hwb => "hwb",
        }
    }
}

impl fmt::Display for ColorModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Output of a [`ColorStringParser`]: a model and its numeric values.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedColor {
    /// Which model `value` is expressed in.
    pub model: ColorModel,
    /// Model values in order, alpha last when present.
    pub value: Vec<f64>,
}

impl ParsedColor {
    /// Creates a parsed color.
    pub fn new(model: ColorModel, value: impl Into<Vec<f64>>) -> Self {
        Self {
            model,
            value: value.into(),
        }
    }
}

/// Turns color text into a [`ParsedColor`].
///
/// Implement this to plug a different string syntax into
/// [`Color::from_css_str_with`](crate::Color::from_css_str_with).
pub trait ColorStringParser {
    /// Parses `input`, returning `None` if it is not a color this parser knows.
    fn parse(&self, input: &str) -> Option<ParsedColor>;
}

/// Default parser for CSS color strings. See the [module docs](self).
#[derive(Debug, Clone, Copy, Default)]
pub struct CssParser;

impl ColorStringParser for CssParser {
    fn parse(&self, input: &str) -> Option<ParsedColor> {
        let s = input.trim();
        trace!(input = s, "css::parse");
        if s.is_empty() {
            return None;
        }

        let lower = s.to_ascii_lowercase();
        if let Some(hex) = lower.strip_prefix('#') {
            return parse_hex(hex);
        }
        if let Some((name, args)) = split_function(&lower) {
            return match name {
                "rgb" | "rgba" => parse_rgb(args),
                "hsl" | "hsla" => parse_hue_model(ColorModel::Hsl, args),
                "hwb" => parse_hue_model(ColorModel::Hwb, args),
                _ => None,
            };
        }
        keyword(&lower)
    }
}

/// Parses hex digits without the leading `#`.
///
/// Accepts 3, 4, 6 or 8 digits. Short forms repeat each digit
/// (`f` is `ff`); the alpha pair is mapped onto [0, 1].
///
/// ```rust
/// use tint_color::parse::parse_hex;
///
/// let parsed = parse_hex("f5336f").unwrap();
/// assert_eq!(parsed.value, vec![245.0, 51.0, 111.0, 1.0]);
/// assert!(parse_hex("f5336").is_none());
/// ```
pub fn parse_hex(hex: &str) -> Option<ParsedColor> {
    let hex = hex.trim();
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }

    let bytes: Vec<u8> = match hex.len() {
        3 | 4 => hex
            .chars()
            .map(|c| c.to_digit(16).map(|d| d as u8 * 17))
            .collect::<Option<_>>()?,
        6 | 8 => (0..hex.len())
            .step_by(2)
            .map(|i| u8::from_str_radix(&hex[i..i + 2], 16).ok())
            .collect::<Option<_>>()?,
        _ => return None,
    };

    let alpha = bytes.get(3).map_or(1.0, |&a| f64::from(a) / 255.0);
    Some(ParsedColor::new(
        ColorModel::Rgb,
        [
            f64::from(bytes[0]),
            f64::from(bytes[1]),
            f64::from(bytes[2]),
            alpha,
        ],
    ))
}

/// Splits `name(args)` into its parts.
fn split_function(s: &str) -> Option<(&str, &str)> {
    let open = s.find('(')?;
    let args = s[open + 1..].strip_suffix(')')?;
    Some((s[..open].trim(), args))
}

/// Splits function arguments in either the comma form `a, b, c[, d]`
/// or the space form `a b c[ / d]`. Always returns 3 or 4 tokens.
fn split_args(args: &str) -> Option<Vec<&str>> {
    let args = args.trim();

    let parts: Vec<&str> = if args.contains(',') {
        if args.contains('/') {
            return None;
        }
        args.split(',').map(str::trim).collect()
    } else {
        let (main, alpha) = match args.split_once('/') {
            Some((main, alpha)) => (main, Some(alpha.trim())),
            None => (args, None),
        };
        let mut parts: Vec<&str> = main.split_whitespace().collect();
        if parts.len() != 3 {
            return None;
        }
        if let Some(alpha) = alpha {
            parts.push(alpha);
        }
        parts
    };

    if !(3..=4).contains(&parts.len()) || parts.iter().any(|p| p.is_empty()) {
        return None;
    }
    Some(parts)
}

fn number(token: &str) -> Option<f64> {
    token.parse::<f64>().ok().filter(|v| v.is_finite())
}

fn percent(token: &str) -> Option<f64> {
    number(token.strip_suffix('%')?)
}

/// RGB channel: plain number, or percentage of 255.
fn channel(token: &str) -> Option<f64> {
    match percent(token) {
        Some(p) => Some(p * 255.0 / 100.0),
        None => number(token),
    }
}

/// Alpha: plain number, or percentage of 1.
fn alpha(token: Option<&&str>) -> Option<f64> {
    match token {
        None => Some(1.0),
        Some(t) => match percent(t) {
            Some(p) => Some(p / 100.0),
            None => number(t),
        },
    }
}

fn hue(token: &str) -> Option<f64> {
    number(token.strip_suffix("deg").unwrap_or(token))
}

/// Percentage kept in percent units; a bare number is read as percent too.
fn percent_value(token: &str) -> Option<f64> {
    percent(token).or_else(|| number(token))
}

fn parse_rgb(args: &str) -> Option<ParsedColor> {
    let parts = split_args(args)?;
    Some(ParsedColor::new(
        ColorModel::Rgb,
        [
            channel(parts[0])?,
            channel(parts[1])?,
            channel(parts[2])?,
            alpha(parts.get(3))?,
        ],
    ))
}

fn parse_hue_model(model: ColorModel, args: &str) -> Option<ParsedColor> {
    let parts = split_args(args)?;
    Some(ParsedColor::new(
        model,
        [
            hue(parts[0])?,
            percent_value(parts[1])?,
            percent_value(parts[2])?,
            alpha(parts.get(3))?,
        ],
    ))
}

/// CSS basic color keywords.
const KEYWORDS: &[(&str, [u8; 3])] = &[
    ("black", [0, 0, 0]),
    ("silver", [192, 192, 192]),
    ("gray", [128, 128, 128]),
    ("white", [255, 255, 255]),
    ("maroon", [128, 0, 0]),
    ("red", [255, 0, 0]),
    ("purple", [128, 0, 128]),
    ("fuchsia", [255, 0, 255]),
    ("green", [0, 128, 0]),
    ("lime", [0, 255, 0]),
    ("olive", [128, 128, 0]),
    ("yellow", [255, 255, 0]),
    ("navy", [0, 0, 128]),
    ("blue", [0, 0, 255]),
    ("teal", [0, 128, 128]),
    ("aqua", [0, 255, 255]),
];

fn keyword(name: &str) -> Option<ParsedColor> {
    if name == "transparent" {
        return Some(ParsedColor::new(ColorModel::Rgb, [0.0, 0.0, 0.0, 0.0]));
    }
    KEYWORDS
        .iter()
        .find(|(k, _)| *k == name)
        .map(|(_, [r, g, b])| {
            ParsedColor::new(
                ColorModel::Rgb,
                [f64::from(*r), f64::from(*g), f64::from(*b), 1.0],
            )
        })
}
