//! # tint-color
//!
//! An RGBA color value type with the conversions and perceptual measures
//! used when picking colors for display.
//!
//! # Overview
//!
//! - [`Color`] - four `f64` channels, RGB in [0, 255] and alpha in [0, 1]
//! - [`model`] - HSL and HSV to and from RGB
//! - [`luminance`] - relative luminance and contrast ratios
//! - [`parse`] - CSS color strings through a pluggable [`ColorStringParser`]
//! - [`convert`] - mapping channels into caller-chosen types via [`FromRgba`]
//!
//! # Usage
//!
//! ```rust
//! use tint_color::prelude::*;
//!
//! let text: Color = "#1e1e1e".parse()?;
//! let background = Color::from_hsl(48.0, 0.9, 0.92);
//!
//! let ratio = background.contrast_ratio_wcag(&text);
//! assert!(ratio > 7.0);
//!
//! let hover = background.interpolate_with(&text, 0.1);
//! println!("{} -> {}", background.hex(), hover.hex());
//! # Ok::<(), ColorError>(())
//! ```
//!
//! # Features
//!
//! - `serde` - `Serialize`/`Deserialize` for [`Color`] and [`Rgba`]
//!
//! # Dependencies
//!
//! - [`thiserror`] - error derive
//! - [`tracing`] - diagnostics for rejected input

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod color;
mod error;

pub mod convert;
pub mod luminance;
pub mod model;
pub mod parse;

pub use color::{Color, Rgba};
pub use convert::FromRgba;
pub use error::{ColorError, ColorResult};
pub use parse::{ColorModel, ColorStringParser, CssParser, ParsedColor};

/// Prelude with commonly used types.
pub mod prelude {
    pub use crate::{Color, ColorError, ColorResult, FromRgba, Rgba};
    pub use crate::{ColorModel, ColorStringParser, CssParser, ParsedColor};
}
