//! Error types for color construction.
//!
//! Only construction can fail: every derived operation on an existing
//! [`Color`](crate::Color) is a total function over its channels.

use thiserror::Error;

use crate::parse::ColorModel;

/// Color construction error.
///
/// Covers the ways an input can fail to become a color:
/// - A string the parser does not recognise
/// - A recognised color model that `Color` cannot be built from
/// - A channel array of the wrong length
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ColorError {
    /// Input could not be turned into a color.
    #[error("invalid color: {0}")]
    InvalidColor(String),

    /// The parser recognised the model but it is not a construction model.
    #[error("invalid color: unsupported color model `{0}`")]
    UnsupportedModel(ColorModel),
}

impl ColorError {
    /// True if the input was rejected as not being a color.
    ///
    /// Holds for every variant; an unsupported model is a refinement
    /// of an invalid color.
    #[inline]
    pub fn is_invalid_color(&self) -> bool {
        matches!(self, Self::InvalidColor(_) | Self::UnsupportedModel(_))
    }
}

/// Result type for color construction.
pub type ColorResult<T> = Result<T, ColorError>;
