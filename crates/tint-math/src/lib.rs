//! # tint-math
//!
//! N-dimensional vector algebra.
//!
//! This crate provides a single value type, [`Vector`], whose dimension is
//! set by the number of components it is built from:
//!
//! - Element-wise and scalar arithmetic (`add`, `subtract`, `multiply`, `divide`)
//! - Dot product, length and normalization
//! - A cyclic cross product that is the standard one for 3 dimensions
//!
//! # Design
//!
//! Arithmetic mutates the receiver in place and returns `&mut Vector` so
//! operations chain. Every operation between two vectors checks that the
//! dimensions match and reports [`VectorError::DimensionMismatch`]
//! otherwise; nothing is truncated or padded.
//!
//! # Usage
//!
//! ```rust
//! use tint_math::{vector, Vector};
//!
//! let a = vector![4, 3, -2];
//! let b = vector![12, 7, 0];
//!
//! let c = a.cross(&b)?;
//! assert_eq!(c, vector![14, -24, -8]);
//!
//! let mut n = Vector::from_vector(&c);
//! n.normalize();
//! assert!((n.length() - 1.0).abs() < 1e-12);
//! # Ok::<(), tint_math::VectorError>(())
//! ```
//!
//! # Features
//!
//! - `serde` - `Serialize`/`Deserialize` for [`Vector`] (as a plain sequence)
//!
//! # Dependencies
//!
//! - [`thiserror`] - error derive
//! - [`tracing`] - diagnostics for rejected operations

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
mod vecn;

pub use error::{VectorError, VectorResult};
pub use vecn::Vector;

/// Prelude with commonly used types.
pub mod prelude {
    pub use crate::vector;
    pub use crate::{Vector, VectorError, VectorResult};
}
