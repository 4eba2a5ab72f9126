//! N-dimensional vector type.
//!
//! [`Vector`] holds any number of `f64` components. The dimension is fixed
//! by the number of components given at construction and every binary
//! operation checks it before touching the receiver.
//!
//! Arithmetic methods mutate in place and hand back `&mut Self` so that
//! calls chain with `?`:
//!
//! ```rust
//! use tint_math::{vector, VectorResult};
//!
//! fn shift() -> VectorResult<()> {
//!     let mut v = vector![1.0, 2.0, 3.0];
//!     v.add(&[1.0, 1.0, 1.0])?.multiply_scalar(2.0).subtract_scalar(1.0);
//!     assert_eq!(v, vector![3.0, 5.0, 7.0]);
//!     Ok(())
//! }
//! # shift().unwrap();
//! ```

use std::fmt;
use std::ops::{Div, Index, IndexMut, Mul, Neg};

use tracing::{debug, trace};

use crate::error::{VectorError, VectorResult};

/// Builds a [`Vector`] from a list of components.
///
/// Each expression is cast to `f64`, so integer literals are accepted.
///
/// ```rust
/// use tint_math::vector;
///
/// let v = vector![4, 3, -2];
/// assert_eq!(v.dimensions(), 3);
/// assert_eq!(v[2], -2.0);
/// ```
#[macro_export]
macro_rules! vector {
    () => {
        $crate::Vector::new(::std::vec::Vec::<f64>::new())
    };
    ($($x:expr),+ $(,)?) => {
        $crate::Vector::new(::std::vec![$(($x) as f64),+])
    };
}

/// An N-dimensional vector of `f64` components.
///
/// # Dimension
///
/// The dimension is the number of components and never changes after
/// construction. Operations taking a second operand (slice or vector)
/// fail with [`VectorError::DimensionMismatch`] when the lengths differ,
/// and leave `self` untouched in that case.
///
/// # Copies
///
/// Storage is owned, so [`Clone`], [`Vector::copy`] and
/// [`Vector::from_vector`] always produce an independent vector.
///
/// # Example
///
/// ```rust
/// use tint_math::Vector;
///
/// let v = Vector::xyz(12.0, 14.0, -4.0);
/// assert!((v.length() - 18.867962264113206).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Vector {
    components: Vec<f64>,
}

impl Vector {
    /// Creates a vector from its components.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tint_math::Vector;
    ///
    /// let v = Vector::new([1.0, 2.0]);
    /// assert_eq!(v.dimensions(), 2);
    /// ```
    #[inline]
    pub fn new(components: impl Into<Vec<f64>>) -> Self {
        Self {
            components: components.into(),
        }
    }

    /// Creates a vector of `dimensions` zeros.
    #[inline]
    pub fn zeros(dimensions: usize) -> Self {
        Self::new(vec![0.0; dimensions])
    }

    /// Creates a 2-dimensional vector.
    #[inline]
    pub fn xy(x: f64, y: f64) -> Self {
        Self::new(vec![x, y])
    }

    /// Creates a 3-dimensional vector.
    #[inline]
    pub fn xyz(x: f64, y: f64, z: f64) -> Self {
        Self::new(vec![x, y, z])
    }

    /// Creates a 4-dimensional vector.
    #[inline]
    pub fn xyzw(x: f64, y: f64, z: f64, w: f64) -> Self {
        Self::new(vec![x, y, z, w])
    }

    /// Creates an independent copy of `vector`.
    #[inline]
    pub fn from_vector(vector: &Vector) -> Self {
        vector.copy()
    }

    /// Returns an independent copy of this vector.
    ///
    /// Mutating the copy never affects `self`.
    ///
    /// ```rust
    /// use tint_math::vector;
    ///
    /// let v = vector![1.0, 2.0];
    /// let mut c = v.copy();
    /// c.add_scalar(10.0);
    /// assert_eq!(v, vector![1.0, 2.0]);
    /// ```
    #[inline]
    pub fn copy(&self) -> Self {
        Self::new(self.components.clone())
    }

    /// Number of components.
    #[inline]
    pub fn dimensions(&self) -> usize {
        self.components.len()
    }

    /// Components as a slice.
    #[inline]
    pub fn components(&self) -> &[f64] {
        &self.components
    }

    /// Components as a mutable slice. The dimension cannot change through it.
    #[inline]
    pub fn components_mut(&mut self) -> &mut [f64] {
        &mut self.components
    }

    /// Consumes the vector and returns its components.
    #[inline]
    pub fn into_components(self) -> Vec<f64> {
        self.components
    }

    /// Component at `index`, or `None` past the end.
    #[inline]
    pub fn get(&self, index: usize) -> Option<f64> {
        self.components.get(index).copied()
    }

    /// First component.
    #[inline]
    pub fn x(&self) -> Option<f64> {
        self.get(0)
    }

    /// Second component.
    #[inline]
    pub fn y(&self) -> Option<f64> {
        self.get(1)
    }

    /// Third component.
    #[inline]
    pub fn z(&self) -> Option<f64> {
        self.get(2)
    }

    /// Fourth component.
    #[inline]
    pub fn w(&self) -> Option<f64> {
        self.get(3)
    }

    /// Euclidean length, `sqrt(sum(c * c))`.
    #[inline]
    pub fn length(&self) -> f64 {
        self.length_squared().sqrt()
    }

    /// Squared length (avoids sqrt).
    #[inline]
    pub fn length_squared(&self) -> f64 {
        self.components.iter().map(|c| c * c).sum()
    }

    /// Returns true if every component is finite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.components.iter().all(|c| c.is_finite())
    }

    /// Replaces every component `c` with `f(c)`.
    ///
    /// ```rust
    /// use tint_math::vector;
    ///
    /// let mut v = vector![1.0, -2.0];
    /// v.apply(f64::abs);
    /// assert_eq!(v, vector![1.0, 2.0]);
    /// ```
    #[inline]
    pub fn apply(&mut self, mut f: impl FnMut(f64) -> f64) -> &mut Self {
        for c in &mut self.components {
            *c = f(*c);
        }
        self
    }

    fn check_dimension(&self, found: usize) -> VectorResult<()> {
        let expected = self.dimensions();
        if expected != found {
            debug!(expected, found, "Rejecting vector operand");
            return Err(VectorError::DimensionMismatch { expected, found });
        }
        Ok(())
    }

    fn zip_apply(
        &mut self,
        values: &[f64],
        op: impl Fn(f64, f64) -> f64,
    ) -> VectorResult<&mut Self> {
        self.check_dimension(values.len())?;
        for (c, &v) in self.components.iter_mut().zip(values) {
            *c = op(*c, v);
        }
        Ok(self)
    }

    /// Adds `values[i]` to component `i`.
    pub fn add(&mut self, values: &[f64]) -> VectorResult<&mut Self> {
        self.zip_apply(values, |c, v| c + v)
    }

    /// Adds `vector` component-wise.
    pub fn add_vector(&mut self, vector: &Vector) -> VectorResult<&mut Self> {
        self.add(&vector.components)
    }

    /// Adds `scalar` to every component.
    pub fn add_scalar(&mut self, scalar: f64) -> &mut Self {
        self.apply(|c| c + scalar)
    }

    /// Subtracts `values[i]` from component `i`.
    pub fn subtract(&mut self, values: &[f64]) -> VectorResult<&mut Self> {
        self.zip_apply(values, |c, v| c - v)
    }

    /// Subtracts `vector` component-wise.
    pub fn subtract_vector(&mut self, vector: &Vector) -> VectorResult<&mut Self> {
        self.subtract(&vector.components)
    }

    /// Subtracts `scalar` from every component.
    pub fn subtract_scalar(&mut self, scalar: f64) -> &mut Self {
        self.apply(|c| c - scalar)
    }

    /// Multiplies component `i` by `values[i]`.
    pub fn multiply(&mut self, values: &[f64]) -> VectorResult<&mut Self> {
        self.zip_apply(values, |c, v| c * v)
    }

    /// Multiplies by `vector` component-wise: `[x*x', y*y', ...]`.
    pub fn multiply_vector(&mut self, vector: &Vector) -> VectorResult<&mut Self> {
        self.multiply(&vector.components)
    }

    /// Multiplies every component by `scalar`.
    pub fn multiply_scalar(&mut self, scalar: f64) -> &mut Self {
        self.apply(|c| c * scalar)
    }

    /// Divides component `i` by `values[i]`.
    ///
    /// Division by zero follows IEEE 754 and yields infinities or NaN.
    pub fn divide(&mut self, values: &[f64]) -> VectorResult<&mut Self> {
        self.zip_apply(values, |c, v| c / v)
    }

    /// Divides by `vector` component-wise: `[x/x', y/y', ...]`.
    pub fn divide_vector(&mut self, vector: &Vector) -> VectorResult<&mut Self> {
        self.divide(&vector.components)
    }

    /// Divides every component by `scalar`.
    pub fn divide_scalar(&mut self, scalar: f64) -> &mut Self {
        self.apply(|c| c / scalar)
    }

    /// Dot product, `sum(self[i] * other[i])`.
    ///
    /// ```rust
    /// use tint_math::vector;
    ///
    /// let a = vector![1.0, 2.0, 3.0];
    /// let b = vector![4.0, 5.0, 6.0];
    /// assert_eq!(a.dot(&b).unwrap(), 32.0);
    /// ```
    pub fn dot(&self, other: &Vector) -> VectorResult<f64> {
        self.check_dimension(other.dimensions())?;
        Ok(self
            .components
            .iter()
            .zip(&other.components)
            .map(|(a, b)| a * b)
            .sum())
    }

    /// Cyclic cross product.
    ///
    /// For output index `k`, with `i = (k + 1) mod N` and `j = (i + 1) mod N`:
    ///
    /// ```text
    /// out[k] = self[i] * other[j] - self[j] * other[i]
    /// ```
    ///
    /// For N = 3 this is the standard cross product. For any other
    /// dimension it is only a formal extension of the same index pattern:
    /// the result has no geometric meaning and is generally not
    /// orthogonal to either operand.
    ///
    /// ```rust
    /// use tint_math::vector;
    ///
    /// let a = vector![4, 3, -2];
    /// let b = vector![12, 7, 0];
    /// assert_eq!(a.cross(&b).unwrap(), vector![14, -24, -8]);
    /// ```
    pub fn cross(&self, other: &Vector) -> VectorResult<Vector> {
        self.check_dimension(other.dimensions())?;
        let n = self.dimensions();
        trace!(dimensions = n, "cross");

        let a = &self.components;
        let b = &other.components;
        let components = (1..=n)
            .map(|k| {
                let i = k % n;
                let j = (i + 1) % n;
                a[i] * b[j] - a[j] * b[i]
            })
            .collect();
        Ok(Self { components })
    }

    /// Divides every component by [`length`](Self::length).
    ///
    /// A zero-length vector is not guarded: every component becomes NaN
    /// (`0 / 0`). Use [`try_normalize`](Self::try_normalize) to get
    /// [`VectorError::DegenerateNormalize`] instead.
    pub fn normalize(&mut self) -> &mut Self {
        let length = self.length();
        self.apply(|c| c / length)
    }

    /// Like [`normalize`](Self::normalize), but fails on a zero-length
    /// vector and leaves `self` unchanged.
    pub fn try_normalize(&mut self) -> VectorResult<&mut Self> {
        let length = self.length();
        if length == 0.0 {
            debug!(dimensions = self.dimensions(), "Refusing to normalize zero-length vector");
            return Err(VectorError::DegenerateNormalize);
        }
        Ok(self.apply(|c| c / length))
    }

    /// True if both vectors have the same dimension and exactly equal
    /// components. No epsilon is applied; NaN never equals anything.
    #[inline]
    pub fn equals(&self, other: &Vector) -> bool {
        self == other
    }
}

impl Index<usize> for Vector {
    type Output = f64;

    #[inline]
    fn index(&self, i: usize) -> &f64 {
        &self.components[i]
    }
}

impl IndexMut<usize> for Vector {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut f64 {
        &mut self.components[i]
    }
}

// -Vector
impl Neg for Vector {
    type Output = Self;

    #[inline]
    fn neg(mut self) -> Self {
        self.apply(|c| -c);
        self
    }
}

// Vector * f64
impl Mul<f64> for Vector {
    type Output = Self;

    #[inline]
    fn mul(mut self, rhs: f64) -> Self {
        self.multiply_scalar(rhs);
        self
    }
}

// Vector / f64
impl Div<f64> for Vector {
    type Output = Self;

    #[inline]
    fn div(mut self, rhs: f64) -> Self {
        self.divide_scalar(rhs);
        self
    }
}

impl From<Vec<f64>> for Vector {
    #[inline]
    fn from(components: Vec<f64>) -> Self {
        Self::new(components)
    }
}

impl<const N: usize> From<[f64; N]> for Vector {
    #[inline]
    fn from(components: [f64; N]) -> Self {
        Self::new(components)
    }
}

impl From<&[f64]> for Vector {
    #[inline]
    fn from(components: &[f64]) -> Self {
        Self::new(components)
    }
}

impl From<Vector> for Vec<f64> {
    #[inline]
    fn from(v: Vector) -> Vec<f64> {
        v.into_components()
    }
}

impl FromIterator<f64> for Vector {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect::<Vec<_>>())
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        for (i, c) in self.components.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{c}")?;
        }
        f.write_str(")")
    }
}
