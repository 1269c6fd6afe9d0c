//! Shape-preserving elementwise evaluation.
//!
//! [`Pointwise`] lets `pdf`, `cdf` and `icdf` accept a scalar or a sequence
//! and return a value of the same shape: `f64 -> f64`, slices and vectors
//! to `Vec<f64>`, `ndarray` vectors to `Array1<f64>`.

use crate::types::{Result, UqError};
use ndarray::{Array1, ArrayView1};

/// Argument that can be mapped elementwise while keeping its shape.
///
/// # Example
///
/// ```
/// use uqtf_core::prob_input::Pointwise;
///
/// assert_eq!(2.0_f64.map_values(|x| x * x), 4.0);
/// assert_eq!([1.0_f64, 2.0][..].map_values(|x| -x), vec![-1.0, -2.0]);
/// ```
pub trait Pointwise {
    /// Result type with the same shape as `Self`.
    type Output;

    /// Apply an infallible function to every element.
    fn map_values<F>(self, f: F) -> Self::Output
    where
        F: Fn(f64) -> f64;

    /// Apply a fallible function to every element, stopping at the first
    /// error.
    fn try_map_values<F>(self, f: F) -> Result<Self::Output>
    where
        F: Fn(f64) -> Result<f64>;
}

impl Pointwise for f64 {
    type Output = f64;

    fn map_values<F>(self, f: F) -> f64
    where
        F: Fn(f64) -> f64,
    {
        f(self)
    }

    fn try_map_values<F>(self, f: F) -> Result<f64>
    where
        F: Fn(f64) -> Result<f64>,
    {
        f(self)
    }
}

impl Pointwise for &[f64] {
    type Output = Vec<f64>;

    fn map_values<F>(self, f: F) -> Vec<f64>
    where
        F: Fn(f64) -> f64,
    {
        self.iter().map(|&x| f(x)).collect()
    }

    fn try_map_values<F>(self, f: F) -> Result<Vec<f64>>
    where
        F: Fn(f64) -> Result<f64>,
    {
        self.iter().map(|&x| f(x)).collect()
    }
}

impl Pointwise for &Vec<f64> {
    type Output = Vec<f64>;

    fn map_values<F>(self, f: F) -> Vec<f64>
    where
        F: Fn(f64) -> f64,
    {
        self.as_slice().map_values(f)
    }

    fn try_map_values<F>(self, f: F) -> Result<Vec<f64>>
    where
        F: Fn(f64) -> Result<f64>,
    {
        self.as_slice().try_map_values(f)
    }
}

impl Pointwise for ArrayView1<'_, f64> {
    type Output = Array1<f64>;

    fn map_values<F>(self, f: F) -> Array1<f64>
    where
        F: Fn(f64) -> f64,
    {
        self.mapv(f)
    }

    fn try_map_values<F>(self, f: F) -> Result<Array1<f64>>
    where
        F: Fn(f64) -> Result<f64>,
    {
        self.iter()
            .map(|&x| f(x))
            .collect::<Result<Vec<f64>>>()
            .map(Array1::from)
    }
}

impl Pointwise for &Array1<f64> {
    type Output = Array1<f64>;

    fn map_values<F>(self, f: F) -> Array1<f64>
    where
        F: Fn(f64) -> f64,
    {
        self.view().map_values(f)
    }

    fn try_map_values<F>(self, f: F) -> Result<Array1<f64>>
    where
        F: Fn(f64) -> Result<f64>,
    {
        self.view().try_map_values(f)
    }
}

/// Parse textual values into reals.
///
/// # Errors
///
/// `InvalidArgument` naming the first element that is not a number.
///
/// # Example
///
/// ```
/// use uqtf_core::prob_input::parse_values;
///
/// assert_eq!(parse_values(&["0.5", " 1e-3"]).unwrap(), vec![0.5, 1e-3]);
/// assert!(parse_values(&["0.5", "abc"]).is_err());
/// ```
pub fn parse_values<S: AsRef<str>>(values: &[S]) -> Result<Vec<f64>> {
    values
        .iter()
        .map(|s| {
            let s = s.as_ref();
            s.trim().parse::<f64>().map_err(|_| {
                UqError::InvalidArgument(format!("'{}' is not a numeric value", s))
            })
        })
        .collect()
}
