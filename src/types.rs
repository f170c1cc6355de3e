//! Validated numeric primitives for gradline.
//!
//! A gradient fills a box, and the endpoint math divides by the box diagonal,
//! so a box with a zero, negative or non-finite side is rejected up front
//! instead of producing NaN endpoints later.

use glam::{DVec2, dvec2};
use std::fmt;

/// Error type for invalid numeric values
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumericError {
    /// Value is NaN
    NaN,
    /// Value is infinite
    Infinite,
    /// Value is zero when non-zero required
    Zero,
    /// Value is negative when positive required
    Negative,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::NaN => write!(f, "value is NaN"),
            NumericError::Infinite => write!(f, "value is infinite"),
            NumericError::Zero => write!(f, "value is zero"),
            NumericError::Negative => write!(f, "value is negative"),
        }
    }
}

impl std::error::Error for NumericError {}

/// Check that a dimension is finite and strictly positive.
fn positive(val: f64) -> Result<f64, NumericError> {
    if val.is_nan() {
        Err(NumericError::NaN)
    } else if val.is_infinite() {
        Err(NumericError::Infinite)
    } else if val == 0.0 {
        Err(NumericError::Zero)
    } else if val < 0.0 {
        Err(NumericError::Negative)
    } else {
        Ok(val)
    }
}

/// Size of the box a gradient fills. Both sides are finite and > 0.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Size {
    width: f64,
    height: f64,
}

impl Size {
    /// Create a Size with validation (rejects NaN, infinite, zero, negative)
    pub fn try_new(width: f64, height: f64) -> Result<Self, NumericError> {
        Ok(Size {
            width: positive(width)?,
            height: positive(height)?,
        })
    }

    #[inline]
    pub fn width(self) -> f64 {
        self.width
    }

    #[inline]
    pub fn height(self) -> f64 {
        self.height
    }

    /// Length of the box diagonal
    #[inline]
    pub fn diagonal(self) -> f64 {
        (self.width * self.width + self.height * self.height).sqrt()
    }

    /// Center of the box, in box coordinates (origin top-left)
    #[inline]
    pub fn center(self) -> DVec2 {
        dvec2(self.width / 2.0, self.height / 2.0)
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}
