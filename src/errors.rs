//! Error types with diagnostics using miette
//!
//! Every variant is a precondition the caller broke. Nothing here is
//! retryable: fix the input and build again.

use miette::Diagnostic;
use thiserror::Error;

use crate::types::NumericError;

/// Errors raised while building or rendering an angled gradient
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum GradientError {
    #[error("invalid angle: {value}")]
    #[diagnostic(
        code(gradline::angle::invalid),
        help("gradient angles must be finite values in degrees")
    )]
    InvalidAngle { value: f64 },

    #[error("invalid gradient box {width}x{height}: {reason}")]
    #[diagnostic(
        code(gradline::size::invalid),
        help("both sides of the box must be finite and greater than zero")
    )]
    InvalidSize {
        width: f64,
        height: f64,
        reason: NumericError,
    },

    #[error("a linear gradient needs at least two colors, got {count}")]
    #[diagnostic(code(gradline::colors::too_few))]
    TooFewColors { count: usize },

    #[error("{stops} stops supplied for {colors} colors")]
    #[diagnostic(
        code(gradline::stops::count_mismatch),
        help("pass exactly one stop per color, or no stops for an even spread")
    )]
    StopCountMismatch { colors: usize, stops: usize },

    #[error("stop {index} is {value}, expected a value in [0, 1]")]
    #[diagnostic(code(gradline::stops::out_of_range))]
    StopOutOfRange { index: usize, value: f64 },

    #[error("stop {index} ({value}) comes before the stop ahead of it ({previous})")]
    #[diagnostic(
        code(gradline::stops::not_ascending),
        help("stops are positions along the gradient line and must not decrease")
    )]
    StopsNotAscending {
        index: usize,
        value: f64,
        previous: f64,
    },

    #[error("invalid color: {input:?}")]
    #[diagnostic(
        code(gradline::color::invalid),
        help("use #RGB, #RRGGBB or #AARRGGBB")
    )]
    InvalidColor { input: String },
}

impl GradientError {
    /// Wrap a rejected box size together with the offending dimensions
    pub fn invalid_size(width: f64, height: f64, reason: NumericError) -> Self {
        GradientError::InvalidSize {
            width,
            height,
            reason,
        }
    }
}
