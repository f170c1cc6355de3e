//! Gradient angles and the conventions they are written in.

use std::f64::consts::PI;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::errors::GradientError;

/// How a raw degree value should be read.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum AngleConvention {
    /// 0° points along +x, angles grow counter-clockwise.
    #[default]
    Cartesian,
    /// 0° points up, angles grow clockwise, as in CSS `linear-gradient()`.
    Css,
}

/// Reduce a cartesian angle to [0, 360).
///
/// Handles negative and oversized input such as `-1235` or `390`.
#[inline]
pub fn normalize_cartesian(degrees: f64) -> f64 {
    (degrees % 360.0 + 360.0) % 360.0
}

/// Convert a CSS angle to the equivalent cartesian angle in [0, 360).
#[inline]
pub fn normalize_css(degrees: f64) -> f64 {
    ((90.0 - degrees) % 360.0 + 360.0) % 360.0
}

/// A cartesian angle in degrees, reduced to [0, 360).
///
/// Equality and hashing use the reduced value, so `390` and `30` are the
/// same angle, and so are CSS `0` and cartesian `90`.
#[derive(Clone, Copy, Debug, Default)]
pub struct NormalizedAngle(f64);

impl NormalizedAngle {
    pub const ZERO: NormalizedAngle = NormalizedAngle(0.0);

    /// Normalize `degrees` read in `convention`. Rejects NaN and infinities.
    pub fn new(degrees: f64, convention: AngleConvention) -> Result<Self, GradientError> {
        if !degrees.is_finite() {
            return Err(GradientError::InvalidAngle { value: degrees });
        }
        let normalized = match convention {
            AngleConvention::Cartesian => normalize_cartesian(degrees),
            AngleConvention::Css => normalize_css(degrees),
        };
        Ok(NormalizedAngle(normalized))
    }

    /// Shorthand for a cartesian angle
    pub fn cartesian(degrees: f64) -> Result<Self, GradientError> {
        Self::new(degrees, AngleConvention::Cartesian)
    }

    /// Shorthand for a CSS angle
    pub fn css(degrees: f64) -> Result<Self, GradientError> {
        Self::new(degrees, AngleConvention::Css)
    }

    #[inline]
    pub fn degrees(self) -> f64 {
        self.0
    }

    #[inline]
    pub fn radians(self) -> f64 {
        self.0 * PI / 180.0
    }

    /// The opposite direction, still in [0, 360)
    pub fn reversed(self) -> Self {
        NormalizedAngle(normalize_cartesian(self.0 + 180.0))
    }

    /// True strictly inside the second or fourth quadrant.
    ///
    /// Exact multiples of 90° are not mirrored.
    pub(crate) fn is_mirrored_quadrant(self) -> bool {
        let d = self.0;
        (d > 90.0 && d < 180.0) || (d > 270.0 && d < 360.0)
    }
}

impl PartialEq for NormalizedAngle {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

// The constructor rejects NaN, so equality is total.
impl Eq for NormalizedAngle {}

impl Hash for NormalizedAngle {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // fold -0.0 into 0.0 so equal values hash alike
        (self.0 + 0.0).to_bits().hash(state);
    }
}

impl fmt::Display for NormalizedAngle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
