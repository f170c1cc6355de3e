//! Linear gradients at any angle, sized to fill a box.
//!
//! A linear-gradient fill primitive only knows a start and an end point.
//! This crate turns an angle (CSS or cartesian) and a box size into the two
//! points that make the gradient cover the whole box at that angle, for any
//! aspect ratio, the way CSS `linear-gradient(<angle>, ...)` does.
//!
//! ```
//! use gradline::{AngleConvention, AngledGradient, Color, Size};
//!
//! let gradient = AngledGradient::builder([Color::from_argb(0xff3690EA), Color::from_argb(0xff94B3FF)])
//!     .stops([0.1205, 0.8785])
//!     .angle(135.0, AngleConvention::Css)
//!     .build()?;
//! let shader = gradient.shader(Size::try_new(342.0, 155.0)?);
//! assert!(shader.line().midpoint().distance(glam::dvec2(171.0, 77.5)) < 1e-9);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod angle;
pub mod brush;
pub mod color;
pub mod errors;
pub mod gallery;
pub mod geometry;
pub mod log;
pub mod svg;
pub mod types;

pub use angle::{AngleConvention, NormalizedAngle, normalize_cartesian, normalize_css};
pub use brush::{AngledGradient, AngledGradientBuilder, LinearShader, TileMode};
pub use color::Color;
pub use errors::GradientError;
pub use geometry::{GradientLine, gradient_line, half_gradient_length};
pub use types::{NumericError, Size};

/// Gradient line for a raw angle and box dimensions.
///
/// Convenience over [`NormalizedAngle::new`], [`Size::try_new`] and
/// [`gradient_line`] for callers holding plain numbers.
pub fn gradient_endpoints(
    degrees: f64,
    convention: AngleConvention,
    width: f64,
    height: f64,
) -> Result<GradientLine, GradientError> {
    let angle = NormalizedAngle::new(degrees, convention)?;
    let size =
        Size::try_new(width, height).map_err(|e| GradientError::invalid_size(width, height, e))?;
    Ok(gradient_line(angle, size))
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::dvec2;

    #[test]
    fn endpoints_from_raw_values() {
        let line = gradient_endpoints(-90.0, AngleConvention::Css, 100.0, 40.0).unwrap();
        // CSS -90deg points left
        assert!(line.start.distance(dvec2(100.0, 20.0)) < 1e-9);
        assert!(line.end.distance(dvec2(0.0, 20.0)) < 1e-9);
    }

    #[test]
    fn endpoints_reject_degenerate_box() {
        let err = gradient_endpoints(45.0, AngleConvention::Cartesian, 0.0, 10.0).unwrap_err();
        assert_eq!(
            err,
            GradientError::InvalidSize {
                width: 0.0,
                height: 10.0,
                reason: NumericError::Zero
            }
        );
    }

    #[test]
    fn endpoints_reject_nan_angle() {
        assert!(gradient_endpoints(f64::NAN, AngleConvention::Cartesian, 1.0, 1.0).is_err());
    }
}
