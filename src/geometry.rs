//! Gradient line geometry: where a linear gradient starts and ends so that it
//! covers a box at any angle.
//!
//! The gradient line passes through the box center in the direction of the
//! angle. Its length is the box diagonal projected onto that direction, which
//! is exactly `width` at 0°, `height` at 90°, and reaches the far corners at
//! every angle in between, whatever the aspect ratio.
//!
//! Points are in box coordinates: origin at the top-left corner, y growing
//! downwards. An angle of 90° therefore ends *above* the center.

use glam::{DVec2, dvec2};
use std::f64::consts::PI;

use crate::angle::NormalizedAngle;
use crate::types::Size;

/// The segment a linear gradient is interpolated along.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GradientLine {
    pub start: DVec2,
    pub end: DVec2,
}

impl GradientLine {
    pub fn new(start: DVec2, end: DVec2) -> Self {
        GradientLine { start, end }
    }

    /// Midpoint of the segment; the box center for computed lines
    pub fn midpoint(&self) -> DVec2 {
        (self.start + self.end) * 0.5
    }

    pub fn length(&self) -> f64 {
        self.start.distance(self.end)
    }

    /// Vector from start to end
    pub fn direction(&self) -> DVec2 {
        self.end - self.start
    }

    /// Same segment, walked the other way
    pub fn reversed(&self) -> Self {
        GradientLine {
            start: self.end,
            end: self.start,
        }
    }

    /// Move both endpoints by `offset`, e.g. to place the box inside a larger canvas
    pub fn translated(&self, offset: DVec2) -> Self {
        GradientLine {
            start: self.start + offset,
            end: self.end + offset,
        }
    }

    /// Offset of `end` from the midpoint, in box coordinates (y down)
    pub fn half_extent(&self) -> DVec2 {
        self.end - self.midpoint()
    }
}

/// Angle between the box diagonal and its width axis, in radians.
///
/// Well defined because `0 < width <= diagonal` for any valid [`Size`].
fn diagonal_angle(size: Size) -> f64 {
    (size.width() / size.diagonal()).acos()
}

/// Half the length of the gradient line for `angle` across `size`.
///
/// In the second and fourth quadrants the line runs closest to the other
/// diagonal, so the angle to it is measured from π instead.
pub fn half_gradient_length(angle: NormalizedAngle, size: Size) -> f64 {
    let diagonal = size.diagonal();
    let theta = angle.radians();
    let between_diagonal_and_width = diagonal_angle(size);

    let between_diagonal_and_line = if angle.is_mirrored_quadrant() {
        PI - theta - between_diagonal_and_width
    } else {
        theta - between_diagonal_and_width
    };

    (between_diagonal_and_line.cos() * diagonal).abs() / 2.0
}

/// Compute the gradient line for `angle` across a box of `size`.
///
/// `start` and `end` are symmetric about the box center. The vertical
/// component is flipped because box coordinates grow downwards, so a
/// positive angle still turns the gradient counter-clockwise on screen.
pub fn gradient_line(angle: NormalizedAngle, size: Size) -> GradientLine {
    let half = half_gradient_length(angle, size);
    let theta = angle.radians();

    let horizontal = half * theta.cos();
    let vertical = half * theta.sin();

    let center = size.center();
    GradientLine {
        start: center + dvec2(-horizontal, vertical),
        end: center + dvec2(horizontal, -vertical),
    }
}
