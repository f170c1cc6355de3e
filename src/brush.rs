//! Angled linear gradient brushes.
//!
//! An [`AngledGradient`] is a size-independent description: colors, optional
//! stops, an angle and a tile mode. Resolving it against a concrete box with
//! [`AngledGradient::shader`] yields a [`LinearShader`], the start/end form a
//! linear-gradient fill primitive consumes.

use glam::DVec2;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::angle::{AngleConvention, NormalizedAngle};
use crate::color::Color;
use crate::errors::GradientError;
use crate::geometry::{GradientLine, gradient_line};
use crate::types::Size;

/// How the area outside the gradient line's ends is filled.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum TileMode {
    /// Extend the edge colors
    #[default]
    Clamp,
    /// Restart the gradient from the first stop
    Repeat,
    /// Alternate forwards and backwards
    Mirror,
    /// Leave the outside transparent
    Decal,
}

impl fmt::Display for TileMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TileMode::Clamp => "Clamp",
            TileMode::Repeat => "Repeat",
            TileMode::Mirror => "Mirror",
            TileMode::Decal => "Decal",
        };
        f.write_str(name)
    }
}

/// A linear gradient at an arbitrary angle, independent of the box it fills.
///
/// Equality, hashing and `Display` cover exactly the colors, stops,
/// normalized angle and tile mode.
#[derive(Clone, Debug)]
pub struct AngledGradient {
    colors: Vec<Color>,
    stops: Option<Vec<f64>>,
    angle: NormalizedAngle,
    tile_mode: TileMode,
}

impl AngledGradient {
    /// Start building a gradient over `colors`
    pub fn builder(colors: impl Into<Vec<Color>>) -> AngledGradientBuilder {
        AngledGradientBuilder {
            colors: colors.into(),
            stops: None,
            degrees: 0.0,
            convention: AngleConvention::Cartesian,
            tile_mode: TileMode::default(),
        }
    }

    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    pub fn stops(&self) -> Option<&[f64]> {
        self.stops.as_deref()
    }

    pub fn angle(&self) -> NormalizedAngle {
        self.angle
    }

    pub fn tile_mode(&self) -> TileMode {
        self.tile_mode
    }

    /// The gradient line across a box of `size`
    pub fn line(&self, size: Size) -> GradientLine {
        gradient_line(self.angle, size)
    }

    /// Resolve against a box of `size`
    pub fn shader(&self, size: Size) -> LinearShader {
        let line = self.line(size);
        crate::log::debug!(
            angle = self.angle.degrees(),
            width = size.width(),
            height = size.height(),
            start_x = line.start.x,
            start_y = line.start.y,
            end_x = line.end.x,
            end_y = line.end.y,
            "resolved gradient line"
        );
        LinearShader {
            colors: self.colors.clone(),
            stops: self.stops.clone(),
            from: line.start,
            to: line.end,
            tile_mode: self.tile_mode,
        }
    }
}

impl PartialEq for AngledGradient {
    fn eq(&self, other: &Self) -> bool {
        self.colors == other.colors
            && self.stops == other.stops
            && self.angle == other.angle
            && self.tile_mode == other.tile_mode
    }
}

// Stops are validated finite, so equality is total.
impl Eq for AngledGradient {}

impl Hash for AngledGradient {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.colors.hash(state);
        match &self.stops {
            Some(stops) => {
                1u8.hash(state);
                stops.len().hash(state);
                for stop in stops {
                    stop.to_bits().hash(state);
                }
            }
            None => 0u8.hash(state),
        }
        self.angle.hash(state);
        self.tile_mode.hash(state);
    }
}

impl fmt::Display for AngledGradient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LinearGradient(colors=[")?;
        for (i, color) in self.colors.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{color}")?;
        }
        write!(f, "], stops=")?;
        match &self.stops {
            Some(stops) => {
                write!(f, "[")?;
                for (i, stop) in stops.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{stop}")?;
                }
                write!(f, "]")?;
            }
            None => write!(f, "null")?,
        }
        write!(f, ", angle={}, tileMode={})", self.angle, self.tile_mode)
    }
}

/// Builder for [`AngledGradient`]; all validation happens in [`build`](Self::build).
#[derive(Clone, Debug)]
pub struct AngledGradientBuilder {
    colors: Vec<Color>,
    stops: Option<Vec<f64>>,
    degrees: f64,
    convention: AngleConvention,
    tile_mode: TileMode,
}

impl AngledGradientBuilder {
    /// One stop per color, ascending, each in [0, 1]
    pub fn stops(mut self, stops: impl Into<Vec<f64>>) -> Self {
        self.stops = Some(stops.into());
        self
    }

    pub fn angle(mut self, degrees: f64, convention: AngleConvention) -> Self {
        self.degrees = degrees;
        self.convention = convention;
        self
    }

    pub fn tile_mode(mut self, tile_mode: TileMode) -> Self {
        self.tile_mode = tile_mode;
        self
    }

    pub fn build(self) -> Result<AngledGradient, GradientError> {
        if self.colors.len() < 2 {
            return Err(GradientError::TooFewColors {
                count: self.colors.len(),
            });
        }
        let stops = match self.stops {
            Some(stops) => Some(validate_stops(stops, self.colors.len())?),
            None => None,
        };
        let angle = NormalizedAngle::new(self.degrees, self.convention)?;
        Ok(AngledGradient {
            colors: self.colors,
            stops,
            angle,
            tile_mode: self.tile_mode,
        })
    }
}

fn validate_stops(stops: Vec<f64>, colors: usize) -> Result<Vec<f64>, GradientError> {
    if stops.len() != colors {
        return Err(GradientError::StopCountMismatch {
            colors,
            stops: stops.len(),
        });
    }
    let mut previous: Option<f64> = None;
    let mut checked = Vec::with_capacity(stops.len());
    for (index, value) in stops.into_iter().enumerate() {
        if !(0.0..=1.0).contains(&value) {
            return Err(GradientError::StopOutOfRange { index, value });
        }
        match previous {
            Some(previous) if value < previous => {
                return Err(GradientError::StopsNotAscending {
                    index,
                    value,
                    previous,
                });
            }
            _ => {}
        }
        previous = Some(value);
        // fold -0.0 into 0.0 so equal stops hash alike
        checked.push(value + 0.0);
    }
    Ok(checked)
}

/// A gradient resolved for one box: what a linear-gradient fill primitive consumes.
#[derive(Clone, Debug, PartialEq)]
pub struct LinearShader {
    colors: Vec<Color>,
    stops: Option<Vec<f64>>,
    from: DVec2,
    to: DVec2,
    tile_mode: TileMode,
}

impl LinearShader {
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    pub fn stops(&self) -> Option<&[f64]> {
        self.stops.as_deref()
    }

    pub fn from(&self) -> DVec2 {
        self.from
    }

    pub fn to(&self) -> DVec2 {
        self.to
    }

    pub fn line(&self) -> GradientLine {
        GradientLine::new(self.from, self.to)
    }

    pub fn tile_mode(&self) -> TileMode {
        self.tile_mode
    }

    /// Explicit stops, or the even spread `i / (n - 1)` used when none were given
    pub fn effective_stops(&self) -> Vec<f64> {
        match &self.stops {
            Some(stops) => stops.clone(),
            None => {
                let last = (self.colors.len() - 1) as f64;
                (0..self.colors.len()).map(|i| i as f64 / last).collect()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::dvec2;
    use std::collections::hash_map::DefaultHasher;

    const BLUE: Color = Color::from_argb(0xff3690EA);
    const LIGHT_BLUE: Color = Color::from_argb(0xff94B3FF);

    fn hash_of(g: &AngledGradient) -> u64 {
        let mut hasher = DefaultHasher::new();
        g.hash(&mut hasher);
        hasher.finish()
    }

    fn demo(degrees: f64) -> AngledGradient {
        AngledGradient::builder([BLUE, LIGHT_BLUE])
            .stops([0.1205, 0.8785])
            .angle(degrees, AngleConvention::Cartesian)
            .build()
            .unwrap()
    }

    #[test]
    fn defaults() {
        let g = AngledGradient::builder([BLUE, LIGHT_BLUE]).build().unwrap();
        assert_eq!(g.stops(), None);
        assert_eq!(g.angle(), NormalizedAngle::ZERO);
        assert_eq!(g.tile_mode(), TileMode::Clamp);
    }

    #[test]
    fn rejects_single_color() {
        let err = AngledGradient::builder([BLUE]).build().unwrap_err();
        assert_eq!(err, GradientError::TooFewColors { count: 1 });
    }

    #[test]
    fn rejects_stop_count_mismatch() {
        let err = AngledGradient::builder([BLUE, LIGHT_BLUE])
            .stops([0.0, 0.5, 1.0])
            .build()
            .unwrap_err();
        assert_eq!(err, GradientError::StopCountMismatch { colors: 2, stops: 3 });
    }

    #[test]
    fn rejects_stop_out_of_range() {
        let err = AngledGradient::builder([BLUE, LIGHT_BLUE])
            .stops([0.0, 1.5])
            .build()
            .unwrap_err();
        assert_eq!(err, GradientError::StopOutOfRange { index: 1, value: 1.5 });

        let err = AngledGradient::builder([BLUE, LIGHT_BLUE])
            .stops([f64::NAN, 1.0])
            .build()
            .unwrap_err();
        assert!(matches!(err, GradientError::StopOutOfRange { index: 0, .. }));
    }

    #[test]
    fn rejects_descending_stops() {
        let err = AngledGradient::builder([BLUE, LIGHT_BLUE, BLUE])
            .stops([0.0, 0.6, 0.4])
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            GradientError::StopsNotAscending {
                index: 2,
                value: 0.4,
                previous: 0.6
            }
        );
    }

    #[test]
    fn accepts_repeated_stops() {
        let g = AngledGradient::builder([BLUE, LIGHT_BLUE, BLUE])
            .stops([0.0, 0.5, 0.5])
            .build();
        assert!(g.is_ok());
    }

    #[test]
    fn rejects_non_finite_angle() {
        let err = AngledGradient::builder([BLUE, LIGHT_BLUE])
            .angle(f64::NAN, AngleConvention::Css)
            .build()
            .unwrap_err();
        assert!(matches!(err, GradientError::InvalidAngle { .. }));
    }

    #[test]
    fn equal_descriptors_hash_alike() {
        let a = demo(45.0);
        let b = demo(405.0);
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
    }

    #[test]
    fn any_field_breaks_equality() {
        let base = demo(45.0);
        assert_ne!(base, demo(46.0));

        let other_colors = AngledGradient::builder([BLUE, BLUE])
            .stops([0.1205, 0.8785])
            .angle(45.0, AngleConvention::Cartesian)
            .build()
            .unwrap();
        assert_ne!(base, other_colors);

        let no_stops = AngledGradient::builder([BLUE, LIGHT_BLUE])
            .angle(45.0, AngleConvention::Cartesian)
            .build()
            .unwrap();
        assert_ne!(base, no_stops);

        let mirrored = AngledGradient::builder([BLUE, LIGHT_BLUE])
            .stops([0.1205, 0.8785])
            .angle(45.0, AngleConvention::Cartesian)
            .tile_mode(TileMode::Mirror)
            .build()
            .unwrap();
        assert_ne!(base, mirrored);
    }

    #[test]
    fn css_and_cartesian_can_be_equal() {
        let css = AngledGradient::builder([BLUE, LIGHT_BLUE])
            .angle(45.0, AngleConvention::Css)
            .build()
            .unwrap();
        let cartesian = AngledGradient::builder([BLUE, LIGHT_BLUE])
            .angle(45.0, AngleConvention::Cartesian)
            .build()
            .unwrap();
        assert_eq!(css, cartesian);
    }

    #[test]
    fn negative_zero_stop_hashes_like_zero() {
        let a = AngledGradient::builder([BLUE, LIGHT_BLUE])
            .stops([-0.0, 1.0])
            .build()
            .unwrap();
        let b = AngledGradient::builder([BLUE, LIGHT_BLUE])
            .stops([0.0, 1.0])
            .build()
            .unwrap();
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
    }

    #[test]
    fn display_lists_all_fields() {
        assert_eq!(
            demo(-315.0).to_string(),
            "LinearGradient(colors=[#FF3690EA, #FF94B3FF], stops=[0.1205, 0.8785], angle=45, tileMode=Clamp)"
        );
        let plain = AngledGradient::builder([Color::RED, Color::BLUE])
            .tile_mode(TileMode::Decal)
            .build()
            .unwrap();
        assert_eq!(
            plain.to_string(),
            "LinearGradient(colors=[#FFFF0000, #FF0000FF], stops=null, angle=0, tileMode=Decal)"
        );
    }

    #[test]
    fn shader_carries_descriptor_and_line() {
        let g = demo(0.0);
        let shader = g.shader(Size::try_new(200.0, 100.0).unwrap());
        assert_eq!(shader.colors(), &[BLUE, LIGHT_BLUE]);
        assert_eq!(shader.stops(), Some(&[0.1205, 0.8785][..]));
        assert_eq!(shader.tile_mode(), TileMode::Clamp);
        assert!(shader.from().distance(dvec2(0.0, 50.0)) < 1e-9);
        assert!(shader.to().distance(dvec2(200.0, 50.0)) < 1e-9);
    }

    #[test]
    fn effective_stops_spread_evenly() {
        let g = AngledGradient::builder([Color::RED, Color::GREEN, Color::BLUE])
            .build()
            .unwrap();
        let shader = g.shader(Size::try_new(10.0, 10.0).unwrap());
        assert_eq!(shader.effective_stops(), vec![0.0, 0.5, 1.0]);
        let explicit = demo(0.0).shader(Size::try_new(10.0, 10.0).unwrap());
        assert_eq!(explicit.effective_stops(), vec![0.1205, 0.8785]);
    }
}
