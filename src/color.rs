//! Colors packed as `0xAARRGGBB`, the literal form the host UI toolkit uses
//! (`Color(0xff3690EA)`).

use std::fmt;
use std::str::FromStr;

use crate::errors::GradientError;

/// A non-premultiplied sRGB color with 8-bit channels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Color(u32);

impl Color {
    pub const TRANSPARENT: Color = Color(0x0000_0000);
    pub const BLACK: Color = Color(0xFF00_0000);
    pub const WHITE: Color = Color(0xFFFF_FFFF);
    pub const RED: Color = Color(0xFFFF_0000);
    pub const GREEN: Color = Color(0xFF00_FF00);
    pub const BLUE: Color = Color(0xFF00_00FF);

    #[inline]
    pub const fn from_argb(argb: u32) -> Self {
        Color(argb)
    }

    #[inline]
    pub const fn from_rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Color((a as u32) << 24 | (r as u32) << 16 | (g as u32) << 8 | b as u32)
    }

    #[inline]
    pub const fn argb(self) -> u32 {
        self.0
    }

    #[inline]
    pub const fn alpha(self) -> u8 {
        (self.0 >> 24) as u8
    }

    #[inline]
    pub const fn red(self) -> u8 {
        (self.0 >> 16) as u8
    }

    #[inline]
    pub const fn green(self) -> u8 {
        (self.0 >> 8) as u8
    }

    #[inline]
    pub const fn blue(self) -> u8 {
        self.0 as u8
    }

    pub fn is_opaque(self) -> bool {
        self.alpha() == 0xFF
    }

    /// Alpha as a fraction in [0, 1]
    pub fn opacity(self) -> f64 {
        self.alpha() as f64 / 255.0
    }

    /// `rgb(r,g,b)` without alpha, for SVG `stop-color`
    pub fn to_rgb_string(self) -> String {
        format!("rgb({},{},{})", self.red(), self.green(), self.blue())
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:08X}", self.0)
    }
}

impl FromStr for Color {
    type Err = GradientError;

    /// Parse `#RGB`, `#RRGGBB` (opaque) or `#AARRGGBB`. The leading `#` is optional.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || GradientError::InvalidColor {
            input: s.to_string(),
        };
        let hex = s.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let value = u32::from_str_radix(hex, 16).map_err(|_| invalid())?;
        match hex.len() {
            3 => {
                let r = (value >> 8) & 0xF;
                let g = (value >> 4) & 0xF;
                let b = value & 0xF;
                Ok(Color::from_rgba(
                    (r * 0x11) as u8,
                    (g * 0x11) as u8,
                    (b * 0x11) as u8,
                    0xFF,
                ))
            }
            6 => Ok(Color(0xFF00_0000 | value)),
            8 => Ok(Color(value)),
            _ => Err(invalid()),
        }
    }
}

impl From<u32> for Color {
    fn from(argb: u32) -> Self {
        Color(argb)
    }
}
