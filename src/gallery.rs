//! Demo gallery: one labelled gradient box per angle, stacked vertically.
//!
//! The defaults reproduce the reference screen: a 342x155 box with two blues
//! at stops 0.1205 / 0.8785 on a blue background, for twelve angles covering
//! every quadrant plus the 360° and 390° wrap-arounds.

use glam::dvec2;

use crate::angle::AngleConvention;
use crate::brush::{AngledGradient, TileMode};
use crate::color::Color;
use crate::errors::GradientError;
use crate::svg::{SvgOptions, escape_xml, fmt_num, gradient_rect, linear_gradient_def, svg_document};
use crate::types::Size;

/// Angles shown by the default gallery
pub const DEMO_ANGLES: [f64; 12] = [
    0.0, 22.5, 45.0, 60.0, 90.0, 135.0, 180.0, 225.0, 270.0, 315.0, 360.0, 390.0,
];

pub const DEMO_COLORS: [Color; 2] = [Color::from_argb(0xff3690EA), Color::from_argb(0xff94B3FF)];

pub const DEMO_STOPS: [f64; 2] = [0.1205, 0.8785];

/// What the gallery draws and how it is laid out
#[derive(Debug, Clone)]
pub struct GalleryConfig {
    pub angles: Vec<f64>,
    pub convention: AngleConvention,
    pub box_width: f64,
    pub box_height: f64,
    /// Space around each box
    pub padding: f64,
    /// Room reserved right of the boxes for the `angle: ...` labels
    pub label_width: f64,
    pub colors: Vec<Color>,
    pub stops: Option<Vec<f64>>,
    pub tile_mode: TileMode,
    pub background: Color,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        GalleryConfig {
            angles: DEMO_ANGLES.to_vec(),
            convention: AngleConvention::Cartesian,
            box_width: 342.0,
            box_height: 155.0,
            padding: 16.0,
            label_width: 120.0,
            colors: DEMO_COLORS.to_vec(),
            stops: Some(DEMO_STOPS.to_vec()),
            tile_mode: TileMode::Clamp,
            background: Color::BLUE,
        }
    }
}

impl GalleryConfig {
    /// One gradient per configured angle, in order
    pub fn gradients(&self) -> Result<Vec<AngledGradient>, GradientError> {
        self.angles
            .iter()
            .map(|&degrees| {
                let builder = AngledGradient::builder(self.colors.clone())
                    .angle(degrees, self.convention)
                    .tile_mode(self.tile_mode);
                match &self.stops {
                    Some(stops) => builder.stops(stops.clone()).build(),
                    None => builder.build(),
                }
            })
            .collect()
    }

    fn box_size(&self) -> Result<Size, GradientError> {
        Size::try_new(self.box_width, self.box_height)
            .map_err(|e| GradientError::invalid_size(self.box_width, self.box_height, e))
    }
}

/// Render the gallery as one SVG document.
pub fn render_gallery(config: &GalleryConfig, options: &SvgOptions) -> Result<String, GradientError> {
    let size = config.box_size()?;
    let gradients = config.gradients()?;
    let p = options.precision;

    let mut options = options.clone();
    options.background.get_or_insert(config.background);

    let row_height = size.height() + 2.0 * config.padding;
    let width = size.width() + 2.0 * config.padding + config.label_width;
    let height = row_height * gradients.len() as f64;

    crate::log::debug!(
        rows = gradients.len(),
        width,
        height,
        "rendering gradient gallery"
    );

    let mut defs = String::from("<defs>\n");
    let mut rows = String::new();
    for (i, (gradient, degrees)) in gradients.iter().zip(&config.angles).enumerate() {
        let id = options.gradient_id(i);
        let origin = dvec2(config.padding, i as f64 * row_height + config.padding);

        defs.push_str(&linear_gradient_def(&id, &gradient.shader(size), origin, &options));
        rows.push_str(&gradient_rect(&id, origin, size, &options));

        let label = format!("angle: {degrees}");
        rows.push_str(&format!(
            "<text x=\"{}\" y=\"{}\" font-size=\"{}\" fill=\"{}\" dominant-baseline=\"middle\">{}</text>\n",
            fmt_num(origin.x + size.width() + config.padding, p),
            fmt_num(origin.y + size.height() / 2.0, p),
            options.font_size,
            options.text_color.to_rgb_string(),
            escape_xml(&label),
        ));
    }
    defs.push_str("</defs>\n");
    defs.push_str(&rows);

    Ok(svg_document(width, height, &defs, &options))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_gallery_has_a_row_per_angle() {
        let svg = render_gallery(&GalleryConfig::default(), &SvgOptions::default()).unwrap();
        assert_eq!(svg.matches("<linearGradient ").count(), DEMO_ANGLES.len());
        assert_eq!(svg.matches("<text ").count(), DEMO_ANGLES.len());
        assert!(svg.contains(">angle: 22.5</text>"));
        assert!(svg.contains(">angle: 390</text>"));
        // 12 rows of 155 + 2 * 16
        assert!(svg.contains(r#"width="494.00" height="2244.00""#), "{svg}");
        assert!(svg.contains("fill=\"rgb(0,0,255)\""));
    }

    #[test]
    fn first_row_is_horizontal() {
        let svg = render_gallery(&GalleryConfig::default(), &SvgOptions::default()).unwrap();
        assert!(
            svg.contains(r#"id="gradient0" gradientUnits="userSpaceOnUse" x1="16.00" y1="93.50" x2="358.00" y2="93.50""#),
            "{svg}"
        );
    }

    #[test]
    fn wrapped_angles_render_identically() {
        let gradients = GalleryConfig::default().gradients().unwrap();
        // 0 and 360 wrap to the same angle, 390 wraps to 30
        assert_eq!(gradients[0], gradients[10]);
        assert_eq!(gradients[11].angle().degrees(), 30.0);
    }

    #[test]
    fn invalid_box_is_reported() {
        let config = GalleryConfig {
            box_height: 0.0,
            ..GalleryConfig::default()
        };
        let err = render_gallery(&config, &SvgOptions::default()).unwrap_err();
        assert!(matches!(err, GradientError::InvalidSize { height, .. } if height == 0.0));
    }

    #[test]
    fn mismatched_stops_are_reported() {
        let config = GalleryConfig {
            stops: Some(vec![0.5]),
            ..GalleryConfig::default()
        };
        let err = render_gallery(&config, &SvgOptions::default()).unwrap_err();
        assert_eq!(err, GradientError::StopCountMismatch { colors: 2, stops: 1 });
    }

    #[test]
    fn explicit_background_wins() {
        let options = SvgOptions {
            background: Some(Color::BLACK),
            ..SvgOptions::default()
        };
        let svg = render_gallery(&GalleryConfig::default(), &options).unwrap();
        assert!(svg.contains("<rect width=\"100%\" height=\"100%\" fill=\"rgb(0,0,0)\"/>"));
    }
}
