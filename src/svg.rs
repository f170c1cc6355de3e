//! SVG output for angled gradients.
//!
//! A resolved [`LinearShader`] maps directly onto an SVG `<linearGradient>`
//! in `userSpaceOnUse` units, so the computed start/end points are written
//! out verbatim and any SVG viewer does the color interpolation.

use glam::{DVec2, dvec2};

use crate::brush::{AngledGradient, LinearShader, TileMode};
use crate::color::Color;
use crate::types::Size;

/// Options for SVG output
#[derive(Debug, Clone)]
pub struct SvgOptions {
    /// Digits after the decimal point for coordinates
    pub precision: usize,
    /// Prefix for generated `<linearGradient>` ids
    pub id_prefix: String,
    /// Fill behind everything, if any
    pub background: Option<Color>,
    /// Label color for gallery rows
    pub text_color: Color,
    pub font_size: f64,
}

impl Default for SvgOptions {
    fn default() -> Self {
        SvgOptions {
            precision: 2,
            id_prefix: "gradient".to_string(),
            background: None,
            text_color: Color::WHITE,
            font_size: 14.0,
        }
    }
}

impl SvgOptions {
    pub(crate) fn gradient_id(&self, index: usize) -> String {
        format!("{}{}", escape_xml(&self.id_prefix), index)
    }
}

/// SVG `spreadMethod` for a tile mode.
///
/// SVG has no transparent-outside mode, so `Decal` falls back to `pad`.
pub fn spread_method(tile_mode: TileMode) -> &'static str {
    match tile_mode {
        TileMode::Clamp => "pad",
        TileMode::Repeat => "repeat",
        TileMode::Mirror => "reflect",
        TileMode::Decal => {
            crate::log::warn!("decal tile mode has no SVG spreadMethod, using pad");
            "pad"
        }
    }
}

/// Format a coordinate with fixed precision, never printing `-0.00`.
pub(crate) fn fmt_num(value: f64, precision: usize) -> String {
    let half_ulp = 0.5 * 10f64.powi(-(precision as i32));
    let value = if value.abs() < half_ulp { 0.0 } else { value };
    format!("{:.*}", precision, value)
}

pub(crate) fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            c => out.push(c),
        }
    }
    out
}

/// A `<linearGradient>` element for `shader`, with its line moved by `origin`.
pub fn linear_gradient_def(
    id: &str,
    shader: &LinearShader,
    origin: DVec2,
    options: &SvgOptions,
) -> String {
    let line = shader.line().translated(origin);
    let p = options.precision;

    let mut out = String::new();
    out.push_str(&format!(
        r#"<linearGradient id="{}" gradientUnits="userSpaceOnUse" x1="{}" y1="{}" x2="{}" y2="{}" spreadMethod="{}">"#,
        id,
        fmt_num(line.start.x, p),
        fmt_num(line.start.y, p),
        fmt_num(line.end.x, p),
        fmt_num(line.end.y, p),
        spread_method(shader.tile_mode()),
    ));
    out.push('\n');
    for (color, offset) in shader.colors().iter().zip(shader.effective_stops()) {
        if color.is_opaque() {
            out.push_str(&format!(
                r#"  <stop offset="{}" stop-color="{}"/>"#,
                offset,
                color.to_rgb_string()
            ));
        } else {
            out.push_str(&format!(
                r#"  <stop offset="{}" stop-color="{}" stop-opacity="{}"/>"#,
                offset,
                color.to_rgb_string(),
                fmt_num(color.opacity(), 3)
            ));
        }
        out.push('\n');
    }
    out.push_str("</linearGradient>\n");
    out
}

/// A `<rect>` at `origin` filled with gradient `id`
pub(crate) fn gradient_rect(id: &str, origin: DVec2, size: Size, options: &SvgOptions) -> String {
    let p = options.precision;
    format!(
        "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"url(#{})\"/>\n",
        fmt_num(origin.x, p),
        fmt_num(origin.y, p),
        fmt_num(size.width(), p),
        fmt_num(size.height(), p),
        id
    )
}

/// Wrap `body` in an `<svg>` root of the given size.
pub(crate) fn svg_document(width: f64, height: f64, body: &str, options: &SvgOptions) -> String {
    let p = options.precision;
    let mut out = String::new();
    out.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">\n",
        w = fmt_num(width, p),
        h = fmt_num(height, p),
    ));
    if let Some(background) = options.background {
        out.push_str(&format!(
            "<rect width=\"100%\" height=\"100%\" fill=\"{}\"/>\n",
            background.to_rgb_string()
        ));
    }
    out.push_str(body);
    out.push_str("</svg>\n");
    out
}

/// Render a single box of `size` filled with `gradient` as a standalone SVG document.
pub fn render_gradient_box(gradient: &AngledGradient, size: Size, options: &SvgOptions) -> String {
    let shader = gradient.shader(size);
    let id = options.gradient_id(0);
    crate::log::debug!(%gradient, width = size.width(), height = size.height(), "rendering gradient box");

    let mut body = String::from("<defs>\n");
    body.push_str(&linear_gradient_def(&id, &shader, DVec2::ZERO, options));
    body.push_str("</defs>\n");
    body.push_str(&gradient_rect(&id, dvec2(0.0, 0.0), size, options));

    svg_document(size.width(), size.height(), &body, options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::angle::AngleConvention;

    fn two_tone(degrees: f64, tile_mode: TileMode) -> AngledGradient {
        AngledGradient::builder([Color::RED, Color::BLUE])
            .angle(degrees, AngleConvention::Cartesian)
            .tile_mode(tile_mode)
            .build()
            .unwrap()
    }

    #[test]
    fn spread_methods() {
        assert_eq!(spread_method(TileMode::Clamp), "pad");
        assert_eq!(spread_method(TileMode::Repeat), "repeat");
        assert_eq!(spread_method(TileMode::Mirror), "reflect");
        assert_eq!(spread_method(TileMode::Decal), "pad");
    }

    #[test]
    fn fmt_num_never_prints_negative_zero() {
        assert_eq!(fmt_num(-1e-12, 2), "0.00");
        assert_eq!(fmt_num(-0.004, 2), "0.00");
        assert_eq!(fmt_num(-0.006, 2), "-0.01");
        assert_eq!(fmt_num(171.0, 2), "171.00");
    }

    #[test]
    fn escape_xml_special_chars() {
        assert_eq!(escape_xml(r#"a<b>&"c'"#), "a&lt;b&gt;&amp;&quot;c&apos;");
    }

    #[test]
    fn gradient_def_is_offset_by_origin() {
        let shader = two_tone(0.0, TileMode::Clamp).shader(Size::try_new(200.0, 100.0).unwrap());
        let def = linear_gradient_def("g", &shader, dvec2(10.0, 20.0), &SvgOptions::default());
        assert!(def.contains(r#"x1="10.00" y1="70.00" x2="210.00" y2="70.00""#), "{def}");
    }

    #[test]
    fn translucent_stops_carry_opacity() {
        let g = AngledGradient::builder([Color::from_argb(0x80FF0000), Color::BLUE])
            .stops([0.25, 0.75])
            .build()
            .unwrap();
        let shader = g.shader(Size::try_new(10.0, 10.0).unwrap());
        let def = linear_gradient_def("g", &shader, DVec2::ZERO, &SvgOptions::default());
        assert!(
            def.contains(r#"<stop offset="0.25" stop-color="rgb(255,0,0)" stop-opacity="0.502"/>"#),
            "{def}"
        );
        assert!(def.contains(r#"<stop offset="0.75" stop-color="rgb(0,0,255)"/>"#), "{def}");
    }

    #[test]
    fn box_document_structure() {
        let options = SvgOptions {
            background: Some(Color::BLACK),
            ..SvgOptions::default()
        };
        let svg = render_gradient_box(
            &two_tone(90.0, TileMode::Mirror),
            Size::try_new(342.0, 155.0).unwrap(),
            &options,
        );
        assert!(svg.starts_with("<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"342.00\" height=\"155.00\""));
        assert!(svg.contains("<rect width=\"100%\" height=\"100%\" fill=\"rgb(0,0,0)\"/>"));
        assert!(svg.contains(r#"x1="171.00" y1="155.00" x2="171.00" y2="0.00" spreadMethod="reflect""#), "{svg}");
        assert!(svg.contains("fill=\"url(#gradient0)\""));
        assert!(svg.trim_end().ends_with("</svg>"));
    }
}
