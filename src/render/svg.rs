//! Typed SVG elements and XML serialization.
//!
//! The draw engine builds a small DOM out of these types and serializes it in
//! one pass. Only the elements and attributes the gauge actually emits are
//! modeled. Numbers are formatted `%g`-style (six significant figures,
//! trailing zeros trimmed) so the output stays compact and stable.

use std::fmt::Write;

use glam::DVec2;

/// Root `<svg>` element with a fixed internal coordinate system.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Svg {
    /// Display width in device pixels (the host viewport).
    pub width: Option<f64>,
    /// Display height in device pixels (the host viewport).
    pub height: Option<f64>,
    pub view_box: Option<String>,
    pub children: Vec<SvgNode>,
}

/// Any SVG node the gauge emits.
#[derive(Debug, Clone, PartialEq)]
pub enum SvgNode {
    Group(Group),
    Defs(Defs),
    ClipPath(ClipPath),
    Rect(Rect),
    Polygon(Polygon),
    Path(Path),
    Text(Text),
}

/// `<g>` element.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Group {
    pub class: Option<String>,
    pub transform: Option<String>,
    /// `url(#id)` reference restricting where children paint.
    pub clip_path: Option<String>,
    pub children: Vec<SvgNode>,
}

/// `<defs>` element.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Defs {
    pub children: Vec<SvgNode>,
}

/// `<clipPath>` element.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClipPath {
    pub id: String,
    pub children: Vec<SvgNode>,
}

/// `<rect>` element.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Rect {
    pub width: f64,
    pub height: f64,
    pub fill: Option<String>,
    pub transform: Option<String>,
}

/// `<polygon>` element.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Polygon {
    pub points: String,
    pub fill: Option<String>,
    pub stroke: Option<String>,
    pub stroke_width: Option<f64>,
    pub transform: Option<String>,
}

/// `<path>` element.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Path {
    pub d: String,
    pub fill: Option<String>,
    pub stroke: Option<String>,
    pub stroke_width: Option<f64>,
    pub transform: Option<String>,
}

/// `<text>` element.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Text {
    pub fill: Option<String>,
    pub stroke: Option<String>,
    pub font_family: Option<String>,
    pub font_size: Option<String>,
    pub transform: Option<String>,
    pub content: String,
}

impl Svg {
    /// Serialize to a standalone SVG document string.
    pub fn to_svg_string(&self) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = self.write_xml(&mut out);
        out
    }

    fn write_xml(&self, out: &mut String) -> std::fmt::Result {
        out.push_str(r#"<svg xmlns="http://www.w3.org/2000/svg""#);
        if let Some(width) = self.width {
            write!(out, r#" width="{}""#, fmt_num(width))?;
        }
        if let Some(height) = self.height {
            write!(out, r#" height="{}""#, fmt_num(height))?;
        }
        if let Some(view_box) = &self.view_box {
            write!(out, r#" viewBox="{}""#, view_box)?;
        }
        out.push('>');
        for child in &self.children {
            write_node(child, out)?;
        }
        out.push_str("</svg>");
        Ok(())
    }
}

fn write_node(node: &SvgNode, out: &mut String) -> std::fmt::Result {
    match node {
        SvgNode::Group(group) => {
            out.push_str("<g");
            attr_str(out, "class", &group.class)?;
            attr_str(out, "clip-path", &group.clip_path)?;
            attr_str(out, "transform", &group.transform)?;
            out.push('>');
            for child in &group.children {
                write_node(child, out)?;
            }
            out.push_str("</g>");
        }
        SvgNode::Defs(defs) => {
            out.push_str("<defs>");
            for child in &defs.children {
                write_node(child, out)?;
            }
            out.push_str("</defs>");
        }
        SvgNode::ClipPath(clip) => {
            write!(out, r#"<clipPath id="{}">"#, clip.id)?;
            for child in &clip.children {
                write_node(child, out)?;
            }
            out.push_str("</clipPath>");
        }
        SvgNode::Rect(rect) => {
            out.push_str("<rect");
            write!(out, r#" width="{}""#, fmt_num(rect.width))?;
            write!(out, r#" height="{}""#, fmt_num(rect.height))?;
            attr_str(out, "fill", &rect.fill)?;
            attr_str(out, "transform", &rect.transform)?;
            out.push_str("/>");
        }
        SvgNode::Polygon(polygon) => {
            out.push_str("<polygon");
            write!(out, r#" points="{}""#, polygon.points)?;
            attr_str(out, "fill", &polygon.fill)?;
            attr_str(out, "stroke", &polygon.stroke)?;
            attr_num(out, "stroke-width", polygon.stroke_width)?;
            attr_str(out, "transform", &polygon.transform)?;
            out.push_str("/>");
        }
        SvgNode::Path(path) => {
            out.push_str("<path");
            write!(out, r#" d="{}""#, path.d)?;
            attr_str(out, "fill", &path.fill)?;
            attr_str(out, "stroke", &path.stroke)?;
            attr_num(out, "stroke-width", path.stroke_width)?;
            attr_str(out, "transform", &path.transform)?;
            out.push_str("/>");
        }
        SvgNode::Text(text) => {
            out.push_str("<text");
            attr_str(out, "fill", &text.fill)?;
            attr_str(out, "stroke", &text.stroke)?;
            attr_str(out, "font-family", &text.font_family)?;
            attr_str(out, "font-size", &text.font_size)?;
            attr_str(out, "transform", &text.transform)?;
            out.push('>');
            escape_text(&text.content, out);
            out.push_str("</text>");
        }
    }
    Ok(())
}

fn attr_str(out: &mut String, name: &str, value: &Option<String>) -> std::fmt::Result {
    if let Some(value) = value {
        write!(out, r#" {}="{}""#, name, value)?;
    }
    Ok(())
}

fn attr_num(out: &mut String, name: &str, value: Option<f64>) -> std::fmt::Result {
    if let Some(value) = value {
        write!(out, r#" {}="{}""#, name, fmt_num(value))?;
    }
    Ok(())
}

/// Escape text content for XML. Labels are plain numbers plus an optional
/// currency glyph, but the measurer seam means arbitrary strings can reach
/// here through custom hosts.
fn escape_text(text: &str, out: &mut String) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
}

/// `translate(x)` transform for the horizontal symbol row.
pub(crate) fn translate_x(x: f64) -> String {
    format!("translate({})", fmt_num(x))
}

/// `translate(x,y)` transform.
pub(crate) fn translate(offset: DVec2) -> String {
    format!("translate({},{})", fmt_num(offset.x), fmt_num(offset.y))
}

/// Format a number matching C's `%g` (6 significant figures, trailing zeros
/// trimmed).
pub(crate) fn fmt_num(value: f64) -> String {
    const SIG_FIGS: i32 = 6;

    if value == 0.0 {
        return "0".to_string();
    }

    let magnitude = value.abs().log10().floor() as i32;
    let scale = 10_f64.powi(SIG_FIGS - 1 - magnitude);
    let rounded = (value * scale).round() / scale;

    let decimals = (SIG_FIGS - 1 - magnitude).max(0) as usize;
    let s = format!("{:.prec$}", rounded, prec = decimals);
    let s = s.trim_end_matches('0');
    let s = s.trim_end_matches('.');
    s.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::dvec2;

    #[test]
    fn fmt_num_trims_trailing_zeros() {
        assert_eq!(fmt_num(0.0), "0");
        assert_eq!(fmt_num(2.0), "2");
        assert_eq!(fmt_num(2.5), "2.5");
        assert_eq!(fmt_num(40.16), "40.16");
        assert_eq!(fmt_num(263.3799999999999), "263.38");
        assert_eq!(fmt_num(-2.0), "-2");
        assert_eq!(fmt_num(442.29999999999995), "442.3");
    }

    #[test]
    fn fmt_num_limits_significant_figures() {
        assert_eq!(fmt_num(1234.5678), "1234.57");
        assert_eq!(fmt_num(0.000123456789), "0.000123457");
    }

    #[test]
    fn transforms_format_like_the_rest_of_the_output() {
        assert_eq!(translate_x(263.38), "translate(263.38)");
        assert_eq!(translate(dvec2(-1.0, 24.0)), "translate(-1,24)");
    }

    #[test]
    fn serializes_nested_structure() {
        let svg = Svg {
            width: Some(200.0),
            height: Some(100.0),
            view_box: Some("0 0 442.3 80.32".to_string()),
            children: vec![SvgNode::Group(Group {
                transform: Some("translate(0,4)".to_string()),
                children: vec![SvgNode::Rect(Rect {
                    width: 2.0,
                    height: 88.32,
                    fill: Some("#666666".to_string()),
                    transform: None,
                })],
                ..Default::default()
            })],
        };
        assert_eq!(
            svg.to_svg_string(),
            concat!(
                r#"<svg xmlns="http://www.w3.org/2000/svg" width="200" height="100" viewBox="0 0 442.3 80.32">"#,
                r##"<g transform="translate(0,4)"><rect width="2" height="88.32" fill="#666666"/></g>"##,
                "</svg>",
            )
        );
    }

    #[test]
    fn escapes_text_content() {
        let svg = Svg {
            children: vec![SvgNode::Text(Text {
                content: "1 < 2 & 3 > 2".to_string(),
                ..Default::default()
            })],
            ..Default::default()
        };
        assert!(
            svg.to_svg_string()
                .contains("<text>1 &lt; 2 &amp; 3 &gt; 2</text>")
        );
    }

    #[test]
    fn skips_unset_attributes() {
        let svg = Svg {
            children: vec![SvgNode::Polygon(Polygon {
                points: "0 0 1 1".to_string(),
                ..Default::default()
            })],
            ..Default::default()
        };
        assert_eq!(
            svg.to_svg_string(),
            r#"<svg xmlns="http://www.w3.org/2000/svg"><polygon points="0 0 1 1"/></svg>"#
        );
    }
}
